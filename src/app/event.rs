use crossterm::event::Event as CrosstermEvent;

pub type ItemId = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Tick for UI refresh
    Tick,
}
