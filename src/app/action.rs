use crate::app::event::ItemId;

/// Intents emitted by the focused panel, applied to the list by the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddItem { description: String, quantity: u8 },
    ToggleItem { id: ItemId },
    DeleteItem { id: ItemId },
    Quit,
}
