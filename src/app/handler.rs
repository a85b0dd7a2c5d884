use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => vec![],
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    if key.code == KeyCode::Esc {
        return vec![Action::Quit];
    }
    if key.code == KeyCode::Tab {
        state.cycle_focus();
        return vec![];
    }

    match state.focus {
        FocusPanel::Form => handle_form_key(state, key),
        FocusPanel::List => handle_list_key(state, key),
    }
}

fn handle_form_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => {
            // Empty draft: silently ignored, draft kept as-is
            if state.draft.text.trim().is_empty() {
                return vec![];
            }
            let (text, quantity) = state.draft.take();
            vec![Action::AddItem {
                description: text.trim().to_string(),
                quantity,
            }]
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.draft.delete_word_back();
            vec![]
        }
        KeyCode::Char(c) => {
            state.draft.insert_char(c);
            vec![]
        }
        KeyCode::Backspace => {
            state.draft.delete_back();
            vec![]
        }
        KeyCode::Delete => {
            state.draft.delete_forward();
            vec![]
        }
        KeyCode::Left => {
            state.draft.move_left();
            vec![]
        }
        KeyCode::Right => {
            state.draft.move_right();
            vec![]
        }
        KeyCode::Home => {
            state.draft.move_home();
            vec![]
        }
        KeyCode::End => {
            state.draft.move_end();
            vec![]
        }
        KeyCode::Up => {
            state.draft.quantity_next();
            vec![]
        }
        KeyCode::Down => {
            state.draft.quantity_prev();
            vec![]
        }
        _ => vec![],
    }
}

fn handle_list_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => match state.selected_item() {
            Some(item) => vec![Action::ToggleItem { id: item.id }],
            None => vec![],
        },
        KeyCode::Backspace | KeyCode::Delete | KeyCode::Char('x') => {
            match state.selected_item() {
                Some(item) => vec![Action::DeleteItem { id: item.id }],
                None => vec![],
            }
        }
        KeyCode::Char('q') => vec![Action::Quit],
        _ => vec![],
    }
}
