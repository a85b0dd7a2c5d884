use crate::app::event::ItemId;
use crate::config::AppConfig;
use chrono::Utc;

/// Quantity choices offered by the form.
pub const QUANTITY_CHOICES: [u8; 3] = [1, 2, 3];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    pub quantity: u8,
    pub packed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    Form,
    List,
}

/// Local draft state for the add-item form.
///
/// Cursor is a byte offset into `text`, always on a char boundary.
/// Reset to initial values after each successful submission.
#[derive(Debug)]
pub struct DraftState {
    pub text: String,
    pub cursor: usize,
    pub quantity: u8,
}

impl DraftState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            quantity: QUANTITY_CHOICES[0],
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    pub fn quantity_next(&mut self) {
        if let Some(i) = QUANTITY_CHOICES.iter().position(|&q| q == self.quantity) {
            if i + 1 < QUANTITY_CHOICES.len() {
                self.quantity = QUANTITY_CHOICES[i + 1];
            }
        }
    }

    pub fn quantity_prev(&mut self) {
        if let Some(i) = QUANTITY_CHOICES.iter().position(|&q| q == self.quantity) {
            if i > 0 {
                self.quantity = QUANTITY_CHOICES[i - 1];
            }
        }
    }

    /// Take the draft for submission, resetting to initial values.
    pub fn take(&mut self) -> (String, u8) {
        let text = std::mem::take(&mut self.text);
        let quantity = self.quantity;
        self.cursor = 0;
        self.quantity = QUANTITY_CHOICES[0];
        (text, quantity)
    }
}

pub struct AppState {
    pub config: AppConfig,
    /// The packing list. Sole owner; every mutation replaces the sequence.
    pub items: Vec<Item>,
    next_item_id: ItemId,
    pub draft: DraftState,
    pub focus: FocusPanel,
    /// List cursor (presentation only, never affects the sequence).
    pub selected: usize,
    pub dirty: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        // Ids stay monotonic within the session; the timestamp seed keeps
        // them time-derived without same-tick collisions.
        let seed = Utc::now().timestamp_millis().max(0) as ItemId;
        Self {
            config,
            items: Vec::new(),
            next_item_id: seed,
            draft: DraftState::new(),
            focus: FocusPanel::Form,
            selected: 0,
            dirty: true,
            should_quit: false,
        }
    }

    pub fn allocate_item_id(&mut self) -> ItemId {
        let id = self.next_item_id;
        self.next_item_id += 1;
        id
    }

    /// Append a new unpacked item to the end of the list.
    pub fn add_item(&mut self, description: String, quantity: u8) -> ItemId {
        let id = self.allocate_item_id();
        let item = Item {
            id,
            description,
            quantity,
            packed: false,
        };
        self.items = self
            .items
            .iter()
            .cloned()
            .chain(std::iter::once(item))
            .collect();
        self.dirty = true;
        id
    }

    /// Flip `packed` on the matching item. No-op if the id is unknown.
    pub fn toggle_item(&mut self, id: ItemId) {
        self.items = self
            .items
            .iter()
            .map(|item| {
                if item.id == id {
                    Item {
                        packed: !item.packed,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        self.dirty = true;
    }

    /// Remove the matching item, preserving the order of the rest.
    /// No-op if the id is unknown.
    pub fn delete_item(&mut self, id: ItemId) {
        self.items = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        self.clamp_selection();
        self.dirty = true;
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.items.get(self.selected)
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    fn clamp_selection(&mut self) {
        if self.selected >= self.items.len() {
            self.selected = self.items.len().saturating_sub(1);
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Form => FocusPanel::List,
            FocusPanel::List => FocusPanel::Form,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::stats::Stats;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut st = state();
        let a = st.add_item("Shirt".into(), 2);
        let b = st.add_item("Pants".into(), 1);
        assert_ne!(a, b);
        assert_eq!(st.items.len(), 2);
        assert_eq!(st.items[0].description, "Shirt");
        assert_eq!(st.items[1].description, "Pants");
        assert!(st.items.iter().all(|i| !i.packed));
    }

    #[test]
    fn test_ids_are_unique_and_monotonic() {
        let mut st = state();
        let ids: Vec<_> = (0..10).map(|_| st.add_item("Socks".into(), 1)).collect();
        for w in ids.windows(2) {
            assert!(w[1] > w[0]);
        }
    }

    #[test]
    fn test_double_toggle_round_trips() {
        let mut st = state();
        let id = st.add_item("Shirt".into(), 1);
        st.toggle_item(id);
        assert!(st.items[0].packed);
        st.toggle_item(id);
        assert!(!st.items[0].packed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut st = state();
        st.add_item("Shirt".into(), 1);
        let before = st.items.clone();
        st.toggle_item(999_999);
        assert_eq!(st.items, before);
    }

    #[test]
    fn test_delete_removes_one_and_preserves_order() {
        let mut st = state();
        let a = st.add_item("Shirt".into(), 1);
        let b = st.add_item("Pants".into(), 2);
        let c = st.add_item("Socks".into(), 3);
        st.delete_item(b);
        let ids: Vec<_> = st.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut st = state();
        st.add_item("Shirt".into(), 1);
        st.delete_item(12345);
        assert_eq!(st.items.len(), 1);
    }

    #[test]
    fn test_delete_clamps_selection() {
        let mut st = state();
        let _a = st.add_item("Shirt".into(), 1);
        let b = st.add_item("Pants".into(), 1);
        st.selected = 1;
        st.delete_item(b);
        assert_eq!(st.selected, 0);
        let a = st.items[0].id;
        st.delete_item(a);
        assert_eq!(st.selected, 0);
        assert!(st.selected_item().is_none());
    }

    #[test]
    fn test_draft_edit_is_char_boundary_safe() {
        let mut d = DraftState::new();
        for c in "tènt".chars() {
            d.insert_char(c);
        }
        assert_eq!(d.text, "tènt");
        d.delete_back();
        d.delete_back();
        assert_eq!(d.text, "tè");
        d.move_left();
        d.delete_back();
        assert_eq!(d.text, "è");
        d.move_right();
        assert_eq!(d.cursor, d.text.len());
    }

    #[test]
    fn test_quantity_steps_clamp_to_choices() {
        let mut d = DraftState::new();
        assert_eq!(d.quantity, 1);
        d.quantity_prev();
        assert_eq!(d.quantity, 1);
        d.quantity_next();
        d.quantity_next();
        assert_eq!(d.quantity, 3);
        d.quantity_next();
        assert_eq!(d.quantity, 3);
        d.quantity_prev();
        assert_eq!(d.quantity, 2);
    }

    #[test]
    fn test_take_resets_draft() {
        let mut d = DraftState::new();
        for c in "Tent".chars() {
            d.insert_char(c);
        }
        d.quantity_next();
        let (text, qty) = d.take();
        assert_eq!(text, "Tent");
        assert_eq!(qty, 2);
        assert_eq!(d.text, "");
        assert_eq!(d.cursor, 0);
        assert_eq!(d.quantity, 1);
    }

    #[test]
    fn test_add_toggle_scenario() {
        let mut st = state();
        let shirt = st.add_item("Shirt".into(), 5);
        let _pants = st.add_item("Pants".into(), 2);
        st.toggle_item(shirt);

        assert_eq!(st.items.len(), 2);
        assert_eq!(st.items[0].description, "Shirt");
        assert_eq!(st.items[0].quantity, 5);
        assert!(st.items[0].packed);
        assert_eq!(st.items[1].description, "Pants");
        assert_eq!(st.items[1].quantity, 2);
        assert!(!st.items[1].packed);

        let stats = Stats::from_items(&st.items);
        assert_eq!(
            stats.message(),
            "You have 2 items. You already packed 1 (50%)."
        );
    }
}
