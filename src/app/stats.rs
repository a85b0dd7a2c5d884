//! Aggregate progress derived from the packing list.

use crate::app::state::Item;

/// Pure derivation over the item list; recomputed on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub packed: usize,
    pub percentage: u32,
}

impl Stats {
    pub fn from_items(items: &[Item]) -> Self {
        let total = items.len();
        let packed = items.iter().filter(|item| item.packed).count();
        let percentage = if total == 0 {
            0
        } else {
            (packed as f64 / total as f64 * 100.0).round() as u32
        };
        Self {
            total,
            packed,
            percentage,
        }
    }

    pub fn message(&self) -> String {
        if self.total == 0 {
            "Your packing list is empty.".to_string()
        } else if self.percentage == 100 {
            "You got everything!".to_string()
        } else {
            format!(
                "You have {} items. You already packed {} ({}%).",
                self.total, self.packed, self.percentage
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, packed: bool) -> Item {
        Item {
            id,
            description: format!("item-{}", id),
            quantity: 1,
            packed,
        }
    }

    #[test]
    fn test_empty_list() {
        let stats = Stats::from_items(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.percentage, 0);
        assert_eq!(stats.message(), "Your packing list is empty.");
    }

    #[test]
    fn test_half_packed() {
        let items = vec![item(1, true), item(2, true), item(3, false), item(4, false)];
        let stats = Stats::from_items(&items);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.packed, 2);
        assert_eq!(stats.percentage, 50);
        assert_eq!(
            stats.message(),
            "You have 4 items. You already packed 2 (50%)."
        );
    }

    #[test]
    fn test_all_packed() {
        let items = vec![item(1, true), item(2, true), item(3, true)];
        let stats = Stats::from_items(&items);
        assert_eq!(stats.percentage, 100);
        assert_eq!(stats.message(), "You got everything!");
    }

    #[test]
    fn test_percentage_rounds_to_nearest() {
        // 1/3 = 33.33 -> 33, 2/3 = 66.67 -> 67
        let one_third = vec![item(1, true), item(2, false), item(3, false)];
        assert_eq!(Stats::from_items(&one_third).percentage, 33);
        let two_thirds = vec![item(1, true), item(2, true), item(3, false)];
        assert_eq!(Stats::from_items(&two_thirds).percentage, 67);
    }
}
