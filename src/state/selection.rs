use std::collections::BTreeMap;

use crate::models::kit::{Kit, KitQuantity};

/// Incrementally-built kit selection for the catalog page.
///
/// One entry per kit id. Single-unit kits toggle in and out; multi-unit kits
/// carry an explicit quantity within `1..=max`. Removing the last unit
/// removes the entry entirely, so the flattened list never contains an entry
/// with a quantity of zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionState {
    selected: BTreeMap<i64, KitQuantity>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, kit_id: i64) -> bool {
        self.selected.contains_key(&kit_id)
    }

    /// Chosen quantity, or 0 when the kit is not selected.
    pub fn quantity_of(&self, kit_id: i64) -> u32 {
        self.selected.get(&kit_id).map(|k| k.quantity).unwrap_or(0)
    }

    /// Single-unit selection: in with quantity 1, or out.
    pub fn toggle(&mut self, kit: &Kit) {
        if self.selected.remove(&kit.id).is_none() {
            self.selected.insert(kit.id, KitQuantity::new(kit, 1));
        }
    }

    /// Multi-unit selection. Quantity 0 deselects; positive quantities are
    /// clamped to the kit's maximum.
    pub fn set_quantity(&mut self, kit: &Kit, quantity: u32) {
        if quantity == 0 {
            self.selected.remove(&kit.id);
        } else {
            let quantity = quantity.min(kit.max_quantity());
            self.selected.insert(kit.id, KitQuantity::new(kit, quantity));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Flattened, kit-id-ordered list handed forward as navigation payload.
    pub fn to_list(&self) -> Vec<KitQuantity> {
        self.selected.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kit(id: i64, name: &str, kit_type: &str) -> Kit {
        Kit {
            id,
            name: name.to_string(),
            kit_type: kit_type.to_string(),
        }
    }

    #[test]
    fn toggle_adds_and_removes_single_unit_kits() {
        let camera = kit(1, "Canon R6", "Camera");
        let mut state = SelectionState::new();

        state.toggle(&camera);
        assert!(state.is_selected(1));
        assert_eq!(state.quantity_of(1), 1);

        state.toggle(&camera);
        assert!(!state.is_selected(1));
        assert!(state.is_empty());
    }

    #[test]
    fn quantity_zero_removes_the_entry() {
        let mic = kit(2, "Lav Mic", "Sound (3)");
        let mut state = SelectionState::new();

        state.set_quantity(&mic, 2);
        assert_eq!(state.quantity_of(2), 2);

        state.set_quantity(&mic, 0);
        assert!(!state.is_selected(2));
        assert!(state.to_list().is_empty());
    }

    #[test]
    fn quantity_is_clamped_to_the_kit_maximum() {
        let mic = kit(2, "Lav Mic", "Sound (3)");
        let mut state = SelectionState::new();

        state.set_quantity(&mic, 99);
        assert_eq!(state.quantity_of(2), 3);
    }

    #[test]
    fn list_never_contains_non_positive_quantities() {
        let camera = kit(1, "Canon R6", "Camera");
        let mic = kit(2, "Lav Mic", "Sound (3)");
        let mut state = SelectionState::new();

        state.toggle(&camera);
        state.set_quantity(&mic, 2);
        state.set_quantity(&mic, 0);
        state.set_quantity(&mic, 1);

        assert!(state.to_list().iter().all(|k| k.quantity >= 1));
    }

    #[test]
    fn selection_round_trips_into_display_labels() {
        let mut state = SelectionState::new();
        state.set_quantity(&kit(1, "A", "Sound (3)"), 2);
        state.toggle(&kit(2, "B", "Camera"));

        let labels: Vec<String> = state.to_list().iter().map(|k| k.display_label()).collect();
        assert_eq!(labels, vec!["A (x2)".to_string(), "B".to_string()]);
    }

    #[test]
    fn list_is_ordered_by_kit_id() {
        let mut state = SelectionState::new();
        state.toggle(&kit(9, "Tripod", "Camera Equipment"));
        state.toggle(&kit(1, "Canon R6", "Camera"));
        state.set_quantity(&kit(4, "Lav Mic", "Sound (3)"), 2);

        let ids: Vec<i64> = state.to_list().iter().map(|k| k.id).collect();
        assert_eq!(ids, vec![1, 4, 9]);
    }
}
