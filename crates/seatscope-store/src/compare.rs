//! Comparison selection store

use seatscope_domain::PartRecord;
use seatscope_types::{Error, Result};

/// Maximum number of parts a comparison can hold
pub const COMPARE_CAPACITY: usize = 5;

/// Ordered selection of parts to compare, unique by id, bounded at
/// [`COMPARE_CAPACITY`]. Mutated only through the explicit operations
/// below.
#[derive(Debug, Clone, Default)]
pub struct CompareSelection {
    items: Vec<PartRecord>,
}

impl CompareSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a part. Rejected without mutating the selection when the
    /// selection is full or the id is already present.
    pub fn add(&mut self, part: PartRecord) -> Result<()> {
        if self.items.len() >= COMPARE_CAPACITY {
            return Err(Error::CapacityExceeded {
                capacity: COMPARE_CAPACITY,
            });
        }
        if self.contains(part.id) {
            return Err(Error::DuplicateEntry { id: part.id });
        }
        self.items.push(part);
        Ok(())
    }

    /// Remove the part with the given id. Returns whether anything was
    /// removed; removing an absent id is a no-op.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.id != id);
        self.items.len() != before
    }

    /// Empty the selection unconditionally
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, id: u32) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    pub fn items(&self) -> &[PartRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= COMPARE_CAPACITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatscope_types::{Dimensions, Material, SeatPosition};

    fn part(id: u32) -> PartRecord {
        PartRecord {
            id,
            brand: "BYD".to_string(),
            series: "Han".to_string(),
            year: 2024,
            model: format!("M{}", id),
            position: SeatPosition::DriverFront,
            material: Material::Leather,
            features: Vec::new(),
            price: 10000.0,
            weight: 25.0,
            dimensions: Dimensions::new(60.0, 50.0, 40.0),
            description: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_add_rejects_sixth_item_without_mutation() {
        let mut selection = CompareSelection::new();
        for id in 1..=5 {
            selection.add(part(id)).unwrap();
        }
        assert!(selection.is_full());

        match selection.add(part(6)) {
            Err(Error::CapacityExceeded { capacity }) => assert_eq!(capacity, 5),
            other => panic!("expected CapacityExceeded, got {:?}", other),
        }
        assert_eq!(selection.len(), 5);
        assert!(!selection.contains(6));
    }

    #[test]
    fn test_add_rejects_duplicate_without_mutation() {
        let mut selection = CompareSelection::new();
        selection.add(part(1)).unwrap();
        selection.add(part(2)).unwrap();

        match selection.add(part(1)) {
            Err(Error::DuplicateEntry { id }) => assert_eq!(id, 1),
            other => panic!("expected DuplicateEntry, got {:?}", other),
        }
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_remove_reports_whether_present() {
        let mut selection = CompareSelection::new();
        selection.add(part(1)).unwrap();
        assert!(selection.remove(1));
        assert!(!selection.remove(1));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_clear_is_unconditional() {
        let mut selection = CompareSelection::new();
        selection.add(part(1)).unwrap();
        selection.add(part(2)).unwrap();
        selection.clear();
        assert!(selection.is_empty());
        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_order_is_insertion_order() {
        let mut selection = CompareSelection::new();
        for id in [3, 1, 2] {
            selection.add(part(id)).unwrap();
        }
        let ids: Vec<u32> = selection.items().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
