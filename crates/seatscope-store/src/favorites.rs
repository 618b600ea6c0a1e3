//! Favorites store

use seatscope_domain::PartRecord;
use seatscope_types::{Error, Result};

/// Unbounded set of favorited parts, unique by id, in the order they
/// were added.
#[derive(Debug, Clone, Default)]
pub struct FavoritesSet {
    items: Vec<PartRecord>,
}

impl FavoritesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part; a duplicate id is rejected without mutating the set.
    pub fn add(&mut self, part: PartRecord) -> Result<()> {
        if self.contains(part.id) {
            return Err(Error::DuplicateEntry { id: part.id });
        }
        self.items.push(part);
        Ok(())
    }

    /// Remove by id; returns whether anything was removed.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.id != id);
        self.items.len() != before
    }

    /// Add the part if absent, remove it if present. Returns whether
    /// the part is favorited afterwards.
    pub fn toggle(&mut self, part: PartRecord) -> bool {
        if self.remove(part.id) {
            false
        } else {
            self.items.push(part);
            true
        }
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatscope_types::{Dimensions, Material, SeatPosition};

    fn part(id: u32) -> PartRecord {
        PartRecord {
            id,
            brand: "NIO".to_string(),
            series: "ET7".to_string(),
            year: 2024,
            model: format!("M{}", id),
            position: SeatPosition::PassengerFront,
            material: Material::NappaLeather,
            features: Vec::new(),
            price: 15800.0,
            weight: 30.0,
            dimensions: Dimensions::new(62.0, 54.0, 48.0),
            description: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_duplicate_add_is_rejected() {
        let mut favorites = FavoritesSet::new();
        favorites.add(part(1)).unwrap();
        match favorites.add(part(1)) {
            Err(Error::DuplicateEntry { id }) => assert_eq!(id, 1),
            other => panic!("expected DuplicateEntry, got {:?}", other),
        }
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_toggle_flips_membership() {
        let mut favorites = FavoritesSet::new();
        assert!(favorites.toggle(part(1)));
        assert!(favorites.contains(1));
        assert!(!favorites.toggle(part(1)));
        assert!(!favorites.contains(1));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut favorites = FavoritesSet::new();
        assert!(!favorites.remove(42));
    }
}
