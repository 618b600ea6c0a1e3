//! Seat part configuration records

use serde::{Deserialize, Serialize};

use seatscope_types::{Dimensions, Feature, Material, SeatPosition};

/// One seat configuration in the catalog. Immutable once loaded; the
/// catalog itself is a fixed ordered sequence for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartRecord {
    pub id: u32,
    pub brand: String,
    pub series: String,
    pub year: u16,
    /// Configuration model code (e.g. "EV 605km flagship")
    pub model: String,
    pub position: SeatPosition,
    pub material: Material,
    pub features: Vec<Feature>,
    /// Unit price, currency units, >= 0
    pub price: f64,
    /// Actual weight in kg, > 0
    pub weight: f64,
    /// Packaged dimensions in cm
    pub dimensions: Dimensions,
    #[serde(default)]
    pub description: String,
    /// Image reference (path or URL); presentation only
    #[serde(default)]
    pub image: String,
}

impl PartRecord {
    /// True when every requested feature is present on this record
    pub fn has_features(&self, wanted: &[Feature]) -> bool {
        wanted.iter().all(|f| self.features.contains(f))
    }

    /// Short display name: brand, series and year
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.brand, self.series, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part() -> PartRecord {
        PartRecord {
            id: 1,
            brand: "BYD".to_string(),
            series: "Han".to_string(),
            year: 2024,
            model: "EV flagship".to_string(),
            position: SeatPosition::DriverFront,
            material: Material::NappaLeather,
            features: vec![Feature::Heating, Feature::Ventilation, Feature::Memory],
            price: 12800.0,
            weight: 28.5,
            dimensions: Dimensions::new(58.0, 52.0, 45.0),
            description: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_has_features_conjunctive() {
        let p = part();
        assert!(p.has_features(&[Feature::Heating, Feature::Memory]));
        assert!(!p.has_features(&[Feature::Heating, Feature::Massage]));
        assert!(p.has_features(&[]));
    }
}
