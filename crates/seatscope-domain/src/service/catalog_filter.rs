//! Catalog filtering service

use serde::{Deserialize, Serialize};

use seatscope_types::{Feature, Material, SeatPosition};

use crate::model::PartRecord;

/// User-selected filter predicates. Every field is optional; an absent
/// field (or empty set) places no constraint. All provided constraints
/// are combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub position: Option<SeatPosition>,
    /// Record matches if its material is a member of this set
    #[serde(default)]
    pub materials: Vec<Material>,
    /// Record matches only if it carries all of these features
    #[serde(default)]
    pub features: Vec<Feature>,
    /// Inclusive lower price bound
    #[serde(default)]
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    #[serde(default)]
    pub max_price: Option<f64>,
}

impl FilterSpec {
    /// True when no constraint is set at all
    pub fn is_empty(&self) -> bool {
        self.brand.is_none()
            && self.series.is_none()
            && self.year.is_none()
            && self.position.is_none()
            && self.materials.is_empty()
            && self.features.is_empty()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }

    /// Whether a single record satisfies every provided constraint
    pub fn matches(&self, part: &PartRecord) -> bool {
        if let Some(ref brand) = self.brand {
            if part.brand != *brand {
                return false;
            }
        }
        if let Some(ref series) = self.series {
            if part.series != *series {
                return false;
            }
        }
        if let Some(year) = self.year {
            if part.year != year {
                return false;
            }
        }
        if let Some(position) = self.position {
            if part.position != position {
                return false;
            }
        }
        if !self.materials.is_empty() && !self.materials.contains(&part.material) {
            return false;
        }
        if !part.has_features(&self.features) {
            return false;
        }
        if let Some(min) = self.min_price {
            if part.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if part.price > max {
                return false;
            }
        }
        true
    }

    /// One-line summary of the active constraints, for history entries
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(ref b) = self.brand {
            parts.push(format!("brand={}", b));
        }
        if let Some(ref s) = self.series {
            parts.push(format!("series={}", s));
        }
        if let Some(y) = self.year {
            parts.push(format!("year={}", y));
        }
        if let Some(p) = self.position {
            parts.push(format!("position={}", p.label()));
        }
        if !self.materials.is_empty() {
            let labels: Vec<_> = self.materials.iter().map(|m| m.label()).collect();
            parts.push(format!("materials={}", labels.join("/")));
        }
        if !self.features.is_empty() {
            let labels: Vec<_> = self.features.iter().map(|f| f.label()).collect();
            parts.push(format!("features={}", labels.join("/")));
        }
        match (self.min_price, self.max_price) {
            (Some(lo), Some(hi)) => parts.push(format!("price={}-{}", lo, hi)),
            (Some(lo), None) => parts.push(format!("price>={}", lo)),
            (None, Some(hi)) => parts.push(format!("price<={}", hi)),
            (None, None) => {}
        }
        if parts.is_empty() {
            "no filters".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Apply the filter to a catalog, preserving the catalog's relative
/// order. Never fails; contradictory bounds simply match nothing.
pub fn filter_catalog(catalog: &[PartRecord], spec: &FilterSpec) -> Vec<PartRecord> {
    catalog
        .iter()
        .filter(|part| spec.matches(part))
        .cloned()
        .collect()
}

/// Distinct brands in first-appearance order
pub fn brand_options(catalog: &[PartRecord]) -> Vec<String> {
    let mut brands: Vec<String> = Vec::new();
    for part in catalog {
        if !brands.contains(&part.brand) {
            brands.push(part.brand.clone());
        }
    }
    brands
}

/// Distinct series offered for selection. When a brand is chosen, only
/// series present under that brand are offered; the series options are
/// a live projection of the brand choice, not a static list.
pub fn series_options(catalog: &[PartRecord], brand: Option<&str>) -> Vec<String> {
    let mut series: Vec<String> = Vec::new();
    for part in catalog {
        if let Some(b) = brand {
            if part.brand != b {
                continue;
            }
        }
        if !series.contains(&part.series) {
            series.push(part.series.clone());
        }
    }
    series
}

/// Distinct model years in first-appearance order
pub fn year_options(catalog: &[PartRecord]) -> Vec<u16> {
    let mut years: Vec<u16> = Vec::new();
    for part in catalog {
        if !years.contains(&part.year) {
            years.push(part.year);
        }
    }
    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatscope_types::Dimensions;

    fn part(id: u32, brand: &str, series: &str, price: f64, features: Vec<Feature>) -> PartRecord {
        PartRecord {
            id,
            brand: brand.to_string(),
            series: series.to_string(),
            year: 2024,
            model: format!("M{}", id),
            position: SeatPosition::DriverFront,
            material: Material::NappaLeather,
            features,
            price,
            weight: 25.0,
            dimensions: Dimensions::new(60.0, 50.0, 40.0),
            description: String::new(),
            image: String::new(),
        }
    }

    fn catalog() -> Vec<PartRecord> {
        vec![
            part(1, "BYD", "Han", 12800.0, vec![Feature::Heating, Feature::Memory]),
            part(2, "Tesla", "Model 3", 9800.0, vec![Feature::Heating]),
            part(3, "BYD", "Seal", 8600.0, vec![Feature::Ventilation]),
            part(4, "NIO", "ET7", 15800.0, vec![Feature::Heating, Feature::Massage]),
            part(5, "BYD", "Han", 11200.0, vec![Feature::Heating, Feature::Memory, Feature::Massage]),
        ]
    }

    #[test]
    fn test_brand_filter_returns_only_that_brand() {
        let catalog = catalog();
        let spec = FilterSpec {
            brand: Some("BYD".to_string()),
            ..Default::default()
        };
        let result = filter_catalog(&catalog, &spec);
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|p| p.brand == "BYD"));
    }

    #[test]
    fn test_features_are_conjunctive() {
        let catalog = catalog();
        let spec = FilterSpec {
            features: vec![Feature::Heating, Feature::Memory],
            ..Default::default()
        };
        let result = filter_catalog(&catalog, &spec);
        let ids: Vec<u32> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 5]);
        for p in &result {
            assert!(p.has_features(&[Feature::Heating, Feature::Memory]));
        }
    }

    #[test]
    fn test_price_bounds_inclusive() {
        let catalog = catalog();
        let spec = FilterSpec {
            min_price: Some(9800.0),
            max_price: Some(12800.0),
            ..Default::default()
        };
        let ids: Vec<u32> = filter_catalog(&catalog, &spec).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 5]);
    }

    #[test]
    fn test_contradictory_bounds_yield_empty_not_error() {
        let catalog = catalog();
        let spec = FilterSpec {
            min_price: Some(20000.0),
            max_price: Some(10000.0),
            ..Default::default()
        };
        assert!(filter_catalog(&catalog, &spec).is_empty());
    }

    #[test]
    fn test_empty_spec_returns_catalog_in_order() {
        let catalog = catalog();
        let result = filter_catalog(&catalog, &FilterSpec::default());
        assert_eq!(result, catalog);
    }

    #[test]
    fn test_series_options_cascade_from_brand() {
        let catalog = catalog();
        assert_eq!(
            series_options(&catalog, Some("BYD")),
            vec!["Han".to_string(), "Seal".to_string()]
        );
        assert_eq!(
            series_options(&catalog, None),
            vec![
                "Han".to_string(),
                "Model 3".to_string(),
                "Seal".to_string(),
                "ET7".to_string()
            ]
        );
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = catalog();
        let spec = FilterSpec {
            brand: Some("BYD".to_string()),
            features: vec![Feature::Heating],
            ..Default::default()
        };
        let first = filter_catalog(&catalog, &spec);
        let second = filter_catalog(&catalog, &spec);
        assert_eq!(first, second);
    }
}
