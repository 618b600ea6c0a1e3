//! Competitor product records

use serde::{Deserialize, Serialize};

/// Competitor seat product used by the scoring engine. Static set,
/// immutable for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorRecord {
    pub id: u32,
    pub brand: String,
    pub series: String,
    /// Unit price, currency units
    pub price: f64,
    /// Actual weight in kg
    pub weight: f64,
    /// Feature richness, 0-100
    pub feature_score: f64,
    /// Material quality, 0-10
    pub material_score: f64,
    /// Market share percentage, 0-100
    pub market_share: f64,
}
