//! Logistics provider rate cards

use serde::{Deserialize, Serialize};

/// One logistics provider's rate card. Static set, immutable for the
/// session; may be overridden from a TOML rate file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticsProvider {
    pub id: u32,
    pub name: String,
    /// Flat fee per shipment, currency units
    pub base_rate: f64,
    /// Fee per kg of billable weight
    pub weight_rate: f64,
    /// Floor for the total freight charge
    pub min_charge: f64,
    /// Descriptive delivery range (e.g. "1-3 days")
    pub delivery_time: String,
}
