//! Freight estimation service
//!
//! Volumetric weight, billable weight and per-provider freight quotes
//! for a packaged part.

use serde::Serialize;

use seatscope_types::{Error, Result, WeightBasis};

use crate::model::{LogisticsProvider, PartRecord};

/// Dimensional factor: cm³ of package volume per kg of volumetric weight
pub const DIMENSIONAL_FACTOR: f64 = 6000.0;

/// Raw estimator inputs. Every field must be supplied before an
/// estimate is computed; zero counts as supplied (a zero-dimension
/// package just yields zero volumetric weight).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PackageInput {
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub actual_weight: Option<f64>,
}

impl From<&PartRecord> for PackageInput {
    fn from(part: &PartRecord) -> Self {
        Self {
            length: Some(part.dimensions.length),
            width: Some(part.dimensions.width),
            height: Some(part.dimensions.height),
            actual_weight: Some(part.weight),
        }
    }
}

/// One provider's quote
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderQuote {
    #[serde(flatten)]
    pub provider: LogisticsProvider,
    pub freight: f64,
    /// Freight as a percentage of the reference part price, when one
    /// was supplied
    pub cost_ratio: Option<f64>,
}

/// Full estimate: shared weight figures plus one quote per provider,
/// in provider order. No ranking is imposed; use the helpers to pick a
/// best option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FreightEstimate {
    pub volumetric_weight: f64,
    pub actual_weight: f64,
    pub billable_weight: f64,
    pub basis: WeightBasis,
    pub quotes: Vec<ProviderQuote>,
}

impl FreightEstimate {
    /// Quote with the lowest freight charge
    pub fn cheapest(&self) -> Option<&ProviderQuote> {
        self.quotes.iter().min_by(|a, b| {
            a.freight
                .partial_cmp(&b.freight)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    /// Quote with the lowest cost ratio, when ratios are available
    pub fn lowest_cost_ratio(&self) -> Option<&ProviderQuote> {
        self.quotes
            .iter()
            .filter(|q| q.cost_ratio.is_some())
            .min_by(|a, b| {
                a.cost_ratio
                    .partial_cmp(&b.cost_ratio)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }
}

/// Compute the freight estimate. Fails with `MissingInput` naming the
/// first absent field; no partial result is produced in that case.
pub fn estimate_freight(
    package: &PackageInput,
    providers: &[LogisticsProvider],
    part_price: Option<f64>,
) -> Result<FreightEstimate> {
    let length = package.length.ok_or(Error::MissingInput { field: "length" })?;
    let width = package.width.ok_or(Error::MissingInput { field: "width" })?;
    let height = package.height.ok_or(Error::MissingInput { field: "height" })?;
    let actual_weight = package
        .actual_weight
        .ok_or(Error::MissingInput { field: "actual_weight" })?;

    let volumetric_weight = length * width * height / DIMENSIONAL_FACTOR;
    let billable_weight = volumetric_weight.max(actual_weight);
    // Strict comparison: an exact tie bills as actual weight.
    let basis = if volumetric_weight > actual_weight {
        WeightBasis::Dimensional
    } else {
        WeightBasis::Actual
    };

    let quotes = providers
        .iter()
        .map(|provider| {
            let freight =
                (provider.base_rate + provider.weight_rate * billable_weight).max(provider.min_charge);
            let cost_ratio = match part_price {
                Some(price) if price > 0.0 => Some(freight / price * 100.0),
                _ => None,
            };
            ProviderQuote {
                provider: provider.clone(),
                freight,
                cost_ratio,
            }
        })
        .collect();

    Ok(FreightEstimate {
        volumetric_weight,
        actual_weight,
        billable_weight,
        basis,
        quotes,
    })
}
