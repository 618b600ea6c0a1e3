//! Pure analysis services

pub mod catalog_filter;
pub mod comparison;
pub mod freight;
pub mod scoring;

pub use catalog_filter::{
    brand_options, filter_catalog, series_options, year_options, FilterSpec,
};
pub use comparison::{build_comparison_rows, CellMark, ComparisonCell, ComparisonRow};
pub use freight::{estimate_freight, FreightEstimate, PackageInput, ProviderQuote};
pub use scoring::{score_comprehensive, score_cost_utility, ComprehensiveScore, CostUtilityScore};
