//! Session workbench
//!
//! Owns the loaded datasets and all session-scoped state, and fronts
//! the analysis services. Every operation that produces a result is
//! recorded in the session activity log.

use seatscope_domain::service::{
    brand_options, build_comparison_rows, estimate_freight, filter_catalog, score_comprehensive,
    score_cost_utility, series_options, year_options, ComparisonRow, ComprehensiveScore,
    CostUtilityScore, FilterSpec, FreightEstimate, PackageInput,
};
use seatscope_domain::{CompetitorRecord, LogisticsProvider, PartRecord};
use seatscope_infra::{load_competitors_csv, load_parts_csv, ProviderLoader};
use seatscope_store::{ActivityKind, ActivityLog, CompareSelection, FavoritesSet};
use seatscope_types::{CostUtilityCoefficients, Error, Result, WeightConfig};

use crate::config::Config;
use crate::datasets;

/// All state of one analysis session
#[derive(Debug)]
pub struct Workbench {
    catalog: Vec<PartRecord>,
    competitors: Vec<CompetitorRecord>,
    providers: Vec<LogisticsProvider>,
    selection: CompareSelection,
    favorites: FavoritesSet,
    log: ActivityLog,
}

impl Workbench {
    pub fn new(
        catalog: Vec<PartRecord>,
        competitors: Vec<CompetitorRecord>,
        providers: Vec<LogisticsProvider>,
    ) -> Self {
        Self {
            catalog,
            competitors,
            providers,
            selection: CompareSelection::new(),
            favorites: FavoritesSet::new(),
            log: ActivityLog::new(),
        }
    }

    /// Session over the built-in demo datasets
    pub fn with_builtin_data() -> Self {
        Self::new(
            datasets::SEAT_CATALOG.clone(),
            datasets::COMPETITOR_SET.clone(),
            datasets::PROVIDER_RATES.clone(),
        )
    }

    /// Session honoring any dataset overrides in the configuration.
    /// Unset paths fall back to the built-in datasets.
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => load_parts_csv(path)?,
            None => datasets::SEAT_CATALOG.clone(),
        };
        let competitors = match &config.catalog_path {
            // The competitor set ships alongside the catalog override
            // as <stem>.competitors.csv; fall back to built-in when the
            // companion file is absent.
            Some(path) => {
                let companion = path.with_extension("competitors.csv");
                if companion.exists() {
                    load_competitors_csv(&companion)?
                } else {
                    datasets::COMPETITOR_SET.clone()
                }
            }
            None => datasets::COMPETITOR_SET.clone(),
        };
        let providers = match &config.providers_path {
            Some(path) => ProviderLoader::load_from_file(path)?
                .providers()
                .into_iter()
                .cloned()
                .collect(),
            None => datasets::PROVIDER_RATES.clone(),
        };
        Ok(Self::new(catalog, competitors, providers))
    }

    pub fn catalog(&self) -> &[PartRecord] {
        &self.catalog
    }

    pub fn competitors(&self) -> &[CompetitorRecord] {
        &self.competitors
    }

    pub fn providers(&self) -> &[LogisticsProvider] {
        &self.providers
    }

    pub fn find_part(&self, id: u32) -> Option<&PartRecord> {
        self.catalog.iter().find(|p| p.id == id)
    }

    /// Filter the catalog and record the query
    pub fn search_parts(&mut self, spec: &FilterSpec) -> Vec<PartRecord> {
        let results = filter_catalog(&self.catalog, spec);
        self.log.record(
            ActivityKind::Query,
            "Catalog query",
            spec.summary(),
            results.len(),
        );
        results
    }

    pub fn brand_options(&self) -> Vec<String> {
        brand_options(&self.catalog)
    }

    pub fn series_options(&self, brand: Option<&str>) -> Vec<String> {
        series_options(&self.catalog, brand)
    }

    pub fn year_options(&self) -> Vec<u16> {
        year_options(&self.catalog)
    }

    /// Add a catalog part to the comparison selection
    pub fn add_to_compare(&mut self, id: u32) -> Result<()> {
        let part = self
            .find_part(id)
            .cloned()
            .ok_or(Error::PartNotFound(id))?;
        self.selection.add(part)
    }

    pub fn remove_from_compare(&mut self, id: u32) -> bool {
        self.selection.remove(id)
    }

    pub fn clear_compare(&mut self) {
        self.selection.clear();
    }

    pub fn selection(&self) -> &CompareSelection {
        &self.selection
    }

    /// Build the comparison table for the current selection and record it
    pub fn comparison_rows(&mut self) -> Vec<ComparisonRow> {
        let rows = build_comparison_rows(self.selection.items());
        let names: Vec<String> = self
            .selection
            .items()
            .iter()
            .map(|p| p.display_name())
            .collect();
        self.log.record(
            ActivityKind::Compare,
            "Part comparison",
            names.join(" vs "),
            self.selection.len(),
        );
        rows
    }

    /// Flip a part's favorite status; returns whether it is favorited
    /// afterwards.
    pub fn toggle_favorite(&mut self, id: u32) -> Result<bool> {
        let part = self
            .find_part(id)
            .cloned()
            .ok_or(Error::PartNotFound(id))?;
        Ok(self.favorites.toggle(part))
    }

    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    /// Rank the competitor set under the comprehensive model
    pub fn analyze_comprehensive(&mut self, weights: &WeightConfig) -> Vec<ComprehensiveScore> {
        let scored = score_comprehensive(&self.competitors, weights);
        self.log.record(
            ActivityKind::Analysis,
            "Competitor analysis",
            format!(
                "comprehensive, weights price={} feature={} material={} weight={}",
                weights.price, weights.feature, weights.material, weights.weight
            ),
            scored.len(),
        );
        scored
    }

    /// Rank the competitor set under the cost-utility model
    pub fn analyze_cost_utility(
        &mut self,
        coefficients: &CostUtilityCoefficients,
    ) -> Vec<CostUtilityScore> {
        let scored = score_cost_utility(&self.competitors, coefficients);
        self.log.record(
            ActivityKind::Analysis,
            "Competitor analysis",
            format!(
                "cost-utility, alpha={} beta={} gamma={}",
                coefficients.alpha, coefficients.beta, coefficients.gamma
            ),
            scored.len(),
        );
        scored
    }

    /// Estimate freight for an arbitrary package
    pub fn estimate(
        &mut self,
        package: &PackageInput,
        part_price: Option<f64>,
    ) -> Result<FreightEstimate> {
        let estimate = estimate_freight(package, &self.providers, part_price)?;
        self.log.record(
            ActivityKind::Calculation,
            "Freight estimate",
            format!(
                "billable {:.2} kg ({})",
                estimate.billable_weight,
                estimate.basis.label()
            ),
            estimate.quotes.len(),
        );
        Ok(estimate)
    }

    /// Estimate freight for a catalog part using its stored dimensions,
    /// weight and price
    pub fn estimate_for_part(&mut self, id: u32) -> Result<FreightEstimate> {
        let part = self
            .find_part(id)
            .cloned()
            .ok_or(Error::PartNotFound(id))?;
        let package = PackageInput::from(&part);
        self.estimate(&package, Some(part.price))
    }

    pub fn history(&self) -> &ActivityLog {
        &self.log
    }

    pub fn history_mut(&mut self) -> &mut ActivityLog {
        &mut self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_session_has_data() {
        let bench = Workbench::with_builtin_data();
        assert!(!bench.catalog().is_empty());
        assert!(!bench.competitors().is_empty());
        assert_eq!(bench.providers().len(), 4);
    }

    #[test]
    fn test_add_unknown_part_to_compare() {
        let mut bench = Workbench::with_builtin_data();
        match bench.add_to_compare(999) {
            Err(Error::PartNotFound(id)) => assert_eq!(id, 999),
            other => panic!("expected PartNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_search_records_query_in_history() {
        let mut bench = Workbench::with_builtin_data();
        let spec = FilterSpec {
            brand: Some("BYD".to_string()),
            ..Default::default()
        };
        let results = bench.search_parts(&spec);
        assert!(!results.is_empty());

        let queries = bench.history().by_kind(ActivityKind::Query);
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].result_count, results.len());
        assert!(queries[0].detail.contains("brand=BYD"));
    }

    #[test]
    fn test_toggle_favorite_round_trip() {
        let mut bench = Workbench::with_builtin_data();
        assert!(bench.toggle_favorite(1).unwrap());
        assert!(bench.favorites().contains(1));
        assert!(!bench.toggle_favorite(1).unwrap());
        assert!(!bench.favorites().contains(1));
    }
}
