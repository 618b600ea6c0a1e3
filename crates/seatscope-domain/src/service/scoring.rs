//! Competitive scoring service
//!
//! Two mutually exclusive ranking models over the competitor set: a
//! weighted comprehensive score and a cost-utility ratio.

use std::cmp::Ordering;

use serde::Serialize;

use seatscope_types::{CostUtilityCoefficients, WeightConfig};

use crate::model::CompetitorRecord;

/// Per-kg proxy rate used to estimate a competitor's logistics cost
pub const LOGISTICS_COST_PER_KG: f64 = 2.5;

/// Competitor record plus comprehensive-mode derived fields.
/// Sub-scores are on a 0-1 scale; the total is a percentage. All values
/// are unrounded; rounding happens at the presentation layer only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComprehensiveScore {
    #[serde(flatten)]
    pub record: CompetitorRecord,
    pub price_score: f64,
    pub weight_score: f64,
    pub feature_score: f64,
    pub material_score: f64,
    pub total_score: f64,
    pub rank: usize,
}

/// Competitor record plus cost-utility derived fields (ratio on the
/// x1000 display scale, unrounded).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostUtilityScore {
    #[serde(flatten)]
    pub record: CompetitorRecord,
    pub estimated_logistics_cost: f64,
    pub cost_utility_ratio: f64,
    pub rank: usize,
}

/// Inverted min-max normalization for cost-type metrics: lower raw
/// value scores higher. A zero range is a defined degenerate case and
/// scores 1.0 for everyone rather than propagating NaN.
fn inverted_range_score(value: f64, min: f64, max: f64) -> f64 {
    if max > min {
        1.0 - (value - min) / (max - min)
    } else {
        1.0
    }
}

fn column_bounds<F>(records: &[CompetitorRecord], field: F) -> (f64, f64)
where
    F: Fn(&CompetitorRecord) -> f64,
{
    let min = records.iter().map(&field).fold(f64::INFINITY, f64::min);
    let max = records.iter().map(&field).fold(f64::NEG_INFINITY, f64::max);
    (min, max)
}

/// Comprehensive mode: blend normalized cost-type (price, weight) and
/// benefit-type (feature, material) metrics under the supplied weights.
/// Column bounds are taken over the full candidate set. The weights are
/// used as given; no sum-to-1 normalization is applied.
pub fn score_comprehensive(
    records: &[CompetitorRecord],
    weights: &WeightConfig,
) -> Vec<ComprehensiveScore> {
    if records.is_empty() {
        return Vec::new();
    }

    let (min_price, max_price) = column_bounds(records, |r| r.price);
    let (min_weight, max_weight) = column_bounds(records, |r| r.weight);

    let mut scored: Vec<ComprehensiveScore> = records
        .iter()
        .map(|record| {
            let price_score = inverted_range_score(record.price, min_price, max_price);
            let weight_score = inverted_range_score(record.weight, min_weight, max_weight);
            let feature_score = record.feature_score / 100.0;
            let material_score = record.material_score / 10.0;

            let total_score = (price_score * weights.price
                + feature_score * weights.feature
                + material_score * weights.material
                + weight_score * weights.weight)
                * 100.0;

            ComprehensiveScore {
                record: record.clone(),
                price_score,
                weight_score,
                feature_score,
                material_score,
                total_score,
                rank: 0,
            }
        })
        .collect();

    // Descending by unrounded score; ascending id makes ties deterministic.
    scored.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.record.id.cmp(&b.record.id))
    });
    for (index, item) in scored.iter_mut().enumerate() {
        item.rank = index + 1;
    }
    scored
}

/// Cost-utility mode: benefit-weighted numerator over cost-weighted
/// denominator, scaled x1000 for readability.
pub fn score_cost_utility(
    records: &[CompetitorRecord],
    coefficients: &CostUtilityCoefficients,
) -> Vec<CostUtilityScore> {
    let mut scored: Vec<CostUtilityScore> = records
        .iter()
        .map(|record| {
            let estimated_logistics_cost = record.weight * LOGISTICS_COST_PER_KG;
            let utility = coefficients.alpha * record.feature_score
                + coefficients.beta * (record.material_score * 10.0);
            let cost = record.price + coefficients.gamma * estimated_logistics_cost;
            let cost_utility_ratio = utility / cost * 1000.0;

            CostUtilityScore {
                record: record.clone(),
                estimated_logistics_cost,
                cost_utility_ratio,
                rank: 0,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.cost_utility_ratio
            .partial_cmp(&a.cost_utility_ratio)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.record.id.cmp(&b.record.id))
    });
    for (index, item) in scored.iter_mut().enumerate() {
        item.rank = index + 1;
    }
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competitor(id: u32, price: f64, weight: f64, feature: f64, material: f64) -> CompetitorRecord {
        CompetitorRecord {
            id,
            brand: format!("Brand{}", id),
            series: format!("S{}", id),
            price,
            weight,
            feature_score: feature,
            material_score: material,
            market_share: 10.0,
        }
    }

    #[test]
    fn test_price_only_weights_rank_cheapest_first() {
        let records = vec![
            competitor(1, 20000.0, 25.0, 80.0, 8.0),
            competitor(2, 10000.0, 25.0, 60.0, 6.0),
            competitor(3, 30000.0, 25.0, 90.0, 9.0),
        ];
        let weights = WeightConfig {
            price: 1.0,
            feature: 0.0,
            material: 0.0,
            weight: 0.0,
        };
        let scored = score_comprehensive(&records, &weights);
        let order: Vec<u32> = scored.iter().map(|s| s.record.id).collect();
        assert_eq!(order, vec![2, 1, 3]);
        assert_eq!(scored[0].rank, 1);
        assert_eq!(scored[2].rank, 3);
        assert!((scored[0].total_score - 100.0).abs() < 1e-9);
        assert!((scored[2].total_score - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_price_range_scores_one_not_nan() {
        let records = vec![
            competitor(1, 15000.0, 20.0, 80.0, 8.0),
            competitor(2, 15000.0, 30.0, 60.0, 6.0),
        ];
        let scored = score_comprehensive(&records, &WeightConfig::default());
        for s in &scored {
            assert!((s.price_score - 1.0).abs() < 1e-9);
            assert!(s.total_score.is_finite());
        }
    }

    #[test]
    fn test_tied_scores_break_by_ascending_id() {
        let records = vec![
            competitor(7, 15000.0, 25.0, 70.0, 7.0),
            competitor(3, 15000.0, 25.0, 70.0, 7.0),
            competitor(5, 15000.0, 25.0, 70.0, 7.0),
        ];
        let scored = score_comprehensive(&records, &WeightConfig::default());
        let order: Vec<u32> = scored.iter().map(|s| s.record.id).collect();
        assert_eq!(order, vec![3, 5, 7]);
        assert_eq!(
            scored.iter().map(|s| s.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_cost_utility_formula() {
        // utility = 1.0*80 + 0.8*(8*10) = 144; cost = 10000 + 0.5*(20*2.5) = 10025
        let records = vec![competitor(1, 10000.0, 20.0, 80.0, 8.0)];
        let scored = score_cost_utility(&records, &CostUtilityCoefficients::default());
        assert_eq!(scored.len(), 1);
        let expected = 144.0 / 10025.0 * 1000.0;
        assert!((scored[0].cost_utility_ratio - expected).abs() < 1e-9);
        assert!((scored[0].estimated_logistics_cost - 50.0).abs() < 1e-9);
        assert_eq!(scored[0].rank, 1);
    }

    #[test]
    fn test_cost_utility_ranking_descending() {
        let records = vec![
            competitor(1, 20000.0, 30.0, 70.0, 7.0),
            competitor(2, 8000.0, 20.0, 85.0, 8.5),
        ];
        let scored = score_cost_utility(&records, &CostUtilityCoefficients::default());
        assert_eq!(scored[0].record.id, 2);
        assert!(scored[0].cost_utility_ratio > scored[1].cost_utility_ratio);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let records = vec![
            competitor(1, 12000.0, 24.0, 75.0, 7.5),
            competitor(2, 9000.0, 28.0, 65.0, 8.0),
        ];
        let a = score_comprehensive(&records, &WeightConfig::default());
        let b = score_comprehensive(&records, &WeightConfig::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(score_comprehensive(&[], &WeightConfig::default()).is_empty());
        assert!(score_cost_utility(&[], &CostUtilityCoefficients::default()).is_empty());
    }
}
