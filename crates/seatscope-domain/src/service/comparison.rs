//! Side-by-side comparison service
//!
//! Builds one row per comparable attribute for a bounded selection of
//! parts, marking the best and worst cell in each numeric row.

use serde::Serialize;

use crate::model::PartRecord;

/// Presentational classification of a comparison cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellMark {
    Better,
    Worse,
    Normal,
}

/// Comparable attributes, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompareAttribute {
    Brand,
    Series,
    Year,
    Model,
    Position,
    Material,
    Price,
    Weight,
    Features,
    Dimensions,
}

impl CompareAttribute {
    pub fn label(&self) -> &'static str {
        match self {
            CompareAttribute::Brand => "Brand",
            CompareAttribute::Series => "Series",
            CompareAttribute::Year => "Year",
            CompareAttribute::Model => "Model",
            CompareAttribute::Position => "Position",
            CompareAttribute::Material => "Material",
            CompareAttribute::Price => "Price",
            CompareAttribute::Weight => "Weight (kg)",
            CompareAttribute::Features => "Features",
            CompareAttribute::Dimensions => "Dimensions",
        }
    }
}

/// One cell of the comparison matrix
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonCell {
    pub text: String,
    pub mark: CellMark,
}

impl ComparisonCell {
    fn plain(text: String) -> Self {
        Self {
            text,
            mark: CellMark::Normal,
        }
    }
}

/// One attribute row across the selected parts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub attribute: CompareAttribute,
    pub cells: Vec<ComparisonCell>,
}

/// Classify a numeric column. The minimum is checked first, so when all
/// values are equal (or only one item is selected) every cell is marked
/// Better, never Worse. Lower is better for both price and weight.
fn classify(values: &[f64]) -> Vec<CellMark> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    values
        .iter()
        .map(|&v| {
            if v == min {
                CellMark::Better
            } else if v == max {
                CellMark::Worse
            } else {
                CellMark::Normal
            }
        })
        .collect()
}

fn numeric_row<F>(
    attribute: CompareAttribute,
    selection: &[PartRecord],
    value: F,
    format: fn(f64) -> String,
) -> ComparisonRow
where
    F: Fn(&PartRecord) -> f64,
{
    let values: Vec<f64> = selection.iter().map(&value).collect();
    let marks = classify(&values);
    let cells = values
        .iter()
        .zip(marks)
        .map(|(&v, mark)| ComparisonCell {
            text: format(v),
            mark,
        })
        .collect();
    ComparisonRow { attribute, cells }
}

fn text_row<F>(attribute: CompareAttribute, selection: &[PartRecord], text: F) -> ComparisonRow
where
    F: Fn(&PartRecord) -> String,
{
    ComparisonRow {
        attribute,
        cells: selection.iter().map(|p| ComparisonCell::plain(text(p))).collect(),
    }
}

/// Build the comparison matrix for a selection of 0-5 parts. The marks
/// are presentational metadata only; rows are neither reordered nor
/// filtered by them.
pub fn build_comparison_rows(selection: &[PartRecord]) -> Vec<ComparisonRow> {
    if selection.is_empty() {
        return Vec::new();
    }

    vec![
        text_row(CompareAttribute::Brand, selection, |p| p.brand.clone()),
        text_row(CompareAttribute::Series, selection, |p| p.series.clone()),
        text_row(CompareAttribute::Year, selection, |p| p.year.to_string()),
        text_row(CompareAttribute::Model, selection, |p| p.model.clone()),
        text_row(CompareAttribute::Position, selection, |p| {
            p.position.label().to_string()
        }),
        text_row(CompareAttribute::Material, selection, |p| {
            p.material.label().to_string()
        }),
        numeric_row(CompareAttribute::Price, selection, |p| p.price, |v| {
            format!("{:.0}", v)
        }),
        numeric_row(CompareAttribute::Weight, selection, |p| p.weight, |v| {
            format!("{:.1}", v)
        }),
        text_row(CompareAttribute::Features, selection, |p| {
            let labels: Vec<_> = p.features.iter().map(|f| f.label()).collect();
            labels.join(", ")
        }),
        text_row(CompareAttribute::Dimensions, selection, |p| {
            p.dimensions.to_string()
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatscope_types::{Dimensions, Feature, Material, SeatPosition};

    fn part(id: u32, price: f64, weight: f64) -> PartRecord {
        PartRecord {
            id,
            brand: "BYD".to_string(),
            series: "Han".to_string(),
            year: 2024,
            model: format!("M{}", id),
            position: SeatPosition::DriverFront,
            material: Material::Leather,
            features: vec![Feature::Heating],
            price,
            weight,
            dimensions: Dimensions::new(60.0, 50.0, 40.0),
            description: String::new(),
            image: String::new(),
        }
    }

    fn row<'a>(rows: &'a [ComparisonRow], attribute: CompareAttribute) -> &'a ComparisonRow {
        rows.iter().find(|r| r.attribute == attribute).unwrap()
    }

    #[test]
    fn test_empty_selection_has_no_rows() {
        assert!(build_comparison_rows(&[]).is_empty());
    }

    #[test]
    fn test_min_marked_better_max_marked_worse() {
        let selection = vec![part(1, 9000.0, 30.0), part(2, 12000.0, 22.0), part(3, 15000.0, 26.0)];
        let rows = build_comparison_rows(&selection);

        let price = row(&rows, CompareAttribute::Price);
        assert_eq!(price.cells[0].mark, CellMark::Better);
        assert_eq!(price.cells[1].mark, CellMark::Normal);
        assert_eq!(price.cells[2].mark, CellMark::Worse);

        let weight = row(&rows, CompareAttribute::Weight);
        assert_eq!(weight.cells[0].mark, CellMark::Worse);
        assert_eq!(weight.cells[1].mark, CellMark::Better);
        assert_eq!(weight.cells[2].mark, CellMark::Normal);
    }

    #[test]
    fn test_all_equal_values_all_better() {
        let selection = vec![part(1, 9000.0, 25.0), part(2, 9000.0, 25.0), part(3, 9000.0, 25.0)];
        let rows = build_comparison_rows(&selection);
        for attribute in [CompareAttribute::Price, CompareAttribute::Weight] {
            let r = row(&rows, attribute);
            assert!(r.cells.iter().all(|c| c.mark == CellMark::Better));
        }
    }

    #[test]
    fn test_single_item_marked_better() {
        let rows = build_comparison_rows(&[part(1, 9000.0, 25.0)]);
        let price = row(&rows, CompareAttribute::Price);
        assert_eq!(price.cells[0].mark, CellMark::Better);
    }

    #[test]
    fn test_tied_extremes_marked_on_every_holder() {
        let selection = vec![part(1, 9000.0, 25.0), part(2, 9000.0, 25.0), part(3, 15000.0, 30.0)];
        let price = build_comparison_rows(&selection);
        let price = row(&price, CompareAttribute::Price);
        assert_eq!(price.cells[0].mark, CellMark::Better);
        assert_eq!(price.cells[1].mark, CellMark::Better);
        assert_eq!(price.cells[2].mark, CellMark::Worse);
    }

    #[test]
    fn test_non_numeric_rows_never_classified() {
        let selection = vec![part(1, 9000.0, 25.0), part(2, 12000.0, 28.0)];
        let rows = build_comparison_rows(&selection);
        for r in rows.iter().filter(|r| {
            !matches!(r.attribute, CompareAttribute::Price | CompareAttribute::Weight)
        }) {
            assert!(r.cells.iter().all(|c| c.mark == CellMark::Normal));
        }
    }

    #[test]
    fn test_one_row_per_attribute_one_cell_per_item() {
        let selection = vec![part(1, 9000.0, 25.0), part(2, 12000.0, 28.0)];
        let rows = build_comparison_rows(&selection);
        assert_eq!(rows.len(), 10);
        assert!(rows.iter().all(|r| r.cells.len() == 2));
    }
}
