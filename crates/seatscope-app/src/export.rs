//! Excel export functionality

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet};

use seatscope_domain::service::{CellMark, ComparisonRow, ComprehensiveScore, CostUtilityScore};
use seatscope_domain::PartRecord;
use seatscope_types::{Error, Result};

/// Export a part comparison to an Excel file
pub fn export_comparison(
    selection: &[PartRecord],
    rows: &[ComparisonRow],
    output_path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    write_comparison_sheet(sheet, selection, rows)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

/// Export a comprehensive analysis ranking to an Excel file
pub fn export_comprehensive(scores: &[ComprehensiveScore], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    write_comprehensive_sheet(sheet, scores)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

/// Export a cost-utility analysis ranking to an Excel file
pub fn export_cost_utility(scores: &[CostUtilityScore], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    write_cost_utility_sheet(sheet, scores)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_comparison_sheet(
    sheet: &mut Worksheet,
    selection: &[PartRecord],
    rows: &[ComparisonRow],
) -> Result<()> {
    sheet
        .set_name("Comparison")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    // Column headers: attribute column plus one column per part
    sheet
        .write_string_with_format(0, 0, "Attribute", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;
    for (col, part) in selection.iter().enumerate() {
        sheet
            .write_string_with_format(0, (col + 1) as u16, &part.display_name(), &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, row) in rows.iter().enumerate() {
        let excel_row = (row_idx + 1) as u32;
        sheet
            .write_string(excel_row, 0, row.attribute.label())
            .map_err(|e| Error::Excel(e.to_string()))?;

        for (col, cell) in row.cells.iter().enumerate() {
            let text = match cell.mark {
                CellMark::Better => format!("{} (best)", cell.text),
                CellMark::Worse => format!("{} (worst)", cell.text),
                CellMark::Normal => cell.text.clone(),
            };
            sheet
                .write_string(excel_row, (col + 1) as u16, &text)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
    }

    sheet
        .set_column_width(0, 16)
        .map_err(|e| Error::Excel(e.to_string()))?;
    for col in 1..=selection.len() {
        sheet
            .set_column_width(col as u16, 28)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    Ok(())
}

fn write_comprehensive_sheet(sheet: &mut Worksheet, scores: &[ComprehensiveScore]) -> Result<()> {
    sheet
        .set_name("Comprehensive")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    let headers = [
        "Rank",
        "Brand",
        "Series",
        "Price",
        "Weight (kg)",
        "Price Score",
        "Weight Score",
        "Feature Score",
        "Material Score",
        "Total Score",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, score) in scores.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        let record = &score.record;

        sheet
            .write_number(row, 0, score.rank as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, &record.brand)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 2, &record.series)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 3, record.price)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 4, record.weight)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 5, score.price_score)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 6, score.weight_score)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 7, score.feature_score)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 8, score.material_score)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 9, score.total_score)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    sheet
        .set_column_width(1, 14)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(2, 14)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_cost_utility_sheet(sheet: &mut Worksheet, scores: &[CostUtilityScore]) -> Result<()> {
    sheet
        .set_name("Cost Utility")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    let headers = [
        "Rank",
        "Brand",
        "Series",
        "Price",
        "Weight (kg)",
        "Est. Logistics Cost",
        "Cost-Utility Ratio",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, score) in scores.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        let record = &score.record;

        sheet
            .write_number(row, 0, score.rank as f64)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, &record.brand)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 2, &record.series)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 3, record.price)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 4, record.weight)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 5, score.estimated_logistics_cost)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 6, score.cost_utility_ratio)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    sheet
        .set_column_width(1, 14)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(2, 14)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(5, 18)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(6, 18)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}
