//! Output formatting module

use seatscope_domain::service::{
    CellMark, ComparisonRow, ComprehensiveScore, CostUtilityScore, FreightEstimate,
};
use seatscope_domain::PartRecord;
use seatscope_types::{OutputFormat, Result};

pub fn print_parts(output_format: OutputFormat, parts: &[PartRecord]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(parts)?;
        println!("{}", content);
        return Ok(());
    }

    if parts.is_empty() {
        println!("No parts match.");
        return Ok(());
    }

    println!(
        "{:<4} {:<10} {:<10} {:<6} {:<16} {:<20} {:>8} {:>7}  {}",
        "ID", "Brand", "Series", "Year", "Position", "Material", "Price", "Weight", "Features"
    );
    for part in parts {
        let features: Vec<_> = part.features.iter().map(|f| f.label()).collect();
        println!(
            "{:<4} {:<10} {:<10} {:<6} {:<16} {:<20} {:>8.0} {:>7.1}  {}",
            part.id,
            part.brand,
            part.series,
            part.year,
            part.position.label(),
            part.material.label(),
            part.price,
            part.weight,
            features.join(", ")
        );
    }
    println!("\n{} part(s)", parts.len());

    Ok(())
}

pub fn print_options(
    output_format: OutputFormat,
    brands: &[String],
    series: &[String],
    years: &[u16],
    brand_filter: Option<&str>,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&serde_json::json!({
            "brands": brands,
            "series": series,
            "years": years,
        }))?;
        println!("{}", content);
        return Ok(());
    }

    println!("Brands: {}", brands.join(", "));
    match brand_filter {
        Some(brand) => println!("Series ({}): {}", brand, series.join(", ")),
        None => println!("Series: {}", series.join(", ")),
    }
    let years: Vec<String> = years.iter().map(|y| y.to_string()).collect();
    println!("Years:  {}", years.join(", "));

    Ok(())
}

pub fn print_comparison(
    output_format: OutputFormat,
    selection: &[PartRecord],
    rows: &[ComparisonRow],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(rows)?;
        println!("{}", content);
        return Ok(());
    }

    if rows.is_empty() {
        println!("Nothing to compare.");
        return Ok(());
    }

    println!("\nPart Comparison");
    println!("===============");

    print!("{:<14}", "");
    for part in selection {
        print!(" {:<26}", part.display_name());
    }
    println!();

    for row in rows {
        print!("{:<14}", row.attribute.label());
        for cell in &row.cells {
            let text = match cell.mark {
                CellMark::Better => format!("{} ✓", cell.text),
                CellMark::Worse => format!("{} ✗", cell.text),
                CellMark::Normal => cell.text.clone(),
            };
            print!(" {:<26}", text);
        }
        println!();
    }

    Ok(())
}

pub fn print_comprehensive(
    output_format: OutputFormat,
    scores: &[ComprehensiveScore],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(scores)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nCompetitor Ranking (comprehensive)");
    println!("==================================");
    println!(
        "{:<5} {:<10} {:<10} {:>8} {:>7} {:>7} {:>7} {:>7} {:>7} {:>7}",
        "Rank", "Brand", "Series", "Price", "Weight", "P-Scr", "W-Scr", "F-Scr", "M-Scr", "Total"
    );
    for score in scores {
        let record = &score.record;
        println!(
            "{:<5} {:<10} {:<10} {:>8.0} {:>7.1} {:>7.2} {:>7.2} {:>7.2} {:>7.2} {:>7.1}",
            score.rank,
            record.brand,
            record.series,
            record.price,
            record.weight,
            score.price_score,
            score.weight_score,
            score.feature_score,
            score.material_score,
            score.total_score
        );
    }

    Ok(())
}

pub fn print_cost_utility(output_format: OutputFormat, scores: &[CostUtilityScore]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(scores)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nCompetitor Ranking (cost-utility)");
    println!("=================================");
    println!(
        "{:<5} {:<10} {:<10} {:>8} {:>7} {:>10} {:>8}",
        "Rank", "Brand", "Series", "Price", "Weight", "Logistics", "Ratio"
    );
    for score in scores {
        let record = &score.record;
        println!(
            "{:<5} {:<10} {:<10} {:>8.0} {:>7.1} {:>10.1} {:>8.2}",
            score.rank,
            record.brand,
            record.series,
            record.price,
            record.weight,
            score.estimated_logistics_cost,
            score.cost_utility_ratio
        );
    }

    Ok(())
}

pub fn print_freight(output_format: OutputFormat, estimate: &FreightEstimate) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(estimate)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nFreight Estimate");
    println!("================");
    println!("Volumetric weight: {:.2} kg", estimate.volumetric_weight);
    println!("Actual weight:     {:.2} kg", estimate.actual_weight);
    println!(
        "Billable weight:   {:.2} kg ({})",
        estimate.billable_weight,
        estimate.basis.label()
    );
    println!();
    println!(
        "{:<16} {:>8} {:>10}  {}",
        "Provider", "Freight", "Cost Ratio", "Delivery"
    );
    for quote in &estimate.quotes {
        let ratio = quote
            .cost_ratio
            .map(|r| format!("{:.1}%", r))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<16} {:>8.2} {:>10}  {}",
            quote.provider.name, quote.freight, ratio, quote.provider.delivery_time
        );
    }

    if let Some(cheapest) = estimate.cheapest() {
        println!();
        println!(
            "Cheapest: {} at {:.2} ({})",
            cheapest.provider.name, cheapest.freight, cheapest.provider.delivery_time
        );
    }

    Ok(())
}
