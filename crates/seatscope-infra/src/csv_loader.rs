//! CSV loaders for seat part and competitor catalogs
//!
//! Expected part header:
//! id,brand,series,year,model,position,material,features,price,weight,length,width,height,description,image
//! `features` is a `|`-separated list of feature names. Enumerated
//! columns use the kebab-case names (e.g. `driver-front`,
//! `nappa-leather`, `power-adjust`).
//!
//! Expected competitor header:
//! id,brand,series,price,weight,feature_score,material_score,market_share

use std::fs;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use seatscope_domain::{CompetitorRecord, PartRecord};
use seatscope_types::{Dimensions, Error, Feature, Material, SeatPosition};

#[derive(Error, Debug)]
pub enum CsvLoaderError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid number format in row {row}, column {column}: {value}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Invalid value in row {row}, column {column}: {value}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

impl From<CsvLoaderError> for Error {
    fn from(err: CsvLoaderError) -> Self {
        Error::CsvLoader(err.to_string())
    }
}

/// Load a seat part catalog from a UTF-8 CSV file
pub fn load_parts_csv<P: AsRef<Path>>(path: P) -> Result<Vec<PartRecord>, CsvLoaderError> {
    let content = fs::read_to_string(path)?;
    load_parts_from_str(&content)
}

/// Parse a seat part catalog from CSV text
pub fn load_parts_from_str(content: &str) -> Result<Vec<PartRecord>, CsvLoaderError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    validate_headers(
        &headers,
        &[
            "id", "brand", "series", "year", "model", "position", "material", "features",
            "price", "weight", "length", "width", "height",
        ],
    )?;

    let mut parts = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        // Header is row 1, first data row is row 2
        let row_num = row_idx + 2;
        parts.push(parse_part_record(&record, row_num)?);
    }

    Ok(parts)
}

/// Load a competitor catalog from a UTF-8 CSV file
pub fn load_competitors_csv<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<CompetitorRecord>, CsvLoaderError> {
    let content = fs::read_to_string(path)?;
    load_competitors_from_str(&content)
}

/// Parse a competitor catalog from CSV text
pub fn load_competitors_from_str(content: &str) -> Result<Vec<CompetitorRecord>, CsvLoaderError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    validate_headers(
        &headers,
        &[
            "id",
            "brand",
            "series",
            "price",
            "weight",
            "feature_score",
            "material_score",
            "market_share",
        ],
    )?;

    let mut competitors = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = row_idx + 2;
        competitors.push(parse_competitor_record(&record, row_num)?);
    }

    Ok(competitors)
}

fn validate_headers(
    headers: &csv::StringRecord,
    required: &[&str],
) -> Result<(), CsvLoaderError> {
    for col in required {
        if !headers.iter().any(|h| h == *col) {
            return Err(CsvLoaderError::MissingColumn(col.to_string()));
        }
    }
    Ok(())
}

fn parse_part_record(
    record: &csv::StringRecord,
    row_num: usize,
) -> Result<PartRecord, CsvLoaderError> {
    let id = parse_u32(record.get(0).unwrap_or(""), row_num, "id")?;
    let brand = record.get(1).unwrap_or("").to_string();
    let series = record.get(2).unwrap_or("").to_string();
    let year = parse_u32(record.get(3).unwrap_or(""), row_num, "year")? as u16;
    let model = record.get(4).unwrap_or("").to_string();

    let position = parse_enum::<SeatPosition>(record.get(5).unwrap_or(""), row_num, "position")?;
    let material = parse_enum::<Material>(record.get(6).unwrap_or(""), row_num, "material")?;

    let features_field = record.get(7).unwrap_or("");
    let mut features = Vec::new();
    for name in features_field.split('|').filter(|s| !s.is_empty()) {
        features.push(parse_enum::<Feature>(name, row_num, "features")?);
    }

    let price = parse_f64(record.get(8).unwrap_or(""), row_num, "price")?;
    let weight = parse_f64(record.get(9).unwrap_or(""), row_num, "weight")?;
    let length = parse_f64(record.get(10).unwrap_or(""), row_num, "length")?;
    let width = parse_f64(record.get(11).unwrap_or(""), row_num, "width")?;
    let height = parse_f64(record.get(12).unwrap_or(""), row_num, "height")?;

    let description = record.get(13).unwrap_or("").to_string();
    let image = record.get(14).unwrap_or("").to_string();

    Ok(PartRecord {
        id,
        brand,
        series,
        year,
        model,
        position,
        material,
        features,
        price,
        weight,
        dimensions: Dimensions::new(length, width, height),
        description,
        image,
    })
}

fn parse_competitor_record(
    record: &csv::StringRecord,
    row_num: usize,
) -> Result<CompetitorRecord, CsvLoaderError> {
    Ok(CompetitorRecord {
        id: parse_u32(record.get(0).unwrap_or(""), row_num, "id")?,
        brand: record.get(1).unwrap_or("").to_string(),
        series: record.get(2).unwrap_or("").to_string(),
        price: parse_f64(record.get(3).unwrap_or(""), row_num, "price")?,
        weight: parse_f64(record.get(4).unwrap_or(""), row_num, "weight")?,
        feature_score: parse_f64(record.get(5).unwrap_or(""), row_num, "feature_score")?,
        material_score: parse_f64(record.get(6).unwrap_or(""), row_num, "material_score")?,
        market_share: parse_f64(record.get(7).unwrap_or(""), row_num, "market_share")?,
    })
}

fn parse_f64(value: &str, row: usize, column: &str) -> Result<f64, CsvLoaderError> {
    value.parse().map_err(|_| CsvLoaderError::InvalidNumber {
        row,
        column: column.to_string(),
        value: value.to_string(),
    })
}

fn parse_u32(value: &str, row: usize, column: &str) -> Result<u32, CsvLoaderError> {
    value.parse().map_err(|_| CsvLoaderError::InvalidNumber {
        row,
        column: column.to_string(),
        value: value.to_string(),
    })
}

fn parse_enum<T: FromStr>(value: &str, row: usize, column: &str) -> Result<T, CsvLoaderError> {
    value.parse().map_err(|_| CsvLoaderError::InvalidValue {
        row,
        column: column.to_string(),
        value: value.to_string(),
    })
}
