use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::DataError;
use crate::models::StockRecord;

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Open")]
    open: String,
    #[serde(rename = "High")]
    high: String,
    #[serde(rename = "Low")]
    low: String,
    #[serde(rename = "Close")]
    close: String,
    #[serde(rename = "Volume")]
    volume: String,
}

/// Read every record from `path` in file order.
pub fn load_records(path: &Path) -> Result<Vec<StockRecord>, DataError> {
    debug!("Opening price file {:?}", path);
    let file = File::open(path)?;
    let records = parse_records(file)?;
    info!("Loaded {} price records from {:?}", records.len(), path);
    Ok(records)
}

pub fn parse_records<R: Read>(reader: R) -> Result<Vec<StockRecord>, DataError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (line_num, result) in reader.deserialize::<CsvRow>().enumerate() {
        // Header is line 1.
        let line = line_num as u64 + 2;
        records.push(parse_row(line, result?)?);
    }

    if records.is_empty() {
        return Err(DataError::Empty);
    }

    Ok(records)
}

fn parse_row(line: u64, row: CsvRow) -> Result<StockRecord, DataError> {
    let date = parse_date(&row.date).ok_or_else(|| DataError::InvalidDate {
        line,
        value: row.date.clone(),
    })?;

    Ok(StockRecord::new(
        date,
        parse_price(line, "Open", &row.open)?,
        parse_price(line, "High", &row.high)?,
        parse_price(line, "Low", &row.low)?,
        parse_price(line, "Close", &row.close)?,
        parse_volume(line, &row.volume)?,
    ))
}

/// Accepts plain dates, timestamps with or without an offset, and US-style dates.
/// Any time-of-day component is dropped.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.date_naive());
    }
    if let Ok(ts) = DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%:z") {
        return Some(ts.date_naive());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(ts.date());
    }
    NaiveDate::parse_from_str(value, "%m/%d/%Y").ok()
}

fn parse_price(line: u64, column: &'static str, value: &str) -> Result<f64, DataError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| DataError::InvalidNumber {
            line,
            column,
            value: value.to_string(),
        })
}

fn parse_volume(line: u64, value: &str) -> Result<u64, DataError> {
    if let Ok(volume) = value.parse::<u64>() {
        return Ok(volume);
    }

    // Some exports write volume as a float, e.g. "1234567.0".
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v.round() as u64)
        .ok_or_else(|| DataError::InvalidNumber {
            line,
            column: "Volume",
            value: value.to_string(),
        })
}
