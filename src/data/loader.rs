use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value as JsonValue;

use super::filter::ALL_SITES_VALUE;
use super::model::{LaunchDataset, LaunchRecord, Outcome};
use crate::error::DatasetError;

pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";
pub const COL_FLIGHT_NUMBER: &str = "Flight Number";
pub const COL_BOOSTER_VERSION: &str = "Booster Version";

const REQUIRED_COLUMNS: [&str; 4] = [COL_SITE, COL_PAYLOAD, COL_CLASS, COL_BOOSTER_CATEGORY];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with at least the four required columns
/// * `.json` – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
pub fn load_file(path: &Path) -> Result<LaunchDataset, DatasetError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let open = || {
        File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })
    };

    match ext.as_str() {
        "csv" => load_csv_reader(open()?),
        "json" => load_json_reader(open()?),
        other => Err(DatasetError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one launch per row.
/// Columns other than the required and optional ones (e.g. the unnamed
/// pandas index) are ignored.
pub fn load_csv_reader<R: Read>(source: R) -> Result<LaunchDataset, DatasetError> {
    let mut reader = csv::Reader::from_reader(source);
    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| DatasetError::Csv { row: 0, source })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let index_of = |name: &str| headers.iter().position(|h| h == name);
    for col in REQUIRED_COLUMNS {
        if index_of(col).is_none() {
            return Err(DatasetError::MissingColumn(col));
        }
    }
    let columns: Vec<(&'static str, Option<usize>)> = REQUIRED_COLUMNS
        .into_iter()
        .chain([COL_FLIGHT_NUMBER, COL_BOOSTER_VERSION])
        .map(|name| (name, index_of(name)))
        .collect();

    let mut records = Vec::new();

    for (i, result) in reader.records().enumerate() {
        let row = i + 1;
        let record = result.map_err(|source| DatasetError::Csv { row, source })?;

        let cell = |name: &'static str| {
            columns
                .iter()
                .find(|(n, _)| *n == name)
                .and_then(|(_, idx)| *idx)
                .and_then(|idx| record.get(idx))
                .map(str::to_string)
        };
        records.push(build_record(row, cell)?);
    }

    LaunchDataset::from_records(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`:
///
/// ```json
/// [
///   { "Launch Site": "CCAFS LC-40", "Payload Mass (kg)": 0.0,
///     "class": 0, "Booster Version Category": "v1.0" },
///   ...
/// ]
/// ```
pub fn load_json_reader<R: Read>(source: R) -> Result<LaunchDataset, DatasetError> {
    let rows: Vec<serde_json::Map<String, JsonValue>> = serde_json::from_reader(source)?;

    let records = rows
        .iter()
        .enumerate()
        .map(|(i, obj)| build_record(i + 1, |name| obj.get(name).and_then(json_cell)))
        .collect::<Result<Vec<_>, _>>()?;

    LaunchDataset::from_records(records)
}

fn json_cell(val: &JsonValue) -> Option<String> {
    match val {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Row conversion shared by both formats
// ---------------------------------------------------------------------------

fn build_record(
    row: usize,
    cell: impl Fn(&'static str) -> Option<String>,
) -> Result<LaunchRecord, DatasetError> {
    let required = |name: &'static str| cell(name).ok_or(DatasetError::MissingColumn(name));
    let optional = |name: &'static str| {
        cell(name)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    let text = |name: &'static str| -> Result<String, DatasetError> {
        let value = required(name)?.trim().to_string();
        if value.is_empty() {
            return Err(DatasetError::EmptyField { row, column: name });
        }
        Ok(value)
    };

    let site = text(COL_SITE)?;
    if site == ALL_SITES_VALUE {
        return Err(DatasetError::ReservedSite { row, value: site });
    }
    let booster_category = text(COL_BOOSTER_CATEGORY)?;

    let payload_raw = required(COL_PAYLOAD)?;
    let payload_mass_kg = payload_raw
        .trim()
        .parse::<f64>()
        .map_err(|_| DatasetError::InvalidNumber {
            row,
            column: COL_PAYLOAD,
            value: payload_raw.clone(),
        })?;

    let class_raw = required(COL_CLASS)?;
    let outcome = Outcome::from_class(&class_raw).ok_or_else(|| DatasetError::InvalidClass {
        row,
        value: class_raw.clone(),
    })?;

    let flight_number = match optional(COL_FLIGHT_NUMBER) {
        Some(s) => Some(parse_flight_number(&s).ok_or(DatasetError::InvalidNumber {
            row,
            column: COL_FLIGHT_NUMBER,
            value: s,
        })?),
        None => None,
    };

    Ok(LaunchRecord {
        flight_number,
        site,
        payload_mass_kg,
        outcome,
        booster_version: optional(COL_BOOSTER_VERSION),
        booster_category,
    })
}

/// Flight numbers come out of pandas as either `7` or `7.0`.
fn parse_flight_number(s: &str) -> Option<u32> {
    if let Ok(n) = s.parse::<u32>() {
        return Some(n);
    }
    let f = s.parse::<f64>().ok()?;
    (f.fract() == 0.0 && f >= 0.0 && f <= u32::MAX as f64).then_some(f as u32)
}
