use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::DatasetError;

// ---------------------------------------------------------------------------
// Outcome – the binary launch class
// ---------------------------------------------------------------------------

/// Launch outcome. Serialised as the dataset's `class` value (1 / 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    /// Parse a `class` cell. Accepts integer and float spellings of 0 / 1.
    pub fn from_class(s: &str) -> Option<Self> {
        match s.trim() {
            "1" | "1.0" => Some(Outcome::Success),
            "0" | "0.0" => Some(Outcome::Failure),
            _ => None,
        }
    }

    pub fn class(self) -> u8 {
        match self {
            Outcome::Success => 1,
            Outcome::Failure => 0,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }

    /// Label used for pie slices in single-site mode.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Failure => "Failure",
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> u8 {
        outcome.class()
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the table
// ---------------------------------------------------------------------------

/// A single launch attempt (one row of the source table).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRecord {
    /// `Flight Number`, when the file carries it.
    pub flight_number: Option<u32>,
    /// `Launch Site`.
    pub site: String,
    /// `Payload Mass (kg)`.
    pub payload_mass_kg: f64,
    /// `class`.
    #[serde(rename = "class")]
    pub outcome: Outcome,
    /// `Booster Version`, when the file carries it.
    pub booster_version: Option<String>,
    /// `Booster Version Category`.
    pub booster_category: String,
}

// ---------------------------------------------------------------------------
// PayloadBounds – min / max payload computed at load time
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

impl PayloadBounds {
    fn of(records: &[LaunchRecord]) -> Option<Self> {
        let mut iter = records.iter().map(|r| r.payload_mass_kg);
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(PayloadBounds { min, max })
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed site and category indices.
///
/// Immutable once built; callers share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    booster_categories: Vec<String>,
    payload_bounds: PayloadBounds,
}

impl LaunchDataset {
    /// Validate the rows and build the indices.
    ///
    /// Row numbers in errors are 1-based data rows (header excluded).
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DatasetError> {
        for (i, rec) in records.iter().enumerate() {
            let mass = rec.payload_mass_kg;
            if !mass.is_finite() || mass < 0.0 {
                return Err(DatasetError::InvalidPayload {
                    row: i + 1,
                    value: mass,
                });
            }
        }

        let payload_bounds = PayloadBounds::of(&records).ok_or(DatasetError::Empty)?;

        let sites: BTreeSet<&str> = records.iter().map(|r| r.site.as_str()).collect();
        let categories: BTreeSet<&str> = records
            .iter()
            .map(|r| r.booster_category.as_str())
            .collect();
        let sites = sites.into_iter().map(str::to_string).collect();
        let booster_categories = categories.into_iter().map(str::to_string).collect();

        Ok(LaunchDataset {
            records,
            sites,
            booster_categories,
            payload_bounds,
        })
    }

    /// All rows, in file order.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites, sorted ascending.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Distinct booster version categories, sorted ascending.
    pub fn booster_categories(&self) -> &[String] {
        &self.booster_categories
    }

    pub fn payload_bounds(&self) -> PayloadBounds {
        self.payload_bounds
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.binary_search_by(|s| s.as_str().cmp(site)).is_ok()
    }

    /// Rows launched from `site`, in file order.
    pub fn records_for_site<'a>(&'a self, site: &'a str) -> impl Iterator<Item = &'a LaunchRecord> {
        self.records.iter().filter(move |r| r.site == site)
    }

    pub fn total_successes(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_success()).count()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a successfully built dataset.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
