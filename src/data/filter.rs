use std::fmt;

use serde::Serialize;

use super::model::{LaunchDataset, LaunchRecord};

/// Dropdown value meaning "every site".
pub const ALL_SITES_VALUE: &str = "ALL";
/// Dropdown label for [`ALL_SITES_VALUE`].
pub const ALL_SITES_LABEL: &str = "All Sites";

// ---------------------------------------------------------------------------
// SiteSelector – the site dropdown value
// ---------------------------------------------------------------------------

/// Either every site or one named site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelector {
    #[default]
    All,
    Site(String),
}

impl SiteSelector {
    /// Parse a dropdown value. `ALL` and the empty string select every site.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL_SITES_VALUE {
            SiteSelector::All
        } else {
            SiteSelector::Site(value.to_string())
        }
    }

    /// The value submitted by the dropdown.
    pub fn value(&self) -> &str {
        match self {
            SiteSelector::All => ALL_SITES_VALUE,
            SiteSelector::Site(s) => s,
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelector::All => true,
            SiteSelector::Site(s) => record.site == *s,
        }
    }
}

impl fmt::Display for SiteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelector::All => f.write_str(ALL_SITES_LABEL),
            SiteSelector::Site(s) => f.write_str(s),
        }
    }
}

/// One dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// `All Sites` followed by every site of the dataset, sorted ascending.
pub fn site_options(dataset: &LaunchDataset) -> Vec<SiteOption> {
    std::iter::once(SiteOption {
        label: ALL_SITES_LABEL.to_string(),
        value: ALL_SITES_VALUE.to_string(),
    })
    .chain(dataset.sites().iter().map(|s| SiteOption {
        label: s.clone(),
        value: s.clone(),
    }))
    .collect()
}

// ---------------------------------------------------------------------------
// Payload range filter
// ---------------------------------------------------------------------------

/// Inclusive payload interval in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    pub lo: f64,
    pub hi: f64,
}

impl PayloadRange {
    pub fn new(lo: f64, hi: f64) -> Self {
        PayloadRange { lo, hi }
    }

    /// Boundary-inclusive membership. An inverted range contains nothing.
    pub fn contains(&self, mass: f64) -> bool {
        mass >= self.lo && mass <= self.hi
    }
}

/// Rows whose payload lies in `range` and whose site matches `selector`,
/// in dataset order.
///
/// An unknown site or a range with no launches yields an empty vector.
pub fn filter_launches<'a>(
    dataset: &'a LaunchDataset,
    selector: &SiteSelector,
    range: PayloadRange,
) -> Vec<&'a LaunchRecord> {
    dataset
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg) && selector.matches(r))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{small, spread};

    fn payloads(rows: &[&LaunchRecord]) -> Vec<f64> {
        rows.iter().map(|r| r.payload_mass_kg).collect()
    }

    #[test]
    fn all_sites_range_keeps_order() {
        let ds = small();
        let rows = filter_launches(&ds, &SiteSelector::All, PayloadRange::new(0.0, 2000.0));
        assert_eq!(payloads(&rows), [500.0, 1500.0]);
        assert!(rows.iter().all(|r| r.site == "SiteA"));
    }

    #[test]
    fn bounds_are_inclusive() {
        let ds = small();
        let rows = filter_launches(&ds, &SiteSelector::All, PayloadRange::new(500.0, 3000.0));
        assert_eq!(rows.len(), 3);
        let rows = filter_launches(&ds, &SiteSelector::All, PayloadRange::new(1500.0, 1500.0));
        assert_eq!(payloads(&rows), [1500.0]);
    }

    #[test]
    fn range_filter_matches_a_brute_force_check() {
        let ds = spread();
        let ranges = [(0.0, 10000.0), (0.0, 0.0), (250.0, 2750.0), (9000.0, 9750.0), (4100.0, 4200.0)];
        for (lo, hi) in ranges {
            let range = PayloadRange::new(lo, hi);
            let rows = filter_launches(&ds, &SiteSelector::All, range);
            let expected: Vec<f64> = ds
                .records()
                .iter()
                .map(|r| r.payload_mass_kg)
                .filter(|m| *m >= lo && *m <= hi)
                .collect();
            assert_eq!(payloads(&rows), expected, "range [{lo}, {hi}]");
        }
    }

    #[test]
    fn restricting_by_site_narrows_the_result() {
        let ds = spread();
        let range = PayloadRange::new(1000.0, 8000.0);
        let all = filter_launches(&ds, &SiteSelector::All, range);
        for site in ds.sites() {
            let one = filter_launches(&ds, &SiteSelector::Site(site.clone()), range);
            assert!(one.len() <= all.len());
            assert!(one.iter().all(|r| r.site == *site));
            assert!(one.iter().all(|r| all.contains(r)));
        }
    }

    #[test]
    fn empty_results_are_not_errors() {
        let ds = small();
        assert!(filter_launches(&ds, &SiteSelector::All, PayloadRange::new(4000.0, 5000.0)).is_empty());
        assert!(filter_launches(&ds, &SiteSelector::All, PayloadRange::new(2000.0, 1000.0)).is_empty());
        let unknown = SiteSelector::Site("Nowhere".into());
        assert!(filter_launches(&ds, &unknown, PayloadRange::new(0.0, 10000.0)).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = spread();
        let sel = SiteSelector::Site("KSC LC-39A".into());
        let range = PayloadRange::new(2500.0, 7500.0);
        assert_eq!(
            filter_launches(&ds, &sel, range),
            filter_launches(&ds, &sel, range)
        );
    }

    #[test]
    fn selector_parsing() {
        assert_eq!(SiteSelector::parse("ALL"), SiteSelector::All);
        assert_eq!(SiteSelector::parse(""), SiteSelector::All);
        assert_eq!(
            SiteSelector::parse("KSC LC-39A"),
            SiteSelector::Site("KSC LC-39A".into())
        );
        assert_eq!(SiteSelector::All.value(), "ALL");
        assert_eq!(SiteSelector::All.to_string(), "All Sites");
    }

    #[test]
    fn options_start_with_all_sites() {
        let opts = site_options(&small());
        let values: Vec<&str> = opts.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, ["ALL", "SiteA", "SiteB"]);
        assert_eq!(opts[0].label, "All Sites");
    }
}
