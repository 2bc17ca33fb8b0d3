/// Data layer: launch records, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset  │  Vec<LaunchRecord>, sites, payload bounds
///   └───────────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌──────────┐   ┌────────────┐
///   │  filter   │   │ aggregate   │
///   └──────────┘   └────────────┘
///   payload range    outcome counts
///   + site → rows    per site / per class
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;

#[cfg(test)]
pub(crate) mod fixtures {
    use super::model::{LaunchDataset, LaunchRecord, Outcome};

    pub fn record(site: &str, payload: f64, outcome: Outcome, booster: &str) -> LaunchRecord {
        LaunchRecord {
            flight_number: None,
            site: site.to_string(),
            payload_mass_kg: payload,
            outcome,
            booster_version: None,
            booster_category: booster.to_string(),
        }
    }

    /// The three-launch table used throughout the tests.
    pub fn small() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("SiteA", 500.0, Outcome::Success, "v1.0"),
            record("SiteA", 1500.0, Outcome::Failure, "v1.1"),
            record("SiteB", 3000.0, Outcome::Success, "FT"),
        ])
        .expect("fixture is valid")
    }

    /// A larger table spread across four sites and the whole payload domain.
    pub fn spread() -> LaunchDataset {
        let sites = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];
        let boosters = ["v1.0", "v1.1", "FT", "B4", "B5"];
        let records = (0..40)
            .map(|i| {
                let outcome = if i % 3 == 0 {
                    Outcome::Failure
                } else {
                    Outcome::Success
                };
                record(
                    sites[i % sites.len()],
                    (i as f64) * 250.0,
                    outcome,
                    boosters[i % boosters.len()],
                )
            })
            .collect();
        LaunchDataset::from_records(records).expect("fixture is valid")
    }
}
