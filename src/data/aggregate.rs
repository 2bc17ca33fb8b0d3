use std::collections::BTreeMap;

use super::filter::SiteSelector;
use super::model::{LaunchDataset, Outcome};

/// Labelled counts feeding the proportion chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeSummary {
    /// `(label, count)` in display order.
    pub slices: Vec<(String, usize)>,
}

impl OutcomeSummary {
    pub fn get(&self, label: &str) -> Option<usize> {
        self.slices
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
    }

    pub fn total(&self) -> usize {
        self.slices.iter().map(|(_, c)| c).sum()
    }

    /// True when there are no slices at all (unknown site).
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// Count launch outcomes for the selected site(s).
///
/// * every site: successful launches per site, sites sorted ascending,
///   zero-success sites kept;
/// * one site: `Success` and `Failure` counts for that site;
/// * a site the dataset does not know: no slices.
pub fn aggregate_outcomes(dataset: &LaunchDataset, selector: &SiteSelector) -> OutcomeSummary {
    let slices = match selector {
        SiteSelector::All => {
            let mut per_site: BTreeMap<&str, usize> =
                dataset.sites().iter().map(|s| (s.as_str(), 0)).collect();
            for rec in dataset.records().iter().filter(|r| r.outcome.is_success()) {
                *per_site.entry(rec.site.as_str()).or_default() += 1;
            }
            per_site
                .into_iter()
                .map(|(site, n)| (site.to_string(), n))
                .collect()
        }
        SiteSelector::Site(site) if dataset.has_site(site) => {
            let (mut success, mut failure) = (0, 0);
            for rec in dataset.records_for_site(site) {
                match rec.outcome {
                    Outcome::Success => success += 1,
                    Outcome::Failure => failure += 1,
                }
            }
            vec![
                (Outcome::Success.label().to_string(), success),
                (Outcome::Failure.label().to_string(), failure),
            ]
        }
        SiteSelector::Site(_) => Vec::new(),
    };
    OutcomeSummary { slices }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{small, spread};

    #[test]
    fn all_sites_counts_successes_per_site() {
        let summary = aggregate_outcomes(&small(), &SiteSelector::All);
        assert_eq!(
            summary.slices,
            [("SiteA".to_string(), 1), ("SiteB".to_string(), 1)]
        );
    }

    #[test]
    fn one_site_splits_success_and_failure() {
        let summary = aggregate_outcomes(&small(), &SiteSelector::Site("SiteA".into()));
        assert_eq!(summary.get("Success"), Some(1));
        assert_eq!(summary.get("Failure"), Some(1));
        assert_eq!(summary.slices[0].0, "Success");
    }

    #[test]
    fn per_site_successes_sum_to_dataset_total() {
        let ds = spread();
        let summary = aggregate_outcomes(&ds, &SiteSelector::All);
        assert_eq!(summary.total(), ds.total_successes());
        assert_eq!(summary.slices.len(), ds.sites().len());
    }

    #[test]
    fn site_split_sums_to_site_total() {
        let ds = spread();
        for site in ds.sites() {
            let summary = aggregate_outcomes(&ds, &SiteSelector::Site(site.clone()));
            assert_eq!(summary.total(), ds.records_for_site(site).count());
        }
    }

    #[test]
    fn sites_without_successes_keep_a_zero_slice() {
        use crate::data::fixtures::record;
        let ds = LaunchDataset::from_records(vec![
            record("A", 1.0, Outcome::Failure, "FT"),
            record("B", 2.0, Outcome::Success, "FT"),
        ])
        .unwrap();
        let summary = aggregate_outcomes(&ds, &SiteSelector::All);
        assert_eq!(summary.get("A"), Some(0));
        assert_eq!(summary.get("B"), Some(1));
    }

    #[test]
    fn unknown_site_yields_nothing() {
        let summary = aggregate_outcomes(&small(), &SiteSelector::Site("Nowhere".into()));
        assert!(summary.is_empty());
        assert_eq!(summary.total(), 0);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let ds = spread();
        for sel in [SiteSelector::All, SiteSelector::Site("VAFB SLC-4E".into())] {
            assert_eq!(aggregate_outcomes(&ds, &sel), aggregate_outcomes(&ds, &sel));
        }
    }
}
