use std::sync::Arc;

use serde::Serialize;

use crate::data::filter::{site_options, PayloadRange, SiteOption, SiteSelector};
use crate::data::model::LaunchDataset;
use crate::view::DashboardView;

// ---------------------------------------------------------------------------
// Payload slider settings
// ---------------------------------------------------------------------------

pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 10_000.0;
pub const SLIDER_STEP: f64 = 1_000.0;
pub const SLIDER_MARKS: [(f64, &str); 5] = [
    (0.0, "0"),
    (2_500.0, "2.5k"),
    (5_000.0, "5k"),
    (7_500.0, "7.5k"),
    (10_000.0, "10k"),
];

/// Slider domain for a dataset: `[SLIDER_MIN, SLIDER_MAX]`, widened to
/// cover payloads that fall outside it so the default range stays reachable.
pub fn slider_domain(dataset: &LaunchDataset) -> (f64, f64) {
    let bounds = dataset.payload_bounds();
    (SLIDER_MIN.min(bounds.min), SLIDER_MAX.max(bounds.max))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: &'static str,
}

/// Range slider configuration as the dashboard renders it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderSettings {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    /// Initial endpoints: the dataset's payload bounds.
    pub value: [f64; 2],
}

impl SliderSettings {
    pub fn for_dataset(dataset: &LaunchDataset) -> Self {
        let bounds = dataset.payload_bounds();
        let (min, max) = slider_domain(dataset);
        SliderSettings {
            min,
            max,
            step: SLIDER_STEP,
            marks: SLIDER_MARKS
                .iter()
                .map(|&(value, label)| SliderMark { value, label })
                .collect(),
            value: [bounds.min, bounds.max],
        }
    }
}

/// Dropdown and slider configuration for a loaded dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlOptions {
    pub sites: Vec<SiteOption>,
    pub payload: SliderSettings,
}

impl ControlOptions {
    pub fn for_dataset(dataset: &LaunchDataset) -> Self {
        ControlOptions {
            sites: site_options(dataset),
            payload: SliderSettings::for_dataset(dataset),
        }
    }
}

// ---------------------------------------------------------------------------
// Control values
// ---------------------------------------------------------------------------

/// Current values of the two dashboard controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    pub site: SiteSelector,
    pub payload: PayloadRange,
}

impl Controls {
    /// Dashboard defaults: every site, the full payload span of the data.
    pub fn initial(dataset: &LaunchDataset) -> Self {
        let bounds = dataset.payload_bounds();
        Controls {
            site: SiteSelector::All,
            payload: PayloadRange::new(bounds.min, bounds.max),
        }
    }

    /// Build controls from raw submitted values.
    ///
    /// A missing or non-finite endpoint falls back to the dataset bound.
    /// Submitted endpoints are clamped to [`slider_domain`] and ordered, so
    /// resubmitting the defaults leaves the range unchanged.
    pub fn from_submitted(
        dataset: &LaunchDataset,
        site: Option<&str>,
        lo: Option<f64>,
        hi: Option<f64>,
    ) -> Self {
        let bounds = dataset.payload_bounds();
        let controls = Controls {
            site: site.map(SiteSelector::parse).unwrap_or_default(),
            payload: PayloadRange::new(bounds.min, bounds.max),
        };
        match (lo.filter(|v| v.is_finite()), hi.filter(|v| v.is_finite())) {
            (None, None) => controls,
            (lo, hi) => {
                controls.with_range(dataset, lo.unwrap_or(bounds.min), hi.unwrap_or(bounds.max))
            }
        }
    }

    /// Replace the payload range, clamped into the dataset's slider domain
    /// with `lo <= hi`.
    pub fn with_range(self, dataset: &LaunchDataset, lo: f64, hi: f64) -> Self {
        let (min, max) = slider_domain(dataset);
        let lo = lo.clamp(min, max);
        let hi = hi.clamp(min, max);
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        Controls {
            payload: PayloadRange::new(lo, hi),
            ..self
        }
    }
}

// ---------------------------------------------------------------------------
// Desktop application state
// ---------------------------------------------------------------------------

/// The full desktop UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<Arc<LaunchDataset>>,

    /// Control values; present whenever `dataset` is.
    pub controls: Option<Controls>,

    /// Charts for the current controls (cached).
    pub view: Option<DashboardView>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a newly loaded dataset and reset the controls to their defaults.
    pub fn set_dataset(&mut self, dataset: Arc<LaunchDataset>) {
        self.controls = Some(Controls::initial(&dataset));
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refresh();
    }

    pub fn set_site(&mut self, site: SiteSelector) {
        if let Some(controls) = &mut self.controls {
            if controls.site != site {
                controls.site = site;
                self.refresh();
            }
        }
    }

    pub fn set_payload_range(&mut self, lo: f64, hi: f64) {
        let (Some(dataset), Some(controls)) = (&self.dataset, &self.controls) else {
            return;
        };
        let updated = controls.clone().with_range(dataset, lo, hi);
        if updated != *controls {
            self.controls = Some(updated);
            self.refresh();
        }
    }

    /// Recompute both charts after a control change.
    pub fn refresh(&mut self) {
        self.view = match (&self.dataset, &self.controls) {
            (Some(ds), Some(controls)) => {
                log::debug!(
                    "recomputing charts: site={} payload=[{}, {}]",
                    controls.site.value(),
                    controls.payload.lo,
                    controls.payload.hi
                );
                Some(DashboardView::compute(ds, controls))
            }
            _ => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{record, small};
    use crate::data::model::Outcome;

    fn heavy() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("KSC", 500.0, Outcome::Success, "FT"),
            record("KSC", 15_600.0, Outcome::Success, "B5"),
            record("VAFB", 2_000.0, Outcome::Failure, "FT"),
        ])
        .unwrap()
    }

    #[test]
    fn initial_controls_span_the_dataset() {
        let ds = small();
        let c = Controls::initial(&ds);
        assert_eq!(c.site, SiteSelector::All);
        assert_eq!(c.payload, PayloadRange::new(500.0, 3000.0));
    }

    #[test]
    fn submitted_values_are_clamped_and_ordered() {
        let ds = small();
        let c = Controls::from_submitted(&ds, Some("SiteB"), Some(12_000.0), Some(-5.0));
        assert_eq!(c.site, SiteSelector::Site("SiteB".into()));
        assert_eq!(c.payload, PayloadRange::new(0.0, 10_000.0));
    }

    #[test]
    fn missing_endpoints_fall_back_to_bounds() {
        let ds = small();
        let c = Controls::from_submitted(&ds, None, Some(1000.0), None);
        assert_eq!(c.payload, PayloadRange::new(1000.0, 3000.0));

        let c = Controls::from_submitted(&ds, Some("ALL"), Some(f64::NAN), None);
        assert_eq!(c, Controls::initial(&ds));
    }

    #[test]
    fn site_change_keeps_default_range_beyond_slider_max() {
        let ds = heavy();
        let initial = Controls::initial(&ds);
        let c = Controls::from_submitted(&ds, Some("KSC"), Some(500.0), Some(15_600.0));
        assert_eq!(c.site, SiteSelector::Site("KSC".into()));
        assert_eq!(c.payload, initial.payload);
        assert_eq!(DashboardView::compute(&ds, &c).scatter.point_count, 2);

        let c = Controls::from_submitted(&ds, None, Some(0.0), Some(99_000.0));
        assert_eq!(c.payload, PayloadRange::new(0.0, 15_600.0));
    }

    #[test]
    fn slider_domain_widens_only_for_outlying_payloads() {
        assert_eq!(slider_domain(&small()), (0.0, 10_000.0));
        assert_eq!(slider_domain(&heavy()), (0.0, 15_600.0));
        let s = SliderSettings::for_dataset(&heavy());
        assert_eq!((s.min, s.max), (0.0, 15_600.0));
        assert_eq!(s.value, [500.0, 15_600.0]);
    }

    #[test]
    fn slider_settings_carry_marks_and_defaults() {
        let s = SliderSettings::for_dataset(&small());
        assert_eq!(s.min, 0.0);
        assert_eq!(s.max, 10_000.0);
        assert_eq!(s.step, 1_000.0);
        let labels: Vec<&str> = s.marks.iter().map(|m| m.label).collect();
        assert_eq!(labels, ["0", "2.5k", "5k", "7.5k", "10k"]);
        assert_eq!(s.value, [500.0, 3000.0]);
    }

    #[test]
    fn app_state_recomputes_on_change() {
        let mut state = AppState::default();
        assert!(state.view.is_none());

        state.set_dataset(Arc::new(small()));
        let view = state.view.clone().unwrap();
        assert_eq!(view.scatter.point_count, 3);

        state.set_site(SiteSelector::Site("SiteA".into()));
        let view = state.view.clone().unwrap();
        assert_eq!(view.pie.title, "Success vs Failure for SiteA");
        assert_eq!(view.scatter.point_count, 2);

        state.set_payload_range(1000.0, 2000.0);
        assert_eq!(state.view.as_ref().unwrap().scatter.point_count, 1);
    }
}
