//! Chart view models: what each chart shows for the current controls.
//!
//! Every view is a pure function of the dataset and the control values, so
//! the web handlers and the desktop viewer derive identical charts.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::color::{ColorMap, Rgb};
use crate::data::aggregate::aggregate_outcomes;
use crate::data::filter::{filter_launches, SiteSelector};
use crate::data::loader::{COL_CLASS, COL_PAYLOAD};
use crate::data::model::{LaunchDataset, Outcome};
use crate::state::Controls;

const SUCCESS_COLOR: Rgb = Rgb(44, 160, 44);
const FAILURE_COLOR: Rgb = Rgb(214, 39, 40);

pub fn pie_title(selector: &SiteSelector) -> String {
    match selector {
        SiteSelector::All => "Total Successful Launches by Site".to_string(),
        SiteSelector::Site(site) => format!("Success vs Failure for {site}"),
    }
}

pub fn scatter_title(selector: &SiteSelector) -> String {
    match selector {
        SiteSelector::All => "Payload vs Success (All Sites)".to_string(),
        SiteSelector::Site(site) => format!("Payload vs Success ({site})"),
    }
}

// ---------------------------------------------------------------------------
// Proportion chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    /// Share of the total in `[0, 1]`; zero when the total is zero.
    pub fraction: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieView {
    pub title: String,
    pub total: usize,
    pub slices: Vec<PieSlice>,
}

impl PieView {
    pub fn build(dataset: &LaunchDataset, selector: &SiteSelector) -> Self {
        let summary = aggregate_outcomes(dataset, selector);
        let total = summary.total();

        let site_colors = match selector {
            SiteSelector::All => Some(ColorMap::new(dataset.sites().iter().cloned())),
            SiteSelector::Site(_) => None,
        };
        let color_of = |label: &str| match &site_colors {
            Some(map) => map.color_for(label),
            None if label == Outcome::Success.label() => SUCCESS_COLOR,
            None => FAILURE_COLOR,
        };

        let slices = summary
            .slices
            .into_iter()
            .map(|(label, count)| PieSlice {
                fraction: if total == 0 {
                    0.0
                } else {
                    count as f64 / total as f64
                },
                color: color_of(&label),
                label,
                count,
            })
            .collect();

        PieView {
            title: pie_title(selector),
            total,
            slices,
        }
    }

    /// Nothing to draw: unknown site or no counted launches.
    pub fn is_blank(&self) -> bool {
        self.total == 0
    }
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub class: u8,
    /// Shown on hover.
    pub site: String,
    pub flight_number: Option<u32>,
    pub booster_version: Option<String>,
}

/// All points of one booster version category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub category: String,
    pub color: Rgb,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterView {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub point_count: usize,
    /// Sorted by category; categories with no point in range are omitted.
    pub series: Vec<ScatterSeries>,
}

impl ScatterView {
    pub fn build(dataset: &LaunchDataset, controls: &Controls) -> Self {
        let rows = filter_launches(dataset, &controls.site, controls.payload);
        let colors = ColorMap::new(dataset.booster_categories().iter().cloned());

        let mut grouped: BTreeMap<&str, Vec<ScatterPoint>> = BTreeMap::new();
        for rec in &rows {
            grouped
                .entry(rec.booster_category.as_str())
                .or_default()
                .push(ScatterPoint {
                    payload_mass_kg: rec.payload_mass_kg,
                    class: rec.outcome.class(),
                    site: rec.site.clone(),
                    flight_number: rec.flight_number,
                    booster_version: rec.booster_version.clone(),
                });
        }

        let series = grouped
            .into_iter()
            .map(|(category, points)| ScatterSeries {
                category: category.to_string(),
                color: colors.color_for(category),
                points,
            })
            .collect();

        ScatterView {
            title: scatter_title(&controls.site),
            x_label: COL_PAYLOAD,
            y_label: COL_CLASS,
            point_count: rows.len(),
            series,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.point_count == 0
    }
}

// ---------------------------------------------------------------------------
// Both charts together
// ---------------------------------------------------------------------------

/// Everything the dashboard redraws after a control change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub pie: PieView,
    pub scatter: ScatterView,
}

impl DashboardView {
    pub fn compute(dataset: &LaunchDataset, controls: &Controls) -> Self {
        DashboardView {
            pie: PieView::build(dataset, &controls.site),
            scatter: ScatterView::build(dataset, controls),
        }
    }
}
