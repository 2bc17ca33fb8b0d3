use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Html;
use axum::Json;
use serde::Deserialize;

use super::page::render_dashboard;
use crate::data::filter::SiteSelector;
use crate::data::model::LaunchDataset;
use crate::state::{ControlOptions, Controls};
use crate::view::{DashboardView, PieView, ScatterView};

/// Control values as submitted by the page or an API client.
///
/// Endpoints stay strings so a cleared number input (`lo=`) falls back to
/// the default instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ControlsQuery {
    pub site: Option<String>,
    pub lo: Option<String>,
    pub hi: Option<String>,
}

impl ControlsQuery {
    fn controls(&self, dataset: &LaunchDataset) -> Controls {
        let number = |v: &Option<String>| v.as_deref().and_then(|s| s.trim().parse::<f64>().ok());
        Controls::from_submitted(
            dataset,
            self.site.as_deref(),
            number(&self.lo),
            number(&self.hi),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SiteQuery {
    pub site: Option<String>,
}

/// `GET /`
pub async fn dashboard(
    State(dataset): State<Arc<LaunchDataset>>,
    Query(query): Query<ControlsQuery>,
) -> Html<String> {
    let controls = query.controls(&dataset);
    let view = DashboardView::compute(&dataset, &controls);
    log::debug!(
        "dashboard: site={} payload=[{}, {}] slices={} points={}",
        controls.site.value(),
        controls.payload.lo,
        controls.payload.hi,
        view.pie.slices.len(),
        view.scatter.point_count
    );
    let options = ControlOptions::for_dataset(&dataset);
    Html(render_dashboard(&options, &controls, &view))
}

/// `GET /api/options`
pub async fn options(State(dataset): State<Arc<LaunchDataset>>) -> Json<ControlOptions> {
    Json(ControlOptions::for_dataset(&dataset))
}

/// `GET /api/pie?site=`
pub async fn pie(
    State(dataset): State<Arc<LaunchDataset>>,
    Query(query): Query<SiteQuery>,
) -> Json<PieView> {
    let selector = query
        .site
        .as_deref()
        .map(SiteSelector::parse)
        .unwrap_or_default();
    let view = PieView::build(&dataset, &selector);
    log::debug!("pie: site={} total={}", selector.value(), view.total);
    Json(view)
}

/// `GET /api/scatter?site=&lo=&hi=`
pub async fn scatter(
    State(dataset): State<Arc<LaunchDataset>>,
    Query(query): Query<ControlsQuery>,
) -> Json<ScatterView> {
    let controls = query.controls(&dataset);
    let view = ScatterView::build(&dataset, &controls);
    log::debug!(
        "scatter: site={} payload=[{}, {}] points={}",
        controls.site.value(),
        controls.payload.lo,
        controls.payload.hi,
        view.point_count
    );
    Json(view)
}
