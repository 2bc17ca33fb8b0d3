use std::fmt::Write;

use super::svg::{escape_xml, render_pie, render_scatter};
use crate::state::{ControlOptions, Controls};
use crate::view::DashboardView;

pub const PAGE_TITLE: &str = "SpaceX Launch Records Dashboard";

/// Render the dashboard page for the given control values.
///
/// The form submits back to `/` on every change, so each control change
/// re-renders both charts server-side.
pub fn render_dashboard(options: &ControlOptions, controls: &Controls, view: &DashboardView) -> String {
    let mut site_options = String::new();
    for opt in &options.sites {
        let selected = if opt.value == controls.site.value() {
            " selected"
        } else {
            ""
        };
        let _ = write!(
            site_options,
            r#"<option value="{}"{selected}>{}</option>"#,
            escape_xml(&opt.value),
            escape_xml(&opt.label)
        );
    }

    let mut marks = String::new();
    for mark in &options.payload.marks {
        let _ = write!(
            marks,
            r#"<span style="position:absolute; left:{:.1}%">{}</span>"#,
            (mark.value - options.payload.min) / (options.payload.max - options.payload.min) * 100.0,
            mark.label
        );
    }

    let pie = render_pie(&view.pie);
    let scatter = render_scatter(&view.scatter, controls.payload);

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  body {{ font-family: sans-serif; margin: 2em auto; max-width: 960px; }}
  .chart {{ margin: 1.5em 0; }}
  .marks {{ position: relative; height: 1.2em; font-size: 0.8em; color: #6b7280; margin: 0 0.5em; }}
</style>
</head>
<body>
<h1 style="text-align:center; color:#503D36; font-size:40px">{title}</h1>
<form method="get" action="/">
  <select id="site-dropdown" name="site" onchange="this.form.submit()" style="width:100%">{site_options}</select>
  <div class="chart" id="success-pie-chart">{pie}</div>
  <p>Payload range (Kg):</p>
  <div id="payload-slider">
    <input type="number" name="lo" min="{min}" max="{max}" step="any" value="{lo}" onchange="this.form.submit()">
    <input type="number" name="hi" min="{min}" max="{max}" step="any" value="{hi}" onchange="this.form.submit()">
    <div class="marks">{marks}</div>
  </div>
  <noscript><button type="submit">Update</button></noscript>
  <div class="chart" id="success-payload-scatter-chart">{scatter}</div>
</form>
</body>
</html>
"##,
        title = PAGE_TITLE,
        min = options.payload.min,
        max = options.payload.max,
        lo = controls.payload.lo,
        hi = controls.payload.hi,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::SiteSelector;
    use crate::data::fixtures::small;

    #[test]
    fn page_marks_the_selected_site() {
        let ds = small();
        let options = ControlOptions::for_dataset(&ds);
        let controls = Controls {
            site: SiteSelector::Site("SiteB".into()),
            ..Controls::initial(&ds)
        };
        let view = DashboardView::compute(&ds, &controls);
        let html = render_dashboard(&options, &controls, &view);

        assert!(html.contains(r#"<option value="SiteB" selected>SiteB</option>"#));
        assert!(html.contains(r#"<option value="ALL">All Sites</option>"#));
        assert!(html.contains("Success vs Failure for SiteB"));
        assert!(html.contains("Payload vs Success (SiteB)"));
        assert!(html.contains(r#"name="lo" min="0" max="10000" step="any" value="500""#));
        assert!(html.contains(">2.5k<"));
    }
}
