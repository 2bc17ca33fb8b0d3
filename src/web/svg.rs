// SVG rendering of the two dashboard charts.

use std::f64::consts::PI;
use std::fmt::Write;

use crate::data::filter::PayloadRange;
use crate::view::{PieView, ScatterView};

const WIDTH: f64 = 720.0;
const HEIGHT: f64 = 420.0;
const MARGIN: f64 = 60.0;
const LEGEND_WIDTH: f64 = 170.0;

/// Escape text for use inside XML/HTML content or attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn open_svg(out: &mut String, title: &str) {
    let _ = write!(
        out,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" style="background:white; border-radius:8px">
  <text x="{x}" y="28" text-anchor="middle" font-size="16" font-weight="600" fill="#374151">{title}</text>
"##,
        x = WIDTH / 2.0,
        title = escape_xml(title),
    );
}

fn empty_note(out: &mut String, note: &str) {
    let _ = write!(
        out,
        r##"  <text x="{}" y="{}" text-anchor="middle" font-size="13" fill="#9ca3af">{}</text>
"##,
        WIDTH / 2.0,
        HEIGHT / 2.0,
        escape_xml(note)
    );
}

const LEGEND_ROW: f64 = 22.0;
const LEGEND_MIN_ROW: f64 = 14.0;

/// Legend placement for a fixed number of entries. Rows shrink first, then
/// overflow wraps into extra columns inside the legend strip.
struct LegendLayout {
    row: f64,
    rows_per_column: usize,
    column_width: f64,
}

impl LegendLayout {
    fn for_entries(n: usize) -> Self {
        let available = HEIGHT - MARGIN - 10.0;
        let row = (available / n.max(1) as f64).clamp(LEGEND_MIN_ROW, LEGEND_ROW);
        let rows_per_column = ((available / row).floor() as usize).max(1);
        let columns = n.div_ceil(rows_per_column).max(1);
        LegendLayout {
            row,
            rows_per_column,
            column_width: LEGEND_WIDTH / columns as f64,
        }
    }

    /// Baseline of entry `index`.
    fn position(&self, index: usize) -> (f64, f64) {
        let x = WIDTH - LEGEND_WIDTH + (index / self.rows_per_column) as f64 * self.column_width;
        let y = MARGIN + (index % self.rows_per_column) as f64 * self.row;
        (x, y)
    }

    fn swatch(&self) -> f64 {
        (self.row - 4.0).min(12.0)
    }
}

fn legend<'a>(out: &mut String, entries: impl ExactSizeIterator<Item = (String, &'a str)>) {
    let layout = LegendLayout::for_entries(entries.len());
    let size = layout.swatch();
    for (i, (color, label)) in entries.enumerate() {
        let (x, y) = layout.position(i);
        let _ = write!(
            out,
            r##"  <rect x="{x:.1}" y="{:.1}" width="{size}" height="{size}" fill="{color}"/>
  <text x="{:.1}" y="{y:.1}" font-size="{size}" fill="#374151">{}</text>
"##,
            y - size + 2.0,
            x + size + 6.0,
            escape_xml(label)
        );
    }
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Render the proportion chart. A view with nothing to count renders the
/// frame and a note instead of slices.
pub fn render_pie(view: &PieView) -> String {
    let mut out = String::new();
    open_svg(&mut out, &view.title);

    if view.is_blank() {
        empty_note(&mut out, "No launches to show");
        out.push_str("</svg>");
        return out;
    }

    let cx = (WIDTH - LEGEND_WIDTH) / 2.0;
    let cy = (HEIGHT + MARGIN / 2.0) / 2.0;
    let r = (HEIGHT - 2.0 * MARGIN) / 2.0;

    // Clockwise from 12 o'clock, like plotly.
    let mut angle = -PI / 2.0;
    for slice in view.slices.iter().filter(|s| s.count > 0) {
        let sweep = slice.fraction * 2.0 * PI;
        let tooltip = format!(
            "{}: {} ({:.1}%)",
            slice.label,
            slice.count,
            slice.fraction * 100.0
        );
        let color = slice.color.to_hex();

        if slice.count == view.total {
            let _ = write!(
                out,
                r##"  <circle cx="{cx:.1}" cy="{cy:.1}" r="{r:.1}" fill="{color}" stroke="#fff" stroke-width="1"><title>{}</title></circle>
"##,
                escape_xml(&tooltip)
            );
        } else {
            let (x0, y0) = (cx + r * angle.cos(), cy + r * angle.sin());
            let end = angle + sweep;
            let (x1, y1) = (cx + r * end.cos(), cy + r * end.sin());
            let large_arc = if sweep > PI { 1 } else { 0 };
            let _ = write!(
                out,
                r##"  <path d="M{cx:.1},{cy:.1} L{x0:.1},{y0:.1} A{r:.1},{r:.1} 0 {large_arc},1 {x1:.1},{y1:.1} Z" fill="{color}" stroke="#fff" stroke-width="1"><title>{}</title></path>
"##,
                escape_xml(&tooltip)
            );
        }

        if slice.fraction >= 0.04 {
            let mid = angle + sweep / 2.0;
            let _ = write!(
                out,
                r##"  <text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12" fill="#fff">{:.1}%</text>
"##,
                cx + 0.65 * r * mid.cos(),
                cy + 0.65 * r * mid.sin() + 4.0,
                slice.fraction * 100.0
            );
        }
        angle += sweep;
    }

    let labels: Vec<String> = view
        .slices
        .iter()
        .map(|slice| format!("{} ({})", slice.label, slice.count))
        .collect();
    legend(
        &mut out,
        view.slices
            .iter()
            .zip(&labels)
            .map(|(slice, label)| (slice.color.to_hex(), label.as_str())),
    );

    out.push_str("</svg>");
    out
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// Render payload (x) against class (y). The x axis spans the selected
/// payload range so points keep their place as the filter narrows.
pub fn render_scatter(view: &ScatterView, range: PayloadRange) -> String {
    let mut out = String::new();
    open_svg(&mut out, &view.title);

    let plot_left = MARGIN;
    let plot_right = WIDTH - LEGEND_WIDTH - 10.0;
    let plot_top = MARGIN;
    let plot_bottom = HEIGHT - MARGIN;

    let pad = ((range.hi - range.lo) * 0.05).max(50.0);
    let (x_min, x_max) = (range.lo - pad, range.hi + pad);
    let sx = |v: f64| plot_left + (v - x_min) / (x_max - x_min) * (plot_right - plot_left);
    // class sits in [0, 1]; leave a quarter unit above and below.
    let sy = |v: f64| plot_bottom - (v + 0.25) / 1.5 * (plot_bottom - plot_top);

    // Axes
    let _ = write!(
        out,
        r##"  <line x1="{plot_left}" y1="{plot_bottom}" x2="{plot_right}" y2="{plot_bottom}" stroke="#e5e7eb" stroke-width="2"/>
  <line x1="{plot_left}" y1="{plot_top}" x2="{plot_left}" y2="{plot_bottom}" stroke="#e5e7eb" stroke-width="2"/>
  <text x="{:.1}" y="{}" text-anchor="middle" font-size="12" fill="#6b7280">{}</text>
  <text x="18" y="{:.1}" text-anchor="middle" font-size="12" fill="#6b7280" transform="rotate(-90, 18, {:.1})">{}</text>
"##,
        (plot_left + plot_right) / 2.0,
        HEIGHT - 15.0,
        escape_xml(view.x_label),
        (plot_top + plot_bottom) / 2.0,
        (plot_top + plot_bottom) / 2.0,
        escape_xml(view.y_label),
    );

    for class in [0.0, 1.0] {
        let _ = write!(
            out,
            r##"  <line x1="{plot_left}" y1="{y:.1}" x2="{plot_right}" y2="{y:.1}" stroke="#f3f4f6" stroke-width="1"/>
  <text x="{:.1}" y="{:.1}" text-anchor="end" font-size="11" fill="#6b7280">{class}</text>
"##,
            plot_left - 8.0,
            sy(class) + 4.0,
            y = sy(class),
        );
    }
    for i in 0..=4 {
        let v = range.lo + (range.hi - range.lo) * i as f64 / 4.0;
        let _ = write!(
            out,
            r##"  <text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="11" fill="#6b7280">{:.0}</text>
"##,
            sx(v),
            plot_bottom + 18.0,
            v
        );
    }

    if view.is_empty() {
        empty_note(&mut out, "No launches in this payload range");
    }

    for series in &view.series {
        let color = series.color.to_hex();
        for p in &series.points {
            let tooltip = format!(
                "Launch Site: {}\nPayload Mass (kg): {}\nclass: {}\nBooster Version Category: {}",
                p.site, p.payload_mass_kg, p.class, series.category
            );
            let _ = write!(
                out,
                r##"  <circle cx="{:.1}" cy="{:.1}" r="6" fill="{color}" fill-opacity="0.8" stroke="#fff"><title>{}</title></circle>
"##,
                sx(p.payload_mass_kg),
                sy(p.class as f64),
                escape_xml(&tooltip)
            );
        }
    }

    legend(
        &mut out,
        view.series
            .iter()
            .map(|series| (series.color.to_hex(), series.category.as_str())),
    );

    out.push_str("</svg>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::SiteSelector;
    use crate::data::fixtures::{record, small};
    use crate::data::model::{LaunchDataset, Outcome};
    use crate::state::Controls;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn pie_draws_one_path_per_nonzero_slice() {
        let svg = render_pie(&PieView::build(&small(), &SiteSelector::All));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<path").count(), 2);
        assert!(svg.contains("Total Successful Launches by Site"));
        assert!(svg.contains("SiteA: 1 (50.0%)"));
    }

    #[test]
    fn single_slice_pie_is_a_full_circle() {
        let svg = render_pie(&PieView::build(&small(), &SiteSelector::Site("SiteB".into())));
        assert_eq!(svg.matches("<path").count(), 0);
        assert_eq!(svg.matches("<circle").count(), 1);
        assert!(svg.contains("Failure (0)"));
    }

    #[test]
    fn blank_pie_renders_a_note() {
        let svg = render_pie(&PieView::build(&small(), &SiteSelector::Site("Nowhere".into())));
        assert!(svg.contains("No launches to show"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn scatter_points_carry_the_site_on_hover() {
        let ds = small();
        let controls = Controls::initial(&ds);
        let svg = render_scatter(&ScatterView::build(&ds, &controls), controls.payload);
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains("Launch Site: SiteB"));
        assert!(svg.contains("Payload vs Success (All Sites)"));
    }

    #[test]
    fn empty_scatter_still_renders_axes() {
        let ds = small();
        let controls = Controls::initial(&ds).with_range(&ds, 6000.0, 7000.0);
        let svg = render_scatter(&ScatterView::build(&ds, &controls), controls.payload);
        assert!(svg.contains("No launches in this payload range"));
        assert_eq!(svg.matches("<circle").count(), 0);
        assert!(svg.contains("<line"));
    }

    #[test]
    fn legend_fits_inside_the_chart() {
        for n in [1, 3, 16, 17, 40, 120] {
            let layout = LegendLayout::for_entries(n);
            for i in 0..n {
                let (x, y) = layout.position(i);
                assert!(y + 2.0 <= HEIGHT, "{n} entries: row {i} at y={y}");
                assert!(x >= WIDTH - LEGEND_WIDTH && x < WIDTH, "{n} entries: row {i} at x={x}");
            }
        }
        assert_eq!(LegendLayout::for_entries(3).row, LEGEND_ROW);
    }

    #[test]
    fn pie_with_many_sites_keeps_every_legend_entry() {
        let records = (0..40)
            .map(|i| record(&format!("Site {i:02}"), 100.0, Outcome::Success, "FT"))
            .collect();
        let ds = LaunchDataset::from_records(records).unwrap();
        let svg = render_pie(&PieView::build(&ds, &SiteSelector::All));
        assert_eq!(svg.matches("<rect").count(), 40);
        assert!(svg.contains("Site 39 (1)"));
    }
}
