use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::color::Rgb;
use crate::data::filter::PayloadRange;
use crate::view::{PieView, ScatterView};

fn color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.0, c.1, c.2)
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Angular points of one wedge, split so each polygon stays convex.
fn wedge_polygons(start: f64, sweep: f64) -> Vec<Vec<[f64; 2]>> {
    let pieces = (sweep / FRAC_PI_2).ceil().max(1.0) as usize;
    let piece = sweep / pieces as f64;
    (0..pieces)
        .map(|p| {
            let a0 = start + p as f64 * piece;
            let steps = ((piece / TAU) * 128.0).ceil().max(2.0) as usize;
            let mut pts = vec![[0.0, 0.0]];
            pts.extend((0..=steps).map(|i| {
                let a = a0 + piece * i as f64 / steps as f64;
                [a.cos(), a.sin()]
            }));
            pts
        })
        .collect()
}

/// Render the proportion chart as filled wedges on a unit circle.
pub fn pie_chart(ui: &mut Ui, view: &PieView, height: f32) {
    ui.heading(view.title.as_str());

    if view.is_blank() {
        ui.label("No launches to show.");
        return;
    }

    Plot::new("success_pie_chart")
        .legend(Legend::default())
        .height(height)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            // Clockwise from 12 o'clock.
            let mut angle = FRAC_PI_2;
            for slice in view.slices.iter().filter(|s| s.count > 0) {
                let sweep = slice.fraction * TAU;
                let name = format!("{} ({})", slice.label, slice.count);
                let color = color32(slice.color);

                for pts in wedge_polygons(angle - sweep, sweep) {
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::new(pts))
                            .name(&name)
                            .fill_color(color)
                            .stroke(Stroke::new(1.0, Color32::WHITE)),
                    );
                }

                if slice.fraction >= 0.04 {
                    let mid = angle - sweep / 2.0;
                    plot_ui.text(Text::new(
                        PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                        RichText::new(format!("{:.1}%", slice.fraction * 100.0))
                            .color(Color32::WHITE)
                            .strong(),
                    ));
                }
                angle -= sweep;
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// Render payload (x) against class (y), one series per booster category.
/// Hovering a point shows its launch site.
pub fn scatter_chart(ui: &mut Ui, view: &ScatterView, range: PayloadRange, height: f32) {
    ui.heading(view.title.as_str());
    if view.is_empty() {
        ui.label("No launches in this payload range.");
    }

    let hover = |name: &str, value: &PlotPoint| -> String {
        let nearest = view
            .series
            .iter()
            .filter(|s| s.category == name)
            .flat_map(|s| s.points.iter())
            .min_by(|a, b| {
                let da = (a.payload_mass_kg - value.x).abs() + (a.class as f64 - value.y).abs();
                let db = (b.payload_mass_kg - value.x).abs() + (b.class as f64 - value.y).abs();
                da.total_cmp(&db)
            });
        match nearest {
            Some(p) => format!(
                "{name}\nLaunch Site: {}\nPayload Mass (kg): {}\nclass: {}",
                p.site, p.payload_mass_kg, p.class
            ),
            None => format!("x = {:.0}\ny = {:.2}", value.x, value.y),
        }
    };

    Plot::new("success_payload_scatter_chart")
        .legend(Legend::default())
        .height(height)
        .x_axis_label(view.x_label)
        .y_axis_label(view.y_label)
        .include_x(range.lo)
        .include_x(range.hi)
        .include_y(-0.25)
        .include_y(1.25)
        .label_formatter(hover)
        .show(ui, |plot_ui| {
            for series in &view.series {
                let points: PlotPoints = series
                    .points
                    .iter()
                    .map(|p| [p.payload_mass_kg, p.class as f64])
                    .collect();
                plot_ui.points(
                    Points::new(points)
                        .name(&series.category)
                        .color(color32(series.color))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(5.0),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wedges_are_split_into_convex_pieces() {
        assert_eq!(wedge_polygons(0.0, TAU).len(), 4);
        assert_eq!(wedge_polygons(0.0, 0.3).len(), 1);
        for poly in wedge_polygons(1.0, 3.0) {
            assert_eq!(poly[0], [0.0, 0.0]);
            assert!(poly.len() >= 4);
        }
    }
}
