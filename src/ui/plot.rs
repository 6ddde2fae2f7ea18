use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Polygon};

use crate::color;
use crate::data::pitch_mix::PitchSlice;

const RADIUS: f64 = 1.0;
/// Slices start at twelve o'clock and run clockwise.
const START_ANGLE: f64 = FRAC_PI_2;

// ---------------------------------------------------------------------------
// Pie geometry
// ---------------------------------------------------------------------------

/// Clockwise angular span `(from, to)` of each slice, in radians from the top.
pub fn wedges(usages: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = usages.iter().sum();
    if total <= 0.0 {
        return vec![(0.0, 0.0); usages.len()];
    }
    let mut acc = 0.0;
    usages
        .iter()
        .map(|u| {
            let from = TAU * acc / total;
            acc += u;
            (from, TAU * acc / total)
        })
        .collect()
}

/// Which slice contains plot point (`x`, `y`), if any.
pub fn slice_at(spans: &[(f64, f64)], x: f64, y: f64) -> Option<usize> {
    if x.hypot(y) > RADIUS {
        return None;
    }
    let offset = (START_ANGLE - y.atan2(x)).rem_euclid(TAU);
    spans
        .iter()
        .position(|&(from, to)| offset >= from && offset < to)
}

/// Outline of one slice. The centre comes first so the fan fill is exact
/// even for slices wider than half the pie.
fn wedge_points(from: f64, to: f64) -> Vec<[f64; 2]> {
    let steps = ((to - from) / TAU * 96.0).ceil().max(1.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let angle = START_ANGLE - (from + (to - from) * i as f64 / steps as f64);
        points.push([RADIUS * angle.cos(), RADIUS * angle.sin()]);
    }
    points
}

// ---------------------------------------------------------------------------
// Pitch-mix pie chart
// ---------------------------------------------------------------------------

/// Render one pitcher's usage breakdown with a hover tooltip per slice.
pub fn pitch_pie(ui: &mut Ui, id: &str, slices: &[PitchSlice]) {
    let usages: Vec<f64> = slices.iter().map(|s| s.usage).collect();
    let spans = wedges(&usages);

    let response = Plot::new(("pitch_mix", id))
        .legend(Legend::default())
        .data_aspect(1.0)
        .height(260.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_double_click_reset(false)
        .include_x(-1.2)
        .include_x(1.2)
        .include_y(-1.2)
        .include_y(1.2)
        .show(ui, |plot_ui| {
            let hovered = plot_ui
                .pointer_coordinate()
                .and_then(|p| slice_at(&spans, p.x, p.y));

            for (idx, (slice, &(from, to))) in slices.iter().zip(&spans).enumerate() {
                let base = color::pitch_color(slice.pitch);
                let fill = if hovered == Some(idx) {
                    color::highlight(base, 0.15)
                } else {
                    base
                };

                let points: PlotPoints = wedge_points(from, to).into_iter().collect();
                let polygon = Polygon::new(points)
                    .name(slice.pitch.code())
                    .fill_color(fill)
                    .stroke(Stroke::new(1.0, Color32::WHITE));

                plot_ui.polygon(polygon);
            }
            hovered
        });

    if let Some(idx) = response.inner {
        let slice = &slices[idx];
        response
            .response
            .on_hover_ui_at_pointer(|ui: &mut Ui| slice_tooltip(ui, slice));
    }
}

fn slice_tooltip(ui: &mut Ui, slice: &PitchSlice) {
    ui.strong(format!("Pitch Type: {}", slice.pitch));
    ui.label(format!("Usage%: {:.1}", slice.usage));
    ui.label(format!("Velo: {}", metric(slice.velocity)));
    ui.label(format!("Value: {}", metric(slice.value)));
    ui.label(format!("Stf+: {}", metric(slice.stuff)));
}

fn metric(v: Option<f64>) -> String {
    v.map(|v| format!("{v:.1}")).unwrap_or_else(|| "n/a".to_string())
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn test_wedges_cover_the_circle() {
        let spans = wedges(&[55.0, 45.0]);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].0, 0.0);
        assert!((spans[0].1 - TAU * 0.55).abs() < 1e-9);
        assert!((spans[1].1 - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_zero_total_gives_empty_wedges() {
        assert_eq!(wedges(&[0.0, 0.0]), vec![(0.0, 0.0), (0.0, 0.0)]);
    }

    #[test]
    fn test_slice_at_follows_clockwise_order() {
        let spans = wedges(&[50.0, 50.0]);
        // Right half is the first slice, left half the second.
        assert_eq!(slice_at(&spans, 0.5, 0.0), Some(0));
        assert_eq!(slice_at(&spans, -0.5, 0.0), Some(1));
        assert_eq!(slice_at(&spans, 2.0, 0.0), None);
    }

    #[test]
    fn test_wedge_starts_at_centre_and_top() {
        let pts = wedge_points(0.0, PI);
        assert_eq!(pts[0], [0.0, 0.0]);
        assert!(pts[1][0].abs() < 1e-9);
        assert!((pts[1][1] - 1.0).abs() < 1e-9);
        let last = pts[pts.len() - 1];
        assert!((last[1] + 1.0).abs() < 1e-9);
    }
}
