//! Scaling of data series onto SVG viewport coordinates.

/// Maps a series of samples onto the `points` attribute of an SVG
/// `<polyline>`.
///
/// The first sample lands on the left edge, the last on the right edge,
/// and values are scaled so the series maximum touches the top of the
/// viewport. A series without a positive maximum stays on the baseline.
#[must_use]
pub fn polyline_points(values: &[f64], width: f64, height: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = step * i as f64;
            let y = if max > 0.0 {
                height - (value / max) * height
            } else {
                height
            };
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}
