// File: crates/axis-core/src/scale.rs
// Summary: Vertical value scale mapping data values to pixel offsets.

use crate::normalise::Normalisation;

/// Maps data values to vertical pixel offsets inside a plot area of
/// `graph_height` pixels, using loose-label axis geometry.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub graph_height: f64,
    norm: Normalisation,
    total: f64,
}

impl ValueScale {
    pub fn new(norm: Normalisation, graph_height: f64) -> Self {
        // When the axis starts at zero the topmost label caps the plot;
        // otherwise the full range does.
        let mut total = if norm.start_value == 0.0 { norm.top_value() } else { norm.range };
        if total == 0.0 {
            total = 1.0;
        }
        Self { graph_height, norm, total }
    }

    /// Pixel height of `value`, measured from the bottom of the plot.
    #[inline]
    pub fn to_px(&self, value: f64) -> f64 {
        (value / self.total) * self.graph_height
    }

    /// Map a whole series to pixel heights.
    pub fn normalise_data(&self, data: &[f64]) -> Vec<f64> {
        data.iter().map(|&v| self.to_px(v)).collect()
    }

    /// The axis geometry this scale was built from.
    pub fn normalisation(&self) -> &Normalisation {
        &self.norm
    }
}
