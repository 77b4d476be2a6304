// File: crates/chart-core/src/series.rs
// Summary: Line series model: named, colored (x, y) polyline.

use crate::theme::Rgba;

#[derive(Clone, Debug)]
pub struct Series {
    pub name: String,
    pub color: Rgba,
    pub stroke_width: f32,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(name: impl Into<String>, color: Rgba) -> Self {
        Self { name: name.into(), color, stroke_width: 2.0, data_xy: Vec::new() }
    }

    pub fn with_data(name: impl Into<String>, color: Rgba, data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, ..Self::new(name, color) }
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width.max(0.0);
        self
    }

    /// Points in ascending x, the order in which the line is drawn.
    /// Non-finite points are dropped.
    pub fn sorted_points(&self) -> Vec<(f64, f64)> {
        let mut pts: Vec<(f64, f64)> = self
            .data_xy
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .collect();
        pts.sort_by(|a, b| a.0.total_cmp(&b.0));
        pts
    }
}
