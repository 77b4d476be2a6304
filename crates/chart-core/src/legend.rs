// File: crates/chart-core/src/legend.rs
// Summary: Legend entries (swatch + label) and their fixed placement.

use crate::palette::OrdinalPalette;
use crate::theme::Rgba;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    pub label: String,
    pub color: Rgba,
}

/// Rows are stacked downward from the top-right corner of the plot area.
#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub items: Vec<LegendItem>,
    /// Distance of the swatch from the plot's right edge.
    pub right_offset: f32,
    /// Vertical position of the first row relative to the plot top (negative = above).
    pub top_offset: f32,
    pub row_height: f32,
    pub swatch: f32,
    /// Gap from the swatch's left edge to the label.
    pub label_dx: f32,
    /// Label baseline below the row top; text is vertically centred on it.
    pub label_dy: f32,
    pub font_size: f32,
}

impl Legend {
    pub fn new(items: Vec<LegendItem>) -> Self {
        Self {
            items,
            right_offset: 140.0,
            top_offset: -40.0,
            row_height: 20.0,
            swatch: 12.0,
            label_dx: 20.0,
            label_dy: 10.0,
            font_size: 12.0,
        }
    }

    /// One row per key in the palette's domain.
    pub fn from_palette(palette: &OrdinalPalette) -> Self {
        Self::new(
            palette
                .legend_entries()
                .into_iter()
                .map(|(label, color)| LegendItem { label, color })
                .collect(),
        )
    }
}

impl Default for Legend {
    fn default() -> Self { Self::new(Vec::new()) }
}
