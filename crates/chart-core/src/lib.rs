// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart model, layout scene and SVG/PNG backends.

pub mod chart;
pub mod series;
pub mod axis;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod theme;
pub mod palette;
pub mod legend;
pub mod scene;
pub mod svg;
pub mod raster;
pub mod error;

pub use chart::{Chart, RenderOptions};
pub use series::Series;
pub use axis::{Axis, TickFormat};
pub use scale::LinearScale;
pub use theme::{Rgba, Theme};
pub use palette::{OrdinalPalette, CATEGORY10};
pub use legend::{Legend, LegendItem};
pub use scene::Scene;
pub use error::RenderError;
