// File: crates/chart-core/src/theme.rs
// Summary: Backend-neutral colors and Light/Dark theming for chart rendering.

use std::fmt;

/// 8-bit RGBA color shared by the SVG and raster backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }

    /// Opacity in `[0, 1]`.
    pub fn opacity(&self) -> f32 { self.a as f32 / 255.0 }
}

impl fmt::Display for Rgba {
    /// Lowercase `#rrggbb`; alpha is emitted separately by the backends.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub tick: Rgba,
    pub title: Rgba,
    pub font_family: &'static str,
}

impl Theme {
    /// White page, black ink.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(255, 255, 255),
            axis_line: Rgba::rgb(0, 0, 0),
            axis_label: Rgba::rgb(0, 0, 0),
            tick: Rgba::rgb(0, 0, 0),
            title: Rgba::rgb(20, 20, 30),
            font_family: "sans-serif",
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            axis_line: Rgba::rgb(180, 180, 190),
            axis_label: Rgba::rgb(235, 235, 245),
            tick: Rgba::rgb(150, 150, 160),
            title: Rgba::rgb(235, 235, 245),
            font_family: "sans-serif",
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
