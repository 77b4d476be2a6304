// File: crates/chart-core/src/scene.rs
// Summary: Backend-neutral drawing primitives produced by chart layout.
// Notes:
// - Coordinates are absolute surface pixels, y down.
// - Backends (SVG, raster) draw items in order; later items paint over earlier ones.

use crate::theme::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// Which part of the glyph box sits on the text's `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Baseline {
    Alphabetic,
    Middle,
    /// Top of the glyphs (tick labels under an axis).
    Hanging,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub size: f32,
    pub color: Rgba,
    pub anchor: Anchor,
    pub baseline: Baseline,
    /// Degrees, clockwise, about `(x, y)`.
    pub rotation: f32,
    pub bold: bool,
}

impl TextRun {
    pub fn new(x: f32, y: f32, text: impl Into<String>, size: f32, color: Rgba) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            size,
            color,
            anchor: Anchor::Start,
            baseline: Baseline::Alphabetic,
            rotation: 0.0,
            bold: false,
        }
    }
    pub fn anchor(mut self, anchor: Anchor) -> Self { self.anchor = anchor; self }
    pub fn baseline(mut self, baseline: Baseline) -> Self { self.baseline = baseline; self }
    pub fn rotated(mut self, degrees: f32) -> Self { self.rotation = degrees; self }
    pub fn bold(mut self) -> Self { self.bold = true; self }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Open polyline, never filled.
    Polyline { points: Vec<(f32, f32)>, stroke: Rgba, width: f32 },
    Line { from: (f32, f32), to: (f32, f32), stroke: Rgba, width: f32 },
    Rect { x: f32, y: f32, w: f32, h: f32, fill: Rgba },
    Text(TextRun),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    /// Semantic tag ("line", "domain", "tick", "title", "legend", ...) for querying a laid-out scene.
    pub class: Option<&'static str>,
    pub shape: Shape,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub background: Rgba,
    pub font_family: &'static str,
    pub items: Vec<Item>,
}

impl Scene {
    pub fn new(width: i32, height: i32, background: Rgba, font_family: &'static str) -> Self {
        Self { width, height, background, font_family, items: Vec::new() }
    }

    pub fn push(&mut self, class: Option<&'static str>, shape: Shape) {
        self.items.push(Item { class, shape });
    }

    /// Items carrying `class`.
    pub fn with_class<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().filter(move |i| i.class == Some(class))
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.items.iter().filter_map(|i| match &i.shape {
            Shape::Text(t) => Some(t),
            _ => None,
        })
    }
}
