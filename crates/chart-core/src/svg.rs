// File: crates/chart-core/src/svg.rs
// Summary: Paint a `Scene` onto the plotters SVG backend and return the document.

use plotters_backend::text_anchor::{HPos, Pos, VPos};
use plotters_backend::{
    BackendColor, BackendCoord, BackendStyle, BackendTextStyle, DrawingBackend, DrawingErrorKind, FontFamily,
    FontStyle, FontTransform,
};
use plotters_svg::SVGBackend;

use crate::error::RenderError;
use crate::scene::{Anchor, Baseline, Scene, Shape, TextRun};
use crate::theme::Rgba;

/// plotters-svg writes `font-size` as the style size divided by 1.24.
const FONT_SCALE: f64 = 1.24;

/// Render `scene` to a standalone SVG document.
pub fn to_string(scene: &Scene) -> Result<String, RenderError> {
    let size = (scene.width.max(1) as u32, scene.height.max(1) as u32);
    let mut buffer = String::with_capacity(4096 + scene.items.len() * 128);
    {
        let mut backend = SVGBackend::with_string(&mut buffer, size);
        paint(&mut backend, scene).map_err(|e| RenderError::Svg(e.to_string()))?;
        backend.present().map_err(|e| RenderError::Svg(e.to_string()))?;
    }
    Ok(buffer)
}

/// Draw every scene item, in order, onto a plotters backend.
pub fn paint<DB: DrawingBackend>(db: &mut DB, scene: &Scene) -> Result<(), DrawingErrorKind<DB::ErrorType>> {
    db.draw_rect((0, 0), (scene.width, scene.height), &Stroke::fill(scene.background), true)?;
    for item in &scene.items {
        match &item.shape {
            Shape::Polyline { points, stroke, width } => {
                if points.len() < 2 {
                    continue;
                }
                db.draw_path(points.iter().map(|&p| coord(p)), &Stroke::new(*stroke, *width))?;
            }
            Shape::Line { from, to, stroke, width } => {
                db.draw_line(coord(*from), coord(*to), &Stroke::new(*stroke, *width))?;
            }
            Shape::Rect { x, y, w, h, fill } => {
                db.draw_rect(coord((*x, *y)), coord((x + w, y + h)), &Stroke::fill(*fill), true)?;
            }
            Shape::Text(t) => {
                if !t.text.is_empty() {
                    db.draw_text(&t.text, &TextStyle { run: t, family: scene.font_family }, coord((t.x, t.y)))?;
                }
            }
        }
    }
    Ok(())
}

#[inline]
fn coord((x, y): (f32, f32)) -> BackendCoord {
    (x.round() as i32, y.round() as i32)
}

#[inline]
fn backend_color(c: Rgba) -> BackendColor {
    BackendColor { alpha: f64::from(c.opacity()), rgb: (c.r, c.g, c.b) }
}

struct Stroke {
    color: BackendColor,
    width: u32,
}

impl Stroke {
    fn new(c: Rgba, width: f32) -> Self {
        Self { color: backend_color(c), width: width.round().max(0.0) as u32 }
    }

    fn fill(c: Rgba) -> Self {
        Self::new(c, 1.0)
    }
}

impl BackendStyle for Stroke {
    fn color(&self) -> BackendColor {
        self.color
    }

    fn stroke_width(&self) -> u32 {
        self.width
    }
}

/// Text attributes of one run. The SVG viewer lays the glyphs out, so no font is loaded.
struct TextStyle<'a> {
    run: &'a TextRun,
    family: &'a str,
}

impl BackendTextStyle for TextStyle<'_> {
    type FontError = std::convert::Infallible;

    fn color(&self) -> BackendColor {
        backend_color(self.run.color)
    }

    fn size(&self) -> f64 {
        f64::from(self.run.size) * FONT_SCALE
    }

    fn transform(&self) -> FontTransform {
        font_transform(self.run.rotation)
    }

    fn style(&self) -> FontStyle {
        if self.run.bold { FontStyle::Bold } else { FontStyle::Normal }
    }

    fn anchor(&self) -> Pos {
        text_pos(self.run.anchor, self.run.baseline)
    }

    fn family(&self) -> FontFamily<'_> {
        FontFamily::Name(self.family)
    }

    fn layout_box(&self, text: &str) -> Result<((i32, i32), (i32, i32)), Self::FontError> {
        let size = f64::from(self.run.size);
        let width = text.chars().count() as f64 * size * 0.55;
        Ok(((0, 0), (width.round() as i32, size.round() as i32)))
    }

    fn draw<E, F: FnMut(i32, i32, BackendColor) -> Result<(), E>>(
        &self,
        _text: &str,
        _pos: BackendCoord,
        _draw: F,
    ) -> Result<Result<(), E>, Self::FontError> {
        // only bitmap backends rasterize glyphs through the style
        Ok(Ok(()))
    }
}

/// Quarter turns only; other angles are drawn unrotated.
fn font_transform(degrees: f32) -> FontTransform {
    match degrees.rem_euclid(360.0).round() as i32 {
        90 => FontTransform::Rotate90,
        180 => FontTransform::Rotate180,
        270 => FontTransform::Rotate270,
        _ => FontTransform::None,
    }
}

fn text_pos(anchor: Anchor, baseline: Baseline) -> Pos {
    let h = match anchor {
        Anchor::Start => HPos::Left,
        Anchor::Middle => HPos::Center,
        Anchor::End => HPos::Right,
    };
    let v = match baseline {
        Baseline::Hanging => VPos::Top,
        Baseline::Middle => VPos::Center,
        Baseline::Alphabetic => VPos::Bottom,
    };
    Pos::new(h, v)
}
