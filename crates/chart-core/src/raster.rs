// File: crates/chart-core/src/raster.rs
// Summary: Headless PNG rendering of a `Scene` using Skia CPU raster surfaces.

use skia_safe as skia;

use crate::error::RenderError;
use crate::scene::{Anchor, Baseline, Scene, Shape, TextRun};
use crate::theme::Rgba;

#[inline]
fn sk(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(c: Rgba, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(sk(c));
    p
}

fn fill_paint(c: Rgba) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(sk(c));
    p
}

/// Rasterize `scene` and encode it as PNG.
pub fn render_png(scene: &Scene) -> Result<Vec<u8>, RenderError> {
    let (w, h) = (scene.width.max(1), scene.height.max(1));
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or(RenderError::Surface { width: w, height: h })?;
    let canvas = surface.canvas();
    canvas.clear(sk(scene.background));

    for item in &scene.items {
        match &item.shape {
            Shape::Polyline { points, stroke, width } => {
                if points.len() < 2 {
                    continue;
                }
                let mut path = skia::Path::new();
                path.move_to(points[0]);
                for &p in points.iter().skip(1) {
                    path.line_to(p);
                }
                canvas.draw_path(&path, &stroke_paint(*stroke, *width));
            }
            Shape::Line { from, to, stroke, width } => {
                canvas.draw_line(*from, *to, &stroke_paint(*stroke, *width));
            }
            Shape::Rect { x, y, w, h, fill } => {
                canvas.draw_rect(skia::Rect::from_xywh(*x, *y, *w, *h), &fill_paint(*fill));
            }
            Shape::Text(t) => draw_text(canvas, t),
        }
    }

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(RenderError::Encode)?;
    Ok(data.as_bytes().to_vec())
}

fn draw_text(canvas: &skia::Canvas, t: &TextRun) {
    if t.text.is_empty() {
        return;
    }
    let paint = fill_paint(t.color);
    let mut font = skia::Font::default();
    font.set_size(t.size);
    font.set_embolden(t.bold);

    let (advance, _) = font.measure_str(&t.text, Some(&paint));
    let dx = match t.anchor {
        Anchor::Start => 0.0,
        Anchor::Middle => -advance * 0.5,
        Anchor::End => -advance,
    };
    // approximate glyph metrics: cap height ~0.7em
    let dy = match t.baseline {
        Baseline::Alphabetic => 0.0,
        Baseline::Middle => t.size * 0.32,
        Baseline::Hanging => t.size * 0.71,
    };

    canvas.save();
    if t.rotation != 0.0 {
        canvas.rotate(t.rotation, Some(skia::Point::new(t.x, t.y)));
    }
    canvas.draw_str(&t.text, (t.x + dx, t.y + dy), &font, &paint);
    canvas.restore();
}
