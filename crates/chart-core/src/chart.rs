// File: crates/chart-core/src/chart.rs
// Summary: Chart struct, layout into a `Scene`, and SVG/PNG output entry points.

use std::path::Path;

use log::{debug, warn};

use crate::axis::Axis;
use crate::error::RenderError;
use crate::geometry::RectI32;
use crate::legend::Legend;
use crate::scale::LinearScale;
use crate::scene::{Anchor, Baseline, Scene, Shape, TextRun};
use crate::series::Series;
use crate::theme::Theme;
use crate::types::{Insets, WIDTH, HEIGHT};
use crate::{raster, svg};

/// Length of axis tick marks and of the domain path's end caps.
const TICK_SIZE: f32 = 6.0;
/// Distance from the axis line to tick label text.
const TICK_PADDING: f32 = 3.0;
const TICK_FONT: f32 = 10.0;
const LABEL_FONT: f32 = 12.0;
const TITLE_FONT: f32 = 16.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Emit text (ticks, labels, title, legend text). Off for pixel-stable snapshots.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Legend,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            legend: Legend::default(),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Resolve every visual element to absolute pixel primitives.
    pub fn layout(&self, opts: &RenderOptions) -> Scene {
        let theme = &opts.theme;
        let mut scene = Scene::new(opts.width, opts.height, theme.background, theme.font_family);
        let plot = RectI32::plot_area(opts.width, opts.height, &opts.insets);

        let xs = self.x_axis.scale((plot.left as f64, plot.right as f64));
        let ys = self.y_axis.scale((plot.bottom as f64, plot.top as f64));

        if self.series.iter().all(|s| s.data_xy.is_empty()) {
            warn!("chart has no data points; drawing axes only");
        }

        layout_series(&mut scene, &self.series, &xs, &ys);
        layout_bottom_axis(&mut scene, &plot, &self.x_axis, &xs, theme, opts.draw_labels);
        layout_left_axis(&mut scene, &plot, &self.y_axis, &ys, theme, opts.draw_labels);
        if opts.draw_labels {
            layout_labels(&mut scene, &plot, self, theme);
        }
        layout_legend(&mut scene, &plot, &self.legend, theme, opts.draw_labels);

        debug!("laid out {} scene items", scene.items.len());
        scene
    }

    pub fn render_to_svg_string(&self, opts: &RenderOptions) -> Result<String, RenderError> {
        svg::to_string(&self.layout(opts))
    }

    /// Write the chart as an SVG document, creating parent directories.
    pub fn render_to_svg(&self, opts: &RenderOptions, output_svg_path: impl AsRef<Path>) -> Result<(), RenderError> {
        let doc = self.render_to_svg_string(opts)?;
        write_file(output_svg_path.as_ref(), doc.as_bytes())
    }

    /// Rasterize the chart and return PNG-encoded bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        raster::render_png(&self.layout(opts))
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<(), RenderError> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_file(output_png_path.as_ref(), &bytes)
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), RenderError> {
    let io = |source: std::io::Error| RenderError::Io { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(io)?;
        }
    }
    std::fs::write(path, bytes).map_err(io)
}

// ---- helpers ----------------------------------------------------------------

fn layout_series(scene: &mut Scene, series: &[Series], xs: &LinearScale, ys: &LinearScale) {
    for s in series {
        let points: Vec<(f32, f32)> = s
            .sorted_points()
            .into_iter()
            .map(|(x, y)| (xs.map(x) as f32, ys.map(y) as f32))
            .collect();
        if points.is_empty() {
            continue;
        }
        scene.push(Some("line"), Shape::Polyline { points, stroke: s.color, width: s.stroke_width });
    }
}

fn layout_bottom_axis(
    scene: &mut Scene,
    plot: &RectI32,
    axis: &Axis,
    xs: &LinearScale,
    theme: &Theme,
    draw_labels: bool,
) {
    let (l, r, b) = (plot.left as f32, plot.right as f32, plot.bottom as f32);
    scene.push(
        Some("domain"),
        Shape::Polyline {
            points: vec![(l, b + TICK_SIZE), (l, b), (r, b), (r, b + TICK_SIZE)],
            stroke: theme.axis_line,
            width: 1.0,
        },
    );
    for (v, label) in axis.tick_labels() {
        let x = xs.map(v) as f32;
        scene.push(Some("tick"), Shape::Line { from: (x, b), to: (x, b + TICK_SIZE), stroke: theme.tick, width: 1.0 });
        if draw_labels {
            let t = TextRun::new(x, b + TICK_SIZE + TICK_PADDING, label, TICK_FONT, theme.axis_label)
                .anchor(Anchor::Middle)
                .baseline(Baseline::Hanging);
            scene.push(Some("tick"), Shape::Text(t));
        }
    }
}

fn layout_left_axis(
    scene: &mut Scene,
    plot: &RectI32,
    axis: &Axis,
    ys: &LinearScale,
    theme: &Theme,
    draw_labels: bool,
) {
    let (l, t, b) = (plot.left as f32, plot.top as f32, plot.bottom as f32);
    scene.push(
        Some("domain"),
        Shape::Polyline {
            points: vec![(l - TICK_SIZE, b), (l, b), (l, t), (l - TICK_SIZE, t)],
            stroke: theme.axis_line,
            width: 1.0,
        },
    );
    for (v, label) in axis.tick_labels() {
        let y = ys.map(v) as f32;
        scene.push(Some("tick"), Shape::Line { from: (l - TICK_SIZE, y), to: (l, y), stroke: theme.tick, width: 1.0 });
        if draw_labels {
            let t = TextRun::new(l - TICK_SIZE - TICK_PADDING, y, label, TICK_FONT, theme.axis_label)
                .anchor(Anchor::End)
                .baseline(Baseline::Middle);
            scene.push(Some("tick"), Shape::Text(t));
        }
    }
}

fn layout_labels(scene: &mut Scene, plot: &RectI32, chart: &Chart, theme: &Theme) {
    let cx = plot.left as f32 + plot.width() as f32 * 0.5;
    let cy = plot.top as f32 + plot.height() as f32 * 0.5;

    if !chart.title.is_empty() {
        let t = TextRun::new(cx, plot.top as f32 - 20.0, chart.title.as_str(), TITLE_FONT, theme.title)
            .anchor(Anchor::Middle)
            .bold();
        scene.push(Some("title"), Shape::Text(t));
    }
    if !chart.x_axis.label.is_empty() {
        let t = TextRun::new(cx, plot.bottom as f32 + 40.0, chart.x_axis.label.as_str(), LABEL_FONT, theme.axis_label)
            .anchor(Anchor::Middle);
        scene.push(Some("x-label"), Shape::Text(t));
    }
    if !chart.y_axis.label.is_empty() {
        let t = TextRun::new(plot.left as f32 - 50.0, cy, chart.y_axis.label.as_str(), LABEL_FONT, theme.axis_label)
            .anchor(Anchor::Middle)
            .rotated(-90.0);
        scene.push(Some("y-label"), Shape::Text(t));
    }
}

fn layout_legend(scene: &mut Scene, plot: &RectI32, legend: &Legend, theme: &Theme, draw_labels: bool) {
    let x = plot.right as f32 - legend.right_offset;
    for (i, item) in legend.items.iter().enumerate() {
        let y = plot.top as f32 + legend.top_offset + i as f32 * legend.row_height;
        scene.push(Some("legend"), Shape::Rect { x, y, w: legend.swatch, h: legend.swatch, fill: item.color });
        if draw_labels {
            let t = TextRun::new(x + legend.label_dx, y + legend.label_dy, item.label.as_str(), legend.font_size, theme.axis_label)
                .baseline(Baseline::Middle);
            scene.push(Some("legend"), Shape::Text(t));
        }
    }
}
