// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing SVG and PNG files.

use chart_core::{Axis, Chart, RenderOptions, Rgba, Series};

fn small_chart() -> Chart {
    let mut chart = Chart::new();
    chart.title = "Smoke".into();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data(
        "s",
        Rgba::rgb(0x1f, 0x77, 0xb4),
        vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)],
    ));
    chart
}

#[test]
fn render_smoke_png() {
    let chart = small_chart();
    let opts = RenderOptions::default();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested/smoke.png");

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!((img.width(), img.height()), (800, 400));
    // Default theme paints a white, opaque background.
    assert_eq!(img.get_pixel(1, 1).0, [255, 255, 255, 255]);
}

#[test]
fn render_smoke_svg() {
    let chart = small_chart();
    let opts = RenderOptions::default();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out/smoke.svg");

    chart.render_to_svg(&opts, &out).expect("render svg");
    let text = std::fs::read_to_string(&out).expect("read svg");
    assert!(text.contains("<svg"));
    assert!(text.trim_end().ends_with("</svg>"));
    assert!(text.contains(r#"width="800""#));
    assert!(text.contains(r#"height="400""#));
    assert!(text.contains(">Smoke</text>"));
    assert_eq!(text, chart.render_to_svg_string(&opts).expect("svg string"));
}
