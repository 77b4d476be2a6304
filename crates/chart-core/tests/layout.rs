// File: crates/chart-core/tests/layout.rs
// Purpose: Pixel placement of lines, axes, labels and legend in the laid-out scene.

use chart_core::scene::{Anchor, Shape};
use chart_core::{Axis, Chart, Legend, OrdinalPalette, RenderOptions, Series, TickFormat};

fn chart() -> Chart {
    let mut palette = OrdinalPalette::category10(["STEM", "Non-STEM"]);
    let mut chart = Chart::new();
    chart.title = "Title".into();
    chart.x_axis = Axis::new("Year", 1900.0, 2000.0).with_format(TickFormat::Integer);
    chart.y_axis = Axis::new("Number of Laureates", 0.0, 10.0);
    // deliberately unsorted
    chart.add_series(Series::with_data("STEM", palette.color_for("STEM"), vec![(2000.0, 10.0), (1900.0, 0.0), (1950.0, 5.0)]));
    chart.add_series(Series::with_data("Non-STEM", palette.color_for("Non-STEM"), vec![(1900.0, 10.0)]));
    chart.legend = Legend::from_palette(&palette);
    chart
}

#[test]
fn lines_are_sorted_and_scaled_into_plot_area() {
    let scene = chart().layout(&RenderOptions::default());
    let lines: Vec<_> = scene.with_class("line").collect();
    assert_eq!(lines.len(), 2);
    match &lines[0].shape {
        Shape::Polyline { points, width, stroke } => {
            // plot area is x 70..770, y 50..340
            assert_eq!(points, &vec![(70.0, 340.0), (420.0, 195.0), (770.0, 50.0)]);
            assert_eq!(*width, 2.0);
            assert_eq!(stroke.to_string(), "#1f77b4");
        }
        other => panic!("expected polyline, got {other:?}"),
    }
}

#[test]
fn axis_ticks_and_labels() {
    let scene = chart().layout(&RenderOptions::default());
    let tick_texts: Vec<&str> = scene
        .with_class("tick")
        .filter_map(|i| match &i.shape {
            Shape::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
        .collect();
    // x: 1900..2000 by 10, y: 0..10 by 1
    assert!(tick_texts.contains(&"1900"));
    assert!(tick_texts.contains(&"2000"));
    assert!(tick_texts.contains(&"10"));
    assert_eq!(tick_texts.len(), 11 + 11);
    assert_eq!(scene.with_class("domain").count(), 2);
}

#[test]
fn titles_and_rotated_y_label() {
    let scene = chart().layout(&RenderOptions::default());
    let title = scene.texts().find(|t| t.text == "Title").expect("title");
    assert_eq!((title.x, title.y), (420.0, 30.0));
    assert_eq!(title.anchor, Anchor::Middle);

    let x_label = scene.texts().find(|t| t.text == "Year").expect("x label");
    assert_eq!((x_label.x, x_label.y), (420.0, 380.0));

    let y_label = scene.texts().find(|t| t.text == "Number of Laureates").expect("y label");
    assert_eq!((y_label.x, y_label.y), (20.0, 195.0));
    assert_eq!(y_label.rotation, -90.0);
}

#[test]
fn legend_rows_above_plot_top_right() {
    let scene = chart().layout(&RenderOptions::default());
    let swatches: Vec<(f32, f32)> = scene
        .with_class("legend")
        .filter_map(|i| match &i.shape {
            Shape::Rect { x, y, .. } => Some((*x, *y)),
            _ => None,
        })
        .collect();
    assert_eq!(swatches, vec![(630.0, 10.0), (630.0, 30.0)]);
    let labels: Vec<&str> = scene
        .with_class("legend")
        .filter_map(|i| match &i.shape {
            Shape::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, ["STEM", "Non-STEM"]);
}

#[test]
fn no_labels_mode_drops_all_text() {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let scene = chart().layout(&opts);
    assert_eq!(scene.texts().count(), 0);
    assert_eq!(scene.with_class("line").count(), 2);
}

#[test]
fn empty_chart_still_has_axes_and_legend() {
    let mut c = chart();
    c.series.clear();
    c.x_axis = Axis::new("Year", 0.0, 1.0).with_format(TickFormat::Integer);
    c.y_axis = Axis::new("Number of Laureates", 0.0, 1.0);
    let scene = c.layout(&RenderOptions::default());
    assert_eq!(scene.with_class("line").count(), 0);
    assert_eq!(scene.with_class("domain").count(), 2);
    assert!(scene.with_class("legend").count() >= 2);
}
