// File: crates/nobel-chart/src/plot.rs
// Summary: Turn aggregated laureate counts into a renderable chart.

use chart_core::types::Insets;
use chart_core::{theme, Axis, Chart, Legend, OrdinalPalette, RenderOptions, Series, TickFormat};
use laureates::{max_count, AggregatedSeries, CategoryGroup};

use crate::config::ChartConfig;

/// Palette domain, fixed so colors do not depend on which groups are present.
pub fn group_palette() -> OrdinalPalette {
    OrdinalPalette::category10(CategoryGroup::ALL.iter().map(|g| g.label()))
}

/// Build the chart: one line per group, x over `years`, y over `[0, max count]`.
///
/// `years` is the extent of all record years; `None` (no records) falls back to a unit domain.
pub fn build_chart(series: &[AggregatedSeries], years: Option<(i32, i32)>, cfg: &ChartConfig) -> Chart {
    let mut palette = group_palette();
    let mut chart = Chart::new();
    chart.title = cfg.title.clone();

    for s in series {
        let color = palette.color_for(s.group.label());
        chart.add_series(Series::with_data(s.group.label(), color, s.to_xy()).with_stroke_width(cfg.stroke_width));
    }

    let (x0, x1) = years.map(|(a, b)| (a as f64, b as f64)).unwrap_or((0.0, 1.0));
    let y1 = max_count(series).map(f64::from).unwrap_or(1.0);
    chart.x_axis = Axis::new(cfg.x_label.as_str(), x0, x1).with_format(TickFormat::Integer);
    chart.y_axis = Axis::new(cfg.y_label.as_str(), 0.0, y1);
    chart.legend = Legend::from_palette(&palette);
    chart
}

pub fn render_options(cfg: &ChartConfig) -> RenderOptions {
    let m = cfg.margin;
    RenderOptions {
        width: cfg.width,
        height: cfg.height,
        insets: Insets::new(m.left, m.right, m.top, m.bottom),
        theme: theme::find(&cfg.theme),
        draw_labels: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use laureates::{aggregate, year_extent, Classifier, Record};

    fn records() -> Vec<Record> {
        vec![
            Record::new(1901, "physics", "A"),
            Record::new(1901, "literature", "B"),
            Record::new(1902, "chemistry", "C"),
            Record::new(1905, "peace", "D"),
            Record::new(1905, "peace", "E"),
        ]
    }

    #[test]
    fn chart_has_one_line_per_group_with_fixed_colors() {
        let recs = records();
        let series = aggregate(&recs, &Classifier::default());
        let chart = build_chart(&series, year_extent(&recs), &ChartConfig::default());

        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].name, "STEM");
        assert_eq!(chart.series[0].color.to_string(), "#1f77b4");
        assert_eq!(chart.series[1].name, "Non-STEM");
        assert_eq!(chart.series[1].color.to_string(), "#ff7f0e");
        assert_eq!((chart.x_axis.min, chart.x_axis.max), (1901.0, 1905.0));
        assert_eq!((chart.y_axis.min, chart.y_axis.max), (0.0, 2.0));
        assert_eq!(chart.legend.items.len(), 2);
    }

    #[test]
    fn non_stem_only_keeps_its_color_and_full_legend() {
        let recs = vec![Record::new(1950, "peace", "A")];
        let series = aggregate(&recs, &Classifier::default());
        let chart = build_chart(&series, year_extent(&recs), &ChartConfig::default());
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].color.to_string(), "#ff7f0e");
        let labels: Vec<&str> = chart.legend.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["STEM", "Non-STEM"]);
    }

    #[test]
    fn empty_input_uses_unit_domains() {
        let chart = build_chart(&[], None, &ChartConfig::default());
        assert!(chart.series.is_empty());
        assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 1.0));
        assert_eq!((chart.y_axis.min, chart.y_axis.max), (0.0, 1.0));
    }

    #[test]
    fn options_follow_config() {
        let mut cfg = ChartConfig::default();
        cfg.theme = "dark".into();
        let opts = render_options(&cfg);
        assert_eq!((opts.width, opts.height), (800, 400));
        assert_eq!(opts.insets, Insets::new(70, 30, 50, 60));
        assert_eq!(opts.theme.name, "dark");
    }
}
