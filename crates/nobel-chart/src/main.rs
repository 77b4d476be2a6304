// File: crates/nobel-chart/src/main.rs
// Summary: Load the laureates CSV, count records per category group and year,
//          and write the line chart as SVG (optionally PNG).
// Notes:
// - Exit code 0 when the chart is written, 1 on load, configuration or render failure.

mod cli;
mod config;
mod plot;

use anyhow::{Context, Result};
use cli::Args;
use config::{Config, DEFAULT_CONFIG_FILE};
use laureates::{aggregate, load_csv, year_extent};
use log::{debug, error, info};

fn main() {
    let args = Args::parse_args();

    if args.init_config {
        if let Err(e) = handle_init_config() {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
        return;
    }

    init_logging(&args);
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(&args) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins over the verbosity flags.
fn init_logging(args: &Args) {
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(DEFAULT_CONFIG_FILE);
    if path.exists() {
        anyhow::bail!("{DEFAULT_CONFIG_FILE} already exists. Remove it first or edit it manually.");
    }
    let content = Config::default_toml()?;
    std::fs::write(path, content).with_context(|| format!("Failed to write {DEFAULT_CONFIG_FILE}"))?;
    println!("Created {DEFAULT_CONFIG_FILE} with default settings.");
    Ok(())
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?.unwrap_or_default(),
    };
    config.merge_with_args(args);
    Ok(config)
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;

    let input = &config.input.path;
    info!("Using input file: {}", input.display());
    let records = load_csv(input).with_context(|| format!("failed to load CSV '{}'", input.display()))?;
    info!("Loaded {} records", records.len());

    let classifier = config.classification.classifier();
    debug!("STEM categories: {:?}", classifier.stem_categories());
    let series = aggregate(&records, &classifier);
    for s in &series {
        println!("{}: {} laureates over {} years", s.group, s.total(), s.points.len());
    }

    let chart = plot::build_chart(&series, year_extent(&records), &config.chart);
    let opts = plot::render_options(&config.chart);

    chart.render_to_svg(&opts, &config.output.svg)?;
    println!("Wrote {}", config.output.svg.display());

    if let Some(png) = &config.output.png {
        chart.render_to_png(&opts, png)?;
        println!("Wrote {}", png.display());
    }
    Ok(())
}
