// File: crates/nobel-chart/src/config.rs
// Summary: TOML configuration file handling.
// Notes:
// - Settings come from `nobel-chart.toml` (or `--config`), then CLI flags override them.

use anyhow::{Context, Result};
use laureates::{Classifier, DEFAULT_STEM_CATEGORIES};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "nobel-chart.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub chart: ChartConfig,

    #[serde(default)]
    pub classification: ClassificationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// CSV path, relative to the working directory.
    #[serde(default = "default_input")]
    pub path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { path: default_input() }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("nobel_laureates.csv")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_svg")]
    pub svg: PathBuf,

    /// Optional PNG rendering next to the SVG.
    #[serde(default)]
    pub png: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { svg: default_svg(), png: None }
    }
}

fn default_svg() -> PathBuf {
    PathBuf::from("target/out/nobel_laureates.svg")
}

/// Geometry and text of the chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_x_label")]
    pub x_label: String,

    #[serde(default = "default_y_label")]
    pub y_label: String,

    #[serde(default = "default_width")]
    pub width: i32,

    #[serde(default = "default_height")]
    pub height: i32,

    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,

    #[serde(default)]
    pub margin: MarginConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            x_label: default_x_label(),
            y_label: default_y_label(),
            width: default_width(),
            height: default_height(),
            theme: default_theme(),
            stroke_width: default_stroke_width(),
            margin: MarginConfig::default(),
        }
    }
}

fn default_title() -> String {
    "Nobel Laureates Over Time: STEM vs Non-STEM".to_string()
}

fn default_x_label() -> String {
    "Year".to_string()
}

fn default_y_label() -> String {
    "Number of Laureates".to_string()
}

fn default_width() -> i32 {
    800
}

fn default_height() -> i32 {
    400
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_stroke_width() -> f32 {
    2.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarginConfig {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self { top: 50, right: 30, bottom: 60, left: 70 }
    }
}

/// Which award categories count as STEM. Anything else is Non-STEM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationConfig {
    #[serde(default = "default_stem")]
    pub stem: Vec<String>,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self { stem: default_stem() }
    }
}

fn default_stem() -> Vec<String> {
    DEFAULT_STEM_CATEGORIES.iter().map(|s| s.to_string()).collect()
}

impl ClassificationConfig {
    pub fn classifier(&self) -> Classifier {
        Classifier::with_stem(&self.stem)
    }
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load `nobel-chart.toml` from the working directory.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(DEFAULT_CONFIG_FILE);

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// CLI arguments take precedence over config file settings.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref input) = args.input {
            self.input.path = input.clone();
        }
        if let Some(ref out) = args.out {
            self.output.svg = out.clone();
        }
        if let Some(ref png) = args.png {
            self.output.png = Some(png.clone());
        }
        if let Some(ref theme) = args.theme {
            self.chart.theme = theme.clone();
        }
        if let Some(ref title) = args.title {
            self.chart.title = title.clone();
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> Result<String> {
        toml::to_string_pretty(&Config::default()).context("Failed to serialize default configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.chart.width, 800);
        assert_eq!(config.chart.height, 400);
        assert_eq!(config.chart.margin, MarginConfig { top: 50, right: 30, bottom: 60, left: 70 });
        assert_eq!(config.classification.stem.len(), 4);
        assert_eq!(config.input.path, PathBuf::from("nobel_laureates.csv"));
        assert!(config.output.png.is_none());
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[input]
path = "data/laureates.csv"

[chart]
title = "Custom"
theme = "dark"

[chart.margin]
top = 10
right = 10
bottom = 20
left = 30

[classification]
stem = ["Physics", "Chemistry"]
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.input.path, PathBuf::from("data/laureates.csv"));
        assert_eq!(config.chart.title, "Custom");
        assert_eq!(config.chart.theme, "dark");
        assert_eq!(config.chart.width, 800);
        assert_eq!(config.chart.margin.left, 30);
        let c = config.classification.classifier();
        assert_eq!(c.classify("physics"), laureates::CategoryGroup::Stem);
        assert_eq!(c.classify("medicine"), laureates::CategoryGroup::NonStem);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml().unwrap();
        assert!(!toml_str.trim().is_empty());
        assert!(toml_str.contains("[input]"));
        assert!(toml_str.contains("[chart]"));
        assert!(toml_str.contains("[classification]"));
        let back: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(back.classification.stem, default_stem());
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = Config::default();
        let args = crate::cli::Args::try_parse_from(["nobel-chart", "x.csv", "--png", "x.png", "--title", "T"]).unwrap();
        config.merge_with_args(&args);
        assert_eq!(config.input.path, PathBuf::from("x.csv"));
        assert_eq!(config.output.png, Some(PathBuf::from("x.png")));
        assert_eq!(config.output.svg, default_svg());
        assert_eq!(config.chart.title, "T");
    }
}
