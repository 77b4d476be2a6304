// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges and tick formatting.

use crate::scale::{LinearScale, tick_step, ticks};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Rounded to the nearest integer, no grouping ("d").
    Integer,
    /// Just enough decimals to tell neighbouring ticks apart.
    Auto,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub tick_format: TickFormat,
    /// Requested number of ticks; the actual count follows the nice-step rule.
    pub tick_count: usize,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, tick_format: TickFormat::Auto, tick_count: 10 }
    }

    pub fn with_format(mut self, format: TickFormat) -> Self {
        self.tick_format = format;
        self
    }

    pub fn default_x() -> Self {
        Self::new("Year", 0.0, 1.0).with_format(TickFormat::Integer)
    }

    pub fn default_y() -> Self {
        Self::new("Count", 0.0, 1.0)
    }

    /// Scale from this axis' domain onto `range`.
    pub fn scale(&self, range: (f64, f64)) -> LinearScale {
        LinearScale::new((self.min, self.max), range)
    }

    pub fn tick_values(&self) -> Vec<f64> {
        ticks(self.min.min(self.max), self.max.max(self.min), self.tick_count)
    }

    /// Tick values paired with their label text.
    pub fn tick_labels(&self) -> Vec<(f64, String)> {
        let step = tick_step(self.min.min(self.max), self.max.max(self.min), self.tick_count);
        self.tick_values()
            .into_iter()
            .map(|v| (v, format_tick(v, self.tick_format, step)))
            .collect()
    }
}

pub fn format_tick(v: f64, format: TickFormat, step: f64) -> String {
    match format {
        TickFormat::Integer => format!("{}", v.round() as i64),
        TickFormat::Auto => {
            let decimals = if step > 0.0 && step < 1.0 {
                (-step.log10().floor()).max(0.0) as usize
            } else {
                0
            };
            let s = format!("{:.*}", decimals, v);
            // no "-0" / "-0.0"
            match s.strip_prefix('-') {
                Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
                _ => s,
            }
        }
    }
}
