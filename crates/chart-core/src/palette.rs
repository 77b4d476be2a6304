// File: crates/chart-core/src/palette.rs
// Summary: Ordinal color assignment over a fixed categorical scheme.

use crate::theme::Rgba;

/// The ten-color categorical scheme ("Category10").
pub const CATEGORY10: [Rgba; 10] = [
    Rgba::rgb(0x1f, 0x77, 0xb4),
    Rgba::rgb(0xff, 0x7f, 0x0e),
    Rgba::rgb(0x2c, 0xa0, 0x2c),
    Rgba::rgb(0xd6, 0x27, 0x28),
    Rgba::rgb(0x94, 0x67, 0xbd),
    Rgba::rgb(0x8c, 0x56, 0x4b),
    Rgba::rgb(0xe3, 0x77, 0xc2),
    Rgba::rgb(0x7f, 0x7f, 0x7f),
    Rgba::rgb(0xbc, 0xbd, 0x22),
    Rgba::rgb(0x17, 0xbe, 0xcf),
];

/// Maps keys to colors by their position in `domain`; the range wraps around.
/// Keys not yet in the domain are appended on first lookup.
#[derive(Clone, Debug)]
pub struct OrdinalPalette {
    domain: Vec<String>,
    range: Vec<Rgba>,
}

impl OrdinalPalette {
    pub fn new<I, S>(domain: I, range: &[Rgba]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut p = Self { domain: Vec::new(), range: range.to_vec() };
        for key in domain {
            let key = key.into();
            if !p.domain.contains(&key) { p.domain.push(key); }
        }
        p
    }

    pub fn category10<I, S>(domain: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(domain, &CATEGORY10)
    }

    pub fn domain(&self) -> &[String] { &self.domain }

    pub fn color_for(&mut self, key: &str) -> Rgba {
        let idx = match self.domain.iter().position(|k| k == key) {
            Some(i) => i,
            None => {
                self.domain.push(key.to_string());
                self.domain.len() - 1
            }
        };
        if self.range.is_empty() { return Rgba::rgb(0, 0, 0); }
        self.range[idx % self.range.len()]
    }

    /// `(key, color)` for every key currently in the domain, in domain order.
    pub fn legend_entries(&self) -> Vec<(String, Rgba)> {
        self.domain
            .iter()
            .enumerate()
            .map(|(i, k)| (k.clone(), self.range.get(i % self.range.len().max(1)).copied().unwrap_or(Rgba::rgb(0, 0, 0))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_domain_order_sets_colors() {
        let mut p = OrdinalPalette::category10(["STEM", "Non-STEM"]);
        assert_eq!(p.color_for("Non-STEM").to_string(), "#ff7f0e");
        assert_eq!(p.color_for("STEM").to_string(), "#1f77b4");
    }

    #[test]
    fn unknown_keys_extend_domain() {
        let mut p = OrdinalPalette::category10(["a"]);
        assert_eq!(p.color_for("b"), CATEGORY10[1]);
        assert_eq!(p.color_for("b"), CATEGORY10[1]);
        assert_eq!(p.domain(), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn range_wraps() {
        let mut p = OrdinalPalette::new(["x", "y", "z"], &CATEGORY10[..2]);
        assert_eq!(p.color_for("z"), CATEGORY10[0]);
        assert_eq!(p.legend_entries().len(), 3);
    }
}
