// File: crates/laureates/src/classify.rs
// Summary: STEM / Non-STEM grouping of award categories.
// Notes:
// - The classifier is a plain lookup table built from configuration; categories
//   absent from the table fall back to `Non-STEM`, so classification is total.

use std::collections::HashMap;
use std::fmt;

/// Award categories counted as STEM when no configuration overrides them.
pub const DEFAULT_STEM_CATEGORIES: [&str; 4] = ["physics", "chemistry", "medicine", "economic sciences"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryGroup {
    Stem,
    NonStem,
}

impl CategoryGroup {
    /// All groups, in legend order.
    pub const ALL: [CategoryGroup; 2] = [CategoryGroup::Stem, CategoryGroup::NonStem];

    pub const fn label(&self) -> &'static str {
        match self {
            CategoryGroup::Stem => "STEM",
            CategoryGroup::NonStem => "Non-STEM",
        }
    }
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a category name (case-insensitive) to its group.
#[derive(Clone, Debug)]
pub struct Classifier {
    groups: HashMap<String, CategoryGroup>,
    fallback: CategoryGroup,
}

impl Classifier {
    /// Build a classifier where every listed category is STEM and everything else is Non-STEM.
    pub fn with_stem<I, S>(stem: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let groups = stem
            .into_iter()
            .map(|c| (normalize(c.as_ref()), CategoryGroup::Stem))
            .collect();
        Self { groups, fallback: CategoryGroup::NonStem }
    }

    pub fn classify(&self, category: &str) -> CategoryGroup {
        self.groups.get(&normalize(category)).copied().unwrap_or(self.fallback)
    }

    /// Categories mapped to STEM, sorted.
    pub fn stem_categories(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self
            .groups
            .iter()
            .filter(|(_, g)| **g == CategoryGroup::Stem)
            .map(|(c, _)| c.as_str())
            .collect();
        v.sort_unstable();
        v
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::with_stem(DEFAULT_STEM_CATEGORIES)
    }
}

/// Case folding only; surrounding whitespace is part of the category name.
fn normalize(category: &str) -> String {
    category.to_lowercase()
}
