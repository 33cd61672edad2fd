//! Size-based classification rules.
//!
//! A [`Rule`] constrains a group's canonical short and long side with up to
//! four optional bounds; a [`Filter`] is a named OR-combination of rules.
//! Both are loaded once from settings and never mutated afterwards. Matching
//! is pure predicate evaluation; what to do with a match (select rows,
//! compute surface) is the caller's business.

use serde::{Deserialize, Serialize};

use crate::data::dimension::Dimension;

/// Bounds on a group's short and long side, all optional.
///
/// A rule matches iff every *present* bound is satisfied; absent bounds
/// impose no constraint. The all-absent rule is legal and matches every
/// input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Rule {
    /// Minimum short side in millimeters.
    pub min_short_side: Option<u32>,
    /// Maximum short side in millimeters.
    pub max_short_side: Option<u32>,
    /// Minimum long side in millimeters.
    pub min_long_side: Option<u32>,
    /// Maximum long side in millimeters.
    pub max_long_side: Option<u32>,
}

impl Rule {
    /// Create an unconstrained rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the minimum short side.
    pub fn min_short(mut self, mm: u32) -> Self {
        self.min_short_side = Some(mm);
        self
    }

    /// Builder: set the maximum short side.
    pub fn max_short(mut self, mm: u32) -> Self {
        self.max_short_side = Some(mm);
        self
    }

    /// Builder: set the minimum long side.
    pub fn min_long(mut self, mm: u32) -> Self {
        self.min_long_side = Some(mm);
        self
    }

    /// Builder: set the maximum long side.
    pub fn max_long(mut self, mm: u32) -> Self {
        self.max_long_side = Some(mm);
        self
    }

    /// Whether a `(short, long)` pair satisfies every present bound.
    pub fn matches(&self, short: u32, long: u32) -> bool {
        if self.min_short_side.is_some_and(|min| short < min) {
            return false;
        }
        if self.max_short_side.is_some_and(|max| short > max) {
            return false;
        }
        if self.min_long_side.is_some_and(|min| long < min) {
            return false;
        }
        if self.max_long_side.is_some_and(|max| long > max) {
            return false;
        }
        true
    }
}

/// A named OR-combination of rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Display label.
    #[serde(rename = "text")]
    pub label: String,
    /// Rules combined with logical OR. An empty list never matches.
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl Filter {
    /// Create a filter from a label and rules.
    pub fn new(label: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            label: label.into(),
            rules,
        }
    }

    /// Whether any contained rule matches the `(short, long)` pair.
    pub fn matches(&self, short: u32, long: u32) -> bool {
        self.rules.iter().any(|rule| rule.matches(short, long))
    }

    /// Whether any contained rule matches the dimension.
    pub fn matches_dimension(&self, dimension: &Dimension) -> bool {
        self.matches(dimension.short(), dimension.long())
    }
}
