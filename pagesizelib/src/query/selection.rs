//! Group selection and surface aggregation.
//!
//! A [`SelectionSet`] is the caller-owned, transient subset of groups that
//! feeds surface computation. Groups are identified by their canonical
//! dimension, which is unique per group within a snapshot, so the set also
//! deduplicates: a group contributes to the surface at most once no matter
//! how often it is selected.

use std::collections::HashSet;

use crate::data::dimension::Dimension;
use crate::data::stats::{DocumentStats, PageGroup};
use crate::query::rules::Filter;

/// Sum the physical area of groups in mm², counting each group once.
///
/// Duplicates in the input (by group identity, i.e. canonical dimension)
/// are ignored.
pub fn total_surface<'a>(groups: impl IntoIterator<Item = &'a PageGroup>) -> u64 {
    let mut seen = HashSet::new();
    groups
        .into_iter()
        .filter(|group| seen.insert(group.dimension()))
        .map(PageGroup::surface_mm2)
        .sum()
}

/// A transient, caller-controlled subset of a snapshot's groups.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    selected: HashSet<Dimension>,
}

impl SelectionSet {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Number of selected groups.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether the group with this dimension is selected.
    pub fn contains(&self, dimension: &Dimension) -> bool {
        self.selected.contains(dimension)
    }

    /// Add a group to the selection.
    pub fn insert(&mut self, dimension: Dimension) {
        self.selected.insert(dimension);
    }

    /// Remove a group from the selection.
    pub fn remove(&mut self, dimension: &Dimension) {
        self.selected.remove(dimension);
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Replace the selection with the groups matched by a filter.
    ///
    /// The previous selection is discarded entirely; applying a second
    /// filter never accumulates with the first.
    pub fn select_matching(&mut self, filter: &Filter, stats: &DocumentStats) {
        self.selected = stats
            .groups()
            .map(PageGroup::dimension)
            .filter(|dimension| filter.matches_dimension(dimension))
            .collect();
    }

    /// The selected groups, in canonical `(short, long)` order.
    pub fn groups<'a>(&self, stats: &'a DocumentStats) -> Vec<&'a PageGroup> {
        let mut groups: Vec<&PageGroup> = self
            .selected
            .iter()
            .filter_map(|dimension| stats.group(dimension))
            .collect();
        groups.sort_by_key(|g| g.dimension());
        groups
    }

    /// Total surface of the selected groups in mm².
    pub fn surface_mm2(&self, stats: &DocumentStats) -> u64 {
        total_surface(self.groups(stats))
    }
}
