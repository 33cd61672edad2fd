//! Core data structures for page-size statistics.
//!
//! One aggregation pass turns the document's page descriptors into a set of
//! [`PageGroup`]s, one per distinct physical size. Each group exclusively
//! owns its page-index list; a page belongs to exactly one group. The whole
//! [`DocumentStats`] snapshot is scoped to a single document load; on reload
//! the caller discards it and aggregates afresh instead of mutating in
//! place.

use std::collections::HashMap;

use log::debug;
use serde::Serialize;

use super::dimension::Dimension;
use crate::source::document::PageDescriptor;

/// The pages sharing one physical dimension.
///
/// Grows only during aggregation; read-only afterwards. Page indices are
/// 1-based, unique, and kept in discovery order; sorting them is a
/// presentation concern handled by range compression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageGroup {
    dimension: Dimension,
    pages: Vec<u32>,
}

impl PageGroup {
    /// Create an empty group for a dimension.
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            pages: Vec::new(),
        }
    }

    /// Append a page index discovered during aggregation.
    pub(crate) fn push_page(&mut self, index: u32) {
        self.pages.push(index);
    }

    /// The group's canonical dimension.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Page indices in discovery order.
    pub fn pages(&self) -> &[u32] {
        &self.pages
    }

    /// Number of pages in the group.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Physical area of the group in mm²: page count × short × long.
    pub fn surface_mm2(&self) -> u64 {
        self.pages.len() as u64 * self.dimension.short() as u64 * self.dimension.long() as u64
    }
}

/// All page groups of one document-parsing session.
#[derive(Debug, Clone, Default)]
pub struct DocumentStats {
    groups: HashMap<Dimension, PageGroup>,
}

impl DocumentStats {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Group page descriptors by canonical dimension.
    ///
    /// Descriptors are consumed in input order; an empty input yields an
    /// empty snapshot, not an error. Group iteration order is unspecified;
    /// use [`sorted_groups`](Self::sorted_groups) for display.
    pub fn aggregate(pages: impl IntoIterator<Item = PageDescriptor>) -> Self {
        let mut groups: HashMap<Dimension, PageGroup> = HashMap::new();

        for page in pages {
            let dimension = page.dimension();
            groups
                .entry(dimension)
                .or_insert_with(|| PageGroup::new(dimension))
                .push_page(page.index);
        }

        let stats = Self { groups };
        debug!(
            "aggregated {} pages into {} groups",
            stats.page_count(),
            stats.group_count()
        );
        stats
    }

    /// Whether the snapshot holds no groups at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of distinct dimensions.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of pages across all groups.
    pub fn page_count(&self) -> usize {
        self.groups.values().map(PageGroup::page_count).sum()
    }

    /// Look up the group for a dimension.
    pub fn group(&self, dimension: &Dimension) -> Option<&PageGroup> {
        self.groups.get(dimension)
    }

    /// Iterate groups in unspecified order.
    pub fn groups(&self) -> impl Iterator<Item = &PageGroup> {
        self.groups.values()
    }

    /// Groups sorted by `(short, long)` ascending, the canonical display
    /// order.
    pub fn sorted_groups(&self) -> Vec<&PageGroup> {
        let mut groups: Vec<&PageGroup> = self.groups.values().collect();
        groups.sort_by_key(|g| g.dimension());
        groups
    }
}
