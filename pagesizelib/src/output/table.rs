//! Table-ready records for page-size output.
//!
//! [`SizeTable`] is the last stop before presentation: rows are fully
//! formatted strings, sorted in canonical order, with headers already
//! resolved through the display dictionary. Renderers (text table, JSON)
//! only lay the data out; no computation happens past this point.

use serde::Serialize;

use crate::data::stats::{DocumentStats, PageGroup};
use crate::output::ranges;
use crate::source::settings::Settings;

/// Render a surface in mm² as squared decimeters with one decimal digit.
pub fn format_surface_dm2(mm2: u64) -> String {
    format!("{:.1}", mm2 as f64 / 10_000.0)
}

/// One group, formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupRecord {
    /// Number of pages in the group.
    pub page_count: usize,
    /// Canonical short side in millimeters.
    pub short: u32,
    /// Canonical long side in millimeters.
    pub long: u32,
    /// Dimension cell, e.g. `"210x297 mm"`.
    pub dimension: String,
    /// Resolved paper-size label, or the unknown sentinel.
    pub paper_size: String,
    /// Compressed page ranges, e.g. `"1-3,7,9-10"`.
    pub pages: String,
}

impl GroupRecord {
    /// Format a group against the loaded settings.
    pub fn from_group(group: &PageGroup, settings: &Settings) -> Self {
        let dimension = group.dimension();
        Self {
            page_count: group.page_count(),
            short: dimension.short(),
            long: dimension.long(),
            dimension: dimension.to_string(),
            paper_size: settings.paper_size(&dimension).to_string(),
            pages: ranges::compress(group.pages(), settings.group_pages),
        }
    }
}

/// Table-ready page-size data: headers, rows in canonical order, footer.
#[derive(Debug, Clone, Serialize)]
pub struct SizeTable {
    /// Column headers, resolved through the display dictionary.
    pub headers: Vec<String>,
    /// One record per group, sorted by `(short, long)` ascending.
    pub rows: Vec<GroupRecord>,
    /// Summary line, e.g. `"Total (12 pages, 3 groups)"`.
    pub footer: String,
}

impl SizeTable {
    /// Build a table over every group in a snapshot.
    pub fn from_stats(stats: &DocumentStats, settings: &Settings) -> Self {
        Self::from_groups(&stats.sorted_groups(), settings)
    }

    /// Build a table over a chosen subset of groups.
    ///
    /// Rows come out in canonical `(short, long)` order regardless of the
    /// order groups are handed in.
    pub fn from_groups(groups: &[&PageGroup], settings: &Settings) -> Self {
        let mut sorted: Vec<&PageGroup> = groups.to_vec();
        sorted.sort_by_key(|g| g.dimension());

        let rows: Vec<GroupRecord> = sorted
            .iter()
            .map(|group| GroupRecord::from_group(group, settings))
            .collect();
        let page_total: usize = rows.iter().map(|r| r.page_count).sum();
        let footer = format!("Total ({} pages, {} groups)", page_total, rows.len());

        let dict = &settings.dictionary;
        let headers = vec![
            dict.word_or("page-count", "Page count").to_string(),
            dict.word_or("dimension", "Dimension").to_string(),
            dict.word_or("paper-size", "Paper size").to_string(),
            dict.word_or("pages", "Pages").to_string(),
        ];

        Self {
            headers,
            rows,
            footer,
        }
    }
}
