//! # pagesizelib
//!
//! Page-size statistics for PDF documents: group pages by their physical
//! dimension, compress page-index sets into readable ranges, classify groups
//! with configurable size rules, and measure the aggregate surface of a
//! selection.
//!
//! ## Overview
//!
//! Print shops and archives care about *which pages of a document are which
//! physical size*: a 400-page file with six A0 foldouts is priced very
//! differently from a plain A4 run. This library answers that question:
//!
//! - **Rotation-invariant dimensions**: a page and its 90°-rotated twin are
//!   the same physical size, so `210x297` and `297x210` aggregate together
//! - **Range compression**: page sets display as `"1-3,7,9-10"`, not walls
//!   of numbers
//! - **Paper-size labels and filters**: configurable names (A4, Letter, …)
//!   and min/max side rules for classifying groups
//! - **Surface totals**: page-weighted physical area of any chosen subset
//!   of groups, in mm² / dm²
//!
//! The pipeline runs in four stages, one module each: `source` (document
//! and settings I/O), `data` (unit conversion and aggregation), `query`
//! (rules and selection), `output` (ranges and table records). The core is
//! pure and synchronous; only the `source` stage touches the filesystem.
//!
//! ## Example
//!
//! ```rust
//! use pagesizelib::{compress, DocumentStats, PageDescriptor};
//!
//! // Three A4 pages, one of them landscape (sizes in points)
//! let stats = DocumentStats::aggregate(vec![
//!     PageDescriptor { index: 1, width_pt: 595.0, height_pt: 842.0 },
//!     PageDescriptor { index: 2, width_pt: 842.0, height_pt: 595.0 },
//!     PageDescriptor { index: 3, width_pt: 595.0, height_pt: 842.0 },
//! ]);
//!
//! assert_eq!(stats.group_count(), 1);
//! let group = stats.sorted_groups()[0];
//! assert_eq!(group.dimension().short(), 210);
//! assert_eq!(group.dimension().long(), 297);
//! assert_eq!(compress(group.pages(), true), "1-3");
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

#[cfg(test)]
pub(crate) mod test_support;

pub use data::dimension::Dimension;
pub use data::stats::{DocumentStats, PageGroup};
pub use data::units::{mm_to_points, points_to_mm, MM_PER_POINT};
pub use error::PageSizeError;
pub use output::ranges::{compress, NO_PAGES_PLACEHOLDER};
pub use output::table::{format_surface_dm2, GroupRecord, SizeTable};
pub use query::rules::{Filter, Rule};
pub use query::selection::{total_surface, SelectionSet};
pub use source::document::{read_page_descriptors, PageDescriptor};
pub use source::settings::{Dictionary, Settings, DEFAULT_LANGUAGE, UNKNOWN_PAPER_SIZE};

/// Result type for pagesizelib operations
pub type Result<T> = std::result::Result<T, PageSizeError>;
