//! Output stage: format grouped statistics for display.
//!
//! This module handles the fourth and final stage of the pipeline. It
//! provides:
//!
//! - **Range compression**: page-index sets as `"1-3,7,9-10"` strings
//! - **SizeTable**: table-ready records with resolved labels and headers
//!
//! Output types only format data into strings; aggregation and selection
//! happen in the earlier stages.

pub mod ranges;
pub mod table;

pub use ranges::{compress, NO_PAGES_PLACEHOLDER};
pub use table::{format_surface_dm2, GroupRecord, SizeTable};
