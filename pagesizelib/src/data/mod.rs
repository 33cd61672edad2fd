//! Data stage: normalize and aggregate page dimensions.
//!
//! This module handles the second stage of the pipeline: turning raw page
//! descriptors into grouped statistics. It provides:
//!
//! - **Units**: points ↔ millimeters conversion
//! - **Dimension**: rotation-invariant canonical page size
//! - **Statistics**: `PageGroup` and the `DocumentStats::aggregate` pass

pub mod dimension;
pub mod stats;
pub mod units;

pub use dimension::Dimension;
pub use stats::{DocumentStats, PageGroup};
pub use units::{mm_to_points, points_to_mm, MM_PER_POINT};
