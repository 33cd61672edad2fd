//! Query stage: classify and select groups.
//!
//! This module handles the third stage of the pipeline: deciding which
//! groups matter. It provides:
//!
//! - **Rules**: `Rule` bounds and `Filter` OR-combinations over canonical
//!   short/long sides
//! - **Selection**: the caller-owned `SelectionSet` and surface aggregation
//!
//! Everything here is pure predicate evaluation and arithmetic; how matches
//! are presented (highlighted, filtered out, summed) is the caller's call.

pub mod rules;
pub mod selection;

pub use rules::{Filter, Rule};
pub use selection::{total_surface, SelectionSet};
