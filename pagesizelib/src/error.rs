//! Error types for pagesizelib

use std::path::PathBuf;
use thiserror::Error;

use crate::data::dimension::Dimension;

/// Errors that can occur while reading documents or configuration
#[derive(Error, Debug)]
pub enum PageSizeError {
    /// The document collaborator failed to produce page data
    #[error("failed to read document '{path}': {source}")]
    DocumentRead {
        path: PathBuf,
        source: lopdf::Error,
    },

    /// Failed to read the settings file
    #[error("failed to read settings '{path}': {source}")]
    SettingsRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Settings file is not valid JSON or does not match the schema
    #[error("failed to parse settings '{path}': {source}")]
    SettingsParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Two paper-size entries collide on the same canonical dimension
    #[error("same dimension ({dimension}) present multiple times: {existing} and {incoming}")]
    PaperSizeConflict {
        dimension: Dimension,
        existing: String,
        incoming: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
