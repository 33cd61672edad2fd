//! Source stage: everything read from outside the process.
//!
//! This is the first stage of the pipeline. It provides:
//!
//! - **Document reading**: per-page dimensions out of a PDF (`lopdf`)
//! - **Settings**: paper sizes, filters, and display options from JSON
//!
//! Nothing downstream performs I/O: the document becomes a plain list of
//! [`PageDescriptor`]s and the configuration a read-only [`Settings`].

pub mod document;
pub mod settings;

pub use document::{read_page_descriptors, PageDescriptor};
pub use settings::{Dictionary, Settings, DEFAULT_LANGUAGE, UNKNOWN_PAPER_SIZE};
