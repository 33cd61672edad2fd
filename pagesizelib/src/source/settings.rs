//! Configuration: paper sizes, filters, display options.
//!
//! Settings are loaded once at startup from a JSON file and treated as
//! read-only for the lifetime of the process. The file mirrors the schema
//! the application has always used (kebab-case keys), every section
//! optional:
//!
//! ```json
//! {
//!   "dimensions": [ { "name": "A4", "size": { "width": 210, "height": 297 } } ],
//!   "configuration": { "group-pages": true },
//!   "filters": [ { "text": "Large", "rules": [ { "min-short-side": 300 } ] } ],
//!   "language": "EN",
//!   "dictionaries": [
//!     { "name": "EN", "words": [ { "id": "paper-size", "value": "Paper size" } ] }
//!   ]
//! }
//! ```
//!
//! A missing file is not an error; defaults apply. Two paper-size entries
//! colliding on the same canonical dimension are a configuration error and
//! must be surfaced before any aggregation output is labeled.

use std::collections::HashMap;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::data::dimension::Dimension;
use crate::error::PageSizeError;
use crate::query::rules::Filter;
use crate::Result;

/// Label resolved for dimensions with no configured paper size.
pub const UNKNOWN_PAPER_SIZE: &str = "unknown";

/// Dictionary picked when the settings name no language.
pub const DEFAULT_LANGUAGE: &str = "EN";

/// Opaque id → display string lookup.
///
/// The core never interprets the strings; missing ids fall back to the id
/// itself so a sparse dictionary degrades to readable output.
#[derive(Debug, Clone)]
pub struct Dictionary {
    name: String,
    words: HashMap<String, String>,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new("default")
    }
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            words: HashMap::new(),
        }
    }

    /// The dictionary's name (its language code).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a word.
    pub fn add_word(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.words.insert(id.into(), value.into());
    }

    /// Look up a word, falling back to the id itself.
    pub fn word<'a>(&'a self, id: &'a str) -> &'a str {
        self.words.get(id).map(String::as_str).unwrap_or(id)
    }

    /// Look up a word, falling back to a caller-supplied default.
    pub fn word_or<'a>(&'a self, id: &str, default: &'a str) -> &'a str {
        self.words.get(id).map(String::as_str).unwrap_or(default)
    }
}

/// Loaded configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    paper_sizes: HashMap<Dimension, String>,
    /// Named filters, in file order.
    pub filters: Vec<Filter>,
    /// Whether page lists compress consecutive runs into ranges.
    pub group_pages: bool,
    /// Active display dictionary.
    pub dictionary: Dictionary,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            paper_sizes: HashMap::new(),
            filters: Vec::new(),
            group_pages: true,
            dictionary: Dictionary::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file.
    ///
    /// A missing file yields defaults. An unreadable or unparsable file, or
    /// a duplicate canonical paper-size dimension, is an error; the caller
    /// decides whether to abort or fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("no settings file at '{}', using defaults", path.display());
            return Ok(Self::default());
        }

        let text =
            std::fs::read_to_string(path).map_err(|source| PageSizeError::SettingsRead {
                path: path.to_path_buf(),
                source,
            })?;
        let file: SettingsFile =
            serde_json::from_str(&text).map_err(|source| PageSizeError::SettingsParse {
                path: path.to_path_buf(),
                source,
            })?;

        let settings = Self::from_file(file)?;
        info!(
            "loaded {} paper sizes, {} filters from '{}'",
            settings.paper_sizes.len(),
            settings.filters.len(),
            path.display()
        );
        Ok(settings)
    }

    fn from_file(file: SettingsFile) -> Result<Self> {
        let mut settings = Self {
            group_pages: file.configuration.group_pages,
            filters: file.filters.unwrap_or_default(),
            ..Self::default()
        };

        for entry in file.dimensions {
            let dimension = Dimension::new(entry.size.width, entry.size.height);
            settings.add_paper_size(dimension, entry.name)?;
        }

        let language = file.language;
        if let Some(entry) = file.dictionaries.into_iter().find(|d| d.name == language) {
            let mut dictionary = Dictionary::new(entry.name);
            for word in entry.words {
                dictionary.add_word(word.id, word.value);
            }
            debug!("using dictionary '{}'", dictionary.name());
            settings.dictionary = dictionary;
        }

        Ok(settings)
    }

    /// Register a paper size, rejecting canonical-dimension collisions.
    pub fn add_paper_size(
        &mut self,
        dimension: Dimension,
        label: impl Into<String>,
    ) -> Result<()> {
        let label = label.into();
        if let Some(existing) = self.paper_sizes.get(&dimension) {
            return Err(PageSizeError::PaperSizeConflict {
                dimension,
                existing: existing.clone(),
                incoming: label,
            });
        }
        self.paper_sizes.insert(dimension, label);
        Ok(())
    }

    /// Resolve a dimension to its configured label, or the unknown sentinel.
    pub fn paper_size(&self, dimension: &Dimension) -> &str {
        self.paper_sizes
            .get(dimension)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_PAPER_SIZE)
    }

    /// Look up a filter by its display label.
    pub fn filter(&self, label: &str) -> Option<&Filter> {
        self.filters.iter().find(|f| f.label == label)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct SettingsFile {
    #[serde(default)]
    dimensions: Vec<PaperSizeEntry>,
    #[serde(default)]
    configuration: ConfigurationSection,
    /// `null` is accepted as "no filters", as older settings files used it.
    #[serde(default)]
    filters: Option<Vec<Filter>>,
    #[serde(default = "default_language")]
    language: String,
    #[serde(default)]
    dictionaries: Vec<DictionaryEntry>,
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self {
            dimensions: Vec::new(),
            configuration: ConfigurationSection::default(),
            filters: None,
            language: default_language(),
            dictionaries: Vec::new(),
        }
    }
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

#[derive(Debug, Deserialize)]
struct PaperSizeEntry {
    name: String,
    size: SizeSpec,
}

#[derive(Debug, Deserialize)]
struct SizeSpec {
    width: u32,
    height: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ConfigurationSection {
    #[serde(default = "default_true")]
    group_pages: bool,
}

impl Default for ConfigurationSection {
    fn default() -> Self {
        Self { group_pages: true }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct DictionaryEntry {
    name: String,
    #[serde(default)]
    words: Vec<WordEntry>,
}

#[derive(Debug, Deserialize)]
struct WordEntry {
    id: String,
    value: String,
}
