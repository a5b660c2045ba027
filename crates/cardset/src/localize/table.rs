use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::Path;

use crate::load::LoadError;
use crate::localize::{Localizer, ParseError, parse_translations};

/// Translations keyed by lookup key, loaded from a `.strings` file.
///
/// # Example
///
/// ```
/// use cardset::localize::{Localizer, TranslationTable};
///
/// let table = TranslationTable::parse(r#"
///     // Data colors card
///     DataColors_Fill = "Fill color";
/// "#).unwrap();
///
/// assert_eq!(table.localize("DataColors_Fill"), Some("Fill color".to_string()));
/// assert_eq!(table.localize("Missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationTable {
    entries: BTreeMap<String, String>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses translation file content.
    pub fn parse(content: &str) -> Result<Self, ParseError> {
        let entries = parse_translations(content)?.into_iter().collect();
        Ok(Self { entries })
    }

    /// Reads and parses a translation file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|error| {
            let (line, column) = error.position();
            LoadError::Parse {
                path: path.to_path_buf(),
                line,
                column,
                message: error.to_string(),
            }
        })
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Localizer for TranslationTable {
    fn localize(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}
