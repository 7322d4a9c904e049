//! Secondary categorization dataset (the EmojiOne-style `emoji-one.json`).
//! Names in this dataset are colon-wrapped (`:smile:`).

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::data::source::{null_as_default, parse_json_source, read_source_bytes};
use crate::error::SourceError;

pub const DEFAULT_CATEGORY_SOURCE_PATH: &str = "emoji-one.json";
const SOURCE_NAME: &str = "categories";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub unicode: String,
    /// Canonical alias, colon-wrapped.
    #[serde(default, deserialize_with = "null_as_default")]
    pub shortname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// Alternate aliases, colon-wrapped.
    #[serde(default, deserialize_with = "null_as_default")]
    pub aliases: Vec<String>,
}

impl CategoryRecord {
    /// True when the shortname or one of the alternate aliases equals
    /// `wrapped`, a name already colon-wrapped (see [wrap_colons]).
    pub fn has_name(&self, wrapped: &str) -> bool {
        self.shortname == wrapped || self.aliases.iter().any(|a| a == wrapped)
    }
}

pub fn wrap_colons(alias: &str) -> String {
    format!(":{alias}:")
}

/// Category records keyed by normalized identifier, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDataset {
    entries: IndexMap<String, CategoryRecord>,
}

impl CategoryDataset {
    pub fn new(entries: IndexMap<String, CategoryRecord>) -> Self {
        Self { entries }
    }

    /// Build from a bare record list, keying each record by its shortname
    /// without colons. Later records with the same key are dropped.
    pub fn from_records(records: impl IntoIterator<Item = CategoryRecord>) -> Self {
        let mut entries = IndexMap::new();
        for record in records {
            let key = record.shortname.trim_matches(':').to_string();
            entries.entry(key).or_insert(record);
        }
        Self { entries }
    }

    pub fn records(&self) -> impl Iterator<Item = &CategoryRecord> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load the secondary source. Accepts either an object keyed by identifier
/// or a plain array of records; the document's first token picks the shape
/// so parse errors keep their position and cause.
pub fn load_category_dataset(path: impl AsRef<Path>) -> Result<CategoryDataset, SourceError> {
    let path = path.as_ref();
    let bytes = read_source_bytes(SOURCE_NAME, path)?;
    parse_category_dataset(path, &bytes)
}

fn parse_category_dataset(path: &Path, bytes: &[u8]) -> Result<CategoryDataset, SourceError> {
    let first_token = bytes.iter().find(|b| !b.is_ascii_whitespace());
    if first_token == Some(&b'[') {
        let records: Vec<CategoryRecord> = parse_json_source(SOURCE_NAME, path, bytes)?;
        return Ok(CategoryDataset::from_records(records));
    }
    let entries: IndexMap<String, CategoryRecord> = parse_json_source(SOURCE_NAME, path, bytes)?;
    Ok(CategoryDataset::new(entries))
}
