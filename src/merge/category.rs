//! Category resolution: a static override table keyed by primary alias,
//! then a lookup in the secondary dataset.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::{read_json_source, wrap_colons, CategoryDataset, CategoryRecord, EmojiRecord};
use crate::error::SourceError;

pub const DEFAULT_CATEGORY: &str = "custom";

/// Static category tables. Aliases in `ignored_aliases` are never looked up
/// in the secondary dataset because it treats them as aliases of a
/// differently-drawn emoji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryRules {
    pub default_category: String,
    pub overrides: BTreeMap<String, String>,
    pub ignored_aliases: BTreeSet<String>,
}

impl Default for CategoryRules {
    fn default() -> Self {
        let overrides = [("e-mail", "objects"), ("city_sunset", "travel")]
            .into_iter()
            .map(|(alias, category)| (alias.to_string(), category.to_string()))
            .collect();
        let ignored_aliases = ["e-mail", "email", "city_sunset", "city-sunset"]
            .into_iter()
            .map(str::to_string)
            .collect();
        Self {
            default_category: DEFAULT_CATEGORY.to_string(),
            overrides,
            ignored_aliases,
        }
    }
}

impl CategoryRules {
    /// Load rules from a JSON file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        read_json_source("rules", path.as_ref())
    }

    /// Category from the static tables alone: the override for the primary
    /// alias, else the default.
    pub fn static_category(&self, record: &EmojiRecord) -> &str {
        record
            .primary_alias()
            .and_then(|alias| self.overrides.get(alias))
            .unwrap_or(&self.default_category)
    }

    pub fn is_ignored(&self, alias: &str) -> bool {
        self.ignored_aliases.contains(alias)
    }
}

/// First secondary record answering to one of the record's aliases, trying
/// aliases in order and records in document order. Ignored aliases are
/// skipped.
pub fn find_category_record<'a>(
    record: &EmojiRecord,
    dataset: &'a CategoryDataset,
    rules: &CategoryRules,
) -> Option<&'a CategoryRecord> {
    record
        .aliases
        .iter()
        .filter(|alias| !rules.is_ignored(alias))
        .find_map(|alias| {
            let wrapped = wrap_colons(alias);
            dataset.records().find(|candidate| candidate.has_name(&wrapped))
        })
}

/// Resolve the category for `record`. A matched secondary record with a
/// non-empty category wins over the static result.
pub fn resolve_category(
    record: &EmojiRecord,
    dataset: &CategoryDataset,
    rules: &CategoryRules,
) -> String {
    match find_category_record(record, dataset, rules) {
        Some(found) if !found.category.is_empty() => found.category.clone(),
        _ => rules.static_category(record).to_string(),
    }
}
