use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::OutputError;

/// One emoji as the client sees it. `filename` is the codepoint string, or
/// empty when the emoji has no unicode equivalent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputEmoji {
    pub aliases: Vec<String>,
    pub filename: String,
}

/// The merged result. Pair lists serialize as two-element arrays so a
/// consumer can feed them straight into a `Map` constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDocument {
    pub emojis: Vec<OutputEmoji>,
    /// Sorted by alias.
    #[serde(rename = "emojiIndicesByAlias")]
    pub alias_index: Vec<(String, usize)>,
    /// First-seen order.
    #[serde(rename = "emojiIndicesByUnicode")]
    pub codepoint_index: Vec<(String, usize)>,
    #[serde(rename = "categoryNames")]
    pub category_names: Vec<String>,
    #[serde(rename = "emojiIndicesByCategory")]
    pub category_index: Vec<(String, Vec<usize>)>,
}

impl OutputDocument {
    pub fn alias_lookup(&self) -> HashMap<&str, usize> {
        self.alias_index
            .iter()
            .map(|(alias, index)| (alias.as_str(), *index))
            .collect()
    }

    pub fn codepoint_lookup(&self) -> HashMap<&str, usize> {
        self.codepoint_index
            .iter()
            .map(|(codepoint, index)| (codepoint.as_str(), *index))
            .collect()
    }

    pub fn category_lookup(&self) -> HashMap<&str, &[usize]> {
        self.category_index
            .iter()
            .map(|(name, members)| (name.as_str(), members.as_slice()))
            .collect()
    }

    pub fn to_json_pretty(&self) -> Result<String, OutputError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
