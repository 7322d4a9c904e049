//! Canonical emoji metadata (the gemoji-style `emoji.json` list).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::source::{null_as_default, read_json_source};
use crate::error::SourceError;

pub const DEFAULT_EMOJI_SOURCE_PATH: &str = "emoji.json";
const SOURCE_NAME: &str = "emoji";

/// One entry of the primary source. `null` fields read as their defaults.
/// `aliases` is never empty once loaded through [load_emoji_records]; the
/// first alias is the primary name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiRecord {
    /// Raw glyph. Empty for custom emoji with no unicode equivalent.
    #[serde(default, deserialize_with = "null_as_default")]
    pub emoji: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub aliases: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl EmojiRecord {
    pub fn primary_alias(&self) -> Option<&str> {
        self.aliases.first().map(String::as_str)
    }
}

/// Load the primary source, rejecting records that carry no alias.
pub fn load_emoji_records(path: impl AsRef<Path>) -> Result<Vec<EmojiRecord>, SourceError> {
    let path = path.as_ref();
    let records: Vec<EmojiRecord> = read_json_source(SOURCE_NAME, path)?;
    if let Some(index) = records.iter().position(|record| record.aliases.is_empty()) {
        return Err(SourceError::InvalidRecord {
            source_name: SOURCE_NAME,
            path: path.to_path_buf(),
            index,
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn missing_optional_fields_default() {
        let records: Vec<EmojiRecord> =
            serde_json::from_str(r#"[{"aliases":["trollface"]}]"#).expect("parse");
        assert_eq!(records[0].emoji, "");
        assert!(records[0].tags.is_empty());
        assert_eq!(records[0].primary_alias(), Some("trollface"));
    }

    #[test]
    fn null_fields_read_as_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("emoji.json");
        fs::write(
            &path,
            r#"[{"emoji":null,"description":null,"aliases":["trollface"],"tags":null}]"#,
        )
        .expect("fixture should be written");

        let records = load_emoji_records(&path).expect("null fields should load");
        assert_eq!(records[0].emoji, "");
        assert_eq!(records[0].description, "");
        assert!(records[0].tags.is_empty());
        assert_eq!(records[0].primary_alias(), Some("trollface"));
    }

    #[test]
    fn null_or_missing_aliases_is_an_invalid_record() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("emoji.json");
        fs::write(&path, r#"[{"aliases":["ok"]},{"aliases":null},{"emoji":"😀"}]"#)
            .expect("fixture should be written");

        let err = load_emoji_records(&path).expect_err("null aliases should fail");
        assert!(matches!(err, SourceError::InvalidRecord { index: 1, .. }));
    }

    #[test]
    fn load_rejects_record_without_aliases() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("emoji.json");
        fs::write(
            &path,
            r#"[{"emoji":"😀","aliases":["grinning"]},{"emoji":"😃","aliases":[]}]"#,
        )
        .expect("fixture should be written");

        let err = load_emoji_records(&path).expect_err("empty aliases should fail");
        assert!(matches!(err, SourceError::InvalidRecord { index: 1, .. }));
    }

    #[test]
    fn load_distinguishes_missing_from_malformed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("absent.json");
        assert!(matches!(
            load_emoji_records(&missing),
            Err(SourceError::Unavailable { source_name: "emoji", .. })
        ));

        let malformed = dir.path().join("emoji.json");
        fs::write(&malformed, r#"{"aliases":["not-a-list"]}"#).expect("fixture should be written");
        assert!(matches!(
            load_emoji_records(&malformed),
            Err(SourceError::Malformed { source_name: "emoji", .. })
        ));
    }
}
