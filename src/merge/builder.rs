//! Single pass over the primary records building the output list and its
//! indexes. Output position `i` is always input record `i`; every index
//! refers to records by that position.

use std::collections::HashMap;

use tracing::debug;

use crate::data::{CategoryDataset, EmojiRecord};
use crate::merge::category::{resolve_category, CategoryRules};
use crate::merge::codepoint::derive_codepoint;
use crate::merge::diagnostics::{MergeDiagnostic, MergeReport, RecordRef};
use crate::output::{OutputDocument, OutputEmoji};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutput {
    pub document: OutputDocument,
    pub report: MergeReport,
}

/// Merge the primary records with the category dataset. Duplicate aliases
/// and codepoints are reported and resolved last-write-wins.
pub fn merge_emojis(
    records: &[EmojiRecord],
    dataset: &CategoryDataset,
    rules: &CategoryRules,
) -> MergeOutput {
    debug!(
        records = records.len(),
        category_records = dataset.len(),
        "merging emoji records"
    );

    let mut builder = IndexBuilder::new(records);
    for (index, record) in records.iter().enumerate() {
        let codepoint = derive_codepoint(&record.emoji);
        if !codepoint.is_empty() {
            builder.register_codepoint(index, &codepoint);
        }
        for alias in &record.aliases {
            builder.register_alias(index, alias);
        }
        builder.emojis.push(OutputEmoji {
            aliases: record.aliases.clone(),
            filename: codepoint,
        });

        let category = resolve_category(record, dataset, rules);
        builder.assign_category(index, category);
    }

    builder.finish()
}

struct IndexBuilder<'a> {
    records: &'a [EmojiRecord],
    emojis: Vec<OutputEmoji>,
    alias_owners: HashMap<String, usize>,
    codepoint_owners: HashMap<String, usize>,
    codepoint_order: Vec<String>,
    category_names: Vec<String>,
    category_members: HashMap<String, Vec<usize>>,
    report: MergeReport,
}

impl<'a> IndexBuilder<'a> {
    fn new(records: &'a [EmojiRecord]) -> Self {
        Self {
            records,
            emojis: Vec::with_capacity(records.len()),
            alias_owners: HashMap::new(),
            codepoint_owners: HashMap::new(),
            codepoint_order: Vec::new(),
            category_names: Vec::new(),
            category_members: HashMap::new(),
            report: MergeReport::default(),
        }
    }

    fn record_ref(&self, index: usize) -> RecordRef {
        RecordRef {
            index,
            aliases: self.records[index].aliases.clone(),
        }
    }

    fn register_codepoint(&mut self, index: usize, codepoint: &str) {
        match self.codepoint_owners.insert(codepoint.to_string(), index) {
            None => self.codepoint_order.push(codepoint.to_string()),
            Some(previous) if previous != index => {
                let diagnostic = MergeDiagnostic::DuplicateCodepoint {
                    codepoint: codepoint.to_string(),
                    previous: self.record_ref(previous),
                    current: self.record_ref(index),
                };
                self.report.push(diagnostic);
            }
            Some(_) => {}
        }
    }

    fn register_alias(&mut self, index: usize, alias: &str) {
        match self.alias_owners.insert(alias.to_string(), index) {
            Some(previous) if previous != index => {
                let diagnostic = MergeDiagnostic::DuplicateAlias {
                    alias: alias.to_string(),
                    previous: self.record_ref(previous),
                    current: self.record_ref(index),
                };
                self.report.push(diagnostic);
            }
            _ => {}
        }
    }

    fn assign_category(&mut self, index: usize, category: String) {
        if let Some(members) = self.category_members.get_mut(&category) {
            members.push(index);
            return;
        }
        self.category_names.push(category.clone());
        self.category_members.insert(category, vec![index]);
    }

    fn finish(mut self) -> MergeOutput {
        let mut alias_index: Vec<(String, usize)> = self.alias_owners.into_iter().collect();
        alias_index.sort_by(|a, b| a.0.cmp(&b.0));

        let codepoint_index = self
            .codepoint_order
            .into_iter()
            .filter_map(|codepoint| {
                let owner = *self.codepoint_owners.get(&codepoint)?;
                Some((codepoint, owner))
            })
            .collect();

        let category_index = self
            .category_names
            .iter()
            .map(|name| {
                let members = self.category_members.remove(name).unwrap_or_default();
                (name.clone(), members)
            })
            .collect();

        MergeOutput {
            document: OutputDocument {
                emojis: self.emojis,
                alias_index,
                codepoint_index,
                category_names: self.category_names,
                category_index,
            },
            report: self.report,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::data::CategoryRecord;

    use super::*;

    fn emoji(glyph: &str, aliases: &[&str]) -> EmojiRecord {
        EmojiRecord {
            emoji: glyph.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            ..EmojiRecord::default()
        }
    }

    fn categories() -> CategoryDataset {
        CategoryDataset::from_records(vec![
            CategoryRecord {
                unicode: "1f600".to_string(),
                shortname: ":grinning:".to_string(),
                category: "people".to_string(),
                aliases: vec![],
            },
            CategoryRecord {
                unicode: "1f1eb-1f1f7".to_string(),
                shortname: ":flag_fr:".to_string(),
                category: "flags".to_string(),
                aliases: vec![":fr:".to_string()],
            },
        ])
    }

    fn merge(records: &[EmojiRecord]) -> MergeOutput {
        merge_emojis(records, &categories(), &CategoryRules::default())
    }

    #[test]
    fn grinning_record_is_indexed_by_alias_and_codepoint() {
        let out = merge(&[emoji("😀", &["grinning"])]);
        let doc = &out.document;
        assert_eq!(
            doc.emojis,
            vec![OutputEmoji {
                aliases: vec!["grinning".to_string()],
                filename: "1f600".to_string(),
            }]
        );
        assert_eq!(doc.alias_index, vec![("grinning".to_string(), 0)]);
        assert_eq!(doc.codepoint_index, vec![("1f600".to_string(), 0)]);
        assert_eq!(doc.category_names, vec!["people".to_string()]);
        assert!(out.report.is_clean());
    }

    #[test]
    fn custom_emoji_has_empty_filename_and_default_category() {
        let out = merge(&[emoji("", &["trollface"])]);
        assert_eq!(out.document.emojis[0].filename, "");
        assert!(out.document.codepoint_index.is_empty());
        assert_eq!(
            out.document.category_index,
            vec![("custom".to_string(), vec![0])]
        );
    }

    #[test]
    fn alias_index_is_sorted_while_codepoints_keep_first_seen_order() {
        let out = merge(&[
            emoji("🇫🇷", &["fr", "flag-fr"]),
            emoji("😀", &["grinning"]),
            emoji("", &["bowtie"]),
        ]);
        let aliases: Vec<&str> = out
            .document
            .alias_index
            .iter()
            .map(|(alias, _)| alias.as_str())
            .collect();
        assert_eq!(aliases, vec!["bowtie", "flag-fr", "fr", "grinning"]);
        assert_eq!(
            out.document.codepoint_index,
            vec![("1f1eb-1f1f7".to_string(), 0), ("1f600".to_string(), 1)]
        );
    }

    #[test]
    fn duplicate_alias_goes_to_last_record_and_names_both() {
        let out = merge(&[
            emoji("😀", &["grinning", "smile"]),
            emoji("😄", &["smile"]),
        ]);
        assert!(out
            .document
            .alias_index
            .contains(&("smile".to_string(), 1)));
        let diags: Vec<_> = out.report.duplicate_aliases().collect();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].key(), "smile");
        assert_eq!(diags[0].previous().index, 0);
        assert_eq!(diags[0].current().index, 1);
    }

    #[test]
    fn duplicate_codepoint_goes_to_last_record() {
        let out = merge(&[
            emoji("\u{2764}\u{fe0f}", &["heart"]),
            emoji("\u{2764}", &["red_heart"]),
        ]);
        assert_eq!(out.document.codepoint_index, vec![("2764".to_string(), 1)]);
        assert_eq!(out.document.emojis[0].filename, "2764");
        assert_eq!(out.document.emojis[1].filename, "2764");
        assert_eq!(out.report.duplicate_codepoints().count(), 1);
    }

    #[test]
    fn third_claimant_is_reported_against_the_current_owner() {
        let out = merge(&[
            emoji("", &["dup"]),
            emoji("", &["dup"]),
            emoji("", &["dup"]),
        ]);
        let previous: Vec<usize> = out
            .report
            .duplicate_aliases()
            .map(|d| d.previous().index)
            .collect();
        assert_eq!(previous, vec![0, 1]);
        assert_eq!(out.document.alias_index, vec![("dup".to_string(), 2)]);
    }

    #[test]
    fn repeated_alias_within_one_record_is_not_a_duplicate() {
        let out = merge(&[emoji("", &["same", "same"])]);
        assert!(out.report.is_clean());
        assert_eq!(out.document.alias_index, vec![("same".to_string(), 0)]);
    }

    #[test]
    fn categories_follow_first_seen_order_and_cover_every_position() {
        let out = merge(&[
            emoji("", &["bowtie"]),
            emoji("😀", &["grinning"]),
            emoji("", &["e-mail"]),
            emoji("", &["octocat"]),
            emoji("🇫🇷", &["fr"]),
        ]);
        assert_eq!(
            out.document.category_names,
            vec!["custom", "people", "objects", "flags"]
        );
        let mut positions: Vec<usize> = out
            .document
            .category_index
            .iter()
            .flat_map(|(_, members)| members.iter().copied())
            .collect();
        assert_eq!(positions, vec![0, 3, 1, 2, 4]);
        positions.sort_unstable();
        assert_eq!(positions, (0..5).collect::<Vec<_>>());
    }

    #[test]
    fn output_is_one_to_one_with_input() {
        let input = vec![
            emoji("😀", &["grinning"]),
            emoji("", &["bowtie"]),
            emoji("😀", &["grinning_again"]),
        ];
        let out = merge(&input);
        assert_eq!(out.document.emojis.len(), input.len());
        for (record, emitted) in input.iter().zip(&out.document.emojis) {
            assert_eq!(record.aliases, emitted.aliases);
        }
    }
}
