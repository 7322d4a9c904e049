//! Render an [OutputDocument] as the ES module the web client imports.

use std::fmt::Write as _;

use crate::error::OutputError;
use crate::output::OutputDocument;

pub const GENERATED_NOTICE: &str =
    "// This file is automatically generated. Make changes to it at your own risk.";

/// Render the module text. `banner` (e.g. a license header) is emitted
/// verbatim ahead of the generated notice.
pub fn render_module(document: &OutputDocument, banner: Option<&str>) -> Result<String, OutputError> {
    let emojis = serde_json::to_string(&document.emojis)?;
    let by_alias = serde_json::to_string(&document.alias_index)?;
    let by_unicode = serde_json::to_string(&document.codepoint_index)?;
    let category_names = serde_json::to_string(&document.category_names)?;
    let by_category = serde_json::to_string(&document.category_index)?;

    let mut out = String::new();
    if let Some(banner) = banner.map(str::trim_end).filter(|b| !b.is_empty()) {
        let _ = writeln!(out, "{banner}");
        out.push('\n');
    }
    let _ = writeln!(out, "{GENERATED_NOTICE}");
    out.push('\n');
    out.push_str("/* eslint-disable */\n\n");
    let _ = writeln!(out, "export const Emojis = {emojis};\n");
    let _ = writeln!(out, "export const EmojiIndicesByAlias = new Map({by_alias});\n");
    let _ = writeln!(out, "export const EmojiIndicesByUnicode = new Map({by_unicode});\n");
    let _ = writeln!(out, "export const CategoryNames = {category_names};\n");
    let _ = writeln!(out, "export const EmojiIndicesByCategory = new Map({by_category});\n");
    out.push_str("/* eslint-enable */\n");
    Ok(out)
}
