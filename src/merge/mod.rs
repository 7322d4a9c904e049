//! The merge core: codepoint derivation, category resolution and index
//! building. Pure over its inputs; findings are returned, not printed.

pub mod builder;
pub mod category;
pub mod codepoint;
pub mod diagnostics;

pub use builder::{merge_emojis, MergeOutput};
pub use category::{find_category_record, resolve_category, CategoryRules, DEFAULT_CATEGORY};
pub use codepoint::{derive_codepoint, VARIATION_SELECTORS};
pub use diagnostics::{MergeDiagnostic, MergeReport, RecordRef};
