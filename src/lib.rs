//! Merge canonical emoji metadata with a secondary category dataset into the
//! alias/codepoint/category lookup tables consumed by the web client.

pub mod cli;
pub mod data;
pub mod error;
pub mod merge;
pub mod output;

pub use error::{Error, OutputError, SourceError};
pub use merge::{merge_emojis, CategoryRules, MergeOutput};
pub use output::OutputDocument;
