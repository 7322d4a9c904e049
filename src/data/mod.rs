//! Input records: the canonical emoji list and the secondary category dataset.

pub mod category;
pub mod emoji;
pub(crate) mod source;

pub use category::{
    load_category_dataset, wrap_colons, CategoryDataset, CategoryRecord, DEFAULT_CATEGORY_SOURCE_PATH,
};
pub use emoji::{load_emoji_records, EmojiRecord, DEFAULT_EMOJI_SOURCE_PATH};
pub(crate) use source::read_json_source;
