//! Output document and its renderings.

mod document;
mod module;

use std::fs;
use std::io::Write as _;
use std::path::Path;

pub use document::{OutputDocument, OutputEmoji};
pub use module::{render_module, GENERATED_NOTICE};

use crate::error::OutputError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// ES module with `Map` indexes
    #[default]
    Js,
    /// Plain JSON document
    Json,
}

pub fn render(
    document: &OutputDocument,
    format: OutputFormat,
    banner: Option<&str>,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Js => render_module(document, banner),
        OutputFormat::Json => document.to_json_pretty().map(|mut json| {
            json.push('\n');
            json
        }),
    }
}

/// Write the whole artifact in one go, to `path` or stdout.
pub fn write_output(path: Option<&Path>, contents: &str) -> Result<(), OutputError> {
    match path {
        Some(path) => fs::write(path, contents).map_err(|cause| OutputError::Write {
            path: path.to_path_buf(),
            cause,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|cause| OutputError::Write {
                    path: "<stdout>".into(),
                    cause,
                })
        }
    }
}
