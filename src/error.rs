use std::path::PathBuf;

/// Failure to load one of the input sources. Always fatal.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {source_name} source '{}': {cause}", .path.display())]
    Unavailable {
        source_name: &'static str,
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },

    #[error("failed to parse {source_name} source '{}': {cause}", .path.display())]
    Malformed {
        source_name: &'static str,
        path: PathBuf,
        #[source]
        cause: serde_json::Error,
    },

    #[error("{source_name} source '{}': record[{index}] has no aliases", .path.display())]
    InvalidRecord {
        source_name: &'static str,
        path: PathBuf,
        index: usize,
    },
}

/// Failure to produce the output artifact. Always fatal.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write output '{}': {cause}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

pub type Result<T> = std::result::Result<T, Error>;
