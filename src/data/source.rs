use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::error::SourceError;

/// Read `path` and parse it as JSON, tagging failures with `source_name` so
/// the caller can tell which input could not be loaded and why.
pub(crate) fn read_json_source<T: DeserializeOwned>(
    source_name: &'static str,
    path: &Path,
) -> Result<T, SourceError> {
    let bytes = read_source_bytes(source_name, path)?;
    parse_json_source(source_name, path, &bytes)
}

/// Only I/O failures are `Unavailable`; encoding problems surface when the
/// bytes are parsed.
pub(crate) fn read_source_bytes(
    source_name: &'static str,
    path: &Path,
) -> Result<Vec<u8>, SourceError> {
    fs::read(path).map_err(|cause| SourceError::Unavailable {
        source_name,
        path: path.to_path_buf(),
        cause,
    })
}

pub(crate) fn parse_json_source<T: DeserializeOwned>(
    source_name: &'static str,
    path: &Path,
    bytes: &[u8],
) -> Result<T, SourceError> {
    serde_json::from_slice(bytes).map_err(|cause| SourceError::Malformed {
        source_name,
        path: path.to_path_buf(),
        cause,
    })
}

/// Field deserializer treating an explicit `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
