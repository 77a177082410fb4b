//! Load map documents from JSON text or files

use std::io::ErrorKind;
use std::path::Path;

use crate::core::error::{MapError, Result};
use crate::map::document::RawMapDocument;

/// Parse a map document from a JSON string
pub fn load_from_json(json: &str) -> serde_json::Result<RawMapDocument> {
    serde_json::from_str(json)
}

/// Load a map document from a JSON file on disk
///
/// A missing file is reported as [`MapError::InputNotFound`], a parse failure
/// as [`MapError::MalformedInput`]; any other I/O failure passes through.
pub fn load_from_file(path: &Path) -> Result<RawMapDocument> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => MapError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => MapError::Io(e),
    })?;

    let document = load_from_json(&content).map_err(|source| MapError::MalformedInput {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        hexagons = document.hexagons.len(),
        "Loaded map document"
    );
    Ok(document)
}
