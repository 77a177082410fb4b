//! End-to-end conversion: document in, header text out.

use std::path::Path;

use crate::compile::{compile, CompiledMap};
use crate::core::config::ConverterConfig;
use crate::core::error::{MapError, Result};
use crate::emit::emit;
use crate::map::document::RawMapDocument;
use crate::map::loader::load_from_file;
use crate::map::validation::{validate, ValidationReport};

/// Result of converting one document
#[derive(Debug, Clone)]
pub struct Conversion {
    pub map: CompiledMap,
    pub header: String,
    /// Issues found in lenient mode. Always empty in strict mode.
    pub report: ValidationReport,
}

/// Convert an in-memory document
///
/// In strict mode any validation issue aborts the conversion. Otherwise the
/// issues are logged and returned alongside the header.
pub fn convert(document: &RawMapDocument, config: &ConverterConfig) -> Result<Conversion> {
    let report = validate(document);
    if !report.is_empty() {
        if config.strict {
            return Err(MapError::Validation(report));
        }
        for issue in report.iter() {
            tracing::warn!("{}", issue);
        }
    }

    let map = compile(document);
    let header = emit(&map);
    Ok(Conversion { map, header, report })
}

/// Read `input`, convert it and write the header to `output`
///
/// Nothing is written unless the conversion succeeds.
pub fn convert_file(input: &Path, output: &Path, config: &ConverterConfig) -> Result<Conversion> {
    let document = load_from_file(input)?;
    let conversion = convert(&document, config)?;
    std::fs::write(output, conversion.header.as_bytes())?;

    tracing::debug!(
        output = %output.display(),
        bytes = conversion.header.len(),
        "Wrote map header"
    );
    Ok(conversion)
}
