pub mod document;
pub mod loader;
pub mod validation;

pub use document::{RawHexCell, RawMapDocument, RawMetadata};
pub use loader::{load_from_file, load_from_json};
pub use validation::{validate, ValidationIssue, ValidationReport};
