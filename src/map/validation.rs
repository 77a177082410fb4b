//! Input validation for map documents
//!
//! Conversion itself never rejects a parseable map. These checks surface the
//! cases where the converted artifact would quietly differ from what the map
//! author meant, so callers can log them or refuse the map.

use ahash::{AHashMap, AHashSet};
use std::fmt;
use thiserror::Error;

use crate::map::document::RawMapDocument;

/// Validation issue types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("duplicate hexagon id '{id}'")]
    DuplicateId { id: String },

    #[error("hexagons '{first}' and '{second}' both occupy ({q}, {r}); '{second}' wins")]
    CoordinateCollision {
        q: i64,
        r: i64,
        first: String,
        second: String,
    },

    #[error("hexagon '{id}' at ({q}, {r}) does not fit in signed 8-bit coordinates")]
    CoordinateOutOfRange { id: String, q: i64, r: i64 },

    #[error("hexagon '{id}' connects to unknown id '{target}'")]
    DanglingConnection { id: String, target: String },

    #[error("hexagon '{id}' connects to '{target}', which is not adjacent; connection ignored")]
    NonAdjacentConnection { id: String, target: String },

    #[error("metadata declares {declared} {field} but the map has {actual}")]
    MetadataCountMismatch {
        field: &'static str,
        declared: i64,
        actual: i64,
    },
}

/// All issues found in a document, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

/// Check a document for ids, coordinates, connections and counts that the
/// converter would not reproduce faithfully.
pub fn validate(document: &RawMapDocument) -> ValidationReport {
    let cells = &document.hexagons;
    let mut issues = Vec::new();

    let mut seen_ids = AHashSet::with_capacity(cells.len());
    let mut by_id = AHashMap::with_capacity(cells.len());
    let mut by_coord: AHashMap<_, &str> = AHashMap::with_capacity(cells.len());

    for cell in cells {
        if !seen_ids.insert(cell.id.as_str()) {
            issues.push(ValidationIssue::DuplicateId { id: cell.id.clone() });
        }
        by_id.insert(cell.id.as_str(), cell);

        if let Some(first) = by_coord.insert(cell.coord(), cell.id.as_str()) {
            issues.push(ValidationIssue::CoordinateCollision {
                q: cell.q,
                r: cell.r,
                first: first.to_string(),
                second: cell.id.clone(),
            });
        }

        if i8::try_from(cell.q).is_err() || i8::try_from(cell.r).is_err() {
            issues.push(ValidationIssue::CoordinateOutOfRange {
                id: cell.id.clone(),
                q: cell.q,
                r: cell.r,
            });
        }
    }

    for cell in cells {
        for target in &cell.connections {
            match by_id.get(target.as_str()) {
                None => issues.push(ValidationIssue::DanglingConnection {
                    id: cell.id.clone(),
                    target: target.clone(),
                }),
                Some(other) if cell.coord().direction_to(&other.coord()).is_none() => {
                    issues.push(ValidationIssue::NonAdjacentConnection {
                        id: cell.id.clone(),
                        target: target.clone(),
                    })
                }
                Some(_) => {}
            }
        }
    }

    let corridors = cells.iter().filter(|c| c.is_corridor()).count() as i64;
    let counts = [
        ("hexagons", document.metadata.total_hexagons, cells.len() as i64),
        ("rooms", document.metadata.rooms, cells.len() as i64 - corridors),
        ("corridors", document.metadata.corridors, corridors),
    ];
    for (field, declared, actual) in counts {
        if let Some(declared) = declared.filter(|d| *d != actual) {
            issues.push(ValidationIssue::MetadataCountMismatch {
                field,
                declared,
                actual,
            });
        }
    }

    ValidationReport { issues }
}
