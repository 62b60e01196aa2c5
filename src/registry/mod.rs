//! Dialect Registry
//!
//! Discovers dialect folders under the grammar root and reads their
//! structure descriptors. A dialect without a usable descriptor is skipped
//! with a warning; discovery itself only fails on I/O errors at the root.

pub mod descriptor;
pub mod error;

pub use descriptor::DialectStructure;
pub use error::RegistryError;

use std::path::Path;

use log::warn;

use crate::common::paths::{ProjectLayout, STRUCTURE_FILE};
use error::Result;

/// Scan the grammar root for dialect folders and read their descriptors.
///
/// Returns `(dialect name, structure)` pairs sorted by dialect name so that
/// recipe registration order is deterministic across runs. Hidden folders
/// (names starting with `.`) are ignored.
pub fn discover(layout: &ProjectLayout) -> Result<Vec<(String, DialectStructure)>> {
    let sql_dir = layout.sql_grammar_dir();
    let mut found = Vec::new();
    if !sql_dir.is_dir() {
        return Ok(found);
    }
    for entry in std::fs::read_dir(&sql_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(dialect) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if dialect.starts_with('.') {
            continue;
        }
        match read_descriptor(&path, dialect) {
            Ok(structure) => found.push((dialect.to_string(), structure)),
            Err(err) => warn!("Skipping dialect folder '{}': {}", dialect, err),
        }
    }
    found.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(found)
}

/// Read and validate one dialect's `structure.json`.
fn read_descriptor(dialect_dir: &Path, dialect: &str) -> Result<DialectStructure> {
    let descriptor_path = dialect_dir.join(STRUCTURE_FILE);
    if !descriptor_path.is_file() {
        return Err(RegistryError::MissingDescriptor(
            STRUCTURE_FILE.to_string(),
            dialect_dir.display().to_string(),
        ));
    }
    let contents = std::fs::read_to_string(&descriptor_path)?;
    let structure: DialectStructure =
        serde_json::from_str(&contents).map_err(|err| RegistryError::InvalidDescriptor {
            dialect: dialect.to_string(),
            reason: err.to_string(),
        })?;
    structure
        .validate()
        .map_err(|reason| RegistryError::InvalidDescriptor {
            dialect: dialect.to_string(),
            reason,
        })?;
    Ok(structure)
}
