#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use oed_model::EntityType;

use crate::columns::parse_columns_csv;
use crate::error::StandardsError;
use crate::hash::sha256_hex;
use crate::manifest::{Manifest, ManifestFile, Pins};
use crate::methods::MethodRegistry;
use crate::paths::standards_root;
use crate::store::SchemaStore;

#[derive(Debug, Clone, serde::Serialize)]
pub struct VerifySummary {
    pub standards_dir: PathBuf,
    pub manifest_pins: Pins,
    pub file_count: usize,
    pub column_counts: BTreeMap<EntityType, usize>,
}

/// Verify the standards directory against its manifest and load the column
/// schema with the built-in method registry.
pub fn verify_and_load(standards_dir: &Path) -> Result<(SchemaStore, VerifySummary), StandardsError> {
    verify_and_load_with(standards_dir, Arc::new(MethodRegistry::builtin()))
}

pub fn verify_and_load_with(
    standards_dir: &Path,
    methods: Arc<MethodRegistry>,
) -> Result<(SchemaStore, VerifySummary), StandardsError> {
    let manifest = Manifest::load(&standards_dir.join("manifest.toml"))?;
    manifest.validate()?;

    let mut files: Vec<&ManifestFile> = manifest.files.iter().collect();
    files.sort_by(|a, b| a.path.cmp(&b.path));
    for file in &files {
        verify_file(standards_dir, file)?;
    }

    let columns = parse_columns_csv(&manifest.file("columns")?.resolve(standards_dir))?;
    debug!(count = columns.len(), "parsed column definitions");

    let store = SchemaStore::new(columns, methods)?.with_version(manifest.pins.oed.clone());

    let column_counts = store
        .entity_types()
        .map(|entity| (entity, store.columns(entity).count()))
        .collect();

    let summary = VerifySummary {
        standards_dir: standards_dir.to_path_buf(),
        file_count: files.len(),
        manifest_pins: manifest.pins.clone(),
        column_counts,
    };
    info!(
        oed_version = %summary.manifest_pins.oed,
        columns = store.len(),
        "loaded OED column schema"
    );

    Ok((store, summary))
}

/// Load the schema store from the default standards directory.
pub fn load_default_schema_store() -> Result<SchemaStore, StandardsError> {
    verify_and_load(&standards_root()).map(|(store, _)| store)
}

fn verify_file(standards_dir: &Path, file: &ManifestFile) -> Result<(), StandardsError> {
    let full_path = file.resolve(standards_dir);
    let bytes = std::fs::read(&full_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StandardsError::MissingFile {
                path: full_path.clone(),
            }
        } else {
            StandardsError::io(full_path.clone(), e)
        }
    })?;

    let actual = sha256_hex(&bytes);
    let expected = file.sha256.to_ascii_lowercase();
    if actual != expected {
        return Err(StandardsError::Sha256Mismatch {
            path: full_path,
            expected,
            actual,
        });
    }
    Ok(())
}

