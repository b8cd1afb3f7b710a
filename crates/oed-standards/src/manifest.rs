#![deny(unsafe_code)]

//! `standards/manifest.toml`: pinned OED version plus checksummed data files.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StandardsError;

/// Roles every manifest must provide.
const REQUIRED_ROLES: &[&str] = &["columns"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub manifest: ManifestHeader,
    #[serde(default)]
    pub notes: Option<ManifestNotes>,
    pub pins: Pins,
    pub files: Vec<ManifestFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub schema: String,
    pub schema_version: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestNotes {
    pub summary: Option<String>,
}

/// Pinned OED schema version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pins {
    pub oed: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Csv,
    Json,
    Toml,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestFile {
    /// Relative to the standards directory, `/` separated.
    pub path: String,
    pub sha256: String,
    pub kind: FileKind,
    pub role: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Manifest {
    pub const SCHEMA: &'static str = "oed-validator.standards-manifest";
    pub const SCHEMA_VERSION: u32 = 1;

    pub fn load(path: &Path) -> Result<Self, StandardsError> {
        let contents = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
        Self::parse(&contents).map_err(|source| StandardsError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Check the schema id and version, and that roles are unique, required
    /// roles are present, and every file entry is well formed.
    pub fn validate(&self) -> Result<(), StandardsError> {
        let invalid = |message: String| StandardsError::InvalidManifest { message };
        if self.manifest.schema != Self::SCHEMA {
            return Err(invalid(format!("unsupported schema: {}", self.manifest.schema)));
        }
        if self.manifest.schema_version != Self::SCHEMA_VERSION {
            return Err(invalid(format!(
                "unsupported schema_version: {}",
                self.manifest.schema_version
            )));
        }

        let mut roles = BTreeSet::new();
        for file in &self.files {
            if !roles.insert(file.role.as_str()) {
                return Err(StandardsError::DuplicateRole {
                    role: file.role.clone(),
                });
            }
            file.validate()?;
        }
        match REQUIRED_ROLES.iter().find(|role| !roles.contains(*role)) {
            Some(role) => Err(StandardsError::MissingRole {
                role: (*role).to_string(),
            }),
            None => Ok(()),
        }
    }

    pub fn file(&self, role: &str) -> Result<&ManifestFile, StandardsError> {
        self.files
            .iter()
            .find(|f| f.role == role)
            .ok_or_else(|| StandardsError::MissingRole {
                role: role.to_string(),
            })
    }
}

impl ManifestFile {
    fn validate(&self) -> Result<(), StandardsError> {
        if self.sha256.len() != 64 || !self.sha256.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(StandardsError::InvalidSha256 {
                path: PathBuf::from(&self.path),
                message: "expected 64 hex characters".to_string(),
            });
        }
        let contained = Path::new(&self.path)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !contained {
            return Err(StandardsError::InvalidManifest {
                message: format!("path escapes the standards directory: {}", self.path),
            });
        }
        Ok(())
    }

    /// Location under `standards_dir`.
    pub fn resolve(&self, standards_dir: &Path) -> PathBuf {
        standards_dir.join(&self.path)
    }
}
