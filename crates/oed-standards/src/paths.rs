//! Locating the standards directory.

use std::path::{Path, PathBuf};

/// Environment variable naming the standards directory.
pub const STANDARDS_ENV_VAR: &str = "OED_STANDARDS_DIR";

/// Standards directory to load.
///
/// An explicit directory wins, then a non-blank `OED_STANDARDS_DIR`, then the
/// `standards/` directory shipped at the workspace root.
pub fn resolve_standards_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    match std::env::var_os(STANDARDS_ENV_VAR) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => bundled_standards_dir(),
    }
}

/// Standards directory with no command-line override.
pub fn standards_root() -> PathBuf {
    resolve_standards_dir(None)
}

fn bundled_standards_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../standards")
}
