use super::path::is_path_like;
use crate::error::PkgError;
use crate::fs::FileSystem;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Expands a name-or-path into the ordered candidate directory list.
///
/// A path-like input is trusted as-is and never expanded against the search
/// paths; a bare name is joined onto each search path in order.
pub fn resolve_candidates(name_or_path: &str, search_paths: &[PathBuf]) -> Vec<PathBuf> {
    if is_path_like(name_or_path) {
        vec![PathBuf::from(name_or_path)]
    } else {
        search_paths
            .iter()
            .map(|base| base.join(name_or_path))
            .collect()
    }
}

/// Scans `candidates` left to right and returns the first that exists on
/// disk, resolved to an absolute path. Probing stops at the first hit.
pub fn pick_first_existing(
    name: &str,
    candidates: &[PathBuf],
    fs: &dyn FileSystem,
) -> Result<PathBuf, PkgError> {
    for candidate in candidates {
        let resolved = absolutize(candidate);
        if fs.exists(&resolved) {
            debug!(path = %resolved.display(), "found package candidate");
            return Ok(resolved);
        }
    }

    Err(PkgError::PackageNotFound {
        name: name.to_string(),
        candidates: candidates.to_vec(),
    })
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
