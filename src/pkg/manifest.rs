use crate::error::PkgError;
use crate::fs::FileSystem;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

pub const MANIFEST_FILE: &str = "package.json";

/// The `webppl` sub-object of a package's `package.json`. Both resource
/// lists hold file names relative to the package directory.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebpplManifest {
    #[serde(default)]
    pub headers: Vec<String>,

    #[serde(default)]
    pub wppl: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PackageJson {
    #[serde(default)]
    webppl: Option<WebpplManifest>,
}

/// Loads `<dir>/package.json` and extracts its `webppl` section.
///
/// An absent `webppl` key is tolerated (empty manifest); a missing or
/// unparsable manifest file is a fatal load error, since a resolved package
/// directory without a readable manifest indicates a corrupt installation.
pub fn load_manifest(dir: &Path, fs: &dyn FileSystem) -> Result<WebpplManifest, PkgError> {
    let path = dir.join(MANIFEST_FILE);

    let content = fs
        .read_to_string(&path)
        .map_err(|source| PkgError::ManifestLoad {
            path: path.clone(),
            source,
        })?;

    let parsed: PackageJson = serde_json::from_str(&content)
        .context("invalid JSON in package manifest")
        .map_err(|source| PkgError::ManifestLoad {
            path: path.clone(),
            source,
        })?;

    Ok(parsed.webppl.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    #[test]
    fn test_full_manifest() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "/pkgs/foo/package.json",
            r#"{"webppl": {"headers": ["a.h", "b.h"], "wppl": ["lib.wppl"]}}"#,
        );

        let manifest = load_manifest(Path::new("/pkgs/foo"), &fs).unwrap();
        assert_eq!(manifest.headers, vec!["a.h", "b.h"]);
        assert_eq!(manifest.wppl, vec!["lib.wppl"]);
    }

    #[test]
    fn test_missing_webppl_key_defaults_to_empty() {
        let fs = MockFileSystem::new();
        fs.add_file("/pkgs/foo/package.json", r#"{"name": "foo"}"#);

        let manifest = load_manifest(Path::new("/pkgs/foo"), &fs).unwrap();
        assert!(manifest.headers.is_empty());
        assert!(manifest.wppl.is_empty());
    }

    #[test]
    fn test_partial_manifest_fields_default() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "/pkgs/foo/package.json",
            r#"{"webppl": {"wppl": ["lib.wppl"]}}"#,
        );

        let manifest = load_manifest(Path::new("/pkgs/foo"), &fs).unwrap();
        assert!(manifest.headers.is_empty());
        assert_eq!(manifest.wppl, vec!["lib.wppl"]);
    }

    #[test]
    fn test_missing_manifest_is_fatal() {
        let fs = MockFileSystem::new();
        fs.add_dir("/pkgs/foo");

        let err = load_manifest(Path::new("/pkgs/foo"), &fs).unwrap_err();
        assert!(matches!(err, PkgError::ManifestLoad { .. }));
    }

    #[test]
    fn test_unparsable_manifest_is_fatal() {
        let fs = MockFileSystem::new();
        fs.add_file("/pkgs/foo/package.json", "not json");

        let err = load_manifest(Path::new("/pkgs/foo"), &fs).unwrap_err();
        match err {
            PkgError::ManifestLoad { path, .. } => {
                assert_eq!(path, Path::new("/pkgs/foo/package.json"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
