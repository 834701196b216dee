use super::descriptor::{sanitize_identifier, JsModule, PackageDescriptor};
use super::manifest::load_manifest;
use super::resolver::{pick_first_existing, resolve_candidates};
use crate::env::{global_pkg_dir_with, Environment, SystemEnvironment};
use crate::error::PkgError;
use crate::fs::{FileSystem, RealFileSystem};
use crate::module_loader::{ModuleLoader, RealModuleLoader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Resolves a package by name or path and reads its manifest.
///
/// When `search_paths` is `None` the lookup defaults to the single global
/// package directory. `verbose` emits the selected directory and the final
/// descriptor to the diagnostic stream; it never alters the result.
pub fn read(
    name_or_path: &str,
    search_paths: Option<&[PathBuf]>,
    verbose: bool,
) -> Result<PackageDescriptor, PkgError> {
    read_with(
        name_or_path,
        search_paths,
        verbose,
        &RealFileSystem::new(),
        &RealModuleLoader::new(),
        &SystemEnvironment,
    )
}

/// `read` with all external capabilities injected.
pub fn read_with(
    name_or_path: &str,
    search_paths: Option<&[PathBuf]>,
    verbose: bool,
    fs: &dyn FileSystem,
    loader: &dyn ModuleLoader,
    env: &dyn Environment,
) -> Result<PackageDescriptor, PkgError> {
    let default_paths;
    let paths: &[PathBuf] = match search_paths {
        Some(paths) => paths,
        None => {
            default_paths = [global_pkg_dir_with(env)];
            &default_paths
        }
    };

    let name = base_name(name_or_path);
    let candidates = resolve_candidates(name_or_path, paths);

    let directory = match pick_first_existing(&name, &candidates, fs) {
        Ok(directory) => directory,
        Err(err) => {
            if verbose {
                warn!(?candidates, package = %name, "no package candidate exists");
            }
            return Err(err);
        }
    };

    if verbose {
        info!(package = %name, directory = %directory.display(), "loading package");
    } else {
        debug!(package = %name, directory = %directory.display(), "loading package");
    }

    let descriptor = read_package(&directory, &name, fs, loader)?;

    if verbose {
        info!(?descriptor, "resolved package");
    }

    Ok(descriptor)
}

/// Builds a descriptor from an already-resolved package directory.
fn read_package(
    directory: &Path,
    name: &str,
    fs: &dyn FileSystem,
    loader: &dyn ModuleLoader,
) -> Result<PackageDescriptor, PkgError> {
    let manifest = load_manifest(directory, fs)?;

    let js = if loader.can_load(directory) {
        Some(JsModule {
            identifier: sanitize_identifier(name),
            path: directory.to_path_buf(),
        })
    } else {
        None
    };

    Ok(PackageDescriptor {
        js,
        headers: join_all(directory, &manifest.headers),
        wppl: join_all(directory, &manifest.wppl),
    })
}

fn join_all(directory: &Path, names: &[String]) -> Vec<PathBuf> {
    names.iter().map(|name| directory.join(name)).collect()
}

fn base_name(name_or_path: &str) -> String {
    Path::new(name_or_path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| name_or_path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::FixedEnvironment;
    use crate::fs::MockFileSystem;
    use crate::module_loader::MockModuleLoader;

    fn fixture() -> (MockFileSystem, MockModuleLoader, FixedEnvironment) {
        let fs = MockFileSystem::new();
        fs.add_file(
            "/pkgs/my-package/package.json",
            r#"{"webppl": {"headers": ["a.h"], "wppl": ["b.wppl"]}}"#,
        );
        (fs, MockModuleLoader::new(), FixedEnvironment::empty())
    }

    #[test]
    fn test_round_trip_without_js_module() {
        let (fs, loader, env) = fixture();

        let descriptor = read_with(
            "my-package",
            Some(&[PathBuf::from("/pkgs")]),
            false,
            &fs,
            &loader,
            &env,
        )
        .unwrap();

        assert_eq!(descriptor.js, None);
        assert_eq!(descriptor.headers, vec![PathBuf::from("/pkgs/my-package/a.h")]);
        assert_eq!(descriptor.wppl, vec![PathBuf::from("/pkgs/my-package/b.wppl")]);
    }

    #[test]
    fn test_loadable_package_gets_sanitized_identifier() {
        let (fs, loader, env) = fixture();
        loader.add_loadable("/pkgs/my-package");

        let descriptor = read_with(
            "my-package",
            Some(&[PathBuf::from("/pkgs")]),
            false,
            &fs,
            &loader,
            &env,
        )
        .unwrap();

        let js = descriptor.js.unwrap();
        assert_eq!(js.identifier, "my_package");
        assert_eq!(js.path, PathBuf::from("/pkgs/my-package"));
    }

    #[test]
    fn test_search_order_first_existing_wins() {
        let (fs, loader, env) = fixture();
        fs.add_file(
            "/override/my-package/package.json",
            r#"{"webppl": {"wppl": ["other.wppl"]}}"#,
        );

        let descriptor = read_with(
            "my-package",
            Some(&[PathBuf::from("/override"), PathBuf::from("/pkgs")]),
            false,
            &fs,
            &loader,
            &env,
        )
        .unwrap();

        assert_eq!(
            descriptor.wppl,
            vec![PathBuf::from("/override/my-package/other.wppl")]
        );
    }

    #[test]
    fn test_not_found_lists_candidates_in_input_order() {
        let fs = MockFileSystem::new();
        let loader = MockModuleLoader::new();
        let env = FixedEnvironment::empty();

        let err = read_with(
            "ghost",
            Some(&[PathBuf::from("/a"), PathBuf::from("/b")]),
            false,
            &fs,
            &loader,
            &env,
        )
        .unwrap_err();

        match err {
            PkgError::PackageNotFound { name, candidates } => {
                assert_eq!(name, "ghost");
                assert_eq!(
                    candidates,
                    vec![PathBuf::from("/a/ghost"), PathBuf::from("/b/ghost")]
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_default_search_path_is_global_pkg_dir() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "/home/alice/.webppl/foo/package.json",
            r#"{"webppl": {"wppl": ["foo.wppl"]}}"#,
        );
        let loader = MockModuleLoader::new();
        let env = FixedEnvironment::new(&[("HOME", "/home/alice")]);

        let descriptor = read_with("foo", None, false, &fs, &loader, &env).unwrap();
        assert_eq!(
            descriptor.wppl,
            vec![PathBuf::from("/home/alice/.webppl/foo/foo.wppl")]
        );
    }

    #[test]
    fn test_corrupt_manifest_propagates() {
        let fs = MockFileSystem::new();
        fs.add_file("/pkgs/foo/package.json", "{broken");
        let loader = MockModuleLoader::new();
        let env = FixedEnvironment::empty();

        let err = read_with(
            "foo",
            Some(&[PathBuf::from("/pkgs")]),
            false,
            &fs,
            &loader,
            &env,
        )
        .unwrap_err();

        assert!(matches!(err, PkgError::ManifestLoad { .. }));
    }
}
