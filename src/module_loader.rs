//! Native-module loadability capability.
//!
//! Whether a package ships a loadable JS module decides the `js` field of
//! its descriptor. The probe is injectable; the real implementation
//! approximates Node's directory resolution rule for local packages.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

pub trait ModuleLoader: Send + Sync {
    /// True iff `path` can be loaded as a native JS module.
    fn can_load(&self, path: &Path) -> bool;
}

pub struct RealModuleLoader;

impl RealModuleLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealModuleLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleLoader for RealModuleLoader {
    fn can_load(&self, path: &Path) -> bool {
        if path.join("index.js").is_file() {
            return true;
        }

        // A package.json "main" entry also makes the directory loadable,
        // with the extension optional as in Node's resolution.
        let content = match std::fs::read_to_string(path.join("package.json")) {
            Ok(content) => content,
            Err(_) => return false,
        };
        let manifest: serde_json::Value = match serde_json::from_str(&content) {
            Ok(manifest) => manifest,
            Err(_) => return false,
        };

        match manifest.get("main").and_then(serde_json::Value::as_str) {
            Some(main) => {
                let entry = path.join(main);
                entry.is_file()
                    || (entry.extension().is_none()
                        && path.join(format!("{}.js", main)).is_file())
            }
            None => false,
        }
    }
}

/// Mock loader reporting a fixed set of paths as loadable.
pub struct MockModuleLoader {
    loadable: RwLock<HashSet<PathBuf>>,
}

impl MockModuleLoader {
    pub fn new() -> Self {
        Self {
            loadable: RwLock::new(HashSet::new()),
        }
    }

    pub fn add_loadable(&self, path: impl AsRef<Path>) {
        self.loadable
            .write()
            .unwrap()
            .insert(path.as_ref().to_path_buf());
    }
}

impl Default for MockModuleLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleLoader for MockModuleLoader {
    fn can_load(&self, path: &Path) -> bool {
        self.loadable.read().unwrap().contains(path)
    }
}
