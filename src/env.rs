//! Process-environment capability and the default global package directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment-variable lookup, injectable so tests never mutate the real
/// process environment.
pub trait Environment: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed key/value environment for deterministic tests.
pub struct FixedEnvironment {
    vars: HashMap<String, String>,
}

impl FixedEnvironment {
    pub fn new(vars: &[(&str, &str)]) -> Self {
        Self {
            vars: vars
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }
}

impl Environment for FixedEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Default directory searched for installed packages: `<home>/.webppl`.
///
/// Recomputed on every call; changing the environment between calls changes
/// subsequent defaults.
pub fn global_pkg_dir() -> PathBuf {
    global_pkg_dir_with(&SystemEnvironment)
}

pub fn global_pkg_dir_with(env: &dyn Environment) -> PathBuf {
    // USERPROFILE covers Windows.
    let home = env.var("HOME").or_else(|| env.var("USERPROFILE"));
    match home {
        Some(home) if !home.is_empty() => Path::new(&home).join(".webppl"),
        _ => PathBuf::new(),
    }
}
