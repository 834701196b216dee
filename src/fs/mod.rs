//! FileSystem abstraction for testable package resolution

mod mock;
mod real;

pub use mock::MockFileSystem;
pub use real::RealFileSystem;

use anyhow::Result;
use std::path::Path;

/// Filesystem capability used by the resolver and manifest reader.
///
/// Package lookup only ever needs existence probes and manifest reads, so
/// the surface is deliberately small. The mock implementation counts
/// existence probes so tests can assert the resolver's early exit.
pub trait FileSystem: Send + Sync {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> Result<String>;
}
