use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PkgError {
    #[error("could not find WebPPL package: {name} (tried: {candidates:?})")]
    PackageNotFound {
        name: String,
        candidates: Vec<PathBuf>,
    },

    #[error("failed to load package manifest at {}", .path.display())]
    ManifestLoad {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("no serialization rule for strings under key context {key:?}")]
    SerializationContract { key: Option<String> },
}
