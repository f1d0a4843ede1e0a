//! Everything that can go wrong while loading a system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed system file: {0}")]
    Parse(#[from] json5::Error),
    #[error("no prefab {kind} named {name:?}")]
    UnknownPrefab { kind: &'static str, name: String },
}
