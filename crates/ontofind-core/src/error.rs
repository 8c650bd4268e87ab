//! Error type for ontofind-core.
//!
//! Indexing and searching are total and never fail. Errors only arise while
//! resolving identifiers (CURIEs, OBO IDs) and loading configuration.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinderError {
    #[error("unknown prefix `{prefix}` in `{curie}`")]
    UnknownPrefix { prefix: String, curie: String },

    #[error("`{0}` is neither a CURIE nor a full IRI")]
    InvalidCurie(String),

    #[error("the IRI <{0}> is not an OBO Foundry-compliant IRI, so it cannot be converted to an OBO ID")]
    NotOboIri(String),

    #[error("`{0}` is not a valid OBO ID")]
    InvalidOboId(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("could not write default config to {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = FinderError> = std::result::Result<T, E>;
