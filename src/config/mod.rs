//! Structured config reading and declaration-source discovery.

mod discover;
mod document;

use std::path::PathBuf;

use smol_str::SmolStr;
use thiserror::Error;

pub use discover::{CONFIG_FILE, Discovery, SCRIPT_FILE};
pub use document::{ConfigDocument, Definitions, parse_document, read_document};

/// Structural problems with a structured declaration source. Fatal to
/// the load attempt, unlike per-line problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The given or discovered path could not be read.
    #[error("no config found at {path}")]
    NoConfig { path: PathBuf },

    /// The document is not parseable YAML.
    #[error("config is not valid YAML: {0}")]
    Invalid(#[from] serde_yaml::Error),

    /// Neither the namespace key nor a top-level `definitions` key is
    /// present.
    #[error("namespace {namespace:?} not found in config")]
    NamespaceNotFound { namespace: SmolStr },

    /// The selected scope has no usable `definitions` mapping.
    #[error("config has no definitions mapping")]
    NoDefinitions,
}
