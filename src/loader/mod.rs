//! Orchestrators: drive source → parse → validate → bind end to end.
//!
//! Two modes, matching the two declaration formats:
//! - [`ScriptLoader`] processes the line format one line at a time and
//!   recovers from every per-line problem.
//! - [`ConfigLoader`] validates a structured document as one batch and
//!   binds the survivors unconditionally.

mod bulk;
mod script;

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::table::BindError;

pub use bulk::{ConfigLoader, ConfigReport};
pub use script::{LoadSummary, ScriptLoader};

/// A load attempt failed structurally. Per-line problems never surface
/// here; they are recovered, counted, and reported as diagnostics.
#[derive(Debug, Error)]
pub enum LoadError {
    /// An explicitly supplied declaration file could not be read.
    #[error("cannot read declaration file {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A bind failed in bulk mode, where validation is trusted and no
    /// per-binding recovery exists.
    #[error(transparent)]
    Bind(#[from] BindError),
}
