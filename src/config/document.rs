//! Reading the structured (YAML) declaration format.
//!
//! The document maps fully qualified targets to aliases, either grouped
//! under a project namespace key or flat at the top level:
//!
//! ```yaml
//! my_project:
//!   definitions:
//!     User::CreditCard: UCC
//!     Models::User: TU
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Deserialize;
use smol_str::SmolStr;

use crate::base::AliasCandidate;

use super::ConfigError;

/// The declaration-order mapping of target → alias.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Definitions {
    entries: IndexMap<Arc<str>, SmolStr>,
}

impl Definitions {
    pub fn new(entries: impl IntoIterator<Item = (Arc<str>, SmolStr)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Targets in declaration order.
    pub fn targets(&self) -> impl Iterator<Item = &Arc<str>> {
        self.entries.keys()
    }

    /// Aliases in declaration order.
    pub fn aliases(&self) -> impl Iterator<Item = &SmolStr> {
        self.entries.values()
    }

    /// The alias declared for a target, if any.
    pub fn alias_for(&self, target: &str) -> Option<&SmolStr> {
        self.entries.get(target)
    }

    /// Remove a target's entry. Used to drop undefined targets after
    /// validation.
    pub fn remove(&mut self, target: &str) -> Option<SmolStr> {
        self.entries.shift_remove(target)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, &SmolStr)> {
        self.entries.iter()
    }

    /// The definitions as validator input, in declaration order.
    pub fn candidates(&self) -> Vec<AliasCandidate> {
        self.entries
            .iter()
            .map(|(target, alias)| AliasCandidate::new(alias.clone(), target.clone()))
            .collect()
    }
}

impl FromIterator<(Arc<str>, SmolStr)> for Definitions {
    fn from_iter<T: IntoIterator<Item = (Arc<str>, SmolStr)>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// A successfully read declaration source: where it came from and what
/// it declares.
#[derive(Clone, Debug)]
pub struct ConfigDocument {
    pub path: PathBuf,
    pub definitions: Definitions,
}

/// The scope a namespace key selects inside the raw document.
#[derive(Debug, Deserialize)]
struct RawScope {
    definitions: Option<IndexMap<String, String>>,
}

/// Read and scope a YAML declaration file.
///
/// The namespace key is looked up first; a document whose top level
/// carries `definitions` directly (no namespace grouping) is also
/// accepted.
pub fn read_document(path: &Path, namespace: &str) -> Result<ConfigDocument, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|_| ConfigError::NoConfig {
        path: path.to_path_buf(),
    })?;
    let definitions = parse_document(&text, namespace)?;
    Ok(ConfigDocument {
        path: path.to_path_buf(),
        definitions,
    })
}

/// Parse the document text. Split out from [`read_document`] so tests
/// can drive it without touching the filesystem.
pub fn parse_document(text: &str, namespace: &str) -> Result<Definitions, ConfigError> {
    let root: serde_yaml::Value = serde_yaml::from_str(text)?;

    let scope_value = match root.get(namespace) {
        Some(scoped) => scoped.clone(),
        // No namespace grouping: accept top-level `definitions`.
        None if root.get("definitions").is_some() => root,
        None => {
            return Err(ConfigError::NamespaceNotFound {
                namespace: namespace.into(),
            });
        }
    };

    let scope: RawScope =
        serde_yaml::from_value(scope_value).map_err(|_| ConfigError::NoDefinitions)?;
    let entries = scope.definitions.ok_or(ConfigError::NoDefinitions)?;

    Ok(entries
        .into_iter()
        .map(|(target, alias)| (Arc::from(target.as_str()), SmolStr::new(alias)))
        .collect())
}
