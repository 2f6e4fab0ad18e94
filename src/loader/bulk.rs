//! Bulk loading from the structured config format.
//!
//! The whole definitions mapping is validated in one pass, undefined
//! targets are removed, and every surviving pair is bound
//! unconditionally. Validation and binding consult the same symbol
//! table, so a bind failure here is unexpected and propagates instead
//! of being recovered per entry.

use std::path::Path;
use std::sync::Arc;

use smol_str::SmolStr;
use tracing::{info, warn};

use crate::config::{CONFIG_FILE, ConfigError, Definitions, Discovery, read_document};
use crate::table::{Binder, SymbolSource};
use crate::validate::{Diagnostic, DiagnosticCollector, validate};

use super::LoadError;

/// What a bulk load did: where the config came from, what survived,
/// and what was dropped.
#[derive(Clone, Debug)]
pub struct ConfigReport {
    pub path: std::path::PathBuf,
    /// The cleaned definitions, undefined targets removed.
    pub definitions: Definitions,
    /// Number of aliases bound.
    pub bound: usize,
    /// Unresolvable targets, in declaration order.
    pub undefined: Vec<Arc<str>>,
    /// Non-surviving duplicate alias occurrences.
    pub already_defined: Vec<SmolStr>,
}

/// The structured-config orchestrator.
pub struct ConfigLoader<'t, T: SymbolSource + Binder> {
    table: &'t T,
    diagnostics: DiagnosticCollector,
}

impl<'t, T: SymbolSource + Binder> ConfigLoader<'t, T> {
    pub fn new(table: &'t T) -> Self {
        Self {
            table,
            diagnostics: DiagnosticCollector::new(),
        }
    }

    /// Load from an explicit config path.
    pub fn load_path(&mut self, path: &Path, namespace: &str) -> Result<ConfigReport, LoadError> {
        let document = read_document(path, namespace)?;
        self.load_definitions(document.definitions, &document.path)
    }

    /// Discover the config (project directory, then home) and load it.
    /// Unlike line mode, exhausting the search is an error here.
    pub fn load_discovered(&mut self, discovery: &Discovery) -> Result<ConfigReport, LoadError> {
        let path = discovery.find_config().ok_or_else(|| ConfigError::NoConfig {
            path: discovery.project_dir().join(CONFIG_FILE),
        })?;
        self.load_path(&path, &discovery.namespace())
    }

    /// Diagnostics accumulated so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.diagnostics()
    }

    /// Take the accumulated diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    fn load_definitions(
        &mut self,
        mut definitions: Definitions,
        path: &Path,
    ) -> Result<ConfigReport, LoadError> {
        info!(path = %path.display(), "loading definitions");

        let validation = validate(&definitions.candidates(), self.table);
        for target in &validation.errors.undefined {
            definitions.remove(target);
        }

        // Validation passed these, so a bind failure is structural.
        let mut bound = 0;
        for (target, alias) in definitions.iter() {
            self.table.bind(alias, target)?;
            bound += 1;
        }

        self.warn_undefined(&validation.errors.undefined, path);
        self.warn_duplicates(&validation.errors.already_defined, path);
        self.warn_empty(&definitions, path);

        Ok(ConfigReport {
            path: path.to_path_buf(),
            definitions,
            bound,
            undefined: validation.errors.undefined,
            already_defined: validation.errors.already_defined,
        })
    }

    fn warn_undefined(&mut self, undefined: &[Arc<str>], path: &Path) {
        if undefined.is_empty() {
            return;
        }
        let names: Vec<&str> = undefined.iter().map(|t| t.as_ref()).collect();
        let message = format!(
            "Found {} undefined constants. Please check spelling for {} ({})",
            undefined.len(),
            names.join(", "),
            path.display()
        );
        warn!("{message}");
        self.diagnostics.add(Diagnostic::warning(message));
    }

    fn warn_duplicates(&mut self, already_defined: &[SmolStr], path: &Path) {
        if already_defined.is_empty() {
            return;
        }
        let names: Vec<&str> = already_defined.iter().map(SmolStr::as_str).collect();
        let message = format!(
            "Found {} already defined aliases: {}. Using the same alias for different \
             constants may lead to unexpected results ({})",
            already_defined.len(),
            names.join(", "),
            path.display()
        );
        warn!("{message}");
        self.diagnostics.add(Diagnostic::warning(message));
    }

    fn warn_empty(&mut self, definitions: &Definitions, path: &Path) {
        if !definitions.is_empty() {
            return;
        }
        let message = format!(
            "No definitions survived loading {}. Check the namespace spelling in the config",
            path.display()
        );
        warn!("{message}");
        self.diagnostics.add(Diagnostic::warning(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::SymbolTable;

    fn table_with(paths: &[&str]) -> SymbolTable {
        let table = SymbolTable::new();
        table.register_all(paths.iter().copied()).unwrap();
        table
    }

    fn defs(entries: &[(&str, &str)]) -> Definitions {
        entries
            .iter()
            .map(|(target, alias)| (Arc::from(*target), SmolStr::new(alias)))
            .collect()
    }

    #[test]
    fn test_bulk_load_binds_survivors() {
        let table = table_with(&["Models::User", "Services::Mailer"]);
        let mut loader = ConfigLoader::new(&table);

        let report = loader
            .load_definitions(
                defs(&[("Models::User", "TU"), ("Services::Mailer", "TM")]),
                Path::new(".shortnames.yml"),
            )
            .unwrap();

        assert_eq!(report.bound, 2);
        assert!(report.undefined.is_empty());
        assert!(table.exists("TU"));
        assert!(table.exists("TM"));
        assert!(loader.diagnostics().is_empty());
    }

    #[test]
    fn test_undefined_target_is_removed_before_binding() {
        let table = table_with(&[]);
        let mut loader = ConfigLoader::new(&table);

        let report = loader
            .load_definitions(
                defs(&[("User::CreditCard", "UCC")]),
                Path::new(".shortnames.yml"),
            )
            .unwrap();

        assert!(report.definitions.is_empty());
        assert_eq!(report.bound, 0);
        assert_eq!(report.undefined.len(), 1);
        assert_eq!(report.undefined[0].as_ref(), "User::CreditCard");
        assert!(!table.exists("UCC"));
    }

    #[test]
    fn test_duplicate_aliases_are_reported_but_still_bound() {
        let table = table_with(&["Models::User", "Models::Account"]);
        let mut loader = ConfigLoader::new(&table);

        let report = loader
            .load_definitions(
                defs(&[("Models::User", "M"), ("Models::Account", "M")]),
                Path::new(".shortnames.yml"),
            )
            .unwrap();

        // Both entries bind; the later declaration overwrites.
        assert_eq!(report.bound, 2);
        assert_eq!(report.already_defined, vec![SmolStr::new("M")]);
        assert_eq!(
            table.resolve("M").unwrap().path.as_ref(),
            "Models::Account"
        );
    }

    #[test]
    fn test_warnings_name_the_problems_and_path() {
        let table = table_with(&["Models::User"]);
        let mut loader = ConfigLoader::new(&table);

        loader
            .load_definitions(
                defs(&[("Missing::Thing", "MT"), ("Models::User", "TU")]),
                Path::new("/etc/app/.shortnames.yml"),
            )
            .unwrap();

        let diags = loader.diagnostics();
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("1 undefined constants"));
        assert!(diags[0].message.contains("Missing::Thing"));
        assert!(diags[0].message.contains(".shortnames.yml"));
    }

    #[test]
    fn test_empty_survivor_set_warns_about_namespace() {
        let table = table_with(&[]);
        let mut loader = ConfigLoader::new(&table);

        loader
            .load_definitions(defs(&[]), Path::new(".shortnames.yml"))
            .unwrap();

        let diags = loader.diagnostics();
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("namespace"));
    }

    #[test]
    fn test_discovery_miss_is_an_error_in_bulk_mode() {
        let project = tempfile::tempdir().unwrap();
        let discovery = Discovery::new(project.path(), None);
        let table = table_with(&[]);
        let mut loader = ConfigLoader::new(&table);

        let err = loader.load_discovered(&discovery).unwrap_err();
        assert!(matches!(err, LoadError::Config(ConfigError::NoConfig { .. })));
    }
}
