//! # shortnames
//!
//! Short aliases for long, fully qualified names. Callers declare
//! `UCC = User::CreditCard` style pairs in a line-oriented script or a
//! YAML config; the pipeline parses the declarations, checks each
//! target against a symbol table, drops the invalid entries with
//! actionable diagnostics, and binds every survivor so the alias is a
//! usable name afterwards.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! loader   → Orchestrators: ScriptLoader (per line), ConfigLoader (bulk)
//!   ↓
//! config   → YAML document reading + source discovery
//!   ↓
//! validate → Batch validation, diagnostics
//!   ↓
//! table    → SymbolTable plus the SymbolSource/Binder capability traits
//!   ↓
//! syntax   → Lexer + parser for the declaration line grammar
//!   ↓
//! base     → Primitives (AliasCandidate, name grammar)
//! ```
//!
//! ## Example
//!
//! ```
//! use shortnames::{ScriptLoader, SymbolSource, SymbolTable};
//!
//! let table = SymbolTable::new();
//! table.register("User::CreditCard").unwrap();
//!
//! let mut loader = ScriptLoader::new(&table);
//! let summary = loader.load_str("UCC = User::CreditCard\n");
//!
//! assert_eq!(summary.loaded, 1);
//! assert!(table.exists("UCC"));
//! ```

/// Foundation types: candidates and the name grammar.
pub mod base;

/// YAML config reading and source discovery.
pub mod config;

/// The two orchestrators.
pub mod loader;

/// Declaration line lexing and parsing.
pub mod syntax;

/// The symbol table and its capability traits.
pub mod table;

/// Candidate validation and diagnostics.
pub mod validate;

pub use base::AliasCandidate;
pub use config::{ConfigError, Definitions, Discovery};
pub use loader::{ConfigLoader, ConfigReport, LoadError, LoadSummary, ScriptLoader};
pub use syntax::{LineError, LineOutcome, parse_line, parse_script};
pub use table::{BindError, Binder, RegisterError, Symbol, SymbolKind, SymbolSource, SymbolTable};
pub use validate::{Diagnostic, Severity, Validation, validate};
