//! The symbol table and the two capability traits the pipeline needs
//! from a host environment: existence checks ([`SymbolSource`]) and name
//! introduction ([`Binder`]).
//!
//! The validator and loaders only ever see the traits, so tests can run
//! against any in-memory implementation; [`SymbolTable`] is the concrete
//! registry that implements both.

mod registry;
mod symbol;

use smol_str::SmolStr;
use thiserror::Error;

pub use registry::{RegisterError, SymbolTable};
pub use symbol::{Symbol, SymbolKind};

/// Read-only existence queries against the host environment.
///
/// `exists` must be pure: no side effects, and stable across the two
/// validator passes of a single run.
pub trait SymbolSource {
    /// Does this qualified path currently name something?
    fn exists(&self, path: &str) -> bool;

    /// Resolve a path to its canonical symbol.
    fn resolve(&self, path: &str) -> Option<Symbol>;
}

/// The name-introduction side effect.
///
/// After a successful `bind`, `alias` must resolve to the same symbol
/// as `target`. Failure is reported to the caller, never swallowed.
pub trait Binder {
    fn bind(&self, alias: &str, target: &str) -> Result<(), BindError>;
}

/// A bind was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BindError {
    /// The target passed validation earlier but does not resolve now.
    #[error("Constant {0} not found")]
    UnknownTarget(SmolStr),
    /// The alias does not satisfy the alias grammar.
    #[error("malformed alias: {0:?}")]
    MalformedAlias(SmolStr),
}
