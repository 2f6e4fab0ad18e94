//! The in-memory symbol table.
//!
//! `SymbolTable` is the concrete host environment the rest of the crate
//! is validated against: callers pre-populate it with the qualified
//! names that exist in their world, and the loaders bind aliases into
//! it. Lookups and binds both take `&self`; interior mutability is a
//! `parking_lot::RwLock` so reads stay cheap.

use indexmap::IndexMap;
use parking_lot::RwLock;
use smol_str::SmolStr;
use tracing::debug;

use crate::base::{is_alias_name, is_qualified_path};

use super::symbol::{Symbol, SymbolKind};
use super::{BindError, Binder, SymbolSource};

/// A registry of qualified names and the aliases bound to them.
///
/// Registering `A::B::C` also makes `A` and `A::B` resolvable as
/// namespaces, matching a host environment where a nested entity's
/// enclosing scopes exist by construction. Bound aliases are
/// first-class names: `exists(alias)` holds after a bind, and an alias
/// can serve as the leading segment of a later target path.
#[derive(Default)]
pub struct SymbolTable {
    inner: RwLock<TableInner>,
}

#[derive(Default)]
struct TableInner {
    /// Every resolvable name, in registration order. Values are always
    /// canonical symbols, so alias entries cannot chain.
    names: IndexMap<SmolStr, Symbol>,
}

impl SymbolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a qualified path as an existing entity.
    ///
    /// Ancestor namespaces are created as needed. Re-registering an
    /// existing path is a no-op (an already-registered namespace is
    /// upgraded to an entity if registered directly).
    pub fn register(&self, path: &str) -> Result<Symbol, RegisterError> {
        if !is_qualified_path(path) {
            return Err(RegisterError::MalformedPath(path.into()));
        }

        // Fast path: already present as an entity.
        {
            let inner = self.inner.read();
            if let Some(sym) = inner.names.get(path) {
                if sym.kind == SymbolKind::Entity {
                    return Ok(sym.clone());
                }
            }
        }

        let mut inner = self.inner.write();

        // Ancestors first, so `A` and `A::B` exist before `A::B::C`.
        let mut end = 0;
        for segment in path.split("::") {
            end += segment.len();
            let prefix = &path[..end];
            if end < path.len() {
                inner
                    .names
                    .entry(SmolStr::new(prefix))
                    .or_insert_with(|| Symbol::new(prefix, SymbolKind::Namespace));
                end += 2;
            }
        }

        let symbol = Symbol::new(path, SymbolKind::Entity);
        inner.names.insert(SmolStr::new(path), symbol.clone());
        Ok(symbol)
    }

    /// Register several paths at once. Stops at the first malformed path.
    pub fn register_all<'a>(
        &self,
        paths: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), RegisterError> {
        for path in paths {
            self.register(path)?;
        }
        Ok(())
    }

    /// All resolvable names in registration order, aliases included.
    pub fn names(&self) -> Vec<SmolStr> {
        self.inner.read().names.keys().cloned().collect()
    }

    /// Number of resolvable names.
    pub fn len(&self) -> usize {
        self.inner.read().names.len()
    }

    /// True when nothing has been registered or bound.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve a path, trying a bound alias as the leading segment when
    /// the direct lookup misses.
    fn resolve_inner(&self, path: &str) -> Option<Symbol> {
        let inner = self.inner.read();
        if let Some(sym) = inner.names.get(path) {
            return Some(sym.clone());
        }

        // `UCC::Number` where `UCC` is a bound alias: rewrite the head
        // to its canonical path and retry.
        let (head, rest) = path.split_once("::")?;
        let head_sym = inner.names.get(head)?;
        if head_sym.path.as_ref() == head {
            return None;
        }
        let canonical = format!("{}::{}", head_sym.path, rest);
        inner.names.get(canonical.as_str()).cloned()
    }
}

impl SymbolSource for SymbolTable {
    fn exists(&self, path: &str) -> bool {
        self.resolve_inner(path).is_some()
    }

    fn resolve(&self, path: &str) -> Option<Symbol> {
        self.resolve_inner(path)
    }
}

impl Binder for SymbolTable {
    fn bind(&self, alias: &str, target: &str) -> Result<(), BindError> {
        if !is_alias_name(alias) {
            return Err(BindError::MalformedAlias(alias.into()));
        }
        let symbol = self
            .resolve_inner(target)
            .ok_or_else(|| BindError::UnknownTarget(target.into()))?;

        let mut inner = self.inner.write();
        if let Some(previous) = inner.names.insert(SmolStr::new(alias), symbol) {
            debug!(alias, previous = %previous.path, target, "rebound alias");
        }
        Ok(())
    }
}

/// A path could not be registered.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    #[error("malformed qualified path: {0}")]
    MalformedPath(SmolStr),
}
