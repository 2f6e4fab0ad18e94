//! Symbols: the entities names can refer to.

use std::fmt;
use std::sync::Arc;

/// What kind of entity a path names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// A concrete registered entity (class, constant, service, ...).
    Entity,
    /// An enclosing namespace that exists only because something nested
    /// under it was registered.
    Namespace,
}

impl SymbolKind {
    /// Human-readable kind name for diagnostics.
    pub fn display(&self) -> &'static str {
        match self {
            SymbolKind::Entity => "entity",
            SymbolKind::Namespace => "namespace",
        }
    }
}

/// A resolved symbol: the canonical qualified path plus its kind.
///
/// Aliases never appear here. Resolving an alias yields the symbol of
/// its target, so chains cannot form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    /// Canonical fully qualified path, e.g. `User::CreditCard`.
    pub path: Arc<str>,
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn new(path: impl Into<Arc<str>>, kind: SymbolKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// The final path segment.
    pub fn name(&self) -> &str {
        self.path.rsplit("::").next().unwrap_or(&self.path)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path, self.kind.display())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_name_is_last_segment() {
        let sym = Symbol::new("User::CreditCard", SymbolKind::Entity);
        assert_eq!(sym.name(), "CreditCard");

        let top = Symbol::new("User", SymbolKind::Namespace);
        assert_eq!(top.name(), "User");
    }
}
