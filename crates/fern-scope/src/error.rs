//! Scope errors for the core IR.
//!
//! The checker is fail-fast: one traversal, one diagnostic. Each
//! variant names the identifier(s) at fault so the driver can report
//! them without re-walking the term.

use std::fmt;

use serde::Serialize;

use fern_ir::Name;

/// A binding-structure violation found by the scope checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ScopeError {
    /// A `Reference` names an identifier no enclosing binder introduces.
    UnboundVariable(Name),
    /// A `Let`/`LetRec` binding list repeats a name, or a binder reuses
    /// a name already visible in the enclosing context (shadowing).
    DuplicateBinder(Vec<Name>),
    /// An `Abstract` or `Program` parameter list repeats a name, or a
    /// parameter shadows a name already visible.
    DuplicateParameter(Vec<Name>),
}

impl fmt::Display for ScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundVariable(name) => write!(f, "unbound variable: {name}"),
            Self::DuplicateBinder(names) => {
                write!(f, "duplicate binders: {}", names.join(", "))
            }
            Self::DuplicateParameter(names) => {
                write!(f, "duplicate parameters: {}", names.join(", "))
            }
        }
    }
}

impl std::error::Error for ScopeError {}
