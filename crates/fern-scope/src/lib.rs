//! Binding-structure checks for the Fern core IR.
//!
//! The letrec elimination stage runs in two steps: this crate's scope
//! checker first validates that a program's binding structure is
//! well-formed (no unbound references, no duplicate binders, no
//! shadowing), and only then does `fern-lower` rewrite recursive
//! bindings into heap cells. The lowering rewrite is only correct on
//! terms this checker accepts, which is why shadowing is rejected
//! outright rather than renamed around.
//!
//! Both entry points are pure: they read the input tree and either
//! return `Ok(())` or the first [`ScopeError`] found.

mod check;
mod error;

pub use check::{check_program, check_term, Context};
pub use error::ScopeError;
