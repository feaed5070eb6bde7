//! Scope checking over the core IR.
//!
//! One structural pass validates the whole binding structure of a
//! term: every `Reference` must resolve to an enclosing binder, no
//! binding list may repeat a name, and no binder may shadow a name
//! that is already visible. Contexts are threaded down by value
//! (clone-and-extend), never kept in a mutable table, so an early
//! `?` return can never leave a stale scope behind.
//!
//! Scoping rules per construct:
//! - `Let` binds in parallel: each right-hand side is checked under
//!   the incoming context only.
//! - `LetRec` binds recursively: every right-hand side and the body
//!   are checked with all of the group's binders visible.
//! - `Abstract` parameters are visible in the body only.
//!
//! The checker validates; it never rewrites. Types, arity, and
//! operator use are out of scope here.

use rustc_hash::{FxHashMap, FxHashSet};

use fern_ir::core::{Program, Term};
use fern_ir::Name;

use crate::error::ScopeError;

/// The set of identifiers visible at a point in the term tree.
pub type Context = FxHashSet<Name>;

/// Names that may not be introduced by a binding list: repeats within
/// the list itself, plus names the enclosing context already binds.
/// Sorted so the diagnostic is deterministic.
fn offending_names(names: &[&Name], context: &Context) -> Vec<Name> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for name in names {
        *counts.entry(name.as_str()).or_insert(0) += 1;
    }
    let mut bad: Vec<Name> = counts
        .into_iter()
        .filter(|(name, count)| *count > 1 || context.contains(*name))
        .map(|(name, _)| name.to_string())
        .collect();
    bad.sort();
    bad
}

/// A copy of `context` with `names` added.
fn extended<'a>(context: &Context, names: impl IntoIterator<Item = &'a Name>) -> Context {
    let mut inner = context.clone();
    inner.extend(names.into_iter().cloned());
    inner
}

/// Check one term under the given context.
///
/// Fail-fast: the first violation along the traversal (sub-terms in
/// source order) is returned and the walk stops.
pub fn check_term(term: &Term, context: &Context) -> Result<(), ScopeError> {
    match term {
        Term::Immediate { .. } | Term::Allocate { .. } => Ok(()),

        Term::Reference { name } => {
            if context.contains(name) {
                Ok(())
            } else {
                Err(ScopeError::UnboundVariable(name.clone()))
            }
        }

        Term::Let { bindings, body } => {
            let binders: Vec<&Name> = bindings.iter().map(|(name, _)| name).collect();
            let bad = offending_names(&binders, context);
            if !bad.is_empty() {
                return Err(ScopeError::DuplicateBinder(bad));
            }
            // Parallel let: each right-hand side sees only the
            // incoming context, never a sibling binder.
            for (_, value) in bindings {
                check_term(value, context)?;
            }
            check_term(body, &extended(context, binders))
        }

        Term::LetRec { bindings, body } => {
            let binders: Vec<&Name> = bindings.iter().map(|(name, _)| name).collect();
            let bad = offending_names(&binders, context);
            if !bad.is_empty() {
                return Err(ScopeError::DuplicateBinder(bad));
            }
            // Recursive let: all binders are visible to every
            // right-hand side and to the body.
            let inner = extended(context, binders);
            for (_, value) in bindings {
                check_term(value, &inner)?;
            }
            check_term(body, &inner)
        }

        Term::Abstract { parameters, body } => {
            let params: Vec<&Name> = parameters.iter().collect();
            let bad = offending_names(&params, context);
            if !bad.is_empty() {
                return Err(ScopeError::DuplicateParameter(bad));
            }
            check_term(body, &extended(context, parameters))
        }

        Term::Apply { target, arguments } => {
            check_term(target, context)?;
            for argument in arguments {
                check_term(argument, context)?;
            }
            Ok(())
        }

        Term::Primitive { left, right, .. } => {
            check_term(left, context)?;
            check_term(right, context)
        }

        Term::Branch {
            left,
            right,
            consequent,
            otherwise,
            ..
        } => {
            check_term(left, context)?;
            check_term(right, context)?;
            check_term(consequent, context)?;
            check_term(otherwise, context)
        }

        Term::Load { base, .. } => check_term(base, context),

        Term::Store { base, value, .. } => {
            check_term(base, context)?;
            check_term(value, context)
        }

        Term::Begin { effects, value } => {
            for effect in effects {
                check_term(effect, context)?;
            }
            check_term(value, context)
        }
    }
}

/// Check a whole program: its parameter list must not repeat a name,
/// and its body is checked under exactly those parameters.
pub fn check_program(program: &Program) -> Result<(), ScopeError> {
    let params: Vec<&Name> = program.parameters.iter().collect();
    let bad = offending_names(&params, &Context::default());
    if !bad.is_empty() {
        return Err(ScopeError::DuplicateParameter(bad));
    }
    let context: Context = program.parameters.iter().cloned().collect();
    check_term(&program.body, &context)
}
