//! Core-to-cell lowering: letrec elimination.
//!
//! A `letrec x = v in b` cannot survive into the cell IR, which has no
//! recursive binding form. The rewrite gives every recursive binder an
//! address before its value exists:
//!
//! ```text
//! letrec x = v in b
//!   =>  let x = allocate(1) in begin { store(x[0], v'); b' }
//! ```
//!
//! where `v'` and `b'` are lowered with `x` marked recursive, so every
//! `reference(x)` inside them becomes `load(x[0])`. The two phases are
//! strictly ordered and never interleaved per binder: all cells of a
//! group are allocated first (one `Let`), then all of them are
//! populated (the `Begin` effects, in binding order), then the body
//! runs. That ordering is what makes forward and mutual references
//! within one group resolve to a valid, populated cell regardless of
//! declaration order.
//!
//! The transform assumes its input passed the scope checker; in
//! particular, no binder shadows a recursive name, so the recursive
//! name set only ever grows along a path from the root.

use rustc_hash::FxHashSet;

use fern_ir::{cell, core, Name};

/// Identifiers currently bound by an enclosing, not-yet-translated
/// `LetRec` — i.e. names that must be dereferenced through their cell.
pub type RecNames = FxHashSet<Name>;

/// Lower one core term to a cell term.
///
/// Total over scope-checked input: every variant has a rewrite and the
/// `match` is exhaustive, so an unhandled term shape is a compile
/// error here rather than a runtime one.
pub fn eliminate_letrec_term(term: &core::Term, recursive: &RecNames) -> cell::Term {
    match term {
        core::Term::Immediate { value } => cell::Term::Immediate { value: *value },

        core::Term::Reference { name } => {
            // A recursive name denotes its cell, not its value.
            if recursive.contains(name) {
                cell::Term::Load {
                    base: Box::new(cell::Term::Reference { name: name.clone() }),
                    index: 0,
                }
            } else {
                cell::Term::Reference { name: name.clone() }
            }
        }

        core::Term::Let { bindings, body } => cell::Term::Let {
            // Parallel let introduces nothing recursive; right-hand
            // sides and body lower under the same name set.
            bindings: bindings
                .iter()
                .map(|(name, value)| (name.clone(), eliminate_letrec_term(value, recursive)))
                .collect(),
            body: Box::new(eliminate_letrec_term(body, recursive)),
        },

        core::Term::LetRec { bindings, body } => {
            let mut inner = recursive.clone();
            inner.extend(bindings.iter().map(|(name, _)| name.clone()));

            // Phase 1: one one-slot cell per binder, bound under the
            // binder's own name.
            let alloc_bindings: Vec<(Name, cell::Term)> = bindings
                .iter()
                .map(|(name, _)| (name.clone(), cell::Term::Allocate { count: 1 }))
                .collect();

            // Phase 2: populate every cell, in binding order. The
            // right-hand sides lower under the extended name set so
            // self- and mutual references hit the fresh cells.
            let effects: Vec<cell::Term> = bindings
                .iter()
                .map(|(name, value)| cell::Term::Store {
                    base: Box::new(cell::Term::Reference { name: name.clone() }),
                    index: 0,
                    value: Box::new(eliminate_letrec_term(value, &inner)),
                })
                .collect();

            cell::Term::Let {
                bindings: alloc_bindings,
                body: Box::new(cell::Term::Begin {
                    effects,
                    value: Box::new(eliminate_letrec_term(body, &inner)),
                }),
            }
        }

        core::Term::Abstract { parameters, body } => cell::Term::Abstract {
            parameters: parameters.clone(),
            body: Box::new(eliminate_letrec_term(body, recursive)),
        },

        core::Term::Apply { target, arguments } => cell::Term::Apply {
            target: Box::new(eliminate_letrec_term(target, recursive)),
            arguments: arguments
                .iter()
                .map(|argument| eliminate_letrec_term(argument, recursive))
                .collect(),
        },

        core::Term::Primitive {
            operator,
            left,
            right,
        } => cell::Term::Primitive {
            operator: *operator,
            left: Box::new(eliminate_letrec_term(left, recursive)),
            right: Box::new(eliminate_letrec_term(right, recursive)),
        },

        core::Term::Branch {
            operator,
            left,
            right,
            consequent,
            otherwise,
        } => cell::Term::Branch {
            operator: *operator,
            left: Box::new(eliminate_letrec_term(left, recursive)),
            right: Box::new(eliminate_letrec_term(right, recursive)),
            consequent: Box::new(eliminate_letrec_term(consequent, recursive)),
            otherwise: Box::new(eliminate_letrec_term(otherwise, recursive)),
        },

        core::Term::Allocate { count } => cell::Term::Allocate { count: *count },

        core::Term::Load { base, index } => cell::Term::Load {
            base: Box::new(eliminate_letrec_term(base, recursive)),
            index: *index,
        },

        core::Term::Store { base, index, value } => cell::Term::Store {
            base: Box::new(eliminate_letrec_term(base, recursive)),
            index: *index,
            value: Box::new(eliminate_letrec_term(value, recursive)),
        },

        core::Term::Begin { effects, value } => cell::Term::Begin {
            effects: effects
                .iter()
                .map(|effect| eliminate_letrec_term(effect, recursive))
                .collect(),
            value: Box::new(eliminate_letrec_term(value, recursive)),
        },
    }
}

/// Lower a whole program. A top-level program starts with no recursive
/// names in scope.
pub fn eliminate_letrec_program(program: &core::Program) -> cell::Program {
    cell::Program {
        parameters: program.parameters.clone(),
        body: eliminate_letrec_term(&program.body, &RecNames::default()),
    }
}
