//! The core IR: the last level of the pipeline that still has
//! recursive local bindings.
//!
//! `Let` binds in parallel (no right-hand side sees any binder of the
//! same group); `LetRec` makes every binder of the group visible to
//! every right-hand side and to the body. Heap operations (`Allocate`,
//! `Load`, `Store`) already exist at this level so that lower stages
//! share one vocabulary for memory, but nothing at this level forces
//! their use.

use serde::Serialize;

use crate::{CmpOp, Name, PrimOp};

/// A core-IR term.
///
/// The variant set is closed: every pass over this grammar dispatches
/// with an exhaustive `match` so that adding a variant is a compile
/// error at each dispatch site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Term {
    /// A literal constant.
    Immediate { value: i64 },
    /// A variable use.
    Reference { name: Name },
    /// Non-recursive parallel binding.
    Let {
        bindings: Vec<(Name, Term)>,
        body: Box<Term>,
    },
    /// Recursive, mutually-visible binding.
    LetRec {
        bindings: Vec<(Name, Term)>,
        body: Box<Term>,
    },
    /// A function literal.
    Abstract {
        parameters: Vec<Name>,
        body: Box<Term>,
    },
    /// A function call.
    Apply {
        target: Box<Term>,
        arguments: Vec<Term>,
    },
    /// A binary primitive operation.
    Primitive {
        operator: PrimOp,
        left: Box<Term>,
        right: Box<Term>,
    },
    /// A conditional comparing `left` and `right`, selecting
    /// `consequent` or `otherwise`.
    Branch {
        operator: CmpOp,
        left: Box<Term>,
        right: Box<Term>,
        consequent: Box<Term>,
        otherwise: Box<Term>,
    },
    /// Request for a heap block of `count` slots.
    Allocate { count: usize },
    /// Read slot `index` of the block `base` evaluates to.
    Load { base: Box<Term>, index: usize },
    /// Write `value` into slot `index` of the block `base` evaluates to.
    Store {
        base: Box<Term>,
        index: usize,
        value: Box<Term>,
    },
    /// Sequence `effects` for effect, evaluate to `value`.
    Begin { effects: Vec<Term>, value: Box<Term> },
}

/// A whole program at the core level: top-level formal parameters plus
/// a body term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    pub parameters: Vec<Name>,
    pub body: Term,
}
