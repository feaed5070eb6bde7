//! The cell IR: the level directly below the core IR.
//!
//! Recursion is gone. The only binding forms left are parallel `Let`
//! and `Abstract` parameters; recursive definitions from the level
//! above arrive here as one-slot heap cells populated by explicit
//! `Store`s and dereferenced by explicit `Load`s. Every other
//! construct mirrors the core grammar field for field.

use serde::Serialize;

use crate::{CmpOp, Name, PrimOp};

/// A cell-IR term. Identical to the core grammar minus `LetRec`.
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

/// A whole program at the cell level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    pub parameters: Vec<Name>,
    pub body: Term,
}
