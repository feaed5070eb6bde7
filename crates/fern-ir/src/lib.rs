//! Shared intermediate-language definitions for the Fern compiler.
//!
//! The middle of the pipeline moves through a family of structurally
//! similar term languages, each strictly less expressive than the one
//! above it. This crate defines the two levels that the letrec
//! elimination stage connects:
//!
//! - [`core`]: the level that still has recursive local bindings
//!   (`LetRec`) alongside non-recursive parallel `Let`.
//! - [`cell`]: the level below it, where recursion has been compiled
//!   away into explicit heap cells plus indexed `Load`/`Store`.
//!
//! The two grammars are field-for-field isomorphic apart from `LetRec`,
//! so the lowering stage is a structure-preserving rewrite everywhere
//! except at the recursive-binding construct itself.
//!
//! Terms are immutable values: passes take them by reference and build
//! fresh output trees, never mutating input.

use std::fmt;

use serde::Serialize;

pub mod cell;
pub mod core;

/// An identifier bound by a `Program`, `Let`, `LetRec`, or `Abstract`.
pub type Name = String;

/// Binary arithmetic operator carried by a `Primitive` term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PrimOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl fmt::Display for PrimOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{s}")
    }
}

/// Comparison operator carried by a `Branch` term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        };
        write!(f, "{s}")
    }
}
