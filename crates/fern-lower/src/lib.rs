//! Letrec elimination: lowers the Fern core IR to the cell IR.
//!
//! This is one stage of the lowering pipeline. Its input still has
//! recursive local bindings (`LetRec`); its output has only
//! non-recursive parallel `Let`, explicit heap cells, and explicit
//! `Load`/`Store`. Later stages (closure conversion onward) consume
//! the cell IR and never see recursion again.
//!
//! [`lower_program`] is the stage entry the driver calls: it runs the
//! scope checker and rewrites only programs the checker accepts, so a
//! rejected program never yields a partial output term. The raw
//! rewrite is also exported for callers that have already checked.

mod letrec;

pub use letrec::{eliminate_letrec_program, eliminate_letrec_term, RecNames};

use fern_ir::{cell, core};
use fern_scope::{check_program, ScopeError};

/// Check a program's binding structure, then eliminate its letrecs.
///
/// Returns the checker's diagnostic unchanged if the program is
/// rejected; otherwise the lowered program, which contains no
/// recursive binding anywhere in its tree.
pub fn lower_program(program: &core::Program) -> Result<cell::Program, ScopeError> {
    check_program(program)?;
    Ok(eliminate_letrec_program(program))
}
