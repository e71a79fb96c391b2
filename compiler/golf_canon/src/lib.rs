//! Golf Canon - Frontend of the golf compiler
//!
//! Turns source text into a canonical IR `Program`:
//!
//! ```text
//! source ──read──▶ [CallTree] ──lower──▶ Program
//! ```
//!
//! # Canonical Form
//!
//! Lowering is the only place arity is checked. After it:
//! - operator symbols are replaced by canonical operation codes
//! - n-ary foldable operations are left-folded into binary ones
//! - `for`, `if` and `while` are statements, not applications
//! - every user callee is a `FunctionCall`
//!
//! # Errors
//!
//! Reading fails with [`ReadError`], lowering with [`LoweringError`]; both
//! are fatal and both convert into [`FrontendError`].

mod error;
mod lower;
pub mod read;
mod tree;
mod types;

pub use error::{ArityRange, FrontendError, LoweringError, ReadError};
pub use lower::{canonical_op, compose, lower_program, lower_tree, sexpr};
pub use tree::{CallTree, RangeBound, TypeTree};
pub use types::{annotate, integer_type, lower_type, type_sexpr, TypeValue};

use golf_ir::Node;

/// Read and lower `source` into a `Program`.
pub fn parse_program(source: &str) -> Result<Node, FrontendError> {
    let trees = read::read(source)?;
    Ok(lower_program(&trees)?)
}
