//! The target emitter seam.

use golf_ir::Node;

use crate::error::EmitError;
use crate::token::TokenTree;

/// Turns a fully lowered `Program` into target tokens.
///
/// Emitters are pure: the same program always yields the same tree. Any
/// node the target cannot express is an [`EmitError`], never a panic.
pub trait Emitter: Send + Sync {
    fn emit_program(&self, program: &Node) -> Result<TokenTree, EmitError>;
}
