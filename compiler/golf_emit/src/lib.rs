//! Golf Emit - target-independent emission machinery
//!
//! Everything an emitter needs that is not specific to one language:
//!
//! - [`token`]: nested token trees and the join policy that flattens them
//! - [`precedence`]: operator tiers and parenthesization
//! - [`literal`]: cheapest text and integer literal encodings
//! - [`index`]: conversion between zero- and one-indexed access
//!
//! A target implements [`Emitter`]; the output is a [`TokenTree`] whose
//! flattened length is what the search minimizes.

mod emitter;
mod error;
pub mod index;
pub mod literal;
pub mod precedence;
pub mod token;

pub use emitter::Emitter;
pub use error::EmitError;
pub use index::{adjust_index, IndexAdjustment};
pub use literal::{emit_integer_literal, emit_text_literal, IntegerRange, QuotingScheme};
pub use precedence::{needs_parens, OperandSide, OperatorSpec, PrecedenceTable, Tier};
pub use token::{JoinPolicy, TokenTree};
