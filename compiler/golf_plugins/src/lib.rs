//! Golf Plugins - rewrite engine of the golf compiler
//!
//! A [`Plugin`] proposes a replacement for one node or declines. A stage is
//! an ordered plugin list run over the whole program until no plugin
//! proposes anything.
//!
//! # Stages
//!
//! ```text
//! Program ──GolfStage──▶ Golfed ──EmitStage──▶ Lowered ──FinalEmitStage──▶ Finalized
//! ```
//!
//! The wrappers make the order a type error to get wrong: an
//! [`EmitStage`] only accepts [`Golfed`], a [`FinalEmitStage`] only
//! [`Lowered`].
//!
//! # Library
//!
//! - [`alternatives`]: `flip_binary_ops`, `equality_to_inequality`
//! - [`print`]: `golf_last_print`, `println_to_print`
//! - [`ops`]: table-driven op mapping, precedence lowering, index calls
//! - [`static_eval`]: constant folding of literal operations
//! - [`loops`]: exclusive to inclusive range loops, shifted loop counters
//! - [`idents`]: shortest identifier renaming

pub mod alternatives;
mod engine;
mod error;
pub mod idents;
pub mod loops;
pub mod ops;
pub mod print;
pub mod static_eval;

pub use engine::{
    run_to_fixpoint, EmitStage, FinalEmitStage, Finalized, GolfStage, Golfed, Lowered, Plugin,
    VisitContext, MAX_PASSES,
};
pub use error::StageError;
