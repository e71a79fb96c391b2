//! Golf Search - picking the shortest emission
//!
//! A lowered program may still hold `Variants` nodes: equivalent
//! alternatives whose cost is only known once emitted. This crate resolves
//! them per target by measuring, then compares targets with each other.
//!
//! - [`Language`]: everything one target contributes to a compilation
//! - [`resolve`]: greedy innermost-first `Variants` resolution
//! - [`compile_for`] / [`compile_all`]: the per-target pipeline, optionally
//!   run across targets in parallel
//!
//! Both the variant choice and the cross-target choice go through
//! [`shortest`], so ties always go to the first-declared option.

mod error;
mod language;
mod resolve;
mod select;

#[cfg(test)]
mod test_support;

pub use error::TargetError;
pub use language::{Candidate, Language};
pub use resolve::resolve;
pub use select::{compile_all, compile_for, shortest, CompilationReport, TargetOutcome};
