//! Golf IR - Intermediate Representation
//!
//! The data model shared by every phase of the golf compiler:
//! - [`Node`] / [`NodeKind`]: the closed set of IR node variants
//! - [`OpCode`]: the canonical operation registry with static arity
//! - [`ValueType`]: the static value-type lattice
//! - [`build`]: node constructors and predicates
//!
//! # Design Philosophy
//!
//! - **Immutable trees**: rewrites return new nodes; untouched subtrees are
//!   shared through `Arc`.
//! - **Structural identity**: `Eq` and `Hash` compare shape, never address.
//! - **Closed variants**: adding a node kind is a compile-time obligation in
//!   every consumer.

pub mod build;
mod node;
mod op;
pub mod stack;
mod types;

pub use node::{Children, Name, Node, NodeKind};
pub use op::{Assoc, OpArity, OpCode};
pub use types::{IntBound, ValueType};
