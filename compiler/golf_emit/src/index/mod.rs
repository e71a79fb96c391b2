//! Index convention conversion.
//!
//! IR index expressions remember whether they count from zero or from one;
//! a target that counts the other way gets the index shifted at emission.

use golf_ir::build::{int, op};
use golf_ir::{Node, NodeKind, OpCode};
use num_bigint::BigInt;
use num_traits::Zero;

use crate::precedence::PrecedenceTable;

/// The index expression a target should emit.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum IndexAdjustment {
    /// Conventions already agree.
    Unchanged(Node),
    /// A literal index, shifted at compile time.
    Literal(BigInt),
    /// `index + delta` computed at run time.
    Offset { index: Node, delta: i64 },
}

/// Convert `index` from one convention to the other.
///
/// `3` one-indexed becomes `2` zero-indexed; the reverse adds one. An index
/// that is already `e + k` has `k` adjusted instead of growing a new term.
pub fn adjust_index(index: &Node, from_one_indexed: bool, to_one_indexed: bool) -> IndexAdjustment {
    let delta: i64 = match (from_one_indexed, to_one_indexed) {
        (false, true) => 1,
        (true, false) => -1,
        _ => return IndexAdjustment::Unchanged(index.clone()),
    };
    if let NodeKind::IntegerLiteral(value) = index.kind() {
        return IndexAdjustment::Literal(value + delta);
    }
    if let Some((base, k)) = split_constant_offset(index) {
        let k = k + delta;
        return if k.is_zero() {
            IndexAdjustment::Unchanged(base)
        } else {
            match i64::try_from(&k) {
                Ok(k) => IndexAdjustment::Offset { index: base, delta: k },
                Err(_) => IndexAdjustment::Offset {
                    index: index.clone(),
                    delta,
                },
            }
        };
    }
    IndexAdjustment::Offset {
        index: index.clone(),
        delta,
    }
}

/// `e + k` or `e - k` with a literal `k`, as `(e, ±k)`.
fn split_constant_offset(node: &Node) -> Option<(Node, BigInt)> {
    let (code, left, right) = match node.kind() {
        NodeKind::Operation { op, args } if args.len() == 2 => (*op, &args[0], &args[1]),
        NodeKind::BinaryOp {
            op, left, right, ..
        } => (*op, left, right),
        _ => return None,
    };
    let NodeKind::IntegerLiteral(k) = right.kind() else {
        return None;
    };
    match code {
        OpCode::Add => Some((left.clone(), k.clone())),
        OpCode::Sub => Some((left.clone(), -k)),
        _ => None,
    }
}

impl IndexAdjustment {
    /// The adjusted index as a node, spelled with `table` when it has the
    /// needed operator.
    pub fn into_node(self, table: &PrecedenceTable) -> Node {
        match self {
            IndexAdjustment::Unchanged(node) => node,
            IndexAdjustment::Literal(value) => int(value),
            IndexAdjustment::Offset { index, delta } => {
                let (code, amount) = if delta < 0 {
                    (OpCode::Sub, delta.unsigned_abs())
                } else {
                    (OpCode::Add, delta.unsigned_abs())
                };
                let raw = op(code, vec![index, int(amount)]);
                table.lower(&raw).unwrap_or(raw)
            }
        }
    }
}
