//! Operator precedence.
//!
//! A [`PrecedenceTable`] is per-target data: tiers from loosest to tightest
//! binding, each either a binary tier with one associativity or a prefix
//! tier. Lowered `BinaryOp`/`UnaryOp` nodes carry their tier number, so
//! parenthesization needs only the two nodes involved.
//!
//! Tier numbers start at 1. 0 is the binding of a conditional expression,
//! which is looser than every operator.

use golf_ir::build::{binary_op, unary_op};
use golf_ir::{Assoc, Node, NodeKind, OpCode};

use crate::token::TokenTree;

/// One row of a precedence table.
#[derive(Clone, Debug)]
pub enum Tier {
    Binary(Assoc, Vec<(OpCode, &'static str)>),
    Prefix(Vec<(OpCode, &'static str)>),
}

/// How a target spells one operation.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct OperatorSpec {
    pub op: OpCode,
    pub spelling: &'static str,
    pub precedence: u8,
    pub assoc: Assoc,
}

#[derive(Clone, Debug, Default)]
pub struct PrecedenceTable {
    binary: Vec<OperatorSpec>,
    prefix: Vec<OperatorSpec>,
}

impl PrecedenceTable {
    /// Build from tiers listed loosest first.
    pub fn new(tiers: impl IntoIterator<Item = Tier>) -> Self {
        let mut table = PrecedenceTable::default();
        for (precedence, tier) in (1u8..).zip(tiers) {
            match tier {
                Tier::Binary(assoc, ops) => {
                    table
                        .binary
                        .extend(ops.into_iter().map(|(op, spelling)| OperatorSpec {
                            op,
                            spelling,
                            precedence,
                            assoc,
                        }));
                }
                Tier::Prefix(ops) => {
                    table
                        .prefix
                        .extend(ops.into_iter().map(|(op, spelling)| OperatorSpec {
                            op,
                            spelling,
                            precedence,
                            assoc: Assoc::Right,
                        }));
                }
            }
        }
        table
    }

    /// Infix operators, loosest tier first.
    pub fn binary_ops(&self) -> impl Iterator<Item = &OperatorSpec> {
        self.binary.iter()
    }

    /// Prefix operators, loosest tier first.
    pub fn prefix_ops(&self) -> impl Iterator<Item = &OperatorSpec> {
        self.prefix.iter()
    }

    pub fn binary(&self, op: OpCode) -> Option<&OperatorSpec> {
        self.binary_ops().find(|spec| spec.op == op)
    }

    pub fn prefix(&self, op: OpCode) -> Option<&OperatorSpec> {
        self.prefix_ops().find(|spec| spec.op == op)
    }

    /// The first operation spelled `spelling`; later ones sharing it are
    /// never returned.
    pub fn binary_by_spelling(&self, spelling: &str) -> Option<&OperatorSpec> {
        self.binary_ops().find(|spec| spec.spelling == spelling)
    }

    pub fn prefix_by_spelling(&self, spelling: &str) -> Option<&OperatorSpec> {
        self.prefix_ops().find(|spec| spec.spelling == spelling)
    }

    /// Lower an `Operation` this table can spell into an operator node.
    ///
    /// Returns `None` for any other node.
    pub fn lower(&self, node: &Node) -> Option<Node> {
        let NodeKind::Operation { op, args } = node.kind() else {
            return None;
        };
        let lowered = match args.as_slice() {
            [left, right] => {
                let spec = self.binary(*op)?;
                binary_op(
                    spec.op,
                    spec.spelling,
                    spec.precedence,
                    spec.assoc,
                    left.clone(),
                    right.clone(),
                )
            }
            [arg] => {
                let spec = self.prefix(*op)?;
                unary_op(spec.op, spec.spelling, spec.precedence, arg.clone())
            }
            _ => return None,
        };
        Some(match node.annotated_type() {
            Some(ty) => lowered.with_type(ty.clone()),
            None => lowered,
        })
    }
}

/// Where an operand sits relative to its parent operator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OperandSide {
    Left,
    Right,
    /// The operand of a prefix operator.
    Prefix,
}

/// Precedence and associativity of an operator-like node.
///
/// `None` for atoms (literals, identifiers, calls), which never need
/// parentheses.
pub fn binding(node: &Node) -> Option<(u8, Assoc)> {
    match node.kind() {
        NodeKind::BinaryOp {
            precedence, assoc, ..
        } => Some((*precedence, *assoc)),
        NodeKind::UnaryOp { precedence, .. } => Some((*precedence, Assoc::Right)),
        NodeKind::ConditionalOp { .. } => Some((0, Assoc::Right)),
        _ => None,
    }
}

/// Whether `child` must be parenthesized as the `side` operand of `parent`.
///
/// Only when the child binds strictly looser, or equally on the side that
/// associativity does not group.
pub fn needs_parens(child: &Node, parent: &Node, side: OperandSide) -> bool {
    let (Some((child_prec, _)), Some((parent_prec, parent_assoc))) =
        (binding(child), binding(parent))
    else {
        return false;
    };
    if child_prec != parent_prec {
        return child_prec < parent_prec;
    }
    match side {
        OperandSide::Left => parent_assoc != Assoc::Left,
        OperandSide::Right => parent_assoc != Assoc::Right,
        OperandSide::Prefix => false,
    }
}

/// `tokens` for `child`, parenthesized if [`needs_parens`] says so.
pub fn wrap(tokens: TokenTree, child: &Node, parent: &Node, side: OperandSide) -> TokenTree {
    if needs_parens(child, parent, side) {
        TokenTree::Seq(vec![TokenTree::text("("), tokens, TokenTree::text(")")])
    } else {
        tokens
    }
}

#[cfg(test)]
mod tests;
