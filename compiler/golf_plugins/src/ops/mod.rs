//! Operation mapping plugins.
//!
//! Targets describe how canonical operations look in their syntax as plain
//! data: an [`OpTable`] of builders, or a [`PrecedenceTable`] of operator
//! spellings. The plugins here only apply that data.

use golf_emit::{adjust_index, PrecedenceTable};
use golf_ir::build::{assignment, index_call};
use golf_ir::{Node, NodeKind, OpCode};

use crate::engine::{Plugin, VisitContext};

/// Builds the replacement for an operation from its arguments.
pub type OpBuilder = fn(&[Node]) -> Node;

/// Operation codes and their replacements. Earlier entries win.
pub type OpTable = Vec<(OpCode, OpBuilder)>;

/// Replaces every operation listed in its table.
pub struct MapOps {
    name: &'static str,
    table: OpTable,
}

impl MapOps {
    pub fn new(name: &'static str, table: OpTable) -> Self {
        MapOps { name, table }
    }
}

impl Plugin for MapOps {
    fn name(&self) -> &str {
        self.name
    }

    fn visit(&self, node: &Node, _ctx: &VisitContext<'_>) -> Option<Node> {
        let NodeKind::Operation { op, args } = node.kind() else {
            return None;
        };
        let (_, build) = self.table.iter().find(|(code, _)| code == op)?;
        let replacement = build(args);
        Some(match (replacement.annotated_type(), node.annotated_type()) {
            (None, Some(ty)) => replacement.with_type(ty.clone()),
            _ => replacement,
        })
    }
}

/// Lowers operations to operator nodes spelled by `table`.
pub struct MapPrecedenceOps {
    table: PrecedenceTable,
}

pub fn map_precedence_ops(table: PrecedenceTable) -> MapPrecedenceOps {
    MapPrecedenceOps { table }
}

impl Plugin for MapPrecedenceOps {
    fn name(&self) -> &str {
        "map_precedence_ops"
    }

    fn visit(&self, node: &Node, _ctx: &VisitContext<'_>) -> Option<Node> {
        self.table.lower(node)
    }
}

/// Turns collection access operations into index expressions.
///
/// With `one_indexed`, list, array and text indices are shifted up by one
/// here and the result is marked one-indexed. Table keys are never
/// shifted: a table `IndexCall` is marked with the target convention
/// directly.
pub struct UseIndexCalls {
    one_indexed: bool,
}

pub fn use_index_calls(one_indexed: bool) -> UseIndexCalls {
    UseIndexCalls { one_indexed }
}

impl UseIndexCalls {
    fn index(&self, code: OpCode, collection: &Node, index: &Node) -> Node {
        if matches!(code, OpCode::TableGet | OpCode::TableSet) {
            index_call(collection.clone(), index.clone(), self.one_indexed)
        } else if self.one_indexed {
            index_call(collection.clone(), add1(index), true)
        } else {
            index_call(collection.clone(), index.clone(), false)
        }
    }
}

impl Plugin for UseIndexCalls {
    fn name(&self) -> &str {
        "use_index_calls"
    }

    fn visit(&self, node: &Node, _ctx: &VisitContext<'_>) -> Option<Node> {
        let NodeKind::Operation { op, args } = node.kind() else {
            return None;
        };
        match (op, args.as_slice()) {
            (OpCode::ListGet | OpCode::ArrayGet | OpCode::TableGet, [collection, index]) => {
                let call = self.index(*op, collection, index);
                Some(match node.annotated_type() {
                    Some(ty) => call.with_type(ty.clone()),
                    None => call,
                })
            }
            (OpCode::ListSet | OpCode::ArraySet | OpCode::TableSet, [collection, index, value]) => {
                Some(assignment(
                    self.index(*op, collection, index),
                    value.clone(),
                ))
            }
            _ => None,
        }
    }
}

/// `expr + 1`, folded into a literal or an existing constant offset.
pub fn add1(expr: &Node) -> Node {
    adjust_index(expr, false, true).into_node(&PrecedenceTable::default())
}

/// `expr - 1`, folded into a literal or an existing constant offset.
pub fn sub1(expr: &Node) -> Node {
    adjust_index(expr, true, false).into_node(&PrecedenceTable::default())
}

#[cfg(test)]
mod tests;
