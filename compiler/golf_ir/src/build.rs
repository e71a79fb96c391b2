//! Node constructors and small predicates.
//!
//! Plugins and emitters build replacement nodes through these functions
//! rather than spelling out `NodeKind` literals.

use num_bigint::BigInt;

use crate::node::{Name, Node, NodeKind};
use crate::op::{Assoc, OpCode};

pub fn int(value: impl Into<BigInt>) -> Node {
    Node::new(NodeKind::IntegerLiteral(value.into()))
}

pub fn text(value: impl Into<String>) -> Node {
    Node::new(NodeKind::TextLiteral(value.into()))
}

/// A user-level identifier (subject to renaming).
pub fn ident(name: &str) -> Node {
    Node::new(NodeKind::Identifier {
        name: Name::from(name),
        builtin: false,
    })
}

/// A target builtin reference, emitted verbatim.
pub fn builtin(name: &str) -> Node {
    Node::new(NodeKind::Identifier {
        name: Name::from(name),
        builtin: true,
    })
}

pub fn op(op: OpCode, args: Vec<Node>) -> Node {
    Node::new(NodeKind::Operation { op, args })
}

pub fn block(children: Vec<Node>) -> Node {
    Node::new(NodeKind::Block(children))
}

/// The program root. A non-block body is wrapped in a one-statement block.
pub fn program(body: Node) -> Node {
    let body = match body.kind() {
        NodeKind::Block(_) => body,
        _ => block(vec![body]),
    };
    Node::new(NodeKind::Program { body })
}

pub fn assignment(variable: Node, value: Node) -> Node {
    Node::new(NodeKind::Assignment { variable, value })
}

pub fn function_call(ident: Node, args: Vec<Node>) -> Node {
    Node::new(NodeKind::FunctionCall { ident, args })
}

/// Call of a target builtin function by name.
pub fn builtin_call(name: &str, args: Vec<Node>) -> Node {
    function_call(builtin(name), args)
}

pub fn method_call(object: Node, name: &str, args: Vec<Node>) -> Node {
    Node::new(NodeKind::MethodCall {
        object,
        ident: builtin(name),
        args,
    })
}

pub fn binary_op(
    op: OpCode,
    name: &str,
    precedence: u8,
    assoc: Assoc,
    left: Node,
    right: Node,
) -> Node {
    Node::new(NodeKind::BinaryOp {
        op,
        name: Name::from(name),
        precedence,
        assoc,
        left,
        right,
    })
}

pub fn unary_op(op: OpCode, name: &str, precedence: u8, arg: Node) -> Node {
    Node::new(NodeKind::UnaryOp {
        op,
        name: Name::from(name),
        precedence,
        arg,
    })
}

pub fn conditional(condition: Node, consequent: Node, alternate: Node) -> Node {
    Node::new(NodeKind::ConditionalOp {
        condition,
        consequent,
        alternate,
    })
}

pub fn list(items: Vec<Node>) -> Node {
    Node::new(NodeKind::ListConstructor(items))
}

pub fn index_call(collection: Node, index: Node, one_indexed: bool) -> Node {
    Node::new(NodeKind::IndexCall {
        collection,
        index,
        one_indexed,
    })
}

pub fn range_index_call(
    collection: Node,
    low: Node,
    high: Node,
    step: Node,
    one_indexed: bool,
) -> Node {
    Node::new(NodeKind::RangeIndexCall {
        collection,
        low,
        high,
        step,
        one_indexed,
    })
}

pub fn if_statement(condition: Node, consequent: Node, alternate: Option<Node>) -> Node {
    Node::new(NodeKind::IfStatement {
        condition,
        consequent,
        alternate,
    })
}

pub fn while_loop(condition: Node, body: Node) -> Node {
    Node::new(NodeKind::WhileLoop { condition, body })
}

/// An exclusive counted loop.
pub fn for_range(variable: Node, low: Node, high: Node, increment: Node, body: Node) -> Node {
    Node::new(NodeKind::ForRange {
        variable,
        low,
        high,
        increment,
        body,
        inclusive: false,
    })
}

pub fn for_each(variable: Node, collection: Node, body: Node) -> Node {
    Node::new(NodeKind::ForEach {
        variable,
        collection,
        body,
    })
}

/// A set of equivalent alternatives.
///
/// An alternative that is itself a `Variants` is spliced in, so no
/// `Variants` ever directly holds another.
pub fn variants(alternatives: Vec<Node>) -> Node {
    let mut flat = Vec::with_capacity(alternatives.len());
    for alternative in alternatives {
        match alternative.kind() {
            NodeKind::Variants(inner) => flat.extend(inner.iter().cloned()),
            _ => flat.push(alternative),
        }
    }
    Node::new(NodeKind::Variants(flat))
}

/// The value of an integer literal.
pub fn int_value(node: &Node) -> Option<&BigInt> {
    match node.kind() {
        NodeKind::IntegerLiteral(value) => Some(value),
        _ => None,
    }
}

/// Whether `node` is the integer literal `n`.
pub fn is_int_literal(node: &Node, n: i64) -> bool {
    int_value(node).is_some_and(|value| *value == BigInt::from(n))
}

pub fn text_value(node: &Node) -> Option<&str> {
    match node.kind() {
        NodeKind::TextLiteral(value) => Some(value),
        _ => None,
    }
}

pub fn is_text_literal(node: &Node) -> bool {
    text_value(node).is_some()
}

/// Whether `node` is an unlowered `Operation` with code `code`.
pub fn is_op(node: &Node, code: OpCode) -> bool {
    matches!(node.kind(), NodeKind::Operation { op, .. } if *op == code)
}
