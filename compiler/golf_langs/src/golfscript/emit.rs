//! GolfScript emitter.
//!
//! Operands come before their operator. Loop bodies run inside a mapped
//! block that first stores the loop value (`{:i;...}%`). Bodies of `if` and
//! `while` become `{...}` blocks; a nested block anywhere else runs in
//! place.

use golf_emit::{
    adjust_index, emit_integer_literal, emit_text_literal, tokens, EmitError, Emitter,
    QuotingScheme, TokenTree,
};
use golf_ir::build::is_int_literal;
use golf_ir::stack::ensure_sufficient_stack;
use golf_ir::{Node, NodeKind};
use num_bigint::Sign;

use super::precedence;

const TARGET: &str = "GolfScript";

/// Newlines may appear raw in either form.
const QUOTING: &[QuotingScheme] = &[
    QuotingScheme {
        open: "\"",
        close: "\"",
        escapes: &[('\\', "\\\\"), ('"', "\\\"")],
    },
    QuotingScheme {
        open: "'",
        close: "'",
        escapes: &[('\\', "\\\\"), ('\'', "\\'")],
    },
];

pub struct GolfScriptEmitter;

impl Emitter for GolfScriptEmitter {
    fn emit_program(&self, program: &Node) -> Result<TokenTree, EmitError> {
        match program.kind() {
            NodeKind::Program { body } => statements(body),
            _ => Err(EmitError::unsupported(TARGET, program, "not a program")),
        }
    }
}

/// Statements in sequence, without braces.
fn statements(body: &Node) -> Result<TokenTree, EmitError> {
    match body.kind() {
        NodeKind::Block(children) => Ok(TokenTree::Seq(
            children.iter().map(statement).collect::<Result<_, _>>()?,
        )),
        _ => statement(body),
    }
}

fn is_negative_literal(node: &Node) -> bool {
    matches!(node.kind(), NodeKind::IntegerLiteral(value) if value.sign() == Sign::Minus)
}

/// `n+1`, folded when `n` is a literal.
fn successor(node: &Node) -> Node {
    adjust_index(node, false, true).into_node(&precedence())
}

/// The array a counted loop maps over.
///
/// `high,low>step%` counts up. A negative step counts down from `low` to
/// just above `high`: `low+1,high+1>` is that range in ascending order, and
/// a negative `%` walks it backwards from its last element. Negative
/// `>` operands would count from the end of the array, so literal bounds
/// that would produce one are rejected.
fn range(node: &Node, low: &Node, high: &Node, increment: &Node) -> Result<TokenTree, EmitError> {
    let NodeKind::IntegerLiteral(step) = increment.kind() else {
        return Err(EmitError::unsupported(TARGET, node, "step of unknown sign"));
    };
    let (top, bottom) = match step.sign() {
        Sign::Plus => (high.clone(), low.clone()),
        Sign::Minus => (successor(low), successor(high)),
        Sign::NoSign => return Err(EmitError::unsupported(TARGET, node, "zero step")),
    };
    if is_negative_literal(&bottom) {
        return Err(EmitError::unsupported(TARGET, node, "negative range bound"));
    }
    let bottom = if is_int_literal(&bottom, 0) {
        TokenTree::empty()
    } else {
        tokens![expr(&bottom)?, ">"]
    };
    let step = if is_int_literal(increment, 1) {
        TokenTree::empty()
    } else {
        tokens![expr(increment)?, "%"]
    };
    Ok(tokens![expr(&top)?, ",", bottom, step])
}

/// `{...}`
fn quoted(body: &Node) -> Result<TokenTree, EmitError> {
    Ok(tokens!["{", statements(body)?, "}"])
}

/// `{:v;...}%`
fn mapped(variable: &Node, body: &Node) -> Result<TokenTree, EmitError> {
    Ok(tokens!["{:", expr(variable)?, ";", statements(body)?, "}%"])
}

fn statement(node: &Node) -> Result<TokenTree, EmitError> {
    ensure_sufficient_stack(|| match node.kind() {
        NodeKind::Block(_) => statements(node),
        NodeKind::WhileLoop { condition, body } => {
            Ok(tokens![quoted(condition)?, quoted(body)?, "while"])
        }
        NodeKind::ForRange {
            inclusive: true, ..
        } => Err(EmitError::unsupported(
            TARGET,
            node,
            "ranges exclude their upper bound",
        )),
        NodeKind::ForRange {
            variable,
            low,
            high,
            increment,
            body,
            inclusive: false,
        } => Ok(tokens![range(node, low, high, increment)?, mapped(variable, body)?]),
        NodeKind::ForEach {
            variable,
            collection,
            body,
        } => Ok(tokens![expr(collection)?, mapped(variable, body)?]),
        NodeKind::IfStatement {
            condition,
            consequent,
            alternate,
        } => {
            let alternate = match alternate {
                Some(alternate) => quoted(alternate)?,
                None => TokenTree::text("{}"),
            };
            Ok(tokens![expr(condition)?, quoted(consequent)?, alternate, "if"])
        }
        NodeKind::ImportStatement { name, modules } => {
            let mut tokens = vec![TokenTree::text(name.to_string())];
            tokens.extend(modules.iter().map(|module| TokenTree::text(module.to_string())));
            Ok(TokenTree::Seq(tokens))
        }
        NodeKind::Variants(_) => Err(EmitError::UnresolvedVariants { target: TARGET }),
        NodeKind::ForEachKey { .. } | NodeKind::ForEachPair { .. } | NodeKind::ForCLike { .. } => {
            Err(EmitError::unsupported(TARGET, node, "no GolfScript equivalent"))
        }
        _ => expr(node),
    })
}

fn exprs(nodes: &[Node]) -> Result<TokenTree, EmitError> {
    Ok(TokenTree::Seq(
        nodes.iter().map(expr).collect::<Result<_, _>>()?,
    ))
}

fn expr(node: &Node) -> Result<TokenTree, EmitError> {
    ensure_sufficient_stack(|| match node.kind() {
        NodeKind::Assignment { variable, value } => {
            Ok(tokens![expr(value)?, ":", expr(variable)?, ";"])
        }
        NodeKind::Identifier { name, .. } => Ok(TokenTree::text(name.to_string())),
        NodeKind::IntegerLiteral(value) => Ok(TokenTree::text(emit_integer_literal(value))),
        NodeKind::TextLiteral(value) => emit_text_literal(value, QUOTING)
            .map(TokenTree::text)
            .ok_or_else(|| EmitError::unsupported(TARGET, node, "no quoting scheme")),
        NodeKind::FunctionCall { ident, args } => Ok(tokens![exprs(args)?, expr(ident)?]),
        NodeKind::BinaryOp {
            name, left, right, ..
        } => Ok(tokens![expr(left)?, expr(right)?, name.to_string()]),
        NodeKind::UnaryOp { name, arg, .. } => Ok(tokens![expr(arg)?, name.to_string()]),
        NodeKind::ListConstructor(items) => Ok(tokens!["[", exprs(items)?, "]"]),
        NodeKind::ConditionalOp {
            condition,
            consequent,
            alternate,
        } => Ok(tokens![
            expr(condition)?,
            expr(consequent)?,
            expr(alternate)?,
            "if"
        ]),
        NodeKind::IndexCall {
            one_indexed: true, ..
        }
        | NodeKind::RangeIndexCall {
            one_indexed: true, ..
        } => Err(EmitError::index_convention(TARGET, node, true)),
        NodeKind::IndexCall {
            collection, index, ..
        } => Ok(tokens![expr(collection)?, expr(index)?, "="]),
        NodeKind::RangeIndexCall {
            collection,
            low,
            high,
            step,
            ..
        } => {
            let step = if is_int_literal(step, 1) {
                TokenTree::empty()
            } else {
                tokens![expr(step)?, "%"]
            };
            Ok(tokens![
                expr(collection)?,
                expr(high)?,
                "<",
                expr(low)?,
                ">",
                step
            ])
        }
        NodeKind::Variants(_) => Err(EmitError::UnresolvedVariants { target: TARGET }),
        NodeKind::Operation { op, .. } => Err(EmitError::unsupported(
            TARGET,
            node,
            format!("`{op}` has no GolfScript spelling"),
        )),
        NodeKind::MethodCall { .. } => {
            Err(EmitError::unsupported(TARGET, node, "no methods in GolfScript"))
        }
        NodeKind::Program { .. }
        | NodeKind::Block(_)
        | NodeKind::IfStatement { .. }
        | NodeKind::WhileLoop { .. }
        | NodeKind::ForRange { .. }
        | NodeKind::ForEach { .. }
        | NodeKind::ForEachKey { .. }
        | NodeKind::ForEachPair { .. }
        | NodeKind::ForCLike { .. }
        | NodeKind::ImportStatement { .. } => {
            Err(EmitError::unsupported(TARGET, node, "statement used as an expression"))
        }
    })
}
