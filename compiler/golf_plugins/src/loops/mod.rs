//! Loop plugins.

use golf_ir::build::{is_int_literal, is_op, variants};
use golf_ir::stack::ensure_sufficient_stack;
use golf_ir::{Node, NodeKind, OpCode};
use num_bigint::Sign;

use crate::alternatives::offer;
use crate::engine::{Plugin, VisitContext};
use crate::ops::{add1, sub1};

/// Rewrites exclusive range loops `low..high` as inclusive ones, for
/// targets whose counted loops include the upper bound.
///
/// The last value is `high-1` counting up and `high+1` counting down. A
/// loop whose step is not a literal keeps its exclusive form.
pub struct ForRangeToInclusive;

pub fn for_range_to_inclusive() -> ForRangeToInclusive {
    ForRangeToInclusive
}

impl Plugin for ForRangeToInclusive {
    fn name(&self) -> &str {
        "for_range_to_inclusive"
    }

    fn visit(&self, node: &Node, _ctx: &VisitContext<'_>) -> Option<Node> {
        let NodeKind::ForRange {
            variable,
            low,
            high,
            increment,
            body,
            inclusive: false,
        } = node.kind()
        else {
            return None;
        };
        let NodeKind::IntegerLiteral(step) = increment.kind() else {
            return None;
        };
        let high = match step.sign() {
            Sign::Plus => sub1(high),
            Sign::Minus => add1(high),
            Sign::NoSign => return None,
        };
        Some(Node::with_kind_and_type(
            NodeKind::ForRange {
                variable: variable.clone(),
                low: low.clone(),
                high,
                increment: increment.clone(),
                body: body.clone(),
                inclusive: true,
            },
            node.annotated_type().cloned(),
        ))
    }
}

/// Offers a range loop counting one higher when its counter is only ever
/// read as `i+1`: `for i in 0..n { f(i+1) }` as `for i in 1..n+1 { f(i) }`.
///
/// The counter must not appear outside the loop, where its final value
/// would differ.
pub struct ShiftRangeOneUp;

pub fn shift_range_one_up() -> ShiftRangeOneUp {
    ShiftRangeOneUp
}

fn is_counter(node: &Node, variable: &Node) -> bool {
    match (node.kind(), variable.kind()) {
        (
            NodeKind::Identifier {
                name,
                builtin: false,
            },
            NodeKind::Identifier {
                name: counter,
                builtin: false,
            },
        ) => name == counter,
        _ => false,
    }
}

/// `counter + 1` or `1 + counter`.
fn is_successor(node: &Node, variable: &Node) -> bool {
    let NodeKind::Operation { args, .. } = node.kind() else {
        return false;
    };
    is_op(node, OpCode::Add)
        && match args.as_slice() {
            [a, b] => {
                (is_counter(a, variable) && is_int_literal(b, 1))
                    || (is_int_literal(a, 1) && is_counter(b, variable))
            }
            _ => false,
        }
}

fn occurrences(node: &Node, variable: &Node) -> usize {
    if is_counter(node, variable) {
        return 1;
    }
    node.children()
        .iter()
        .map(|child| ensure_sufficient_stack(|| occurrences(child, variable)))
        .sum()
}

/// `node` with each `counter + 1` replaced by the counter, and how many
/// were replaced. `None` if the counter is read any other way.
fn unshift(node: &Node, variable: &Node) -> Option<(Node, usize)> {
    if is_successor(node, variable) {
        return Some((variable.clone(), 1));
    }
    if is_counter(node, variable) {
        return None;
    }
    let mut replaced = 0;
    let mut children = Vec::new();
    for child in node.children().iter() {
        let (child, count) = ensure_sufficient_stack(|| unshift(child, variable))?;
        replaced += count;
        children.push(child);
    }
    if replaced == 0 {
        return Some((node.clone(), 0));
    }
    let rebuilt = match node.kind() {
        NodeKind::Variants(_) => {
            let mut distinct: Vec<Node> = Vec::with_capacity(children.len());
            for child in children {
                if !distinct.contains(&child) {
                    distinct.push(child);
                }
            }
            match distinct.len() {
                1 => distinct.pop()?,
                _ => variants(distinct),
            }
        }
        _ => node.with_children(children),
    };
    Some((rebuilt, replaced))
}

fn shifted(node: &Node) -> Option<Node> {
    let NodeKind::ForRange {
        variable,
        low,
        high,
        increment,
        body,
        inclusive,
    } = node.kind()
    else {
        return None;
    };
    let (body, replaced) = unshift(body, variable)?;
    if replaced == 0 {
        return None;
    }
    // `(i+1)+1` would shift again on the next pass.
    if unshift(&body, variable).is_some_and(|(_, again)| again > 0) {
        return None;
    }
    Some(Node::with_kind_and_type(
        NodeKind::ForRange {
            variable: variable.clone(),
            low: add1(low),
            high: add1(high),
            increment: increment.clone(),
            body,
            inclusive: *inclusive,
        },
        node.annotated_type().cloned(),
    ))
}

impl Plugin for ShiftRangeOneUp {
    fn name(&self) -> &str {
        "shift_range_one_up"
    }

    fn visit(&self, node: &Node, ctx: &VisitContext<'_>) -> Option<Node> {
        let root = ctx.ancestors().last().unwrap_or(node);
        offer(node, ctx, |candidate| {
            let NodeKind::ForRange { variable, .. } = candidate.kind() else {
                return None;
            };
            if occurrences(root, variable) != occurrences(node, variable) {
                return None;
            }
            shifted(candidate)
        })
    }
}

#[cfg(test)]
mod tests;
