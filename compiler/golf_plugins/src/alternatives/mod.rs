//! Plugins that offer equivalent forms instead of committing to one.
//!
//! Which spelling is shortest depends on the target, so these plugins wrap
//! a node as `Variants[node, rewritten]` and leave the choice to variant
//! resolution. Ties go to the first alternative, so a rewrite only wins
//! where it is strictly shorter.
//!
//! A `Variants` node collects the rewrites of its own alternatives; the
//! alternatives themselves are never wrapped again. Every rewrite here
//! reaches a finite closure, so stages still reach a fixpoint.

use golf_ir::build::{int, int_value, variants};
use golf_ir::{IntBound, Node, NodeKind, OpCode, ValueType};

use crate::engine::{Plugin, VisitContext};

/// Offer `rewrite(node)` as an alternative to `node`.
///
/// On a `Variants` node, drops repeated alternatives and appends the
/// rewrite of each alternative not already present.
pub(crate) fn offer(
    node: &Node,
    ctx: &VisitContext<'_>,
    rewrite: impl Fn(&Node) -> Option<Node>,
) -> Option<Node> {
    if let NodeKind::Variants(alternatives) = node.kind() {
        let mut grown: Vec<Node> = Vec::with_capacity(alternatives.len() + 1);
        for alternative in alternatives {
            if !grown.contains(alternative) {
                grown.push(alternative.clone());
            }
        }
        for alternative in alternatives {
            if let Some(rewritten) = rewrite(alternative) {
                if !grown.contains(&rewritten) {
                    grown.push(rewritten);
                }
            }
        }
        if grown.iter().eq(alternatives.iter()) {
            return None;
        }
        return match grown.len() {
            1 => grown.pop(),
            _ => Some(variants(grown)),
        };
    }
    if matches!(ctx.parent().map(Node::kind), Some(NodeKind::Variants(_))) {
        return None;
    }
    let rewritten = rewrite(node)?;
    (rewritten != *node).then(|| variants(vec![node.clone(), rewritten]))
}

/// Whether evaluating `node` may print, mutate or call user code.
pub(crate) fn has_side_effects(node: &Node) -> bool {
    node.find_path(&|node| match node.kind() {
        NodeKind::Operation { op, .. } => op.has_side_effects(),
        NodeKind::Assignment { .. }
        | NodeKind::FunctionCall { .. }
        | NodeKind::MethodCall { .. } => true,
        _ => false,
    })
    .is_some()
}

fn operation(code: OpCode, args: Vec<Node>, like: &Node) -> Node {
    Node::with_kind_and_type(
        NodeKind::Operation { op: code, args },
        like.annotated_type().cloned(),
    )
}

/// Offers `b op a` for `a op b`, mirroring comparisons (`a<b` as `b>a`).
///
/// Operands with side effects keep their order.
pub struct FlipBinaryOps;

pub fn flip_binary_ops() -> FlipBinaryOps {
    FlipBinaryOps
}

fn flipped(node: &Node) -> Option<Node> {
    let NodeKind::Operation { op: code, args } = node.kind() else {
        return None;
    };
    let [left, right] = args.as_slice() else {
        return None;
    };
    let mirrored = code.mirrored()?;
    if has_side_effects(left) || has_side_effects(right) {
        return None;
    }
    Some(operation(mirrored, vec![right.clone(), left.clone()], node))
}

impl Plugin for FlipBinaryOps {
    fn name(&self) -> &str {
        "flip_binary_ops"
    }

    fn visit(&self, node: &Node, ctx: &VisitContext<'_>) -> Option<Node> {
        offer(node, ctx, flipped)
    }
}

/// Offers a strict comparison for an equality test against the end of an
/// annotated integer range.
///
/// With `x` in `0..10`: `x==10` as `x>9`, `x==0` as `x<1`, `x!=10` as
/// `x<10` and `x!=0` as `x>0`.
pub struct EqualityToInequality;

pub fn equality_to_inequality() -> EqualityToInequality {
    EqualityToInequality
}

fn inequality(node: &Node) -> Option<Node> {
    let NodeKind::Operation { op: code, args } = node.kind() else {
        return None;
    };
    if !matches!(code, OpCode::Eq | OpCode::Neq) {
        return None;
    }
    let [left, right] = args.as_slice() else {
        return None;
    };
    let (subject, value, literal_first) = match (int_value(left), int_value(right)) {
        (None, Some(value)) => (left, value, false),
        (Some(value), None) => (right, value, true),
        _ => return None,
    };
    let Some(ValueType::Integer { low, high }) = subject.annotated_type() else {
        return None;
    };
    let at_low = *low == IntBound::Finite(value.clone());
    let at_high = *high == IntBound::Finite(value.clone());
    let (test, bound) = match (*code, at_low, at_high) {
        (OpCode::Eq, _, true) => (OpCode::Gt, value - 1u32),
        (OpCode::Eq, true, false) => (OpCode::Lt, value + 1u32),
        (OpCode::Neq, _, true) => (OpCode::Lt, value.clone()),
        (OpCode::Neq, true, false) => (OpCode::Gt, value.clone()),
        _ => return None,
    };
    Some(if literal_first {
        operation(test.mirrored()?, vec![int(bound), subject.clone()], node)
    } else {
        operation(test, vec![subject.clone(), int(bound)], node)
    })
}

impl Plugin for EqualityToInequality {
    fn name(&self) -> &str {
        "equality_to_inequality"
    }

    fn visit(&self, node: &Node, ctx: &VisitContext<'_>) -> Option<Node> {
        offer(node, ctx, inequality)
    }
}
