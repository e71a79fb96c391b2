//! Constant folding.
//!
//! Folds operations whose arguments are all literals:
//! - integer `add`, `sub`, `mul` and `neg`
//! - text `concat`
//!
//! Integers are unbounded here. A target with bounded integers rejects an
//! oversized folded literal at emission rather than wrapping it.

use golf_ir::build::{int, text};
use golf_ir::{Node, NodeKind, OpCode};
use num_bigint::BigInt;

use crate::engine::{Plugin, VisitContext};

pub struct EvalStaticExpr;

pub fn eval_static_expr() -> EvalStaticExpr {
    EvalStaticExpr
}

fn int_args(args: &[Node]) -> Option<Vec<&BigInt>> {
    args.iter()
        .map(|arg| match arg.kind() {
            NodeKind::IntegerLiteral(value) => Some(value),
            _ => None,
        })
        .collect()
}

fn text_args(args: &[Node]) -> Option<Vec<&str>> {
    args.iter()
        .map(|arg| match arg.kind() {
            NodeKind::TextLiteral(value) => Some(value.as_str()),
            _ => None,
        })
        .collect()
}

/// The literal an operation evaluates to, if it is static.
pub fn fold(code: OpCode, args: &[Node]) -> Option<Node> {
    match code {
        OpCode::Add => {
            let values = int_args(args)?;
            Some(int(values.into_iter().sum::<BigInt>()))
        }
        OpCode::Mul => {
            let values = int_args(args)?;
            Some(int(values.into_iter().product::<BigInt>()))
        }
        OpCode::Sub => match int_args(args)?.as_slice() {
            [a, b] => Some(int(*a - *b)),
            _ => None,
        },
        OpCode::Neg => match int_args(args)?.as_slice() {
            [a] => Some(int(-*a)),
            _ => None,
        },
        OpCode::Concat => Some(text(text_args(args)?.concat())),
        _ => None,
    }
}

impl Plugin for EvalStaticExpr {
    fn name(&self) -> &str {
        "eval_static_expr"
    }

    fn visit(&self, node: &Node, _ctx: &VisitContext<'_>) -> Option<Node> {
        let NodeKind::Operation { op, args } = node.kind() else {
            return None;
        };
        if args.is_empty() {
            return None;
        }
        fold(*op, args)
    }
}
