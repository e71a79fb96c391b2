//! Property tests for canonical lowering.
//!
//! 1. Fold shape: a foldable code applied to k ≥ 2 arguments lowers to a
//!    left-nested chain of depth k − 1 whose leaves keep source order.
//! 2. Arity: a fixed-arity code applied to the wrong number of arguments
//!    fails with an error naming the expected count.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use golf_canon::{sexpr, ArityRange, LoweringError};
use golf_ir::build::{builtin, int};
use golf_ir::{Node, NodeKind, OpArity, OpCode};
use proptest::prelude::*;

fn foldable_codes() -> impl Strategy<Value = OpCode> {
    prop::sample::select(
        OpCode::ALL
            .iter()
            .copied()
            .filter(|code| code.is_foldable())
            .collect::<Vec<_>>(),
    )
}

fn fixed_codes() -> impl Strategy<Value = (OpCode, usize)> {
    prop::sample::select(
        OpCode::ALL
            .iter()
            .filter_map(|code| match code.arity() {
                OpArity::Fixed(n) => Some((*code, n)),
                OpArity::Foldable => None,
            })
            .collect::<Vec<_>>(),
    )
}

/// Depth of the left spine and the leaves in order.
fn left_spine(node: &Node, code: OpCode) -> (usize, Vec<Node>) {
    match node.kind() {
        NodeKind::Operation { op, args } if *op == code => {
            assert_eq!(args.len(), 2, "folded nodes are binary");
            let (depth, mut leaves) = left_spine(&args[0], code);
            leaves.push(args[1].clone());
            (depth + 1, leaves)
        }
        _ => (0, vec![node.clone()]),
    }
}

proptest! {
    #[test]
    fn fold_is_left_nested(code in foldable_codes(), k in 2usize..12) {
        let args: Vec<Node> = (0..k).map(|i| int(i64::try_from(i).unwrap())).collect();
        let node = sexpr(&builtin(code.as_str()), args.clone()).unwrap();
        let (depth, leaves) = left_spine(&node, code);
        prop_assert_eq!(depth, k - 1);
        prop_assert_eq!(leaves, args);
    }

    #[test]
    fn wrong_fixed_arity_is_rejected((code, n) in fixed_codes(), actual in 0usize..6) {
        prop_assume!(actual != n);
        let args: Vec<Node> = (0..actual).map(|_| int(1)).collect();
        let error = sexpr(&builtin(code.as_str()), args).unwrap_err();
        prop_assert_eq!(
            error,
            LoweringError::Arity {
                op: code.as_str().to_string(),
                expected: ArityRange::exactly(n),
                actual,
            }
        );
    }

    #[test]
    fn foldable_with_too_few_arguments_is_rejected(code in foldable_codes(), actual in 0usize..2) {
        let args: Vec<Node> = (0..actual).map(|_| int(1)).collect();
        let error = sexpr(&builtin(code.as_str()), args).unwrap_err();
        let is_arity = matches!(error, LoweringError::Arity { .. });
        prop_assert!(is_arity);
    }
}
