use super::*;
use golf_ir::build::{block, int, op, program, text, variants};
use golf_ir::{NodeKind, OpCode};
use pretty_assertions::assert_eq;

use crate::static_eval::eval_static_expr;

/// Rewrites `n` to `n - 1` down to zero.
struct CountDown;

impl Plugin for CountDown {
    fn name(&self) -> &str {
        "count_down"
    }

    fn visit(&self, node: &Node, _ctx: &VisitContext<'_>) -> Option<Node> {
        let value = golf_ir::build::int_value(node)?;
        (*value > 0.into()).then(|| int(value - 1))
    }
}

/// Flips between two text literals forever.
struct Flip(&'static str, &'static str);

impl Plugin for Flip {
    fn name(&self) -> &str {
        "flip"
    }

    fn visit(&self, node: &Node, _ctx: &VisitContext<'_>) -> Option<Node> {
        match golf_ir::build::text_value(node)? {
            value if value == self.0 => Some(text(self.1)),
            value if value == self.1 => Some(text(self.0)),
            _ => None,
        }
    }
}

/// Proposes every node unchanged.
struct Echo;

impl Plugin for Echo {
    fn name(&self) -> &str {
        "echo"
    }

    fn visit(&self, node: &Node, _ctx: &VisitContext<'_>) -> Option<Node> {
        Some(node.clone())
    }
}

/// Rewrites integers printed directly to `7`.
struct ParentIsPrint;

impl Plugin for ParentIsPrint {
    fn name(&self) -> &str {
        "parent_is_print"
    }

    fn visit(&self, node: &Node, ctx: &VisitContext<'_>) -> Option<Node> {
        golf_ir::build::int_value(node)?;
        let parent = ctx.parent()?;
        (golf_ir::build::is_op(parent, OpCode::Print) && !golf_ir::build::is_int_literal(node, 7))
            .then(|| int(7))
    }
}

fn print_program(arg: Node) -> Node {
    program(block(vec![op(OpCode::Print, vec![arg])]))
}

#[test]
fn runs_until_no_change() {
    let plugins: Vec<Box<dyn Plugin>> = vec![Box::new(CountDown)];
    let result = run_to_fixpoint("test", &plugins, &print_program(int(5))).unwrap();
    assert_eq!(result, print_program(int(0)));
}

#[test]
fn oscillation_fails_with_no_fixpoint() {
    let plugins: Vec<Box<dyn Plugin>> = vec![Box::new(Flip("a", "b"))];
    let error = run_to_fixpoint("test", &plugins, &print_program(text("a"))).unwrap_err();
    assert_eq!(
        error,
        StageError::NoFixpoint {
            stage: "test",
            passes: MAX_PASSES,
            plugin: "flip".to_string(),
        }
    );
}

#[test]
fn identical_proposal_is_a_decline() {
    let plugins: Vec<Box<dyn Plugin>> = vec![Box::new(Echo), Box::new(CountDown)];
    let result = run_to_fixpoint("test", &plugins, &print_program(int(2))).unwrap();
    assert_eq!(result, print_program(int(0)));
}

#[test]
fn context_exposes_parent() {
    let plugins: Vec<Box<dyn Plugin>> = vec![Box::new(ParentIsPrint)];
    let tree = program(block(vec![
        op(OpCode::Print, vec![int(1)]),
        op(OpCode::Neg, vec![int(1)]),
    ]));
    let result = run_to_fixpoint("test", &plugins, &tree).unwrap();
    assert_eq!(
        result,
        program(block(vec![
            op(OpCode::Print, vec![int(7)]),
            op(OpCode::Neg, vec![int(1)]),
        ]))
    );
}

#[test]
fn untouched_subtrees_are_shared() {
    let untouched = op(OpCode::Print, vec![text("x")]);
    let tree = program(block(vec![untouched.clone(), op(OpCode::Print, vec![int(1)])]));
    let plugins: Vec<Box<dyn Plugin>> = vec![Box::new(CountDown)];
    let result = run_to_fixpoint("test", &plugins, &tree).unwrap();
    let kept = result.at_path(&[0, 0]).unwrap();
    assert!(Node::ptr_eq(&kept, &untouched));
}

#[test]
fn stages_chain_through_wrappers() {
    let golf = GolfStage::new(vec![Box::new(eval_static_expr())]);
    let emit = EmitStage::new(Vec::new());
    let final_emit = FinalEmitStage::new(vec![Box::new(CountDown)]);

    let source = print_program(op(OpCode::Add, vec![int(1), int(2)]));
    let golfed = golf.run(&source).unwrap();
    assert_eq!(golfed.program(), &print_program(int(3)));
    let lowered = emit.run(&golfed).unwrap();
    let finalized = final_emit.run(&lowered).unwrap();
    assert_eq!(finalized.into_program(), print_program(int(0)));
    assert_eq!(golf.plugin_names(), vec!["eval_static_expr"]);
}

#[test]
fn folded_children_rebuild_parent_in_one_pass() {
    let tree = print_program(op(
        OpCode::Add,
        vec![op(OpCode::Mul, vec![int(2), int(3)]), int(4)],
    ));
    let plugins: Vec<Box<dyn Plugin>> = vec![Box::new(eval_static_expr())];
    let result = run_to_fixpoint("test", &plugins, &tree).unwrap();
    let NodeKind::Program { body } = result.kind() else {
        panic!("expected Program");
    };
    assert_eq!(body, &block(vec![op(OpCode::Print, vec![int(10)])]));
}

#[test]
fn wrappers_only_substitute_existing_alternatives() {
    let golfed = GolfStage::new(Vec::new())
        .run(&print_program(variants(vec![int(1), int(2)])))
        .unwrap();
    let path = golfed
        .program()
        .find_path(&|node| matches!(node.kind(), NodeKind::Variants(_)))
        .unwrap();
    assert_eq!(golfed.choose(&path, 1).unwrap().program(), &print_program(int(2)));
    assert_eq!(golfed.with_first_variants().into_program(), print_program(int(1)));
    assert!(golfed.choose(&path, 2).is_none());
    assert!(golfed.choose(&[0], 0).is_none());
}
