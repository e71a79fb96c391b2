use super::*;
use golf_ir::build::{block, int, op, program, text};
use golf_ir::{Node, OpCode};
use golf_plugins::static_eval::eval_static_expr;
use golf_plugins::GolfStage;
use pretty_assertions::assert_eq;

use crate::test_support::{calls_language, failing_language};

fn golfed(statements: Vec<Node>) -> Golfed {
    GolfStage::new(Vec::new())
        .run(&program(block(statements)))
        .unwrap()
}

#[test]
fn shortest_prefers_the_first_on_ties() {
    assert_eq!(shortest(vec!["bb", "a", "c"], |s| s.len()), Some("a"));
    assert_eq!(shortest(Vec::<&str>::new(), |s| s.len()), None);
}

#[test]
fn compile_for_runs_the_emit_stage() {
    let language = calls_language("calls", vec![Box::new(eval_static_expr())]);
    let program = golfed(vec![op(OpCode::Print, vec![op(OpCode::Add, vec![int(2), int(3)])])]);
    assert_eq!(compile_for(&language, &program).unwrap().text, "print(5)");
}

#[test]
fn one_failing_target_does_not_abort_the_others() {
    let languages = vec![failing_language(), calls_language("calls", Vec::new())];
    let report = compile_all(&languages, &golfed(vec![op(OpCode::Print, vec![text("x")])]), false);

    assert_eq!(report.outcomes.len(), 2);
    assert!(report.outcomes[0].result.is_err());
    assert_eq!(report.failures().count(), 1);
    assert_eq!(
        report.best().map(|(name, candidate)| (name, candidate.text.as_str())),
        Some(("calls", r#"print("x")"#))
    );
}

#[test]
fn parallel_and_sequential_agree() {
    let languages = vec![
        calls_language("first", Vec::new()),
        failing_language(),
        calls_language("folding", vec![Box::new(eval_static_expr())]),
    ];
    let program = golfed(vec![op(
        OpCode::Print,
        vec![op(OpCode::Concat, vec![text("a"), text("b")])],
    )]);

    let sequential = compile_all(&languages, &program, false);
    let parallel = compile_all(&languages, &program, true);
    assert_eq!(sequential, parallel);
    assert_eq!(
        parallel
            .outcomes
            .iter()
            .map(|outcome| outcome.language)
            .collect::<Vec<_>>(),
        vec!["first", "nothing", "folding"]
    );
    assert_eq!(parallel.best().map(|(name, _)| name), Some("folding"));
}

#[test]
fn best_ties_go_to_the_first_declared_target() {
    let languages = vec![
        calls_language("first", Vec::new()),
        calls_language("second", Vec::new()),
    ];
    let report = compile_all(&languages, &golfed(vec![op(OpCode::Print, vec![int(1)])]), true);
    assert_eq!(report.best().map(|(name, _)| name), Some("first"));
}

#[test]
fn no_success_means_no_best() {
    let report = compile_all(&[failing_language()], &golfed(vec![int(1)]), false);
    assert_eq!(report.best(), None);
}
