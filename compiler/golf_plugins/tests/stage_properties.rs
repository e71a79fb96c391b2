#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

//! Stage-level properties over a small corpus of programs.

use golf_canon::parse_program;
use golf_emit::{PrecedenceTable, Tier};
use golf_ir::{Assoc, Node, OpCode};
use golf_plugins::loops::for_range_to_inclusive;
use golf_plugins::ops::{map_precedence_ops, use_index_calls};
use golf_plugins::print::golf_last_print;
use golf_plugins::static_eval::eval_static_expr;
use golf_plugins::idents::rename_idents;
use golf_plugins::{run_to_fixpoint, Plugin};
use pretty_assertions::assert_eq;

const CORPUS: &[&str] = &[
    r#"(println (concat "a" "b"))"#,
    r#"(print (concat "a" "b" "c")) (print "d")"#,
    "(<- $x 5) (while (< $x 10) { (<- $x (+ $x 1)) }) (println (int_to_text $x))",
    "(for $i 0 10 { (print (int_to_text (* $i 2 3))) })",
    "(for $i 1 20 3 { (println (int_to_text (- $i 1))) })",
    r#"(if (== (text_length "abc") 3) { (println "yes") } { (println "no") })"#,
    r#"(<- $s "hello") (println (byte_to_text (text_get_byte $s 0)))"#,
    r#"{ (println "x") / (print "x") }"#,
    "(<- $total 0) (for $n 0 (+ 2 3) { (<- $total (+ $total (* $n $n))) }) (println (int_to_text $total))",
];

fn programs() -> Vec<Node> {
    CORPUS
        .iter()
        .map(|source| parse_program(source).unwrap())
        .collect()
}

fn table() -> PrecedenceTable {
    PrecedenceTable::new([
        Tier::Binary(
            Assoc::Left,
            vec![(OpCode::Lt, "<"), (OpCode::Eq, "==")],
        ),
        Tier::Binary(Assoc::Left, vec![(OpCode::Add, "+"), (OpCode::Sub, "-")]),
        Tier::Binary(Assoc::Left, vec![(OpCode::Mul, "*")]),
        Tier::Prefix(vec![(OpCode::Neg, "-")]),
    ])
}

fn run(plugins: Vec<Box<dyn Plugin>>, program: &Node) -> Node {
    run_to_fixpoint("test", &plugins, program).unwrap()
}

#[test]
fn unrelated_plugins_commute() {
    for program in programs() {
        let forward = run(
            vec![Box::new(eval_static_expr()), Box::new(for_range_to_inclusive())],
            &program,
        );
        let backward = run(
            vec![Box::new(for_range_to_inclusive()), Box::new(eval_static_expr())],
            &program,
        );
        assert_eq!(forward, backward);

        let forward = run(
            vec![Box::new(golf_last_print(true)), Box::new(use_index_calls(false))],
            &program,
        );
        let backward = run(
            vec![Box::new(use_index_calls(false)), Box::new(golf_last_print(true))],
            &program,
        );
        assert_eq!(forward, backward);
    }
}

#[test]
fn full_plugin_lists_terminate() {
    for program in programs() {
        let plugins: Vec<Box<dyn Plugin>> = vec![
            Box::new(eval_static_expr()),
            Box::new(golf_last_print(true)),
            Box::new(for_range_to_inclusive()),
            Box::new(use_index_calls(true)),
            Box::new(map_precedence_ops(table())),
            Box::new(rename_idents()),
        ];
        assert!(run_to_fixpoint("test", &plugins, &program).is_ok());
    }
}

#[test]
fn fixpoint_is_stable() {
    let plugins: Vec<Box<dyn Plugin>> = vec![
        Box::new(eval_static_expr()),
        Box::new(for_range_to_inclusive()),
        Box::new(rename_idents()),
    ];
    for program in programs() {
        let once = run_to_fixpoint("test", &plugins, &program).unwrap();
        let twice = run_to_fixpoint("test", &plugins, &once).unwrap();
        assert_eq!(once, twice);
    }
}
