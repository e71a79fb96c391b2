use super::*;
use golf_ir::build::{block, for_range, ident, int, op, program};
use golf_ir::OpCode;
use pretty_assertions::assert_eq;

#[test]
fn exclusive_becomes_inclusive() {
    let body = block(vec![op(OpCode::Println, vec![ident("i")])]);
    let node = for_range(ident("i"), int(0), int(10), int(1), body.clone());
    let result = for_range_to_inclusive()
        .visit(&node, &VisitContext::new(&[]))
        .unwrap();
    let NodeKind::ForRange {
        high, inclusive, ..
    } = result.kind()
    else {
        panic!("expected ForRange");
    };
    assert_eq!(high, &int(9));
    assert!(*inclusive);

    assert_eq!(
        for_range_to_inclusive().visit(&result, &VisitContext::new(&[])),
        None
    );
}

#[test]
fn dynamic_bound_gets_offset() {
    let node = for_range(ident("i"), int(0), ident("n"), int(1), block(vec![]));
    let result = for_range_to_inclusive()
        .visit(&node, &VisitContext::new(&[]))
        .unwrap();
    let NodeKind::ForRange { high, .. } = result.kind() else {
        panic!("expected ForRange");
    };
    assert_eq!(high, &op(OpCode::Sub, vec![ident("n"), int(1)]));
}

#[test]
fn counting_down_ends_one_above() {
    let node = for_range(ident("i"), int(10), int(0), int(-1), block(vec![]));
    let result = for_range_to_inclusive()
        .visit(&node, &VisitContext::new(&[]))
        .unwrap();
    let NodeKind::ForRange { high, .. } = result.kind() else {
        panic!("expected ForRange");
    };
    assert_eq!(high, &int(1));
}

#[test]
fn unknown_step_stays_exclusive() {
    let node = for_range(ident("i"), int(0), int(10), ident("k"), block(vec![]));
    assert_eq!(
        for_range_to_inclusive().visit(&node, &VisitContext::new(&[])),
        None
    );
    let zero = for_range(ident("i"), int(0), int(10), int(0), block(vec![]));
    assert_eq!(
        for_range_to_inclusive().visit(&zero, &VisitContext::new(&[])),
        None
    );
}

fn println_of(value: Node) -> Node {
    op(OpCode::Println, vec![op(OpCode::IntToText, vec![value])])
}

fn successor(name: &str) -> Node {
    op(OpCode::Add, vec![ident(name), int(1)])
}

#[test]
fn counter_read_as_successor_is_shifted() {
    let node = for_range(
        ident("i"),
        int(0),
        ident("n"),
        int(1),
        block(vec![println_of(successor("i"))]),
    );
    let shifted = for_range(
        ident("i"),
        int(1),
        successor("n"),
        int(1),
        block(vec![println_of(ident("i"))]),
    );
    assert_eq!(
        shift_range_one_up().visit(&node, &VisitContext::new(&[])),
        Some(variants(vec![node, shifted]))
    );
}

#[test]
fn other_reads_of_the_counter_block_the_shift() {
    let plain = block(vec![println_of(successor("i")), println_of(ident("i"))]);
    let twice = block(vec![println_of(op(
        OpCode::Add,
        vec![successor("i"), int(1)],
    ))]);
    let unused = block(vec![println_of(ident("j"))]);
    for body in [plain, twice, unused] {
        let node = for_range(ident("i"), int(0), int(10), int(1), body);
        assert_eq!(
            shift_range_one_up().visit(&node, &VisitContext::new(&[])),
            None
        );
    }
}

#[test]
fn counter_read_after_the_loop_blocks_the_shift() {
    let node = for_range(
        ident("i"),
        int(0),
        int(10),
        int(1),
        block(vec![println_of(successor("i"))]),
    );
    let body = block(vec![node.clone(), println_of(ident("i"))]);
    let ancestors = [program(body.clone()), body];
    assert_eq!(
        shift_range_one_up().visit(&node, &VisitContext::new(&ancestors)),
        None
    );
}

#[test]
fn flipped_successors_shift_once() {
    let node = for_range(
        ident("i"),
        int(0),
        int(10),
        int(1),
        block(vec![println_of(successor("i"))]),
    );
    let plugins: Vec<Box<dyn Plugin>> = vec![
        Box::new(crate::alternatives::flip_binary_ops()),
        Box::new(shift_range_one_up()),
    ];
    let result =
        crate::engine::run_to_fixpoint("golf", &plugins, &program(block(vec![node]))).unwrap();

    let flipped = variants(vec![
        successor("i"),
        op(OpCode::Add, vec![int(1), ident("i")]),
    ]);
    let expected = variants(vec![
        for_range(
            ident("i"),
            int(0),
            int(10),
            int(1),
            block(vec![println_of(flipped)]),
        ),
        for_range(
            ident("i"),
            int(1),
            int(11),
            int(1),
            block(vec![println_of(ident("i"))]),
        ),
    ]);
    assert_eq!(result, program(block(vec![expected])));
}
