use super::*;
use golf_emit::Tier;
use golf_ir::build::{builtin_call, ident, int, is_op, method_call, op, text};
use golf_ir::{Assoc, ValueType};
use pretty_assertions::assert_eq;

fn visit(plugin: &dyn Plugin, node: &Node) -> Option<Node> {
    plugin.visit(node, &VisitContext::new(&[]))
}

fn print_call(args: &[Node]) -> Node {
    builtin_call("print", args.to_vec())
}

fn rep_method(args: &[Node]) -> Node {
    method_call(args[0].clone(), "rep", args[1..].to_vec())
}

fn tostring_call(args: &[Node]) -> Node {
    builtin_call("tostring", args.to_vec())
}

#[test]
fn map_ops_replaces_listed_codes() {
    let table: OpTable = vec![
        (OpCode::Println, print_call),
        (OpCode::Repeat, rep_method),
    ];
    let plugin = MapOps::new("lua_ops", table);
    assert_eq!(plugin.name(), "lua_ops");
    assert_eq!(
        visit(&plugin, &op(OpCode::Println, vec![text("x")])),
        Some(builtin_call("print", vec![text("x")]))
    );
    assert_eq!(visit(&plugin, &op(OpCode::Print, vec![text("x")])), None);
}

#[test]
fn map_ops_keeps_type_annotation() {
    let table: OpTable = vec![(OpCode::IntToText, tostring_call)];
    let plugin = MapOps::new("tostring", table);
    let node = op(OpCode::IntToText, vec![ident("n")]).with_type(ValueType::Text);
    let mapped = visit(&plugin, &node).unwrap();
    assert_eq!(mapped.annotated_type(), Some(&ValueType::Text));
}

#[test]
fn precedence_ops_lower_binary_and_unary() {
    let plugin = map_precedence_ops(PrecedenceTable::new([
        Tier::Binary(Assoc::Left, vec![(OpCode::Add, "+")]),
        Tier::Prefix(vec![(OpCode::Neg, "-")]),
    ]));
    let lowered = visit(&plugin, &op(OpCode::Add, vec![ident("a"), int(1)])).unwrap();
    assert!(matches!(lowered.kind(), NodeKind::BinaryOp { op: OpCode::Add, .. }));
    let lowered = visit(&plugin, &op(OpCode::Neg, vec![ident("a")])).unwrap();
    assert!(matches!(lowered.kind(), NodeKind::UnaryOp { op: OpCode::Neg, .. }));
    assert_eq!(visit(&plugin, &op(OpCode::Mul, vec![int(1), int(2)])), None);
}

#[test]
fn index_calls_shift_lists_but_not_tables() {
    let one = use_index_calls(true);
    assert_eq!(
        visit(&one, &op(OpCode::ListGet, vec![ident("a"), int(0)])),
        Some(index_call(ident("a"), int(1), true))
    );
    assert_eq!(
        visit(&one, &op(OpCode::TableGet, vec![ident("t"), text("k")])),
        Some(index_call(ident("t"), text("k"), true))
    );

    let zero = use_index_calls(false);
    assert_eq!(
        visit(&zero, &op(OpCode::ArrayGet, vec![ident("a"), ident("i")])),
        Some(index_call(ident("a"), ident("i"), false))
    );
}

#[test]
fn index_set_becomes_assignment() {
    let plugin = use_index_calls(false);
    assert_eq!(
        visit(
            &plugin,
            &op(OpCode::ListSet, vec![ident("a"), int(2), int(9)])
        ),
        Some(assignment(index_call(ident("a"), int(2), false), int(9)))
    );
}

#[test]
fn add1_and_sub1_fold() {
    assert_eq!(add1(&int(4)), int(5));
    assert_eq!(sub1(&int(4)), int(3));
    assert_eq!(add1(&op(OpCode::Sub, vec![ident("n"), int(1)])), ident("n"));
    assert!(is_op(&add1(&ident("n")), OpCode::Add));
    assert!(is_op(&sub1(&ident("n")), OpCode::Sub));
}
