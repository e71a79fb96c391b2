use super::*;
use golf_ir::build::{int, program};
use pretty_assertions::assert_eq;

fn visit(plugin: &dyn Plugin, node: &Node) -> Option<Node> {
    plugin.visit(node, &VisitContext::new(&[]))
}

#[test]
fn last_print_becomes_println() {
    let tree = program(block(vec![
        op(OpCode::Print, vec![int(1)]),
        op(OpCode::Print, vec![int(2)]),
    ]));
    assert_eq!(
        visit(&golf_last_print(true), &tree),
        Some(program(block(vec![
            op(OpCode::Print, vec![int(1)]),
            op(OpCode::Println, vec![int(2)]),
        ])))
    );
}

#[test]
fn last_println_becomes_print() {
    let tree = program(block(vec![op(OpCode::Println, vec![int(1)])]));
    assert_eq!(
        visit(&golf_last_print(false), &tree),
        Some(program(block(vec![op(OpCode::Print, vec![int(1)])])))
    );
    assert_eq!(visit(&golf_last_print(true), &tree), None);
}

#[test]
fn only_the_program_is_visited() {
    let statement = op(OpCode::Print, vec![int(1)]);
    assert_eq!(visit(&golf_last_print(true), &statement), None);
}

#[test]
fn println_expands_to_print_with_newline() {
    let plugin = println_to_print();
    assert_eq!(
        visit(&plugin, &op(OpCode::Println, vec![text("x")])),
        Some(op(
            OpCode::Print,
            vec![op(OpCode::Concat, vec![text("x"), text("\n")])]
        ))
    );
}
