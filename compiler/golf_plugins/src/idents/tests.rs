use super::*;
use golf_ir::build::{assignment, block, builtin, builtin_call, ident, int, op, program};
use golf_ir::OpCode;
use pretty_assertions::assert_eq;

fn visit(plugin: &RenameIdents, node: &Node) -> Option<Node> {
    plugin.visit(node, &VisitContext::new(&[]))
}

#[test]
fn renames_in_first_appearance_order() {
    let tree = program(block(vec![
        assignment(ident("count"), int(0)),
        assignment(ident("total"), ident("count")),
        op(OpCode::Print, vec![ident("total")]),
    ]));
    assert_eq!(
        visit(&rename_idents(), &tree),
        Some(program(block(vec![
            assignment(ident("a"), int(0)),
            assignment(ident("b"), ident("a")),
            op(OpCode::Print, vec![ident("b")]),
        ])))
    );
}

#[test]
fn renaming_is_idempotent() {
    let tree = program(block(vec![
        assignment(ident("b"), int(0)),
        assignment(ident("a"), ident("b")),
    ]));
    let once = visit(&rename_idents(), &tree).unwrap();
    assert_eq!(visit(&rename_idents(), &once), None);
}

#[test]
fn builtins_are_kept_and_avoided() {
    let tree = program(block(vec![
        assignment(ident("x"), builtin("a")),
        builtin_call("print", vec![ident("x")]),
    ]));
    let renamed = visit(&rename_idents(), &tree).unwrap();
    assert_eq!(
        renamed,
        program(block(vec![
            assignment(ident("b"), builtin("a")),
            builtin_call("print", vec![ident("b")]),
        ]))
    );
}

#[test]
fn reserved_names_are_skipped() {
    let tree = program(block(vec![assignment(ident("x"), int(0))]));
    let renamed = visit(&RenameIdents::with_reserved(&["a", "b"]), &tree).unwrap();
    assert_eq!(renamed, program(block(vec![assignment(ident("c"), int(0))])));
}

#[test]
fn only_the_root_program_is_renamed() {
    let tree = program(block(vec![assignment(ident("x"), int(0))]));
    let parent = [tree.clone()];
    assert_eq!(
        rename_idents().visit(&tree, &VisitContext::new(&parent)),
        None
    );
}
