use super::*;
use golf_ir::build::{ident, op};
use pretty_assertions::assert_eq;

fn arithmetic() -> PrecedenceTable {
    PrecedenceTable::new([
        Tier::Binary(Assoc::Left, vec![(OpCode::Add, "+"), (OpCode::Sub, "-")]),
        Tier::Binary(Assoc::Left, vec![(OpCode::Mul, "*")]),
        Tier::Prefix(vec![(OpCode::Neg, "-")]),
        Tier::Binary(Assoc::Right, vec![(OpCode::Pow, "^")]),
    ])
}

fn lowered(table: &PrecedenceTable, code: OpCode, args: Vec<Node>) -> Node {
    table.lower(&op(code, args)).unwrap()
}

#[test]
fn tiers_number_from_one() {
    let table = arithmetic();
    assert_eq!(table.binary(OpCode::Add).unwrap().precedence, 1);
    assert_eq!(table.binary(OpCode::Mul).unwrap().precedence, 2);
    assert_eq!(table.prefix(OpCode::Neg).unwrap().precedence, 3);
    assert_eq!(table.binary(OpCode::Pow).unwrap().assoc, Assoc::Right);
    assert!(table.binary(OpCode::Div).is_none());
}

#[test]
fn lower_keeps_operands_and_type() {
    let table = arithmetic();
    let node = op(OpCode::Add, vec![ident("a"), ident("b")])
        .with_type(golf_ir::ValueType::int());
    let lowered = table.lower(&node).unwrap();
    let NodeKind::BinaryOp { name, left, .. } = lowered.kind() else {
        panic!("expected BinaryOp");
    };
    assert_eq!(&**name, "+");
    assert_eq!(left, &ident("a"));
    assert_eq!(lowered.annotated_type(), Some(&golf_ir::ValueType::int()));
    assert!(table.lower(&op(OpCode::Div, vec![ident("a"), ident("b")])).is_none());
}

#[test]
fn looser_child_needs_parens() {
    let table = arithmetic();
    let sum = lowered(&table, OpCode::Add, vec![ident("a"), ident("b")]);
    let product = lowered(&table, OpCode::Mul, vec![sum.clone(), ident("c")]);
    assert!(needs_parens(&sum, &product, OperandSide::Left));
    assert!(!needs_parens(&product, &sum, OperandSide::Left));
}

#[test]
fn equal_precedence_depends_on_side() {
    let table = arithmetic();
    let diff = lowered(&table, OpCode::Sub, vec![ident("a"), ident("b")]);
    let outer = lowered(&table, OpCode::Sub, vec![diff.clone(), diff.clone()]);
    assert!(!needs_parens(&diff, &outer, OperandSide::Left));
    assert!(needs_parens(&diff, &outer, OperandSide::Right));

    let pow = lowered(&table, OpCode::Pow, vec![ident("a"), ident("b")]);
    let outer = lowered(&table, OpCode::Pow, vec![pow.clone(), pow.clone()]);
    assert!(needs_parens(&pow, &outer, OperandSide::Left));
    assert!(!needs_parens(&pow, &outer, OperandSide::Right));
}

#[test]
fn atoms_never_need_parens() {
    let table = arithmetic();
    let neg = lowered(&table, OpCode::Neg, vec![ident("a")]);
    assert!(!needs_parens(&ident("a"), &neg, OperandSide::Prefix));
    assert_eq!(
        wrap(TokenTree::text("a"), &ident("a"), &neg, OperandSide::Prefix),
        TokenTree::text("a")
    );
}

#[test]
fn prefix_below_power() {
    let table = arithmetic();
    let neg = lowered(&table, OpCode::Neg, vec![ident("a")]);
    let pow = lowered(&table, OpCode::Pow, vec![neg.clone(), ident("b")]);
    assert!(needs_parens(&neg, &pow, OperandSide::Left));
}
