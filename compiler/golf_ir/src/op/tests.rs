use super::*;

#[test]
fn names_round_trip() {
    for &op in OpCode::ALL {
        assert_eq!(OpCode::from_name(op.as_str()), Some(op), "{op}");
    }
}

#[test]
fn unknown_name() {
    assert_eq!(OpCode::from_name("frobnicate"), None);
    assert_eq!(OpCode::from_name("+"), None);
}

#[test]
fn foldable_set() {
    let foldable: Vec<_> = OpCode::ALL
        .iter()
        .copied()
        .filter(|op| op.is_foldable())
        .collect();
    assert_eq!(
        foldable,
        vec![
            OpCode::Add,
            OpCode::Mul,
            OpCode::BitAnd,
            OpCode::BitOr,
            OpCode::BitXor,
            OpCode::Concat
        ]
    );
}

#[test]
fn arity_classes() {
    assert_eq!(OpCode::Neg.arity(), OpArity::Fixed(1));
    assert_eq!(OpCode::Sub.arity(), OpArity::Fixed(2));
    assert_eq!(OpCode::TextGetByteSlice.arity(), OpArity::Fixed(3));
    assert_eq!(OpCode::Argv.arity(), OpArity::Fixed(0));
    assert!(OpCode::Add.is_binary());
    assert!(!OpCode::Add.is_unary());
    assert!(OpCode::Print.is_unary());
}

#[test]
fn short_circuit_ops_are_not_commutative() {
    assert!(!OpCode::And.is_commutative());
    assert!(!OpCode::Or.is_commutative());
    assert!(!OpCode::Sub.is_commutative());
    assert!(OpCode::Add.is_commutative());
}

#[test]
fn comparisons_mirror_when_swapped() {
    assert_eq!(OpCode::Lt.mirrored(), Some(OpCode::Gt));
    assert_eq!(OpCode::Geq.mirrored(), Some(OpCode::Leq));
    assert_eq!(OpCode::Mul.mirrored(), Some(OpCode::Mul));
    assert_eq!(OpCode::Sub.mirrored(), None);
    assert_eq!(OpCode::Concat.mirrored(), None);
}

#[test]
fn only_output_and_mutation_have_side_effects() {
    assert!(OpCode::Println.has_side_effects());
    assert!(OpCode::ListPush.has_side_effects());
    assert!(!OpCode::ListGet.has_side_effects());
    assert!(!OpCode::ArgvGet.has_side_effects());
}
