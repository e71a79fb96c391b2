//! Type annotation lowering.
//!
//! Type syntax has its own small evaluator, separate from [`crate::lower::sexpr`]:
//! a type constructor takes types and plain numbers, never expressions.

use golf_ir::{Node, ValueType};
use num_bigint::BigInt;

use crate::error::{ArityRange, LoweringError};
use crate::tree::{RangeBound, TypeTree};

/// An argument of a type constructor.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TypeValue {
    Type(ValueType),
    Number(BigInt),
}

/// Apply the type constructor `callee` to `args`.
pub fn type_sexpr(callee: &str, args: Vec<TypeValue>) -> Result<ValueType, LoweringError> {
    let expect_arity = |n: usize| {
        if args.len() == n {
            Ok(())
        } else {
            Err(LoweringError::Arity {
                op: callee.to_string(),
                expected: ArityRange::exactly(n),
                actual: args.len(),
            })
        }
    };
    let expect_type = |index: usize| match &args[index] {
        TypeValue::Type(ty) => Ok(ty.clone()),
        TypeValue::Number(_) => Err(LoweringError::ExpectedType {
            callee: callee.to_string(),
            position: index + 1,
        }),
    };

    match callee {
        "Void" => expect_arity(0).map(|()| ValueType::Void),
        "Text" => expect_arity(0).map(|()| ValueType::Text),
        "Bool" => expect_arity(0).map(|()| ValueType::Boolean),
        "Int" => expect_arity(0).map(|()| ValueType::int()),
        "List" => {
            expect_arity(1)?;
            Ok(ValueType::list(expect_type(0)?))
        }
        "Set" => {
            expect_arity(1)?;
            Ok(ValueType::set(expect_type(0)?))
        }
        "Array" => {
            expect_arity(2)?;
            let member = expect_type(0)?;
            let TypeValue::Number(length) = &args[1] else {
                return Err(LoweringError::ExpectedNumber {
                    callee: callee.to_string(),
                    position: 2,
                });
            };
            let length = usize::try_from(length).map_err(|_| LoweringError::InvalidLength {
                callee: callee.to_string(),
                value: length.to_string(),
            })?;
            Ok(ValueType::array(member, length))
        }
        "Table" => {
            expect_arity(2)?;
            let key = expect_type(0)?;
            let value = expect_type(1)?;
            let key_name = key.to_string();
            ValueType::table(key, value).ok_or(LoweringError::InvalidTableKey(key_name))
        }
        _ => Err(LoweringError::UnknownType(callee.to_string())),
    }
}

/// The integer type bounded by `low..high`; an infinite end is unbounded.
pub fn integer_type(low: &RangeBound, high: &RangeBound) -> ValueType {
    let finite = |bound: &RangeBound| match bound {
        RangeBound::Infinite => None,
        RangeBound::Finite(value) => Some(value.clone()),
    };
    ValueType::int_range(finite(low), finite(high))
}

/// Attach `ty` to `node`; `None` leaves it unchanged.
pub fn annotate(node: Node, ty: Option<ValueType>) -> Node {
    match ty {
        Some(ty) => node.with_type(ty),
        None => node,
    }
}

/// Evaluate a parsed type expression.
pub fn lower_type(tree: &TypeTree) -> Result<ValueType, LoweringError> {
    match tree {
        TypeTree::Apply { callee, args } => {
            let args = args
                .iter()
                .map(|arg| match arg {
                    TypeTree::Number(value) => Ok(TypeValue::Number(value.clone())),
                    other => lower_type(other).map(TypeValue::Type),
                })
                .collect::<Result<Vec<_>, _>>()?;
            type_sexpr(callee, args)
        }
        TypeTree::Number(value) => Ok(ValueType::int_exact(value)),
        TypeTree::Range { low, high } => Ok(integer_type(low, high)),
    }
}
