//! Raw call-trees.
//!
//! The shape a parser hands to the canonicalizer: leaves, applications of a
//! callee to arguments, and block groupings. Nothing here has been checked;
//! operator symbols are still spelled as written.

use golf_ir::Node;
use num_bigint::BigInt;

/// A parsed, not yet lowered, value expression.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum CallTree {
    /// An identifier or literal, already an IR node.
    Leaf(Node),

    /// `(callee args...)`; `callee` is an `Identifier` node.
    Call { callee: Node, args: Vec<CallTree> },

    /// `{ stmt... }`
    Block(Vec<CallTree>),

    /// `{ alt / alt / ... }`; each group is one alternative.
    Variants(Vec<Vec<CallTree>>),

    /// `expr : type`
    Annotated { expr: Box<CallTree>, ty: TypeTree },
}

/// A parsed type expression. Disjoint from [`CallTree`]: type syntax and
/// value syntax never mix.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TypeTree {
    /// `Name` or `(Name args...)`
    Apply { callee: String, args: Vec<TypeTree> },

    /// A bare number, only meaningful as a type constructor argument.
    Number(BigInt),

    /// `low..high`
    Range { low: RangeBound, high: RangeBound },
}

/// One end of an integer range in type syntax.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum RangeBound {
    /// `-oo`, `oo`, `-∞` or `∞`; the side decides the sign.
    Infinite,
    Finite(BigInt),
}
