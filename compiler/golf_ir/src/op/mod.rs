//! Canonical Operation Codes
//!
//! One fixed registry of operation codes. Every `Operation` node is tagged
//! with exactly one of these, independent of how the operator was spelled
//! in the source.
//!
//! Arity is a static property of the code. It is checked once, when the
//! canonicalizer builds the node, and never re-checked afterwards.

use std::fmt;

/// How many arguments an operation takes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OpArity {
    /// Exactly this many arguments.
    Fixed(usize),
    /// Binary and associative: two or more arguments are accepted and
    /// left-folded into a chain of binary applications.
    Foldable,
}

/// Canonical operation codes.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum OpCode {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Neg,
    Abs,
    Min,
    Max,

    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    BitNot,
    BitShiftLeft,
    BitShiftRight,

    // Logical
    Not,
    And,
    Or,
    True,
    False,

    // Comparison
    Eq,
    Neq,
    Lt,
    Leq,
    Gt,
    Geq,

    // Text
    Concat,
    Repeat,
    IntToText,
    TextToInt,
    TextLength,
    TextGetByte,
    TextGetByteSlice,
    ByteToText,

    // Collections
    ListGet,
    ListSet,
    ListPush,
    ListLength,
    ArrayGet,
    ArraySet,
    TableGet,
    TableSet,
    SetContains,
    Cardinality,

    // I/O
    Print,
    Println,
    Argv,
    ArgvGet,
}

impl OpCode {
    /// Every registered code, in declaration order.
    pub const ALL: &'static [OpCode] = &[
        OpCode::Add,
        OpCode::Sub,
        OpCode::Mul,
        OpCode::Div,
        OpCode::Mod,
        OpCode::Pow,
        OpCode::Neg,
        OpCode::Abs,
        OpCode::Min,
        OpCode::Max,
        OpCode::BitAnd,
        OpCode::BitOr,
        OpCode::BitXor,
        OpCode::BitNot,
        OpCode::BitShiftLeft,
        OpCode::BitShiftRight,
        OpCode::Not,
        OpCode::And,
        OpCode::Or,
        OpCode::True,
        OpCode::False,
        OpCode::Eq,
        OpCode::Neq,
        OpCode::Lt,
        OpCode::Leq,
        OpCode::Gt,
        OpCode::Geq,
        OpCode::Concat,
        OpCode::Repeat,
        OpCode::IntToText,
        OpCode::TextToInt,
        OpCode::TextLength,
        OpCode::TextGetByte,
        OpCode::TextGetByteSlice,
        OpCode::ByteToText,
        OpCode::ListGet,
        OpCode::ListSet,
        OpCode::ListPush,
        OpCode::ListLength,
        OpCode::ArrayGet,
        OpCode::ArraySet,
        OpCode::TableGet,
        OpCode::TableSet,
        OpCode::SetContains,
        OpCode::Cardinality,
        OpCode::Print,
        OpCode::Println,
        OpCode::Argv,
        OpCode::ArgvGet,
    ];

    /// The canonical name, as written in source and in diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Mod => "mod",
            Self::Pow => "pow",
            Self::Neg => "neg",
            Self::Abs => "abs",
            Self::Min => "min",
            Self::Max => "max",
            Self::BitAnd => "bit_and",
            Self::BitOr => "bit_or",
            Self::BitXor => "bit_xor",
            Self::BitNot => "bit_not",
            Self::BitShiftLeft => "bit_shift_left",
            Self::BitShiftRight => "bit_shift_right",
            Self::Not => "not",
            Self::And => "and",
            Self::Or => "or",
            Self::True => "true",
            Self::False => "false",
            Self::Eq => "eq",
            Self::Neq => "neq",
            Self::Lt => "lt",
            Self::Leq => "leq",
            Self::Gt => "gt",
            Self::Geq => "geq",
            Self::Concat => "concat",
            Self::Repeat => "repeat",
            Self::IntToText => "int_to_text",
            Self::TextToInt => "text_to_int",
            Self::TextLength => "text_length",
            Self::TextGetByte => "text_get_byte",
            Self::TextGetByteSlice => "text_get_byte_slice",
            Self::ByteToText => "byte_to_text",
            Self::ListGet => "list_get",
            Self::ListSet => "list_set",
            Self::ListPush => "list_push",
            Self::ListLength => "list_length",
            Self::ArrayGet => "array_get",
            Self::ArraySet => "array_set",
            Self::TableGet => "table_get",
            Self::TableSet => "table_set",
            Self::SetContains => "set_contains",
            Self::Cardinality => "cardinality",
            Self::Print => "print",
            Self::Println => "println",
            Self::Argv => "argv",
            Self::ArgvGet => "argv_get",
        }
    }

    /// Look up a code by its canonical name.
    pub fn from_name(name: &str) -> Option<OpCode> {
        Self::ALL.iter().copied().find(|op| op.as_str() == name)
    }

    /// The static arity of this code.
    pub const fn arity(self) -> OpArity {
        match self {
            Self::Add | Self::Mul | Self::BitAnd | Self::BitOr | Self::BitXor | Self::Concat => {
                OpArity::Foldable
            }

            Self::True | Self::False | Self::Argv => OpArity::Fixed(0),

            Self::Neg
            | Self::Abs
            | Self::BitNot
            | Self::Not
            | Self::IntToText
            | Self::TextToInt
            | Self::TextLength
            | Self::ByteToText
            | Self::ListLength
            | Self::Cardinality
            | Self::Print
            | Self::Println
            | Self::ArgvGet => OpArity::Fixed(1),

            Self::TextGetByteSlice | Self::ListSet | Self::ArraySet | Self::TableSet => {
                OpArity::Fixed(3)
            }

            Self::Sub
            | Self::Div
            | Self::Mod
            | Self::Pow
            | Self::Min
            | Self::Max
            | Self::BitShiftLeft
            | Self::BitShiftRight
            | Self::And
            | Self::Or
            | Self::Eq
            | Self::Neq
            | Self::Lt
            | Self::Leq
            | Self::Gt
            | Self::Geq
            | Self::Repeat
            | Self::TextGetByte
            | Self::ListGet
            | Self::ListPush
            | Self::ArrayGet
            | Self::TableGet
            | Self::SetContains => OpArity::Fixed(2),
        }
    }

    /// Whether this code accepts n-ary argument lists that fold left.
    pub const fn is_foldable(self) -> bool {
        matches!(self.arity(), OpArity::Foldable)
    }

    /// Whether this is a binary operation (foldable codes included).
    pub const fn is_binary(self) -> bool {
        matches!(self.arity(), OpArity::Foldable | OpArity::Fixed(2))
    }

    /// Whether this is a unary operation.
    pub const fn is_unary(self) -> bool {
        matches!(self.arity(), OpArity::Fixed(1))
    }

    /// Whether `a op b == b op a` for every input.
    pub const fn is_commutative(self) -> bool {
        matches!(
            self,
            Self::Add
                | Self::Mul
                | Self::BitAnd
                | Self::BitOr
                | Self::BitXor
                | Self::Eq
                | Self::Neq
                | Self::Min
                | Self::Max
        )
    }

    /// The code for the same test with its operands swapped, so that
    /// `a op b == b op' a`.
    pub const fn mirrored(self) -> Option<Self> {
        match self {
            Self::Lt => Some(Self::Gt),
            Self::Gt => Some(Self::Lt),
            Self::Leq => Some(Self::Geq),
            Self::Geq => Some(Self::Leq),
            _ if self.is_commutative() => Some(self),
            _ => None,
        }
    }

    /// Whether evaluating this operation changes program state or output.
    pub const fn has_side_effects(self) -> bool {
        matches!(
            self,
            Self::Print
                | Self::Println
                | Self::ListSet
                | Self::ListPush
                | Self::ArraySet
                | Self::TableSet
        )
    }
}

/// Associativity of a lowered operator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Assoc {
    Left,
    Right,
    /// Neither side may hold an operator of the same tier without grouping.
    None,
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
