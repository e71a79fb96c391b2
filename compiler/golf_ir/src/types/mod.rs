//! Value Types
//!
//! A small static type lattice used for emission decisions. It is not a
//! full type system: nothing here checks programs, it only describes what
//! a node is known to produce.

use std::fmt;
use std::sync::Arc;

use num_bigint::BigInt;

/// One end of an integer range.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum IntBound {
    NegInfinity,
    Finite(BigInt),
    PosInfinity,
}

impl fmt::Display for IntBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntBound::NegInfinity => f.write_str("-oo"),
            IntBound::Finite(n) => write!(f, "{n}"),
            IntBound::PosInfinity => f.write_str("oo"),
        }
    }
}

/// Static value type attached to IR nodes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ValueType {
    Void,
    Boolean,
    Text,
    /// Integers in `[low, high]`; either bound may be unbounded.
    Integer { low: IntBound, high: IntBound },
    List(Arc<ValueType>),
    Array(Arc<ValueType>, usize),
    Set(Arc<ValueType>),
    /// Key is always `Integer` or `Text`, see [`ValueType::table`].
    Table(Arc<ValueType>, Arc<ValueType>),
}

impl ValueType {
    /// The unbounded integer type.
    pub fn int() -> Self {
        ValueType::Integer {
            low: IntBound::NegInfinity,
            high: IntBound::PosInfinity,
        }
    }

    /// Integers in a range. `None` stands for the matching infinity.
    pub fn int_range(low: Option<BigInt>, high: Option<BigInt>) -> Self {
        ValueType::Integer {
            low: low.map_or(IntBound::NegInfinity, IntBound::Finite),
            high: high.map_or(IntBound::PosInfinity, IntBound::Finite),
        }
    }

    /// The singleton type of one integer value.
    pub fn int_exact(value: &BigInt) -> Self {
        Self::int_range(Some(value.clone()), Some(value.clone()))
    }

    pub fn list(member: ValueType) -> Self {
        ValueType::List(Arc::new(member))
    }

    pub fn array(member: ValueType, length: usize) -> Self {
        ValueType::Array(Arc::new(member), length)
    }

    pub fn set(member: ValueType) -> Self {
        ValueType::Set(Arc::new(member))
    }

    /// A table type, or `None` when the key is neither integer nor text.
    pub fn table(key: ValueType, value: ValueType) -> Option<Self> {
        match key {
            ValueType::Integer { .. } | ValueType::Text => {
                Some(ValueType::Table(Arc::new(key), Arc::new(value)))
            }
            _ => None,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, ValueType::Integer { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ValueType::Text)
    }

    /// Whether every value of this integer type fits in `[min, max]`.
    ///
    /// Non-integer types never fit.
    pub fn fits_within(&self, min: &BigInt, max: &BigInt) -> bool {
        match self {
            ValueType::Integer {
                low: IntBound::Finite(low),
                high: IntBound::Finite(high),
            } => low >= min && high <= max,
            _ => false,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Void => f.write_str("Void"),
            ValueType::Boolean => f.write_str("Bool"),
            ValueType::Text => f.write_str("Text"),
            ValueType::Integer { low, high } => write!(f, "{low}..{high}"),
            ValueType::List(member) => write!(f, "(List {member})"),
            ValueType::Array(member, length) => write!(f, "(Array {member} {length})"),
            ValueType::Set(member) => write!(f, "(Set {member})"),
            ValueType::Table(key, value) => write!(f, "(Table {key} {value})"),
        }
    }
}

#[cfg(test)]
mod tests;
