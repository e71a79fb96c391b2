//! Literal encoding.
//!
//! Lengths are measured in bytes of the emitted source.

use golf_ir::Node;
use num_bigint::BigInt;

use crate::error::EmitError;

/// One way a target can quote text.
#[derive(Copy, Clone, Debug)]
pub struct QuotingScheme {
    pub open: &'static str,
    pub close: &'static str,
    /// Characters that cannot appear raw, with their escaped spelling.
    pub escapes: &'static [(char, &'static str)],
}

impl QuotingScheme {
    pub fn encode(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + self.open.len() + self.close.len());
        out.push_str(self.open);
        for c in value.chars() {
            match self.escapes.iter().find(|(raw, _)| *raw == c) {
                Some((_, escaped)) => out.push_str(escaped),
                None => out.push(c),
            }
        }
        out.push_str(self.close);
        out
    }

    /// Inverse of [`QuotingScheme::encode`].
    ///
    /// Returns `None` when `literal` is not delimited by this scheme.
    pub fn decode(&self, literal: &str) -> Option<String> {
        let mut rest = literal.strip_prefix(self.open)?.strip_suffix(self.close)?;
        let mut out = String::with_capacity(rest.len());
        'outer: while !rest.is_empty() {
            for (raw, escaped) in self.escapes {
                if let Some(after) = rest.strip_prefix(escaped) {
                    out.push(*raw);
                    rest = after;
                    continue 'outer;
                }
            }
            let mut chars = rest.chars();
            out.extend(chars.next());
            rest = chars.as_str();
        }
        Some(out)
    }
}

/// The shortest encoding of `value` over `schemes`; the earlier scheme
/// wins a tie. `None` only when `schemes` is empty.
pub fn emit_text_literal(value: &str, schemes: &[QuotingScheme]) -> Option<String> {
    schemes
        .iter()
        .map(|scheme| scheme.encode(value))
        .fold(None, |best: Option<String>, candidate| match best {
            Some(best) if best.len() <= candidate.len() => Some(best),
            _ => Some(candidate),
        })
}

pub fn emit_integer_literal(value: &BigInt) -> String {
    value.to_str_radix(10)
}

/// The integers a target can write as a literal.
#[derive(Clone, Debug)]
pub struct IntegerRange {
    pub target: &'static str,
    pub min: BigInt,
    pub max: BigInt,
}

impl IntegerRange {
    /// Signed 64-bit integers.
    pub fn i64(target: &'static str) -> Self {
        IntegerRange {
            target,
            min: BigInt::from(i64::MIN),
            max: BigInt::from(i64::MAX),
        }
    }

    pub fn contains(&self, value: &BigInt) -> bool {
        *value >= self.min && *value <= self.max
    }

    /// Fail on a node annotated with an integer type that reaches outside
    /// the range. Unannotated nodes and other types pass.
    pub fn check_type(&self, node: &Node) -> Result<(), EmitError> {
        match node.annotated_type() {
            Some(ty) if ty.is_integer() && !ty.fits_within(&self.min, &self.max) => {
                Err(EmitError::OutOfRange {
                    target: self.target,
                    value: ty.to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    /// [`emit_integer_literal`], failing outside the range.
    pub fn emit(&self, value: &BigInt) -> Result<String, EmitError> {
        if self.contains(value) {
            Ok(emit_integer_literal(value))
        } else {
            Err(EmitError::OutOfRange {
                target: self.target,
                value: value.to_string(),
            })
        }
    }
}
