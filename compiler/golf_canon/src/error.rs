//! Frontend error types.

use std::fmt;

use golf_diagnostic::{Coded, ErrorCode};

/// Accepted argument counts for one application.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ArityRange {
    pub low: usize,
    /// `None` for n-ary applications.
    pub high: Option<usize>,
}

impl ArityRange {
    pub const fn exactly(n: usize) -> Self {
        ArityRange {
            low: n,
            high: Some(n),
        }
    }

    pub const fn between(low: usize, high: usize) -> Self {
        ArityRange {
            low,
            high: Some(high),
        }
    }

    pub const fn at_least(low: usize) -> Self {
        ArityRange { low, high: None }
    }

    pub fn contains(&self, n: usize) -> bool {
        n >= self.low && self.high.map_or(true, |high| n <= high)
    }
}

impl fmt::Display for ArityRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.high {
            Some(high) if high == self.low => write!(f, "{high}"),
            Some(high) => write!(f, "{}..{high}", self.low),
            None => write!(f, "{}..", self.low),
        }
    }
}

/// A malformed call-tree. Always fatal.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum LoweringError {
    #[error(
        "invalid argument count in application of `{op}`: expected {expected} but got {actual}"
    )]
    Arity {
        op: String,
        expected: ArityRange,
        actual: usize,
    },

    #[error("application `{op}` cannot take a block as argument {position}")]
    UnexpectedBlock { op: String, position: usize },

    #[error("application `{op}` requires a block as argument {position}, but got {found}")]
    ExpectedBlock {
        op: String,
        position: usize,
        found: &'static str,
    },

    #[error("application `{op}` requires an identifier as argument {position}, but got {found}")]
    ExpectedIdentifier {
        op: String,
        position: usize,
        found: &'static str,
    },

    #[error("unrecognized builtin `{0}`")]
    UnknownBuiltin(String),

    #[error("unrecognized type `{0}`")]
    UnknownType(String),

    #[error("type `{callee}` expects a number as argument {position}, but got a type")]
    ExpectedNumber { callee: String, position: usize },

    #[error("type `{callee}` expects a type as argument {position}, but got a number")]
    ExpectedType { callee: String, position: usize },

    #[error("type `{callee}` cannot have length {value}")]
    InvalidLength { callee: String, value: String },

    #[error("unexpected key type `{0}` for table")]
    InvalidTableKey(String),
}

impl Coded for LoweringError {
    fn code(&self) -> ErrorCode {
        match self {
            LoweringError::Arity { .. } => ErrorCode::E1001,
            LoweringError::UnexpectedBlock { .. } => ErrorCode::E1002,
            LoweringError::ExpectedBlock { .. } => ErrorCode::E1003,
            LoweringError::ExpectedIdentifier { .. } => ErrorCode::E1004,
            LoweringError::UnknownBuiltin(_) => ErrorCode::E1005,
            LoweringError::UnknownType(_) => ErrorCode::E1006,
            LoweringError::ExpectedNumber { .. }
            | LoweringError::ExpectedType { .. }
            | LoweringError::InvalidLength { .. } => ErrorCode::E1007,
            LoweringError::InvalidTableKey(_) => ErrorCode::E1008,
        }
    }
}

/// Input the reader could not turn into exactly one call-tree sequence.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum ReadError {
    #[error("unexpected token `{found}` at offset {offset}")]
    UnexpectedToken { found: String, offset: usize },

    #[error("unexpected end of code")]
    UnexpectedEnd,

    #[error("ambiguous parse of code ({parses} parses)")]
    Ambiguous { parses: usize },

    #[error("unrecognized input `{text}` at offset {offset}")]
    InvalidToken { text: String, offset: usize },
}

impl Coded for ReadError {
    fn code(&self) -> ErrorCode {
        match self {
            ReadError::UnexpectedToken { .. } => ErrorCode::E0001,
            ReadError::UnexpectedEnd => ErrorCode::E0002,
            ReadError::Ambiguous { .. } => ErrorCode::E0003,
            ReadError::InvalidToken { .. } => ErrorCode::E0004,
        }
    }
}

/// Any failure between source text and an IR `Program`.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum FrontendError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Lower(#[from] LoweringError),
}

impl Coded for FrontendError {
    fn code(&self) -> ErrorCode {
        match self {
            FrontendError::Read(error) => error.code(),
            FrontendError::Lower(error) => error.code(),
        }
    }
}
