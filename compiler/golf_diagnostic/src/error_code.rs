//! Error codes for all compiler diagnostics.
//!
//! Each code is a unique identifier (e.g., `E1001`) whose first digit names
//! the phase that produced it.

use std::fmt;

/// Error codes for all compiler diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Reader errors (malformed or ambiguous input)
/// - E1xxx: Lowering errors (call-tree → IR)
/// - E4xxx: Plugin stage errors
/// - E5xxx: Emission errors (fatal for one target only)
/// - E6xxx: Driver errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Reader Errors (E0xxx)
    /// Unexpected token
    E0001,
    /// Unexpected end of code
    E0002,
    /// Ambiguous parse
    E0003,
    /// Unrecognized character sequence
    E0004,

    // Lowering Errors (E1xxx)
    /// Argument count mismatch
    E1001,
    /// Block passed where an expression is required
    E1002,
    /// Expression passed where a block is required
    E1003,
    /// Identifier required
    E1004,
    /// Unrecognized builtin operation
    E1005,
    /// Unrecognized type name
    E1006,
    /// Type constructor argument has the wrong kind
    E1007,
    /// Table key type is neither integer nor text
    E1008,

    // Plugin Errors (E4xxx)
    /// Stage did not reach a fixpoint within the pass budget
    E4001,

    // Emission Errors (E5xxx)
    /// Construct has no representation in the target
    E5001,
    /// `Variants` node reached the emitter
    E5002,
    /// Indexing convention not expressible in the target
    E5003,
    /// Integer literal outside the target's range
    E5004,

    // Driver Errors (E6xxx)
    /// Input file could not be read
    E6001,
    /// Requested target does not exist
    E6002,
    /// Every target failed
    E6003,
}

impl ErrorCode {
    /// All codes, in declaration order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E4001,
        ErrorCode::E5001,
        ErrorCode::E5002,
        ErrorCode::E5003,
        ErrorCode::E5004,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
    ];

    /// Get the code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E4001 => "E4001",
            ErrorCode::E5001 => "E5001",
            ErrorCode::E5002 => "E5002",
            ErrorCode::E5003 => "E5003",
            ErrorCode::E5004 => "E5004",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
        }
    }

    /// Errors that only disqualify one target.
    pub fn is_target_error(&self) -> bool {
        self.as_str().starts_with("E4") || self.as_str().starts_with("E5")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a code string like `"E1001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == upper)
            .ok_or(())
    }
}
