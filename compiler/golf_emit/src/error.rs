//! Emission errors.
//!
//! An emission error is fatal for one target only.

use golf_diagnostic::{Coded, ErrorCode};
use golf_ir::Node;

#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum EmitError {
    #[error("{target} cannot emit {node}: {reason}")]
    Unsupported {
        target: &'static str,
        node: String,
        reason: String,
    },

    #[error("{target} emitter reached an unresolved Variants node")]
    UnresolvedVariants { target: &'static str },

    #[error("{target} cannot express {node} with {convention} indexing")]
    IndexConvention {
        target: &'static str,
        node: String,
        convention: &'static str,
    },

    #[error("integer {value} is out of range for {target}")]
    OutOfRange { target: &'static str, value: String },
}

impl EmitError {
    pub fn unsupported(target: &'static str, node: &Node, reason: impl Into<String>) -> Self {
        EmitError::Unsupported {
            target,
            node: node.describe(),
            reason: reason.into(),
        }
    }

    pub fn index_convention(target: &'static str, node: &Node, one_indexed: bool) -> Self {
        EmitError::IndexConvention {
            target,
            node: node.describe(),
            convention: if one_indexed { "one-based" } else { "zero-based" },
        }
    }
}

impl Coded for EmitError {
    fn code(&self) -> ErrorCode {
        match self {
            EmitError::Unsupported { .. } => ErrorCode::E5001,
            EmitError::UnresolvedVariants { .. } => ErrorCode::E5002,
            EmitError::IndexConvention { .. } => ErrorCode::E5003,
            EmitError::OutOfRange { .. } => ErrorCode::E5004,
        }
    }
}
