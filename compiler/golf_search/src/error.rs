//! Per-target failures.

use golf_diagnostic::{Coded, ErrorCode};
use golf_emit::EmitError;
use golf_plugins::StageError;

/// Why one target produced no program. Never aborts the other targets.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum TargetError {
    #[error(transparent)]
    Stage(#[from] StageError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

impl Coded for TargetError {
    fn code(&self) -> ErrorCode {
        match self {
            TargetError::Stage(error) => error.code(),
            TargetError::Emit(error) => error.code(),
        }
    }
}
