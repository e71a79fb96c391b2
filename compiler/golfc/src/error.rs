//! Driver errors.

use golf_canon::FrontendError;
use golf_diagnostic::{Coded, ErrorCode};
use golf_plugins::StageError;

/// A failure that stops compilation for every target.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum DriverError {
    #[error("cannot read `{path}`: {message}")]
    Io { path: String, message: String },

    #[error("unknown target `{0}`")]
    UnknownLanguage(String),

    #[error(transparent)]
    Frontend(#[from] FrontendError),

    #[error(transparent)]
    Golf(#[from] StageError),

    #[error("no target produced a program")]
    NoTargetSucceeded,
}

impl Coded for DriverError {
    fn code(&self) -> ErrorCode {
        match self {
            DriverError::Io { .. } => ErrorCode::E6001,
            DriverError::UnknownLanguage(_) => ErrorCode::E6002,
            DriverError::Frontend(error) => error.code(),
            DriverError::Golf(error) => error.code(),
            DriverError::NoTargetSucceeded => ErrorCode::E6003,
        }
    }
}
