//! Stage errors.

use golf_diagnostic::{Coded, ErrorCode};

/// A stage that failed to settle. Fatal for the target running it.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum StageError {
    #[error("{stage} stage did not reach a fixpoint within {passes} passes (last rewrite by `{plugin}`)")]
    NoFixpoint {
        stage: &'static str,
        passes: usize,
        plugin: String,
    },
}

impl Coded for StageError {
    fn code(&self) -> ErrorCode {
        match self {
            StageError::NoFixpoint { .. } => ErrorCode::E4001,
        }
    }
}
