//! Diagnostics for the golf compiler.
//!
//! Every error type in the workspace maps to an [`ErrorCode`]. The driver
//! turns errors into [`Diagnostic`]s for display:
//!
//! ```text
//! error[E1001]: invalid argument count in application of `sub`: expected 2 but got 3
//!   = note: while compiling for Lua
//! ```

mod error_code;

use std::fmt;

pub use error_code::ErrorCode;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Implemented by every error type that can be reported.
pub trait Coded: fmt::Display {
    fn code(&self) -> ErrorCode;
}

/// A rendered compiler message.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: ErrorCode,
    pub message: String,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            code,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    /// A warning, used for per-target failures that do not stop compilation.
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            code,
            message: message.into(),
            notes: Vec::new(),
        }
    }

    /// Build a diagnostic from any coded error.
    ///
    /// Errors that only disqualify one target are warnings.
    pub fn from_error(error: &impl Coded) -> Self {
        let code = error.code();
        if code.is_target_error() {
            Self::warning(code, error.to_string())
        } else {
            Self::error(code, error.to_string())
        }
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
