use super::*;
use pretty_assertions::assert_eq;

#[test]
fn code_round_trips_through_str() {
    for &code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(code));
    }
    assert_eq!("e5002".parse::<ErrorCode>(), Ok(ErrorCode::E5002));
    assert!("E9999".parse::<ErrorCode>().is_err());
}

#[test]
fn target_errors() {
    assert!(ErrorCode::E4001.is_target_error());
    assert!(ErrorCode::E5003.is_target_error());
    assert!(!ErrorCode::E0003.is_target_error());
    assert!(!ErrorCode::E1001.is_target_error());
    assert!(!ErrorCode::E6002.is_target_error());
}

struct Failure(ErrorCode);

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed with {}", self.0)
    }
}

impl Coded for Failure {
    fn code(&self) -> ErrorCode {
        self.0
    }
}

#[test]
fn severity_follows_the_code() {
    assert!(Diagnostic::from_error(&Failure(ErrorCode::E1001)).is_error());
    assert!(Diagnostic::from_error(&Failure(ErrorCode::E6003)).is_error());
    let warning = Diagnostic::from_error(&Failure(ErrorCode::E5004));
    assert!(!warning.is_error());
    assert_eq!(warning.to_string(), "warning[E5004]: failed with E5004");
}

#[test]
fn display_with_notes() {
    let diagnostic = Diagnostic::error(ErrorCode::E1001, "bad arity")
        .with_note("first")
        .with_note("second");
    assert!(diagnostic.is_error());
    assert_eq!(
        diagnostic.to_string(),
        "error[E1001]: bad arity\n  = note: first\n  = note: second"
    );
}

#[test]
fn warning_display() {
    let diagnostic = Diagnostic::warning(ErrorCode::E5001, "unsupported");
    assert!(!diagnostic.is_error());
    assert_eq!(diagnostic.to_string(), "warning[E5001]: unsupported");
}
