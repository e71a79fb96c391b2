use super::*;
use golf_diagnostic::{ErrorCode, Severity};
use golf_plugins::StageError;
use golf_search::{Candidate, TargetError, TargetOutcome};
use pretty_assertions::assert_eq;

fn success(language: &'static str, text: &str) -> TargetOutcome {
    TargetOutcome {
        language,
        result: Ok(Candidate::new(text.to_string())),
    }
}

fn failure(language: &'static str) -> TargetOutcome {
    TargetOutcome {
        language,
        result: Err(TargetError::Stage(StageError::NoFixpoint {
            stage: "emit",
            passes: 256,
            plugin: "flip".to_string(),
        })),
    }
}

fn sample() -> CompilationReport {
    CompilationReport {
        outcomes: vec![
            success("Lua", "print\"ab\""),
            failure("GolfScript"),
            success("Python", "print(\"ab\")"),
        ],
    }
}

#[test]
fn shortest_only_by_default() {
    assert_eq!(render_report(&sample(), false), Some("print\"ab\"".to_string()));
}

#[test]
fn all_successes_with_headers() {
    assert_eq!(
        render_report(&sample(), true),
        Some("-- Lua (9) *\nprint\"ab\"\n-- Python (11)\nprint(\"ab\")".to_string())
    );
}

#[test]
fn nothing_to_render_without_successes() {
    let report = CompilationReport {
        outcomes: vec![failure("Lua")],
    };
    assert_eq!(render_report(&report, true), None);
}

#[test]
fn failures_become_warnings() {
    let diagnostics = target_diagnostics(&sample());
    assert_eq!(diagnostics.len(), 1);
    let warning = &diagnostics[0];
    assert_eq!(warning.severity, Severity::Warning);
    assert_eq!(warning.code, ErrorCode::E4001);
    assert_eq!(warning.notes, vec!["while compiling for GolfScript".to_string()]);
}
