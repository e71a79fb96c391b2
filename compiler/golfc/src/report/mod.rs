//! Report rendering.

use golf_diagnostic::Diagnostic;
use golf_search::CompilationReport;

/// One warning per failed target.
pub fn target_diagnostics(report: &CompilationReport) -> Vec<Diagnostic> {
    report
        .failures()
        .map(|(language, error)| {
            Diagnostic::from_error(error).with_note(format!("while compiling for {language}"))
        })
        .collect()
}

/// The text printed on stdout.
///
/// Normally just the shortest program. With `show_all`, every successful
/// target under a `-- name (length)` header, shortest marked with `*`.
pub fn render_report(report: &CompilationReport, show_all: bool) -> Option<String> {
    let (best_language, best) = report.best()?;
    if !show_all {
        return Some(best.text.clone());
    }
    let sections: Vec<String> = report
        .successes()
        .map(|(language, candidate)| {
            let marker = if language == best_language { " *" } else { "" };
            format!(
                "-- {language} ({}){marker}\n{}",
                candidate.length, candidate.text
            )
        })
        .collect();
    Some(sections.join("\n"))
}

#[cfg(test)]
mod tests;
