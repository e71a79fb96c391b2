//! Golf compiler driver.
//!
//! Source text in, shortest program per target out:
//!
//! ```text
//! read → lower → golf stage → per target { emit stage → resolve } → pick shortest
//! ```
//!
//! The binary is a thin shell over [`compile_file`] and [`render_report`].

mod error;
mod options;
mod report;

use std::path::Path;
use std::sync::Once;

use golf_canon::parse_program;
use golf_langs::{find_lang, golf_stage, languages};
use golf_search::{compile_all, CompilationReport, Language};

pub use error::DriverError;
pub use options::{parse_compile_options, CompileOptions};
pub use report::{render_report, target_diagnostics};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber once, if `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

/// The targets `options` asks for, in declaration order when unrestricted.
pub fn select_languages(options: &CompileOptions) -> Result<Vec<Language>, DriverError> {
    match &options.langs {
        None => Ok(languages()),
        Some(keys) => keys
            .iter()
            .map(|key| find_lang(key).ok_or_else(|| DriverError::UnknownLanguage(key.clone())))
            .collect(),
    }
}

/// Compile `source` for every selected target.
///
/// Frontend and golf-stage errors are fatal. Failures of individual
/// targets are recorded in the report instead.
#[tracing::instrument(level = "debug", skip_all)]
pub fn compile_source(
    source: &str,
    options: &CompileOptions,
) -> Result<CompilationReport, DriverError> {
    let languages = select_languages(options)?;
    let program = parse_program(source)?;
    tracing::debug!(nodes = program.size(), "lowered program");
    let golfed = golf_stage().run(&program)?;
    Ok(compile_all(&languages, &golfed, options.parallel))
}

pub fn compile_file(path: &Path, options: &CompileOptions) -> Result<CompilationReport, DriverError> {
    let source = std::fs::read_to_string(path).map_err(|source| DriverError::Io {
        path: path.display().to_string(),
        message: source.to_string(),
    })?;
    compile_source(&source, options)
}
