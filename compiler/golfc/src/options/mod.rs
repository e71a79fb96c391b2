//! Command-line options.

use std::path::PathBuf;

/// Options for one `golfc` run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompileOptions {
    /// Input file (first positional argument).
    pub file: Option<PathBuf>,
    /// Target names or extensions (`--lang=lua,py`); `None` means all.
    pub langs: Option<Vec<String>>,
    /// Compile targets in parallel (disabled by `--sequential`).
    pub parallel: bool,
    /// Print every target's program, not just the shortest (`--all`).
    pub show_all: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            file: None,
            langs: None,
            parallel: true,
            show_all: false,
        }
    }
}

/// Parse `golfc` arguments, program name excluded.
///
/// Unknown flags are reported and ignored.
pub fn parse_compile_options(args: &[String]) -> CompileOptions {
    let mut options = CompileOptions::default();

    for arg in args {
        if let Some(langs) = arg.strip_prefix("--lang=") {
            let keys = langs
                .split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_string);
            options.langs.get_or_insert_with(Vec::new).extend(keys);
        } else if arg == "--sequential" {
            options.parallel = false;
        } else if arg == "--all" {
            options.show_all = true;
        } else if arg.starts_with('-') {
            eprintln!("warning: unknown option '{arg}'");
        } else if options.file.is_none() {
            options.file = Some(PathBuf::from(arg));
        } else {
            eprintln!("warning: extra argument '{arg}' ignored");
        }
    }

    options
}
