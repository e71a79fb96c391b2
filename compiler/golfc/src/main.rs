//! Golf Compiler CLI
//!
//! Compiles one source file for every target and prints the shortest.

use golf_diagnostic::{Coded, Diagnostic};
use golfc::{
    compile_file, init_tracing, parse_compile_options, render_report, target_diagnostics,
    DriverError,
};

fn print_usage() {
    eprintln!("Usage: golfc <file> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --lang=<names>   Targets to try, comma separated (default: all)");
    eprintln!("  --all            Print every target's program, not just the shortest");
    eprintln!("  --sequential     Compile targets one at a time");
    eprintln!();
    eprintln!("Set RUST_LOG=debug to trace the pipeline.");
}

fn fail(error: &DriverError) -> ! {
    eprintln!("{}", Diagnostic::error(error.code(), error.to_string()));
    std::process::exit(1);
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_compile_options(&args);
    let Some(path) = options.file.clone() else {
        print_usage();
        std::process::exit(1);
    };

    let report = match compile_file(&path, &options) {
        Ok(report) => report,
        Err(error) => fail(&error),
    };

    for diagnostic in target_diagnostics(&report) {
        eprintln!("{diagnostic}");
    }

    match render_report(&report, options.show_all) {
        Some(output) => println!("{output}"),
        None => fail(&DriverError::NoTargetSucceeded),
    }
}
