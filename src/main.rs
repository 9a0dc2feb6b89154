mod app;
mod cleaner;
mod cli;
mod exit_codes;
mod logging;
mod output;
mod picker;
mod utils;

use std::io::Write;

use clap::Parser;

use cli::Cli;
use picker::{FixedPicker, FolderPicker, NativePicker};

fn main() {
    let cli = Cli::parse();
    logging::init();

    let picker: Box<dyn FolderPicker> = match cli.path {
        Some(path) => Box::new(FixedPicker(Some(path))),
        None => Box::new(NativePicker),
    };

    let mut stdout = std::io::stdout().lock();
    let code = match app::run(picker.as_ref(), &mut stdout) {
        Ok(app::Outcome::Cleaned(report)) => {
            tracing::debug!(deleted = report.deleted, bytes = report.bytes_freed, "run finished");
            exit_codes::OK
        }
        Ok(app::Outcome::Cancelled) => exit_codes::OK,
        Err(err) => {
            tracing::debug!(kind = ?err.kind(), "run failed");
            output::print_error(&err.to_string());
            exit_codes::FAILED
        }
    };
    std::process::exit(flush_exit_code(&mut stdout, code));
}

/// A failed final flush turns an otherwise clean run into a failure.
fn flush_exit_code(out: &mut dyn Write, code: i32) -> i32 {
    match out.flush() {
        Ok(()) => code,
        Err(err) => {
            output::print_error(&format!("Failed to write output: {err}"));
            exit_codes::FAILED
        }
    }
}
