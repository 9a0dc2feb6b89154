use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::cleaner::META_SUFFIX;

pub fn print_deleted(out: &mut dyn Write, path: &Path) -> io::Result<()> {
    writeln!(out, "{} {}", "Deleted:".red(), path.display())
}

pub fn print_no_folder(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", "No folder selected.".yellow())
}

pub fn print_done(out: &mut dyn Write, count: usize) -> io::Result<()> {
    writeln!(
        out,
        "\n{} {}",
        "Done.".green().bold(),
        format!("Deleted {count} {META_SUFFIX} file(s).").green()
    )
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "Error:".red().bold(), msg.red());
}
