use std::io::Write;

use crate::cleaner::{CleanError, CleanReport, FsRemover, Remove, SuffixCleaner, META_SUFFIX};
use crate::output;
use crate::picker::FolderPicker;

/// How a run ended, when it did not fail.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// No folder was chosen; nothing was touched.
    Cancelled,
    Cleaned(CleanReport),
}

/// Ask the picker for a folder, then delete every `.meta` file below it,
/// writing progress and the summary to `out`.
pub fn run(picker: &dyn FolderPicker, out: &mut dyn Write) -> Result<Outcome, CleanError> {
    run_with_remover(picker, out, FsRemover)
}

/// Same as [`run`], deleting through `remover`. On an abort the `Deleted:`
/// lines already written stay and no summary is printed.
pub fn run_with_remover<R: Remove>(
    picker: &dyn FolderPicker,
    out: &mut dyn Write,
    remover: R,
) -> Result<Outcome, CleanError> {
    let root = match picker.select_directory() {
        Some(path) if !path.as_os_str().is_empty() => path,
        _ => {
            tracing::debug!("no folder selected");
            output::print_no_folder(out).map_err(CleanError::Report)?;
            return Ok(Outcome::Cancelled);
        }
    };

    let mut cleaner = SuffixCleaner::with_remover(root, META_SUFFIX, remover)?;
    let report = cleaner.clean(|path| output::print_deleted(out, path))?;
    output::print_done(out, report.deleted).map_err(CleanError::Report)?;

    Ok(Outcome::Cleaned(report))
}
