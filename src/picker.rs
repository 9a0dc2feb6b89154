use std::path::PathBuf;

/// Title shown on the native folder dialog.
pub const DIALOG_TITLE: &str = "Select folder to clean .meta files";

/// Supplies the directory to clean. `None` means the user chose nothing.
pub trait FolderPicker {
    fn select_directory(&self) -> Option<PathBuf>;
}

/// Native OS directory dialog.
#[derive(Debug, Default)]
pub struct NativePicker;

impl FolderPicker for NativePicker {
    fn select_directory(&self) -> Option<PathBuf> {
        tracing::debug!("opening folder dialog");
        rfd::FileDialog::new()
            .set_title(DIALOG_TITLE)
            .pick_folder()
    }
}

/// A directory chosen ahead of time, e.g. on the command line.
#[derive(Debug)]
pub struct FixedPicker(pub Option<PathBuf>);

impl FolderPicker for FixedPicker {
    fn select_directory(&self) -> Option<PathBuf> {
        self.0.clone()
    }
}
