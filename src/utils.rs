use std::ffi::OsStr;
use std::path::Path;

/// Remove a single file or symlink. Returns bytes freed on success.
pub fn remove_file(path: &Path) -> Result<u64, std::io::Error> {
    let size = path.symlink_metadata().map(|m| m.len()).unwrap_or(0);
    std::fs::remove_file(path)?;
    Ok(size)
}

/// Byte-wise, case-sensitive suffix check that also works for non-UTF-8 names.
pub fn has_suffix(name: &OsStr, suffix: &str) -> bool {
    name.as_encoded_bytes().ends_with(suffix.as_bytes())
}

/// Format byte count as human-readable string.
pub fn format_size(bytes: u64) -> String {
    if bytes >= 1_073_741_824 {
        format!("{:.2} GB", bytes as f64 / 1_073_741_824.0)
    } else if bytes >= 1_048_576 {
        format!("{:.2} MB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1_024 {
        format!("{:.2} KB", bytes as f64 / 1_024.0)
    } else {
        format!("{} B", bytes)
    }
}
