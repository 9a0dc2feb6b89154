use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use crate::utils;

/// The file name suffix this tool deletes.
pub const META_SUFFIX: &str = ".meta";

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Path does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Cannot read {}: {source}", path.display())]
    RootUnreadable { path: PathBuf, source: io::Error },

    #[error("Not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("Suffix must not be empty")]
    EmptySuffix,

    #[error("Failed to read directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to remove {}: {source}", path.display())]
    Remove { path: PathBuf, source: io::Error },

    #[error("Failed to write output: {0}")]
    Report(#[source] io::Error),
}

impl CleanError {
    /// Closest `io::ErrorKind` for this failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::RootNotFound(_) => io::ErrorKind::NotFound,
            Self::RootNotDirectory(_) | Self::EmptySuffix => io::ErrorKind::InvalidInput,
            Self::Walk(e) => e.io_error().map_or(io::ErrorKind::Other, io::Error::kind),
            Self::RootUnreadable { source, .. }
            | Self::Remove { source, .. }
            | Self::Report(source) => source.kind(),
        }
    }
}

/// The delete primitive. Returns bytes freed on success.
pub trait Remove {
    fn remove(&mut self, path: &Path) -> io::Result<u64>;
}

/// Removes files from the real filesystem.
#[derive(Debug, Default)]
pub struct FsRemover;

impl Remove for FsRemover {
    fn remove(&mut self, path: &Path) -> io::Result<u64> {
        utils::remove_file(path)
    }
}

/// Totals for one completed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanReport {
    pub deleted: usize,
    pub bytes_freed: u64,
}

/// Deletes every file under `root` whose name ends with `suffix`.
pub struct SuffixCleaner<R = FsRemover> {
    root: PathBuf,
    suffix: String,
    remover: R,
}

impl SuffixCleaner<FsRemover> {
    pub fn new(root: impl Into<PathBuf>, suffix: impl Into<String>) -> Result<Self, CleanError> {
        Self::with_remover(root, suffix, FsRemover)
    }
}

impl<R: Remove> SuffixCleaner<R> {
    /// Validates the root and suffix up front so a bad root fails before any deletion.
    pub fn with_remover(
        root: impl Into<PathBuf>,
        suffix: impl Into<String>,
        remover: R,
    ) -> Result<Self, CleanError> {
        let root = root.into();
        let suffix = suffix.into();

        if suffix.is_empty() {
            return Err(CleanError::EmptySuffix);
        }
        let meta = match fs::metadata(&root) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(CleanError::RootNotFound(root));
            }
            Err(source) => return Err(CleanError::RootUnreadable { path: root, source }),
        };
        if !meta.is_dir() {
            return Err(CleanError::RootNotDirectory(root));
        }

        Ok(Self {
            root,
            suffix,
            remover,
        })
    }

    /// Walk the tree and remove every match, calling `on_deleted` with the
    /// full path of each file right after it is gone.
    ///
    /// The first walk, remove or notification error aborts the run. Files
    /// removed before the error stay removed.
    pub fn clean<F>(&mut self, mut on_deleted: F) -> Result<CleanReport, CleanError>
    where
        F: FnMut(&Path) -> io::Result<()>,
    {
        tracing::debug!(root = %self.root.display(), suffix = %self.suffix, "starting clean");

        let mut report = CleanReport::default();

        // Files sort before directories so a directory's own files are
        // handled before anything below it. Symlinks are never descended, so
        // they sort with the files without a stat.
        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by(|a, b| {
                a.file_type()
                    .is_dir()
                    .cmp(&b.file_type().is_dir())
                    .then_with(|| a.file_name().cmp(b.file_name()))
            });

        for entry in walker {
            let entry = entry.inspect_err(|e| {
                tracing::warn!(deleted = report.deleted, "walk failed: {e}");
            })?;

            if is_dir_like(&entry) || !utils::has_suffix(entry.file_name(), &self.suffix) {
                continue;
            }

            let path = entry.path();
            let freed = self.remover.remove(path).map_err(|source| {
                tracing::warn!(path = %path.display(), deleted = report.deleted, "remove failed: {source}");
                CleanError::Remove {
                    path: path.to_path_buf(),
                    source,
                }
            })?;

            report.deleted += 1;
            report.bytes_freed += freed;
            tracing::debug!(path = %path.display(), bytes = freed, "deleted");

            on_deleted(path).map_err(CleanError::Report)?;
        }

        tracing::info!(
            deleted = report.deleted,
            freed = %utils::format_size(report.bytes_freed),
            "clean finished"
        );
        Ok(report)
    }
}

/// Directories, and symlinks that resolve to directories, are never deleted.
fn is_dir_like(entry: &DirEntry) -> bool {
    let ft = entry.file_type();
    ft.is_dir() || (ft.is_symlink() && entry.path().is_dir())
}
