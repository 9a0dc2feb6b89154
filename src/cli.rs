use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "metasweep",
    about = "Recursively delete .meta files under a folder",
    version
)]
pub struct Cli {
    /// Folder to clean. Opens a folder picker when omitted.
    pub path: Option<PathBuf>,
}
