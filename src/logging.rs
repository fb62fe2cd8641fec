//! Debug log sink for the binary
//!
//! The picker owns stderr while it runs, so log records are appended to a
//! file under the user's cache directory instead.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use env_logger::{Builder, Target};

const LOG_FILE_NAME: &str = "envpick.log";

/// `<cache dir>/envpick/envpick.log`, if the platform has a cache dir
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("envpick").join(LOG_FILE_NAME))
}

/// Open `path` for appending, creating parent directories as needed
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Logger builder that reads `RUST_LOG` and writes to `file`
pub fn builder(file: File) -> Builder {
    let mut builder = Builder::from_default_env();
    builder.target(Target::Pipe(Box::new(file)));
    builder
}

/// Install the file logger
///
/// Logging stays off when no log file can be opened.
pub fn init() {
    let Some(path) = log_file_path() else {
        return;
    };
    if let Ok(file) = open_log_file(&path) {
        let _ = builder(file).try_init();
    }
}
