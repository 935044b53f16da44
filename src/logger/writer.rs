//! File sink for the fmt layer.

use std::fs::{self, File, OpenOptions};
use std::sync::Mutex;

use crate::logger::{FileConfig, LoggerError};

/// Opens the configured log file, creating its parent directory if needed.
///
/// `Mutex<File>` is a `MakeWriter`, so the result plugs straight into
/// `fmt::layer().with_writer(..)`.
pub(crate) fn open_log_file(config: &FileConfig) -> Result<Mutex<File>, LoggerError> {
    if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut options = OpenOptions::new();
    options.create(true);
    if config.append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }

    Ok(Mutex::new(options.open(&config.path)?))
}
