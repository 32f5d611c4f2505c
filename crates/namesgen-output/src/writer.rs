//! Writing generated source to disk.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::{OutputError, Result};

/// How an existing output file is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Keep existing content and add the new block after it.
    #[default]
    Append,
    /// Replace existing content.
    Truncate,
}

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| OutputError::Open {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Write `contents` to `path`, creating the file if needed.
///
/// The file handle is closed before returning on every path.
pub fn write_output(path: &Path, contents: &[u8], mode: WriteMode) -> Result<()> {
    ensure_parent_dir(path)?;

    let mut options = OpenOptions::new();
    options.create(true);
    match mode {
        WriteMode::Append => {
            options.append(true);
        }
        WriteMode::Truncate => {
            options.write(true).truncate(true);
        }
    }
    let mut file = options.open(path).map_err(|source| OutputError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let write_err = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };
    file.write_all(contents).map_err(write_err)?;
    file.sync_all().map_err(write_err)?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), ?mode, "wrote output");
    Ok(())
}
