use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TreeError};

/// A single file or directory found while listing a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Full path to the file or directory
    pub path: PathBuf,

    /// Raw file name, used for ordering
    pub file_name: OsString,

    /// Display name (lossy for non-UTF-8 names)
    pub name: String,

    /// True if this is a directory (symlinks are followed)
    pub is_dir: bool,
}

impl Entry {
    pub fn new(path: PathBuf, is_dir: bool) -> Self {
        let file_name = path.file_name().map(OsString::from).unwrap_or_default();
        let name = file_name.to_string_lossy().into_owned();
        Self {
            path,
            file_name,
            name,
            is_dir,
        }
    }
}

/// List the immediate children of `dir`, unsorted and unfiltered.
///
/// Fails with [`TreeError::DirectoryAccess`] if `dir` is missing, is not a
/// directory, or cannot be read. An entry whose metadata cannot be resolved
/// (a dangling symlink, say) is reported as a file.
pub fn list_dir(dir: &Path) -> Result<Vec<Entry>> {
    let read_dir = fs::read_dir(dir).map_err(|e| TreeError::directory_access(dir, e))?;

    let mut entries = Vec::new();
    for result in read_dir {
        let dir_entry = result.map_err(|e| TreeError::directory_access(dir, e))?;
        let path = dir_entry.path();

        let is_dir = match fs::metadata(&path) {
            Ok(metadata) => metadata.is_dir(),
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "Cannot stat entry, treating as file");
                false
            }
        };

        entries.push(Entry::new(path, is_dir));
    }

    Ok(entries)
}
