use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::FileEntry;

/// List the regular files directly contained in a directory, sorted by
/// name. Subdirectories are not entered.
pub fn list_files(dir: &Path) -> Result<Vec<FileEntry>> {
    if !dir.is_dir() {
        return Err(Error::InvalidPath(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => files.push(FileEntry::new(dir, &name)),
            Err(name) => tracing::warn!("skipping file with non-UTF-8 name: {:?}", name),
        }
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

/// Create a directory if it doesn't exist.
pub fn ensure_directory_exists(dir: &Path) -> Result<()> {
    if !dir.exists() {
        tracing::debug!("creating directory {}", dir.display());
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
