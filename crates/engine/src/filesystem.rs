use crate::error::{EngineError, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Check that `dir` exists and is a directory.
///
/// # Errors
/// [`EngineError::PathNotFound`] or [`EngineError::NotADirectory`].
pub fn validate_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Err(EngineError::PathNotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(EngineError::NotADirectory(dir.to_path_buf()));
    }
    Ok(())
}

/// List the regular files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into. Symlinks, sockets, fifos and other
/// non-regular entries are left out without being opened. Hidden files and
/// ignore files get no special treatment.
///
/// # Errors
/// Returns a path error if `dir` is not an existing directory, or
/// [`EngineError::Walk`] if the directory cannot be listed.
pub fn collect_files(dir: &Path) -> Result<Vec<PathBuf>> {
    validate_dir(dir)?;

    let walker = WalkBuilder::new(dir)
        .standard_filters(false)
        .follow_links(false)
        .max_depth(Some(1))
        .sort_by_file_name(std::ffi::OsStr::cmp)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.depth() == 0 {
            continue;
        }
        if entry.file_type().is_some_and(|ft| ft.is_file()) {
            files.push(entry.into_path());
        }
    }

    log::debug!("found {} regular files in {}", files.len(), dir.display());
    Ok(files)
}
