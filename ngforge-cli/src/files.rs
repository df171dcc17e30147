//! Filesystem helpers that attach the offending path to every I/O error.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{ScaffoldError, ScaffoldResult};

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ScaffoldError + '_ {
    move |source| ScaffoldError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Create `path` and its parents. Returns `true` when the directory was created.
pub fn ensure_dir(path: &Path) -> ScaffoldResult<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(path).map_err(io_error(path))?;
    tracing::debug!(path = %path.display(), "created directory");
    Ok(true)
}

pub fn read(path: &Path) -> ScaffoldResult<String> {
    fs::read_to_string(path).map_err(io_error(path))
}

/// Write `content`, creating parent directories and replacing any existing file.
pub fn write(path: &Path, content: &str) -> ScaffoldResult<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, content).map_err(io_error(path))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Write `content` unless `path` already exists. Returns `true` when written.
pub fn write_if_absent(path: &Path, content: &str) -> ScaffoldResult<bool> {
    if path.exists() {
        tracing::debug!(path = %path.display(), "kept existing file");
        return Ok(false);
    }
    write(path, content)?;
    Ok(true)
}

/// Write `content` to a path that must not exist yet.
pub fn create_new(path: &Path, content: &str) -> ScaffoldResult<()> {
    if path.exists() {
        return Err(ScaffoldError::ArtifactExists(path.to_path_buf()));
    }
    write(path, content)
}

/// Remove a file. Returns `true` when something was removed.
pub fn remove(path: &Path) -> ScaffoldResult<bool> {
    match fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "removed file");
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(io_error(path)(e)),
    }
}

/// Create `dir` with an empty `.gitkeep` so it survives version control.
pub fn ensure_kept_dir(dir: &Path) -> ScaffoldResult<bool> {
    let created = ensure_dir(dir)?;
    write_if_absent(&dir.join(".gitkeep"), "")?;
    Ok(created)
}
