//! Writing generated artifacts to disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::OutputFiles;
use crate::error::{GenerateError, Result};
use crate::openapi::GeneratedArtifacts;

fn write_error(path: &Path) -> impl FnOnce(io::Error) -> GenerateError + '_ {
    move |source| GenerateError::OutputWrite {
        path: path.to_path_buf(),
        source,
    }
}

/// Temporary sibling used while replacing `path`.
fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}

/// Replace `path` with `contents`.
///
/// The text goes to a temporary sibling first; the old file is removed and
/// the sibling moved into place, so a failed write never leaves a truncated
/// file behind.
pub fn replace_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error(parent))?;
    }

    let temp_path = temp_sibling(path);
    fs::write(&temp_path, contents).map_err(write_error(&temp_path))?;

    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            let _ = fs::remove_file(&temp_path);
            return Err(write_error(path)(e));
        }
    }
    fs::rename(&temp_path, path).map_err(write_error(path))?;

    debug!(path = %path.display(), bytes = contents.len(), "Wrote file");
    Ok(())
}

/// Write `contents` next to `target` without touching it.
///
/// Fails up front when `target` is a directory, which no rename could replace.
fn stage(target: &Path, contents: &str) -> Result<PathBuf> {
    if fs::symlink_metadata(target).is_ok_and(|m| m.is_dir()) {
        return Err(write_error(target)(io::Error::new(
            io::ErrorKind::IsADirectory,
            "output path is a directory",
        )));
    }
    let temp_path = temp_sibling(target);
    fs::write(&temp_path, contents).map_err(write_error(&temp_path))?;
    Ok(temp_path)
}

fn discard(staged: &[(PathBuf, PathBuf)]) {
    for (temp_path, _) in staged {
        let _ = fs::remove_file(temp_path);
    }
}

/// Write the three artifacts into `dir`, creating it if needed.
///
/// Every file is staged before any is moved into place, so a failure while
/// writing leaves the previous set of outputs untouched.
pub fn write_artifacts(
    dir: &Path,
    files: &OutputFiles,
    artifacts: &GeneratedArtifacts,
) -> Result<()> {
    fs::create_dir_all(dir).map_err(write_error(dir))?;

    let mut staged: Vec<(PathBuf, PathBuf)> = Vec::with_capacity(3);
    for (name, contents) in [
        (&files.types, &artifacts.types),
        (&files.methods, &artifacts.methods),
        (&files.client, &artifacts.client),
    ] {
        let target = dir.join(name);
        match stage(&target, contents) {
            Ok(temp_path) => staged.push((temp_path, target)),
            Err(e) => {
                discard(&staged);
                return Err(e);
            }
        }
    }

    for (i, (temp_path, target)) in staged.iter().enumerate() {
        if let Err(e) = fs::rename(temp_path, target) {
            discard(&staged[i..]);
            return Err(write_error(target)(e));
        }
        debug!(path = %target.display(), "Wrote file");
    }
    Ok(())
}
