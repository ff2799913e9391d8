//! File system utilities for package building.
//!
//! Idempotent directory helpers, file writes that create parent directories,
//! and a recursive copy used to stage published application files.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::{io, path::Path};
use tokio::fs;

/// Creates all of the directories of the specified path.
pub async fn create_dir_all(path: &Path) -> Result<()> {
    // create_dir_all is already idempotent - succeeds even if dir exists
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e).fs_context("removing directory", path),
    }
}

/// Writes `contents` to `path`, creating parent directories as needed.
///
/// `context` names the operation in the error message.
pub async fn write_file(path: &Path, contents: &str, context: &'static str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.fs_context(context, parent)?;
    }
    fs::write(path, contents).await.fs_context(context, path)
}

/// Makes a symbolic link to a directory.
#[cfg(unix)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a directory.
#[cfg(windows)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(unix)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(windows)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(src, dst)
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Fails if the source path is a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.is_file() {
        return Err(Error::MissingInput {
            what: "file",
            path: from.to_path_buf(),
        });
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating directory", dest_dir)?;
    }
    fs::copy(from, to).await.fs_context("copying file to", to)?;
    Ok(())
}

/// Recursively copies a directory from one path to another, creating any
/// parent directories of the destination path as necessary.
///
/// Preserves symlinks on platforms that support them.
/// Fails if the source path is not a directory or doesn't exist.
pub async fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    if !from.is_dir() {
        return Err(Error::MissingInput {
            what: "directory",
            path: from.to_path_buf(),
        });
    }

    let from = from.to_path_buf();
    let to = to.to_path_buf();

    // Offload blocking work to dedicated thread pool
    tokio::task::spawn_blocking(move || -> Result<()> {
        std::fs::create_dir_all(&to).fs_context("creating directory", &to)?;

        for entry in walkdir::WalkDir::new(&from) {
            let entry = entry?;
            let rel_path = entry.path().strip_prefix(&from)?;
            let dest_path = to.join(rel_path);

            if entry.file_type().is_symlink() {
                let target = std::fs::read_link(entry.path())?;
                if entry.path().is_dir() {
                    symlink_dir(&target, &dest_path)?;
                } else {
                    symlink_file(&target, &dest_path)?;
                }
            } else if entry.file_type().is_dir() {
                std::fs::create_dir_all(&dest_path).fs_context("creating directory", &dest_path)?;
            } else {
                std::fs::copy(entry.path(), &dest_path).fs_context("copying file to", &dest_path)?;
            }
        }

        Ok(())
    })
    .await
    .map_err(|e| Error::GenericError(format!("Directory copy task panicked: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn copy_dir_replicates_nested_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("publish");
        std::fs::create_dir_all(src.join("lib")).unwrap();
        std::fs::write(src.join("app.exe"), b"exe").unwrap();
        std::fs::write(src.join("lib").join("core.dll"), b"dll").unwrap();

        let dst = tmp.path().join("staged");
        copy_dir(&src, &dst).await.unwrap();

        assert_eq!(std::fs::read(dst.join("app.exe")).unwrap(), b"exe");
        assert_eq!(std::fs::read(dst.join("lib").join("core.dll")).unwrap(), b"dll");
    }

    #[tokio::test]
    async fn copy_dir_from_missing_source_is_missing_input() {
        let tmp = tempfile::tempdir().unwrap();
        let err = copy_dir(&tmp.path().join("nope"), &tmp.path().join("out"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingInput { what: "directory", .. }));
    }

    #[tokio::test]
    async fn remove_dir_all_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("gone");
        remove_dir_all(&dir).await.unwrap();
        create_dir_all(&dir).await.unwrap();
        create_dir_all(&dir).await.unwrap();
        assert!(dir.is_dir());
        remove_dir_all(&dir).await.unwrap();
        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn write_file_creates_parents() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("a").join("b").join("manifest.toml");
        write_file(&path, "x = 1\n", "writing manifest").await.unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "x = 1\n");
    }
}
