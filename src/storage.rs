//! Disk write path for saved payloads.
//!
//! Save filenames are content-addressed (digest + extension), so a name
//! collision means the bytes are already on disk; the existing file is kept.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Write `bytes` to `dir/file_name`, failing rather than clobbering.
///
/// If the target already exists it is left untouched and its path returned;
/// callers name files by content digest, so an existing file already holds
/// these bytes. Data is synced before returning.
pub fn write_new(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    let path = dir.join(file_name);
    let mut file = match File::options().write(true).create_new(true).open(&path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            tracing::debug!(path = %path.display(), "target exists, keeping current file");
            return Ok(path);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to create {}", path.display()));
        }
    };
    file.write_all(bytes)
        .with_context(|| format!("failed to write {}", path.display()))?;
    file.sync_all()
        .with_context(|| format!("failed to sync {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_new_creates_file_with_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_new(dir.path(), "abc.txt", b"payload").unwrap();
        assert_eq!(path, dir.path().join("abc.txt"));
        assert_eq!(std::fs::read(&path).unwrap(), b"payload");
    }

    #[test]
    fn write_new_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_new(dir.path(), "same.bin", b"original").unwrap();
        let second = write_new(dir.path(), "same.bin", b"ignored").unwrap();
        assert_eq!(first, second);
        assert_eq!(std::fs::read(&second).unwrap(), b"original");
    }

    #[test]
    fn write_new_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-subdir");
        assert!(write_new(&missing, "x.bin", b"x").is_err());
    }
}
