//! Filesystem helpers that attach the offending path to every failure.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Stat a file.
pub fn stat(path: impl AsRef<Path>) -> Result<fs::Metadata> {
    let path = path.as_ref();
    fs::metadata(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the full contents of a file.
///
/// On success the returned buffer's length equals the file size exactly; no
/// partial reads are surfaced to the caller.
pub fn read_all(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Delete a file, returning the path that was removed.
///
/// When `throw_on_err` is false a failed deletion still resolves with the
/// original path (best-effort cleanup); when true the failure is surfaced.
pub fn remove(path: impl AsRef<Path>, throw_on_err: bool) -> Result<PathBuf> {
    let path = path.as_ref();
    match fs::remove_file(path) {
        Ok(()) => Ok(path.to_path_buf()),
        Err(_) if !throw_on_err => Ok(path.to_path_buf()),
        Err(source) => Err(Error::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_all_returns_exact_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.txt");
        fs::write(&path, b"12345678\n").unwrap();

        let data = read_all(&path).unwrap();
        assert_eq!(data.len(), 9);
        for (i, byte) in data.iter().take(8).enumerate() {
            assert_eq!(*byte, i as u8 + 0x31);
        }
        assert_eq!(data[data.len() - 1], 0x0a);
    }

    #[test]
    fn read_all_fails_with_path_context() {
        let err = read_all("non-existent-file").unwrap_err();
        match err {
            Error::Io { path, .. } => assert_eq!(path, PathBuf::from("non-existent-file")),
            other => panic!("expected Io error, got {other}"),
        }
    }

    #[test]
    fn stat_reports_file_size() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sized.bin");
        fs::write(&path, [0u8; 42]).unwrap();

        let meta = stat(&path).unwrap();
        assert_eq!(meta.len(), 42);
    }

    #[test]
    fn stat_fails_for_missing_path() {
        assert!(stat("non-existent-file").is_err());
    }

    #[test]
    fn remove_deletes_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.txt");
        fs::write(&path, b"x").unwrap();

        let removed = remove(&path, true).unwrap();
        assert_eq!(removed, path);
        assert!(!path.exists());
    }

    #[test]
    fn remove_missing_is_silent_unless_asked() {
        let missing = Path::new("non-existent-file");
        let resolved = remove(missing, false).unwrap();
        assert_eq!(resolved, missing);

        assert!(remove(missing, true).is_err());
    }
}
