//! Atomic file replacement.
//!
//! The catalog file is never written in place: content goes to a temp file in
//! the target's directory, is flushed to disk and then renamed over the target.

use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replace `path` with `content` in one rename.
///
/// # Errors
///
/// Returns an `io::Error` if the path has no parent directory, or if creating,
/// writing, syncing or renaming the temp file fails. On error the target is
/// left as it was and the temp file is removed.
pub async fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = path
        .parent()
        .map(|p| if p.as_os_str().is_empty() { Path::new(".") } else { p })
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no parent directory"))?
        .to_path_buf();
    let target = path.to_path_buf();
    let bytes = content.as_bytes().to_vec();

    tokio::task::spawn_blocking(move || -> io::Result<()> {
        use std::io::Write;

        let mut temp = NamedTempFile::new_in(&parent)?;
        temp.write_all(&bytes)?;
        temp.as_file().sync_all()?;
        temp.persist(&target).map_err(|e| e.error)?;
        Ok(())
    })
    .await
    .map_err(io::Error::other)?
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_atomic_write_replaces_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "old").unwrap();

        atomic_write(&path, r#"{"nextId":1}"#).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"nextId":1}"#);
    }

    #[tokio::test]
    async fn test_atomic_write_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");

        atomic_write(&path, "first").await.unwrap();
        atomic_write(&path, "second").await.unwrap();

        let count = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_atomic_write_missing_directory_fails() {
        let result = atomic_write(Path::new("/nonexistent/catalog/dir/catalog.json"), "x").await;
        assert!(result.is_err());
    }
}
