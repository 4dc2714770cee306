//! Atomic file replacement for on-disk tables.

use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replace the file at `path` with `content` atomically.
///
/// The content goes to a temp file in the target's directory (so the rename
/// stays on one filesystem), is flushed and synced, then renamed over the
/// target. Readers see either the old or the new document, never a partial
/// one. The temp file is removed if any step fails.
pub async fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no parent directory"))?
        .to_path_buf();
    let target_path = path.to_path_buf();
    let content_owned = content.to_string();

    tokio::task::spawn_blocking(move || -> io::Result<()> {
        use std::io::Write;

        let mut temp_file = NamedTempFile::new_in(&parent)?;
        temp_file.write_all(content_owned.as_bytes())?;
        temp_file.flush()?;
        temp_file.as_file().sync_all()?;
        temp_file.persist(&target_path)?;
        Ok(())
    })
    .await
    .map_err(io::Error::other)?
}
