//! Manuscript read/write and backup

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read the manuscript text
pub fn read_manuscript<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|e| Error::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Overwrite `manuscript` with `updated` and store `original` at `backup`.
///
/// Not atomic: a failure on the second write leaves the first in place.
pub fn write_with_backup(manuscript: &Path, backup: &Path, original: &str, updated: &str) -> Result<()> {
    write_text(manuscript, updated)?;
    write_text(backup, original)?;
    log::info!(
        "wrote {} (backup at {})",
        manuscript.display(),
        backup.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_backup_round_trip() {
        let dir = TempDir::new().unwrap();
        let manuscript = dir.path().join("paper.txt");
        let backup = dir.path().join("paper.txt.backup");
        let original = "Line one –\nLine two ×\n";
        fs::write(&manuscript, original).unwrap();

        let text = read_manuscript(&manuscript).unwrap();
        write_with_backup(&manuscript, &backup, &text, "updated\n").unwrap();

        assert_eq!(read_manuscript(&backup).unwrap(), original);
        assert_eq!(read_manuscript(&manuscript).unwrap(), "updated\n");
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let manuscript = dir.path().join("missing/paper.txt");
        let err = write_with_backup(&manuscript, &dir.path().join("b"), "a", "b").unwrap_err();
        assert!(matches!(err, Error::FileWrite { .. }));
    }
}
