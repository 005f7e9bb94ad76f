// src/file/mod.rs
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rfd::FileDialog;

/// Prompts for a destination (defaulting to the backend's filename) and
/// writes the downloaded bytes there. `None` means the user cancelled.
pub fn save_bytes_as(default_name: &str, bytes: &[u8]) -> Result<Option<PathBuf>> {
    let file_dialog = FileDialog::new()
        .set_file_name(default_name)
        .set_title("Save Output File");

    let Some(path) = file_dialog.save_file() else {
        return Ok(None);
    };
    write_bytes(&path, bytes)?;
    Ok(Some(path))
}

pub fn save_text_as(default_name: &str, text: &str) -> Result<Option<PathBuf>> {
    save_bytes_as(default_name, text.as_bytes())
}

fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_bytes_to_disk() {
        let path = std::env::temp_dir().join("review-radar-write-test.bin");
        write_bytes(&path, b"hello").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn write_failure_names_the_path() {
        let path = Path::new("/nonexistent-dir/review-radar/out.bin");
        let err = write_bytes(path, b"hello").unwrap_err();
        assert!(err.to_string().contains("out.bin"));
    }
}
