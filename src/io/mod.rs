pub mod output;

pub use output::{create_writer, OutputFormat, ReportWriter};

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read a source file as text. Invalid UTF-8 is replaced rather than
/// rejected so binary files reach the classifier's binary check.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn read_stdin() -> Result<String> {
    let mut bytes = Vec::new();
    std::io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read standard input")?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_source_replaces_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blob.bin");
        fs::write(&path, [0xff, 0xfe, b'o', b'k']).unwrap();

        let text = read_source(&path).unwrap();
        assert!(text.starts_with('\u{FFFD}'));
        assert!(text.ends_with("ok"));
    }

    #[test]
    fn test_read_source_missing_file_names_path() {
        let err = read_source(Path::new("/definitely/not/here.rs")).unwrap_err();
        assert!(err.to_string().contains("here.rs"));
    }
}
