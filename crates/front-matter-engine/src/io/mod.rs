use std::fs;
use std::path::{Path, PathBuf};

use xi_rope::Rope;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Not a markdown file: {0}")]
    NotMarkdown(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Whether `path` has a markdown extension (`.md` or `.markdown`).
pub fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"))
}

/// Read a markdown file into a rope.
pub fn read_document(path: &Path) -> Result<Rope, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    if !is_markdown_file(path) {
        return Err(IoError::NotMarkdown(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(Rope::from(content.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("note.md");
        fs::write(&path, "---\na: 1\n---\n").unwrap();

        let rope = read_document(&path).unwrap();
        assert_eq!(rope.slice_to_cow(..), "---\na: 1\n---\n");
    }

    #[test]
    fn test_read_missing_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.md");

        assert!(matches!(read_document(&path), Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_read_non_markdown() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        fs::write(&path, "hello").unwrap();

        assert!(matches!(read_document(&path), Err(IoError::NotMarkdown(_))));
    }

    #[test]
    fn test_markdown_extensions() {
        assert!(is_markdown_file(Path::new("a.md")));
        assert!(is_markdown_file(Path::new("a.MARKDOWN")));
        assert!(!is_markdown_file(Path::new("a.txt")));
        assert!(!is_markdown_file(Path::new("README")));
    }
}
