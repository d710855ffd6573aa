use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct DocumentScanner;

impl DocumentScanner {
    pub fn scan_directory(directory: &Path) -> Result<Vec<PathBuf>> {
        let mut file_paths = Vec::new();

        for entry in WalkDir::new(directory) {
            let entry = entry?;

            if entry.file_type().is_file() {
                if let Some(extension) = entry.path().extension() {
                    let ext = extension.to_string_lossy().to_lowercase();
                    if Self::is_document_extension(&ext) {
                        file_paths.push(entry.path().to_path_buf());
                    }
                }
            }
        }

        // 同一スナップショットに対して安定した順序にする
        file_paths.sort();
        Ok(file_paths)
    }

    fn is_document_extension(extension: &str) -> bool {
        matches!(
            extension,
            "png" | "jpg" | "jpeg" | "gif" | "bmp" | "tiff" | "pdf"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_scan_directory() {
        let temp_dir = tempdir().unwrap();
        let temp_path = temp_dir.path();

        fs::write(temp_path.join("invoice.pdf"), b"dummy").unwrap();
        fs::write(temp_path.join("receipt.png"), b"dummy").unwrap();
        fs::write(temp_path.join("notes.txt"), b"dummy").unwrap();

        let result = DocumentScanner::scan_directory(temp_path).unwrap();

        assert_eq!(result.len(), 2);
        assert!(
            result
                .iter()
                .any(|p| p.file_name().unwrap() == "invoice.pdf")
        );
        assert!(
            result
                .iter()
                .any(|p| p.file_name().unwrap() == "receipt.png")
        );
    }

    #[test]
    fn test_scan_directory_is_sorted() {
        let temp_dir = tempdir().unwrap();
        let temp_path = temp_dir.path();

        fs::write(temp_path.join("b.pdf"), b"dummy").unwrap();
        fs::write(temp_path.join("a.pdf"), b"dummy").unwrap();
        fs::write(temp_path.join("c.pdf"), b"dummy").unwrap();

        let result = DocumentScanner::scan_directory(temp_path).unwrap();

        let names: Vec<_> = result
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf", "c.pdf"]);
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp_dir = tempdir().unwrap();
        let result = DocumentScanner::scan_directory(temp_dir.path()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_is_document_extension() {
        assert!(DocumentScanner::is_document_extension("pdf"));
        assert!(DocumentScanner::is_document_extension("png"));
        assert!(DocumentScanner::is_document_extension("tiff"));
        assert!(!DocumentScanner::is_document_extension("txt"));
        assert!(!DocumentScanner::is_document_extension("docx"));
    }
}
