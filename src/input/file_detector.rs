//! Input format detection

use std::path::Path;

/// Document formats the reader can extract text from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
}

/// Extensions accepted for document inputs.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "markdown"];

impl FileType {
    /// Detect the format from the path's extension. `None` for unsupported
    /// or extension-less paths.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(FileType::Pdf),
            "txt" => Some(FileType::Text),
            "md" | "markdown" => Some(FileType::Markdown),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_detects_supported_formats() {
        assert_eq!(
            FileType::from_path(&PathBuf::from("resume.pdf")),
            Some(FileType::Pdf)
        );
        assert_eq!(
            FileType::from_path(&PathBuf::from("jd.TXT")),
            Some(FileType::Text)
        );
        assert_eq!(
            FileType::from_path(&PathBuf::from("notes.markdown")),
            Some(FileType::Markdown)
        );
    }

    #[test]
    fn test_rejects_unsupported_and_bare_paths() {
        assert_eq!(FileType::from_path(&PathBuf::from("resume.docx")), None);
        assert_eq!(FileType::from_path(&PathBuf::from("noext")), None);
    }
}
