//! Document reading with format dispatch and per-run caching

use crate::error::{Result, JobFitError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::info;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Reads documents into plain text, dispatching on the detected format.
/// Extracted text is cached per path so the same file is only parsed once
/// per run.
pub struct DocumentReader {
    cache: HashMap<PathBuf, String>,
}

impl DocumentReader {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    pub async fn read(&mut self, path: &Path) -> Result<String> {
        if let Some(text) = self.cache.get(path) {
            info!("Using cached text for {}", path.display());
            return Ok(text.clone());
        }

        if !path.exists() {
            return Err(JobFitError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = FileType::from_path(path).ok_or_else(|| {
            JobFitError::UnsupportedFormat(format!(
                "Cannot extract text from: {}",
                path.display()
            ))
        })?;

        let text = match file_type {
            FileType::Pdf => PdfExtractor.extract(path).await?,
            FileType::Text => PlainTextExtractor.extract(path).await?,
            FileType::Markdown => MarkdownExtractor.extract(path).await?,
        };
        info!(
            "Extracted {} characters from {}",
            text.len(),
            path.display()
        );

        // A document that extracted to nothing cannot be analyzed
        if text.trim().is_empty() {
            return Err(JobFitError::InsufficientInput(format!(
                "No text could be extracted from: {}",
                path.display()
            )));
        }

        self.cache.insert(path.to_path_buf(), text.clone());
        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for DocumentReader {
    fn default() -> Self {
        Self::new()
    }
}
