//! Document input: format detection, text extraction, cached reading

pub mod file_detector;
pub mod manager;
pub mod text_extractor;
