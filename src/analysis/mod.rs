//! Skill classification, analysis, and fit scoring

pub mod analyzer;
pub mod engine;
pub mod experience;
pub mod mandatory;
pub mod scorer;
pub mod types;
