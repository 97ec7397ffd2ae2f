//! Skill vocabulary and dictionary-bounded skill extraction

pub mod dictionary;
pub mod matcher;
