//! jobfit - candidate fit analysis against job descriptions
//!
//! Extracts skills from JD and resume text with a dictionary-bounded
//! matcher, classifies which JD skills are mandatory, infers the
//! experience requirement, and scores the candidate with a weighted
//! skill/experience/compensation model behind a hard mandatory gate.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod input;
pub mod llm;
pub mod output;
pub mod skills;
pub mod storage;

pub use config::Config;
pub use error::{JobFitError, Result};
