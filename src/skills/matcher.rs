//! Dictionary-bounded skill extraction

use crate::analysis::types::SkillSet;
use crate::error::{Result, JobFitError};
use crate::skills::dictionary::SkillDictionary;
use aho_corasick::AhoCorasick;

/// Extracts known skills from free text by exact, case-insensitive,
/// whole-token-sequence matching against the dictionary. No fuzzy or
/// semantic matching.
pub struct SkillMatcher {
    automaton: AhoCorasick,
    phrases: Vec<String>,
}

impl SkillMatcher {
    pub fn new(dictionary: &SkillDictionary) -> Result<Self> {
        let phrases: Vec<String> = dictionary.entries().to_vec();
        let patterns: Vec<&str> = phrases.iter().map(|s| s.as_str()).collect();

        // Overlapping search so every phrase is tested independently: a hit
        // for "machine learning" must not suppress a separate "machine"
        // dictionary entry.
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .map_err(|e| {
                JobFitError::SkillDictionary(format!("Failed to build skill matcher: {}", e))
            })?;

        Ok(Self { automaton, phrases })
    }

    /// All dictionary phrases present in `text`, in canonical dictionary
    /// casing. Occurrence counts are discarded.
    pub fn extract_skills(&self, text: &str) -> SkillSet {
        // Collapse whitespace runs so phrases match across line breaks
        let haystack = text.split_whitespace().collect::<Vec<_>>().join(" ");

        let mut found = SkillSet::new();
        for mat in self.automaton.find_overlapping_iter(&haystack) {
            if !token_bounded(&haystack, mat.start(), mat.end()) {
                continue;
            }
            found.insert(self.phrases[mat.pattern().as_usize()].clone());
        }
        found
    }
}

/// A match counts only when it is not embedded in a longer word: the
/// characters adjacent to the match must not be alphanumeric.
fn token_bounded(haystack: &str, start: usize, end: usize) -> bool {
    let before_ok = haystack[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric());
    let after_ok = haystack[end..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric());
    before_ok && after_ok
}
