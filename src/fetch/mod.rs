//! Best-effort job posting fetch and text extraction

use crate::error::Result;
use crate::input::text_extractor::html_to_text;
use log::{debug, warn};
use regex::Regex;
use std::time::Duration;

/// Failures are reported as a plain string with this prefix so callers can
/// detect them without structured error types.
pub const FETCH_ERROR_PREFIX: &str = "Error:";

pub fn is_fetch_error(text: &str) -> bool {
    text.starts_with(FETCH_ERROR_PREFIX)
}

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Fetches a job posting page and extracts its main text content with
/// tiered container selection. Generic by design: specific selectors are
/// tried first, then semantic containers, then the whole page.
pub struct JobPostingFetcher {
    http: reqwest::Client,
}

impl JobPostingFetcher {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { http })
    }

    /// Fetch and extract the posting text. Never fails: any error becomes an
    /// `"Error:"`-prefixed message string.
    pub async fn fetch_text(&self, url: &str) -> String {
        match self.fetch_inner(url).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to fetch job posting from {}: {}", url, e);
                format!(
                    "{} Could not fetch the URL. Please check the link and your connection. Details: {}",
                    FETCH_ERROR_PREFIX, e
                )
            }
        }
    }

    async fn fetch_inner(&self, url: &str) -> Result<String> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        let html = response.text().await?;
        Ok(extract_job_text(&html))
    }
}

/// Tiered extraction of the job description text from a page.
pub fn extract_job_text(html: &str) -> String {
    let html = strip_non_content(html);

    // Tier 1: containers job sites commonly use for the posting body
    let specific_containers = [
        r#"(?is)<div[^>]*class="[^"]*job-description[^"]*"[^>]*>(.*?)</div>"#,
        r#"(?is)<div[^>]*id="jobDetailsSection"[^>]*>(.*?)</div>"#,
        r#"(?is)<div[^>]*class="[^"]*job-post-content[^"]*"[^>]*>(.*?)</div>"#,
    ];
    for pattern in &specific_containers {
        if let Some(text) = container_text(&html, pattern) {
            debug!("Job text extracted from specific container");
            return text;
        }
    }

    // Tier 2: semantic containers
    let semantic_containers = [
        r"(?is)<main[^>]*>(.*?)</main>",
        r"(?is)<article[^>]*>(.*?)</article>",
    ];
    for pattern in &semantic_containers {
        if let Some(text) = container_text(&html, pattern) {
            debug!("Job text extracted from semantic container");
            return text;
        }
    }

    // Tier 3: whole body, noisy but better than nothing
    if let Some(text) = container_text(&html, r"(?is)<body[^>]*>(.*)</body>") {
        debug!("Job text extracted from page body");
        return text;
    }

    html_to_text(&html)
}

fn container_text(html: &str, pattern: &str) -> Option<String> {
    let re = Regex::new(pattern).ok()?;
    let captured = re.captures(html)?.get(1)?.as_str();
    let text = html_to_text(captured);
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Remove script and style blocks before text extraction.
fn strip_non_content(html: &str) -> String {
    let script_re = Regex::new(r"(?is)<script.*?</script>").unwrap();
    let style_re = Regex::new(r"(?is)<style.*?</style>").unwrap();
    let without_scripts = script_re.replace_all(html, "");
    style_re.replace_all(&without_scripts, "").to_string()
}
