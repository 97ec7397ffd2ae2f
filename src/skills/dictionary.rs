//! Skill dictionary loading and validation

use crate::error::{Result, JobFitError};
use std::collections::BTreeMap;
use std::collections::HashSet;
use std::path::Path;

/// Closed skill vocabulary: category -> ordered phrase lists, flattened into
/// one deduplicated entry list. Loaded once at startup and immutable for the
/// lifetime of a scoring session.
#[derive(Debug, Clone)]
pub struct SkillDictionary {
    categories: BTreeMap<String, Vec<String>>,
    entries: Vec<String>,
}

impl SkillDictionary {
    /// Load a dictionary from a JSON file mapping category names to phrase
    /// lists, the `skills_db.json` format.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            JobFitError::SkillDictionary(format!(
                "Failed to read skills database '{}': {}",
                path.display(),
                e
            ))
        })?;

        let categories: BTreeMap<String, Vec<String>> =
            serde_json::from_str(&content).map_err(|e| {
                JobFitError::SkillDictionary(format!(
                    "Failed to parse skills database '{}': {}",
                    path.display(),
                    e
                ))
            })?;

        Self::from_categories(categories)
    }

    pub fn from_categories(categories: BTreeMap<String, Vec<String>>) -> Result<Self> {
        let mut entries = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for (category, phrases) in &categories {
            for phrase in phrases {
                // Normalize internal whitespace so multi-word phrases match
                // as token sequences regardless of source formatting
                let normalized = phrase.split_whitespace().collect::<Vec<_>>().join(" ");
                if normalized.is_empty() {
                    return Err(JobFitError::SkillDictionary(format!(
                        "Empty skill phrase in category '{}'",
                        category
                    )));
                }
                if seen.insert(normalized.to_lowercase()) {
                    entries.push(normalized);
                }
            }
        }

        if entries.is_empty() {
            return Err(JobFitError::SkillDictionary(
                "Skills database contains no phrases".to_string(),
            ));
        }

        Ok(Self { categories, entries })
    }

    /// Built-in default dictionary, used when no skills database file is
    /// configured.
    pub fn default_db() -> Self {
        let mut categories = BTreeMap::new();

        categories.insert(
            "programming_languages".to_string(),
            to_strings(&[
                "Python", "Java", "JavaScript", "TypeScript", "Rust", "Go", "C++", "C#",
                "Ruby", "PHP", "Swift", "Kotlin", "Scala", "R",
            ]),
        );
        categories.insert(
            "web_frameworks".to_string(),
            to_strings(&[
                "Django", "Flask", "FastAPI", "React", "Angular", "Vue", "Node.js",
                "Express", "Spring Boot", "Rails",
            ]),
        );
        categories.insert(
            "databases".to_string(),
            to_strings(&[
                "MongoDB", "PostgreSQL", "MySQL", "Redis", "Elasticsearch", "SQLite",
                "Cassandra", "DynamoDB", "SQL",
            ]),
        );
        categories.insert(
            "cloud_devops".to_string(),
            to_strings(&[
                "AWS", "Azure", "GCP", "Docker", "Kubernetes", "Terraform", "Jenkins",
                "CI/CD", "Linux", "Git",
            ]),
        );
        categories.insert(
            "data_ml".to_string(),
            to_strings(&[
                "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch", "Pandas",
                "NumPy", "Spark", "Kafka", "Airflow",
            ]),
        );
        categories.insert(
            "general".to_string(),
            to_strings(&[
                "API", "REST", "GraphQL", "Microservices", "Agile", "Scrum",
                "Project Management", "Leadership", "Communication",
            ]),
        );

        Self::from_categories(categories).expect("built-in skills database is valid")
    }

    /// All canonical phrases, flattened across categories, in deterministic
    /// order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn categories(&self) -> &BTreeMap<String, Vec<String>> {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn to_strings(phrases: &[&str]) -> Vec<String> {
    phrases.iter().map(|s| s.to_string()).collect()
}
