//! Keyword tables for skill categories and role scores.
//!
//! The tables are configuration, not code: they can be loaded from JSON,
//! audited, and replaced without touching the pipeline. A fitted pipeline
//! stores the exact tables it was fitted with.

use crate::preprocessing::error::PreprocessingError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Version of the built-in tables.
pub const BUILTIN_TABLES_VERSION: u32 = 1;

/// A named group of skill keywords.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Weighted keywords for one job role.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoleKeywords {
    pub role: String,
    /// Each hit counts 1.
    pub high_priority: Vec<String>,
    /// Each hit counts 0.5.
    #[serde(default)]
    pub medium_priority: Vec<String>,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl RoleKeywords {
    /// Feature name of this role's score: lowercased, spaces replaced by `_`.
    pub fn feature_name(&self) -> String {
        format!("{}_score", self.role.to_lowercase().replace(' ', "_"))
    }
}

/// Ordered skill categories and role keyword tables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeywordTables {
    pub version: u32,
    pub skill_categories: Vec<SkillCategory>,
    pub roles: Vec<RoleKeywords>,
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self::builtin()
    }
}

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn category(name: &str, keywords: &[&str]) -> SkillCategory {
    SkillCategory {
        name: name.to_string(),
        keywords: words(keywords),
    }
}

fn role(name: &str, weight: f64, high: &[&str], medium: &[&str]) -> RoleKeywords {
    RoleKeywords {
        role: name.to_string(),
        high_priority: words(high),
        medium_priority: words(medium),
        weight,
    }
}

impl KeywordTables {
    /// Parse tables from JSON and validate them.
    pub fn from_json_str(json: &str) -> Result<Self, PreprocessingError> {
        let tables: Self = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Load tables from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, PreprocessingError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String, PreprocessingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject duplicate names, blank or non-lowercase keywords, and bad weights.
    ///
    /// Keywords are matched against lowercased text, so an uppercase keyword
    /// could never match.
    pub fn validate(&self) -> Result<(), PreprocessingError> {
        let invalid = |msg: String| Err(PreprocessingError::InvalidParameter(msg));

        let mut names = HashSet::new();
        for cat in &self.skill_categories {
            if !names.insert(cat.name.as_str()) {
                return invalid(format!("duplicate skill category '{}'", cat.name));
            }
            check_keywords(&cat.name, &cat.keywords)?;
        }

        let mut features = HashSet::new();
        for role in &self.roles {
            if !features.insert(role.feature_name()) {
                return invalid(format!("duplicate role '{}'", role.role));
            }
            if !role.weight.is_finite() || role.weight <= 0.0 {
                return invalid(format!(
                    "role '{}' has weight {}, expected a positive number",
                    role.role, role.weight
                ));
            }
            check_keywords(&role.role, &role.high_priority)?;
            check_keywords(&role.role, &role.medium_priority)?;
        }
        Ok(())
    }

    /// The skill categories and role tables used by default.
    pub fn builtin() -> Self {
        Self {
            version: BUILTIN_TABLES_VERSION,
            skill_categories: builtin_categories(),
            roles: builtin_roles(),
        }
    }
}

fn check_keywords(owner: &str, keywords: &[String]) -> Result<(), PreprocessingError> {
    for keyword in keywords {
        if keyword.trim().is_empty() || *keyword != keyword.to_lowercase() {
            return Err(PreprocessingError::InvalidParameter(format!(
                "'{}' has an invalid keyword '{}'",
                owner, keyword
            )));
        }
    }
    Ok(())
}

fn builtin_categories() -> Vec<SkillCategory> {
    vec![
        category(
            "cloud_infrastructure",
            &[
                "aws", "azure", "gcp", "kubernetes", "docker", "terraform", "ansible", "jenkins",
                "ci/cd", "devops", "linux", "ubuntu", "centos", "infrastructure", "deployment",
                "containers", "orchestration", "virtualization", "scalability", "monitoring",
            ],
        ),
        category(
            "data_analysis",
            &[
                "sql", "excel", "tableau", "power bi", "statistics", "data visualization",
                "reporting", "dashboard", "business intelligence", "etl", "data warehousing",
                "data mining", "analytics", "metrics", "kpi", "forecasting",
            ],
        ),
        category(
            "data_science",
            &[
                "python", "r", "machine learning", "deep learning", "tensorflow", "pytorch",
                "pandas", "numpy", "matplotlib", "seaborn", "scikit-learn", "jupyter", "modeling",
                "algorithms", "statistics", "predictive analytics",
            ],
        ),
        category(
            "programming",
            &[
                "java", "javascript", "c++", "c#", "php", "ruby", "go", "rust", "scala",
                "typescript", "html", "css", "react", "angular", "vue", "node.js", "express",
                "django", "flask", "spring", "hibernate", ".net", "asp.net", "api development",
            ],
        ),
        category(
            "web_development",
            &[
                "html", "css", "javascript", "react", "angular", "vue", "node.js", "express",
                "django", "flask", "php", "wordpress", "bootstrap", "jquery", "sass", "less",
                "responsive design", "frontend", "backend", "full stack",
            ],
        ),
        category(
            "design_ui_ux",
            &[
                "photoshop", "illustrator", "figma", "sketch", "adobe", "ui/ux",
                "user experience", "user interface", "graphic design", "prototyping",
                "wireframing", "canva", "usability", "user research", "interaction design",
            ],
        ),
        category(
            "business_management",
            &[
                "excel", "powerpoint", "word", "project management", "agile", "scrum", "kanban",
                "jira", "confluence", "stakeholder management", "requirements gathering",
                "business analysis", "product management", "roadmap", "strategy",
            ],
        ),
        category(
            "security",
            &[
                "cybersecurity", "network security", "encryption", "firewall",
                "penetration testing", "vulnerability assessment", "siem", "ids", "ips",
                "compliance", "gdpr", "iso 27001", "security audits", "risk assessment",
            ],
        ),
        category(
            "finance_accounting",
            &[
                "financial analysis", "budgeting", "forecasting", "valuation", "risk management",
                "investment banking", "accounting", "sap", "oracle financials", "quickbooks",
                "financial modeling", "portfolio management",
            ],
        ),
        category(
            "database_bigdata",
            &[
                "mysql", "postgresql", "mongodb", "big data", "hadoop", "spark", "kafka",
                "airflow", "data lake", "data pipeline", "nosql", "database design",
            ],
        ),
    ]
}

fn builtin_roles() -> Vec<RoleKeywords> {
    vec![
        role(
            "Cloud Engineer",
            3.0,
            &[
                "aws", "azure", "gcp", "kubernetes", "docker", "terraform", "devops", "ci/cd",
                "infrastructure", "deployment", "containers", "orchestration",
            ],
            &[
                "linux", "monitoring", "scalability", "virtualization", "cloud architecture",
            ],
        ),
        role(
            "Data Analyst",
            2.5,
            &[
                "sql", "tableau", "power bi", "excel", "statistics", "data visualization",
                "reporting", "dashboard", "business intelligence", "etl",
            ],
            &[
                "python", "r", "pandas", "data analysis", "metrics", "kpi",
            ],
        ),
        role(
            "Data Scientist",
            2.8,
            &[
                "machine learning", "deep learning", "tensorflow", "pytorch", "python", "r",
                "statistics", "modeling", "predictive analytics",
            ],
            &[
                "pandas", "numpy", "scikit-learn", "jupyter", "algorithms",
            ],
        ),
        role(
            "Software Developer",
            2.0,
            &[
                "java", "javascript", "c++", "git", "algorithms", "data structures", "oop",
                "api development", "software engineering",
            ],
            &[
                "programming", "coding", "debugging", "testing", "version control",
            ],
        ),
        role(
            "Web Developer",
            2.2,
            &[
                "html", "css", "javascript", "react", "angular", "vue", "node.js",
                "responsive design", "frontend", "backend",
            ],
            &[
                "bootstrap", "jquery", "sass", "full stack", "web development",
            ],
        ),
        role(
            "UI/UX Designer",
            2.5,
            &[
                "figma", "sketch", "adobe", "prototyping", "user research", "usability testing",
                "design systems", "user experience",
            ],
            &[
                "photoshop", "illustrator", "wireframing", "interaction design",
            ],
        ),
        role(
            "Cyber Security Analyst",
            2.8,
            &[
                "penetration testing", "vulnerability assessment", "network security",
                "encryption", "firewall", "compliance", "cybersecurity",
            ],
            &[
                "risk assessment", "security audits", "siem", "ids", "ips",
            ],
        ),
        role(
            "Business Analyst",
            2.0,
            &[
                "requirements gathering", "stakeholder management", "business process",
                "use cases", "business analysis",
            ],
            &[
                "agile", "scrum", "documentation", "process improvement",
            ],
        ),
        role(
            "Product Manager",
            2.3,
            &[
                "roadmap", "product strategy", "user stories", "backlog management",
                "market research", "product management",
            ],
            &[
                "stakeholder management", "requirements", "prioritization",
            ],
        ),
        role(
            "ML Engineer",
            3.0,
            &[
                "machine learning", "deep learning", "tensorflow", "pytorch", "mlops",
                "model deployment", "production ml",
            ],
            &[
                "kubernetes", "docker", "monitoring", "scalability", "model serving",
            ],
        ),
        role(
            "Financial Analyst",
            2.2,
            &[
                "financial analysis", "budgeting", "forecasting", "valuation",
                "investment analysis", "financial modeling",
            ],
            &[
                "excel", "accounting", "risk management", "portfolio management",
            ],
        ),
        role(
            "Marketing Analyst",
            2.0,
            &[
                "marketing analytics", "campaign analysis", "seo", "social media",
                "conversion rate", "a/b testing",
            ],
            &[
                "google analytics", "marketing metrics", "customer insights",
            ],
        ),
        role(
            "Content Strategist",
            2.0,
            &[
                "content strategy", "seo", "content management", "copywriting", "brand voice",
                "content marketing",
            ],
            &[
                "blogging", "social media", "editorial", "content creation",
            ],
        ),
        role(
            "Graphic Designer",
            2.0,
            &[
                "photoshop", "illustrator", "branding", "print design", "typography",
                "color theory", "graphic design",
            ],
            &[
                "adobe", "creative", "visual design", "layout",
            ],
        ),
        role(
            "Academic Instructor/Lecturer",
            2.0,
            &[
                "teaching", "curriculum development", "academic research", "student assessment",
                "pedagogy", "education",
            ],
            &[
                "mentoring", "course design", "academic writing", "instructional design",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_shape() {
        let tables = KeywordTables::builtin();
        tables.validate().unwrap();

        let names: Vec<&str> = tables
            .skill_categories
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "cloud_infrastructure",
                "data_analysis",
                "data_science",
                "programming",
                "web_development",
                "design_ui_ux",
                "business_management",
                "security",
                "finance_accounting",
                "database_bigdata",
            ]
        );
        assert_eq!(tables.roles.len(), 15);
        assert_eq!(tables.roles[0].role, "Cloud Engineer");
        assert_eq!(tables.roles[14].role, "Academic Instructor/Lecturer");
        assert_eq!(tables.roles[1].high_priority.len(), 10);
        assert_eq!(tables.roles[1].medium_priority.len(), 6);
    }

    #[test]
    fn test_feature_names() {
        let tables = KeywordTables::builtin();
        assert_eq!(tables.roles[1].feature_name(), "data_analyst_score");
        assert_eq!(tables.roles[5].feature_name(), "ui/ux_designer_score");
        assert_eq!(
            tables.roles[14].feature_name(),
            "academic_instructor/lecturer_score"
        );
    }

    #[test]
    fn test_json_round_trip() {
        let tables = KeywordTables::builtin();
        let json = tables.to_json_string().unwrap();
        assert_eq!(KeywordTables::from_json_str(&json).unwrap(), tables);
    }

    #[test]
    fn test_json_defaults_and_file_loading() {
        let json = r#"{
            "version": 7,
            "skill_categories": [{"name": "rust", "keywords": ["cargo", "tokio"]}],
            "roles": [{"role": "Rust Developer", "high_priority": ["rust"]}]
        }"#;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tables.json");
        std::fs::write(&path, json).unwrap();

        let tables = KeywordTables::from_json_file(&path).unwrap();
        assert_eq!(tables.version, 7);
        assert_eq!(tables.roles[0].weight, 1.0);
        assert!(tables.roles[0].medium_priority.is_empty());
    }

    #[test]
    fn test_validation_errors() {
        let mut tables = KeywordTables::builtin();
        tables.roles[0].weight = 0.0;
        assert!(tables.validate().is_err());

        let mut tables = KeywordTables::builtin();
        tables.skill_categories[0].keywords.push("AWS".to_string());
        assert!(tables.validate().is_err());

        let mut tables = KeywordTables::builtin();
        let dup = tables.roles[0].clone();
        tables.roles.push(dup);
        assert!(tables.validate().is_err());

        assert!(matches!(
            KeywordTables::from_json_str("{"),
            Err(PreprocessingError::Config(_))
        ));
    }
}
