use serde::{Deserialize, Serialize};

/// Project description submitted for README generation. Every field except
/// `project_name` and `description` is optional input from the UI; missing
/// JSON fields deserialize to their empty form instead of failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub installation: Option<String>,
    #[serde(default)]
    pub usage: Option<String>,
    #[serde(default)]
    pub contributing: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub template: String,
    #[serde(default)]
    pub github_data: Option<GithubData>,
}

/// Repository statistics attached when the project was picked from a
/// GitHub search result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GithubData {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub stars: u64,
    #[serde(default)]
    pub forks: u64,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub updated: String,
}

/// Repository summary as returned by the GitHub search API. Unknown
/// upstream fields are dropped on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub readme: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub repositories: Vec<Repository>,
}

/// Uniform error body for both gateway endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_accepts_camel_case_keys() {
        let json = r#"{
            "projectName": "demo",
            "description": "A demo project",
            "technologies": ["Rust"],
            "githubData": {"url": "https://github.com/o/demo", "stars": 3, "forks": 1}
        }"#;

        let request: GenerateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.project_name, "demo");
        assert_eq!(request.technologies, vec!["Rust"]);
        assert_eq!(request.github_data.unwrap().stars, 3);
    }

    #[test]
    fn test_generate_request_defaults_missing_fields() {
        let request: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.project_name, "");
        assert_eq!(request.description, "");
        assert!(request.features.is_empty());
        assert!(request.installation.is_none());
        assert!(request.github_data.is_none());
        assert_eq!(request.template, "");
    }

    #[test]
    fn test_repository_tolerates_unknown_and_missing_fields() {
        let json = r#"{
            "id": 42,
            "name": "demo",
            "full_name": "octocat/demo",
            "description": null,
            "html_url": "https://github.com/octocat/demo",
            "score": 1.0,
            "owner": {"login": "octocat"}
        }"#;

        let repository: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repository.full_name, "octocat/demo");
        assert!(repository.description.is_none());
        assert!(repository.topics.is_empty());
        assert_eq!(repository.stargazers_count, 0);
    }
}
