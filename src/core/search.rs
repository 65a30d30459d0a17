use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::GithubConfig;
use crate::domain::model::Repository;
use crate::domain::ports::RepositorySearch;
use crate::utils::error::{AppError, Result};

/// GitHub repository search client.
pub struct GithubSearchClient {
    endpoint: String,
    token: String,
    user_agent: String,
    timeout_seconds: Option<u64>,
    client: Client,
}

impl GithubSearchClient {
    pub fn new(config: &GithubConfig, token: String) -> Self {
        Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            token,
            user_agent: config.user_agent.clone(),
            timeout_seconds: config.timeout_seconds,
            client: Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    items: Vec<Repository>,
}

#[async_trait]
impl RepositorySearch for GithubSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<Repository>> {
        tracing::info!("🔍 Searching repositories for '{}'", query);

        // 構建請求
        let url = format!("{}/search/repositories", self.endpoint);
        let mut http_request = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github.v3+json")
            .header("User-Agent", &self.user_agent)
            .query(&[("q", query), ("sort", "updated"), ("per_page", "10")]);

        // 設定超時
        if let Some(timeout) = self.timeout_seconds {
            http_request = http_request.timeout(std::time::Duration::from_secs(timeout));
        }

        // 執行請求
        tracing::debug!("Making API request to: {}", url);
        let response = http_request.send().await?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("❌ GitHub API error: {} {}", status, body);
            return Err(AppError::UpstreamStatusError { status, body });
        }

        // 處理 API 回應（缺少 items 視為空結果）
        let page: SearchPage = response.json().await?;
        tracing::info!("📊 Found {} repositories", page.items.len());
        Ok(page.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> GithubSearchClient {
        let config = GithubConfig {
            endpoint: server.base_url(),
            token: None,
            user_agent: "AutoReadMe-App".to_string(),
            timeout_seconds: None,
        };
        GithubSearchClient::new(&config, "test-token".to_string())
    }

    fn repository_item(id: u64, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "full_name": format!("octocat/{name}"),
            "description": "A sample repository",
            "html_url": format!("https://github.com/octocat/{name}"),
            "language": "Rust",
            "topics": ["cli"],
            "created_at": "2024-01-15T10:30:00Z",
            "updated_at": "2025-06-01T12:00:00Z",
            "stargazers_count": 42,
            "forks_count": 7,
            "score": 1.0,
            "owner": {"login": "octocat"}
        })
    }

    #[tokio::test]
    async fn test_search_sends_query_and_headers() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/search/repositories")
                .query_param("q", "rust cli")
                .query_param("sort", "updated")
                .query_param("per_page", "10")
                .header("authorization", "Bearer test-token")
                .header("accept", "application/vnd.github.v3+json")
                .header("user-agent", "AutoReadMe-App");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "total_count": 2,
                    "incomplete_results": false,
                    "items": [repository_item(1, "alpha"), repository_item(2, "beta")]
                }));
        });

        let repositories = client_for(&server).search("rust cli").await.unwrap();

        api_mock.assert();
        assert_eq!(repositories.len(), 2);
        assert_eq!(repositories[0].full_name, "octocat/alpha");
        assert_eq!(repositories[0].stargazers_count, 42);
        assert_eq!(repositories[1].name, "beta");
    }

    #[tokio::test]
    async fn test_search_with_no_matches_returns_empty_list() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search/repositories");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"total_count": 0, "incomplete_results": false, "items": []}));
        });

        let repositories = client_for(&server).search("no-such-repo").await.unwrap();
        assert!(repositories.is_empty());
    }

    #[tokio::test]
    async fn test_search_tolerates_missing_items_field() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search/repositories");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"total_count": 0}));
        });

        let repositories = client_for(&server).search("anything").await.unwrap();
        assert!(repositories.is_empty());
    }

    #[tokio::test]
    async fn test_search_maps_upstream_status_errors() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search/repositories");
            then.status(403)
                .header("content-type", "application/json")
                .json_body(json!({"message": "API rate limit exceeded"}));
        });

        let error = client_for(&server).search("rust").await.unwrap_err();
        match error {
            AppError::UpstreamStatusError { status, body } => {
                assert_eq!(status, 403);
                assert!(body.contains("rate limit"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
