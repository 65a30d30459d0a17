pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::config::AppConfig;
use crate::core::{GithubSearchClient, OpenRouterClient};
use crate::domain::ports::{ReadmeGenerator, RepositorySearch};

/// Shared per-process state. A `None` slot means the matching credential
/// was not configured; requests against it get the configuration-error
/// response instead of a startup failure.
#[derive(Clone)]
pub struct AppState {
    pub generator: Option<Arc<dyn ReadmeGenerator>>,
    pub searcher: Option<Arc<dyn RepositorySearch>>,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        let generator = config.openrouter.api_key.clone().map(|api_key| {
            Arc::new(OpenRouterClient::new(&config.openrouter, api_key)) as Arc<dyn ReadmeGenerator>
        });
        let searcher = config.github.token.clone().map(|token| {
            Arc::new(GithubSearchClient::new(&config.github, token)) as Arc<dyn RepositorySearch>
        });

        Self { generator, searcher }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/generate-readme", post(handlers::generate_readme))
        .route("/api/github/search", get(handlers::search_repositories))
        .with_state(state)
}
