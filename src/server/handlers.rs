use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::domain::model::{GenerateRequest, GenerateResponse, SearchResponse};
use crate::server::error::GatewayError;
use crate::server::AppState;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Project name and description are required";
pub const MISSING_QUERY_MESSAGE: &str = "Search query is required";

/// `POST /api/generate-readme`: compose a prompt from the submitted
/// project description and relay the generated markdown.
pub async fn generate_readme(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, GatewayError> {
    // 憑證檢查先於請求內容檢查
    let generator = state
        .generator
        .as_ref()
        .ok_or(GatewayError::MissingOpenRouterKey)?;

    let Json(request) =
        payload.map_err(|rejection| GatewayError::Validation(rejection.body_text()))?;

    if request.project_name.is_empty() || request.description.is_empty() {
        return Err(GatewayError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
    }

    let readme = generator
        .generate(&request)
        .await
        .map_err(GatewayError::Generation)?;

    Ok(Json(GenerateResponse { readme }))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// `GET /api/github/search?q=...`: proxy a free-text repository search.
pub async fn search_repositories(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, GatewayError> {
    // 憑證檢查先於查詢參數檢查
    let searcher = state
        .searcher
        .as_ref()
        .ok_or(GatewayError::MissingGithubToken)?;

    // 缺少參數與空字串同樣拒絕
    let query = params.q.unwrap_or_default();
    if query.is_empty() {
        return Err(GatewayError::Validation(MISSING_QUERY_MESSAGE.to_string()));
    }

    let repositories = searcher
        .search(&query)
        .await
        .map_err(GatewayError::Search)?;

    Ok(Json(SearchResponse { repositories }))
}
