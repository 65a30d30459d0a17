use async_trait::async_trait;

use crate::domain::model::{GenerateRequest, Repository};
use crate::utils::error::Result;

/// Produces README markdown from a project description.
#[async_trait]
pub trait ReadmeGenerator: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<String>;
}

/// Looks up repository summaries for a free-text query.
#[async_trait]
pub trait RepositorySearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<Repository>>;
}
