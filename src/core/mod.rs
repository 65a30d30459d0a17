pub mod generator;
pub mod prompt;
pub mod search;

pub use crate::domain::model::{GenerateRequest, Repository};
pub use crate::domain::ports::{ReadmeGenerator, RepositorySearch};
pub use crate::utils::error::Result;
pub use generator::OpenRouterClient;
pub use search::GithubSearchClient;
