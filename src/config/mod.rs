pub mod file;

use clap::Parser;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use file::FileConfig;

/// Environment variable consulted when the config file carries no
/// OpenRouter key.
pub const OPENROUTER_KEY_VAR: &str = "OPENROUTER_API_KEY";
/// Environment variable consulted when the config file carries no
/// GitHub token.
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

const DEFAULT_OPENROUTER_ENDPOINT: &str = "https://openrouter.ai/api/v1";
const DEFAULT_OPENROUTER_REFERER: &str = "https://autoreadme.dev";
const DEFAULT_OPENROUTER_TITLE: &str = "AutoReadMe";
const DEFAULT_GITHUB_ENDPOINT: &str = "https://api.github.com";
const DEFAULT_GITHUB_USER_AGENT: &str = "AutoReadMe-App";

#[derive(Debug, Clone, Parser)]
#[command(name = "auto-readme")]
#[command(about = "README generation service backed by OpenRouter and GitHub search")]
pub struct CliArgs {
    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<std::path::PathBuf>,

    #[arg(long, help = "Address to bind")]
    pub host: Option<String>,

    #[arg(long, help = "Port to listen on")]
    pub port: Option<u16>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

/// Fully resolved runtime configuration. Precedence per field: CLI flag,
/// then config file, then built-in default; credentials additionally fall
/// back to the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub openrouter: OpenRouterConfig,
    pub github: GithubConfig,
}

#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub referer: String,
    pub title: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct GithubConfig {
    pub endpoint: String,
    pub token: Option<String>,
    pub user_agent: String,
    pub timeout_seconds: Option<u64>,
}

impl AppConfig {
    pub fn resolve(args: &CliArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(args, file))
    }

    fn merge(args: &CliArgs, file: FileConfig) -> Self {
        let server = file.server.unwrap_or_default();
        let openrouter = file.openrouter.unwrap_or_default();
        let github = file.github.unwrap_or_default();

        AppConfig {
            host: args
                .host
                .clone()
                .or(server.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: args.port.or(server.port).unwrap_or(DEFAULT_PORT),
            openrouter: OpenRouterConfig {
                endpoint: openrouter
                    .endpoint
                    .unwrap_or_else(|| DEFAULT_OPENROUTER_ENDPOINT.to_string()),
                api_key: resolve_credential(openrouter.api_key, OPENROUTER_KEY_VAR),
                referer: openrouter
                    .referer
                    .unwrap_or_else(|| DEFAULT_OPENROUTER_REFERER.to_string()),
                title: openrouter
                    .title
                    .unwrap_or_else(|| DEFAULT_OPENROUTER_TITLE.to_string()),
                timeout_seconds: openrouter.timeout_seconds,
            },
            github: GithubConfig {
                endpoint: github
                    .endpoint
                    .unwrap_or_else(|| DEFAULT_GITHUB_ENDPOINT.to_string()),
                token: resolve_credential(github.token, GITHUB_TOKEN_VAR),
                user_agent: github
                    .user_agent
                    .unwrap_or_else(|| DEFAULT_GITHUB_USER_AGENT.to_string()),
                timeout_seconds: github.timeout_seconds,
            },
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 憑證優先取配置檔的值，其次取環境變數；
/// 未替換的 ${VAR} 佔位符與空字串視為未設定
fn resolve_credential(file_value: Option<String>, env_var: &str) -> Option<String> {
    file_value
        .filter(|value| !value.is_empty() && !value.starts_with("${"))
        .or_else(|| std::env::var(env_var).ok().filter(|value| !value.is_empty()))
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("server.host", &self.host)?;
        validation::validate_url("openrouter.endpoint", &self.openrouter.endpoint)?;
        validation::validate_url("github.endpoint", &self.github.endpoint)?;

        if let Some(timeout) = self.openrouter.timeout_seconds {
            validation::validate_at_least("openrouter.timeout_seconds", timeout, 1)?;
        }
        if let Some(timeout) = self.github.timeout_seconds {
            validation::validate_at_least("github.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}
