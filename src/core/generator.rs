use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::OpenRouterConfig;
use crate::core::prompt;
use crate::domain::model::GenerateRequest;
use crate::domain::ports::ReadmeGenerator;
use crate::utils::error::{AppError, Result};

/// System-role instruction sent with every generation request.
const SYSTEM_PROMPT: &str = "You are a professional technical writer specializing in creating high-quality README files for GitHub repositories. Generate clear, comprehensive, and well-structured README content in markdown format.";

const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 2000;

/// OpenRouter chat-completions client.
pub struct OpenRouterClient {
    endpoint: String,
    api_key: String,
    referer: String,
    title: String,
    timeout_seconds: Option<u64>,
    client: Client,
}

impl OpenRouterClient {
    pub fn new(config: &OpenRouterConfig, api_key: String) -> Self {
        Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key,
            referer: config.referer.clone(),
            title: config.title.clone(),
            timeout_seconds: config.timeout_seconds,
            client: Client::new(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<AssistantMessage>,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: String,
}

#[async_trait]
impl ReadmeGenerator for OpenRouterClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<String> {
        let composed = prompt::compose(request);
        tracing::info!(
            "📝 Generating README for '{}' with {}",
            request.project_name,
            composed.model
        );

        let payload = ChatRequest {
            model: composed.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &composed.text,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        // 構建請求
        let url = format!("{}/chat/completions", self.endpoint);
        let mut http_request = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.title)
            .json(&payload);

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
            tracing::error!("❌ OpenRouter API error: {} {}", status, body);
            return Err(AppError::UpstreamStatusError { status, body });
        }

        // 處理 API 回應
        let body = response.text().await?;
        let completion: ChatCompletion = serde_json::from_str(&body)?;
        let readme = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .map(|message| message.content)
            .ok_or_else(|| AppError::UpstreamShapeError {
                message: "completion has no message in the first choice".to_string(),
            })?;

        tracing::info!("✅ README generated ({} bytes)", readme.len());
        Ok(readme)
    }
}
