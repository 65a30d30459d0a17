use std::fmt::Write;

use chrono::DateTime;

use crate::domain::model::{GenerateRequest, GithubData};

/// Backend model used when the selector key is unknown.
pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";

/// Fixed rendering for GitHub timestamps, e.g. "January 15, 2024". Month
/// names come from chrono and do not depend on process locale or timezone.
const DATE_FORMAT: &str = "%B %-d, %Y";

const STANDARD_INSTRUCTION: &str = "Create a professional, well-structured README with all standard sections including installation, usage, and contributing guidelines.";

const MINIMAL_INSTRUCTION: &str = "Create a clean, minimal README focusing on essential information only - description, installation, and basic usage.";

const DETAILED_INSTRUCTION: &str = "Create a comprehensive, detailed README with extensive documentation, examples, troubleshooting, and advanced usage scenarios.";

const MODERN_INSTRUCTION: &str = "Create a modern, visually appealing README with emojis, badges, and contemporary formatting that stands out on GitHub.";

const CLOSING_INSTRUCTION: &str = "Generate a complete README.md file in markdown format. Include appropriate sections like:
- Project title and description
- Features (if provided)
- Technologies used
- Installation instructions
- Usage examples
- Contributing guidelines (if provided)
- License information (if provided)

Make sure the README is professional, well-formatted, and follows GitHub README best practices. Use proper markdown syntax and include relevant badges if appropriate.";

/// Instructional framing of the generated README.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateStyle {
    #[default]
    Standard,
    Minimal,
    Detailed,
    Modern,
}

impl TemplateStyle {
    /// Resolve a selector key. Unknown keys (including the empty string)
    /// fall back to `Standard` rather than erroring.
    pub fn from_key(key: &str) -> Self {
        match key {
            "standard" => TemplateStyle::Standard,
            "minimal" => TemplateStyle::Minimal,
            "detailed" => TemplateStyle::Detailed,
            "modern" => TemplateStyle::Modern,
            _ => TemplateStyle::Standard,
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            TemplateStyle::Standard => STANDARD_INSTRUCTION,
            TemplateStyle::Minimal => MINIMAL_INSTRUCTION,
            TemplateStyle::Detailed => DETAILED_INSTRUCTION,
            TemplateStyle::Modern => MODERN_INSTRUCTION,
        }
    }
}

/// Map a model selector key to the identifier OpenRouter expects.
pub fn resolve_model(key: &str) -> &'static str {
    match key {
        "openai/gpt-3.5-turbo" => "openai/gpt-3.5-turbo",
        // "openai/gpt-4" 刻意換成較便宜的 gpt-4o-mini
        "openai/gpt-4" => "openai/gpt-4o-mini",
        "anthropic/claude-3-haiku" => "anthropic/claude-3-haiku",
        "meta-llama/llama-3.1-8b-instruct" => "meta-llama/llama-3.1-8b-instruct:free",
        _ => DEFAULT_MODEL,
    }
}

/// Prompt text plus the backend model it should be sent to.
#[derive(Debug, Clone)]
pub struct ComposedPrompt {
    pub text: String,
    pub model: &'static str,
}

/// Render a project description into the user-role prompt for the chat
/// backend. Pure string assembly; the caller has already checked that
/// `project_name` and `description` are present, and nothing here fails.
pub fn compose(request: &GenerateRequest) -> ComposedPrompt {
    ComposedPrompt {
        text: build_prompt(request),
        model: resolve_model(&request.model),
    }
}

fn build_prompt(request: &GenerateRequest) -> String {
    let style = TemplateStyle::from_key(&request.template);

    let mut prompt = String::with_capacity(1024);
    prompt.push_str(style.instruction());
    prompt.push_str("\n\nProject Details:");
    push_detail(&mut prompt, "Name", &request.project_name);
    push_detail(&mut prompt, "Description", &request.description);

    // 空欄位不產生行，順序固定
    if !request.technologies.is_empty() {
        push_detail(&mut prompt, "Technologies", &request.technologies.join(", "));
    }
    if !request.features.is_empty() {
        push_detail(&mut prompt, "Key Features", &request.features.join(", "));
    }
    if let Some(installation) = non_empty(&request.installation) {
        push_detail(&mut prompt, "Installation", installation);
    }
    if let Some(usage) = non_empty(&request.usage) {
        push_detail(&mut prompt, "Usage", usage);
    }
    if let Some(contributing) = non_empty(&request.contributing) {
        push_detail(&mut prompt, "Contributing", contributing);
    }
    if let Some(license) = non_empty(&request.license) {
        push_detail(&mut prompt, "License", license);
    }
    if let Some(github) = &request.github_data {
        push_github_block(&mut prompt, github);
    }

    prompt.push_str("\n\n");
    prompt.push_str(CLOSING_INSTRUCTION);
    prompt
}

fn push_github_block(prompt: &mut String, github: &GithubData) {
    push_detail(prompt, "GitHub URL", &github.url);
    let _ = write!(prompt, "\n- Stars: {}", github.stars);
    let _ = write!(prompt, "\n- Forks: {}", github.forks);
    push_detail(prompt, "Created", &format_event_date(&github.created));
    push_detail(prompt, "Last Updated", &format_event_date(&github.updated));
}

fn push_detail(prompt: &mut String, label: &str, value: &str) {
    let _ = write!(prompt, "\n- {}: {}", label, value);
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// Timestamps that do not parse as RFC 3339 pass through untouched;
/// prompt assembly never fails.
fn format_event_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date.format(DATE_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}
