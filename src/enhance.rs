//! Optional AI-assisted enhancement.
//!
//! A decorator over the deterministic core: the input is offered to an
//! OpenAI-compatible chat endpoint for a more fluent rendering, and on any
//! failure whatsoever (no credentials, network error, quota, malformed
//! response) the caller gets the core's own output instead. The core never
//! calls into this module.

use serde::Deserialize;

use crate::engine::transliterate;

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const SYSTEM_PROMPT: &str = "Convert the user's Hindi (Devanagari) text into casual Roman-script \
     Hinglish as typed on messaging apps. Keep embedded English words \
     unchanged. Reply with the converted text only.";

#[derive(Debug, Clone)]
pub struct EnhanceConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: std::env::var("HINGLISH_API_KEY").ok(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EnhanceError {
    #[error("no API key configured")]
    NoCredentials,
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("malformed response: {0}")]
    InvalidResponse(String),
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

/// Transliterate with AI assistance when available, falling back to the
/// deterministic core on any error. Never fails.
pub fn enhance_or_fallback(text: &str, config: &EnhanceConfig) -> String {
    match enhance(text, config) {
        Ok(out) => out,
        Err(e) => {
            tracing::debug!(error = %e, "enhancement unavailable, using core output");
            transliterate(text)
        }
    }
}

/// One round trip to the chat endpoint.
fn enhance(text: &str, config: &EnhanceConfig) -> Result<String, EnhanceError> {
    let key = config.api_key.as_deref().ok_or(EnhanceError::NoCredentials)?;

    let payload = serde_json::json!({
        "model": config.model,
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": text },
        ],
    });
    let body = serde_json::to_string(&payload)
        .map_err(|e| EnhanceError::InvalidResponse(e.to_string()))?;

    let response = ureq::post(&config.endpoint)
        .header("authorization", &format!("Bearer {key}"))
        .header("content-type", "application/json")
        .send(body.as_str())
        .map_err(|e| EnhanceError::Http(e.to_string()))?
        .into_body()
        .read_to_string()
        .map_err(|e| EnhanceError::Http(e.to_string()))?;

    let parsed: ChatResponse = serde_json::from_str(&response)
        .map_err(|e| EnhanceError::InvalidResponse(e.to_string()))?;
    let content = parsed
        .choices
        .first()
        .map(|c| c.message.content.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| EnhanceError::InvalidResponse("empty choices".to_string()))?;

    Ok(content)
}
