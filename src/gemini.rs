//! Gemini REST client.
//!
//! One client, two call modes: `generate` for a single complete response,
//! `stream` for incremental text chunks decoded from the API's SSE transport.

use std::pin::Pin;

use futures::StreamExt;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_stream::{wrappers::ReceiverStream, Stream};

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("Gemini API key is not configured; set GEMINI_API_KEY")]
    MissingApiKey,
    #[error("failed to reach Gemini: {0}")]
    Network(String),
    #[error("Gemini API error {status}: {body}")]
    Api { status: StatusCode, body: String },
    #[error("failed to decode Gemini response: {0}")]
    Decode(String),
    #[error("Gemini returned no text candidate")]
    EmptyResponse,
}

/// Incremental text chunks from a streaming generation.
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<String, GeminiError>> + Send>>;

pub struct GeminiClient {
    config: GeminiConfig,
    http: Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn method_url(&self, model: &str, method: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            self.config.base_url, model, method, self.config.api_key
        )
    }

    async fn post(&self, url: &str, prompt: &str) -> Result<reqwest::Response, GeminiError> {
        if self.config.api_key.is_empty() {
            return Err(GeminiError::MissingApiKey);
        }

        let request = GenerateContentRequest::from_prompt(prompt);
        let response = self
            .http
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| GeminiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api { status, body });
        }

        Ok(response)
    }

    /// Single-shot generation: the whole response as one string.
    pub async fn generate(&self, model: &str, prompt: &str) -> Result<String, GeminiError> {
        let url = self.method_url(model, "generateContent");

        tracing::debug!(model, prompt_len = prompt.len(), "sending generate request");

        let response = self.post(&url, prompt).await?;
        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Decode(e.to_string()))?;

        parsed.into_text().ok_or(GeminiError::EmptyResponse)
    }

    /// Streaming generation: text chunks in upstream arrival order.
    ///
    /// The SSE transport is decoded in a background task feeding a bounded
    /// channel. Dropping the returned stream closes the channel, which stops
    /// the task and releases the upstream connection.
    pub async fn stream(&self, model: &str, prompt: &str) -> Result<ChunkStream, GeminiError> {
        let url = format!("{}&alt=sse", self.method_url(model, "streamGenerateContent"));

        tracing::debug!(model, prompt_len = prompt.len(), "starting streaming request");

        let response = self.post(&url, prompt).await?;

        let (tx, rx) = mpsc::channel(32);
        tokio::spawn(async move {
            let mut body = response.bytes_stream();
            let mut buffer = String::new();

            while let Some(next) = body.next().await {
                match next {
                    Ok(bytes) => {
                        buffer.push_str(&String::from_utf8_lossy(&bytes));

                        // Events are delimited by a blank line.
                        while let Some(end) = buffer.find("\n\n") {
                            let event = buffer[..end].to_string();
                            buffer.drain(..end + 2);

                            if let Some(text) = sse_event_text(&event) {
                                if tx.send(Ok(text)).await.is_err() {
                                    // Receiver gone: client disconnected.
                                    return;
                                }
                            }
                        }
                    }
                    Err(e) => {
                        let _ = tx.send(Err(GeminiError::Network(e.to_string()))).await;
                        return;
                    }
                }
            }
        });

        Ok(Box::pin(ReceiverStream::new(rx)))
    }
}

/// Pull the text out of one `data: {...}` event, if it carries any.
fn sse_event_text(event: &str) -> Option<String> {
    let data = event.strip_prefix("data: ")?;
    let parsed: GenerateContentResponse = serde_json::from_str(data).ok()?;
    parsed.into_text()
}

// Gemini REST wire types, trimmed to the fields this gateway touches.

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

impl GenerateContentRequest {
    fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .find_map(|part| part.text)
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}
