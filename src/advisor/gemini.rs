//! Gemini `generateContent` client.

use super::TextGenerator;
use crate::{
    config::AdvisorSettings,
    errors::{Error, Result},
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl<'a> GenerateRequest<'a> {
    fn new(persona: &'a str, prompt: &'a str) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: persona }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
        }
    }
}

impl GenerateResponse {
    /// Concatenated text of the first candidate; empty if there is none.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| content.parts.iter().map(|p| p.text.as_str()).collect())
            .unwrap_or_default()
    }
}

/// HTTP client for one model with one persona.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    url: String,
    api_key: String,
    persona: String,
}

impl GeminiClient {
    /// Builds a client from the advisor settings and an API key.
    ///
    /// # Errors
    /// Returns [`Error::Http`] if the HTTP client cannot be constructed.
    pub fn new(settings: &AdvisorSettings, api_key: String) -> Result<Self> {
        let http = Client::builder().timeout(settings.timeout()).build()?;
        Ok(Self {
            http,
            url: generate_url(&settings.endpoint, &settings.model),
            api_key,
            persona: settings.persona.clone(),
        })
    }

    /// Full `generateContent` URL this client posts to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GenerateRequest::new(&self.persona, prompt);
        debug!(url = %self.url, prompt_len = prompt.len(), "Sending advisor request");

        let response = self
            .http
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Advisor {
                message: friendly_error(&e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), detail = %detail.trim(), "Advisor request failed");
            return Err(Error::Advisor {
                message: status_error(status),
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        Ok(parsed.text())
    }
}

fn generate_url(endpoint: &str, model: &str) -> String {
    format!(
        "{}/models/{}:generateContent",
        endpoint.trim().trim_end_matches('/'),
        model.trim()
    )
}

fn friendly_error(err: &reqwest::Error) -> String {
    if err.is_connect() {
        return "Cannot reach the text-generation service".to_string();
    }
    if err.is_timeout() {
        return "Connection to the text-generation service timed out".to_string();
    }
    if err.is_builder() {
        return "Invalid text-generation endpoint".to_string();
    }
    format!("Network error communicating with the text-generation service: {err}")
}

fn status_error(status: StatusCode) -> String {
    match status.as_u16() {
        400 => "Request rejected by the text-generation service".to_string(),
        401 | 403 => "API key is invalid or not authorized".to_string(),
        404 => "Model not found".to_string(),
        429 => "Rate limit exceeded".to_string(),
        s if s >= 500 => format!("Text-generation server error (HTTP {s})"),
        s => format!("Unexpected response from the text-generation service (HTTP {s})"),
    }
}
