//! Google Gemini client implementing the LLM completion provider.
//!
//! Uses the `generateContent` endpoint. Each call is a single self-contained request;
//! the session id is only used for log correlation.

use async_trait::async_trait;
use log::*;
use meeting_ai::traits::analysis::Provider;
use meeting_ai::Error;
use reqwest::{header, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use service::config::Config;
use std::time::Duration;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
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

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
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
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, if any.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

pub struct GeminiClient {
    client: reqwest::Client,
    api_key: Option<SecretString>,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Builds a client. A missing `api_key` is accepted here and reported as a
    /// configuration error on every call instead.
    pub fn new(
        api_key: Option<String>,
        model: &str,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                warn!("Failed to build Gemini HTTP client: {e:?}");
                Error::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            api_key: api_key
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::new),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::new(
            config.gemini_api_key(),
            config.gemini_model(),
            config.gemini_base_url(),
            Duration::from_secs(config.llm_timeout_secs),
        )
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn api_key_header(&self) -> Result<header::HeaderValue, Error> {
        let api_key = self.api_key.as_ref().ok_or_else(|| {
            Error::Configuration("GEMINI_API_KEY is not set".to_string())
        })?;
        let mut value = header::HeaderValue::from_str(api_key.expose_secret())
            .map_err(|_| Error::Configuration("Invalid Gemini API key format".to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

fn map_transport_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout(err.to_string())
    } else {
        Error::Network(err.to_string())
    }
}

fn retry_after_seconds(headers: &header::HeaderMap) -> u64 {
    headers
        .get(header::RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}

#[async_trait]
impl Provider for GeminiClient {
    async fn complete(
        &self,
        session_id: &str,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, Error> {
        let api_key = self.api_key_header()?;
        let request = GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system_prompt,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: user_prompt }],
            }],
        };

        debug!("Sending Gemini request for session {session_id} to model {}", self.model);

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Gemini request failed for session {session_id}: {e:?}");
                map_transport_error(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = retry_after_seconds(response.headers());
            let error_text = response.text().await.unwrap_or_default();
            warn!("Gemini API returned {status} for session {session_id}: {error_text}");
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    Error::Authentication(format!("{status}: {error_text}"))
                }
                StatusCode::TOO_MANY_REQUESTS => Error::RateLimited {
                    retry_after_seconds: retry_after,
                },
                _ => Error::Provider(format!("{status}: {error_text}")),
            });
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse Gemini response for session {session_id}: {e:?}");
            Error::Deserialization(e.to_string())
        })?;

        let text = body
            .into_text()
            .ok_or_else(|| Error::Provider("Gemini returned no text".to_string()))?;

        info!("Received Gemini reply for session {session_id} ({} bytes)", text.len());
        Ok(text)
    }
}
