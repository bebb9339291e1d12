//! Text-generation providers behind the [`Generator`] trait.
//!
//! The real provider talks to Google's generative-language REST API; the
//! fake one is deterministic and offline for dev and tests. A factory picks
//! the provider from configuration at startup. The resulting handle is
//! read-only for the life of the process: if construction fails, the service
//! runs without a generator and answers every request with the same
//! unavailable error until restart.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Result, RoadmapError};

#[async_trait]
pub trait Generator: Send + Sync {
    /// One outbound call with the rendered prompt; returns the raw model text.
    async fn generate(&self, prompt: &str) -> Result<String>;
    fn model(&self) -> &str;
}

// Gemini REST API implementation
pub struct GeminiGenerator {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiGenerator {
    pub fn new(api_key: String, model: String, timeout_ms: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| RoadmapError::Config {
                message: format!("Failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            api_key,
            model,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model
        )
    }
}

#[async_trait]
impl Generator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!(
            "Calling Gemini (model={}, prompt_chars={})",
            self.model,
            prompt.len()
        );

        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        // Single attempt; failures surface directly to the caller
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RoadmapError::Generation {
                message: format!("Gemini API error {status}: {error_text}"),
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(RoadmapError::Generation {
                message: "Gemini returned no candidates".to_string(),
            });
        }
        Ok(text)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// Deterministic offline generator for testing/dev (no network)
pub struct FakeGenerator {
    reply: String,
}

impl FakeGenerator {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl Default for FakeGenerator {
    fn default() -> Self {
        Self::new("# Roadmap\n\n- [ ] Step 1: start\n- [ ] Step 2: keep going\n")
    }
}

#[async_trait]
impl Generator for FakeGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Ok(self.reply.clone())
    }

    fn model(&self) -> &str {
        "fake"
    }
}

/// A generator that always fails, for exercising the error path in tests.
#[cfg(test)]
pub struct FailingGenerator;

#[cfg(test)]
#[async_trait]
impl Generator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Err(RoadmapError::Generation {
            message: "upstream rejected the request".to_string(),
        })
    }

    fn model(&self) -> &str {
        "failing"
    }
}

fn is_placeholder(s: &str) -> bool {
    let t = s.trim();
    t.is_empty()
        || t.contains("${")
        || t.eq_ignore_ascii_case("your-api-key-here")
        || t.eq_ignore_ascii_case("changeme")
}

/// Factory function to create a generator from configuration.
///
/// Errors here are terminal for the handle: the caller keeps `None` and the
/// service reports unavailable for every request until restart.
pub fn create_generator(config: &Config) -> Result<Arc<dyn Generator>> {
    match config.generation.provider.as_str() {
        "fake" => {
            info!("Using FakeGenerator (deterministic, no network)");
            Ok(Arc::new(FakeGenerator::default()))
        }
        _ => {
            let key = config.runtime.gemini_api_key.clone().unwrap_or_default();
            if is_placeholder(&key) {
                return Err(RoadmapError::Config {
                    message: "GEMINI_API_KEY is not set".to_string(),
                });
            }
            info!("Using Gemini generation (model={})", config.generation.model);
            Ok(Arc::new(GeminiGenerator::new(
                key,
                config.generation.model.clone(),
                config.generation.timeout_ms,
            )?))
        }
    }
}
