//! The roadmap pipeline: availability check, prompt render, one outbound
//! call, response shaping.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, RoadmapError};
use crate::generation::Generator;
use crate::prompts::{self, PromptStyle};

/// The generated plan returned to the caller.
///
/// Markdown styles wrap the raw model text; the structured style passes the
/// decoded JSON through untouched, so its shape is whatever the model
/// produced.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Roadmap {
    Markdown { roadmap: String },
    Structured(serde_json::Value),
}

#[derive(Clone)]
pub struct RoadmapGenerator {
    generator: Option<Arc<dyn Generator>>,
    style: PromptStyle,
}

impl RoadmapGenerator {
    pub fn new(generator: Option<Arc<dyn Generator>>, style: PromptStyle) -> Self {
        Self { generator, style }
    }

    pub fn style(&self) -> PromptStyle {
        self.style
    }

    /// Generate a roadmap for one aspiration. Stateless; the only await
    /// point is the outbound generation call.
    pub async fn generate(&self, aspiration: &str) -> Result<Roadmap> {
        // Checked before any external work; permanent until restart
        let generator = self.generator.as_ref().ok_or(RoadmapError::Unavailable)?;

        let prompt = prompts::render(self.style, aspiration);
        debug!(
            "Rendered {} prompt ({} chars)",
            self.style,
            prompt.len()
        );

        let text = generator.generate(&prompt).await?;

        match self.style {
            PromptStyle::Checklist | PromptStyle::Markdown => {
                // Identity relay: no validation that this is well-formed markdown
                Ok(Roadmap::Markdown { roadmap: text })
            }
            PromptStyle::Structured => {
                // Trim only; no schema validation beyond "it decodes"
                let value: serde_json::Value = serde_json::from_str(text.trim())?;
                Ok(Roadmap::Structured(value))
            }
        }
    }
}
