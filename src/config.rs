//! Configuration loaded from roadmapper.toml and environment variables

use serde::{Deserialize, Serialize};

use crate::prompts::PromptStyle;

/// Main configuration structure loaded from roadmapper.toml and environment variables
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub generation: GenerationConfig,
    /// Runtime configuration loaded from environment variables
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// Settings for the outbound generation call
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationConfig {
    pub provider: String,
    pub model: String,
    pub timeout_ms: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: "gemini-1.5-flash".to_string(),
            timeout_ms: 30_000,
        }
    }
}

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub http_bind: std::net::SocketAddr,
    pub cors_origin: String,
    pub log_level: String,
    pub prompt_style: PromptStyle,
    pub gemini_api_key: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            http_bind: "127.0.0.1:8600"
                .parse()
                .expect("default bind address should parse"),
            cors_origin: "http://localhost:3000".to_string(),
            log_level: "roadmapper=info".to_string(),
            prompt_style: PromptStyle::Checklist,
            gemini_api_key: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            runtime: RuntimeConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file and environment variables.
    /// Uses ROADMAPPER_CONFIG or defaults to "roadmapper.toml"; env wins.
    pub fn load() -> anyhow::Result<Self> {
        // .env is optional; missing file is not an error
        let _ = dotenvy::dotenv();

        let config_path =
            std::env::var("ROADMAPPER_CONFIG").unwrap_or_else(|_| "roadmapper.toml".to_string());

        let mut config: Config = if let Ok(content) = std::fs::read_to_string(&config_path) {
            toml::from_str(&content)?
        } else {
            tracing::warn!("Config file {} not found, using defaults", config_path);
            Self::default()
        };

        // Env overrides for the generation section (env-first)
        if let Ok(provider) = std::env::var("ROADMAP_GEN_PROVIDER") {
            config.generation.provider = provider;
        }
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            config.generation.model = model;
        }
        if let Ok(timeout) = std::env::var("ROADMAP_GEN_TIMEOUT_MS") {
            match timeout.parse::<u64>() {
                Ok(ms) if ms > 0 => config.generation.timeout_ms = ms,
                _ => tracing::warn!(
                    "ROADMAP_GEN_TIMEOUT_MS '{}' is not a positive integer, keeping {}",
                    timeout,
                    config.generation.timeout_ms
                ),
            }
        }

        config.runtime = RuntimeConfig::load_from_env()?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        match self.generation.provider.as_str() {
            "gemini" | "fake" => {}
            other => {
                anyhow::bail!("Unknown generation provider '{other}' (expected gemini or fake)");
            }
        }
        if self.generation.model.trim().is_empty() {
            anyhow::bail!("Generation model name must not be empty");
        }
        if !self.runtime.cors_origin.starts_with("http://")
            && !self.runtime.cors_origin.starts_with("https://")
        {
            tracing::warn!(
                "CORS origin '{}' doesn't start with http:// or https://",
                self.runtime.cors_origin
            );
        }
        Ok(())
    }
}

impl RuntimeConfig {
    /// Load runtime configuration from environment variables
    pub fn load_from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(bind) = std::env::var("ROADMAP_HTTP_BIND") {
            config.http_bind = bind
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid ROADMAP_HTTP_BIND '{}': {}", bind, e))?;
        }
        if let Ok(origin) = std::env::var("ROADMAP_CORS_ORIGIN") {
            config.cors_origin = origin;
        }
        if let Ok(level) = std::env::var("ROADMAP_LOG") {
            config.log_level = level;
        }
        if let Ok(style) = std::env::var("ROADMAP_PROMPT_STYLE") {
            config.prompt_style = style
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid ROADMAP_PROMPT_STYLE: {}", e))?;
        }
        config.gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.generation.provider, "gemini");
        assert_eq!(config.generation.model, "gemini-1.5-flash");
        assert_eq!(config.runtime.cors_origin, "http://localhost:3000");
        assert_eq!(config.runtime.prompt_style, PromptStyle::Checklist);
    }

    #[test]
    fn validate_rejects_unknown_provider() {
        let mut config = Config::default();
        config.generation.provider = "openai".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn toml_section_parses() {
        let config: Config = toml::from_str(
            r#"
            [generation]
            provider = "fake"
            model = "gemini-1.5-pro"
            timeout_ms = 5000
            "#,
        )
        .unwrap();
        assert_eq!(config.generation.provider, "fake");
        assert_eq!(config.generation.model, "gemini-1.5-pro");
        assert_eq!(config.generation.timeout_ms, 5000);
    }
}
