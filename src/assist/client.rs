//! Model backend: the wire-level boundary to the hosted language model.
//!
//! The gateway only needs one operation, a blocking prompt completion. The
//! bundled implementation talks to an Ollama server over its REST API; tests
//! substitute their own backends through [`ModelBackend`].

use std::path::Path;

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors from the model transport.
#[derive(Debug, Error, Diagnostic)]
pub enum ModelError {
    #[error("model request failed: {message}")]
    #[diagnostic(
        code(doxflow::model::request_failed),
        help("Check that the model server is running and reachable at the configured base URL.")
    )]
    RequestFailed { message: String },

    #[error("failed to parse model response: {message}")]
    #[diagnostic(
        code(doxflow::model::parse_error),
        help("The model server returned an unexpected response format.")
    )]
    ParseError { message: String },

    #[error("failed to read model config from {path}: {message}")]
    #[diagnostic(
        code(doxflow::model::config),
        help("Check that the file exists and is valid TOML with base_url/model/timeout_secs keys.")
    )]
    Config { path: String, message: String },
}

/// The external language-model capability, reduced to a single blocking
/// completion call. Implementations own transport, auth, and model choice.
pub trait ModelBackend: Send + Sync {
    /// Run `prompt` through the model, optionally with a system instruction,
    /// and return the raw completion text.
    fn complete(&self, prompt: &str, system: Option<&str>) -> Result<String, ModelError>;
}

/// Configuration for the Ollama client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OllamaConfig {
    /// Base URL for the Ollama API.
    pub base_url: String,
    /// Model name to use.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".into(),
            model: "llama3.2".into(),
            timeout_secs: 120,
        }
    }
}

impl OllamaConfig {
    /// Load configuration from a TOML file. Missing keys fall back to the
    /// defaults.
    pub fn from_toml(path: &Path) -> Result<Self, ModelError> {
        let data = std::fs::read_to_string(path).map_err(|e| ModelError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&data).map_err(|e| ModelError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Client for the Ollama REST API (`/api/generate`, non-streaming).
pub struct OllamaClient {
    config: OllamaConfig,
}

impl OllamaClient {
    /// Create a new Ollama client with the given configuration.
    pub fn new(config: OllamaConfig) -> Self {
        Self { config }
    }

    /// The model name being used.
    pub fn model(&self) -> &str {
        &self.config.model
    }
}

impl ModelBackend for OllamaClient {
    fn complete(&self, prompt: &str, system: Option<&str>) -> Result<String, ModelError> {
        let url = format!("{}/api/generate", self.config.base_url);
        let agent = ureq::AgentBuilder::new()
            .timeout(std::time::Duration::from_secs(self.config.timeout_secs))
            .build();

        let mut body = serde_json::json!({
            "model": self.config.model,
            "prompt": prompt,
            "stream": false,
        });
        if let Some(sys) = system {
            body["system"] = serde_json::Value::String(sys.to_string());
        }

        let body_str = serde_json::to_string(&body).map_err(|e| ModelError::RequestFailed {
            message: format!("JSON serialize error: {e}"),
        })?;

        debug!(model = %self.config.model, url = %url, "model completion request");

        let resp = agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_string(&body_str)
            .map_err(|e: ureq::Error| ModelError::RequestFailed {
                message: e.to_string(),
            })?;

        let resp_str = resp.into_string().map_err(|e| ModelError::ParseError {
            message: e.to_string(),
        })?;

        let json: serde_json::Value =
            serde_json::from_str(&resp_str).map_err(|e| ModelError::ParseError {
                message: e.to_string(),
            })?;

        json["response"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| ModelError::ParseError {
                message: "missing 'response' field".into(),
            })
    }
}

impl std::fmt::Debug for OllamaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OllamaClient")
            .field("base_url", &self.config.base_url)
            .field("model", &self.config.model)
            .finish()
    }
}
