//! Generation configuration: trait and env-based implementation.

use anyhow::{Context, Result};
use std::env;

/// Model repository on the Hugging Face Hub fine-tuned on the MSCE Agriculture syllabus.
pub const DEFAULT_MODEL_HUB_ID: &str = "TamandaKaunda/MSCE-Agriculture-T5";

/// Hosted inference endpoint base.
pub const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co";

/// Generation configuration interface for the hosted model.
pub trait GenerationConfig: Send + Sync {
    fn api_token(&self) -> &str;
    fn base_url(&self) -> &str;
    fn model_id(&self) -> &str;
}

/// Generation config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvGenerationConfig {
    /// HUGGING_FACE_TOKEN
    pub hugging_face_token: String,
    /// HF_INFERENCE_URL
    pub inference_base_url: String,
    /// MODEL_HUB_ID
    pub model_hub_id: String,
}

impl GenerationConfig for EnvGenerationConfig {
    fn api_token(&self) -> &str {
        &self.hugging_face_token
    }
    fn base_url(&self) -> &str {
        &self.inference_base_url
    }
    fn model_id(&self) -> &str {
        &self.model_hub_id
    }
}

impl EnvGenerationConfig {
    /// Load from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Load from environment variables. `token` overrides HUGGING_FACE_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let hugging_face_token = match token {
            Some(t) => t,
            None => env::var("HUGGING_FACE_TOKEN").context("HUGGING_FACE_TOKEN not set")?,
        };
        let inference_base_url = env::var("HF_INFERENCE_URL")
            .unwrap_or_else(|_| DEFAULT_INFERENCE_URL.to_string());
        let model_hub_id =
            env::var("MODEL_HUB_ID").unwrap_or_else(|_| DEFAULT_MODEL_HUB_ID.to_string());
        Ok(Self {
            hugging_face_token,
            inference_base_url,
            model_hub_id,
        })
    }

    /// Validate config: token must be non-empty and the base URL must parse.
    pub fn validate(&self) -> Result<()> {
        if self.hugging_face_token.trim().is_empty() {
            anyhow::bail!("HUGGING_FACE_TOKEN is set but empty");
        }
        if self.model_hub_id.trim().is_empty() {
            anyhow::bail!("MODEL_HUB_ID is set but empty");
        }
        if reqwest::Url::parse(&self.inference_base_url).is_err() {
            anyhow::bail!(
                "HF_INFERENCE_URL is set but not a valid URL: {}",
                self.inference_base_url
            );
        }
        Ok(())
    }
}
