//! # Generation client abstraction
//!
//! Defines the [`GenerationClient`] trait (the hosted sequence-to-sequence model, seen as
//! `generate(prompt, params) -> text`) and a Hugging Face Inference API implementation.
//! Transport-agnostic; used by the answer and question-generation pipelines.
//!
//! The trait is object safe so the bot holds it as `Arc<dyn GenerationClient>` and tests can
//! swap in a mock.

use anyhow::Result;
use async_trait::async_trait;

mod config;
mod decode;
mod hub_client;

pub use config::{EnvGenerationConfig, GenerationConfig, DEFAULT_INFERENCE_URL, DEFAULT_MODEL_HUB_ID};
pub use decode::strip_special_tokens;
pub use hub_client::{mask_token, HubInferenceClient};

/// Decoding parameters for one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParams {
    /// Maximum output length in tokens.
    pub max_length: usize,
    /// Beam search width.
    pub num_beams: usize,
    pub early_stopping: bool,
    /// Input is truncated to this many tokens by the model side; `None` leaves the default.
    pub max_input_tokens: Option<usize>,
}

impl GenerationParams {
    /// Parameters for answering a student question: 200 tokens out, 4 beams, input capped at 512.
    pub const fn answer() -> Self {
        Self {
            max_length: 200,
            num_beams: 4,
            early_stopping: true,
            max_input_tokens: Some(512),
        }
    }

    /// Parameters for generating a quiz question: 64 tokens out, 5 beams, input capped at 128.
    pub const fn question() -> Self {
        Self {
            max_length: 64,
            num_beams: 5,
            early_stopping: true,
            max_input_tokens: Some(128),
        }
    }
}

/// Text-to-text generation collaborator.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Returns the model output for `prompt`. Output is raw; callers strip special tokens.
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String>;

    /// Checks the model is reachable and the credentials are accepted. Called once at startup.
    async fn ensure_ready(&self) -> Result<()> {
        Ok(())
    }
}
