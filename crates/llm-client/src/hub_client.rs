//! Hugging Face Inference API implementation of [`GenerationClient`].
//!
//! `POST {base_url}/models/{model_id}` with `{"inputs", "parameters", "options"}`; the
//! text2text task answers `[{"generated_text": "..."}]` or `{"error": "..."}`.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::{GenerationClient, GenerationConfig, GenerationParams};

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_char_boundary(7) || !token.is_char_boundary(len - 4) {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
    options: InferenceOptions,
}

#[derive(Serialize)]
struct InferenceParameters {
    max_length: usize,
    num_beams: usize,
    early_stopping: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    truncate: Option<usize>,
}

#[derive(Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Deserialize)]
struct GeneratedText {
    generated_text: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Generated(Vec<GeneratedText>),
    Error { error: String },
}

/// Client for a text2text model served by the Hugging Face Inference API.
#[derive(Clone)]
pub struct HubInferenceClient {
    http: reqwest::Client,
    base_url: String,
    model_id: String,
    token: String,
}

impl HubInferenceClient {
    /// Builds a client for `model_id` on the default inference endpoint.
    pub fn new(token: String, model_id: String) -> Self {
        Self::with_base_url(token, model_id, super::DEFAULT_INFERENCE_URL.to_string())
    }

    /// Builds a client with a custom base URL (e.g. a dedicated endpoint or a test server).
    pub fn with_base_url(token: String, model_id: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model_id,
            token,
        }
    }

    pub fn from_config(config: &dyn GenerationConfig) -> Self {
        Self::with_base_url(
            config.api_token().to_string(),
            config.model_id().to_string(),
            config.base_url().to_string(),
        )
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    fn generate_url(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model_id)
    }

    fn status_url(&self) -> String {
        format!("{}/status/{}", self.base_url, self.model_id)
    }
}

#[async_trait]
impl GenerationClient for HubInferenceClient {
    #[instrument(skip(self, prompt))]
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String> {
        info!(
            model = %self.model_id,
            prompt_len = prompt.len(),
            max_length = params.max_length,
            num_beams = params.num_beams,
            api_token = %mask_token(&self.token),
            "Inference API generate request"
        );

        let request = InferenceRequest {
            inputs: prompt,
            parameters: InferenceParameters {
                max_length: params.max_length,
                num_beams: params.num_beams,
                early_stopping: params.early_stopping,
                truncate: params.max_input_tokens,
            },
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let response = self
            .http
            .post(self.generate_url())
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<InferenceResponse>(&body) {
                Ok(InferenceResponse::Error { error }) => error,
                _ => body,
            };
            warn!(model = %self.model_id, status = %status, error = %message, "Inference API returned error");
            anyhow::bail!("Inference API error ({}): {}", status, message);
        }

        let outputs = match serde_json::from_str::<InferenceResponse>(&body) {
            Ok(InferenceResponse::Generated(outputs)) => outputs,
            Ok(InferenceResponse::Error { error }) => {
                anyhow::bail!("Inference API error ({}): {}", status, error)
            }
            Err(e) => anyhow::bail!("Unexpected inference API response: {}", e),
        };
        let text = outputs
            .into_iter()
            .next()
            .map(|o| o.generated_text)
            .ok_or_else(|| anyhow::anyhow!("No output from inference API"))?;
        info!(model = %self.model_id, output_len = text.len(), "Inference API generate done");
        Ok(text)
    }

    #[instrument(skip(self))]
    async fn ensure_ready(&self) -> Result<()> {
        info!(
            model = %self.model_id,
            api_token = %mask_token(&self.token),
            "Checking model availability"
        );
        let response = self
            .http
            .get(self.status_url())
            .bearer_auth(&self.token)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Model {} unavailable ({}). Check HUGGING_FACE_TOKEN and MODEL_HUB_ID: {}",
                self.model_id,
                status,
                body
            );
        }
        info!(model = %self.model_id, "Model available");
        Ok(())
    }
}
