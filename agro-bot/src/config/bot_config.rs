//! BotConfig: BaseConfig + RetrievalConfig + EnvGenerationConfig. Use load() for env-based loading.

use anyhow::Result;
use llm_client::EnvGenerationConfig;

use super::{BaseConfig, RetrievalConfig};

/// Full assistant config. Use BotConfig::load() for env-based loading.
pub struct BotConfig {
    pub base: BaseConfig,
    pub retrieval: RetrievalConfig,
    pub generation: EnvGenerationConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides
    /// HUGGING_FACE_TOKEN. Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load()?;
        let retrieval = RetrievalConfig::load()?;
        let generation = EnvGenerationConfig::load(token)?;
        Ok(Self {
            base,
            retrieval,
            generation,
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.retrieval.validate()?;
        self.generation.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn retrieval(&self) -> &RetrievalConfig {
        &self.retrieval
    }
    pub fn generation(&self) -> &EnvGenerationConfig {
        &self.generation
    }

    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn corpus_path(&self) -> &str {
        &self.base.corpus_path
    }
    pub fn session_greeting(&self) -> &str {
        &self.base.session_greeting
    }
    pub fn cleared_greeting(&self) -> &str {
        &self.base.cleared_greeting
    }
    pub fn model_hub_id(&self) -> &str {
        &self.generation.model_hub_id
    }
}
