//! Shared test helpers: a mockall generation client and bot assembly around it.

#![allow(dead_code)]

use std::sync::Arc;

use agro_bot::corpus::{Corpus, CorpusEntry};
use agro_bot::retrieval::KeywordRetriever;
use agro_bot::{AgroBot, AgroComponents};
use async_trait::async_trait;
use llm_client::{GenerationClient, GenerationParams};
use mockall::mock;

pub const GREETING: &str = "Welcome! Ask me a question about soil degradation, livestock, or farm mechanization.";
pub const CLEARED: &str = "Conversation cleared. Ready for new questions.";

mock! {
    pub Generator {}

    #[async_trait]
    impl GenerationClient for Generator {
        async fn generate(&self, prompt: &str, params: &GenerationParams) -> anyhow::Result<String>;
        async fn ensure_ready(&self) -> anyhow::Result<()>;
    }
}

/// One-entry corpus from the soil erosion worked example.
pub fn soil_corpus() -> Corpus {
    Corpus::new(vec![CorpusEntry::new(
        "what is soil erosion",
        "Soil erosion is the removal of topsoil.",
    )])
}

pub fn bot_with(client: MockGenerator, corpus: Corpus) -> AgroBot {
    let components = AgroComponents::new(
        Arc::new(corpus),
        KeywordRetriever::default(),
        Arc::new(client),
        GREETING,
    );
    AgroBot::new(components, CLEARED)
}

/// Turns of session `id` as (role label, content) pairs.
pub async fn turns(bot: &AgroBot, id: &str) -> Vec<(String, String)> {
    let session = bot.components.sessions.get_or_create(id).await;
    let session = session.lock().await;
    session
        .log()
        .all()
        .iter()
        .map(|t| (t.role.label().to_string(), t.content.clone()))
        .collect()
}

pub fn turn(role: &str, content: &str) -> (String, String) {
    (role.to_string(), content.to_string())
}
