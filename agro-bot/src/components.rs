//! Component factory: builds AgroComponents from config. Isolates assembly logic from runner.

use std::path::Path;
use std::sync::Arc;

use llm_client::{GenerationClient, HubInferenceClient};
use tracing::{info, instrument};

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::corpus::{load_corpus, Corpus};
use crate::handlers::{ConversationHandler, LoggingHandler, NavigationHandler, QaHandler, QgHandler};
use crate::pipeline::{AnswerGenerator, QaPipeline, QuestionGenerator};
use crate::retrieval::KeywordRetriever;
use crate::session::SessionStore;

/// Immutable handles shared by every session, plus the session store.
#[derive(Clone)]
pub struct AgroComponents {
    pub corpus: Arc<Corpus>,
    pub client: Arc<dyn GenerationClient>,
    pub qa: QaPipeline,
    pub questions: QuestionGenerator,
    pub sessions: SessionStore,
}

impl AgroComponents {
    /// Assembles components from already-initialized handles (used by tests with a mock client).
    pub fn new(
        corpus: Arc<Corpus>,
        retriever: KeywordRetriever,
        client: Arc<dyn GenerationClient>,
        session_greeting: impl Into<String>,
    ) -> Self {
        let qa = QaPipeline::new(
            corpus.clone(),
            retriever,
            AnswerGenerator::new(client.clone()),
        );
        let questions = QuestionGenerator::new(client.clone());
        Self {
            corpus,
            client,
            qa,
            questions,
            sessions: SessionStore::new(session_greeting),
        }
    }
}

/// Creates the hosted-model client from the generation config.
pub fn create_generation_client(config: &BotConfig) -> Arc<dyn GenerationClient> {
    let client = HubInferenceClient::from_config(config.generation());
    info!(model = %client.model_id(), base_url = %config.generation().inference_base_url, "Generation client created");
    Arc::new(client)
}

/// Loads the corpus named by config and assembles components around `client`.
#[instrument(skip(config, client))]
pub async fn build_components(config: &BotConfig, client: Arc<dyn GenerationClient>) -> AgroComponents {
    let corpus = Arc::new(load_corpus(Path::new(config.corpus_path())).await);
    AgroComponents::new(
        corpus,
        config.retrieval().retriever(),
        client,
        config.session_greeting(),
    )
}

/// Builds the handler chain: logging → conversation → navigation → QA → QG.
pub fn build_handler_chain(components: &AgroComponents, cleared_greeting: &str) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(ConversationHandler))
        .add_handler(Arc::new(NavigationHandler::new(cleared_greeting)))
        .add_handler(Arc::new(QaHandler::new(components.qa.clone())))
        .add_handler(Arc::new(QgHandler::new(components.questions.clone())))
}
