//! Startup and dispatch: AgroBot owns the components and handler chain; run_bot / ask_once /
//! generate_question_once are the binary's entry points.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{error, info, instrument};

use llm_client::{mask_token, GenerationClient};

use crate::chain::HandlerChain;
use crate::components::{
    build_components, build_handler_chain, create_generation_client, AgroComponents,
};
use crate::config::BotConfig;
use crate::core::{init_tracing, AgroError, HandlerError, HandlerResponse, Message};
use crate::pipeline::{validate_source_text, SHORT_SOURCE_WARNING};
use crate::repl::run_repl;

/// Components plus the handler chain that drives every session.
pub struct AgroBot {
    pub components: AgroComponents,
    pub handler_chain: HandlerChain,
}

impl AgroBot {
    pub fn new(components: AgroComponents, cleared_greeting: &str) -> Self {
        let handler_chain = build_handler_chain(&components, cleared_greeting);
        Self {
            components,
            handler_chain,
        }
    }

    /// Dispatches one line of user input to the session `session_id` (created on first use).
    ///
    /// The session stays locked for the whole dispatch. Errors leave the session as the
    /// handlers left it; nothing is rolled back.
    #[instrument(skip(self, content))]
    pub async fn handle_input(
        &self,
        session_id: &str,
        content: &str,
    ) -> crate::core::Result<HandlerResponse> {
        let session = self.components.sessions.get_or_create(session_id).await;
        let mut session = session.lock().await;
        let message = Message::new(session_id, content);
        let result = self.handler_chain.handle(&mut session, &message).await;
        if let Err(ref e) = result {
            error!(error = %e, session_id = %session_id, "Handler chain failed");
        }
        result
    }
}

/// Validates config, starts logging, and checks the model is reachable. Any failure is fatal.
#[instrument(skip(config))]
async fn init(config: &BotConfig) -> Result<Arc<dyn GenerationClient>> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        model = %config.model_hub_id(),
        api_token = %mask_token(&config.generation().hugging_face_token),
        corpus_path = %config.corpus_path(),
        "Initializing assistant"
    );

    let client = create_generation_client(config);
    client
        .ensure_ready()
        .await
        .context("Generation model could not be initialized")?;
    Ok(client)
}

/// Main entry: init, build components, then run the terminal REPL until EOF or `/quit`.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    let client = init(&config).await?;
    let components = build_components(&config, client).await;
    let bot = AgroBot::new(components, config.cleared_greeting());

    info!("Assistant started successfully");
    run_repl(&bot).await?;
    info!("Assistant stopped");
    Ok(())
}

/// Answers a single question without a session and returns the answer.
#[instrument(skip(config))]
pub async fn ask_once(config: BotConfig, question: &str) -> Result<String> {
    if question.trim().is_empty() {
        return Err(AgroError::from(HandlerError::NoText).into());
    }
    let client = init(&config).await?;
    let components = build_components(&config, client).await;
    Ok(components.qa.ask(question.trim()).await?)
}

/// Generates a quiz question from `source_text`; short sources get the warning text instead.
#[instrument(skip(config, source_text))]
pub async fn generate_question_once(config: BotConfig, source_text: &str) -> Result<String> {
    if let Err(e) = validate_source_text(source_text) {
        info!(reason = %e, "Source text rejected");
        return Ok(SHORT_SOURCE_WARNING.to_string());
    }
    let client = init(&config).await?;
    let components = build_components(&config, client).await;
    Ok(components.questions.generate_question(source_text.trim()).await?)
}
