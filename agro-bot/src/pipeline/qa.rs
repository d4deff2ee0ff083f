//! Q&A pipeline: retrieve context from the corpus, then generate the answer.

use std::sync::Arc;

use tracing::{info, instrument};

use super::answer::AnswerGenerator;
use crate::core::Result;
use crate::corpus::Corpus;
use crate::retrieval::{KeywordRetriever, Retrieval};

/// Retriever and answer generator over a shared, read-only corpus.
#[derive(Clone)]
pub struct QaPipeline {
    corpus: Arc<Corpus>,
    retriever: KeywordRetriever,
    answers: AnswerGenerator,
}

impl QaPipeline {
    pub fn new(corpus: Arc<Corpus>, retriever: KeywordRetriever, answers: AnswerGenerator) -> Self {
        Self {
            corpus,
            retriever,
            answers,
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn retrieve(&self, question: &str) -> Retrieval {
        self.retriever.retrieve(question, &self.corpus)
    }

    /// Answers `question`: retrieval, then generation.
    #[instrument(skip(self))]
    pub async fn ask(&self, question: &str) -> Result<String> {
        let retrieval = self.retrieve(question);
        info!(
            matched = retrieval.is_match(),
            corpus_entries = self.corpus.len(),
            "step: context retrieval done"
        );
        self.answers.answer(question, &retrieval).await
    }
}
