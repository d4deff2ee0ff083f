//! # Generation pipelines
//!
//! Answer generation (retrieval-augmented) and quiz question generation, both delegating to
//! an injected [`llm_client::GenerationClient`].

pub mod answer;
pub mod qa;
pub mod question;

pub use answer::AnswerGenerator;
pub use qa::QaPipeline;
pub use question::{validate_source_text, QuestionGenerator, MIN_SOURCE_WORDS, SHORT_SOURCE_WARNING};
