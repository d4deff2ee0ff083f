//! Tests for [`agro_bot::retrieval::KeywordRetriever`].
//!
//! Covers: unique best match, below-threshold fallback, empty corpus, first-wins tie-break,
//! all-stop-word questions, and the worked examples for soil erosion / agriculture.

use agro_bot::corpus::{Corpus, CorpusEntry};
use agro_bot::retrieval::{KeywordRetriever, Retrieval};

fn soil_corpus() -> Corpus {
    Corpus::new(vec![CorpusEntry::new(
        "what is soil erosion",
        "Soil erosion is the removal of topsoil.",
    )])
}

fn syllabus_corpus() -> Corpus {
    Corpus::new(vec![
        CorpusEntry::new(
            "what is soil erosion",
            "Soil erosion is the removal of topsoil.",
        ),
        CorpusEntry::new(
            "what are the methods of land drainage",
            "Land drainage methods include open ditches and tile drains.",
        ),
        CorpusEntry::new(
            "explain the importance of crop rotation",
            "Crop rotation maintains soil fertility and controls pests.",
        ),
    ])
}

/// **Test: Query sharing two significant tokens with the only entry returns its context.**
///
/// **Setup:** corpus = `[{what is soil erosion, Soil erosion is the removal of topsoil.}]`.
/// **Action:** retrieve "What causes soil erosion?".
/// **Expected:** significant tokens {causes, soil, erosion}; overlap {soil, erosion} = 2 → Matched.
#[test]
fn matches_soil_erosion_example() {
    let retriever = KeywordRetriever::default();
    let result = retriever.retrieve("What causes soil erosion?", &soil_corpus());
    assert_eq!(
        result,
        Retrieval::Matched("Soil erosion is the removal of topsoil.".to_string())
    );
}

/// **Test: "What is agriculture?" shares at most one token → NoMatch (question returned unchanged).**
#[test]
fn agriculture_example_falls_back() {
    let retriever = KeywordRetriever::default();
    let question = "What is agriculture?";
    let result = retriever.retrieve(question, &soil_corpus());
    assert_eq!(result, Retrieval::NoMatch);
    assert_eq!(result.context_or(question), question);
}

/// **Test: Unique best entry among several is selected.**
#[test]
fn picks_unique_best_entry() {
    let retriever = KeywordRetriever::default();
    let result = retriever.retrieve("Describe land drainage methods", &syllabus_corpus());
    assert_eq!(
        result.context(),
        Some("Land drainage methods include open ditches and tile drains.")
    );
}

/// **Test: Exactly one shared token with every entry is below the threshold.**
#[test]
fn single_shared_token_is_no_match() {
    let retriever = KeywordRetriever::default();
    assert_eq!(
        retriever.retrieve("Why is soil red?", &syllabus_corpus()),
        Retrieval::NoMatch
    );
    assert_eq!(
        retriever.retrieve("Tell me about tractors", &syllabus_corpus()),
        Retrieval::NoMatch
    );
}

/// **Test: Empty corpus always yields NoMatch, for any input.**
#[test]
fn empty_corpus_never_matches() {
    let retriever = KeywordRetriever::default();
    let corpus = Corpus::empty();
    for q in ["What causes soil erosion?", "", "soil erosion soil erosion", "?"] {
        assert_eq!(retriever.retrieve(q, &corpus), Retrieval::NoMatch);
    }
}

/// **Test: Two entries tie at the maximum score; the first in corpus order wins.**
#[test]
fn tie_keeps_first_entry() {
    let corpus = Corpus::new(vec![
        CorpusEntry::new("causes of soil erosion", "First context."),
        CorpusEntry::new("soil erosion control", "Second context."),
    ]);
    let retriever = KeywordRetriever::default();
    let result = retriever.retrieve("soil erosion", &corpus);
    assert_eq!(result, Retrieval::Matched("First context.".to_string()));
}

/// **Test: A later entry replaces the leader only with a strictly higher score.**
#[test]
fn later_entry_wins_only_with_higher_score() {
    let corpus = Corpus::new(vec![
        CorpusEntry::new("soil erosion", "Two shared."),
        CorpusEntry::new("causes of soil erosion by water", "Five shared."),
    ]);
    let retriever = KeywordRetriever::default();
    let result = retriever.retrieve("causes of soil erosion by water", &corpus);
    assert_eq!(result, Retrieval::Matched("Five shared.".to_string()));
}

/// **Test: A question made only of stop words scores zero everywhere → NoMatch.**
#[test]
fn all_stop_words_is_no_match() {
    let corpus = Corpus::new(vec![CorpusEntry::new(
        "what is the livestock",
        "Livestock context.",
    )]);
    let retriever = KeywordRetriever::default();
    assert_eq!(
        retriever.retrieve("What is the livestock?", &corpus),
        Retrieval::NoMatch
    );
}

/// **Test: Corpus-side tokens keep stop words; only the question side is filtered.**
///
/// **Setup:** stop words {soil}; corpus question "soil erosion hazards".
/// **Expected:** "soil erosion hazards" → significant {erosion, hazards} → score 2 → Matched.
#[test]
fn stop_words_apply_to_question_side_only() {
    let corpus = Corpus::new(vec![CorpusEntry::new(
        "soil erosion hazards",
        "Hazards context.",
    )]);
    let retriever = KeywordRetriever::new(["soil"], 2);
    assert!(retriever.retrieve("soil erosion hazards", &corpus).is_match());

    let strict = KeywordRetriever::new(["soil"], 3);
    assert!(!strict.retrieve("soil erosion hazards", &corpus).is_match());
}

/// **Test: Minimum score is configurable.**
#[test]
fn min_score_of_one_accepts_single_token() {
    let retriever = KeywordRetriever::new(["what", "is"], 1);
    let result = retriever.retrieve("What is erosion?", &soil_corpus());
    assert!(result.is_match());
}
