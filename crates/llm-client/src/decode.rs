//! Output cleanup: removes T5 special/control tokens left in generated text.

use regex::Regex;
use std::sync::LazyLock;

static SPECIAL_TOKENS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<pad>|</s>|<unk>|<extra_id_\d+>").expect("special token pattern is valid")
});

/// Strips `<pad>`, `</s>`, `<unk>` and `<extra_id_N>` markers and trims surrounding whitespace.
///
/// Text without special tokens is returned trimmed but otherwise verbatim.
pub fn strip_special_tokens(text: &str) -> String {
    SPECIAL_TOKENS.replace_all(text, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_pad_and_eos() {
        assert_eq!(
            strip_special_tokens("<pad> What is land drainage?</s>"),
            "What is land drainage?"
        );
    }

    #[test]
    fn strips_sentinel_tokens() {
        assert_eq!(strip_special_tokens("<extra_id_0> topsoil <unk>"), "topsoil");
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(
            strip_special_tokens("Crop rotation restores soil fertility."),
            "Crop rotation restores soil fertility."
        );
    }

    #[test]
    fn only_tokens_yields_empty() {
        assert_eq!(strip_special_tokens("<pad></s>"), "");
    }
}
