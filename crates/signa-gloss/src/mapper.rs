//! Gloss Mapper - English text to ASL gloss tokens
//!
//! Mapping is a dictionary scan: normalize, look each word up, fall back to
//! fingerspelling, then apply the (very small) grammar pass.

use signa_core::{GlossSequence, GlossToken};

use crate::Vocabulary;

/// Punctuation stripped before splitting into words
pub const STRIPPED_PUNCTUATION: &[char] = &[',', '.', '!', '?'];

/// Lowercase, strip punctuation, split on whitespace
pub fn normalize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace(STRIPPED_PUNCTUATION, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Maps text onto gloss tokens using a vocabulary
#[derive(Debug, Clone, Default)]
pub struct GlossMapper {
    vocabulary: Vocabulary,
}

impl GlossMapper {
    pub fn new(vocabulary: Vocabulary) -> Self {
        GlossMapper { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Map text to gloss tokens. Never fails; unknown words are fingerspelled
    /// and non-alphabetic input yields an empty sequence.
    pub fn map(&self, text: &str) -> Vec<GlossToken> {
        let mut tokens = Vec::new();

        for word in normalize(text) {
            match self.vocabulary.lookup(&word) {
                Some(glosses) => {
                    tokens.extend(glosses.iter().map(|g| GlossToken::sign(word.as_str(), g.as_str())));
                }
                None => {
                    tokens.extend(word.chars().filter(|c| c.is_alphabetic()).map(GlossToken::letter));
                }
            }
        }

        apply_grammar(tokens)
    }

    /// Map text and keep it alongside the tokens
    pub fn translate(&self, text: &str) -> GlossSequence {
        GlossSequence::new(text, self.map(text))
    }
}

/// ASL grammar pass: articles are not signed
fn apply_grammar(tokens: Vec<GlossToken>) -> Vec<GlossToken> {
    tokens.into_iter().filter(|t| !t.is_article()).collect()
}
