//! Gloss tokens - the written labels standing in for individual signs
//!
//! A gloss sequence is the bridge between text and motion: the mapper
//! produces it, the pose generator consumes it.

use serde::Serialize;

/// Prefix marking a fingerspelled letter gloss (`FS-A`, `FS-B`, ...)
pub const FINGERSPELL_PREFIX: &str = "FS-";

/// Seconds allotted to a dictionary sign
pub const SIGN_DURATION_SECS: f32 = 1.0;

/// Seconds allotted to a fingerspelled letter
pub const LETTER_DURATION_SECS: f32 = 0.5;

/// Glosses omitted from output (ASL does not sign articles)
pub const ARTICLE_GLOSSES: &[&str] = &["THE", "A", "AN"];

/// A single sign in a gloss sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlossToken {
    /// Source word (or letter) this token was produced from
    pub text: String,
    /// Canonical gloss identifier
    pub gloss_id: String,
    pub is_fingerspelled: bool,
    pub duration_seconds: f32,
}

impl GlossToken {
    /// Dictionary sign
    pub fn sign(text: impl Into<String>, gloss_id: impl Into<String>) -> Self {
        GlossToken {
            text: text.into(),
            gloss_id: gloss_id.into(),
            is_fingerspelled: false,
            duration_seconds: SIGN_DURATION_SECS,
        }
    }

    /// Fingerspelled letter (`FS-<UPPERCASE>`)
    pub fn letter(letter: char) -> Self {
        let upper: String = letter.to_uppercase().collect();
        GlossToken {
            text: letter.to_string(),
            gloss_id: format!("{FINGERSPELL_PREFIX}{upper}"),
            is_fingerspelled: true,
            duration_seconds: LETTER_DURATION_SECS,
        }
    }

    /// Token for a caller-supplied gloss identifier
    pub fn from_gloss_id(gloss_id: &str) -> Option<Self> {
        let id = gloss_id.trim().to_uppercase();
        if id.is_empty() {
            return None;
        }

        let token = if id.starts_with(FINGERSPELL_PREFIX) && id.len() > FINGERSPELL_PREFIX.len() {
            GlossToken {
                text: id[FINGERSPELL_PREFIX.len()..].to_lowercase(),
                gloss_id: id,
                is_fingerspelled: true,
                duration_seconds: LETTER_DURATION_SECS,
            }
        } else {
            GlossToken {
                text: id.to_lowercase(),
                gloss_id: id,
                is_fingerspelled: false,
                duration_seconds: SIGN_DURATION_SECS,
            }
        };
        Some(token)
    }

    /// Is this an article gloss?
    pub fn is_article(&self) -> bool {
        ARTICLE_GLOSSES.contains(&self.gloss_id.as_str())
    }

    /// Semantic class driving the generated motion
    pub fn class(&self) -> GlossClass {
        GlossClass::of(&self.gloss_id)
    }
}

/// Motion class of a gloss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GlossClass {
    /// No gloss or an unclassified sign
    #[default]
    Neutral,
    /// HELLO, GOODBYE - waving arm
    Greeting,
    /// THANK, PLEASE - hand to chest
    Gratitude,
    /// HAPPY - smiling face
    Happy,
    /// Fingerspelled letter
    Fingerspelled(char),
}

impl GlossClass {
    /// Classify a gloss identifier
    pub fn of(gloss_id: &str) -> Self {
        if let Some(rest) = gloss_id.strip_prefix(FINGERSPELL_PREFIX) {
            if let Some(letter) = rest.chars().next() {
                return GlossClass::Fingerspelled(letter);
            }
        }

        match gloss_id {
            "HELLO" | "GOODBYE" => GlossClass::Greeting,
            "THANK" | "PLEASE" => GlossClass::Gratitude,
            "HAPPY" => GlossClass::Happy,
            _ => GlossClass::Neutral,
        }
    }

    /// Fingerspelled vowels use a closed fist
    pub fn is_vowel_letter(self) -> bool {
        matches!(self, GlossClass::Fingerspelled(c) if "AEIOU".contains(c))
    }
}

/// How a gloss sequence was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GlossOrigin {
    /// Mapped from text through the vocabulary
    SimplifiedMapping,
    /// Supplied directly as gloss identifiers
    DirectGloss,
}

/// Ordered gloss tokens together with their source text
#[derive(Debug, Clone, PartialEq)]
pub struct GlossSequence {
    pub original_text: String,
    pub tokens: Vec<GlossToken>,
    pub origin: GlossOrigin,
}

impl GlossSequence {
    pub fn new(original_text: impl Into<String>, tokens: Vec<GlossToken>) -> Self {
        GlossSequence {
            original_text: original_text.into(),
            tokens,
            origin: GlossOrigin::SimplifiedMapping,
        }
    }

    /// Sequence from caller-supplied gloss identifiers; blank ids are skipped
    pub fn from_glosses<S: AsRef<str>>(glosses: &[S]) -> Self {
        let tokens: Vec<GlossToken> = glosses
            .iter()
            .filter_map(|g| GlossToken::from_gloss_id(g.as_ref()))
            .collect();
        let original_text = tokens
            .iter()
            .map(|t| t.gloss_id.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        GlossSequence {
            original_text,
            tokens,
            origin: GlossOrigin::DirectGloss,
        }
    }

    pub fn empty() -> Self {
        GlossSequence::new("", Vec::new())
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GlossToken> {
        self.tokens.get(index)
    }

    /// Gloss identifiers in order
    pub fn gloss_ids(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.gloss_id.as_str()).collect()
    }

    /// Per-token durations in order
    pub fn timing(&self) -> Vec<f32> {
        self.tokens.iter().map(|t| t.duration_seconds).collect()
    }

    pub fn uses_fingerspelling(&self) -> bool {
        self.tokens.iter().any(|t| t.is_fingerspelled)
    }

    /// Sum of token durations
    pub fn natural_duration(&self) -> f32 {
        self.tokens.iter().map(|t| t.duration_seconds).sum()
    }

    /// Serializable summary for payloads
    pub fn summary(&self) -> GlossSummary {
        GlossSummary {
            original_text: self.original_text.clone(),
            gloss_sequence: self.gloss_ids().into_iter().map(str::to_string).collect(),
            timing: self.timing(),
            metadata: GlossMetadata {
                processing_method: self.origin,
                fingerspelling_used: self.uses_fingerspelling(),
                total_signs: self.len(),
            },
        }
    }
}

/// Gloss sequence as embedded in payloads
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlossSummary {
    pub original_text: String,
    pub gloss_sequence: Vec<String>,
    pub timing: Vec<f32>,
    pub metadata: GlossMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlossMetadata {
    pub processing_method: GlossOrigin,
    pub fingerspelling_used: bool,
    pub total_signs: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_token() {
        let token = GlossToken::letter('q');
        assert_eq!(token.gloss_id, "FS-Q");
        assert_eq!(token.text, "q");
        assert!(token.is_fingerspelled);
        assert_eq!(token.duration_seconds, LETTER_DURATION_SECS);
    }

    #[test]
    fn test_gloss_classes() {
        assert_eq!(GlossClass::of("HELLO"), GlossClass::Greeting);
        assert_eq!(GlossClass::of("GOODBYE"), GlossClass::Greeting);
        assert_eq!(GlossClass::of("THANK"), GlossClass::Gratitude);
        assert_eq!(GlossClass::of("PLEASE"), GlossClass::Gratitude);
        assert_eq!(GlossClass::of("HAPPY"), GlossClass::Happy);
        assert_eq!(GlossClass::of("FS-B"), GlossClass::Fingerspelled('B'));
        assert_eq!(GlossClass::of("WATER"), GlossClass::Neutral);
        assert_eq!(GlossClass::of("FS-"), GlossClass::Neutral);
    }

    #[test]
    fn test_vowel_letters() {
        assert!(GlossClass::Fingerspelled('A').is_vowel_letter());
        assert!(GlossClass::Fingerspelled('U').is_vowel_letter());
        assert!(!GlossClass::Fingerspelled('T').is_vowel_letter());
        assert!(!GlossClass::Neutral.is_vowel_letter());
    }

    #[test]
    fn test_from_glosses() {
        let seq = GlossSequence::from_glosses(&["hello", " ", "FS-x", "thank"]);
        assert_eq!(seq.gloss_ids(), vec!["HELLO", "FS-X", "THANK"]);
        assert_eq!(seq.origin, GlossOrigin::DirectGloss);
        assert_eq!(seq.original_text, "HELLO FS-X THANK");
        assert!(seq.tokens[1].is_fingerspelled);
        assert_eq!(seq.timing(), vec![1.0, 0.5, 1.0]);
        assert!((seq.natural_duration() - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_article_detection() {
        assert!(GlossToken::sign("the", "THE").is_article());
        assert!(!GlossToken::letter('a').is_article());
    }

    #[test]
    fn test_summary_shape() {
        let seq = GlossSequence::new("hi", vec![GlossToken::sign("hi", "HELLO")]);
        let json = serde_json::to_value(seq.summary()).unwrap();
        assert_eq!(json["gloss_sequence"][0], "HELLO");
        assert_eq!(json["metadata"]["processing_method"], "simplified_mapping");
        assert_eq!(json["metadata"]["fingerspelling_used"], false);
        assert_eq!(json["metadata"]["total_signs"], 1);
    }
}
