//! Vocabulary - the canonical word to gloss table

use std::collections::BTreeMap;
use std::path::Path;

use signa_core::{SignaError, SignaResult};

/// Built-in word → gloss entries
const CANONICAL_ENTRIES: &[(&str, &[&str])] = &[
    ("hello", &["HELLO"]),
    ("hi", &["HELLO"]),
    ("goodbye", &["GOODBYE"]),
    ("bye", &["GOODBYE"]),
    ("thank", &["THANK"]),
    ("thanks", &["THANK"]),
    ("you", &["YOU"]),
    ("please", &["PLEASE"]),
    ("sorry", &["SORRY"]),
    ("yes", &["YES"]),
    ("no", &["NO"]),
    ("good", &["GOOD"]),
    ("bad", &["BAD"]),
    ("happy", &["HAPPY"]),
    ("sad", &["SAD"]),
    ("help", &["HELP"]),
    ("me", &["ME"]),
    ("my", &["MY"]),
    ("name", &["NAME"]),
    ("is", &["IS"]),
    ("love", &["LOVE"]),
    ("like", &["LIKE"]),
    ("water", &["WATER"]),
    ("food", &["FOOD"]),
    ("eat", &["EAT"]),
    ("drink", &["DRINK"]),
    ("sleep", &["SLEEP"]),
    ("work", &["WORK"]),
    ("home", &["HOME"]),
    ("family", &["FAMILY"]),
    ("friend", &["FRIEND"]),
    ("time", &["TIME"]),
    ("today", &["TODAY"]),
    ("tomorrow", &["TOMORROW"]),
    ("yesterday", &["YESTERDAY"]),
    ("morning", &["MORNING"]),
    ("afternoon", &["AFTERNOON"]),
    ("night", &["NIGHT"]),
    ("where", &["WHERE"]),
    ("what", &["WHAT"]),
    ("when", &["WHEN"]),
    ("why", &["WHY"]),
    ("how", &["HOW"]),
    ("who", &["WHO"]),
    ("beautiful", &["BEAUTIFUL"]),
    ("amazing", &["AMAZING"]),
    ("wonderful", &["WONDERFUL"]),
    ("fine", &["FINE"]),
    ("ok", &["OK"]),
    ("okay", &["OK"]),
    ("thankyou", &["THANK", "YOU"]),
    // Articles map to their own glosses so the grammar pass can drop them
    ("the", &["THE"]),
    ("a", &["A"]),
    ("an", &["AN"]),
];

/// Word → gloss lookup table; keys are lowercase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    entries: BTreeMap<String, Vec<String>>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::canonical()
    }
}

impl Vocabulary {
    /// The built-in table
    pub fn canonical() -> Self {
        let entries = CANONICAL_ENTRIES
            .iter()
            .map(|(word, glosses)| {
                (
                    word.to_string(),
                    glosses.iter().map(|g| g.to_string()).collect(),
                )
            })
            .collect();
        Vocabulary { entries }
    }

    /// Custom table; words are lowercased, glosses uppercased, empty
    /// gloss lists discarded
    pub fn from_entries<I, W, G>(entries: I) -> Self
    where
        I: IntoIterator<Item = (W, Vec<G>)>,
        W: AsRef<str>,
        G: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .filter_map(|(word, glosses)| {
                let word = word.as_ref().trim().to_lowercase();
                let glosses: Vec<String> = glosses
                    .iter()
                    .map(|g| g.as_ref().trim().to_uppercase())
                    .filter(|g| !g.is_empty())
                    .collect();
                if word.is_empty() || glosses.is_empty() {
                    None
                } else {
                    Some((word, glosses))
                }
            })
            .collect();
        Vocabulary { entries }
    }

    /// Parse a JSON object `{ "word": ["GLOSS", ...] }`
    pub fn from_json(json: &str) -> SignaResult<Self> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)
            .map_err(|e| SignaError::InvalidConfig(format!("vocabulary: {e}")))?;
        Ok(Self::from_entries(raw))
    }

    /// Load a JSON vocabulary file
    pub fn load(path: impl AsRef<Path>) -> SignaResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let vocabulary = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            entries = vocabulary.len(),
            "loaded vocabulary"
        );
        Ok(vocabulary)
    }

    /// Glosses for a normalized (lowercase) word
    pub fn lookup(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in word order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(word, glosses)| (word.as_str(), glosses.as_slice()))
    }

    /// Underlying map, for serialization
    pub fn as_map(&self) -> &BTreeMap<String, Vec<String>> {
        &self.entries
    }
}
