//! Property tests for the gloss mapper

use proptest::prelude::*;
use signa_gloss::{normalize, GlossMapper};

proptest! {
    #[test]
    fn prop_mapping_covers_every_word(text in "[a-zA-Z0-9 ,.!?']{0,60}") {
        let mapper = GlossMapper::default();
        let vocab = mapper.vocabulary();

        let mut expected = Vec::new();
        for word in normalize(&text) {
            match vocab.lookup(&word) {
                Some(glosses) => expected.extend(glosses.iter().cloned()),
                None => expected.extend(
                    word.chars()
                        .filter(|c| c.is_alphabetic())
                        .map(|c| format!("FS-{}", c.to_ascii_uppercase())),
                ),
            }
        }
        expected.retain(|g| g != "THE" && g != "A" && g != "AN");

        let actual: Vec<String> = mapper.map(&text).into_iter().map(|t| t.gloss_id).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_mapping_never_emits_articles(text in "\\PC{0,40}") {
        let mapper = GlossMapper::default();
        for token in mapper.map(&text) {
            prop_assert!(!token.is_article());
            prop_assert!(token.duration_seconds == 0.5 || token.duration_seconds == 1.0);
        }
    }
}
