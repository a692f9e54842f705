//! End-to-end pipeline behaviour

use proptest::prelude::*;
use signa_core::{FixedClock, HandJoint, SignaError, Timestamp};
use signa_gloss::Vocabulary;
use signa_runtime::{OutputFormat, PipelineConfig, SignPipeline};

fn pipeline_with(config: PipelineConfig) -> SignPipeline<FixedClock> {
    SignPipeline::new(
        config,
        Vocabulary::canonical(),
        FixedClock::new(Timestamp::from_millis(1_650_000_000_000)),
    )
    .unwrap()
}

fn pipeline() -> SignPipeline<FixedClock> {
    pipeline_with(PipelineConfig::default())
}

#[test]
fn test_hello_request() {
    let translation = pipeline().text_to_animation("hello", Some(3.0)).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&translation.to_json(OutputFormat::Animation, false).unwrap()).unwrap();

    assert_eq!(json["gloss_sequence"], serde_json::json!(["HELLO"]));
    assert_eq!(json["animation"]["fps"], 30);
    assert_eq!(json["animation"]["total_duration"], 3.0);
    assert_eq!(json["animation"]["total_frames"], 90);

    let frame = &json["animation"]["frames"][0];
    assert_eq!(frame["body_keypoints"].as_array().unwrap().len(), 33);
    assert_eq!(frame["left_hand_keypoints"].as_array().unwrap().len(), 21);
    assert_eq!(frame["face_keypoints"].as_array().unwrap().len(), 468);
    assert_eq!(frame["face_keypoints"][0].as_array().unwrap().len(), 4);
}

#[test]
fn test_articles_and_fingerspelling() {
    let translation = pipeline().text_to_animation("The cat!", Some(2.0)).unwrap();
    let gloss = translation.animation().gloss();
    assert_eq!(gloss.gloss_ids(), vec!["FS-C", "FS-A", "FS-T"]);
    assert_eq!(gloss.timing(), vec![0.5, 0.5, 0.5]);
}

#[test]
fn test_unmappable_text_is_not_an_error() {
    let translation = pipeline().text_to_animation("123 ?!", Some(1.0)).unwrap();
    assert!(translation.animation().gloss().is_empty());
    assert_eq!(translation.animation().frame_count(), 30);
}

#[test]
fn test_vowel_fingerspelling_makes_a_fist() {
    let p = pipeline();
    let vowel = p.gloss_to_animation(&["FS-A"], Some(1.0)).unwrap();
    let consonant = p.gloss_to_animation(&["FS-K"], Some(1.0)).unwrap();

    let spread = |t: &signa_runtime::Translation| {
        let hand = t.animation().frames()[0].right_hand_keypoints;
        let wrist = hand[HandJoint::Wrist.index()];
        hand.iter().map(|k| k.distance(&wrist)).fold(0.0f32, f32::max)
    };
    assert!(spread(&vowel) < 0.05);
    assert!(spread(&consonant) > spread(&vowel));
}

#[test]
fn test_hidden_face_mesh() {
    let mut config = PipelineConfig::default();
    config.scene.avatar.show_face_mesh = false;
    let translation = pipeline_with(config).text_to_animation("happy", Some(1.0)).unwrap();

    assert!(translation.scene().frames().iter().all(|f| f.face.is_none()));
    // pose frames still carry the face
    assert_eq!(translation.animation().frames()[0].face_keypoints.len(), 468);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = PipelineConfig {
        fps: 0,
        ..PipelineConfig::default()
    };
    let result = SignPipeline::new(config, Vocabulary::canonical(), FixedClock::default());
    assert!(matches!(result, Err(SignaError::InvalidFrameRate(0))));
}

#[test]
fn test_huge_durations_are_rejected() {
    let p = pipeline();
    assert!(matches!(
        p.text_to_animation("hello", Some(1e300)),
        Err(SignaError::DurationTooLong { .. })
    ));

    let config = PipelineConfig {
        max_duration: 1e308,
        ..PipelineConfig::default()
    };
    let result = SignPipeline::new(config, Vocabulary::canonical(), FixedClock::default());
    assert!(matches!(result, Err(SignaError::InvalidConfig(_))));
}

#[test]
fn test_custom_vocabulary_file() {
    let path = std::env::temp_dir().join(format!("signa-vocab-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "Coffee": ["drink", "coffee"] }"#).unwrap();

    let config = PipelineConfig {
        vocabulary_path: Some(path.clone()),
        ..PipelineConfig::default()
    };
    let pipeline = SignPipeline::from_config(config).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(pipeline.vocabulary().len(), 1);
    let translation = pipeline.text_to_animation("coffee hi", Some(1.0)).unwrap();
    assert_eq!(
        translation.animation().gloss().gloss_ids(),
        vec!["DRINK", "COFFEE", "FS-H", "FS-I"]
    );
}

#[test]
fn test_output_is_deterministic() {
    let a = pipeline().text_to_animation("thank you friend", Some(2.5)).unwrap();
    let b = pipeline().text_to_animation("thank you friend", Some(2.5)).unwrap();
    assert_eq!(
        a.to_json(OutputFormat::Scene, false).unwrap(),
        b.to_json(OutputFormat::Scene, false).unwrap()
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_any_text_translates(text in "[a-zA-Z0-9 ,.!?]{0,40}", millis in 1u32..5_000) {
        let duration = millis as f64 / 1000.0;
        let translation = pipeline().text_to_animation(&text, Some(duration)).unwrap();
        let response = translation.response();

        prop_assert_eq!(response.animation.total_frames, translation.animation().frame_count());
        prop_assert!(response.animation.total_frames >= 1);
        prop_assert_eq!(response.gloss_sequence.len(), response.timing.len());
        prop_assert!(!response.gloss_sequence.iter().any(|g| ["THE", "A", "AN"].contains(g)));
        prop_assert_eq!(translation.scene().frames().len(), response.animation.total_frames);
    }
}
