//! Pose Generator - gloss sequence to fixed-rate pose frames

use signa_core::{
    Animation, AnimationId, Clock, GlossClass, GlossSequence, PoseFrame, Side, SignaError,
    SignaResult, SystemClock, DEFAULT_FPS,
};

use crate::{body_pose, face_pose, hand_pose};

/// Absorbs representation error in `duration * fps` (e.g. 2.9999999 → 3)
const FRAME_COUNT_EPSILON: f64 = 1e-9;

/// Longest clip the generator will build (two hours at the default rate)
pub const MAX_FRAMES: usize = 216_000;

/// Number of frames for a clip: `floor(duration * fps + 1e-9)`, at least one.
///
/// The epsilon means a product sitting just below an integer rounds up to
/// it: `frame_count(0.29, 100)` is 29 where a bare floor of
/// `0.29 * 100.0 = 28.999999999999996` would give 28. Clips longer than
/// [`MAX_FRAMES`] are rejected with `DurationTooLong`.
pub fn frame_count(duration: f64, fps: u32) -> SignaResult<usize> {
    if !duration.is_finite() || duration <= 0.0 {
        return Err(SignaError::InvalidDuration(duration));
    }
    if fps == 0 {
        return Err(SignaError::InvalidFrameRate(fps));
    }
    let frames = (duration * fps as f64 + FRAME_COUNT_EPSILON).floor();
    if frames > MAX_FRAMES as f64 {
        return Err(SignaError::DurationTooLong {
            requested: duration,
            max: max_duration(fps),
        });
    }
    Ok((frames as usize).max(1))
}

/// Longest duration (seconds) that fits in [`MAX_FRAMES`] at `fps`
pub fn max_duration(fps: u32) -> f64 {
    MAX_FRAMES as f64 / fps.max(1) as f64
}

/// Index of the gloss active at clip time `t`
pub fn active_gloss_index(t: f64, duration: f64, gloss_count: usize) -> usize {
    let n = gloss_count.max(1);
    let position = ((t / duration) * gloss_count as f64).floor();
    (position.max(0.0) as usize) % n
}

/// Generates animations at a fixed frame rate
#[derive(Debug, Clone)]
pub struct PoseGenerator<C: Clock = SystemClock> {
    fps: u32,
    clock: C,
}

impl Default for PoseGenerator<SystemClock> {
    fn default() -> Self {
        Self::new(DEFAULT_FPS)
    }
}

impl PoseGenerator<SystemClock> {
    pub fn new(fps: u32) -> Self {
        Self::with_clock(fps, SystemClock)
    }
}

impl<C: Clock> PoseGenerator<C> {
    /// Generator stamping animations with time from `clock`
    pub fn with_clock(fps: u32, clock: C) -> Self {
        PoseGenerator { fps, clock }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Generate a complete animation for `gloss` lasting `duration` seconds
    pub fn generate(&self, gloss: GlossSequence, duration: f64) -> SignaResult<Animation> {
        let total_frames = frame_count(duration, self.fps)?;

        let frames: Vec<PoseFrame> = (0..total_frames)
            .map(|i| self.frame(&gloss, i, duration))
            .collect();

        let created_at = self.clock.now();
        tracing::debug!(
            glosses = gloss.len(),
            frames = frames.len(),
            fps = self.fps,
            duration,
            "generated pose frames"
        );

        Ok(Animation::new(
            AnimationId::from_timestamp(created_at),
            gloss,
            frames,
            self.fps,
            duration,
            created_at,
        ))
    }

    /// Single frame `index` of a clip lasting `duration` seconds
    pub fn frame(&self, gloss: &GlossSequence, index: usize, duration: f64) -> PoseFrame {
        let t = index as f64 / self.fps.max(1) as f64;
        let class = self.active_class(gloss, t, duration);

        PoseFrame {
            frame_index: index,
            timestamp: t,
            body_keypoints: body_pose(class, t),
            left_hand_keypoints: hand_pose(class, Side::Left, t),
            right_hand_keypoints: hand_pose(class, Side::Right, t),
            face_keypoints: face_pose(class, t),
        }
    }

    fn active_class(&self, gloss: &GlossSequence, t: f64, duration: f64) -> GlossClass {
        if gloss.is_empty() {
            return GlossClass::Neutral;
        }
        let idx = active_gloss_index(t, duration, gloss.len());
        gloss
            .get(idx)
            .map(|token| token.class())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signa_core::{
        BodyJoint, FixedClock, GlossToken, Timestamp, BODY_LANDMARKS, FACE_LANDMARKS,
        HAND_LANDMARKS,
    };

    use crate::{WAVE_AMPLITUDE, WAVE_FREQUENCY};

    fn generator() -> PoseGenerator<FixedClock> {
        PoseGenerator::with_clock(30, FixedClock::new(Timestamp::from_millis(1_000)))
    }

    fn sequence(ids: &[&str]) -> GlossSequence {
        GlossSequence::from_glosses(ids)
    }

    #[test]
    fn test_frame_count() {
        assert_eq!(frame_count(3.0, 30).unwrap(), 90);
        assert_eq!(frame_count(1.0, 30).unwrap(), 30);
        assert_eq!(frame_count(0.1, 30).unwrap(), 3);
        assert_eq!(frame_count(0.01, 30).unwrap(), 1);
        assert_eq!(frame_count(1.05, 10).unwrap(), 10);
    }

    #[test]
    fn test_invalid_duration() {
        assert_eq!(frame_count(0.0, 30), Err(SignaError::InvalidDuration(0.0)));
        assert_eq!(frame_count(-1.0, 30), Err(SignaError::InvalidDuration(-1.0)));
        assert!(matches!(
            frame_count(f64::NAN, 30),
            Err(SignaError::InvalidDuration(_))
        ));
        assert!(matches!(
            frame_count(f64::INFINITY, 30),
            Err(SignaError::InvalidDuration(_))
        ));
        assert_eq!(frame_count(1.0, 0), Err(SignaError::InvalidFrameRate(0)));
    }

    #[test]
    fn test_frame_count_limit() {
        assert_eq!(frame_count(7200.0, 30).unwrap(), MAX_FRAMES);
        assert_eq!(
            frame_count(7201.0, 30),
            Err(SignaError::DurationTooLong {
                requested: 7201.0,
                max: 7200.0
            })
        );
        assert!(matches!(
            frame_count(1e300, 30),
            Err(SignaError::DurationTooLong { .. })
        ));
        assert_eq!(max_duration(60), 3600.0);
    }

    #[test]
    fn test_generate_rejects_huge_duration() {
        let err = generator().generate(GlossSequence::empty(), 1e300).unwrap_err();
        assert!(matches!(err, SignaError::DurationTooLong { requested, .. } if requested == 1e300));
    }

    #[test]
    fn test_frame_count_rounds_near_integers_up() {
        assert!(0.29_f64 * 100.0 < 29.0);
        assert_eq!(frame_count(0.29, 100).unwrap(), 29);
        assert_eq!(frame_count(0.285, 100).unwrap(), 28);
    }

    #[test]
    fn test_generate_rejects_bad_duration() {
        let err = generator().generate(sequence(&["HELLO"]), 0.0).unwrap_err();
        assert_eq!(err, SignaError::InvalidDuration(0.0));
    }

    #[test]
    fn test_active_gloss_index() {
        assert_eq!(active_gloss_index(0.0, 3.0, 3), 0);
        assert_eq!(active_gloss_index(0.99, 3.0, 3), 0);
        assert_eq!(active_gloss_index(1.0, 3.0, 3), 1);
        assert_eq!(active_gloss_index(2.5, 3.0, 3), 2);
        // Past the end wraps around
        assert_eq!(active_gloss_index(3.0, 3.0, 3), 0);
        assert_eq!(active_gloss_index(1.0, 3.0, 0), 0);
    }

    #[test]
    fn test_frame_shapes_and_metadata() {
        let anim = generator().generate(sequence(&["HELLO"]), 3.0).unwrap();
        assert_eq!(anim.frame_count(), 90);
        assert_eq!(anim.fps(), 30);
        assert_eq!(anim.id().as_str(), "asl_1000");
        assert_eq!(anim.created_at(), Timestamp::from_millis(1_000));

        for (i, frame) in anim.frames().iter().enumerate() {
            assert_eq!(frame.frame_index, i);
            assert!((frame.timestamp - i as f64 / 30.0).abs() < 1e-12);
            assert_eq!(frame.body_keypoints.len(), BODY_LANDMARKS);
            assert_eq!(frame.left_hand_keypoints.len(), HAND_LANDMARKS);
            assert_eq!(frame.right_hand_keypoints.len(), HAND_LANDMARKS);
            assert_eq!(frame.face_keypoints.len(), FACE_LANDMARKS);
        }
    }

    #[test]
    fn test_hello_wave_over_one_second() {
        let anim = generator().generate(sequence(&["HELLO"]), 1.0).unwrap();
        assert_eq!(anim.frame_count(), 30);

        let xs: Vec<f32> = anim
            .frames()
            .iter()
            .map(|f| f.body(BodyJoint::LeftWrist).x)
            .collect();

        for (i, x) in xs.iter().enumerate() {
            let t = i as f64 / 30.0;
            let expected = 0.8 + ((t * WAVE_FREQUENCY).sin() * WAVE_AMPLITUDE) as f32;
            assert!((x - expected).abs() < 1e-6, "frame {i}: {x} vs {expected}");
        }

        // Period 2π/6 s: crest near t = π/12, trough near t = π/4
        let argmax = (0..xs.len()).max_by(|&a, &b| xs[a].total_cmp(&xs[b])).unwrap();
        let argmin = (0..xs.len()).min_by(|&a, &b| xs[a].total_cmp(&xs[b])).unwrap();
        assert_eq!(argmax, 8);
        assert_eq!(argmin, 24);
    }

    #[test]
    fn test_gloss_switches_over_clip() {
        let anim = generator()
            .generate(sequence(&["HELLO", "WATER"]), 2.0)
            .unwrap();
        let wrist = |i: usize| *anim.frames()[i].body(BodyJoint::LeftWrist);

        // Second half is neutral: wrist back at the base table value
        assert_eq!(wrist(45).position(), [0.7, 0.5, 0.0]);
        assert_ne!(wrist(10).position(), [0.7, 0.5, 0.0]);
    }

    #[test]
    fn test_empty_gloss_is_static_neutral() {
        let anim = generator().generate(GlossSequence::empty(), 0.5).unwrap();
        assert_eq!(anim.frame_count(), 15);
        let first = &anim.frames()[0];
        assert_eq!(first.body_keypoints, crate::body_pose(GlossClass::Neutral, 0.0));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = generator().generate(sequence(&["HELLO", "FS-A", "HAPPY"]), 1.5).unwrap();
        let b = generator().generate(sequence(&["HELLO", "FS-A", "HAPPY"]), 1.5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_direct_tokens() {
        let gloss = GlossSequence::new("x", vec![GlossToken::letter('o')]);
        let anim = generator().generate(gloss, 0.2).unwrap();
        let hand = &anim.frames()[0].left_hand_keypoints;
        // Vowel letters use a fist: fingertips stay near the wrist
        assert!(hand[8].distance(&hand[0]) < 0.05);
    }
}
