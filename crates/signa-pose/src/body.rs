//! Body pose - standing skeleton with gloss-driven arm motion

use signa_core::{BodyJoint, GlossClass, Keypoint, BODY_LANDMARKS};

use crate::oscillate;

/// Wave angular frequency for greetings (rad/s)
pub const WAVE_FREQUENCY: f64 = 6.0;
/// Horizontal wave amplitude
pub const WAVE_AMPLITUDE: f64 = 0.15;

/// Chest press angular frequency for gratitude signs (rad/s)
pub const CHEST_FREQUENCY: f64 = 3.0;
/// Vertical chest press amplitude
pub const CHEST_AMPLITUDE: f64 = 0.02;

/// Neutral standing pose `(x, y, z)` in index order
pub const BASE_BODY_POSE: [[f32; 3]; BODY_LANDMARKS] = [
    [0.50, 0.10, 0.0], // nose
    [0.51, 0.08, 0.0], // left eye inner
    [0.52, 0.08, 0.0], // left eye
    [0.53, 0.08, 0.0], // left eye outer
    [0.49, 0.08, 0.0], // right eye inner
    [0.48, 0.08, 0.0], // right eye
    [0.47, 0.08, 0.0], // right eye outer
    [0.54, 0.09, 0.0], // left ear
    [0.46, 0.09, 0.0], // right ear
    [0.51, 0.12, 0.0], // mouth left
    [0.49, 0.12, 0.0], // mouth right
    [0.60, 0.25, 0.0], // left shoulder
    [0.40, 0.25, 0.0], // right shoulder
    [0.65, 0.40, 0.0], // left elbow
    [0.35, 0.40, 0.0], // right elbow
    [0.70, 0.50, 0.0], // left wrist
    [0.30, 0.50, 0.0], // right wrist
    [0.58, 0.45, 0.0], // left pinky
    [0.42, 0.45, 0.0], // right pinky
    [0.56, 0.42, 0.0], // left index
    [0.44, 0.42, 0.0], // right index
    [0.54, 0.44, 0.0], // left thumb
    [0.46, 0.44, 0.0], // right thumb
    [0.55, 0.60, 0.0], // left hip
    [0.45, 0.60, 0.0], // right hip
    [0.55, 0.75, 0.0], // left knee
    [0.45, 0.75, 0.0], // right knee
    [0.55, 0.90, 0.0], // left ankle
    [0.45, 0.90, 0.0], // right ankle
    [0.57, 0.95, 0.0], // left heel
    [0.43, 0.95, 0.0], // right heel
    [0.58, 0.92, 0.0], // left foot index
    [0.42, 0.92, 0.0], // right foot index
];

/// Body keypoints for the active gloss class at clip time `t`
pub fn body_pose(class: GlossClass, t: f64) -> [Keypoint; BODY_LANDMARKS] {
    let mut pose = BASE_BODY_POSE.map(|[x, y, z]| Keypoint::certain(x, y, z));

    match class {
        GlossClass::Greeting => {
            let wave = oscillate(t, WAVE_FREQUENCY, WAVE_AMPLITUDE);
            pose[BodyJoint::LeftElbow.index()] = Keypoint::certain(0.70 + wave, 0.35, 0.0);
            pose[BodyJoint::LeftWrist.index()] = Keypoint::certain(0.80 + wave, 0.30, 0.0);
        }
        GlossClass::Gratitude => {
            let press = oscillate(t, CHEST_FREQUENCY, CHEST_AMPLITUDE);
            pose[BodyJoint::LeftElbow.index()] = Keypoint::certain(0.65, 0.40, 0.0);
            pose[BodyJoint::LeftWrist.index()] = Keypoint::certain(0.55, 0.35 + press, 0.0);
        }
        _ => {}
    }

    pose
}
