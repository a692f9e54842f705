//! SIGNA Pose - synthetic keypoint animation
//!
//! This is NOT motion capture or a learned model.
//! Every landmark is a closed-form function of the active gloss and the clip
//! time, so the same input always produces the same frames.
//!
//! # Layers
//!
//! - Body: fixed standing skeleton, left arm driven by the gloss class
//! - Hands: hand shape chosen by gloss class, wrist swaying over time
//! - Face: parametric ring of landmarks, smiling for happy glosses

pub mod body;
pub mod face;
pub mod generator;
pub mod hand;

pub use body::*;
pub use face::*;
pub use generator::*;
pub use hand::*;

/// `sin(t * frequency) * amplitude`, as stored in keypoints
#[inline]
pub(crate) fn oscillate(t: f64, frequency: f64, amplitude: f64) -> f32 {
    ((t * frequency).sin() * amplitude) as f32
}
