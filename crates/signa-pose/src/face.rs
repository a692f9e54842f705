//! Face pose - parametric face mesh ring

use std::f64::consts::TAU;

use signa_core::{GlossClass, Keypoint, FACE_LANDMARKS};

use crate::oscillate;

/// Nominal face center
pub const FACE_CENTER: (f64, f64) = (0.5, 0.1);
/// Ring radius
pub const FACE_RADIUS: f64 = 0.1;

/// Smile angular frequency (rad/s)
pub const SMILE_FREQUENCY: f64 = 4.0;
/// Smile displacement of the lowest landmark
pub const SMILE_AMPLITUDE: f64 = 0.01;

/// Face landmarks for the active gloss class at clip time `t`
pub fn face_pose(class: GlossClass, t: f64) -> [Keypoint; FACE_LANDMARKS] {
    let smile = if class == GlossClass::Happy {
        oscillate(t, SMILE_FREQUENCY, SMILE_AMPLITUDE) as f64
    } else {
        0.0
    };

    let mut landmarks = [Keypoint::default(); FACE_LANDMARKS];
    for (i, landmark) in landmarks.iter_mut().enumerate() {
        let angle = (i as f64 / FACE_LANDMARKS as f64) * TAU;
        let (sin, cos) = angle.sin_cos();

        let x = FACE_CENTER.0 + FACE_RADIUS * cos;
        let mut y = FACE_CENTER.1 + FACE_RADIUS * sin;
        // Lower half only (y grows downward)
        if sin > 0.0 {
            y += smile * sin;
        }

        *landmark = Keypoint::certain(x as f32, y as f32, 0.0);
    }
    landmarks
}
