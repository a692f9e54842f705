//! Hand pose - hand shapes selected by gloss class

use signa_core::{GlossClass, Keypoint, Side, HAND_LANDMARKS};

use crate::oscillate;

/// Wrist x position per side
pub const LEFT_WRIST_X: f32 = 0.7;
pub const RIGHT_WRIST_X: f32 = 0.3;
/// Resting wrist height
pub const WRIST_Y: f32 = 0.5;

/// Idle vertical sway of both wrists
pub const HAND_SWAY_FREQUENCY: f64 = 1.5;
pub const HAND_SWAY_AMPLITUDE: f64 = 0.01;

/// Extra lift for flat-hand signs
pub const FLAT_HAND_LIFT: f32 = 0.1;

/// Open hand offsets from the wrist, index order
const OPEN_HAND: [[f32; 3]; HAND_LANDMARKS] = [
    [0.00, 0.00, 0.00], // wrist
    [-0.02, -0.02, 0.01], // thumb
    [-0.03, -0.03, 0.02],
    [-0.04, -0.04, 0.03],
    [-0.05, -0.05, 0.04],
    [0.01, -0.03, 0.00], // index
    [0.02, -0.06, 0.00],
    [0.03, -0.09, 0.00],
    [0.04, -0.12, 0.00],
    [0.02, -0.03, 0.00], // middle
    [0.03, -0.06, 0.00],
    [0.04, -0.10, 0.00],
    [0.05, -0.14, 0.00],
    [0.01, -0.03, 0.00], // ring
    [0.02, -0.06, 0.00],
    [0.03, -0.09, 0.00],
    [0.04, -0.12, 0.00],
    [0.00, -0.03, 0.00], // pinky
    [0.01, -0.05, 0.00],
    [0.02, -0.07, 0.00],
    [0.03, -0.09, 0.00],
];

/// Hand configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandShape {
    /// Fingers spread (waving)
    Open,
    /// Open hand pressed flat
    Flat,
    /// Fingers folded
    Fist,
    /// Slightly curled, at rest
    Relaxed,
}

impl HandShape {
    /// Shape used for a gloss class
    pub fn for_class(class: GlossClass) -> Self {
        match class {
            GlossClass::Greeting => HandShape::Open,
            GlossClass::Gratitude => HandShape::Flat,
            GlossClass::Fingerspelled(_) if class.is_vowel_letter() => HandShape::Fist,
            GlossClass::Fingerspelled(_) => HandShape::Open,
            GlossClass::Happy | GlossClass::Neutral => HandShape::Relaxed,
        }
    }

    /// Landmark offsets from the wrist
    pub fn offsets(self) -> [[f32; 3]; HAND_LANDMARKS] {
        match self {
            HandShape::Open => OPEN_HAND,
            HandShape::Flat => OPEN_HAND.map(|[x, y, z]| [x, y, z * 0.5]),
            HandShape::Fist => curled(0.01, |joint| [-0.01 - joint * 0.005, joint * 0.01]),
            HandShape::Relaxed => curled(0.015, |joint| [-joint * 0.02, joint * 0.005]),
        }
    }
}

/// Finger-by-finger offsets: spread across fingers, `yz(joint)` along each
fn curled(spread: f32, yz: impl Fn(f32) -> [f32; 2]) -> [[f32; 3]; HAND_LANDMARKS] {
    let mut offsets = [[0.0; 3]; HAND_LANDMARKS];
    for (i, offset) in offsets.iter_mut().enumerate().skip(1) {
        let finger = ((i - 1) / 4) as f32;
        let joint = ((i - 1) % 4) as f32;
        let [y, z] = yz(joint);
        *offset = [(finger - 2.0) * spread, y, z];
    }
    offsets
}

/// Wrist anchor for a side at clip time `t`
pub fn wrist_anchor(side: Side, class: GlossClass, t: f64) -> (f32, f32) {
    let x = match side {
        Side::Left => LEFT_WRIST_X,
        Side::Right => RIGHT_WRIST_X,
    };
    let mut y = WRIST_Y + oscillate(t, HAND_SWAY_FREQUENCY, HAND_SWAY_AMPLITUDE);
    if HandShape::for_class(class) == HandShape::Flat {
        y -= FLAT_HAND_LIFT;
    }
    (x, y)
}

/// Hand keypoints for one side
pub fn hand_pose(class: GlossClass, side: Side, t: f64) -> [Keypoint; HAND_LANDMARKS] {
    let (base_x, base_y) = wrist_anchor(side, class, t);
    HandShape::for_class(class)
        .offsets()
        .map(|[dx, dy, dz]| Keypoint::certain(base_x + dx, base_y + dy, dz))
}
