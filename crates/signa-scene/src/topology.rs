//! Skeleton topology - how landmarks connect into bones and regions

use std::ops::Range;

use signa_core::{BodyJoint, HandJoint};

/// Body bone segments
pub const BODY_CONNECTIONS: [(BodyJoint, BodyJoint); 21] = {
    use BodyJoint::*;
    [
        // Head
        (Nose, LeftEye),
        (Nose, RightEye),
        (LeftEye, LeftEar),
        (RightEye, RightEar),
        (MouthLeft, MouthRight),
        // Torso
        (LeftShoulder, RightShoulder),
        (LeftShoulder, LeftHip),
        (RightShoulder, RightHip),
        (LeftHip, RightHip),
        // Arms
        (LeftShoulder, LeftElbow),
        (LeftElbow, LeftWrist),
        (RightShoulder, RightElbow),
        (RightElbow, RightWrist),
        // Legs
        (LeftHip, LeftKnee),
        (LeftKnee, LeftAnkle),
        (RightHip, RightKnee),
        (RightKnee, RightAnkle),
        // Feet
        (LeftAnkle, LeftHeel),
        (LeftAnkle, LeftFootIndex),
        (RightAnkle, RightHeel),
        (RightAnkle, RightFootIndex),
    ]
};

/// Hand bone segments: four per finger from the wrist, then across the palm
pub const HAND_CONNECTIONS: [(HandJoint, HandJoint); 23] = {
    use HandJoint::*;
    [
        (Wrist, ThumbCmc),
        (ThumbCmc, ThumbMcp),
        (ThumbMcp, ThumbIp),
        (ThumbIp, ThumbTip),
        (Wrist, IndexMcp),
        (IndexMcp, IndexPip),
        (IndexPip, IndexDip),
        (IndexDip, IndexTip),
        (Wrist, MiddleMcp),
        (MiddleMcp, MiddlePip),
        (MiddlePip, MiddleDip),
        (MiddleDip, MiddleTip),
        (Wrist, RingMcp),
        (RingMcp, RingPip),
        (RingPip, RingDip),
        (RingDip, RingTip),
        (Wrist, PinkyMcp),
        (PinkyMcp, PinkyPip),
        (PinkyPip, PinkyDip),
        (PinkyDip, PinkyTip),
        // Palm
        (IndexMcp, MiddleMcp),
        (MiddleMcp, RingMcp),
        (RingMcp, PinkyMcp),
    ]
};

/// Named group of finger joints, base to tip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finger {
    pub name: &'static str,
    pub joints: [HandJoint; 4],
}

pub const FINGERS: [Finger; 5] = {
    use HandJoint::*;
    [
        Finger {
            name: "thumb",
            joints: [ThumbCmc, ThumbMcp, ThumbIp, ThumbTip],
        },
        Finger {
            name: "index",
            joints: [IndexMcp, IndexPip, IndexDip, IndexTip],
        },
        Finger {
            name: "middle",
            joints: [MiddleMcp, MiddlePip, MiddleDip, MiddleTip],
        },
        Finger {
            name: "ring",
            joints: [RingMcp, RingPip, RingDip, RingTip],
        },
        Finger {
            name: "pinky",
            joints: [PinkyMcp, PinkyPip, PinkyDip, PinkyTip],
        },
    ]
};

// Face regions, as landmark index ranges
pub const FACE_CONTOUR: Range<usize> = 0..17;
pub const FACE_LEFT_EYEBROW: Range<usize> = 17..22;
pub const FACE_RIGHT_EYEBROW: Range<usize> = 22..27;
pub const FACE_LEFT_EYE: Range<usize> = 36..42;
pub const FACE_RIGHT_EYE: Range<usize> = 42..48;
pub const FACE_MOUTH: Range<usize> = 48..68;
