//! Pose frames - one time-sampled snapshot of every tracked landmark

use serde::{Serialize, Serializer};

use crate::{BodyJoint, Keypoint};

/// Body landmarks (MediaPipe pose topology)
pub const BODY_LANDMARKS: usize = 33;

/// Landmarks per hand
pub const HAND_LANDMARKS: usize = 21;

/// Face mesh landmarks
pub const FACE_LANDMARKS: usize = 468;

/// Hand side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Complete keypoint snapshot; array lengths are fixed by type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoseFrame {
    pub frame_index: usize,
    /// Seconds since the first frame
    pub timestamp: f64,
    #[serde(serialize_with = "serialize_landmarks")]
    pub body_keypoints: [Keypoint; BODY_LANDMARKS],
    #[serde(serialize_with = "serialize_landmarks")]
    pub left_hand_keypoints: [Keypoint; HAND_LANDMARKS],
    #[serde(serialize_with = "serialize_landmarks")]
    pub right_hand_keypoints: [Keypoint; HAND_LANDMARKS],
    #[serde(serialize_with = "serialize_landmarks")]
    pub face_keypoints: [Keypoint; FACE_LANDMARKS],
}

impl PoseFrame {
    /// Frame with every landmark at the origin
    pub fn blank(frame_index: usize, timestamp: f64) -> Self {
        PoseFrame {
            frame_index,
            timestamp,
            body_keypoints: [Keypoint::default(); BODY_LANDMARKS],
            left_hand_keypoints: [Keypoint::default(); HAND_LANDMARKS],
            right_hand_keypoints: [Keypoint::default(); HAND_LANDMARKS],
            face_keypoints: [Keypoint::default(); FACE_LANDMARKS],
        }
    }

    pub fn body(&self, joint: BodyJoint) -> &Keypoint {
        &self.body_keypoints[joint.index()]
    }

    pub fn hand(&self, side: Side) -> &[Keypoint; HAND_LANDMARKS] {
        match side {
            Side::Left => &self.left_hand_keypoints,
            Side::Right => &self.right_hand_keypoints,
        }
    }

    /// Every landmark in the frame: body, left hand, right hand, face
    pub fn keypoints(&self) -> impl Iterator<Item = &Keypoint> {
        self.body_keypoints
            .iter()
            .chain(self.left_hand_keypoints.iter())
            .chain(self.right_hand_keypoints.iter())
            .chain(self.face_keypoints.iter())
    }
}

fn serialize_landmarks<S: Serializer, const N: usize>(
    points: &[Keypoint; N],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(points.iter())
}
