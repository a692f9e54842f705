//! Avatar rigs - per-frame named joints and bone segments
//!
//! A rig is what a renderer draws for one frame: joints with positions and
//! marker sizes, bones with resolved endpoints, plus grouping information
//! (fingers, face regions). Rigs are rebuilt from pose frames and never
//! edited.

use std::ops::Range;

use serde::{Serialize, Serializer};
use signa_core::{BodyJoint, HandJoint, Keypoint, PoseFrame, Side};

use crate::{
    AvatarConfig, BoundingBox, Finger, BODY_CONNECTIONS, FACE_CONTOUR, FACE_LEFT_EYE,
    FACE_LEFT_EYEBROW, FACE_MOUTH, FACE_RIGHT_EYE, FACE_RIGHT_EYEBROW, FINGERS, HAND_CONNECTIONS,
};

/// Named joint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Joint3D {
    pub id: usize,
    pub name: &'static str,
    pub position: [f32; 3],
    pub visibility: f32,
    pub size: f32,
}

impl Joint3D {
    fn new(id: usize, name: &'static str, kp: &Keypoint, size: f32) -> Self {
        Joint3D {
            id,
            name,
            position: kp.position(),
            visibility: kp.confidence,
            size,
        }
    }
}

/// Segment between two joints of the same rig
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bone3D {
    pub id: usize,
    pub name: String,
    pub start_joint: usize,
    pub end_joint: usize,
    pub start: [f32; 3],
    pub end: [f32; 3],
    pub length: f32,
    pub thickness: f32,
}

impl Bone3D {
    fn between(id: usize, start: &Joint3D, end: &Joint3D, thickness: f32) -> Self {
        let [dx, dy, dz] = [
            end.position[0] - start.position[0],
            end.position[1] - start.position[1],
            end.position[2] - start.position[2],
        ];
        Bone3D {
            id,
            name: format!("{}_to_{}", start.name, end.name),
            start_joint: start.id,
            end_joint: end.id,
            start: start.position,
            end: end.position,
            length: (dx * dx + dy * dy + dz * dz).sqrt(),
            thickness,
        }
    }
}

/// Body joints and bones
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyRig {
    pub joints: Vec<Joint3D>,
    pub bones: Vec<Bone3D>,
}

impl BodyRig {
    pub fn from_frame(frame: &PoseFrame, avatar: &AvatarConfig) -> Self {
        let size = avatar.body_joint_size();
        let joints: Vec<Joint3D> = BodyJoint::all()
            .iter()
            .map(|&j| Joint3D::new(j.index(), j.name(), frame.body(j), size))
            .collect();

        let thickness = avatar.body_bone_thickness();
        let bones = BODY_CONNECTIONS
            .iter()
            .enumerate()
            .map(|(id, &(a, b))| Bone3D::between(id, &joints[a.index()], &joints[b.index()], thickness))
            .collect();

        BodyRig { joints, bones }
    }

    pub fn joint(&self, joint: BodyJoint) -> &Joint3D {
        &self.joints[joint.index()]
    }
}

/// One hand: joints, bones, finger groups and palm center
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HandRig {
    pub side: Side,
    pub joints: Vec<Joint3D>,
    pub bones: Vec<Bone3D>,
    /// The wrist position
    pub palm_center: [f32; 3],
    #[serde(serialize_with = "serialize_fingers")]
    pub fingers: &'static [Finger],
}

impl HandRig {
    pub fn from_frame(frame: &PoseFrame, side: Side, avatar: &AvatarConfig) -> Self {
        let keypoints = frame.hand(side);
        let size = avatar.hand_joint_size();
        let joints: Vec<Joint3D> = HandJoint::all()
            .iter()
            .map(|&j| Joint3D::new(j.index(), j.name(), &keypoints[j.index()], size))
            .collect();

        let thickness = avatar.hand_bone_thickness();
        let bones = HAND_CONNECTIONS
            .iter()
            .enumerate()
            .map(|(id, &(a, b))| Bone3D::between(id, &joints[a.index()], &joints[b.index()], thickness))
            .collect();

        HandRig {
            side,
            palm_center: joints[HandJoint::Wrist.index()].position,
            joints,
            bones,
            fingers: &FINGERS,
        }
    }

    pub fn joint(&self, joint: HandJoint) -> &Joint3D {
        &self.joints[joint.index()]
    }
}

fn serialize_fingers<S: Serializer>(fingers: &&'static [Finger], s: S) -> Result<S::Ok, S::Error> {
    s.collect_map(
        fingers
            .iter()
            .map(|f| (f.name, f.joints.map(HandJoint::index))),
    )
}

/// Unnamed face mesh point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Landmark3D {
    pub id: usize,
    pub position: [f32; 3],
    pub visibility: f32,
    pub size: f32,
}

/// Landmark index ranges per facial feature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceRegions {
    #[serde(serialize_with = "serialize_range")]
    pub contour: Range<usize>,
    #[serde(serialize_with = "serialize_range")]
    pub left_eyebrow: Range<usize>,
    #[serde(serialize_with = "serialize_range")]
    pub right_eyebrow: Range<usize>,
    #[serde(serialize_with = "serialize_range")]
    pub left_eye: Range<usize>,
    #[serde(serialize_with = "serialize_range")]
    pub right_eye: Range<usize>,
    #[serde(serialize_with = "serialize_range")]
    pub mouth: Range<usize>,
}

impl Default for FaceRegions {
    fn default() -> Self {
        FaceRegions {
            contour: FACE_CONTOUR,
            left_eyebrow: FACE_LEFT_EYEBROW,
            right_eyebrow: FACE_RIGHT_EYEBROW,
            left_eye: FACE_LEFT_EYE,
            right_eye: FACE_RIGHT_EYE,
            mouth: FACE_MOUTH,
        }
    }
}

/// Ranges go out as explicit index lists
fn serialize_range<S: Serializer>(range: &Range<usize>, s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(range.clone())
}

/// Face mesh
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceRig {
    pub landmarks: Vec<Landmark3D>,
    pub regions: FaceRegions,
}

impl FaceRig {
    pub fn from_frame(frame: &PoseFrame, avatar: &AvatarConfig) -> Self {
        let size = avatar.face_point_size();
        let landmarks = frame
            .face_keypoints
            .iter()
            .enumerate()
            .map(|(id, kp)| Landmark3D {
                id,
                position: kp.position(),
                visibility: kp.confidence,
                size,
            })
            .collect();

        FaceRig {
            landmarks,
            regions: FaceRegions::default(),
        }
    }
}

/// Both hands; a side is absent when hand details are hidden
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Hands {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<HandRig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<HandRig>,
}

impl Hands {
    pub fn iter(&self) -> impl Iterator<Item = &HandRig> {
        self.left.iter().chain(self.right.iter())
    }
}

/// Everything drawn for one pose frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvatarFrame {
    pub frame_index: usize,
    pub timestamp: f64,
    pub bounding_box: BoundingBox,
    pub body: BodyRig,
    pub hands: Hands,
    pub face: Option<FaceRig>,
}

impl AvatarFrame {
    /// Rig a pose frame; the bounding box covers only the parts included
    pub fn from_frame(frame: &PoseFrame, avatar: &AvatarConfig) -> Self {
        let body = BodyRig::from_frame(frame, avatar);

        let hands = if avatar.show_hand_details {
            Hands {
                left: Some(HandRig::from_frame(frame, Side::Left, avatar)),
                right: Some(HandRig::from_frame(frame, Side::Right, avatar)),
            }
        } else {
            Hands::default()
        };

        let face = avatar
            .show_face_mesh
            .then(|| FaceRig::from_frame(frame, avatar));

        let mut rigged = AvatarFrame {
            frame_index: frame.frame_index,
            timestamp: frame.timestamp,
            bounding_box: BoundingBox::unit(),
            body,
            hands,
            face,
        };
        rigged.bounding_box = BoundingBox::from_points(rigged.positions());
        rigged
    }

    /// Positions of every included joint and landmark
    pub fn positions(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.body
            .joints
            .iter()
            .map(|j| j.position)
            .chain(self.hands.iter().flat_map(|h| h.joints.iter().map(|j| j.position)))
            .chain(self.face.iter().flat_map(|f| f.landmarks.iter().map(|l| l.position)))
    }
}
