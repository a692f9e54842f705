//! Scene Exporter - animation to render-ready scene description
//!
//! Export is pure: the same animation and config always produce the same
//! description, and nothing is written anywhere.

use std::collections::BTreeMap;

use serde::Serialize;
use signa_core::{Animation, AnimationId, GlossSummary, Timestamp};

use crate::{AvatarConfig, AvatarFrame, CameraConfig, LightConfig, SceneConfig};

/// Scene format version
pub const SCENE_VERSION: &str = "1.0";

/// Payload type tag
pub const SCENE_TYPE: &str = "ASL_Animation";

/// Generator tag
pub const GENERATOR: &str = "SIGNA";

/// Static facts about the exported clip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneMetadata {
    pub version: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub generator: &'static str,
    pub animation_id: AnimationId,
    pub fps: u32,
    pub total_duration: f64,
    pub total_frames: usize,
    pub created_at: Timestamp,
}

/// Root scene node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneNode {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub children: Vec<SceneNode>,
}

/// Animation track of rigged frames
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationTrack {
    pub name: String,
    pub duration: f64,
    pub fps: u32,
    pub frames: Vec<AvatarFrame>,
}

/// Renderer material declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Material {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transparent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linewidth: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
}

impl Material {
    fn mesh(color: &str, opacity: f32) -> Self {
        Material {
            kind: "MeshBasicMaterial",
            color: color.to_owned(),
            transparent: Some(true),
            opacity: Some(opacity),
            linewidth: None,
            size: None,
        }
    }

    fn line(color: &str, linewidth: f32) -> Self {
        Material {
            kind: "LineBasicMaterial",
            color: color.to_owned(),
            transparent: None,
            opacity: None,
            linewidth: Some(linewidth),
            size: None,
        }
    }

    fn points(color: &str, size: f32) -> Self {
        Material {
            kind: "PointsMaterial",
            color: color.to_owned(),
            transparent: None,
            opacity: None,
            linewidth: None,
            size: Some(size),
        }
    }
}

/// Material table keyed by role
pub fn materials(avatar: &AvatarConfig) -> BTreeMap<&'static str, Material> {
    BTreeMap::from([
        ("body_material", Material::mesh(&avatar.body_color, 0.8)),
        ("joint_material", Material::mesh(&avatar.joint_color, 1.0)),
        (
            "bone_material",
            Material::line(&avatar.bone_color, avatar.body_bone_thickness() * 100.0),
        ),
        ("hand_material", Material::mesh(&avatar.hand_color, 0.9)),
        (
            "face_material",
            Material::points(&avatar.face_color, avatar.body_joint_size() * 0.5),
        ),
    ])
}

/// Complete render payload for one animation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneDescription {
    pub metadata: SceneMetadata,
    pub scene: SceneNode,
    pub animations: Vec<AnimationTrack>,
    pub materials: BTreeMap<&'static str, Material>,
    pub camera: CameraConfig,
    pub lights: Vec<LightConfig>,
    pub gloss: GlossSummary,
}

impl SceneDescription {
    /// The single animation track
    pub fn track(&self) -> Option<&AnimationTrack> {
        self.animations.first()
    }

    pub fn frames(&self) -> &[AvatarFrame] {
        self.track().map(|t| t.frames.as_slice()).unwrap_or(&[])
    }
}

/// Converts animations into scene descriptions
#[derive(Debug, Clone, Default)]
pub struct SceneExporter {
    config: SceneConfig,
}

impl SceneExporter {
    pub fn new(config: SceneConfig) -> Self {
        SceneExporter { config }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Rig every frame and attach the static scene declarations
    pub fn export(&self, animation: &Animation) -> SceneDescription {
        let avatar = &self.config.avatar;
        let frames: Vec<AvatarFrame> = animation
            .frames()
            .iter()
            .map(|f| AvatarFrame::from_frame(f, avatar))
            .collect();

        tracing::debug!(
            animation_id = %animation.id(),
            frames = frames.len(),
            face = avatar.show_face_mesh,
            hands = avatar.show_hand_details,
            "exported scene"
        );

        let id = animation.id();
        SceneDescription {
            metadata: SceneMetadata {
                version: SCENE_VERSION,
                kind: SCENE_TYPE,
                generator: GENERATOR,
                animation_id: id.clone(),
                fps: animation.fps(),
                total_duration: animation.duration_seconds(),
                total_frames: animation.frame_count(),
                created_at: animation.created_at(),
            },
            scene: SceneNode {
                name: format!("ASL_Scene_{id}"),
                kind: "Scene",
                children: Vec::new(),
            },
            animations: vec![AnimationTrack {
                name: format!("ASL_Animation_{id}"),
                duration: animation.duration_seconds(),
                fps: animation.fps(),
                frames,
            }],
            materials: materials(avatar),
            camera: self.config.camera.clone(),
            lights: self.config.lights.clone(),
            gloss: animation.gloss().summary(),
        }
    }
}
