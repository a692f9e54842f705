//! Scene configuration - avatar styling, camera and lights
//!
//! These are declarations handed to the renderer as-is; nothing here is
//! computed from the animation.

use serde::{Deserialize, Serialize};
use signa_core::{SignaError, SignaResult};

/// Avatar appearance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    pub body_color: String,
    pub joint_color: String,
    pub bone_color: String,
    pub hand_color: String,
    pub face_color: String,
    /// Body joint marker size; hands and face scale from it
    pub joint_size: f32,
    pub bone_thickness: f32,
    /// Include the face mesh in exported frames
    pub show_face_mesh: bool,
    /// Include hand rigs in exported frames
    pub show_hand_details: bool,
    /// Multiplier applied to marker sizes and bone thickness
    pub scale_factor: f32,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        AvatarConfig {
            body_color: "#8B4513".into(),
            joint_color: "#FF6B6B".into(),
            bone_color: "#4ECDC4".into(),
            hand_color: "#FFE66D".into(),
            face_color: "#FF8E53".into(),
            joint_size: 0.02,
            bone_thickness: 0.01,
            show_face_mesh: true,
            show_hand_details: true,
            scale_factor: 1.0,
        }
    }
}

impl AvatarConfig {
    pub fn body_joint_size(&self) -> f32 {
        self.joint_size * self.scale_factor
    }

    pub fn hand_joint_size(&self) -> f32 {
        self.body_joint_size() * 0.8
    }

    pub fn face_point_size(&self) -> f32 {
        self.body_joint_size() * 0.3
    }

    pub fn body_bone_thickness(&self) -> f32 {
        self.bone_thickness * self.scale_factor
    }

    pub fn hand_bone_thickness(&self) -> f32 {
        self.body_bone_thickness() * 0.7
    }
}

/// Perspective camera declaration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
    #[serde(rename = "lookAt")]
    pub look_at: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        CameraConfig {
            kind: "PerspectiveCamera".into(),
            fov: 75.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            position: [0.0, 0.0, 3.0],
            look_at: [0.5, 0.5, 0.0],
        }
    }
}

/// Light declaration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub color: String,
    pub intensity: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<[f32; 3]>,
}

impl LightConfig {
    pub fn ambient(color: &str, intensity: f32) -> Self {
        LightConfig {
            kind: "AmbientLight".into(),
            color: color.into(),
            intensity,
            position: None,
        }
    }

    pub fn directional(color: &str, intensity: f32, position: [f32; 3]) -> Self {
        LightConfig {
            kind: "DirectionalLight".into(),
            color: color.into(),
            intensity,
            position: Some(position),
        }
    }
}

/// Everything the exporter needs besides the animation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub avatar: AvatarConfig,
    pub camera: CameraConfig,
    pub lights: Vec<LightConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            avatar: AvatarConfig::default(),
            camera: CameraConfig::default(),
            lights: vec![
                LightConfig::ambient("#404040", 0.6),
                LightConfig::directional("#ffffff", 0.8, [1.0, 1.0, 1.0]),
            ],
        }
    }
}

impl SceneConfig {
    /// Reject values a renderer cannot use
    pub fn validate(&self) -> SignaResult<()> {
        let avatar = &self.avatar;
        if !(avatar.joint_size > 0.0) {
            return Err(SignaError::InvalidConfig(format!(
                "avatar.joint_size must be positive, got {}",
                avatar.joint_size
            )));
        }
        if !(avatar.bone_thickness > 0.0) {
            return Err(SignaError::InvalidConfig(format!(
                "avatar.bone_thickness must be positive, got {}",
                avatar.bone_thickness
            )));
        }
        if !(avatar.scale_factor > 0.0) {
            return Err(SignaError::InvalidConfig(format!(
                "avatar.scale_factor must be positive, got {}",
                avatar.scale_factor
            )));
        }
        if !(self.camera.near > 0.0 && self.camera.far > self.camera.near) {
            return Err(SignaError::InvalidConfig(
                "camera requires 0 < near < far".into(),
            ));
        }
        Ok(())
    }
}
