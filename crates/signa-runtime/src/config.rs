//! Pipeline configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use signa_core::{SignaError, SignaResult, DEFAULT_FPS};
use signa_scene::SceneConfig;

/// Pipeline configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Output frame rate
    pub fps: u32,
    /// Clip length when a request gives none (seconds)
    pub default_duration: f64,
    /// Longest clip a request may ask for (seconds)
    pub max_duration: f64,
    /// JSON vocabulary replacing the built-in table
    pub vocabulary_path: Option<PathBuf>,
    pub scene: SceneConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            fps: DEFAULT_FPS,
            default_duration: 3.0,
            max_duration: 60.0,
            vocabulary_path: None,
            scene: SceneConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> SignaResult<Self> {
        let config: PipelineConfig = serde_json::from_str(json)
            .map_err(|e| SignaError::InvalidConfig(format!("pipeline config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> SignaResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded pipeline config");
        Self::from_json(&json)
    }

    pub fn validate(&self) -> SignaResult<()> {
        if self.fps == 0 {
            return Err(SignaError::InvalidFrameRate(self.fps));
        }
        if !(self.default_duration.is_finite() && self.default_duration > 0.0) {
            return Err(SignaError::InvalidDuration(self.default_duration));
        }
        let limit = signa_pose::max_duration(self.fps);
        if !(self.max_duration.is_finite() && self.max_duration <= limit) {
            return Err(SignaError::InvalidConfig(format!(
                "max_duration {} exceeds {limit}s ({} frames at {} fps)",
                self.max_duration,
                signa_pose::MAX_FRAMES,
                self.fps
            )));
        }
        if !(self.max_duration >= self.default_duration) {
            return Err(SignaError::InvalidConfig(format!(
                "max_duration {} is shorter than default_duration {}",
                self.max_duration, self.default_duration
            )));
        }
        self.scene.validate()
    }
}
