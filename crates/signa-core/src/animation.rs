//! Animation - a generated sequence of pose frames
//!
//! An animation owns its frames exclusively and cannot be modified once
//! built; consumers only get read access.

use serde::Serialize;

use crate::{AnimationId, GlossSequence, GlossToken, PoseFrame, Timestamp};

/// Default frame rate for generated animations
pub const DEFAULT_FPS: u32 = 30;

/// Immutable generated animation
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    id: AnimationId,
    gloss: GlossSequence,
    frames: Vec<PoseFrame>,
    fps: u32,
    duration_seconds: f64,
    created_at: Timestamp,
}

impl Animation {
    pub fn new(
        id: AnimationId,
        gloss: GlossSequence,
        frames: Vec<PoseFrame>,
        fps: u32,
        duration_seconds: f64,
        created_at: Timestamp,
    ) -> Self {
        Animation {
            id,
            gloss,
            frames,
            fps,
            duration_seconds,
            created_at,
        }
    }

    pub fn id(&self) -> &AnimationId {
        &self.id
    }

    pub fn gloss(&self) -> &GlossSequence {
        &self.gloss
    }

    pub fn gloss_sequence(&self) -> &[GlossToken] {
        &self.gloss.tokens
    }

    pub fn frames(&self) -> &[PoseFrame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Frame shown at clip time `t` (seconds), clamped to the clip
    pub fn frame_at(&self, t: f64) -> Option<&PoseFrame> {
        if self.frames.is_empty() {
            return None;
        }
        let idx = (t.max(0.0) * self.fps as f64).floor() as usize;
        self.frames.get(idx.min(self.frames.len() - 1))
    }

    /// `{fps, total_duration, total_frames, frames}` payload
    pub fn payload(&self) -> AnimationPayload<'_> {
        AnimationPayload {
            fps: self.fps,
            total_duration: self.duration_seconds,
            total_frames: self.frames.len(),
            frames: &self.frames,
        }
    }
}

/// Borrowed animation body as returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct AnimationPayload<'a> {
    pub fps: u32,
    pub total_duration: f64,
    pub total_frames: usize,
    pub frames: &'a [PoseFrame],
}
