//! Sign pipeline - text or glosses in, animation and scene out

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use signa_core::{
    Animation, AnimationId, AnimationPayload, Clock, GlossSequence, SignaError, SignaResult,
    SystemClock,
};
use signa_gloss::{GlossMapper, Vocabulary};
use signa_pose::PoseGenerator;
use signa_scene::{SceneDescription, SceneExporter};

use crate::PipelineConfig;

/// The text-to-sign pipeline
pub struct SignPipeline<C: Clock = SystemClock> {
    config: PipelineConfig,
    mapper: GlossMapper,
    generator: PoseGenerator<C>,
    exporter: SceneExporter,
}

impl SignPipeline<SystemClock> {
    /// Build from config alone, loading the vocabulary file if one is named
    pub fn from_config(config: PipelineConfig) -> SignaResult<Self> {
        let vocabulary = match &config.vocabulary_path {
            Some(path) => Vocabulary::load(path)?,
            None => Vocabulary::canonical(),
        };
        Self::new(config, vocabulary, SystemClock)
    }
}

impl<C: Clock> SignPipeline<C> {
    pub fn new(config: PipelineConfig, vocabulary: Vocabulary, clock: C) -> SignaResult<Self> {
        config.validate()?;
        tracing::info!(
            fps = config.fps,
            default_duration = config.default_duration,
            max_duration = config.max_duration,
            vocabulary = vocabulary.len(),
            "sign pipeline ready"
        );
        Ok(SignPipeline {
            mapper: GlossMapper::new(vocabulary),
            generator: PoseGenerator::with_clock(config.fps, clock),
            exporter: SceneExporter::new(config.scene.clone()),
            config,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        self.mapper.vocabulary()
    }

    /// Translate English text; `duration` defaults to the configured one
    pub fn text_to_animation(&self, text: &str, duration: Option<f64>) -> SignaResult<Translation> {
        let duration = self.resolve_duration(duration)?;
        let gloss = self.mapper.translate(text);
        tracing::debug!(glosses = ?gloss.gloss_ids(), "mapped text");
        self.animate(gloss, duration)
    }

    /// Animate caller-supplied glosses
    pub fn gloss_to_animation<S: AsRef<str>>(
        &self,
        glosses: &[S],
        duration: Option<f64>,
    ) -> SignaResult<Translation> {
        let duration = self.resolve_duration(duration)?;
        self.animate(GlossSequence::from_glosses(glosses), duration)
    }

    fn resolve_duration(&self, requested: Option<f64>) -> SignaResult<f64> {
        let duration = requested.unwrap_or(self.config.default_duration);
        if !(duration.is_finite() && duration > 0.0) {
            return Err(SignaError::InvalidDuration(duration));
        }
        if duration > self.config.max_duration {
            return Err(SignaError::DurationTooLong {
                requested: duration,
                max: self.config.max_duration,
            });
        }
        Ok(duration)
    }

    fn animate(&self, gloss: GlossSequence, duration: f64) -> SignaResult<Translation> {
        let animation = self.generator.generate(gloss, duration)?;
        let scene = self.exporter.export(&animation);

        tracing::info!(
            animation_id = %animation.id(),
            origin = ?animation.gloss().origin,
            glosses = animation.gloss().len(),
            frames = animation.frame_count(),
            duration,
            "translation complete"
        );

        Ok(Translation { animation, scene })
    }
}

/// Which payload to serialize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Full render scene
    #[default]
    Scene,
    /// Response with raw pose frames
    Animation,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scene" => Ok(OutputFormat::Scene),
            "animation" => Ok(OutputFormat::Animation),
            other => Err(format!("unknown format `{other}` (expected scene or animation)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Scene => f.write_str("scene"),
            OutputFormat::Animation => f.write_str("animation"),
        }
    }
}

/// Result of one pipeline run
#[derive(Debug, Clone)]
pub struct Translation {
    animation: Animation,
    scene: SceneDescription,
}

impl Translation {
    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn scene(&self) -> &SceneDescription {
        &self.scene
    }

    pub fn into_parts(self) -> (Animation, SceneDescription) {
        (self.animation, self.scene)
    }

    /// Response body returned to clients
    pub fn response(&self) -> AnimationResponse<'_> {
        let gloss = self.animation.gloss();
        AnimationResponse {
            animation_id: self.animation.id(),
            original_text: &gloss.original_text,
            gloss_sequence: gloss.gloss_ids(),
            timing: gloss.timing(),
            animation: self.animation.payload(),
        }
    }

    pub fn to_json(&self, format: OutputFormat, pretty: bool) -> SignaResult<String> {
        let result = match (format, pretty) {
            (OutputFormat::Scene, true) => serde_json::to_string_pretty(&self.scene),
            (OutputFormat::Scene, false) => serde_json::to_string(&self.scene),
            (OutputFormat::Animation, true) => serde_json::to_string_pretty(&self.response()),
            (OutputFormat::Animation, false) => serde_json::to_string(&self.response()),
        };
        result.map_err(|e| SignaError::Serialization(e.to_string()))
    }
}

/// `{animation_id, original_text, gloss_sequence, timing, animation}`
#[derive(Debug, Clone, Serialize)]
pub struct AnimationResponse<'a> {
    pub animation_id: &'a AnimationId,
    pub original_text: &'a str,
    pub gloss_sequence: Vec<&'a str>,
    pub timing: Vec<f32>,
    pub animation: AnimationPayload<'a>,
}
