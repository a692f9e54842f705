//! SIGNA Runtime - the text-to-sign pipeline
//!
//! A request runs through four stages, synchronously and in order:
//! 1. Map text to glosses (or take glosses as given)
//! 2. Generate synthetic pose frames
//! 3. Export the render scene
//! 4. Serialize the requested payload
//!
//! The pipeline is built once from a [`PipelineConfig`] and is read-only
//! afterwards, so it can be shared between threads by reference.

pub mod config;
pub mod pipeline;
pub mod telemetry;

pub use config::*;
pub use pipeline::*;
