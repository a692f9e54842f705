//! SIGNA Scene - avatar scene export
//!
//! This is NOT a renderer.
//! The exporter repackages pose frames into named joints, bone segments and
//! bounding boxes, and attaches camera, light and material declarations, so a
//! client-side 3D renderer can draw the avatar without knowing the landmark
//! topology.

pub mod bounds;
pub mod config;
pub mod exporter;
pub mod rig;
pub mod topology;

pub use bounds::*;
pub use config::*;
pub use exporter::*;
pub use rig::*;
pub use topology::*;
