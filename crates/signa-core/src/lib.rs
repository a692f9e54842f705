//! SIGNA Core - Fundamental types and primitives
//!
//! This crate defines the types shared by every stage of the pipeline:
//! - Gloss tokens and sequences (the output of text mapping)
//! - Keypoints, skeleton joints and pose frames (the output of pose generation)
//! - Animations, identifiers and time primitives
//! - The error type used throughout SIGNA

pub mod animation;
pub mod error;
pub mod frame;
pub mod gloss;
pub mod id;
pub mod keypoint;
pub mod skeleton;
pub mod time;

pub use animation::*;
pub use error::*;
pub use frame::*;
pub use gloss::*;
pub use id::*;
pub use keypoint::*;
pub use skeleton::*;
pub use time::*;
