//! SIGNA Gloss - text to gloss mapping
//!
//! Words found in the vocabulary become dictionary signs; anything else is
//! fingerspelled letter by letter. Articles are dropped afterwards.

pub mod mapper;
pub mod vocabulary;

pub use mapper::*;
pub use vocabulary::*;
