//! Identity types for SIGNA

use std::fmt;

use serde::Serialize;

use crate::Timestamp;

/// Animation identity, derived from the creation instant
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AnimationId(String);

impl AnimationId {
    pub fn new(id: impl Into<String>) -> Self {
        AnimationId(id.into())
    }

    /// `asl_<millis>` for the given creation time
    pub fn from_timestamp(created_at: Timestamp) -> Self {
        AnimationId(format!("asl_{}", created_at.as_millis()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AnimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Animation({})", self.0)
    }
}

impl fmt::Display for AnimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_timestamp() {
        let id = AnimationId::from_timestamp(Timestamp::from_millis(1_700_000_000_123));
        assert_eq!(id.as_str(), "asl_1700000000123");
        assert_eq!(id.to_string(), "asl_1700000000123");
    }
}
