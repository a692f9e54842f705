//! Keypoints - positioned, scored anatomical points
//!
//! Coordinates are normalized image space: x and y in [0, 1] with the origin
//! at the top-left, z in [-1, 1] toward the viewer.

use serde::{Serialize, Serializer};

/// A single landmark `(x, y, z, confidence)`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub confidence: f32,
}

impl Keypoint {
    /// Create a keypoint, clamping every component into its valid range
    pub fn new(x: f32, y: f32, z: f32, confidence: f32) -> Self {
        Keypoint {
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
            z: z.clamp(-1.0, 1.0),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Fully confident keypoint (all synthetic landmarks)
    pub fn certain(x: f32, y: f32, z: f32) -> Self {
        Keypoint::new(x, y, z, 1.0)
    }

    pub fn position(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean distance to another keypoint
    pub fn distance(&self, other: &Keypoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Are all components inside the normalized ranges?
    pub fn in_range(&self) -> bool {
        (0.0..=1.0).contains(&self.x)
            && (0.0..=1.0).contains(&self.y)
            && (-1.0..=1.0).contains(&self.z)
            && (0.0..=1.0).contains(&self.confidence)
    }
}

/// Serialized as `[x, y, z, confidence]`
impl Serialize for Keypoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.x, self.y, self.z, self.confidence].serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamping() {
        let kp = Keypoint::new(1.5, -0.2, -3.0, 2.0);
        assert_eq!(kp.x, 1.0);
        assert_eq!(kp.y, 0.0);
        assert_eq!(kp.z, -1.0);
        assert_eq!(kp.confidence, 1.0);
        assert!(kp.in_range());
    }

    #[test]
    fn test_distance() {
        let a = Keypoint::certain(0.0, 0.0, 0.0);
        let b = Keypoint::certain(0.3, 0.4, 0.0);
        assert!((a.distance(&b) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_serializes_as_array() {
        let kp = Keypoint::certain(0.5, 0.25, 0.0);
        let json = serde_json::to_string(&kp).unwrap();
        assert_eq!(json, "[0.5,0.25,0.0,1.0]");
    }
}
