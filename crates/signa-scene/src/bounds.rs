//! Axis-aligned bounding boxes

use serde::Serialize;

/// Min/max extent per axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::unit()
    }
}

impl BoundingBox {
    /// `[0, 1]` on every axis
    pub fn unit() -> Self {
        BoundingBox {
            min_x: 0.0,
            max_x: 1.0,
            min_y: 0.0,
            max_y: 1.0,
            min_z: 0.0,
            max_z: 1.0,
        }
    }

    /// Tightest box around `points`; the unit box when there are none
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = [f32; 3]>,
    {
        let mut iter = points.into_iter();
        let Some([x, y, z]) = iter.next() else {
            return Self::unit();
        };

        let mut bb = BoundingBox {
            min_x: x,
            max_x: x,
            min_y: y,
            max_y: y,
            min_z: z,
            max_z: z,
        };
        for p in iter {
            bb.include(p);
        }
        bb
    }

    /// Grow to include `point`
    pub fn include(&mut self, [x, y, z]: [f32; 3]) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
        self.min_z = self.min_z.min(z);
        self.max_z = self.max_z.max(z);
    }

    pub fn contains(&self, [x, y, z]: [f32; 3]) -> bool {
        (self.min_x..=self.max_x).contains(&x)
            && (self.min_y..=self.max_y).contains(&y)
            && (self.min_z..=self.max_z).contains(&z)
    }

    pub fn center(&self) -> [f32; 3] {
        [
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
            (self.min_z + self.max_z) * 0.5,
        ]
    }
}
