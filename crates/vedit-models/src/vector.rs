use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A 3D direction/position vector in scene space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// Straight-ahead gaze direction (toward the camera).
    pub const FORWARD: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// Create a new vector.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean magnitude.
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Dot product.
    pub fn dot(&self, other: &Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean distance to another vector.
    pub fn distance(&self, other: &Vec3) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Component-wise subtraction.
    pub fn sub(&self, other: &Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Midpoint between two positions.
    pub fn midpoint(&self, other: &Vec3) -> Vec3 {
        Vec3::new(
            (self.x + other.x) / 2.0,
            (self.y + other.y) / 2.0,
            (self.z + other.z) / 2.0,
        )
    }

    /// Unit vector in the same direction, or `None` for a zero-magnitude vector.
    pub fn normalized(&self) -> Option<Vec3> {
        let mag = self.magnitude();
        if mag == 0.0 || !mag.is_finite() {
            return None;
        }
        Some(Vec3::new(self.x / mag, self.y / mag, self.z / mag))
    }

    /// Component-wise blend: `self * (1 - t) + other * t`.
    ///
    /// `t = 0` returns `self` unchanged, `t = 1` returns `other`.
    pub fn blend(&self, other: &Vec3, t: f64) -> Vec3 {
        Vec3::new(
            self.x * (1.0 - t) + other.x * t,
            self.y * (1.0 - t) + other.y * t,
            self.z * (1.0 - t) + other.z * t,
        )
    }

    /// Linear interpolation from `self` toward `other`. Alias of [`Vec3::blend`]
    /// kept for call sites that read better as a lerp.
    pub fn lerp(&self, other: &Vec3, t: f64) -> Vec3 {
        self.blend(other, t)
    }

    /// Check that all components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude() {
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
        assert_eq!(Vec3::FORWARD.magnitude(), 1.0);
    }

    #[test]
    fn test_normalized() {
        let v = Vec3::new(0.0, 3.0, 4.0).normalized().unwrap();
        assert!((v.magnitude() - 1.0).abs() < 1e-12);
        assert!((v.y - 0.6).abs() < 1e-12);

        assert!(Vec3::new(0.0, 0.0, 0.0).normalized().is_none());
    }

    #[test]
    fn test_blend_endpoints() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);

        assert_eq!(a.blend(&b, 0.0), a);
        assert_eq!(a.blend(&b, 1.0), b);

        let mid = a.blend(&b, 0.5);
        assert!((mid.x - 0.5).abs() < 1e-12);
        assert!((mid.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_midpoint() {
        let m = Vec3::new(-1.0, 0.0, 2.0).midpoint(&Vec3::new(1.0, 2.0, 2.0));
        assert_eq!(m, Vec3::new(0.0, 1.0, 2.0));
    }
}
