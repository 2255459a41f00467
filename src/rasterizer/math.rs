//! Vector math for rasterization
//!
//! Small `Copy` tuples generic over their component type. Integer
//! instantiations carry screen coordinates, float ones carry model space.

use std::ops::{Add, Mul, Sub};
use serde::{Serialize, Deserialize};

/// 2D Vector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

/// 3D Vector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// Screen-space point
pub type Vec2i = Vec2<i32>;
pub type Vec2f = Vec2<f32>;
pub type Vec3i = Vec3<i32>;
/// Model-space point or direction
pub type Vec3f = Vec3<f32>;

impl<T> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> Vec3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T> Vec2<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Signed area of the parallelogram spanned by `self` and `other`.
    ///
    /// Equals the z component of the 3D cross product with both z set to 0.
    /// Positive when `other` is counter-clockwise from `self`.
    pub fn cross2d(self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }
}

impl<T> Vec3<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

impl<T: Copy> Vec3<T> {
    /// Drop z
    pub fn xy(self) -> Vec2<T> {
        Vec2 { x: self.x, y: self.y }
    }
}

impl Vec2<i32> {
    pub fn to_f32(self) -> Vec2f {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// Wide enough for products of differences of any two i32 points
    pub fn to_i128(self) -> Vec2<i128> {
        Vec2::new(self.x as i128, self.y as i128)
    }
}

impl Vec2<f32> {
    pub const ZERO: Vec2f = Vec2 { x: 0.0, y: 0.0 };

    pub fn norm(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction; the zero vector maps to itself.
    pub fn normalized(self) -> Vec2f {
        let l = self.norm();
        if l == 0.0 {
            return Vec2f::ZERO;
        }
        self * (1.0 / l)
    }
}

impl Vec3<f32> {
    pub const ZERO: Vec3f = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub fn norm(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction; the zero vector maps to itself.
    pub fn normalized(self) -> Vec3f {
        let l = self.norm();
        if l == 0.0 {
            return Vec3f::ZERO;
        }
        self * (1.0 / l)
    }
}

impl<T: Add<Output = T>> Add for Vec2<T> {
    type Output = Vec2<T>;
    fn add(self, other: Vec2<T>) -> Vec2<T> {
        Vec2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T: Sub<Output = T>> Sub for Vec2<T> {
    type Output = Vec2<T>;
    fn sub(self, other: Vec2<T>) -> Vec2<T> {
        Vec2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Vec2<T> {
    type Output = Vec2<T>;
    fn mul(self, s: T) -> Vec2<T> {
        Vec2 {
            x: self.x * s,
            y: self.y * s,
        }
    }
}

impl<T: Add<Output = T>> Add for Vec3<T> {
    type Output = Vec3<T>;
    fn add(self, other: Vec3<T>) -> Vec3<T> {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<T: Sub<Output = T>> Sub for Vec3<T> {
    type Output = Vec3<T>;
    fn sub(self, other: Vec3<T>) -> Vec3<T> {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Vec3<T> {
    type Output = Vec3<T>;
    fn mul(self, s: T) -> Vec3<T> {
        Vec3 {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }
}

/// Inclusive pixel bounds of a triangle, clamped to the image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl BoundingBox {
    pub fn contains(&self, p: Vec2i) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

/// Axis-aligned bounding box of a triangle intersected with `[0, w-1] x [0, h-1]`
///
/// Coordinates are clamped, not clipped: a triangle entirely off-screen
/// collapses onto the nearest image border.
pub fn compute_bbox(v0: Vec2i, v1: Vec2i, v2: Vec2i, width: usize, height: usize) -> BoundingBox {
    let max_w = width as i32 - 1;
    let max_h = height as i32 - 1;
    let clamp = |v: i32, hi: i32| v.max(0).min(hi);

    BoundingBox {
        min_x: clamp(v0.x.min(v1.x).min(v2.x), max_w),
        max_x: clamp(v0.x.max(v1.x).max(v2.x), max_w),
        min_y: clamp(v0.y.min(v1.y).min(v2.y), max_h),
        max_y: clamp(v0.y.max(v1.y).max(v2.y), max_h),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vec3_dot() {
        let a = Vec3f::new(1.0, 2.0, 3.0);
        let b = Vec3f::new(4.0, 5.0, 6.0);
        assert_relative_eq!(a.dot(b), 32.0);
        assert_relative_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn test_vec3_cross() {
        let a = Vec3f::new(1.0, 0.0, 0.0);
        let b = Vec3f::new(0.0, 1.0, 0.0);
        assert_eq!(a.cross(b), Vec3f::new(0.0, 0.0, 1.0));
        assert_eq!(b.cross(a), Vec3f::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_cross2d_antisymmetric() {
        let pairs = [
            (Vec2i::new(3, 7), Vec2i::new(-2, 5)),
            (Vec2i::new(0, 0), Vec2i::new(9, 1)),
            (Vec2i::new(-4, -4), Vec2i::new(4, 4)),
        ];
        for (a, b) in pairs {
            assert_eq!(a.cross2d(b), -b.cross2d(a));
            assert_eq!(a.dot(b), b.dot(a));
        }
        assert_eq!(Vec2i::new(1, 0).cross2d(Vec2i::new(0, 1)), 1);
    }

    #[test]
    fn test_cross2d_matches_cross_z() {
        let a = Vec3i::new(2, -3, 0);
        let b = Vec3i::new(5, 4, 0);
        assert_eq!(a.xy().cross2d(b.xy()), a.cross(b).z);
    }

    #[test]
    fn test_normalized_has_unit_length() {
        for v in [
            Vec3f::new(3.0, 4.0, 0.0),
            Vec3f::new(-0.001, 0.002, 0.0005),
            Vec3f::new(120.0, -7.5, 33.0),
        ] {
            assert_relative_eq!(v.normalized().norm(), 1.0, epsilon = 1e-6);
        }
        assert_relative_eq!(Vec2f::new(5.0, 12.0).normalized().norm(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_normalized_zero_is_zero() {
        assert_eq!(Vec3f::ZERO.normalized(), Vec3f::ZERO);
        assert_eq!(Vec2f::ZERO.normalized(), Vec2f::ZERO);
    }

    #[test]
    fn test_xy_drops_z() {
        assert_eq!(Vec3f::new(1.0, 2.0, 3.0).xy(), Vec2f::new(1.0, 2.0));
    }

    #[test]
    fn test_bbox_inside_image() {
        let bb = compute_bbox(Vec2i::new(10, 20), Vec2i::new(30, 5), Vec2i::new(15, 40), 100, 100);
        assert_eq!(bb, BoundingBox { min_x: 10, max_x: 30, min_y: 5, max_y: 40 });
        assert!(bb.contains(Vec2i::new(30, 40)));
        assert!(!bb.contains(Vec2i::new(31, 40)));
    }

    #[test]
    fn test_bbox_clamped_to_image() {
        let bb = compute_bbox(Vec2i::new(-10, -5), Vec2i::new(150, 20), Vec2i::new(20, 300), 100, 80);
        assert_eq!(bb, BoundingBox { min_x: 0, max_x: 99, min_y: 0, max_y: 79 });
    }

    #[test]
    fn test_bbox_offscreen_collapses_to_border() {
        let bb = compute_bbox(Vec2i::new(200, 10), Vec2i::new(210, 20), Vec2i::new(205, 30), 100, 100);
        assert_eq!(bb.min_x, 99);
        assert_eq!(bb.max_x, 99);
    }
}
