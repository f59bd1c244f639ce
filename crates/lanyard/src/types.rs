//! Core value types shared by the simulation passes.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[must_use]
    pub fn distance(self, rhs: Self) -> f32 {
        (rhs - self).length()
    }

    /// Unit vector in the same direction, or zero when the length underflows.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > f32::EPSILON {
            self / len
        } else {
            Self::ZERO
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

/// A mass point of the rope. Velocity is implicit as `pos - prev_pos`.
#[derive(Copy, Clone, Debug)]
pub struct Particle {
    pub pos: Vec3,
    pub prev_pos: Vec3,
    pub pinned: bool,
}

impl Particle {
    #[must_use]
    pub const fn new(pos: Vec3, pinned: bool) -> Self {
        Self {
            pos,
            prev_pos: pos,
            pinned,
        }
    }

    /// Implicit per-step velocity accumulated since the last integration.
    #[must_use]
    pub fn velocity(&self) -> Vec3 {
        self.pos - self.prev_pos
    }
}

/// Distance constraint between two adjacent chain particles.
#[derive(Copy, Clone, Debug)]
pub struct Constraint {
    pub a: usize,
    pub b: usize,
    pub rest_length: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec3_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, -2.0, 0.5);
        let sum = a + b;
        assert!((sum.x - 5.0).abs() < 1e-6);
        assert!((sum.y - 0.0).abs() < 1e-6);
        assert!((sum.z - 3.5).abs() < 1e-6);
        assert!((a.dot(b) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn normalized_zero_vector_is_zero() {
        let n = Vec3::ZERO.normalized();
        assert!(n.is_finite());
        assert!(n.length() < 1e-6);
    }

    #[test]
    fn particle_starts_at_rest() {
        let p = Particle::new(Vec3::new(0.0, 5.0, 0.0), false);
        assert!(p.velocity().length() < 1e-6);
    }
}
