#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Vec2f {
    pub x: f64,
    pub y: f64,
}

impl Vec2f {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn norm(&self) -> f64 {
        self.dot_self().sqrt()
    }

    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn dot_self(&self) -> f64 {
        self.dot(*self)
    }

    /// Z component of the 3D cross product, positive when `other` is counter-clockwise from `self`.
    pub fn cross(&self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn distance(&self, other: Self) -> f64 {
        (other - *self).norm()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Add for Vec2f {
    type Output = Vec2f;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2f {
    type Output = Vec2f;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f64> for Vec2f {
    type Output = Vec2f;

    fn mul(self, scalar: f64) -> Self::Output {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl PartialEq for Vec2f {
    fn eq(&self, rhs: &Self) -> bool {
        self.x == rhs.x && self.y == rhs.y
    }
}

impl std::fmt::Display for Vec2f {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_self_should_be_squared_norm() {
        let value = Vec2f::new(3.0, 4.0);
        assert_eq!(value.dot_self(), 25.0);
        assert_eq!(value.norm(), 5.0);
    }

    #[test]
    fn distance_should_be_symmetric() {
        let a = Vec2f::new(1.0, -2.0);
        let b = Vec2f::new(4.0, 2.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn cross_should_change_sign_with_operand_order() {
        let a = Vec2f::new(1.0, 0.0);
        let b = Vec2f::new(0.0, 1.0);
        assert_eq!(a.cross(b), 1.0);
        assert_eq!(b.cross(a), -1.0);
        assert_eq!(a.cross(a * 3.0), 0.0);
    }

    #[test]
    fn nan_vector_should_not_be_finite_nor_equal_to_itself() {
        let value = Vec2f::new(f64::NAN, 0.0);
        assert!(!value.is_finite());
        assert_ne!(value, value);
    }

    #[test]
    fn display_should_print_space_separated_coordinates() {
        assert_eq!(Vec2f::new(2.0, -0.5).to_string(), "2 -0.5");
    }
}
