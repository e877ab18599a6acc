//! 2D vector algebra in screen coordinates (origin top-left, y pointing down).
//!
//! `Vector2` is a plain value type. Every operation returns a new value; state
//! that changes over time (positions, velocities) lives in the entities that
//! own it, never inside shared vector handles.

use std::ops::{Add, Div, Mul, Neg, Sub};

use nalgebra::Rotation2;

/// Equality is the derived exact floating-point comparison, with no epsilon.
/// Callers comparing computed results should compare distances instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Vector2 {
    x: f64,
    y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Cheaper than [`length`](Self::length) when only comparing magnitudes.
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// The unit vector with this vector's direction.
    ///
    /// The zero vector has no direction; it normalizes to `(1, 0)` so that a
    /// null-length desired velocity never turns into NaN downstream.
    pub fn normalized(self) -> Self {
        let length = self.length();

        if length == 0.0 {
            Self::new(1.0, 0.0)
        } else {
            self / length
        }
    }

    /// Scaling by exactly `0.0` returns the exact zero vector, so negative
    /// components cannot leave `-0.0` artifacts behind.
    pub fn scaled(self, scalar: f64) -> Self {
        if scalar == 0.0 {
            return Self::ZERO;
        }

        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Rotates counter-clockwise (with respect to the y-down screen basis) by
    /// `angle` radians.
    pub fn rotated(self, angle: f64) -> Self {
        let rotated = Rotation2::new(angle) * nalgebra::Vector2::new(self.x, self.y);
        Self::new(rotated.x, rotated.y)
    }

    /// Linear interpolation towards `other`. `ratio` is not clamped; values
    /// outside `[0, 1]` extrapolate.
    pub fn mix(self, other: Self, ratio: f64) -> Self {
        Self::new(
            self.x * (1.0 - ratio) + other.x * ratio,
            self.y * (1.0 - ratio) + other.y * ratio,
        )
    }

    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn cross(&self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Signed delta `self.x - other.x`.
    pub fn distance_x(&self, other: Self) -> f64 {
        self.x - other.x
    }

    /// Signed delta `self.y - other.y`.
    pub fn distance_y(&self, other: Self) -> f64 {
        self.y - other.y
    }

    pub fn distance_abs_x(&self, other: Self) -> f64 {
        self.distance_x(other).abs()
    }

    pub fn distance_abs_y(&self, other: Self) -> f64 {
        self.distance_y(other).abs()
    }

    pub fn distance_squared(&self, other: Self) -> f64 {
        let dx = self.distance_x(other);
        let dy = self.distance_y(other);
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Angle to the horizontal, `atan2(y, x)`.
    pub fn horizontal_angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Angle to the vertical, `atan2(x, y)`. Note the argument order: this is
    /// not the complement of [`horizontal_angle`](Self::horizontal_angle).
    pub fn vertical_angle(&self) -> f64 {
        self.x.atan2(self.y)
    }

    pub fn inverted_x(self) -> Self {
        Self::new(-self.x, self.y)
    }

    pub fn inverted_y(self) -> Self {
        Self::new(self.x, -self.y)
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scaled(rhs)
    }
}

/// Division carries no zero guard: dividing by `0.0` yields IEEE infinities or
/// NaN, and avoiding that is the caller's responsibility.
impl Div<f64> for Vector2 {
    type Output = Vector2;

    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl From<Vector2> for (f32, f32) {
    fn from(value: Vector2) -> Self {
        (value.x as f32, value.y as f32)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::{assert_abs_diff_eq, AbsDiffEq};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const EPSILON: f64 = 1e-12;

    #[rstest]
    #[case(Vector2::new(3.0, 4.0))]
    #[case(Vector2::new(-0.3, 0.1))]
    #[case(Vector2::new(0.0, -7.5))]
    #[case(Vector2::new(1e-8, 1e-8))]
    fn test_normalized_has_unit_length(#[case] v: Vector2) {
        assert_abs_diff_eq!(v.normalized().length(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_normalized_zero_vector_falls_back_to_x_axis() {
        assert_eq!(Vector2::ZERO.normalized(), Vector2::new(1.0, 0.0));
    }

    #[test]
    fn test_scaled_by_zero_is_exactly_zero() {
        let v = Vector2::new(-3.5, 17.0);
        let scaled = v.scaled(0.0);
        assert_eq!(scaled, Vector2::ZERO);
        assert!(scaled.x().is_sign_positive());
        assert!(scaled.y().is_sign_positive());
    }

    #[test]
    fn test_scaled_is_deterministic() {
        let v = Vector2::new(0.1, -0.7);
        assert_eq!(v.scaled(3.3), v.scaled(3.3));
    }

    #[rstest]
    #[case(0.0, Vector2::new(1.0, 2.0))]
    #[case(1.0, Vector2::new(5.0, -2.0))]
    #[case(0.5, Vector2::new(3.0, 0.0))]
    #[case(2.0, Vector2::new(9.0, -6.0))] // extrapolation is allowed
    fn test_mix(#[case] ratio: f64, #[case] expected: Vector2) {
        let from = Vector2::new(1.0, 2.0);
        let to = Vector2::new(5.0, -2.0);
        assert_abs_diff_eq!(from.mix(to, ratio), expected);
    }

    #[rstest]
    #[case(0.5 * PI, Vector2::new(0.0, 1.0))]
    #[case(PI, Vector2::new(-1.0, 0.0))]
    #[case(1.5 * PI, Vector2::new(0.0, -1.0))]
    #[case(2.0 * PI, Vector2::new(1.0, 0.0))]
    fn test_rotated(#[case] angle: f64, #[case] expected: Vector2) {
        assert_abs_diff_eq!(
            Vector2::new(1.0, 0.0).rotated(angle),
            expected,
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_component_distances_are_signed() {
        let a = Vector2::new(1.0, 5.0);
        let b = Vector2::new(4.0, 2.0);
        assert_abs_diff_eq!(a.distance_x(b), -3.0);
        assert_abs_diff_eq!(a.distance_y(b), 3.0);
        assert_abs_diff_eq!(a.distance_abs_x(b), 3.0);
        assert_abs_diff_eq!(a.distance_abs_y(b), 3.0);
        assert_abs_diff_eq!(a.distance(b), 3.0 * std::f64::consts::SQRT_2, epsilon = EPSILON);
    }

    #[test]
    fn test_angles_are_not_complements() {
        let v = Vector2::new(1.0, 2.0);
        assert_abs_diff_eq!(v.horizontal_angle(), 2.0_f64.atan2(1.0));
        assert_abs_diff_eq!(v.vertical_angle(), 1.0_f64.atan2(2.0));
    }

    #[test]
    fn test_dot_and_cross() {
        let a = Vector2::new(2.0, 3.0);
        let b = Vector2::new(-1.0, 4.0);
        assert_abs_diff_eq!(a.dot(b), 10.0);
        assert_abs_diff_eq!(a.cross(b), 11.0);
    }

    #[test]
    fn test_operators() {
        let a = Vector2::new(2.0, -1.0);
        let b = Vector2::new(0.5, 3.0);
        assert_eq!(a + b, Vector2::new(2.5, 2.0));
        assert_eq!(a - b, Vector2::new(1.5, -4.0));
        assert_eq!(-a, Vector2::new(-2.0, 1.0));
        assert_eq!(a * 2.0, Vector2::new(4.0, -2.0));
        assert_eq!(a / 2.0, Vector2::new(1.0, -0.5));
        assert_eq!(a.inverted_x(), Vector2::new(-2.0, -1.0));
        assert_eq!(a.inverted_y(), Vector2::new(2.0, 1.0));
    }

    #[test]
    fn test_division_by_zero_is_unguarded() {
        let v = Vector2::new(1.0, 0.0) / 0.0;
        assert!(v.x().is_infinite());
        assert!(v.y().is_nan());
    }

    impl AbsDiffEq for Vector2 {
        type Epsilon = f64;

        fn default_epsilon() -> f64 {
            f64::EPSILON
        }

        fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
            f64::abs_diff_eq(&self.x, &other.x, epsilon)
                && f64::abs_diff_eq(&self.y, &other.y, epsilon)
        }
    }
}
