//! Two-bone inverse kinematics: a fixed shoulder, a driven hand, and an elbow
//! derived from the intersection of the two link circles.

use super::{find_intersection_points, GeometryError, Vector2};

/// How far inside the reachable annulus a clamped hand is placed, so the
/// intersection formula never runs on an exact boundary configuration.
const BOUNDARY_MARGIN: f64 = 1e-6;

#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct TwoBoneArm {
    shoulder: Vector2,
    hand: Vector2,
    upper_length: f64,
    lower_length: f64,
}

impl TwoBoneArm {
    pub fn new(upper_length: f64, lower_length: f64, shoulder: Vector2, hand: Vector2) -> Self {
        let mut arm = Self {
            shoulder,
            hand: shoulder,
            upper_length,
            lower_length,
        };
        arm.move_hand_to(hand);
        arm
    }

    pub fn shoulder(&self) -> Vector2 {
        self.shoulder
    }

    pub fn hand(&self) -> Vector2 {
        self.hand
    }

    pub fn upper_length(&self) -> f64 {
        self.upper_length
    }

    pub fn lower_length(&self) -> f64 {
        self.lower_length
    }

    /// Outer radius of the reachable annulus.
    pub fn total_arm_length(&self) -> f64 {
        self.upper_length + self.lower_length
    }

    /// Inner radius of the reachable annulus.
    pub fn minimum_arm_length(&self) -> f64 {
        (self.upper_length - self.lower_length).abs()
    }

    /// Moves the hand to `target`, clamped onto the reachable annulus.
    ///
    /// Targets closer to the shoulder than the inner radius land just outside
    /// it; targets beyond the outer radius land just inside it; anything in
    /// between is taken verbatim. A target exactly on the shoulder has no
    /// direction, so the zero-vector normalize fallback places the hand along
    /// the +x axis.
    ///
    /// This is the only mutator of the hand, which is what lets
    /// [`solve_elbow`](Self::solve_elbow) assume intersecting circles.
    pub fn move_hand_to(&mut self, target: Vector2) {
        let reach = target.distance(self.shoulder);
        let minimum = self.minimum_arm_length();
        let total = self.total_arm_length();

        // `reach == 0.0` matters when the links are equal: the inner radius is
        // then zero and the shoulder itself is the one degenerate point.
        self.hand = if reach < minimum || reach == 0.0 {
            self.shoulder + (target - self.shoulder).normalized().scaled(minimum + BOUNDARY_MARGIN)
        } else if reach > total {
            self.shoulder + (target - self.shoulder).normalized().scaled(total - BOUNDARY_MARGIN)
        } else {
            target
        };
    }

    /// Solves for the elbow position.
    ///
    /// Of the two valid bends, this always returns the second intersection
    /// point. The fixed branch keeps the choice deterministic, but it means
    /// the elbow can jump when the hand crosses the colinear configuration;
    /// there is no nearest-to-previous-elbow continuity.
    pub fn solve_elbow(&self) -> Result<Vector2, GeometryError> {
        let points = find_intersection_points(
            self.shoulder,
            self.upper_length,
            self.hand,
            self.lower_length,
        )?;
        Ok(points[1])
    }

    /// Repositions the shoulder and re-clamps the hand against the moved
    /// annulus.
    pub fn set_shoulder(&mut self, shoulder: Vector2) {
        self.shoulder = shoulder;
        self.move_hand_to(self.hand);
    }

    /// Changes the upper link length and re-clamps the hand against the new
    /// annulus.
    pub fn set_upper_length(&mut self, length: f64) {
        self.upper_length = length;
        self.move_hand_to(self.hand);
    }

    /// Changes the lower link length and re-clamps the hand against the new
    /// annulus.
    pub fn set_lower_length(&mut self, length: f64) {
        self.lower_length = length;
        self.move_hand_to(self.hand);
    }
}
