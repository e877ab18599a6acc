//! Circle-circle intersection via the radical line.
//!
//! This is the geometric workhorse behind the two-bone arm: the elbow is one of
//! the intersection points of the circle around the shoulder (radius = upper
//! link) and the circle around the hand (radius = lower link).

use thiserror::Error;

use super::Vector2;

#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum GeometryError {
    #[error("circle centers coincide, the radical line is undefined")]
    DegenerateCircles,
    #[error("circles do not intersect")]
    NoIntersection,
}

/// Finds the two intersection points of the circles around `center1` and
/// `center2` with radii `radius1` and `radius2`.
///
/// The returned pair is ordered by the radical-line construction below, and the
/// order is stable: callers that always pick the same index always get the same
/// bend of an arm. Tangent circles report the same point twice.
///
/// Adapted from <https://math.stackexchange.com/a/1367732>.
pub fn find_intersection_points(
    center1: Vector2,
    radius1: f64,
    center2: Vector2,
    radius2: f64,
) -> Result<[Vector2; 2], GeometryError> {
    let distance = center1.distance(center2);

    if distance == 0.0 {
        return Err(GeometryError::DegenerateCircles);
    }

    let distance2 = distance * distance;
    let distance4 = distance2 * distance2;

    let radius1_2 = radius1 * radius1;
    let radius2_2 = radius2 * radius2;

    // Signed offset of the radical line along the center line, and the
    // half-chord factor. The expression under the root is negative exactly
    // when the circles are too far apart or one strictly contains the other.
    let a = (radius1_2 - radius2_2) / (2.0 * distance2);
    let b_squared = 2.0 * (radius1_2 + radius2_2) / distance2
        - (radius1_2 - radius2_2).powi(2) / distance4
        - 1.0;

    if b_squared < 0.0 {
        return Err(GeometryError::NoIntersection);
    }

    let b = b_squared.sqrt();

    let x_mean = (center1.x() + center2.x()) / 2.0;
    let y_mean = (center1.y() + center2.y()) / 2.0;

    let a_x = x_mean + a * center2.distance_x(center1);
    let b_x = b * center2.distance_y(center1) / 2.0;

    let a_y = y_mean + a * center2.distance_y(center1);
    let b_y = b * center1.distance_x(center2) / 2.0;

    Ok([
        Vector2::new(a_x + b_x, a_y + b_y),
        Vector2::new(a_x - b_x, a_y - b_y),
    ])
}
