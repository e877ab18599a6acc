//! The domain module encapsulates the core geometric engine: 2D vector
//! algebra, circle-circle intersection, the seek steering behavior, and the
//! two-bone IK arm built on top of them.
//!
//! Nothing in here draws, schedules, or reads input. The presentation layer
//! feeds targets and boundary sizes in and reads positions back out, keeping
//! the numeric core free of bevy and reusable on its own.

mod arm;
mod circle;
mod steering;
mod vector;

pub use arm::TwoBoneArm;
pub use circle::{find_intersection_points, GeometryError};
pub use steering::{Bounds, SteeringAgent};
pub use vector::Vector2;
