//! Seek steering behavior with speed limiting, arrival slowdown, and wall
//! bouncing.

use super::Vector2;

/// Isotropic damping applied to the velocity once per tick.
const FRICTION: f64 = 0.01;

/// Radius around the target inside which the desired speed goes negative,
/// producing the overshoot-correcting reverse thrust of the arrival behavior.
const ARRIVAL_DEAD_ZONE: f64 = 20.0;

/// The rectangle the agent bounces off, anchored at the origin. Injected per
/// tick so the demo layer can hand in the current surface size.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Bounds {
    width: f64,
    height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct SteeringAgent {
    position: Vector2,
    velocity: Vector2,
    acceleration: Vector2,
    old_acceleration: Vector2,
    pub top_speed: f64,
    pub stopping_distance: f64,
}

impl SteeringAgent {
    pub fn new(position: Vector2, velocity: Vector2) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vector2::ZERO,
            old_acceleration: Vector2::ZERO,
            top_speed: 5.0,
            stopping_distance: 150.0,
        }
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn acceleration(&self) -> Vector2 {
        self.acceleration
    }

    /// The acceleration applied by the previous [`update`](Self::update), kept
    /// around for debug-vector rendering.
    pub fn old_acceleration(&self) -> Vector2 {
        self.old_acceleration
    }

    /// Puts the agent back at `position`, at rest.
    pub fn reset(&mut self, position: Vector2) {
        self.position = position;
        self.velocity = Vector2::ZERO;
        self.acceleration = Vector2::ZERO;
        self.old_acceleration = Vector2::ZERO;
    }

    /// Computes this tick's acceleration towards `target`.
    ///
    /// The desired velocity points at the target at top speed, ramps down
    /// linearly inside the stopping distance (and reverses inside the dead
    /// zone), and the resulting steering force is clamped to top speed.
    /// Nothing moves until [`update`](Self::update) integrates the result.
    pub fn seek(&mut self, target: Vector2) {
        let offset = target - self.position;
        let distance = offset.length();

        let mut desired = offset.normalized().scaled(self.top_speed);
        if distance < self.stopping_distance {
            desired = desired.scaled((distance - ARRIVAL_DEAD_ZONE) / self.stopping_distance);
        }

        let mut steering = desired - self.velocity;
        if steering.length() > self.top_speed {
            steering = steering.normalized().scaled(self.top_speed);
        }

        self.acceleration = steering;
    }

    /// Integrates one tick: applies the stored acceleration, damps the
    /// velocity, moves, then bounces off the bounds.
    pub fn update(&mut self, bounds: Bounds) {
        self.velocity = (self.velocity + self.acceleration).scaled(1.0 - FRICTION);
        self.position = self.position + self.velocity;

        self.old_acceleration = self.acceleration;
        self.acceleration = Vector2::ZERO;

        self.bounce(bounds);
    }

    // Pure sign flip, no position correction: an agent past an edge may stay
    // outside for a frame before the reversed velocity brings it back.
    fn bounce(&mut self, bounds: Bounds) {
        if self.position.x() > bounds.width() || self.position.x() < 0.0 {
            self.velocity = self.velocity.inverted_x();
        }
        if self.position.y() > bounds.height() || self.position.y() < 0.0 {
            self.velocity = self.velocity.inverted_y();
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    use super::*;

    const BOUNDS: Bounds = Bounds::new(800.0, 600.0);

    #[test]
    fn test_first_tick_from_rest_respects_top_speed() {
        let mut agent = SteeringAgent::new(Vector2::new(10.0, 10.0), Vector2::ZERO);
        agent.seek(Vector2::new(700.0, 500.0));
        agent.update(BOUNDS);
        assert!(agent.velocity().length() <= agent.top_speed);
    }

    #[test]
    fn test_approach_is_monotonic_outside_stopping_radius() {
        let mut agent = SteeringAgent::new(Vector2::new(10.0, 10.0), Vector2::ZERO);
        let target = Vector2::new(700.0, 500.0);

        let mut distance = agent.position().distance(target);
        for _ in 0..1000 {
            agent.seek(target);
            agent.update(BOUNDS);

            let new_distance = agent.position().distance(target);
            if new_distance < agent.stopping_distance {
                return;
            }
            assert!(new_distance < distance);
            distance = new_distance;
        }

        panic!("agent never entered the stopping radius");
    }

    #[test]
    fn test_arrival_slows_the_agent_down() {
        let mut agent = SteeringAgent::new(Vector2::new(10.0, 300.0), Vector2::ZERO);
        let target = Vector2::new(400.0, 300.0);

        let mut top_observed_speed: f64 = 0.0;
        for _ in 0..500 {
            agent.seek(target);
            agent.update(BOUNDS);
            top_observed_speed = top_observed_speed.max(agent.velocity().length());
        }

        assert!(top_observed_speed > 4.0);
        assert!(agent.velocity().length() < 1.0);
        assert!(agent.position().distance(target) < agent.stopping_distance);
    }

    #[test]
    fn test_target_inside_dead_zone_produces_reverse_thrust() {
        let mut agent = SteeringAgent::new(Vector2::new(100.0, 100.0), Vector2::ZERO);
        let target = Vector2::new(105.0, 100.0);

        agent.seek(target);

        // Closer than the dead zone the desired-speed scale goes negative, so
        // the agent brakes by accelerating away from the target.
        let towards_target = target - agent.position();
        assert!(agent.acceleration().dot(towards_target) < 0.0);
        assert!(agent.acceleration().length() <= agent.top_speed);
    }

    #[test]
    fn test_acceleration_is_consumed_and_snapshotted() {
        let mut agent = SteeringAgent::new(Vector2::new(10.0, 10.0), Vector2::ZERO);
        agent.seek(Vector2::new(700.0, 500.0));
        let scheduled = agent.acceleration();
        assert!(!scheduled.is_zero());

        agent.update(BOUNDS);
        assert_eq!(agent.acceleration(), Vector2::ZERO);
        assert_eq!(agent.old_acceleration(), scheduled);
    }

    #[rstest]
    #[case::past_right_edge(Vector2::new(801.0, 300.0), Vector2::new(-3.0, 2.0))]
    #[case::past_left_edge(Vector2::new(-1.0, 300.0), Vector2::new(-3.0, 2.0))]
    #[case::past_bottom_edge(Vector2::new(400.0, 601.0), Vector2::new(3.0, -2.0))]
    #[case::past_top_edge(Vector2::new(400.0, -1.0), Vector2::new(3.0, -2.0))]
    fn test_bounce_flips_velocity_sign_only(
        #[case] position: Vector2,
        #[case] expected_velocity: Vector2,
    ) {
        let mut agent = SteeringAgent::new(position, Vector2::new(3.0, 2.0));
        agent.bounce(BOUNDS);
        assert_abs_diff_eq!(agent.velocity(), expected_velocity);
        assert_eq!(agent.position(), position);
    }
}
