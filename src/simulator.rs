//! Per-frame simulation of the seeking agent.
//!
//! Each frame the agent steers towards the food, integrates one tick against
//! the current window bounds, and eaten food respawns at a random spot.

use bevy::prelude::*;
use rand::{
    distr::{Distribution, Uniform},
    SeedableRng,
};
use rand_chacha::ChaCha8Rng;

use crate::{
    controller,
    domain::{Bounds, Vector2},
    resource::{AgentRes, FoodRes},
};

const RNG_SEED: u64 = 4150593952;

/// The agent has eaten the food once it gets this close.
const CATCH_RADIUS: f64 = 12.0;

/// Respawned food keeps this distance from the window edges.
const RESPAWN_MARGIN: f64 = 40.0;

pub struct Simulator;

impl Plugin for Simulator {
    fn build(&self, app: &mut App) {
        app.insert_resource(FoodRng(ChaCha8Rng::seed_from_u64(RNG_SEED)))
            .add_systems(
                Update,
                simulate
                    .after(controller::control_pointer)
                    .after(controller::control_keys),
            );
    }
}

#[derive(Resource)]
pub(crate) struct FoodRng(ChaCha8Rng);

pub(crate) fn simulate(
    windows: Query<&Window>,
    mut agent: ResMut<AgentRes>,
    mut food: ResMut<FoodRes>,
    mut rng: ResMut<FoodRng>,
) {
    let window = windows.single();
    let bounds = Bounds::new(window.width() as f64, window.height() as f64);

    agent.seek(food.position);
    agent.update(bounds);

    if agent.position().distance(food.position) < CATCH_RADIUS {
        food.position = random_position(bounds, &mut rng.0);
    }
}

fn random_position(bounds: Bounds, rng: &mut ChaCha8Rng) -> Vector2 {
    Vector2::new(
        random_coordinate(bounds.width(), rng),
        random_coordinate(bounds.height(), rng),
    )
}

// The window is resizable, so the margin cannot be assumed to fit: an axis
// shorter than twice the margin has no samplable range and falls back to its
// midpoint.
fn random_coordinate(extent: f64, rng: &mut ChaCha8Rng) -> f64 {
    if extent <= 2.0 * RESPAWN_MARGIN {
        return extent / 2.0;
    }

    Uniform::try_from(RESPAWN_MARGIN..=extent - RESPAWN_MARGIN)
        .unwrap()
        .sample(rng)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_random_position_stays_inside_margins() {
        let mut rng = ChaCha8Rng::seed_from_u64(RNG_SEED);
        let bounds = Bounds::new(800.0, 600.0);

        for _ in 0..100 {
            let position = random_position(bounds, &mut rng);
            assert!(position.x() >= RESPAWN_MARGIN);
            assert!(position.x() <= bounds.width() - RESPAWN_MARGIN);
            assert!(position.y() >= RESPAWN_MARGIN);
            assert!(position.y() <= bounds.height() - RESPAWN_MARGIN);
        }
    }

    #[test]
    fn test_random_position_handles_tiny_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(RNG_SEED);

        let position = random_position(Bounds::new(50.0, 600.0), &mut rng);
        assert_eq!(position.x(), 25.0);
        assert!(position.y() >= RESPAWN_MARGIN);

        let position = random_position(Bounds::new(50.0, 60.0), &mut rng);
        assert_eq!(position.x(), 25.0);
        assert_eq!(position.y(), 30.0);
    }
}
