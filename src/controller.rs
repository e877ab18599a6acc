//! Input layer.
//!
//! Mouse and keyboard input is translated into the domain's narrow entry
//! points: the food position (the seek target), `move_hand_to` for the arm,
//! and the link-length setters. Nothing here touches domain internals
//! directly, so every write goes through the clamping the domain enforces.

use bevy::prelude::*;

use crate::{
    domain::Vector2,
    resource::{AgentRes, ArmRes, FoodRes},
    visualizer::{to_domain_position, DragTarget, Scene},
};

/// Picking up the hand requires pressing within this distance of it.
const GRAB_RADIUS: f64 = 15.0;

/// Link-length change per frame while a length key is held.
const LENGTH_STEP: f64 = 2.0;

/// Links cannot shrink below this, keeping the reachable annulus non-trivial.
const LENGTH_MIN: f64 = 10.0;

const AGENT_START: Vector2 = Vector2::new(10.0, 10.0);

pub struct Controller;

impl Plugin for Controller {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (control_pointer, control_keys));
    }
}

/// Left-dragging near the hand moves the hand (clamped to the reachable
/// annulus); left-dragging anywhere else makes the food follow the cursor.
pub(crate) fn control_pointer(
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    buttons: Res<ButtonInput<MouseButton>>,
    mut scene: ResMut<Scene>,
    mut arm: ResMut<ArmRes>,
    mut food: ResMut<FoodRes>,
) {
    if !buttons.pressed(MouseButton::Left) {
        scene.drag = DragTarget::None;
        return;
    }

    let window = windows.single();
    let Some(pointer) = pointer_position(window, &cameras) else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) {
        scene.drag = if pointer.distance(arm.hand()) < GRAB_RADIUS {
            DragTarget::Hand
        } else {
            DragTarget::Food
        };
    }

    match scene.drag {
        DragTarget::Hand => arm.move_hand_to(pointer),
        DragTarget::Food => food.position = pointer,
        DragTarget::None => {}
    }
}

/// Keyboard equivalents of the demo's sliders and checkboxes: Q/A and W/S
/// resize the upper and lower link, V toggles the debug vectors, T the HUD,
/// and R resets the agent.
pub(crate) fn control_keys(
    keys: Res<ButtonInput<KeyCode>>,
    mut scene: ResMut<Scene>,
    mut arm: ResMut<ArmRes>,
    mut agent: ResMut<AgentRes>,
) {
    if keys.pressed(KeyCode::KeyQ) {
        let length = arm.upper_length() + LENGTH_STEP;
        arm.set_upper_length(length);
    }
    if keys.pressed(KeyCode::KeyA) {
        let length = (arm.upper_length() - LENGTH_STEP).max(LENGTH_MIN);
        arm.set_upper_length(length);
    }
    if keys.pressed(KeyCode::KeyW) {
        let length = arm.lower_length() + LENGTH_STEP;
        arm.set_lower_length(length);
    }
    if keys.pressed(KeyCode::KeyS) {
        let length = (arm.lower_length() - LENGTH_STEP).max(LENGTH_MIN);
        arm.set_lower_length(length);
    }

    if keys.just_pressed(KeyCode::KeyV) {
        scene.show_vectors = !scene.show_vectors;
    }
    if keys.just_pressed(KeyCode::KeyT) {
        scene.show_text = !scene.show_text;
    }
    if keys.just_pressed(KeyCode::KeyR) {
        agent.reset(AGENT_START);
    }
}

fn pointer_position(
    window: &Window,
    cameras: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vector2> {
    let (camera, camera_transform) = cameras.single();
    let cursor_position = window.cursor_position()?;
    let world_position = camera.viewport_to_world_2d(camera_transform, cursor_position)?;
    Some(to_domain_position(world_position, window))
}
