//! 2D visualization.
//!
//! Draws the two demos into one window with gizmos: the seeking agent with its
//! food and optional debug vectors, and the IK arm with its construction
//! circles, both intersection candidates, and the solved elbow. Also owns the
//! mapping between domain coordinates (origin top-left, y down) and bevy world
//! coordinates (origin centre, y up).

use bevy::prelude::*;

use crate::{
    domain::{find_intersection_points, SteeringAgent, TwoBoneArm, Vector2},
    resource::{AgentRes, ArmRes, FoodRes},
    simulator,
};

const POINT_RADIUS: f32 = 10.0;
const CANDIDATE_RADIUS: f32 = 5.0;

/// Debug vectors are short per-frame quantities; scale them up to be legible.
const VECTOR_SCALE: f64 = 10.0;

const AGENT_COLOR: Color = Color::rgb(1.0, 0.5, 0.31);
const FOOD_COLOR: Color = Color::rgb(0.0, 0.6, 0.0);
const CIRCLE_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.35);
const BACKGROUND_COLOR: Color = Color::rgb(0.71, 0.97, 0.93);

pub struct Visualizer;

impl Plugin for Visualizer {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKGROUND_COLOR))
            .add_systems(Startup, set_up)
            .add_systems(
                Update,
                (draw_agent, draw_arm, update_text).after(simulator::simulate),
            )
            .insert_resource(create_agent())
            .insert_resource(create_arm())
            .insert_resource(create_food())
            .init_resource::<Scene>();
    }
}

#[derive(Resource, Default)]
pub struct Scene {
    pub show_vectors: bool,
    pub show_text: bool,
    pub drag: DragTarget,
}

/// What the held left mouse button is currently moving.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DragTarget {
    #[default]
    None,
    Food,
    Hand,
}

fn create_agent() -> AgentRes {
    SteeringAgent::new(Vector2::new(10.0, 10.0), Vector2::ZERO).into()
}

fn create_arm() -> ArmRes {
    TwoBoneArm::new(
        250.0,
        150.0,
        Vector2::new(100.0, 100.0),
        Vector2::new(300.0, 300.0),
    )
    .into()
}

fn create_food() -> FoodRes {
    FoodRes {
        position: Vector2::new(640.0, 360.0),
    }
}

fn set_up(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
    create_text(&mut commands);
}

fn create_text(commands: &mut Commands) {
    let text_style = TextStyle {
        font_size: 20.0,
        color: Color::BLACK,
        ..default()
    };
    commands.spawn(
        TextBundle::from_sections(vec![TextSection::new("", text_style)]).with_style(Style {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        }),
    );
}

fn draw_agent(
    mut gizmos: Gizmos,
    windows: Query<&Window>,
    agent: Res<AgentRes>,
    food: Res<FoodRes>,
    scene: Res<Scene>,
) {
    let window = windows.single();

    gizmos.circle_2d(
        to_world_position(food.position, window),
        POINT_RADIUS,
        FOOD_COLOR,
    );

    let agent_position = to_world_position(agent.position(), window);
    gizmos.circle_2d(agent_position, POINT_RADIUS, AGENT_COLOR);

    if scene.show_vectors {
        gizmos.arrow_2d(
            agent_position,
            agent_position + to_world_delta(-agent.velocity() * VECTOR_SCALE),
            Color::BLACK,
        );
        gizmos.arrow_2d(
            agent_position,
            agent_position + to_world_delta(agent.old_acceleration() * VECTOR_SCALE),
            Color::RED,
        );
    }
}

fn draw_arm(mut gizmos: Gizmos, windows: Query<&Window>, arm: Res<ArmRes>) {
    let window = windows.single();

    let shoulder = to_world_position(arm.shoulder(), window);
    let hand = to_world_position(arm.hand(), window);

    gizmos.circle_2d(shoulder, POINT_RADIUS, Color::BLACK);
    gizmos.circle_2d(hand, POINT_RADIUS, Color::BLACK);
    gizmos.circle_2d(shoulder, arm.upper_length() as f32, CIRCLE_COLOR);
    gizmos.circle_2d(hand, arm.lower_length() as f32, CIRCLE_COLOR);

    // The clamp in move_hand_to keeps both error cases unreachable, but the
    // drawing pass degrades to just the endpoints rather than crashing.
    if let Ok(elbow) = arm.solve_elbow() {
        let elbow = to_world_position(elbow, window);
        gizmos.line_2d(shoulder, elbow, Color::BLACK);
        gizmos.line_2d(elbow, hand, Color::BLACK);
        gizmos.circle_2d(elbow, POINT_RADIUS, Color::RED);
    }

    if let Ok(candidates) = find_intersection_points(
        arm.shoulder(),
        arm.upper_length(),
        arm.hand(),
        arm.lower_length(),
    ) {
        for candidate in candidates {
            gizmos.circle_2d(
                to_world_position(candidate, window),
                CANDIDATE_RADIUS,
                Color::BLUE,
            );
        }
    }
}

fn update_text(
    mut text: Query<&mut Text>,
    scene: Res<Scene>,
    agent: Res<AgentRes>,
    arm: Res<ArmRes>,
) {
    let mut text = text.single_mut();
    if scene.show_text {
        text.sections[0].value = format!(
            "UPPER: {:3.0} px   LOWER: {:3.0} px   VEL: {:4.2} px/frame",
            arm.upper_length(),
            arm.lower_length(),
            agent.velocity().length()
        );
    } else {
        text.sections[0].value = String::new();
    }
}

pub(crate) fn to_domain_position(position: Vec2, window: &Window) -> Vector2 {
    Vector2::new(
        (position.x + window.width() / 2.0) as f64,
        (window.height() / 2.0 - position.y) as f64,
    )
}

pub(crate) fn to_world_position(position: Vector2, window: &Window) -> Vec2 {
    let (x, y): (f32, f32) = position.into();
    Vec2::new(x - window.width() / 2.0, window.height() / 2.0 - y)
}

fn to_world_delta(delta: Vector2) -> Vec2 {
    let (x, y): (f32, f32) = delta.into();
    Vec2::new(x, -y)
}
