//! Bevy 2D playback of a solved trajectory.
//!
//! The full trajectory is computed up front; the app then only reads
//! it. Each frame is a pure lookup: frame index -> positions at that
//! sample. Playback stops on the last sample.

use bevy::math::primitives::Circle;
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};

use crate::simulation::integrator::{rk4_solve, Trajectory};
use crate::simulation::scenario::Scenario;

#[derive(Component)]
struct BodyIndex(pub usize);

/// Solved trajectory plus the current playback position.
#[derive(Resource)]
struct Playback {
    trajectory: Trajectory,
    frame: usize,
}

const SCALE: f32 = 200.0; // pixels per AU
const BODY_SCALE: f32 = 5.0; // pixels per display-diameter unit

pub fn run_2d(scenario: Scenario) {
    // Solve before the app starts; the viewer never touches the solver again
    let t_samples = scenario.parameters.sample_times();
    let trajectory = rk4_solve(&scenario.system, &scenario.forces, &t_samples, scenario.parameters.h0);

    println!(
        "run_2d: starting Bevy 2D viewer with {} bodies over {} frames",
        scenario.system.len(),
        trajectory.len()
    );

    App::new()
        .insert_resource(Playback { trajectory, frame: 0 })
        .insert_resource(scenario)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_bodies_system)
        .add_systems(Update, (advance_frame_system, sync_transforms_system, draw_orbits_system))
        .run();
}

fn setup_bodies_system(
    mut commands: Commands,
    scenario: Res<Scenario>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    // 2D camera
    commands.spawn(Camera2dBundle::default());

    for (i, body) in scenario.system.bodies.iter().enumerate() {
        let radius_screen = (body.diameter as f32 * BODY_SCALE).max(2.0);
        let x = body.x.x as f32 * SCALE;
        let y = body.x.y as f32 * SCALE;

        commands.spawn((
            MaterialMesh2dBundle {
                mesh: Mesh2dHandle(meshes.add(Circle::new(radius_screen))),
                material: materials.add(ColorMaterial::from(display_color(&body.color))),
                transform: Transform::from_xyz(x, y, 1.0),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

/// Step the playback one sample per rendered frame, clamping at the end.
fn advance_frame_system(mut playback: ResMut<Playback>) {
    if playback.frame + 1 < playback.trajectory.len() {
        playback.frame += 1;
    }
}

fn sync_transforms_system(playback: Res<Playback>, mut query: Query<(&BodyIndex, &mut Transform)>) {
    for (BodyIndex(i), mut transform) in &mut query {
        let p = playback.trajectory.position(playback.frame, *i);
        transform.translation.x = p.x as f32 * SCALE;
        transform.translation.y = p.y as f32 * SCALE;
    }
}

/// Draw each body's full orbit path as a faint polyline.
fn draw_orbits_system(playback: Res<Playback>, mut gizmos: Gizmos) {
    let traj = &playback.trajectory;
    let color = Color::rgba(1.0, 1.0, 1.0, 0.25);

    for i in 0..traj.n_bodies() {
        for k in 1..traj.len() {
            let a = traj.position(k - 1, i);
            let b = traj.position(k, i);
            gizmos.line_2d(
                Vec2::new(a.x as f32, a.y as f32) * SCALE,
                Vec2::new(b.x as f32, b.y as f32) * SCALE,
                color,
            );
        }
    }
}

/// Map the scenario's named color tag to a drawable color.
/// Unknown names fall back to white.
fn display_color(name: &str) -> Color {
    match name {
        "gold" => Color::rgb(1.0, 0.84, 0.0),
        "gray" => Color::rgb(0.5, 0.5, 0.5),
        "goldenrod" => Color::rgb(0.85, 0.65, 0.13),
        "darkturquoise" => Color::rgb(0.0, 0.81, 0.82),
        "firebrick" => Color::rgb(0.70, 0.13, 0.13),
        _ => Color::WHITE,
    }
}
