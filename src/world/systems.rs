//! Systems for the world module.
use bevy::{
    ecs::message::MessageReader,
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};

use crate::world::components::OrbitCamera;

const CAMERA_START_POS: Vec3 = Vec3::new(0.0, 25.0, 72.0);
const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 15.0, 0.0);
const CAMERA_FOV_DEGREES: f32 = 80.0;
const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 200.0;

const SUN_POSITION: Vec3 = Vec3::new(0.0, 0.0, 2.0);
const SUN_ILLUMINANCE: f32 = 10_000.0;

const MIN_PITCH: f32 = -1.54;
const MAX_PITCH: f32 = 1.54;
const MIN_RADIUS: f32 = 1.0;

/// Spawns the initial scene: directional light and an orbit camera.
pub fn spawn_scene_environment(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            color: Color::WHITE,
            illuminance: SUN_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(SUN_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let camera = OrbitCamera::looking_from(CAMERA_START_POS, CAMERA_TARGET);
    let mut camera_transform = Transform::from_translation(CAMERA_START_POS);
    camera_transform.look_at(CAMERA_TARGET, Vec3::Y);

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        camera_transform,
        camera,
    ));
}

/// Orbits the camera around its target while the left mouse button is held,
/// and zooms with the scroll wheel.
pub fn orbit_camera_update(
    mut motion_events: MessageReader<MouseMotion>,
    mut wheel_events: MessageReader<MouseWheel>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    time: Res<Time>,
    mut query: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let mut cumulative_delta = Vec2::ZERO;
    for ev in motion_events.read() {
        cumulative_delta += ev.delta;
    }
    if !mouse_buttons.pressed(MouseButton::Left) {
        cumulative_delta = Vec2::ZERO;
    }

    let mut scroll = 0.0;
    for ev in wheel_events.read() {
        scroll += ev.y;
    }

    if cumulative_delta == Vec2::ZERO && scroll == 0.0 {
        return;
    }

    if let Ok((mut orbit, mut transform)) = query.single_mut() {
        orbit.yaw -= cumulative_delta.x * orbit.rotate_sensitivity * time.delta_secs();
        orbit.pitch -= cumulative_delta.y * orbit.rotate_sensitivity * time.delta_secs();
        orbit.pitch = orbit.pitch.clamp(MIN_PITCH, MAX_PITCH);
        orbit.radius = (orbit.radius - scroll * orbit.zoom_sensitivity).max(MIN_RADIUS);

        let target = orbit.target;
        transform.translation = orbit.position();
        transform.look_at(target, Vec3::Y);
    }
}
