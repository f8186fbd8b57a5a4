//! WorldPlugin coordinates scene background, lighting, and camera controls.
use bevy::prelude::*;

use crate::world::systems::{orbit_camera_update, spawn_scene_environment};

// Hemisphere-style fill: sky-blue ambient over the white background.
const AMBIENT_COLOR: Color = Color::srgb(0.694, 0.882, 1.0);
const AMBIENT_BRIGHTNESS: f32 = 300.0;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::WHITE))
            .insert_resource(AmbientLight {
                color: AMBIENT_COLOR,
                brightness: AMBIENT_BRIGHTNESS,
                ..default()
            })
            .add_systems(Startup, spawn_scene_environment)
            .add_systems(Update, orbit_camera_update);
    }
}
