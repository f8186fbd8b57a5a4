//! Plugin registration for character loading systems.
use bevy::prelude::*;

use crate::character::systems::{
    attach_character_animation, finalize_character_scene, spawn_character_model,
};

pub struct CharacterPlugin;

impl Plugin for CharacterPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_character_model).add_systems(
            Update,
            (finalize_character_scene, attach_character_animation),
        );
    }
}
