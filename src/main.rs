use bevy::prelude::*;

mod character;
mod chat;
mod settings;
mod ui;
mod world;

use crate::{
    character::CharacterPlugin,
    chat::ChatPlugin,
    settings::AppSettings,
    ui::{ChatPanelPlugin, SpeechBubblePlugin},
    world::WorldPlugin,
};

fn main() {
    let settings = AppSettings::load_or_default();

    App::new()
        .insert_resource(settings)
        .add_plugins((
            DefaultPlugins,
            WorldPlugin,
            CharacterPlugin,
            ChatPlugin,
            ChatPanelPlugin,    // After ChatPlugin to receive ChatMessageAdded
            SpeechBubblePlugin, // After ChatPlugin to receive ChatSubmitted
        ))
        .run();
}
