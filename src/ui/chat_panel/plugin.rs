// src/ui/chat_panel/plugin.rs
//
// ChatPanelPlugin coordinates the 2D chat log display.

use bevy::prelude::*;

use super::components::ChatPanelSettings;
use super::systems::{append_chat_messages, refresh_chat_input_line, spawn_chat_panel};

pub struct ChatPanelPlugin;

impl Plugin for ChatPanelPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ChatPanelSettings::default())
            .add_systems(Startup, spawn_chat_panel)
            .add_systems(Update, (append_chat_messages, refresh_chat_input_line));
    }
}
