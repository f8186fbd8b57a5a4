//! Chat plugin wiring the input buffer, log, and messages.
use bevy::prelude::*;

use super::{
    events::{ChatMessageAdded, ChatSubmitted},
    input::{capture_chat_input, ChatInputBuffer},
    log::{record_chat_messages, ChatLog},
};

pub struct ChatPlugin;

impl Plugin for ChatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ChatInputBuffer>()
            .init_resource::<ChatLog>()
            .add_message::<ChatSubmitted>()
            .add_message::<ChatMessageAdded>()
            .add_systems(
                Update,
                (capture_chat_input, record_chat_messages.after(capture_chat_input)),
            );
    }
}
