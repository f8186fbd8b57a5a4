//! Messages emitted by the chat module.
use bevy::ecs::message::Message;

use super::log::Speaker;

/// Fired when the user presses Enter on the chat input line.
#[derive(Message, Debug, Clone)]
pub struct ChatSubmitted {
    pub text: String,
}

/// Fired for every entry appended to the chat log.
#[derive(Message, Debug, Clone)]
pub struct ChatMessageAdded {
    pub speaker: Speaker,
    pub text: String,
}
