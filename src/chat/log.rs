//! Chat log resource and the system recording submissions into it.
use bevy::{
    ecs::message::{MessageReader, MessageWriter},
    prelude::*,
};

use super::events::{ChatMessageAdded, ChatSubmitted};

/// Who authored a chat log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Agent,
}

impl Speaker {
    /// Human-readable label for the panel and logs.
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Agent => "Agent",
        }
    }
}

/// A single recorded chat line.
#[derive(Debug, Clone)]
pub struct ChatEntry {
    pub speaker: Speaker,
    pub text: String,
}

/// Ordered history of the conversation, session-local only.
#[derive(Resource, Debug, Default)]
pub struct ChatLog {
    entries: Vec<ChatEntry>,
}

impl ChatLog {
    pub fn push(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.entries.push(ChatEntry {
            speaker,
            text: text.into(),
        });
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }
}

/// Records each submission as a user line plus the agent's echoed reply.
///
/// The log is the 2D presentation channel; it must keep working even when the
/// 3D bubble cannot be shown.
pub fn record_chat_messages(
    mut log: ResMut<ChatLog>,
    mut submissions: MessageReader<ChatSubmitted>,
    mut added: MessageWriter<ChatMessageAdded>,
) {
    for submission in submissions.read() {
        for speaker in [Speaker::User, Speaker::Agent] {
            log.push(speaker, submission.text.clone());
            added.write(ChatMessageAdded {
                speaker,
                text: submission.text.clone(),
            });
        }
        debug!("Chat log now holds {} entries", log.entries().len());
    }
}
