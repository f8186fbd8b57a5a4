//! Always-focused chat input line fed from raw keyboard messages.
use bevy::{
    ecs::message::{MessageReader, MessageWriter},
    input::keyboard::{Key, KeyboardInput},
    prelude::*,
};

use super::events::ChatSubmitted;

/// The text currently typed on the input line.
#[derive(Resource, Debug, Default)]
pub struct ChatInputBuffer {
    text: String,
}

impl ChatInputBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn push_str(&mut self, fragment: &str) {
        self.text.push_str(fragment);
    }

    pub fn pop(&mut self) {
        self.text.pop();
    }

    /// Clears the buffer and returns its contents.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}

/// Routes key presses into the input buffer and submits on Enter.
///
/// Enter submits whatever is in the buffer, including an empty line; the
/// wrapper and placement code handle that case downstream.
pub fn capture_chat_input(
    mut buffer: ResMut<ChatInputBuffer>,
    mut keys: MessageReader<KeyboardInput>,
    mut submissions: MessageWriter<ChatSubmitted>,
) {
    for key in keys.read() {
        if !key.state.is_pressed() {
            continue;
        }

        match &key.logical_key {
            Key::Enter => {
                let text = buffer.take();
                info!("Chat submitted: \"{}\"", text);
                submissions.write(ChatSubmitted { text });
            }
            Key::Backspace => buffer.pop(),
            Key::Space => buffer.push_str(" "),
            Key::Character(input) => buffer.push_str(input.as_str()),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_edits_accumulate() {
        let mut buffer = ChatInputBuffer::default();
        buffer.push_str("meo");
        buffer.push_str("ww");
        buffer.pop();
        assert_eq!(buffer.text(), "meow");
    }

    #[test]
    fn take_drains_the_buffer() {
        let mut buffer = ChatInputBuffer::default();
        buffer.push_str("hello there");
        assert_eq!(buffer.take(), "hello there");
        assert_eq!(buffer.text(), "");
    }

    #[test]
    fn pop_on_empty_buffer_is_a_noop() {
        let mut buffer = ChatInputBuffer::default();
        buffer.pop();
        assert_eq!(buffer.text(), "");
    }
}
