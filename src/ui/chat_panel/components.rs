// src/ui/chat_panel/components.rs
//
// Components and resources for the chat panel.

use bevy::prelude::*;

/// Marker component for the scrolling message list container.
#[derive(Component, Debug)]
pub struct ChatMessageList;

/// Marker component for the text node mirroring the input buffer.
#[derive(Component, Debug)]
pub struct ChatInputLine;

/// Resource containing layout settings for the chat panel.
#[derive(Resource, Debug)]
pub struct ChatPanelSettings {
    /// Panel width (pixels); the 3D viewport shares the window with this.
    pub panel_width: f32,

    /// Padding inside the panel (pixels).
    pub padding: f32,

    /// Vertical gap between message rows (pixels).
    pub row_gap: f32,

    /// Font size for speaker names (points).
    pub name_font_size: f32,

    /// Font size for message text and the input line (points).
    pub text_font_size: f32,
}

impl Default for ChatPanelSettings {
    fn default() -> Self {
        Self {
            panel_width: 500.0,
            padding: 12.0,
            row_gap: 8.0,
            name_font_size: 14.0,
            text_font_size: 16.0,
        }
    }
}
