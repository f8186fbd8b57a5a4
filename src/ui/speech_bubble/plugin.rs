// src/ui/speech_bubble/plugin.rs
//
// Plugin registration for the bubble presenter.

use bevy::prelude::*;

use super::components::BubblePresenter;
use super::systems::{attach_loaded_bubble, attach_loaded_text, begin_bubble_presentation};

/// Plugin presenting submitted chat lines as a world-space bubble and text
/// pair above the character model.
///
/// # System Ordering
///
/// 1. `begin_bubble_presentation` - consumes ChatSubmitted, supersedes the
///    previous pair
/// 2. `attach_loaded_bubble` - waits for the bubble scene and anchor bounds
/// 3. `attach_loaded_text` - waits for the font
///
/// # Dependencies
///
/// - `ChatPlugin` must be registered before this plugin (provides
///   ChatSubmitted)
/// - `CharacterPlugin` must be registered (provides CharacterModel and
///   CharacterBounds)
pub struct SpeechBubblePlugin;

impl Plugin for SpeechBubblePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BubblePresenter>().add_systems(
            Update,
            (
                begin_bubble_presentation,
                attach_loaded_bubble,
                attach_loaded_text,
            )
                .chain(),
        );

        info!("SpeechBubblePlugin registered");
    }
}
