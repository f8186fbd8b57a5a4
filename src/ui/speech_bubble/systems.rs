// src/ui/speech_bubble/systems.rs
//
// Systems driving the bubble presenter: submission intake, bubble scene
// attachment, and text attachment, each gated on its asset load.

use bevy::{
    asset::LoadState, ecs::message::MessageReader, gltf::GltfAssetLabel, prelude::*, text::Font,
};

use crate::{
    character::components::{CharacterBounds, CharacterModel},
    chat::events::ChatSubmitted,
    settings::AppSettings,
};

use super::{
    components::{BubblePresenter, PresenterPhase},
    errors::PresentError,
    placement,
    wrap::wrap_message,
};

// Visual constants for the world-space text.
const TEXT_FONT_SIZE: f32 = 2.0;
const TEXT_COLOR: Color = Color::BLACK;

/// Starts a bubble presentation for every submitted chat line.
///
/// The previous pair is despawned immediately; the new bubble appears once
/// its assets arrive. Wrap failures only affect this channel; the chat panel
/// has already recorded the message.
pub fn begin_bubble_presentation(
    mut commands: Commands,
    mut presenter: ResMut<BubblePresenter>,
    settings: Res<AppSettings>,
    asset_server: Res<AssetServer>,
    mut submissions: MessageReader<ChatSubmitted>,
) {
    for submission in submissions.read() {
        let lines = match wrap_message(&submission.text, settings.max_line_chars) {
            Ok(lines) => lines,
            Err(err) => {
                warn!("Cannot present chat bubble: {}", err);
                continue;
            }
        };

        let message_chars = submission.text.chars().count();
        let scene: Handle<Scene> =
            asset_server.load(GltfAssetLabel::Scene(0).from_asset(settings.bubble_scene.clone()));

        let (id, stale) = presenter.begin(message_chars, lines, scene);
        for entity in stale {
            commands.entity(entity).despawn();
        }
        debug!(
            "Bubble submission #{} started ({} chars, wrap width {})",
            id, message_chars, settings.max_line_chars
        );
    }
}

/// Attaches the bubble scene under the character once the asset and the
/// anchor bounds are both available.
pub fn attach_loaded_bubble(
    mut commands: Commands,
    mut presenter: ResMut<BubblePresenter>,
    settings: Res<AppSettings>,
    asset_server: Res<AssetServer>,
    bounds: Option<Res<CharacterBounds>>,
    model: Query<Entity, With<CharacterModel>>,
) {
    let (scene, message_chars, line_count) = match presenter.phase() {
        PresenterPhase::LoadingBubble(pending) => (
            pending.scene.clone(),
            pending.message_chars,
            pending.lines.len(),
        ),
        _ => return,
    };

    if let LoadState::Failed(err) = asset_server.load_state(&scene) {
        warn!(
            "{}",
            PresentError::asset_load_failure(&settings.bubble_scene, err.to_string())
        );
        presenter.fail_bubble();
        return;
    }
    if !asset_server.is_loaded_with_dependencies(&scene) {
        return;
    }

    // The anchor only exists once the character finished loading; until then
    // the submission simply stays pending.
    let Some(bounds) = bounds else {
        return;
    };
    let Ok(root) = model.single() else {
        return;
    };

    let transform = placement::bubble_transform(message_chars, line_count, bounds.max_corner());
    let bubble = commands.spawn((SceneRoot(scene), transform)).id();
    commands.entity(root).add_child(bubble);

    let font: Handle<Font> = asset_server.load(settings.font.clone());
    presenter.bubble_attached(bubble, font, transform);
    info!("Chat bubble attached ({} lines)", line_count);
}

/// Attaches the wrapped text over the bubble once the font is available.
pub fn attach_loaded_text(
    mut commands: Commands,
    mut presenter: ResMut<BubblePresenter>,
    settings: Res<AppSettings>,
    asset_server: Res<AssetServer>,
    model: Query<Entity, With<CharacterModel>>,
) {
    let (font, content, line_count, bubble_transform) = match presenter.phase() {
        PresenterPhase::LoadingText(pending) => (
            pending.font.clone(),
            pending.lines.join("\n"),
            pending.lines.len(),
            pending.bubble_transform,
        ),
        _ => return,
    };

    match asset_server.load_state(&font) {
        LoadState::Failed(err) => {
            // The bubble is already up; losing the glyphs must not tear the
            // rest of the presentation down.
            warn!(
                "{}",
                PresentError::asset_load_failure(&settings.font, err.to_string())
            );
            presenter.fail_text();
            return;
        }
        LoadState::Loaded => {}
        _ => return,
    }

    let Ok(root) = model.single() else {
        return;
    };

    let transform = placement::text_transform(&bubble_transform, line_count);
    let text = commands
        .spawn((
            Text2d::new(content),
            TextFont {
                font,
                font_size: TEXT_FONT_SIZE,
                ..default()
            },
            TextColor(TEXT_COLOR),
            transform,
        ))
        .id();
    commands.entity(root).add_child(text);

    presenter.text_attached(text);
    info!("Chat bubble text attached");
}
