// src/ui/chat_panel/systems.rs
//
// Systems for spawning the chat panel and keeping it in sync with the log
// and the input buffer.

use bevy::{ecs::message::MessageReader, prelude::*};

use crate::chat::{events::ChatMessageAdded, input::ChatInputBuffer, log::Speaker};

use super::components::{ChatInputLine, ChatMessageList, ChatPanelSettings};

// Visual constants
const PANEL_BACKGROUND: Color = Color::srgba(0.08, 0.08, 0.08, 0.92);
const INPUT_BACKGROUND: Color = Color::srgba(0.15, 0.15, 0.15, 1.0);
const TEXT_COLOR: Color = Color::WHITE;
const USER_NAME_COLOR: Color = Color::srgb(0.55, 0.75, 1.0); // Light blue
const AGENT_NAME_COLOR: Color = Color::srgb(1.0, 0.9, 0.4); // Yellow/gold

/// Spawns the fixed right-hand panel: message list above, input line below.
pub fn spawn_chat_panel(mut commands: Commands, settings: Res<ChatPanelSettings>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                width: Val::Px(settings.panel_width),
                height: Val::Percent(100.0),
                padding: UiRect::all(Val::Px(settings.padding)),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::SpaceBetween,
                ..default()
            },
            BackgroundColor(PANEL_BACKGROUND),
        ))
        .with_children(|panel| {
            panel.spawn((
                Node {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(settings.row_gap),
                    flex_grow: 1.0,
                    overflow: Overflow::clip_y(),
                    ..default()
                },
                ChatMessageList,
            ));

            panel
                .spawn((
                    Node {
                        padding: UiRect::all(Val::Px(settings.padding * 0.5)),
                        margin: UiRect::top(Val::Px(settings.row_gap)),
                        ..default()
                    },
                    BackgroundColor(INPUT_BACKGROUND),
                ))
                .with_children(|row| {
                    row.spawn((
                        Text::new("> "),
                        TextFont {
                            font_size: settings.text_font_size,
                            ..default()
                        },
                        TextColor(TEXT_COLOR),
                        ChatInputLine,
                    ));
                });
        });

    info!("Chat panel created");
}

/// Appends a speaker label + body row for every recorded chat message.
pub fn append_chat_messages(
    mut commands: Commands,
    settings: Res<ChatPanelSettings>,
    mut messages: MessageReader<ChatMessageAdded>,
    list: Query<Entity, With<ChatMessageList>>,
) {
    let Ok(list) = list.single() else {
        return;
    };

    for message in messages.read() {
        let name_color = match message.speaker {
            Speaker::User => USER_NAME_COLOR,
            Speaker::Agent => AGENT_NAME_COLOR,
        };

        let row = commands
            .spawn(Node {
                flex_direction: FlexDirection::Column,
                ..default()
            })
            .with_children(|row| {
                row.spawn((
                    Text::new(message.speaker.label()),
                    TextFont {
                        font_size: settings.name_font_size,
                        ..default()
                    },
                    TextColor(name_color),
                ));
                row.spawn((
                    Text::new(&message.text),
                    TextFont {
                        font_size: settings.text_font_size,
                        ..default()
                    },
                    TextColor(TEXT_COLOR),
                ));
            })
            .id();

        commands.entity(list).add_child(row);
    }
}

/// Mirrors the input buffer onto the input line whenever it changes.
pub fn refresh_chat_input_line(
    buffer: Res<ChatInputBuffer>,
    mut input_line: Query<&mut Text, With<ChatInputLine>>,
) {
    if !buffer.is_changed() {
        return;
    }
    let Ok(mut text) = input_line.single_mut() else {
        return;
    };
    text.0 = format!("> {}", buffer.text());
}
