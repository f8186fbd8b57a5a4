//! Application settings: asset paths and chat presentation tuning.
use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

const CONFIG_PATH: &str = "config/catchat.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawConfig {
    #[serde(default)]
    assets: RawAssetSection,
    #[serde(default)]
    chat: RawChatSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawAssetSection {
    model_scene: String,
    bubble_scene: String,
    font: String,
    hidden_model_nodes: Vec<String>,
}

impl Default for RawAssetSection {
    fn default() -> Self {
        Self {
            model_scene: "3d_models/cat/scene.gltf".to_string(),
            bubble_scene: "3d_models/bubble_speech/scene.gltf".to_string(),
            font: "fonts/helvetiker_regular.ttf".to_string(),
            hidden_model_nodes: vec!["Boitan".to_string(), "Camoue".to_string()],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawChatSection {
    max_line_chars: usize,
}

impl Default for RawChatSection {
    fn default() -> Self {
        Self { max_line_chars: 50 }
    }
}

/// Startup configuration shared by the character, chat, and bubble modules.
///
/// The wrap width is deliberately not clamped here; an invalid value is
/// reported when a message is submitted, so the chat log keeps working.
#[derive(Resource, Debug, Clone)]
pub struct AppSettings {
    /// Character scene asset path, relative to the assets root.
    pub model_scene: String,

    /// Speech bubble scene asset path.
    pub bubble_scene: String,

    /// Font used for the world-space bubble text.
    pub font: String,

    /// Named nodes stripped from the character scene after load.
    pub hidden_model_nodes: Vec<String>,

    /// Maximum characters per wrapped bubble line.
    pub max_line_chars: usize,
}

impl AppSettings {
    /// Loads the config file, falling back to defaults on any failure.
    ///
    /// Called from `main` before the app (and its logger) exists, so the
    /// fallback is reported on stderr.
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(data) => match toml::from_str::<RawConfig>(&data) {
                Ok(raw) => raw.into(),
                Err(err) => {
                    eprintln!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        CONFIG_PATH, err
                    );
                    RawConfig::default().into()
                }
            },
            Err(err) => {
                eprintln!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                RawConfig::default().into()
            }
        }
    }
}

impl From<RawConfig> for AppSettings {
    fn from(value: RawConfig) -> Self {
        let assets = value.assets;
        let chat = value.chat;

        Self {
            model_scene: assets.model_scene,
            bubble_scene: assets.bubble_scene,
            font: assets.font,
            hidden_model_nodes: assets.hidden_model_nodes,
            max_line_chars: chat.max_line_chars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let settings: AppSettings = toml::from_str::<RawConfig>("").unwrap().into();
        assert_eq!(settings.model_scene, "3d_models/cat/scene.gltf");
        assert_eq!(settings.bubble_scene, "3d_models/bubble_speech/scene.gltf");
        assert_eq!(settings.font, "fonts/helvetiker_regular.ttf");
        assert_eq!(settings.hidden_model_nodes, vec!["Boitan", "Camoue"]);
        assert_eq!(settings.max_line_chars, 50);
    }

    #[test]
    fn partial_config_overrides_selected_fields() {
        let data = r#"
            [assets]
            bubble_scene = "3d_models/other_bubble/scene.gltf"

            [chat]
            max_line_chars = 32
        "#;
        let settings: AppSettings = toml::from_str::<RawConfig>(data).unwrap().into();
        assert_eq!(settings.bubble_scene, "3d_models/other_bubble/scene.gltf");
        assert_eq!(settings.max_line_chars, 32);
        // Untouched sections keep their defaults.
        assert_eq!(settings.model_scene, "3d_models/cat/scene.gltf");
    }

    #[test]
    fn zero_wrap_width_is_preserved_for_later_validation() {
        let data = "[chat]\nmax_line_chars = 0\n";
        let settings: AppSettings = toml::from_str::<RawConfig>(data).unwrap().into();
        assert_eq!(settings.max_line_chars, 0);
    }
}
