//! Character module: glTF model loading, anchor bounds, and idle animation.
pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::CharacterPlugin;
