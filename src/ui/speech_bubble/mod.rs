// src/ui/speech_bubble/mod.rs
//
// Speech bubble module displaying submitted chat lines in world space.
//
// A submission flows through: wrap the message, despawn the previous pair,
// load the bubble scene, place it against the character's bounding box, load
// the font, place the text over the bubble. At most one bubble/text pair is
// ever attached; a newer submission supersedes any in-flight load.

pub mod components;
pub mod errors;
pub mod placement;
pub mod plugin;
pub mod systems;
pub mod wrap;

pub use plugin::SpeechBubblePlugin;
