//! Chat module hosting input capture, the message log, and submission events.
pub mod events;
pub mod input;
pub mod log;
pub mod plugin;

pub use plugin::ChatPlugin;
