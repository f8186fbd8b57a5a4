//! Error types surfaced by the bubble presenter.
use std::fmt;

/// Failures raised while presenting a chat bubble. All of them are logged and
/// non-fatal; the render loop continues and the chat panel keeps the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentError {
    /// The configured wrap width cannot produce any line.
    InvalidWrapWidth { max_chars: usize },
    /// A bubble scene or font asset failed to load or parse.
    AssetLoadFailure { path: String, message: String },
}

impl PresentError {
    pub fn invalid_wrap_width(max_chars: usize) -> Self {
        Self::InvalidWrapWidth { max_chars }
    }

    pub fn asset_load_failure(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssetLoadFailure {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWrapWidth { max_chars } => {
                write!(f, "Invalid wrap width: {} (must be at least 1)", max_chars)
            }
            Self::AssetLoadFailure { path, message } => {
                write!(f, "Asset load failure for {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for PresentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_the_offending_values() {
        let width = PresentError::invalid_wrap_width(0);
        assert!(width.to_string().contains('0'));

        let asset = PresentError::asset_load_failure("fonts/missing.ttf", "not found");
        let rendered = asset.to_string();
        assert!(rendered.contains("fonts/missing.ttf"));
        assert!(rendered.contains("not found"));
    }
}
