//! Error types for the glass button crate.

use std::time::Duration;

use thiserror::Error;

/// Errors raised by glass button configuration.
///
/// All of these are caller-correctable: the rejected value is never applied,
/// so the widget keeps its previous configuration.
#[derive(Error, Debug)]
pub enum GlassButtonError {
    /// Side border width must be at least one pixel.
    #[error("border width must be at least 1, got {0}")]
    InvalidBorderWidth(i64),

    /// Fade animation interval is outside `MIN_FADE_INTERVAL..=MAX_FADE_INTERVAL`.
    #[error("fade interval must be between 1 ms and 60 s, got {0:?}")]
    InvalidFadeInterval(Duration),

    /// A color string could not be parsed.
    #[error("invalid color {0:?}, expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    /// A style document is not valid TOML or has the wrong shape.
    #[error("failed to parse style: {0}")]
    StyleParse(#[from] toml::de::Error),

    /// A style could not be serialized.
    #[error("failed to serialize style: {0}")]
    StyleSerialize(#[from] toml::ser::Error),
}

/// Result type for glass button operations.
pub type GlassButtonResult<T> = Result<T, GlassButtonError>;
