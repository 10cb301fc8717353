//! Serializable glass button style.
//!
//! A [`GlassButtonStyle`] collects every host-configurable property so it can
//! be kept in a TOML file:
//!
//! ```toml
//! base_color = "#2A2D34"
//! fore_color = "#FFFFFF"
//! disabled_fore_color = "#808080"
//! text_align = "middle-center"
//! toggle_mode = false
//! fade_interval_ms = 20
//!
//! [side_borders]
//! enabled = true
//! width = 2
//! top_color = "#FFFFFF60"
//! bottom_color = "#00000060"
//! sides = { left = true, right = true }
//! ```
//!
//! Missing keys fall back to the defaults. Loading validates the same rules
//! the widget setters enforce, so a style that loads can always be applied.

use std::time::Duration;

use lattice_glass_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::button::{check_interval, BorderSides, SideBorders, TextAlign, DEFAULT_FADE_INTERVAL};
use crate::error::GlassButtonResult;
use crate::types::Color;

/// Default glass background color.
pub const DEFAULT_BASE_COLOR: Color = Color::from_rgb8(0x2A, 0x2D, 0x34);

/// Default label color while enabled.
pub const DEFAULT_FORE_COLOR: Color = Color::WHITE;

/// Default label color while disabled.
pub const DEFAULT_DISABLED_FORE_COLOR: Color = Color::GRAY;

/// Side border section of a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SideBordersStyle {
    pub enabled: bool,
    /// Kept signed so out-of-range values reach validation instead of
    /// failing as a type error.
    pub width: i64,
    pub top_color: Color,
    pub bottom_color: Color,
    pub sides: BorderSides,
}

impl Default for SideBordersStyle {
    fn default() -> Self {
        SideBorders::default().into()
    }
}

impl From<SideBorders> for SideBordersStyle {
    fn from(borders: SideBorders) -> Self {
        Self {
            enabled: borders.is_enabled(),
            width: i64::from(borders.width()),
            top_color: borders.top_color(),
            bottom_color: borders.bottom_color(),
            sides: borders.sides(),
        }
    }
}

impl SideBordersStyle {
    /// Build validated border configuration.
    pub fn to_side_borders(&self) -> GlassButtonResult<SideBorders> {
        let mut borders = SideBorders::new();
        borders.set_width(self.width)?;
        borders.set_enabled(self.enabled);
        borders.set_top_color(self.top_color);
        borders.set_bottom_color(self.bottom_color);
        borders.set_sides(self.sides);
        Ok(borders)
    }
}

/// All configurable appearance and behaviour of a glass button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlassButtonStyle {
    pub base_color: Color,
    pub fore_color: Color,
    pub disabled_fore_color: Color,
    pub text_align: TextAlign,
    pub toggle_mode: bool,
    pub fade_interval_ms: u64,
    pub side_borders: SideBordersStyle,
}

impl Default for GlassButtonStyle {
    fn default() -> Self {
        Self {
            base_color: DEFAULT_BASE_COLOR,
            fore_color: DEFAULT_FORE_COLOR,
            disabled_fore_color: DEFAULT_DISABLED_FORE_COLOR,
            text_align: TextAlign::default(),
            toggle_mode: false,
            fade_interval_ms: DEFAULT_FADE_INTERVAL.as_millis() as u64,
            side_borders: SideBordersStyle::default(),
        }
    }
}

impl GlassButtonStyle {
    /// Check the rules the widget setters enforce.
    pub fn validate(&self) -> GlassButtonResult<()> {
        check_interval(self.fade_interval())?;
        self.side_borders.to_side_borders()?;
        Ok(())
    }

    /// The fade interval as a [`Duration`].
    pub fn fade_interval(&self) -> Duration {
        Duration::from_millis(self.fade_interval_ms)
    }

    /// Parse and validate a style from TOML.
    pub fn from_toml_str(text: &str) -> GlassButtonResult<Self> {
        let style: Self = toml::from_str(text)?;
        style.validate()?;
        tracing::debug!(target: targets::STYLE, ?style, "style loaded");
        Ok(style)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> GlassButtonResult<String> {
        Ok(toml::to_string(self)?)
    }
}
