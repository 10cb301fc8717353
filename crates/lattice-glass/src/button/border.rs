//! Side border configuration.

use lattice_glass_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::error::{GlassButtonError, GlassButtonResult};
use crate::types::Color;

/// Which edges receive a gradient border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderSides {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl BorderSides {
    pub const NONE: Self = Self {
        top: false,
        right: false,
        bottom: false,
        left: false,
    };

    pub const ALL: Self = Self {
        top: true,
        right: true,
        bottom: true,
        left: true,
    };

    /// Left and right edges only.
    pub const LEFT_RIGHT: Self = Self {
        left: true,
        right: true,
        ..Self::NONE
    };

    /// Top and bottom edges only.
    pub const TOP_BOTTOM: Self = Self {
        top: true,
        bottom: true,
        ..Self::NONE
    };

    /// Check if any edge is selected.
    pub fn any(&self) -> bool {
        self.top || self.right || self.bottom || self.left
    }
}

/// Gradient borders drawn along selected edges of the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideBorders {
    enabled: bool,
    width: u32,
    top_color: Color,
    bottom_color: Color,
    sides: BorderSides,
}

impl Default for SideBorders {
    fn default() -> Self {
        Self {
            enabled: false,
            width: 1,
            top_color: Color::WHITE.with_alpha(0x60),
            bottom_color: Color::BLACK.with_alpha(0x60),
            sides: BorderSides::ALL,
        }
    }
}

impl SideBorders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Border width in pixels (always at least 1).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Set the border width.
    ///
    /// Widths below 1 are rejected and the previous width is kept.
    pub fn set_width(&mut self, width: i64) -> GlassButtonResult<()> {
        self.width = validate_width(width)?;
        Ok(())
    }

    pub fn top_color(&self) -> Color {
        self.top_color
    }

    pub fn set_top_color(&mut self, color: Color) {
        self.top_color = color;
    }

    pub fn bottom_color(&self) -> Color {
        self.bottom_color
    }

    pub fn set_bottom_color(&mut self, color: Color) {
        self.bottom_color = color;
    }

    pub fn sides(&self) -> BorderSides {
        self.sides
    }

    pub fn set_sides(&mut self, sides: BorderSides) {
        self.sides = sides;
    }

    /// Whether anything would be drawn.
    pub fn is_visible(&self) -> bool {
        self.enabled && self.sides.any()
    }
}

/// Check a border width, converting it to the stored representation.
pub(crate) fn validate_width(width: i64) -> GlassButtonResult<u32> {
    match u32::try_from(width) {
        Ok(w) if w >= 1 => Ok(w),
        _ => {
            tracing::debug!(target: targets::STYLE, width, "rejected border width");
            Err(GlassButtonError::InvalidBorderWidth(width))
        }
    }
}
