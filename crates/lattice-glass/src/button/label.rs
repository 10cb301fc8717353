//! The text label that overlays the glass button.
//!
//! The label fills the whole control and is the surface pointer input lands
//! on; the button forwards those events into its state machine. The label
//! itself only carries what text rendering needs: the text (with its
//! mnemonic resolved), a foreground color, and an alignment.

use serde::{Deserialize, Serialize};

use crate::mnemonic::{parse_mnemonic, MnemonicText};
use crate::types::{Color, Point, Rect, Size};

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// Placement of the label text within the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    #[default]
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl TextAlign {
    pub fn horizontal(self) -> HorizontalAlign {
        match self {
            Self::TopLeft | Self::MiddleLeft | Self::BottomLeft => HorizontalAlign::Left,
            Self::TopCenter | Self::MiddleCenter | Self::BottomCenter => HorizontalAlign::Center,
            Self::TopRight | Self::MiddleRight | Self::BottomRight => HorizontalAlign::Right,
        }
    }

    pub fn vertical(self) -> VerticalAlign {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => VerticalAlign::Top,
            Self::MiddleLeft | Self::MiddleCenter | Self::MiddleRight => VerticalAlign::Middle,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => VerticalAlign::Bottom,
        }
    }
}

/// Label sub-element of a glass button.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    parsed: MnemonicText,
    fore_color: Color,
    text_align: TextAlign,
    geometry: Rect,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            parsed: parse_mnemonic(&text),
            text,
            fore_color: Color::WHITE,
            text_align: TextAlign::default(),
            geometry: Rect::default(),
        }
    }

    /// The raw text, including any `&` mnemonic marker.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text as it should be drawn.
    pub fn display_text(&self) -> &str {
        &self.parsed.display_text
    }

    /// The mnemonic character (lowercase), if the text has one.
    pub fn mnemonic(&self) -> Option<char> {
        self.parsed.mnemonic
    }

    /// Byte index of the mnemonic in [`display_text`](Self::display_text), for underlining.
    pub fn mnemonic_index(&self) -> Option<usize> {
        self.parsed.mnemonic_index
    }

    /// Returns `true` if the text changed.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.text == text {
            return false;
        }
        self.parsed = parse_mnemonic(&text);
        self.text = text;
        true
    }

    /// Check whether `ch` is this label's mnemonic.
    pub fn is_mnemonic(&self, ch: char) -> bool {
        self.parsed.matches(ch)
    }

    pub fn fore_color(&self) -> Color {
        self.fore_color
    }

    pub fn set_fore_color(&mut self, color: Color) {
        self.fore_color = color;
    }

    pub fn text_align(&self) -> TextAlign {
        self.text_align
    }

    pub fn set_text_align(&mut self, align: TextAlign) {
        self.text_align = align;
    }

    /// The label's rectangle in button-local coordinates.
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Stretch the label over a button of the given size.
    pub fn fill(&mut self, size: Size) {
        self.geometry = Rect::from_size(size);
    }

    /// Hit test in button-local coordinates.
    pub fn contains(&self, point: Point) -> bool {
        self.geometry.contains(point)
    }
}
