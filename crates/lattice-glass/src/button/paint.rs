//! Paint parameter derivation and the render surface contract.
//!
//! The glass button never produces pixels. On each repaint it derives a
//! [`PaintParams`] from its state and replays it onto a [`GlassRenderer`],
//! which is implemented by whatever back end the host uses.

use super::border::{BorderSides, SideBorders};
use super::fade::FADE_MAX;
use super::state::ButtonState;
use crate::types::{Color, Rect, Size};

/// Inset of the focus rectangle from each edge.
pub const FOCUS_RECT_INSET: f32 = 7.0;

/// Base colors of the four hover overlay layers, outermost first.
pub const HOVER_BASE_COLORS: [Color; 4] = [
    Color::from_rgb8(255, 255, 255),
    Color::from_rgb8(255, 255, 255),
    Color::from_rgb8(210, 235, 255),
    Color::from_rgb8(160, 210, 255),
];

/// Alpha multipliers applied to the fade coefficient for each hover layer.
pub const HOVER_ALPHA_FACTORS: [u16; 4] = [12, 12, 10, 5];

/// The back end that turns paint parameters into pixels.
///
/// Calls arrive in a fixed order: glass background, borders, pushed or hover
/// overlay, then the focus rectangle.
pub trait GlassRenderer {
    /// Fill the control with the glass background.
    fn paint_glass_effect(&mut self, base_color: Color, width: f32, height: f32);

    /// Draw gradient borders on the selected edges.
    fn paint_gradient_borders(
        &mut self,
        top_color: Color,
        bottom_color: Color,
        width: f32,
        height: f32,
        border_width: u32,
        sides: BorderSides,
    );

    /// Draw the depressed overlay.
    fn paint_pushed_effect(&mut self, width: f32, height: f32);

    /// Draw the hover glow from four alpha-weighted layers.
    fn paint_hover_effect(
        &mut self,
        c1: Color,
        c2: Color,
        c3: Color,
        c4: Color,
        width: f32,
        height: f32,
    );

    /// Draw a dashed keyboard focus indicator.
    fn paint_focus_rect(&mut self, rect: Rect);
}

/// The overlay drawn above the glass background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Pushed,
    Hover([Color; 4]),
}

/// Border parameters forwarded from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderPaint {
    pub top_color: Color,
    pub bottom_color: Color,
    pub width: u32,
    pub sides: BorderSides,
}

/// Everything a render pass needs, derived from button state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintParams {
    pub size: Size,
    pub base_color: Color,
    pub borders: Option<BorderPaint>,
    pub overlay: Overlay,
    pub focus_rect: Option<Rect>,
}

impl PaintParams {
    /// Derive paint parameters.
    ///
    /// `fading` is whether the fade animator is currently running; a fading
    /// button keeps its hover overlay after the pointer has left.
    pub fn derive(
        state: &ButtonState,
        coefficient: u8,
        fading: bool,
        size: Size,
        base_color: Color,
        borders: &SideBorders,
    ) -> Self {
        let overlay = if state.is_pushed() {
            Overlay::Pushed
        } else if state.is_enabled() && (state.is_hovering() || fading) {
            Overlay::Hover(hover_colors(coefficient))
        } else {
            Overlay::None
        };

        let focus_rect = if state.has_focus() && state.shows_focus_cues() {
            focus_rect(size)
        } else {
            None
        };

        let borders = borders.is_visible().then(|| BorderPaint {
            top_color: borders.top_color(),
            bottom_color: borders.bottom_color(),
            width: borders.width(),
            sides: borders.sides(),
        });

        Self {
            size,
            base_color,
            borders,
            overlay,
            focus_rect,
        }
    }

    /// Replay these parameters onto a render surface.
    pub fn render<R: GlassRenderer + ?Sized>(&self, renderer: &mut R) {
        let Size { width, height } = self.size;

        renderer.paint_glass_effect(self.base_color, width, height);

        if let Some(b) = self.borders {
            renderer.paint_gradient_borders(
                b.top_color,
                b.bottom_color,
                width,
                height,
                b.width,
                b.sides,
            );
        }

        match self.overlay {
            Overlay::None => {}
            Overlay::Pushed => renderer.paint_pushed_effect(width, height),
            Overlay::Hover([c1, c2, c3, c4]) => {
                renderer.paint_hover_effect(c1, c2, c3, c4, width, height)
            }
        }

        if let Some(rect) = self.focus_rect {
            renderer.paint_focus_rect(rect);
        }
    }
}

/// Hover layer colors for a fade coefficient.
pub fn hover_colors(coefficient: u8) -> [Color; 4] {
    let coefficient = u16::from(coefficient.min(FADE_MAX));
    std::array::from_fn(|i| {
        let alpha = (HOVER_ALPHA_FACTORS[i] * coefficient).min(255) as u8;
        HOVER_BASE_COLORS[i].with_alpha(alpha)
    })
}

/// The focus indicator rectangle for a control of `size`.
///
/// Inset on every side and one pixel smaller again so the dashed stroke stays
/// off the right and bottom edge pixels. `None` when nothing would remain.
pub fn focus_rect(size: Size) -> Option<Rect> {
    let inset = Rect::from_size(size).deflate(FOCUS_RECT_INSET);
    let rect = Rect::new(
        inset.left(),
        inset.top(),
        inset.width() - 1.0,
        inset.height() - 1.0,
    );
    (!rect.is_empty()).then_some(rect)
}

/// One recorded render surface call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintCommand {
    GlassEffect {
        base_color: Color,
        width: f32,
        height: f32,
    },
    GradientBorders {
        top_color: Color,
        bottom_color: Color,
        width: f32,
        height: f32,
        border_width: u32,
        sides: BorderSides,
    },
    PushedEffect {
        width: f32,
        height: f32,
    },
    HoverEffect {
        colors: [Color; 4],
        width: f32,
        height: f32,
    },
    FocusRect(Rect),
}

/// A [`GlassRenderer`] that records calls instead of drawing.
///
/// Useful for snapshot tests and for hosts that batch drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub commands: Vec<PaintCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the recorded commands, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl GlassRenderer for RecordingRenderer {
    fn paint_glass_effect(&mut self, base_color: Color, width: f32, height: f32) {
        self.commands.push(PaintCommand::GlassEffect {
            base_color,
            width,
            height,
        });
    }

    fn paint_gradient_borders(
        &mut self,
        top_color: Color,
        bottom_color: Color,
        width: f32,
        height: f32,
        border_width: u32,
        sides: BorderSides,
    ) {
        self.commands.push(PaintCommand::GradientBorders {
            top_color,
            bottom_color,
            width,
            height,
            border_width,
            sides,
        });
    }

    fn paint_pushed_effect(&mut self, width: f32, height: f32) {
        self.commands.push(PaintCommand::PushedEffect { width, height });
    }

    fn paint_hover_effect(
        &mut self,
        c1: Color,
        c2: Color,
        c3: Color,
        c4: Color,
        width: f32,
        height: f32,
    ) {
        self.commands.push(PaintCommand::HoverEffect {
            colors: [c1, c2, c3, c4],
            width,
            height,
        });
    }

    fn paint_focus_rect(&mut self, rect: Rect) {
        self.commands.push(PaintCommand::FocusRect(rect));
    }
}
