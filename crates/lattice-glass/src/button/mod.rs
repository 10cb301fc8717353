//! The glass button and its parts.
//!
//! - [`ButtonState`]: interaction flags and the transition table
//! - [`FadeAnimator`]: timer-driven hover intensity
//! - [`SideBorders`]: gradient edge configuration
//! - [`Label`]: text, mnemonic, color and alignment
//! - [`PaintParams`] / [`GlassRenderer`]: what to draw and who draws it
//! - [`GlassButton`]: the widget that owns all of the above

mod border;
mod fade;
mod glass_button;
mod label;
mod paint;
mod state;

pub use border::{BorderSides, SideBorders};
pub use fade::{
    DEFAULT_FADE_INTERVAL, FADE_MAX, FADE_STEP, FadeAnimator, MAX_FADE_INTERVAL, MIN_FADE_INTERVAL,
};
pub(crate) use fade::check_interval;
pub use glass_button::GlassButton;
pub use label::{HorizontalAlign, Label, TextAlign, VerticalAlign};
pub use paint::{
    BorderPaint, FOCUS_RECT_INSET, GlassRenderer, HOVER_ALPHA_FACTORS, HOVER_BASE_COLORS,
    Overlay, PaintCommand, PaintParams, RecordingRenderer, focus_rect, hover_colors,
};
pub use state::{ButtonState, Outcome, VisualState};
