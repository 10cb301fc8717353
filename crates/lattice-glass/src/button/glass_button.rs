//! The glass button widget.
//!
//! [`GlassButton`] ties the pieces of this module together: it feeds input
//! into [`ButtonState`], drives the [`FadeAnimator`] from a shared timer
//! manager, keeps the [`Label`] in sync with configuration, and derives
//! [`PaintParams`] when the host asks it to paint.
//!
//! # Signals
//!
//! - `clicked` after a completed momentary press (never in toggle mode)
//! - `entered` / `left` when pointer or focus hover changes
//! - `repaint_requested` whenever the visual output may have changed
//!
//! # Driving the fade
//!
//! The button starts a repeating timer in its [`SharedTimerManager`] when a
//! hover fade begins. The host polls the manager and routes each expired id
//! back through [`GlassButton::handle_timer`] (or a [`WidgetEvent::Timer`]).
//!
//! ```
//! use lattice_glass::button::GlassButton;
//! use lattice_glass::events::{EnterEvent, WidgetEvent};
//! use lattice_glass::Point;
//!
//! let mut button = GlassButton::new("&Save");
//! button.handle_event(&mut WidgetEvent::Enter(EnterEvent::new(Point::ZERO)));
//! assert!(button.is_animating());
//!
//! while let Some(id) = button.fade_timer_id() {
//!     button.handle_timer(id);
//! }
//! assert_eq!(button.coefficient(), 10);
//! ```

use std::fmt;
use std::time::Duration;

use lattice_glass_core::logging::{span_names, targets};
use lattice_glass_core::{SharedTimerManager, Signal, TimerId};

use super::border::{BorderSides, SideBorders};
use super::fade::FadeAnimator;
use super::label::{Label, TextAlign};
use super::paint::{GlassRenderer, PaintParams};
use super::state::{ButtonState, Outcome, VisualState};
use crate::error::GlassButtonResult;
use crate::events::{
    FocusInEvent, FocusOutEvent, FocusReason, KeyPressEvent, KeyReleaseEvent, MouseButton,
    MousePressEvent, MouseReleaseEvent, WidgetEvent,
};
use crate::style::{
    GlassButtonStyle, DEFAULT_BASE_COLOR, DEFAULT_DISABLED_FORE_COLOR, DEFAULT_FORE_COLOR,
};
use crate::types::{Color, Size};

/// A push button rendered as a translucent glass surface with an animated
/// hover glow.
pub struct GlassButton {
    state: ButtonState,
    fade: FadeAnimator,
    timers: SharedTimerManager,
    label: Label,
    size: Size,
    base_color: Color,
    fore_color: Color,
    disabled_fore_color: Color,
    borders: SideBorders,
    needs_repaint: bool,

    /// Emitted after a momentary press/release completes.
    pub clicked: Signal<()>,

    /// Emitted when the pointer enters or focus is gained.
    pub entered: Signal<()>,

    /// Emitted when the pointer leaves or focus is lost.
    pub left: Signal<()>,

    /// Emitted whenever the button needs to be repainted.
    pub repaint_requested: Signal<()>,
}

impl GlassButton {
    /// Create a button with its own timer manager.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_timers(text, SharedTimerManager::new())
    }

    /// Create a button that schedules its fade on a host-provided timer manager.
    pub fn with_timers(text: impl Into<String>, timers: SharedTimerManager) -> Self {
        let mut label = Label::new(text);
        label.set_fore_color(DEFAULT_FORE_COLOR);

        Self {
            state: ButtonState::new(),
            fade: FadeAnimator::default(),
            timers,
            label,
            size: Size::default(),
            base_color: DEFAULT_BASE_COLOR,
            fore_color: DEFAULT_FORE_COLOR,
            disabled_fore_color: DEFAULT_DISABLED_FORE_COLOR,
            borders: SideBorders::default(),
            needs_repaint: true,
            clicked: Signal::new(),
            entered: Signal::new(),
            left: Signal::new(),
            repaint_requested: Signal::new(),
        }
    }

    /// Set the size using builder pattern.
    pub fn with_size(mut self, size: Size) -> Self {
        self.resize(size);
        self
    }

    /// Set toggle mode using builder pattern.
    pub fn with_toggle_mode(mut self, toggle_mode: bool) -> Self {
        self.set_toggle_mode(toggle_mode);
        self
    }

    /// Set the glass base color using builder pattern.
    pub fn with_base_color(mut self, color: Color) -> Self {
        self.set_base_color(color);
        self
    }

    /// Set the text alignment using builder pattern.
    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.set_text_align(align);
        self
    }

    /// Apply a style using builder pattern.
    pub fn with_style(mut self, style: &GlassButtonStyle) -> GlassButtonResult<Self> {
        self.apply_style(style)?;
        Ok(self)
    }

    // =========================================================================
    // State
    // =========================================================================

    pub fn state(&self) -> &ButtonState {
        &self.state
    }

    pub fn visual_state(&self) -> VisualState {
        self.state.visual_state()
    }

    pub fn is_pushed(&self) -> bool {
        self.state.is_pushed()
    }

    pub fn is_hovering(&self) -> bool {
        self.state.is_hovering()
    }

    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    pub fn has_focus(&self) -> bool {
        self.state.has_focus()
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    pub fn is_toggle_mode(&self) -> bool {
        self.state.is_toggle_mode()
    }

    /// Enable or disable the button.
    ///
    /// The label switches between the normal and disabled foreground colors.
    /// Pushed and hover flags are left as they are.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !self.state.set_enabled(enabled) {
            return;
        }
        tracing::trace!(target: targets::BUTTON, enabled, "enabled changed");
        self.sync_label_color();
        self.request_repaint();
    }

    /// Switch between momentary and toggle behaviour.
    pub fn set_toggle_mode(&mut self, toggle_mode: bool) {
        if self.state.is_toggle_mode() == toggle_mode {
            return;
        }
        self.state.set_toggle_mode(toggle_mode);
        self.request_repaint();
    }

    /// Latch or release a toggle button.
    ///
    /// Ignored outside toggle mode. Returns whether the value was applied.
    pub fn set_pushed(&mut self, pushed: bool) -> bool {
        if !self.state.set_pushed(pushed) {
            return false;
        }
        tracing::trace!(target: targets::BUTTON, pushed, "pushed set");
        self.request_repaint();
        true
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.state.is_visible() == visible {
            return;
        }
        self.state.set_visible(visible);
        self.request_repaint();
    }

    /// Whether a focused button draws its focus rectangle.
    pub fn set_show_focus_cues(&mut self, show: bool) {
        if self.state.shows_focus_cues() == show {
            return;
        }
        self.state.set_show_focus_cues(show);
        self.request_repaint();
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    pub fn size(&self) -> Size {
        self.size
    }

    /// Resize the button. The label is stretched to cover it.
    pub fn resize(&mut self, size: Size) {
        if self.size == size {
            return;
        }
        self.size = size;
        self.label.fill(size);
        self.request_repaint();
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn text(&self) -> &str {
        self.label.text()
    }

    /// Set the label text. An `&` marks the following character as mnemonic.
    pub fn set_text(&mut self, text: impl Into<String>) {
        if self.label.set_text(text) {
            self.request_repaint();
        }
    }

    pub fn text_align(&self) -> TextAlign {
        self.label.text_align()
    }

    pub fn set_text_align(&mut self, align: TextAlign) {
        if self.label.text_align() != align {
            self.label.set_text_align(align);
            self.request_repaint();
        }
    }

    pub fn base_color(&self) -> Color {
        self.base_color
    }

    pub fn set_base_color(&mut self, color: Color) {
        if self.base_color != color {
            self.base_color = color;
            self.request_repaint();
        }
    }

    /// Label color while enabled.
    pub fn fore_color(&self) -> Color {
        self.fore_color
    }

    pub fn set_fore_color(&mut self, color: Color) {
        self.fore_color = color;
        self.sync_label_color();
        self.request_repaint();
    }

    /// Label color while disabled.
    pub fn disabled_fore_color(&self) -> Color {
        self.disabled_fore_color
    }

    pub fn set_disabled_fore_color(&mut self, color: Color) {
        self.disabled_fore_color = color;
        self.sync_label_color();
        self.request_repaint();
    }

    pub fn side_borders(&self) -> &SideBorders {
        &self.borders
    }

    pub fn set_side_borders_enabled(&mut self, enabled: bool) {
        self.borders.set_enabled(enabled);
        self.request_repaint();
    }

    /// Set the side border width. Widths below 1 are rejected unchanged.
    pub fn set_border_width(&mut self, width: i64) -> GlassButtonResult<()> {
        self.borders.set_width(width)?;
        self.request_repaint();
        Ok(())
    }

    pub fn set_border_top_color(&mut self, color: Color) {
        self.borders.set_top_color(color);
        self.request_repaint();
    }

    pub fn set_border_bottom_color(&mut self, color: Color) {
        self.borders.set_bottom_color(color);
        self.request_repaint();
    }

    pub fn set_border_sides(&mut self, sides: BorderSides) {
        self.borders.set_sides(sides);
        self.request_repaint();
    }

    /// Fade tick interval. A running fade keeps its interval until restarted.
    pub fn fade_interval(&self) -> Duration {
        self.fade.interval()
    }

    /// Set the fade tick interval, between `MIN_FADE_INTERVAL` and
    /// `MAX_FADE_INTERVAL` inclusive.
    pub fn set_fade_interval(&mut self, interval: Duration) -> GlassButtonResult<()> {
        self.fade.set_interval(interval)
    }

    /// Apply every property of `style`.
    ///
    /// The style is validated first; on error nothing is changed.
    pub fn apply_style(&mut self, style: &GlassButtonStyle) -> GlassButtonResult<()> {
        style.validate()?;
        let borders = style.side_borders.to_side_borders()?;
        self.fade.set_interval(style.fade_interval())?;

        self.base_color = style.base_color;
        self.fore_color = style.fore_color;
        self.disabled_fore_color = style.disabled_fore_color;
        self.label.set_text_align(style.text_align);
        self.state.set_toggle_mode(style.toggle_mode);
        self.borders = borders;
        self.sync_label_color();

        tracing::debug!(target: targets::STYLE, text = self.label.text(), "style applied");
        self.request_repaint();
        Ok(())
    }

    /// Snapshot the current configuration as a style.
    pub fn style(&self) -> GlassButtonStyle {
        GlassButtonStyle {
            base_color: self.base_color,
            fore_color: self.fore_color,
            disabled_fore_color: self.disabled_fore_color,
            text_align: self.label.text_align(),
            toggle_mode: self.state.is_toggle_mode(),
            fade_interval_ms: u64::try_from(self.fade.interval().as_millis()).unwrap_or(u64::MAX),
            side_borders: self.borders.into(),
        }
    }

    fn sync_label_color(&mut self) {
        let color = if self.state.is_enabled() {
            self.fore_color
        } else {
            self.disabled_fore_color
        };
        self.label.set_fore_color(color);
    }

    // =========================================================================
    // Fade
    // =========================================================================

    /// Current hover fade coefficient (`0..=10`).
    pub fn coefficient(&self) -> u8 {
        self.fade.coefficient()
    }

    pub fn is_animating(&self) -> bool {
        self.fade.is_running()
    }

    /// The repeating timer driving the fade, if it is running.
    pub fn fade_timer_id(&self) -> Option<TimerId> {
        self.fade.timer_id()
    }

    pub fn timers(&self) -> &SharedTimerManager {
        &self.timers
    }

    fn start_fade(&mut self) {
        self.fade.start(
            self.state.is_hovering(),
            self.state.is_pushed(),
            &self.timers,
        );
    }

    /// Handle an expired timer.
    ///
    /// Returns `false` for timers that do not belong to this button.
    pub fn handle_timer(&mut self, id: TimerId) -> bool {
        if self.fade.timer_id() != Some(id) {
            return false;
        }
        self.fade.tick(
            self.state.is_hovering(),
            self.state.is_pushed(),
            &self.timers,
        );
        self.request_repaint();
        true
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Route an event to the matching handler.
    ///
    /// The event is accepted when handled.
    #[tracing::instrument(skip_all, target = "lattice_glass::button", level = "trace")]
    pub fn handle_event(&mut self, event: &mut WidgetEvent) -> bool {
        let handled = match event {
            WidgetEvent::MousePress(e) => self.handle_mouse_press(e),
            WidgetEvent::MouseRelease(e) => self.handle_mouse_release(e),
            WidgetEvent::Enter(_) => self.handle_enter(),
            WidgetEvent::Leave(_) => self.handle_leave(),
            WidgetEvent::FocusIn(e) => self.handle_focus_in(e),
            WidgetEvent::FocusOut(e) => self.handle_focus_out(e),
            WidgetEvent::KeyPress(e) => self.handle_key_press(e),
            WidgetEvent::KeyRelease(e) => self.handle_key_release(e),
            WidgetEvent::Mnemonic(e) => self.handle_mnemonic(e.ch),
            WidgetEvent::Timer(e) => self.handle_timer(e.id),
        };
        if handled {
            event.accept();
        }
        handled
    }

    /// Pointer entered the label.
    pub fn handle_enter(&mut self) -> bool {
        self.hover_changed(true)
    }

    /// Pointer left the label.
    pub fn handle_leave(&mut self) -> bool {
        self.hover_changed(false)
    }

    pub fn handle_focus_in(&mut self, event: &FocusInEvent) -> bool {
        self.focus_changed(true, event.reason)
    }

    pub fn handle_focus_out(&mut self, event: &FocusOutEvent) -> bool {
        self.focus_changed(false, event.reason)
    }

    /// Handle a mouse press. Only a left press inside the label presses the
    /// glass.
    pub fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left || !self.label.contains(event.local_pos) {
            return false;
        }
        self.press_start()
    }

    /// Handle a mouse release. The release ends a press wherever the pointer
    /// is, so a latch or pressed look is never left behind.

    pub fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        self.press_end()
    }

    /// Handle a key press.
    ///
    /// Space and Enter press the button when no modifier is held. Auto-repeat
    /// presses are consumed without effect.
    pub fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        if !self.state.is_enabled() || !event.key.is_activation() || event.modifiers.any() {
            return false;
        }
        if event.is_repeat {
            return true;
        }
        self.press_start()
    }

    pub fn handle_key_release(&mut self, event: &KeyReleaseEvent) -> bool {
        if !self.state.is_enabled() || !event.key.is_activation() || event.modifiers.any() {
            return false;
        }
        self.press_end()
    }

    /// Handle a mnemonic (Alt+letter) dispatched by the host.
    ///
    /// Matches the label's `&` marked character case-insensitively and moves
    /// focus to the button.
    pub fn handle_mnemonic(&mut self, ch: char) -> bool {
        if !self.state.is_visible() || !self.state.is_enabled() || !self.label.is_mnemonic(ch) {
            return false;
        }
        tracing::trace!(target: targets::BUTTON, %ch, "mnemonic");
        if !self.state.has_focus() {
            self.focus_changed(true, FocusReason::Shortcut);
        }
        self.request_repaint();
        true
    }

    /// Click the button programmatically.
    ///
    /// Runs a full press/release cycle, so a toggle button flips its latch
    /// and does not emit `clicked`.
    pub fn perform_click(&mut self) -> bool {
        self.press_start() && self.press_end()
    }

    fn hover_changed(&mut self, hovering: bool) -> bool {
        if self.state.set_hover(hovering) == Outcome::Ignored {
            return false;
        }
        tracing::trace!(target: targets::BUTTON, hovering, state = ?self.state.visual_state(), "hover changed");
        self.start_fade();
        self.request_repaint();
        if hovering {
            self.entered.emit(());
        } else {
            self.left.emit(());
        }
        true
    }

    /// Losing focus is recorded even while disabled so no focus cue outlives
    /// it. Gaining focus needs the button enabled.
    fn focus_changed(&mut self, focused: bool, reason: FocusReason) -> bool {
        if focused && !self.state.is_enabled() {
            return false;
        }
        if self.state.has_focus() != focused {
            tracing::trace!(target: targets::BUTTON, focused, ?reason, "focus changed");
            self.state.set_focused(focused);
            self.request_repaint();
        }
        self.hover_changed(focused)
    }

    fn press_start(&mut self) -> bool {
        if !self.state.is_enabled() {
            return false;
        }
        self.fade.stop(&self.timers);
        self.state.press();
        tracing::trace!(target: targets::BUTTON, state = ?self.state.visual_state(), "press start");
        self.request_repaint();
        true
    }

    fn press_end(&mut self) -> bool {
        match self.state.release() {
            Outcome::Ignored => false,
            Outcome::Handled => true,
            Outcome::Activated => {
                tracing::trace!(target: targets::BUTTON, text = self.label.text(), "clicked");
                self.start_fade();
                self.request_repaint();
                self.clicked.emit(());
                true
            }
        }
    }

    // =========================================================================
    // Painting
    // =========================================================================

    /// Whether a repaint has been requested since the last [`paint`](Self::paint).
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Mark the button dirty and notify the host.
    pub fn request_repaint(&mut self) {
        self.needs_repaint = true;
        self.repaint_requested.emit(());
    }

    /// Derive paint parameters from the current state.
    pub fn paint_params(&self) -> PaintParams {
        PaintParams::derive(
            &self.state,
            self.fade.coefficient(),
            self.fade.is_running(),
            self.size,
            self.base_color,
            &self.borders,
        )
    }

    /// Paint onto `renderer` and clear the repaint flag.
    ///
    /// Invisible buttons draw nothing. Returns the parameters that were used.
    pub fn paint<R: GlassRenderer + ?Sized>(&mut self, renderer: &mut R) -> PaintParams {
        let params = self.paint_params();
        if self.state.is_visible() {
            let _span = tracing::trace_span!(target: targets::BUTTON, span_names::PAINT).entered();
            params.render(renderer);
        }
        self.needs_repaint = false;
        params
    }
}

impl fmt::Debug for GlassButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlassButton")
            .field("text", &self.label.text())
            .field("state", &self.state)
            .field("fade", &self.fade)
            .field("size", &self.size)
            .field("needs_repaint", &self.needs_repaint)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(GlassButton: Send, Sync);
