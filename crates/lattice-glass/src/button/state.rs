//! Interaction state for the glass button.
//!
//! [`ButtonState`] holds the discrete flags and implements the transition
//! table. It has no side effects of its own: every transition reports an
//! [`Outcome`] and the owning [`GlassButton`](super::GlassButton) turns that
//! into animator, repaint, and signal effects.

/// The visual state derived from the interaction flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualState {
    /// Not pushed and not hovered.
    Idle,
    /// Pointer or focus is over the button.
    Hovering,
    /// Held down during a momentary press.
    Pressed,
    /// Latched down in toggle mode.
    PressedToggled,
}

/// Result of feeding an input transition to [`ButtonState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The button is disabled; nothing changed.
    Ignored,
    /// The input was consumed. Flags may or may not have changed.
    Handled,
    /// A momentary press/release cycle completed and `clicked` must fire.
    Activated,
}

impl Outcome {
    /// Whether the input was consumed.
    pub fn is_handled(self) -> bool {
        !matches!(self, Outcome::Ignored)
    }
}

/// Interaction flags owned by a single button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pushed: bool,
    hovering: bool,
    toggle_mode: bool,
    enabled: bool,
    focused: bool,
    visible: bool,
    show_focus_cues: bool,
}

impl Default for ButtonState {
    fn default() -> Self {
        Self {
            pushed: false,
            hovering: false,
            toggle_mode: false,
            enabled: true,
            focused: false,
            visible: true,
            show_focus_cues: true,
        }
    }
}

impl ButtonState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pushed(&self) -> bool {
        self.pushed
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn is_toggle_mode(&self) -> bool {
        self.toggle_mode
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn shows_focus_cues(&self) -> bool {
        self.show_focus_cues
    }

    /// Derive the current visual state.
    pub fn visual_state(&self) -> VisualState {
        match (self.pushed, self.toggle_mode, self.hovering) {
            (true, true, _) => VisualState::PressedToggled,
            (true, false, _) => VisualState::Pressed,
            (false, _, true) => VisualState::Hovering,
            (false, _, false) => VisualState::Idle,
        }
    }

    /// Whether the button is latched down in toggle mode.
    ///
    /// Hover changes are suppressed while latched.
    pub fn is_latched(&self) -> bool {
        self.pushed && self.toggle_mode
    }

    /// Pointer enter/leave or focus gain/loss.
    pub fn set_hover(&mut self, hovering: bool) -> Outcome {
        if !self.enabled {
            return Outcome::Ignored;
        }
        if !self.is_latched() {
            self.hovering = hovering;
        }
        Outcome::Handled
    }

    /// Pointer down, or Space/Enter down.
    pub fn press(&mut self) -> Outcome {
        if !self.enabled {
            return Outcome::Ignored;
        }
        self.pushed = !self.is_latched();
        Outcome::Handled
    }

    /// Pointer up, or Space/Enter up.
    ///
    /// In toggle mode the latch set by [`press`](Self::press) is kept and no
    /// activation is reported.
    pub fn release(&mut self) -> Outcome {
        if !self.enabled {
            return Outcome::Ignored;
        }
        if self.toggle_mode {
            return Outcome::Handled;
        }
        self.pushed = false;
        self.hovering = true;
        Outcome::Activated
    }

    /// Switch toggle mode. The pushed flag is left as is.
    pub fn set_toggle_mode(&mut self, toggle_mode: bool) {
        self.toggle_mode = toggle_mode;
    }

    /// Set the pushed flag from outside the state machine.
    ///
    /// Only honoured in toggle mode; returns whether it was applied.
    pub fn set_pushed(&mut self, pushed: bool) -> bool {
        if !self.toggle_mode {
            return false;
        }
        self.pushed = pushed;
        true
    }

    /// Returns `true` if the enabled flag changed.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        std::mem::replace(&mut self.enabled, enabled) != enabled
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_show_focus_cues(&mut self, show: bool) {
        self.show_focus_cues = show;
    }
}
