//! Input event types consumed by the glass button.
//!
//! The host toolkit translates its native input into these events and hands
//! them to [`GlassButton::handle_event`](crate::button::GlassButton::handle_event)
//! (or to the individual `handle_*` methods).

use lattice_glass_core::TimerId;

use crate::types::Point;

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held.
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        ..Self::NONE
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        control: true,
        ..Self::NONE
    };

    /// Alt modifier only.
    pub const ALT: Self = Self {
        alt: true,
        ..Self::NONE
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left,
    /// Secondary button (usually right).
    Right,
    /// Middle button (scroll wheel click).
    Middle,
}

/// Keyboard keys relevant to button interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Enter,
    NumpadEnter,
    Tab,
    Escape,
    /// A printable character key.
    Character(char),
    /// Unknown/unmapped key.
    Unknown(u16),
}

impl Key {
    /// Whether this key presses a focused button (Space or either Enter).
    pub fn is_activation(&self) -> bool {
        matches!(self, Key::Space | Key::Enter | Key::NumpadEnter)
    }
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Mouse press event.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(button: MouseButton, local_pos: Point, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
            modifiers,
        }
    }
}

/// Mouse release event.
#[derive(Debug, Clone, Copy)]
pub struct MouseReleaseEvent {
    pub base: EventBase,
    /// The button that was released.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl MouseReleaseEvent {
    /// Create a new mouse release event.
    pub fn new(button: MouseButton, local_pos: Point, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
            modifiers,
        }
    }
}

/// Enter event, sent when the pointer enters the widget area.
#[derive(Debug, Clone, Copy)]
pub struct EnterEvent {
    pub base: EventBase,
    /// The position where the pointer entered.
    pub local_pos: Point,
}

impl EnterEvent {
    pub fn new(local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
        }
    }
}

/// Leave event, sent when the pointer leaves the widget area.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeaveEvent {
    pub base: EventBase,
}

impl LeaveEvent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Reason for focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusReason {
    /// Focus changed due to mouse click.
    Mouse,
    /// Focus changed due to Tab or Shift+Tab.
    Tab,
    /// Focus changed due to a mnemonic (Alt+key).
    Shortcut,
    /// Focus changed programmatically.
    #[default]
    Other,
}

/// Focus in event, sent when the widget gains keyboard focus.
#[derive(Debug, Clone, Copy)]
pub struct FocusInEvent {
    pub base: EventBase,
    pub reason: FocusReason,
}

impl FocusInEvent {
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Focus out event, sent when the widget loses keyboard focus.
#[derive(Debug, Clone, Copy)]
pub struct FocusOutEvent {
    pub base: EventBase,
    pub reason: FocusReason,
}

impl FocusOutEvent {
    pub fn new(reason: FocusReason) -> Self {
        Self {
            base: EventBase::new(),
            reason,
        }
    }
}

/// Key press event.
#[derive(Debug, Clone, Copy)]
pub struct KeyPressEvent {
    pub base: EventBase,
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// Whether this is a key repeat event (key held down).
    pub is_repeat: bool,
}

impl KeyPressEvent {
    pub fn new(key: Key, modifiers: KeyboardModifiers, is_repeat: bool) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
            is_repeat,
        }
    }
}

/// Key release event.
#[derive(Debug, Clone, Copy)]
pub struct KeyReleaseEvent {
    pub base: EventBase,
    /// The key that was released.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl KeyReleaseEvent {
    pub fn new(key: Key, modifiers: KeyboardModifiers) -> Self {
        Self {
            base: EventBase::new(),
            key,
            modifiers,
        }
    }
}

/// Mnemonic event, sent when the host resolves an Alt+character accelerator.
#[derive(Debug, Clone, Copy)]
pub struct MnemonicEvent {
    pub base: EventBase,
    /// The accelerator character typed by the user.
    pub ch: char,
}

impl MnemonicEvent {
    pub fn new(ch: char) -> Self {
        Self {
            base: EventBase::new(),
            ch,
        }
    }
}

/// Timer event, sent when a widget-owned timer fires.
#[derive(Debug, Clone, Copy)]
pub struct TimerEvent {
    pub base: EventBase,
    /// The timer that fired.
    pub id: TimerId,
}

impl TimerEvent {
    pub fn new(id: TimerId) -> Self {
        Self {
            base: EventBase::new(),
            id,
        }
    }
}

/// All events a glass button understands.
#[derive(Debug, Clone, Copy)]
pub enum WidgetEvent {
    MousePress(MousePressEvent),
    MouseRelease(MouseReleaseEvent),
    Enter(EnterEvent),
    Leave(LeaveEvent),
    FocusIn(FocusInEvent),
    FocusOut(FocusOutEvent),
    KeyPress(KeyPressEvent),
    KeyRelease(KeyReleaseEvent),
    Mnemonic(MnemonicEvent),
    Timer(TimerEvent),
}

impl WidgetEvent {
    fn base(&self) -> &EventBase {
        match self {
            Self::MousePress(e) => &e.base,
            Self::MouseRelease(e) => &e.base,
            Self::Enter(e) => &e.base,
            Self::Leave(e) => &e.base,
            Self::FocusIn(e) => &e.base,
            Self::FocusOut(e) => &e.base,
            Self::KeyPress(e) => &e.base,
            Self::KeyRelease(e) => &e.base,
            Self::Mnemonic(e) => &e.base,
            Self::Timer(e) => &e.base,
        }
    }

    fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Self::MousePress(e) => &mut e.base,
            Self::MouseRelease(e) => &mut e.base,
            Self::Enter(e) => &mut e.base,
            Self::Leave(e) => &mut e.base,
            Self::FocusIn(e) => &mut e.base,
            Self::FocusOut(e) => &mut e.base,
            Self::KeyPress(e) => &mut e.base,
            Self::KeyRelease(e) => &mut e.base,
            Self::Mnemonic(e) => &mut e.base,
            Self::Timer(e) => &mut e.base,
        }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base().is_accepted()
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        self.base_mut().accept();
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        self.base_mut().ignore();
    }
}
