//! Behavioural tests for the glass button as a host would drive it.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use lattice_glass::button::{
    BorderSides, GlassButton, Overlay, PaintCommand, RecordingRenderer, VisualState,
};
use lattice_glass::events::{
    EnterEvent, FocusInEvent, FocusOutEvent, FocusReason, Key, KeyPressEvent, KeyReleaseEvent,
    KeyboardModifiers, LeaveEvent, MnemonicEvent, MouseButton, MousePressEvent,
    MouseReleaseEvent, TimerEvent, WidgetEvent,
};
use lattice_glass::{
    Color, GlassButtonError, GlassButtonStyle, Point, Rect, SharedTimerManager, Size,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("lattice_glass=trace,lattice_glass_core=trace")
        .with_test_writer()
        .try_init();
}

/// A host loop stand-in: owns the timer manager and a virtual clock.
struct Host {
    timers: SharedTimerManager,
    now: Instant,
}

impl Host {
    fn new() -> Self {
        init_tracing();
        Self {
            timers: SharedTimerManager::new(),
            now: Instant::now(),
        }
    }

    fn button(&self, text: &str) -> GlassButton {
        GlassButton::with_timers(text, self.timers.clone()).with_size(Size::new(100.0, 40.0))
    }

    /// Move the virtual clock forward, never behind the wall clock timers
    /// were scheduled against.
    fn advance(&mut self, by: Duration) {
        self.now = self.now.max(Instant::now()) + by;
    }

    /// Advance the clock by one fade interval and dispatch expired timers.
    fn tick(&mut self, button: &mut GlassButton) {
        self.advance(button.fade_interval());
        for id in self.timers.process_expired_at(self.now) {
            let mut event = WidgetEvent::Timer(TimerEvent::new(id));
            button.handle_event(&mut event);
        }
    }
}

fn count(signal: &lattice_glass::Signal<()>) -> Arc<AtomicUsize> {
    let n = Arc::new(AtomicUsize::new(0));
    let c = n.clone();
    signal.connect(move |_| {
        c.fetch_add(1, Ordering::SeqCst);
    });
    n
}

fn mouse_down() -> WidgetEvent {
    WidgetEvent::MousePress(MousePressEvent::new(
        MouseButton::Left,
        Point::new(5.0, 5.0),
        KeyboardModifiers::NONE,
    ))
}

fn mouse_up() -> WidgetEvent {
    WidgetEvent::MouseRelease(MouseReleaseEvent::new(
        MouseButton::Left,
        Point::new(5.0, 5.0),
        KeyboardModifiers::NONE,
    ))
}

fn key_down(key: Key, modifiers: KeyboardModifiers) -> WidgetEvent {
    WidgetEvent::KeyPress(KeyPressEvent::new(key, modifiers, false))
}

fn key_up(key: Key, modifiers: KeyboardModifiers) -> WidgetEvent {
    WidgetEvent::KeyRelease(KeyReleaseEvent::new(key, modifiers))
}

fn enter() -> WidgetEvent {
    WidgetEvent::Enter(EnterEvent::new(Point::new(1.0, 1.0)))
}

fn leave() -> WidgetEvent {
    WidgetEvent::Leave(LeaveEvent::new())
}

// =========================================================================
// Disabled input
// =========================================================================

#[test]
fn test_disabled_ignores_all_input() {
    let host = Host::new();

    for toggle_mode in [false, true] {
        for pushed in [false, true] {
            let mut button = host.button("OK").with_toggle_mode(toggle_mode);
            button.set_pushed(pushed);
            button.handle_event(&mut enter());
            button.set_enabled(false);

            let clicked = count(&button.clicked);
            let entered = count(&button.entered);
            let left = count(&button.left);
            let before = *button.state();
            let coefficient = button.coefficient();

            for mut event in [
                mouse_down(),
                mouse_up(),
                enter(),
                leave(),
                key_down(Key::Space, KeyboardModifiers::NONE),
                key_up(Key::Space, KeyboardModifiers::NONE),
                WidgetEvent::FocusIn(FocusInEvent::new(FocusReason::Tab)),
                WidgetEvent::FocusOut(FocusOutEvent::new(FocusReason::Tab)),
            ] {
                assert!(!button.handle_event(&mut event));
                assert!(!event.is_accepted());
            }
            assert!(!button.perform_click());

            assert_eq!(*button.state(), before);
            assert_eq!(button.coefficient(), coefficient);
            assert_eq!(clicked.load(Ordering::SeqCst), 0);
            assert_eq!(entered.load(Ordering::SeqCst), 0);
            assert_eq!(left.load(Ordering::SeqCst), 0);
        }
    }
}

#[test]
fn test_enable_keeps_interaction_flags() {
    let host = Host::new();
    let mut button = host.button("OK").with_toggle_mode(true);
    button.handle_event(&mut mouse_down());
    button.handle_event(&mut mouse_up());
    assert!(button.is_pushed());

    button.set_enabled(false);
    button.set_enabled(true);
    assert!(button.is_pushed());
    assert_eq!(button.visual_state(), VisualState::PressedToggled);
}

// =========================================================================
// Press / release
// =========================================================================

#[test]
fn test_toggle_symmetry() {
    let host = Host::new();
    let mut button = host.button("Mute").with_toggle_mode(true);
    let clicked = count(&button.clicked);

    button.handle_event(&mut mouse_down());
    button.handle_event(&mut mouse_up());
    assert!(button.is_pushed());
    assert_eq!(button.visual_state(), VisualState::PressedToggled);

    button.handle_event(&mut mouse_down());
    button.handle_event(&mut mouse_up());
    assert!(!button.is_pushed());

    assert_eq!(clicked.load(Ordering::SeqCst), 0);
}

#[test]
fn test_momentary_click() {
    let host = Host::new();
    let mut button = host.button("OK");
    let clicked = count(&button.clicked);

    let mut down = mouse_down();
    assert!(button.handle_event(&mut down));
    assert!(down.is_accepted());
    assert!(button.is_pushed());
    assert_eq!(button.visual_state(), VisualState::Pressed);
    assert_eq!(clicked.load(Ordering::SeqCst), 0);

    button.handle_event(&mut mouse_up());
    assert!(!button.is_pushed());
    assert!(button.is_hovering());
    assert_eq!(clicked.load(Ordering::SeqCst), 1);
}

#[test]
fn test_keyboard_pointer_equivalence() {
    let host = Host::new();

    for toggle_mode in [false, true] {
        let mut by_mouse = host.button("A").with_toggle_mode(toggle_mode);
        let mut by_key = host.button("B").with_toggle_mode(toggle_mode);
        let mouse_clicks = count(&by_mouse.clicked);
        let key_clicks = count(&by_key.clicked);

        for _ in 0..2 {
            by_mouse.handle_event(&mut mouse_down());
            by_key.handle_event(&mut key_down(Key::Space, KeyboardModifiers::NONE));
            assert_eq!(by_mouse.state(), by_key.state());

            by_mouse.handle_event(&mut mouse_up());
            by_key.handle_event(&mut key_up(Key::Space, KeyboardModifiers::NONE));
            assert_eq!(by_mouse.state(), by_key.state());
        }

        assert_eq!(
            mouse_clicks.load(Ordering::SeqCst),
            key_clicks.load(Ordering::SeqCst)
        );
    }
}

#[test]
fn test_enter_key_activates() {
    let host = Host::new();
    let mut button = host.button("OK");
    let clicked = count(&button.clicked);

    for key in [Key::Enter, Key::NumpadEnter] {
        button.handle_event(&mut key_down(key, KeyboardModifiers::NONE));
        button.handle_event(&mut key_up(key, KeyboardModifiers::NONE));
    }
    assert_eq!(clicked.load(Ordering::SeqCst), 2);
}

#[test]
fn test_modified_keys_ignored() {
    let host = Host::new();
    let mut button = host.button("OK");
    let clicked = count(&button.clicked);

    for modifiers in [
        KeyboardModifiers::SHIFT,
        KeyboardModifiers::CTRL,
        KeyboardModifiers::ALT,
    ] {
        let mut down = key_down(Key::Space, modifiers);
        assert!(!button.handle_event(&mut down));
        assert!(!down.is_accepted());
        assert!(!button.is_pushed());

        assert!(!button.handle_event(&mut key_up(Key::Space, modifiers)));
    }

    assert!(!button.handle_event(&mut key_down(Key::Character('x'), KeyboardModifiers::NONE)));
    assert_eq!(clicked.load(Ordering::SeqCst), 0);
}

#[test]
fn test_hover_suppressed_while_latched() {
    let host = Host::new();
    let mut button = host.button("Pin").with_toggle_mode(true);
    button.handle_event(&mut mouse_down());
    button.handle_event(&mut mouse_up());
    let hovering = button.is_hovering();

    assert!(button.handle_event(&mut leave()));
    assert_eq!(button.is_hovering(), hovering);
    assert!(button.handle_event(&mut enter()));
    assert_eq!(button.is_hovering(), hovering);
}

#[test]
fn test_set_pushed_only_in_toggle_mode() {
    let host = Host::new();
    let mut button = host.button("OK");
    assert!(!button.set_pushed(true));
    assert!(!button.is_pushed());

    button.set_toggle_mode(true);
    assert!(button.set_pushed(true));
    assert!(button.is_pushed());

    // Leaving toggle mode keeps the latch until the next release.
    button.set_toggle_mode(false);
    assert!(button.is_pushed());
    assert_eq!(button.visual_state(), VisualState::Pressed);
}

#[test]
fn test_perform_click() {
    let host = Host::new();
    let mut button = host.button("OK");
    let clicked = count(&button.clicked);
    assert!(button.perform_click());
    assert_eq!(clicked.load(Ordering::SeqCst), 1);

    button.set_toggle_mode(true);
    assert!(button.perform_click());
    assert!(button.is_pushed());
    assert_eq!(clicked.load(Ordering::SeqCst), 1);
}

// =========================================================================
// Fade
// =========================================================================

#[test]
fn test_fade_convergence() {
    let mut host = Host::new();
    let mut button = host.button("OK");
    button.handle_event(&mut enter());

    for n in 1..=8u32 {
        host.tick(&mut button);
        assert_eq!(u32::from(button.coefficient()), (2 * n).min(10));
    }
    assert!(!button.is_animating());
    assert_eq!(host.timers.active_count(), 0);
}

#[test]
fn test_fade_out_after_leave() {
    let mut host = Host::new();
    let mut button = host.button("OK");
    button.handle_event(&mut enter());
    while button.is_animating() {
        host.tick(&mut button);
    }

    button.handle_event(&mut leave());
    assert!(button.is_animating());
    host.tick(&mut button);
    assert_eq!(button.coefficient(), 8);

    // Still fading: the hover overlay stays up while the pointer is away.
    assert!(matches!(button.paint_params().overlay, Overlay::Hover(_)));

    while button.is_animating() {
        host.tick(&mut button);
    }
    assert_eq!(button.coefficient(), 0);
    assert_eq!(button.paint_params().overlay, Overlay::None);
}

#[test]
fn test_press_stops_fade_mid_way() {
    let mut host = Host::new();
    let mut button = host.button("OK");
    button.handle_event(&mut enter());
    host.tick(&mut button);
    host.tick(&mut button);
    assert_eq!(button.coefficient(), 4);

    button.handle_event(&mut mouse_down());
    assert!(!button.is_animating());
    host.tick(&mut button);
    assert_eq!(button.coefficient(), 4);
}

#[test]
fn test_enter_while_fading_keeps_timer() {
    let mut host = Host::new();
    let mut button = host.button("OK");
    button.handle_event(&mut enter());
    host.tick(&mut button);
    let id = button.fade_timer_id();

    button.handle_event(&mut leave());
    button.handle_event(&mut enter());
    assert_eq!(button.fade_timer_id(), id);
    assert_eq!(host.timers.active_count(), 1);
}

#[test]
fn test_every_tick_requests_repaint() {
    let mut host = Host::new();
    let mut button = host.button("OK");
    button.handle_event(&mut enter());
    let repaints = count(&button.repaint_requested);

    host.tick(&mut button);
    host.tick(&mut button);
    assert_eq!(repaints.load(Ordering::SeqCst), 2);
}

#[test]
fn test_buttons_share_timer_manager() {
    let mut host = Host::new();
    let mut a = host.button("A");
    let mut b = host.button("B");
    a.handle_event(&mut enter());
    b.handle_event(&mut enter());
    assert_eq!(host.timers.active_count(), 2);

    host.advance(Duration::from_millis(20));
    for id in host.timers.process_expired_at(host.now) {
        let handled = [a.handle_timer(id), b.handle_timer(id)];
        assert_eq!(handled.iter().filter(|h| **h).count(), 1);
    }
    assert_eq!(a.coefficient(), 2);
    assert_eq!(b.coefficient(), 2);
}

// =========================================================================
// Focus and mnemonics
// =========================================================================

#[test]
fn test_focus_behaves_like_hover() {
    let host = Host::new();
    let mut button = host.button("OK");
    let entered = count(&button.entered);
    let left = count(&button.left);

    button.handle_event(&mut WidgetEvent::FocusIn(FocusInEvent::new(FocusReason::Tab)));
    assert!(button.has_focus());
    assert!(button.is_hovering());
    assert!(button.paint_params().focus_rect.is_some());

    button.handle_event(&mut WidgetEvent::FocusOut(FocusOutEvent::new(FocusReason::Mouse)));
    assert!(!button.has_focus());
    assert!(!button.is_hovering());
    assert!(button.paint_params().focus_rect.is_none());

    assert_eq!(entered.load(Ordering::SeqCst), 1);
    assert_eq!(left.load(Ordering::SeqCst), 1);
}

#[test]
fn test_focus_lost_while_disabled() {
    let host = Host::new();
    let mut button = host.button("OK");
    let left = count(&button.left);

    button.handle_event(&mut WidgetEvent::FocusIn(FocusInEvent::new(FocusReason::Tab)));
    button.set_enabled(false);

    let mut focus_out = WidgetEvent::FocusOut(FocusOutEvent::new(FocusReason::Mouse));
    assert!(!button.handle_event(&mut focus_out));
    assert!(!button.has_focus());
    assert!(button.needs_repaint());
    assert_eq!(left.load(Ordering::SeqCst), 0);

    button.set_enabled(true);
    let mut renderer = RecordingRenderer::new();
    let params = button.paint(&mut renderer);
    assert!(params.focus_rect.is_none());
    assert!(!renderer
        .commands
        .iter()
        .any(|command| matches!(command, PaintCommand::FocusRect(_))));
}

#[test]
fn test_focus_not_gained_while_disabled() {
    let host = Host::new();
    let mut button = host.button("OK");
    button.set_enabled(false);

    assert!(!button.handle_event(&mut WidgetEvent::FocusIn(FocusInEvent::new(FocusReason::Tab))));
    button.set_enabled(true);
    assert!(!button.has_focus());
    assert!(button.paint_params().focus_rect.is_none());
}

#[test]
fn test_mnemonic_event() {
    let host = Host::new();
    let mut button = host.button("Save &As");

    let mut event = WidgetEvent::Mnemonic(MnemonicEvent::new('a'));
    assert!(button.handle_event(&mut event));
    assert!(event.is_accepted());
    assert!(button.has_focus());

    let mut other = host.button("&Close");
    assert!(!other.handle_event(&mut WidgetEvent::Mnemonic(MnemonicEvent::new('a'))));
    assert!(!other.has_focus());

    let mut escaped = host.button("Fish && Chips");
    assert!(!escaped.handle_mnemonic('c'));
}

// =========================================================================
// Notifications
// =========================================================================

#[test]
fn test_subscribers_called_in_order() {
    let host = Host::new();
    let mut button = host.button("OK");
    let log = Arc::new(Mutex::new(Vec::new()));

    let ids: Vec<_> = (0..3)
        .map(|i| {
            let log = log.clone();
            button.clicked.connect(move |_| log.lock().push(i))
        })
        .collect();

    button.perform_click();
    assert_eq!(*log.lock(), vec![0, 1, 2]);

    assert!(button.clicked.disconnect(ids[1]));
    log.lock().clear();
    button.perform_click();
    assert_eq!(*log.lock(), vec![0, 2]);
}

#[test]
fn test_click_without_subscribers() {
    let host = Host::new();
    let mut button = host.button("OK");
    assert!(button.perform_click());
}

// =========================================================================
// Configuration and painting
// =========================================================================

#[test]
fn test_border_rejection() {
    let host = Host::new();
    let mut button = host.button("OK");
    button.set_border_width(3).unwrap();

    for bad in [0, -1, -100] {
        let err = button.set_border_width(bad).unwrap_err();
        assert!(matches!(err, GlassButtonError::InvalidBorderWidth(w) if w == bad));
        assert_eq!(button.side_borders().width(), 3);
    }
    assert_eq!(
        GlassButtonError::InvalidBorderWidth(0).to_string(),
        "border width must be at least 1, got 0"
    );
}

#[test]
fn test_paint_sequence() {
    let mut host = Host::new();
    let mut button = host.button("OK");
    button.set_side_borders_enabled(true);
    button.set_border_sides(BorderSides::LEFT_RIGHT);
    button.handle_event(&mut WidgetEvent::FocusIn(FocusInEvent::new(FocusReason::Tab)));
    while button.is_animating() {
        host.tick(&mut button);
    }

    let mut renderer = RecordingRenderer::new();
    button.paint(&mut renderer);
    let commands = renderer.take();

    assert_eq!(commands.len(), 4);
    assert!(matches!(
        commands[1],
        PaintCommand::GradientBorders {
            sides: BorderSides::LEFT_RIGHT,
            ..
        }
    ));
    match commands[2] {
        PaintCommand::HoverEffect { colors, .. } => {
            let alphas: Vec<u8> = colors.iter().map(|c| c.a).collect();
            assert_eq!(alphas, vec![120, 120, 100, 50]);
        }
        ref other => panic!("expected hover effect, got {other:?}"),
    }
    assert_eq!(
        commands[3],
        PaintCommand::FocusRect(Rect::new(7.0, 7.0, 85.0, 25.0))
    );

    button.handle_event(&mut mouse_down());
    button.paint(&mut renderer);
    assert!(renderer
        .commands
        .iter()
        .any(|c| matches!(c, PaintCommand::PushedEffect { .. })));
}

#[test]
fn test_style_from_toml() {
    let host = Host::new();
    let style = GlassButtonStyle::from_toml_str(
        r##"
        base_color = "#203040"
        disabled_fore_color = "#606060"
        toggle_mode = true
        fade_interval_ms = 10

        [side_borders]
        enabled = true
        width = 2
        "##,
    )
    .unwrap();

    let mut button = host.button("OK").with_style(&style).unwrap();
    assert_eq!(button.base_color(), Color::from_rgb8(0x20, 0x30, 0x40));
    assert!(button.is_toggle_mode());
    assert_eq!(button.fade_interval(), Duration::from_millis(10));
    assert!(button.side_borders().is_enabled());

    button.set_enabled(false);
    assert_eq!(button.label().fore_color(), Color::from_rgb8(0x60, 0x60, 0x60));

    let text = button.style().to_toml_string().unwrap();
    assert_eq!(GlassButtonStyle::from_toml_str(&text).unwrap(), style);
}
