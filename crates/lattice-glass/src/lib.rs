//! Lattice Glass: a glass-effect push button.
//!
//! The button is renderer agnostic. It consumes input events, runs a small
//! interaction state machine, animates a hover glow through a host-driven
//! timer, and on request describes what to draw to a [`GlassRenderer`].
//!
//! # Example
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! use lattice_glass::button::{GlassButton, RecordingRenderer};
//! use lattice_glass::events::{KeyboardModifiers, MouseButton, MousePressEvent, MouseReleaseEvent};
//! use lattice_glass::{Point, Size};
//!
//! let mut button = GlassButton::new("&Apply").with_size(Size::new(120.0, 32.0));
//!
//! let clicks = Arc::new(AtomicUsize::new(0));
//! let counter = clicks.clone();
//! button.clicked.connect(move |_| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! let pos = Point::new(10.0, 10.0);
//! button.handle_mouse_press(&MousePressEvent::new(MouseButton::Left, pos, KeyboardModifiers::NONE));
//! button.handle_mouse_release(&MouseReleaseEvent::new(MouseButton::Left, pos, KeyboardModifiers::NONE));
//! assert_eq!(clicks.load(Ordering::SeqCst), 1);
//!
//! let mut renderer = RecordingRenderer::new();
//! button.paint(&mut renderer);
//! assert!(!renderer.commands.is_empty());
//! ```
//!
//! # Styles
//!
//! Appearance can be loaded from TOML with [`GlassButtonStyle::from_toml_str`]
//! and applied with [`GlassButton::apply_style`](button::GlassButton::apply_style).
//!
//! [`GlassRenderer`]: button::GlassRenderer

pub mod button;
mod error;
pub mod events;
pub mod mnemonic;
pub mod style;
mod types;

pub use error::{GlassButtonError, GlassButtonResult};
pub use style::{GlassButtonStyle, SideBordersStyle};
pub use types::{Color, Point, Rect, Size};

pub use lattice_glass_core::{
    ConnectionId, SharedTimerManager, Signal, TimerId, TimerManager, logging,
};
