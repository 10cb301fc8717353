//! Core systems for Lattice Glass.
//!
//! This crate provides the foundational pieces the glass button is built on:
//!
//! - **Signal/Slot System**: Ordered fan-out notification ([`Signal`])
//! - **Timers**: One-shot and repeating timers driven by the host loop
//!   ([`TimerManager`], [`SharedTimerManager`])
//! - **Errors**: [`CoreError`] and friends
//! - **Logging**: `tracing` target names in [`logging::targets`]
//!
//! # Signal/Slot Example
//!
//! ```
//! use lattice_glass_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Timer Example
//!
//! ```
//! use lattice_glass_core::TimerManager;
//! use std::time::{Duration, Instant};
//!
//! let mut timers = TimerManager::new();
//! let id = timers.start_repeating(Duration::from_millis(20))?;
//!
//! let fired = timers.process_expired_at(Instant::now() + Duration::from_millis(25));
//! assert_eq!(fired, vec![id]);
//! # Ok::<(), lattice_glass_core::CoreError>(())
//! ```

mod error;
pub mod logging;
pub mod signal;
mod timer;

pub use error::{CoreError, Result, SignalError, TimerError};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use timer::{SharedTimerManager, TimerId, TimerKind, TimerManager};
