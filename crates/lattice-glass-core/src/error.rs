//! Error types for Lattice Glass core systems.

use thiserror::Error;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Timer-related error.
    #[error("timer error: {0}")]
    Timer(#[from] TimerError),
    /// Signal-related error.
    #[error("signal error: {0}")]
    Signal(#[from] SignalError),
}

/// Timer-specific errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// The timer ID is invalid or has already been removed.
    #[error("invalid or expired timer ID")]
    InvalidTimerId,
    /// The interval is too long to schedule from the current instant.
    #[error("timer interval overflows the clock")]
    IntervalOverflow,
}

/// Signal-specific errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalError {
    /// The connection ID is invalid or has already been disconnected.
    #[error("invalid or disconnected connection ID")]
    InvalidConnection,
}

/// A specialized Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
