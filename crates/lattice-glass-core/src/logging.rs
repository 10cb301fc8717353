//! Logging facilities for Lattice Glass.
//!
//! Lattice Glass uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("lattice_glass=trace")
//!         .init();
//! }
//! ```
//!
//! The constants below name the targets used by each subsystem so filters can
//! be written without guessing module paths. Every event in both crates is
//! emitted under one of them.

/// Span names used throughout Lattice Glass for tracing.
pub mod span_names {
    /// Button paint span.
    pub const PAINT: &str = "lattice_glass::paint";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "lattice_glass_core";
    /// Timer system target.
    pub const TIMER: &str = "lattice_glass_core::timer";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "lattice_glass_core::signal";
    /// Button interaction state machine target.
    pub const BUTTON: &str = "lattice_glass::button";
    /// Fade animator target.
    pub const FADE: &str = "lattice_glass::button::fade";
    /// Style loading and validation target.
    pub const STYLE: &str = "lattice_glass::style";
}
