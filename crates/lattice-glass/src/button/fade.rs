//! Hover fade animation.
//!
//! The animator owns a coefficient in `0..=MAX` that rendering turns into
//! hover overlay alpha. While running it holds a repeating timer in a
//! [`SharedTimerManager`]; each tick moves the coefficient one step toward the
//! resting value for the current hover/pushed combination and the timer is
//! stopped as soon as that value is reached.

use std::time::Duration;

use lattice_glass_core::logging::targets;
use lattice_glass_core::{SharedTimerManager, TimerId};

use crate::error::{GlassButtonError, GlassButtonResult};

/// Fully hovered coefficient.
pub const FADE_MAX: u8 = 10;

/// Coefficient change per tick.
pub const FADE_STEP: u8 = 2;

/// Default tick interval.
pub const DEFAULT_FADE_INTERVAL: Duration = Duration::from_millis(20);

/// Shortest accepted tick interval. Styles store whole milliseconds.
pub const MIN_FADE_INTERVAL: Duration = Duration::from_millis(1);

/// Longest accepted tick interval.
pub const MAX_FADE_INTERVAL: Duration = Duration::from_secs(60);

/// Reject tick intervals outside `MIN_FADE_INTERVAL..=MAX_FADE_INTERVAL`.
pub(crate) fn check_interval(interval: Duration) -> GlassButtonResult<Duration> {
    if (MIN_FADE_INTERVAL..=MAX_FADE_INTERVAL).contains(&interval) {
        Ok(interval)
    } else {
        Err(GlassButtonError::InvalidFadeInterval(interval))
    }
}

/// Drives the hover-intensity coefficient.
#[derive(Debug)]
pub struct FadeAnimator {
    coefficient: u8,
    interval: Duration,
    timer: Option<TimerId>,
}

impl Default for FadeAnimator {
    fn default() -> Self {
        Self {
            coefficient: 0,
            interval: DEFAULT_FADE_INTERVAL,
            timer: None,
        }
    }
}

impl FadeAnimator {
    /// Create an idle animator ticking every `interval`.
    pub fn new(interval: Duration) -> GlassButtonResult<Self> {
        Ok(Self {
            interval: check_interval(interval)?,
            ..Self::default()
        })
    }

    /// Current coefficient in `0..=FADE_MAX`.
    pub fn coefficient(&self) -> u8 {
        self.coefficient
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the tick interval. Takes effect on the next start.
    pub fn set_interval(&mut self, interval: Duration) -> GlassButtonResult<()> {
        self.interval = check_interval(interval)?;
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// The timer driving the animation, if running.
    pub fn timer_id(&self) -> Option<TimerId> {
        self.timer
    }

    /// Whether the coefficient already sits at the resting value.
    pub fn is_at_rest(&self, hovering: bool, pushed: bool) -> bool {
        if hovering {
            self.coefficient == FADE_MAX
        } else if !pushed {
            self.coefficient == 0
        } else {
            true
        }
    }

    /// Start ticking unless already running or already at rest.
    ///
    /// Returns `true` if a timer was started. Starting while running is a
    /// no-op and does not reset the interval.
    pub fn start(&mut self, hovering: bool, pushed: bool, timers: &SharedTimerManager) -> bool {
        if self.is_running() || self.is_at_rest(hovering, pushed) {
            return false;
        }
        match timers.start_repeating(self.interval) {
            Ok(id) => {
                tracing::trace!(target: targets::FADE, ?id, coefficient = self.coefficient, "fade started");
                self.timer = Some(id);
                true
            }
            Err(error) => {
                tracing::debug!(target: targets::FADE, %error, "fade timer not started");
                false
            }
        }
    }

    /// Stop ticking, leaving the coefficient where it is.
    pub fn stop(&mut self, timers: &SharedTimerManager) {
        if let Some(id) = self.timer.take() {
            // The host may already have torn the timer down.
            let _ = timers.stop(id);
            tracing::trace!(target: targets::FADE, ?id, coefficient = self.coefficient, "fade stopped");
        }
    }

    /// Advance the coefficient one step.
    ///
    /// Returns `true` while more steps are needed.
    pub fn step(&mut self, hovering: bool, pushed: bool) -> bool {
        if hovering {
            self.coefficient = (self.coefficient + FADE_STEP).min(FADE_MAX);
            self.coefficient < FADE_MAX
        } else if !pushed {
            self.coefficient = self.coefficient.saturating_sub(FADE_STEP);
            self.coefficient > 0
        } else {
            false
        }
    }

    /// Handle one timer tick: step, and stop the timer once at rest.
    pub fn tick(&mut self, hovering: bool, pushed: bool, timers: &SharedTimerManager) {
        if !self.step(hovering, pushed) {
            self.stop(timers);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_in_converges() {
        let timers = SharedTimerManager::new();
        let mut fade = FadeAnimator::default();
        assert!(fade.start(true, false, &timers));

        for n in 1..=5u8 {
            assert!(fade.is_running());
            fade.tick(true, false, &timers);
            assert_eq!(fade.coefficient(), (2 * n).min(FADE_MAX));
        }
        assert!(!fade.is_running());
        assert_eq!(timers.active_count(), 0);
    }

    #[test]
    fn test_fade_out_converges() {
        let timers = SharedTimerManager::new();
        let mut fade = FadeAnimator::default();
        fade.start(true, false, &timers);
        while fade.is_running() {
            fade.tick(true, false, &timers);
        }

        assert!(fade.start(false, false, &timers));
        let mut ticks = 0;
        while fade.is_running() {
            fade.tick(false, false, &timers);
            ticks += 1;
        }
        assert_eq!(ticks, 5);
        assert_eq!(fade.coefficient(), 0);
    }

    #[test]
    fn test_pushed_without_hover_holds() {
        let mut fade = FadeAnimator::default();
        fade.step(true, false);
        fade.step(true, false);
        assert!(!fade.step(false, true));
        assert_eq!(fade.coefficient(), 4);
        assert!(fade.is_at_rest(false, true));
    }

    #[test]
    fn test_start_is_idempotent() {
        let timers = SharedTimerManager::new();
        let mut fade = FadeAnimator::default();
        assert!(fade.start(true, false, &timers));
        let id = fade.timer_id();
        assert!(!fade.start(true, false, &timers));
        assert_eq!(fade.timer_id(), id);
        assert_eq!(timers.active_count(), 1);
    }

    #[test]
    fn test_start_at_rest_is_noop() {
        let timers = SharedTimerManager::new();
        let mut fade = FadeAnimator::default();
        assert!(!fade.start(false, false, &timers));
        assert!(!fade.is_running());
    }

    #[test]
    fn test_stop_keeps_coefficient() {
        let timers = SharedTimerManager::new();
        let mut fade = FadeAnimator::default();
        fade.start(true, false, &timers);
        fade.tick(true, false, &timers);
        fade.stop(&timers);
        assert!(!fade.is_running());
        assert_eq!(fade.coefficient(), 2);
        assert_eq!(timers.active_count(), 0);
    }

    #[test]
    fn test_interval_bounds() {
        let mut fade = FadeAnimator::default();
        for bad in [
            Duration::ZERO,
            Duration::from_micros(500),
            MAX_FADE_INTERVAL + Duration::from_nanos(1),
            Duration::MAX,
        ] {
            assert!(matches!(
                fade.set_interval(bad),
                Err(GlassButtonError::InvalidFadeInterval(d)) if d == bad
            ));
        }
        assert_eq!(fade.interval(), DEFAULT_FADE_INTERVAL);

        fade.set_interval(MIN_FADE_INTERVAL).unwrap();
        fade.set_interval(MAX_FADE_INTERVAL).unwrap();
        assert_eq!(fade.interval(), MAX_FADE_INTERVAL);
        assert!(FadeAnimator::new(Duration::MAX).is_err());
    }

    #[test]
    fn test_longest_interval_still_starts() {
        let timers = SharedTimerManager::new();
        let mut fade = FadeAnimator::new(MAX_FADE_INTERVAL).unwrap();
        assert!(fade.start(true, false, &timers));
        assert_eq!(timers.active_count(), 1);
    }
}
