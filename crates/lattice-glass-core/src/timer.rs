//! Timer system for Lattice Glass.
//!
//! Provides one-shot and repeating timers. The manager does not own a thread:
//! the host event loop asks how long to sleep with
//! [`TimerManager::time_until_next`] and then collects the timers that fired
//! with [`TimerManager::process_expired`], dispatching each [`TimerId`] to the
//! widget that owns it. Everything runs on the UI thread.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::error::{Result, TimerError};
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a timer.
    pub struct TimerId;
}

/// The type of timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Fires once after the specified duration.
    OneShot,
    /// Fires repeatedly at the specified interval.
    Repeating,
}

#[derive(Debug)]
struct TimerData {
    next_fire: Instant,
    interval: Duration,
    kind: TimerKind,
}

/// An entry in the timer queue (min-heap by fire time).
#[derive(Debug, Clone, Copy)]
struct TimerQueueEntry {
    id: TimerId,
    fire_time: Instant,
}

impl PartialEq for TimerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_time == other.fire_time
    }
}

impl Eq for TimerQueueEntry {}

impl PartialOrd for TimerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        other.fire_time.cmp(&self.fire_time)
    }
}

/// Manages a set of timers.
#[derive(Debug, Default)]
pub struct TimerManager {
    timers: SlotMap<TimerId, TimerData>,
    /// Pending fires. Entries for stopped timers are skipped lazily.
    queue: BinaryHeap<TimerQueueEntry>,
}

impl TimerManager {
    /// Create a new timer manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a one-shot timer that fires after the specified duration.
    ///
    /// Fails with [`TimerError::IntervalOverflow`] when the fire time cannot
    /// be represented.
    pub fn start_one_shot(&mut self, duration: Duration) -> Result<TimerId> {
        self.start(duration, TimerKind::OneShot, Instant::now())
    }

    /// Start a repeating timer that fires at the specified interval.
    ///
    /// The first fire occurs after `interval`.
    pub fn start_repeating(&mut self, interval: Duration) -> Result<TimerId> {
        self.start(interval, TimerKind::Repeating, Instant::now())
    }

    fn start(&mut self, interval: Duration, kind: TimerKind, now: Instant) -> Result<TimerId> {
        let next_fire = now
            .checked_add(interval)
            .ok_or(TimerError::IntervalOverflow)?;
        let id = self.timers.insert(TimerData {
            next_fire,
            interval,
            kind,
        });
        self.queue.push(TimerQueueEntry {
            id,
            fire_time: next_fire,
        });
        tracing::trace!(target: targets::TIMER, ?id, ?kind, ?interval, "timer started");
        Ok(id)
    }

    /// Stop and remove a timer.
    pub fn stop(&mut self, id: TimerId) -> Result<()> {
        if self.timers.remove(id).is_some() {
            tracing::trace!(target: targets::TIMER, ?id, "timer stopped");
            Ok(())
        } else {
            Err(TimerError::InvalidTimerId.into())
        }
    }

    /// Check if a timer is currently active.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Get the interval of an active timer.
    pub fn interval(&self, id: TimerId) -> Option<Duration> {
        self.timers.get(id).map(|t| t.interval)
    }

    /// Get the duration until the next timer fires, if any.
    pub fn time_until_next(&mut self) -> Option<Duration> {
        self.discard_stale_entries();
        let now = Instant::now();
        self.queue
            .peek()
            .map(|entry| entry.fire_time.saturating_duration_since(now))
    }

    /// Drop queue entries whose timer was stopped or rescheduled.
    fn discard_stale_entries(&mut self) {
        while let Some(entry) = self.queue.peek() {
            match self.timers.get(entry.id) {
                Some(timer) if timer.next_fire == entry.fire_time => break,
                _ => {
                    self.queue.pop();
                }
            }
        }
    }

    /// Process all timers that should fire now.
    ///
    /// Returns the IDs of the timers that fired, in firing order.
    pub fn process_expired(&mut self) -> Vec<TimerId> {
        self.process_expired_at(Instant::now())
    }

    /// Process all timers due at or before `now`.
    ///
    /// A repeating timer fires at most once per call and is rescheduled one
    /// interval after `now`. If that instant overflows the clock the timer is
    /// removed after firing.
    #[tracing::instrument(skip(self), target = "lattice_glass_core::timer", level = "trace")]
    pub fn process_expired_at(&mut self, now: Instant) -> Vec<TimerId> {
        let mut fired = Vec::new();

        while let Some(&entry) = self.queue.peek() {
            if entry.fire_time > now {
                break;
            }
            self.queue.pop();

            let Some(timer) = self.timers.get_mut(entry.id) else {
                continue;
            };
            if timer.next_fire != entry.fire_time {
                continue;
            }

            tracing::trace!(target: targets::TIMER, id = ?entry.id, "timer fired");
            fired.push(entry.id);

            match timer.kind {
                TimerKind::OneShot => {
                    self.timers.remove(entry.id);
                }
                TimerKind::Repeating => match now.checked_add(timer.interval) {
                    Some(next_fire) => {
                        timer.next_fire = next_fire;
                        self.queue.push(TimerQueueEntry {
                            id: entry.id,
                            fire_time: next_fire,
                        });
                    }
                    None => {
                        tracing::debug!(target: targets::TIMER, id = ?entry.id, "interval overflows the clock, timer removed");
                        self.timers.remove(entry.id);
                    }
                },
            }
        }

        fired
    }

    /// Get the number of active timers.
    pub fn active_count(&self) -> usize {
        self.timers.len()
    }
}

/// A cloneable, thread-safe handle to a [`TimerManager`].
///
/// Widgets keep a clone so they can start and stop their own timers while the
/// host event loop drives expiry through another clone.
#[derive(Debug, Clone, Default)]
pub struct SharedTimerManager {
    inner: Arc<Mutex<TimerManager>>,
}

impl SharedTimerManager {
    /// Create a handle to a fresh timer manager.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_one_shot(&self, duration: Duration) -> Result<TimerId> {
        self.inner.lock().start_one_shot(duration)
    }

    pub fn start_repeating(&self, interval: Duration) -> Result<TimerId> {
        self.inner.lock().start_repeating(interval)
    }

    pub fn stop(&self, id: TimerId) -> Result<()> {
        self.inner.lock().stop(id)
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.inner.lock().is_active(id)
    }

    pub fn time_until_next(&self) -> Option<Duration> {
        self.inner.lock().time_until_next()
    }

    pub fn process_expired(&self) -> Vec<TimerId> {
        self.inner.lock().process_expired()
    }

    pub fn process_expired_at(&self, now: Instant) -> Vec<TimerId> {
        self.inner.lock().process_expired_at(now)
    }

    pub fn active_count(&self) -> usize {
        self.inner.lock().active_count()
    }
}

static_assertions::assert_impl_all!(SharedTimerManager: Send, Sync);
