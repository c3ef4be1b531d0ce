//! Repeating timer capability
//!
//! The simulator only decides *whether* a tick interval is scheduled. What
//! the interval invokes is bound by the host when it builds the timer.

use crate::error::Result;

/// Opaque handle returned by [`Timer::schedule_repeating`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub i32);

pub trait Timer {
    /// Start firing the host's tick callback every `interval_ms`
    fn schedule_repeating(&mut self, interval_ms: f64) -> Result<TimerHandle>;
    /// Stop a previously scheduled interval
    fn cancel(&mut self, handle: TimerHandle);
}

/// Host-free timer: records intervals and lets the caller step them
#[derive(Debug, Default)]
pub struct ManualTimer {
    active: Vec<(TimerHandle, f64)>,
    next_id: i32,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of intervals currently scheduled
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.active.iter().any(|(h, _)| *h == handle)
    }

    pub fn interval_ms(&self, handle: TimerHandle) -> Option<f64> {
        self.active
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, interval)| *interval)
    }

    /// How many times an interval would have fired over `elapsed_ms`
    pub fn fires_within(&self, handle: TimerHandle, elapsed_ms: f64) -> u32 {
        match self.interval_ms(handle) {
            // Nudge so 1000 / (1000 / 60) counts as 60 fires, not 59.999
            Some(interval) if interval > 0.0 => (elapsed_ms / interval + 1e-9).floor() as u32,
            _ => 0,
        }
    }
}

impl Timer for ManualTimer {
    fn schedule_repeating(&mut self, interval_ms: f64) -> Result<TimerHandle> {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.active.push((handle, interval_ms));
        Ok(handle)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.active.retain(|(h, _)| *h != handle);
    }
}
