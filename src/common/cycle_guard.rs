// src/common/cycle_guard.rs

use super::error::Hcsr04Error;

/// Enforces the minimum idle interval between two shots.
///
/// Holds only the clock value at which the last shot started. Time is the
/// caller's wrapping microsecond clock, so elapsed time is computed with
/// `wrapping_sub`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct CycleGuard {
    last_shot_us: u32,
}

impl CycleGuard {
    pub const fn new() -> Self {
        CycleGuard { last_shot_us: 0 }
    }

    /// `Ok(())` once at least `min_cycle_us` has passed since the last shot,
    /// [`Hcsr04Error::Busy`] before that.
    pub fn can_start_shot(&self, now_us: u32, min_cycle_us: u32) -> Result<(), Hcsr04Error> {
        let elapsed = now_us.wrapping_sub(self.last_shot_us);
        if elapsed >= min_cycle_us {
            Ok(())
        } else {
            Err(Hcsr04Error::Busy)
        }
    }

    pub fn mark_shot_start(&mut self, now_us: u32) {
        self.last_shot_us = now_us;
    }

    #[inline]
    pub fn last_shot_us(&self) -> u32 {
        self.last_shot_us
    }
}
