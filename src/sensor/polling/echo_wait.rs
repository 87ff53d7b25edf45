// src/sensor/polling/echo_wait.rs

use super::PollingHcsr04;
use crate::common::{
    hal_traits::{DigitalIo, MicrosClock},
    pin::Level,
};

impl<IF> PollingHcsr04<IF>
where
    IF: DigitalIo + MicrosClock,
{
    /// Samples the echo pin until it reads `level`, returning the clock value
    /// of the matching sample, or `None` once `timeout_us` has elapsed since
    /// `window_start_us`.
    ///
    /// The window is anchored at the caller's start timestamp, so successive
    /// waits share one budget instead of each getting a fresh one.
    pub(super) fn wait_for_echo_level(
        &mut self,
        level: Level,
        window_start_us: u32,
        timeout_us: u32,
    ) -> Result<Option<u32>, IF::Error> {
        let echo = self.config.echo_pin();
        loop {
            let now_us = self.interface.now_us();
            if now_us.wrapping_sub(window_start_us) >= timeout_us {
                return Ok(None);
            }
            if self.interface.read_digital(echo)? == level {
                return Ok(Some(now_us));
            }
        }
    }
}
