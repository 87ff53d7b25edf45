// src/sensor/polling/mod.rs

mod echo_wait;

use super::{trigger, DistanceSensor};
use crate::common::{
    config::Hcsr04Config,
    conversion::{time_to_distance, Distance},
    cycle_guard::CycleGuard,
    error::Hcsr04Error,
    hal_traits::{DigitalIo, MicrosClock},
    pin::Level,
};

/// Blocking HC-SR04 driver that busy-waits on the echo line.
///
/// Each [`read`](Self::read) fires one trigger pulse and spins until the echo
/// pulse has been timed, the configured timeout has elapsed, or the minimum
/// cycle interval refuses the shot. The rise and fall waits share one timeout
/// window measured from the end of the trigger pulse, so a call never blocks
/// longer than the trigger pulse plus `timeout_us`.
#[derive(Debug)]
pub struct PollingHcsr04<IF>
where
    IF: DigitalIo + MicrosClock,
{
    interface: IF,
    config: Hcsr04Config,
    guard: CycleGuard,
}

impl<IF> PollingHcsr04<IF>
where
    IF: DigitalIo + MicrosClock,
{
    pub fn new(interface: IF, config: Hcsr04Config) -> Self {
        PollingHcsr04 {
            interface,
            config,
            guard: CycleGuard::new(),
        }
    }

    // --- Configuration ---

    pub fn config(&self) -> &Hcsr04Config {
        &self.config
    }

    /// Mutable access to the validated configuration. Pin changes take
    /// effect on the next [`begin`](Self::begin).
    pub fn config_mut(&mut self) -> &mut Hcsr04Config {
        &mut self.config
    }

    /// Clock value recorded when the last shot started.
    pub fn last_shot_us(&self) -> u32 {
        self.guard.last_shot_us()
    }

    /// Gives back the pin interface.
    pub fn release(self) -> IF {
        self.interface
    }

    // --- Public Blocking Methods ---

    pub fn begin(&mut self) -> Result<(), Hcsr04Error<IF::Error>> {
        trigger::configure_pins(&mut self.interface, self.config.trig_pin(), self.config.echo_pin())?;
        Ok(())
    }

    pub fn read(&mut self) -> Result<Distance, Hcsr04Error<IF::Error>> {
        let now_us = self.interface.now_us();
        if self.guard.can_start_shot(now_us, self.config.min_cycle_us()).is_err() {
            return Err(Hcsr04Error::Busy);
        }
        self.guard.mark_shot_start(now_us);

        trigger::fire(&mut self.interface, self.config.trig_pin())?;
        let t_start_us = self.interface.now_us();
        trace!("shot fired at {}", t_start_us);

        let timeout_us = self.config.timeout_us();
        let Some(rise_us) = self.wait_for_echo_level(Level::High, t_start_us, timeout_us)? else {
            trace!("no echo start within {} us", timeout_us);
            return Err(Hcsr04Error::TimeoutEchoStart);
        };
        let Some(fall_us) = self.wait_for_echo_level(Level::Low, t_start_us, timeout_us)? else {
            trace!("no echo end within {} us", timeout_us);
            return Err(Hcsr04Error::TimeoutEchoEnd);
        };

        let high_time_us = fall_us.wrapping_sub(rise_us);
        time_to_distance(high_time_us, self.config.sound_speed()).map_err(Hcsr04Error::with_io)
    }
}

impl<IF> DistanceSensor for PollingHcsr04<IF>
where
    IF: DigitalIo + MicrosClock,
{
    type Error = IF::Error;

    fn begin(&mut self) -> Result<(), Hcsr04Error<Self::Error>> {
        PollingHcsr04::begin(self)
    }

    fn read(&mut self) -> Result<Distance, Hcsr04Error<Self::Error>> {
        PollingHcsr04::read(self)
    }
}
