// src/sensor/interrupt/mod.rs

pub mod coordinator;

use super::{trigger, DistanceSensor};
use crate::common::{
    config::Hcsr04Config,
    conversion::{time_to_distance, Distance},
    cycle_guard::CycleGuard,
    error::Hcsr04Error,
    hal_traits::{EdgeInterrupt, MicrosClock},
    pin::{EdgeTrigger, PinId},
    timing::{TRIGGER_PULSE_US, TRIGGER_SETTLE_US},
};

/// Non-blocking HC-SR04 driver timing the echo from pin-change interrupts.
///
/// [`read`](Self::read) fires a new trigger pulse whenever the minimum cycle
/// interval allows it, then hands out the distance of the last completed echo
/// if there is one, or [`Hcsr04Error::NotReady`] otherwise. Callers keep
/// calling `read` until they get a distance.
///
/// The echo edges are captured by [`coordinator::on_echo_edge`], which is
/// process-wide: only one `InterruptHcsr04` can be started at a time. A second
/// driver's [`begin`](Self::begin) fails with [`Hcsr04Error::BadState`] until
/// the first one is ended or dropped.
pub struct InterruptHcsr04<IF>
where
    IF: EdgeInterrupt + MicrosClock,
{
    interface: IF,
    config: Hcsr04Config,
    guard: CycleGuard,
    bound: bool,
    attached_pin: Option<PinId>,
    in_flight: bool,
}

impl<IF> InterruptHcsr04<IF>
where
    IF: EdgeInterrupt + MicrosClock,
{
    pub fn new(interface: IF, config: Hcsr04Config) -> Self {
        InterruptHcsr04 {
            interface,
            config,
            guard: CycleGuard::new(),
            bound: false,
            attached_pin: None,
            in_flight: false,
        }
    }

    pub fn config(&self) -> &Hcsr04Config {
        &self.config
    }

    /// Mutable access to the validated configuration. Pin changes take
    /// effect on the next [`begin`](Self::begin).
    pub fn config_mut(&mut self) -> &mut Hcsr04Config {
        &mut self.config
    }

    pub fn last_shot_us(&self) -> u32 {
        self.guard.last_shot_us()
    }

    /// `true` between arming a shot and handing out its distance, for at most
    /// the trigger pulse plus `timeout_us` after the shot started. An echo
    /// that never completes stops counting as in flight once that window ends.
    ///
    /// `read` reports `NotReady` both while a shot is in flight and when no
    /// shot could be armed; this tells the two apart.
    pub fn shot_in_flight(&self) -> bool {
        let window_us = TRIGGER_SETTLE_US + TRIGGER_PULSE_US + self.config.timeout_us();
        let elapsed_us = self.interface.now_us().wrapping_sub(self.guard.last_shot_us());
        self.in_flight && elapsed_us <= window_us
    }

    /// Binds the edge coordinator, configures the pins and attaches the echo
    /// interrupt. Calling it again re-applies the pin configuration.
    pub fn begin(&mut self) -> Result<(), Hcsr04Error<IF::Error>> {
        if !self.bound {
            if !coordinator::bind() {
                trace!("echo interrupt already bound to another driver");
                return Err(Hcsr04Error::BadState);
            }
            self.bound = true;
        }

        let result = self.attach();
        if result.is_err() && self.attached_pin.is_none() {
            // Nothing registered on the platform: let another driver bind.
            coordinator::unbind();
            self.bound = false;
        }
        result
    }

    fn attach(&mut self) -> Result<(), Hcsr04Error<IF::Error>> {
        let echo = self.config.echo_pin();
        trigger::configure_pins(&mut self.interface, self.config.trig_pin(), echo)?;
        coordinator::arm();
        self.in_flight = false;

        if let Some(old) = self.attached_pin.filter(|&pin| pin != echo) {
            self.interface.detach_edge_interrupt(old)?;
            self.attached_pin = None;
        }
        self.interface
            .attach_edge_interrupt(echo, EdgeTrigger::AnyEdge, coordinator::on_echo_edge)?;
        self.attached_pin = Some(echo);
        Ok(())
    }

    /// Arms a new shot if the cycle guard allows, then harvests a completed
    /// echo if one is pending. Never blocks beyond the trigger pulse.
    pub fn read(&mut self) -> Result<Distance, Hcsr04Error<IF::Error>> {
        if !self.bound {
            return Err(Hcsr04Error::BadState);
        }

        let now_us = self.interface.now_us();
        if self.guard.can_start_shot(now_us, self.config.min_cycle_us()).is_ok() {
            self.guard.mark_shot_start(now_us);
            coordinator::arm();
            trigger::fire(&mut self.interface, self.config.trig_pin())?;
            self.in_flight = true;
            trace!("shot armed at {}", now_us);
        }

        let Some((rise_us, fall_us)) = coordinator::take_pulse() else {
            return Err(Hcsr04Error::NotReady);
        };
        self.in_flight = false;
        time_to_distance(fall_us.wrapping_sub(rise_us), self.config.sound_speed())
            .map_err(Hcsr04Error::with_io)
    }

    /// [`read`](Self::read) in `nb` form: `NotReady` becomes `WouldBlock`,
    /// so `nb::block!(sensor.read_nb())` spins until a distance arrives.
    pub fn read_nb(&mut self) -> nb::Result<Distance, Hcsr04Error<IF::Error>> {
        match self.read() {
            Ok(distance) => Ok(distance),
            Err(Hcsr04Error::NotReady) => Err(nb::Error::WouldBlock),
            Err(e) => Err(nb::Error::Other(e)),
        }
    }

    /// Detaches the echo interrupt and releases the coordinator so another
    /// driver can be started. `begin` may be called again afterwards.
    ///
    /// If the detach fails the driver stays bound and attached, so `end` can
    /// be retried.
    pub fn end(&mut self) -> Result<(), Hcsr04Error<IF::Error>> {
        if let Some(pin) = self.attached_pin {
            self.interface.detach_edge_interrupt(pin)?;
            self.attached_pin = None;
        }
        if self.bound {
            coordinator::unbind();
            self.bound = false;
        }
        self.in_flight = false;
        Ok(())
    }
}

impl<IF> Drop for InterruptHcsr04<IF>
where
    IF: EdgeInterrupt + MicrosClock,
{
    fn drop(&mut self) {
        if let Some(pin) = self.attached_pin.take() {
            let _ = self.interface.detach_edge_interrupt(pin);
        }
        if self.bound {
            coordinator::unbind();
        }
    }
}

impl<IF> DistanceSensor for InterruptHcsr04<IF>
where
    IF: EdgeInterrupt + MicrosClock,
{
    type Error = IF::Error;

    fn begin(&mut self) -> Result<(), Hcsr04Error<Self::Error>> {
        InterruptHcsr04::begin(self)
    }

    fn read(&mut self) -> Result<Distance, Hcsr04Error<Self::Error>> {
        InterruptHcsr04::read(self)
    }
}
