// src/common/hal_traits.rs

use super::pin::{EdgeTrigger, Level, PinDirection, PinId};
use core::fmt::Debug;

/// Digital pin access addressed by pin identifier.
pub trait DigitalIo {
    /// Associated error type for pin failures.
    type Error: Debug;

    /// Configures `pin` as an input or an output.
    fn set_pin_mode(&mut self, pin: PinId, direction: PinDirection) -> Result<(), Self::Error>;

    /// Drives an output pin to `level`.
    fn write_digital(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error>;

    /// Samples the current level of an input pin.
    fn read_digital(&mut self, pin: PinId) -> Result<Level, Self::Error>;
}

/// Monotonic microsecond clock plus blocking delay.
pub trait MicrosClock {
    /// Current clock value. Wraps around at `u32::MAX`; callers must use
    /// `wrapping_sub` for elapsed time.
    fn now_us(&self) -> u32;

    /// Busy-waits for at least `us` microseconds.
    fn delay_us(&mut self, us: u32);
}

/// Callback raised by the platform on an echo-line transition.
///
/// The platform's interrupt glue samples the pin level and [`MicrosClock::now_us`]
/// at the moment of the interrupt and passes both. Handlers run in interrupt
/// context: they must not block or allocate.
pub type EdgeHandler = fn(level: Level, now_us: u32);

/// Asynchronous notification on pin level changes.
pub trait EdgeInterrupt: DigitalIo {
    /// Registers `handler` for transitions of `pin` matching `trigger`.
    fn attach_edge_interrupt(
        &mut self,
        pin: PinId,
        trigger: EdgeTrigger,
        handler: EdgeHandler,
    ) -> Result<(), Self::Error>;

    /// Removes any handler registered for `pin`.
    fn detach_edge_interrupt(&mut self, pin: PinId) -> Result<(), Self::Error>;
}
