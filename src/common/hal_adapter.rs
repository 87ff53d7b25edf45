// src/common/hal_adapter.rs

use super::hal_traits::{DigitalIo, MicrosClock};
use super::pin::{Level, PinDirection, PinId};
use core::fmt::Debug;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

/// Failure of an [`HalInterface`] operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HalPinError<TE, EE> {
    /// The trigger `OutputPin` failed.
    Trigger(TE),
    /// The echo `InputPin` failed.
    Echo(EE),
    /// The pin is neither the trigger nor the echo pin of this interface.
    UnknownPin(PinId),
    /// The pin exists but is fixed to the other direction.
    WrongDirection(PinId),
}

/// Adapts embedded-hal 1.0 pins and delay to [`DigitalIo`] + [`MicrosClock`].
///
/// embedded-hal pins carry their direction in their type, so `set_pin_mode`
/// only checks that the requested direction matches. `micros` supplies the
/// platform's free-running microsecond counter.
pub struct HalInterface<TRIG, ECHO, D, M> {
    trig_id: PinId,
    trig: TRIG,
    echo_id: PinId,
    echo: ECHO,
    delay: D,
    micros: M,
}

impl<TRIG, ECHO, D, M> HalInterface<TRIG, ECHO, D, M>
where
    TRIG: OutputPin,
    ECHO: InputPin,
    D: DelayNs,
    M: Fn() -> u32,
{
    pub fn new(trig_id: PinId, trig: TRIG, echo_id: PinId, echo: ECHO, delay: D, micros: M) -> Self {
        HalInterface { trig_id, trig, echo_id, echo, delay, micros }
    }

    /// Gives back the wrapped pins and delay.
    pub fn release(self) -> (TRIG, ECHO, D) {
        (self.trig, self.echo, self.delay)
    }
}

impl<TRIG, ECHO, D, M> DigitalIo for HalInterface<TRIG, ECHO, D, M>
where
    TRIG: OutputPin,
    ECHO: InputPin,
    D: DelayNs,
    M: Fn() -> u32,
    <TRIG as ErrorType>::Error: Debug,
    <ECHO as ErrorType>::Error: Debug,
{
    type Error = HalPinError<<TRIG as ErrorType>::Error, <ECHO as ErrorType>::Error>;

    fn set_pin_mode(&mut self, pin: PinId, direction: PinDirection) -> Result<(), Self::Error> {
        match (pin, direction) {
            (p, PinDirection::Output) if p == self.trig_id => Ok(()),
            (p, PinDirection::Input) if p == self.echo_id => Ok(()),
            (p, _) if p == self.trig_id || p == self.echo_id => Err(HalPinError::WrongDirection(p)),
            (p, _) => Err(HalPinError::UnknownPin(p)),
        }
    }

    fn write_digital(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error> {
        if pin == self.echo_id {
            return Err(HalPinError::WrongDirection(pin));
        }
        if pin != self.trig_id {
            return Err(HalPinError::UnknownPin(pin));
        }
        let result = match level {
            Level::High => self.trig.set_high(),
            Level::Low => self.trig.set_low(),
        };
        result.map_err(HalPinError::Trigger)
    }

    fn read_digital(&mut self, pin: PinId) -> Result<Level, Self::Error> {
        if pin == self.trig_id {
            return Err(HalPinError::WrongDirection(pin));
        }
        if pin != self.echo_id {
            return Err(HalPinError::UnknownPin(pin));
        }
        self.echo.is_high().map(Level::from).map_err(HalPinError::Echo)
    }
}

impl<TRIG, ECHO, D, M> MicrosClock for HalInterface<TRIG, ECHO, D, M>
where
    D: DelayNs,
    M: Fn() -> u32,
{
    fn now_us(&self) -> u32 {
        (self.micros)()
    }

    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }
}
