// src/sensor/trigger.rs

use crate::common::{
    hal_traits::{DigitalIo, MicrosClock},
    pin::{Level, PinDirection, PinId},
    timing,
};

/// Puts the trigger pin in output mode and the echo pin in input mode, then
/// parks the trigger low.
pub(crate) fn configure_pins<IF>(interface: &mut IF, trig: PinId, echo: PinId) -> Result<(), IF::Error>
where
    IF: DigitalIo,
{
    interface.set_pin_mode(trig, PinDirection::Output)?;
    interface.set_pin_mode(echo, PinDirection::Input)?;
    interface.write_digital(trig, Level::Low)
}

/// Drives one trigger pulse: low for [`timing::TRIGGER_SETTLE_US`], high for
/// [`timing::TRIGGER_PULSE_US`], then low again. Blocks for the whole pulse.
pub(crate) fn fire<IF>(interface: &mut IF, trig: PinId) -> Result<(), IF::Error>
where
    IF: DigitalIo + MicrosClock,
{
    interface.write_digital(trig, Level::Low)?;
    interface.delay_us(timing::TRIGGER_SETTLE_US);
    interface.write_digital(trig, Level::High)?;
    interface.delay_us(timing::TRIGGER_PULSE_US);
    interface.write_digital(trig, Level::Low)
}
