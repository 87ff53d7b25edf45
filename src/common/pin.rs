// src/common/pin.rs

use core::fmt;

/// Platform pin identifier (e.g. an Arduino digital pin number or a GPIO index).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(u8);

impl PinId {
    #[inline]
    pub const fn new(number: u8) -> Self {
        PinId(number)
    }

    #[inline]
    pub const fn number(&self) -> u8 {
        self.0
    }
}

impl From<u8> for PinId {
    fn from(value: u8) -> Self {
        PinId(value)
    }
}

impl From<PinId> for u8 {
    fn from(value: PinId) -> Self {
        value.0
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.0)
    }
}

/// Logic level of a digital line.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    #[inline]
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

/// Direction a pin is configured for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinDirection {
    Output,
    Input,
}

/// Which electrical transitions raise the edge callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeTrigger {
    Rising,
    Falling,
    /// Every logic-level change (Arduino `CHANGE`).
    AnyEdge,
}
