// src/sensor/mod.rs

// Measurement engines and the contract they share.

pub mod interrupt;
pub mod polling;
mod trigger;

#[cfg(test)]
pub(crate) mod mock;

use crate::common::{conversion::Distance, error::Hcsr04Error};
use core::fmt::Debug;

pub use interrupt::InterruptHcsr04;
pub use polling::PollingHcsr04;

/// One measurement API over every timing strategy.
///
/// Callers holding a `&mut dyn DistanceSensor<Error = E>` can swap the
/// polling and interrupt engines without changes.
pub trait DistanceSensor {
    /// Error type of the underlying pin interface.
    type Error: Debug;

    /// Configures pin directions and internal state. Idempotent; performs
    /// no hardware self-test.
    fn begin(&mut self) -> Result<(), Hcsr04Error<Self::Error>>;

    /// Runs (or polls) one measurement.
    ///
    /// Only `Ok` carries a distance; any error means no new distance is
    /// available from this call.
    fn read(&mut self) -> Result<Distance, Hcsr04Error<Self::Error>>;
}
