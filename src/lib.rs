// src/lib.rs
//! Driver for HC-SR04 class ultrasonic distance sensors.
//!
//! Two engines share one [`Hcsr04Config`] and the [`DistanceSensor`] trait:
//! [`PollingHcsr04`] blocks while it times the echo pulse, and
//! [`InterruptHcsr04`] times it from pin-change interrupts and is polled for
//! the result. Platform access goes through the traits in
//! [`common::hal_traits`]; the `embedded-hal` feature provides an adapter.

#![no_std] // Specify no_std at the crate root

#[cfg(test)]
extern crate std;

// Must come first so the other modules see its macros.
#[macro_use]
mod fmt;

pub mod common;
pub mod sensor;

// Re-export key types for convenience
pub use common::{Distance, Hcsr04Config, Hcsr04Error, PinId};
pub use sensor::{DistanceSensor, InterruptHcsr04, PollingHcsr04};
