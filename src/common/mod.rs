// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod config;
pub mod conversion;
pub mod cycle_guard;
pub mod error;
pub mod hal_traits;
pub mod pin;
pub mod timing;

#[cfg(feature = "embedded-hal")]
pub mod hal_adapter;

// --- Re-export key types/traits/functions for easier access ---

// From config.rs
pub use config::Hcsr04Config;

// From conversion.rs
pub use conversion::{time_to_distance, Distance};

// From cycle_guard.rs
pub use cycle_guard::CycleGuard;

// From error.rs
pub use error::{Hcsr04Error, Param};

// From hal_traits.rs
pub use hal_traits::{DigitalIo, EdgeHandler, EdgeInterrupt, MicrosClock};

// From pin.rs
pub use pin::{EdgeTrigger, Level, PinDirection, PinId};

// timing.rs constants are reached through `common::timing::*`.

// --- Feature-gated re-exports ---

#[cfg(feature = "embedded-hal")]
pub use hal_adapter::{HalInterface, HalPinError};
