// src/common/conversion.rs

use super::error::{Hcsr04Error, Param};
use core::fmt;

/// A measured one-way distance, stored in centimeters.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Distance(f32);

impl Distance {
    #[inline]
    pub fn from_cm(cm: f32) -> Self {
        Distance(cm)
    }

    #[inline]
    pub fn cm(&self) -> f32 {
        self.0
    }

    #[inline]
    pub fn mm(&self) -> f32 {
        self.0 * 10.0
    }

    #[inline]
    pub fn meters(&self) -> f32 {
        self.0 / 100.0
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} cm", self.0)
    }
}

/// Converts the echo's round-trip high time to a one-way distance:
/// `high_time_us * cm_per_us / 2`.
///
/// A zero-length pulse cannot come from a real echo and is rejected with
/// [`Param::EchoDuration`].
pub fn time_to_distance(high_time_us: u32, cm_per_us: f32) -> Result<Distance, Hcsr04Error> {
    if high_time_us == 0 {
        return Err(Hcsr04Error::BadParam(Param::EchoDuration));
    }
    Ok(Distance(high_time_us as f32 * cm_per_us * 0.5))
}
