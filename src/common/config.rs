// src/common/config.rs

use super::error::{Hcsr04Error, Param};
use super::pin::PinId;
use super::timing;

/// Validated driver configuration.
///
/// Every setter either commits its value and returns `Ok(())`, or returns
/// [`Hcsr04Error::BadParam`] and leaves the configuration untouched.
/// The trigger and echo pins never share a number.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hcsr04Config {
    trig_pin: PinId,
    echo_pin: PinId,
    timeout_us: u32,
    cm_per_us: f32,
    min_cycle_us: u32,
}

impl Hcsr04Config {
    /// Creates a configuration with the datasheet defaults for timeout,
    /// speed of sound and minimum cycle.
    pub fn new(trig_pin: PinId, echo_pin: PinId) -> Result<Self, Hcsr04Error> {
        Self::with_params(
            trig_pin,
            echo_pin,
            timing::DEFAULT_TIMEOUT_US,
            timing::DEFAULT_CM_PER_US,
            timing::DEFAULT_MIN_CYCLE_US,
        )
    }

    /// Creates a configuration from explicit values, running every setter's
    /// validation.
    pub fn with_params(
        trig_pin: PinId,
        echo_pin: PinId,
        timeout_us: u32,
        cm_per_us: f32,
        min_cycle_us: u32,
    ) -> Result<Self, Hcsr04Error> {
        if trig_pin == echo_pin {
            return Err(Hcsr04Error::BadParam(Param::EchoPin));
        }
        let mut config = Hcsr04Config {
            trig_pin,
            echo_pin,
            timeout_us: timing::DEFAULT_TIMEOUT_US,
            cm_per_us: timing::DEFAULT_CM_PER_US,
            min_cycle_us: timing::DEFAULT_MIN_CYCLE_US,
        };
        config.set_timeout_us(timeout_us)?;
        config.set_sound_speed(cm_per_us)?;
        config.set_min_cycle_us(min_cycle_us)?;
        Ok(config)
    }

    // --- Setters ---

    pub fn set_trig_pin(&mut self, trig_pin: PinId) -> Result<(), Hcsr04Error> {
        if trig_pin == self.echo_pin {
            return Err(Hcsr04Error::BadParam(Param::TriggerPin));
        }
        self.trig_pin = trig_pin;
        Ok(())
    }

    pub fn set_echo_pin(&mut self, echo_pin: PinId) -> Result<(), Hcsr04Error> {
        if echo_pin == self.trig_pin {
            return Err(Hcsr04Error::BadParam(Param::EchoPin));
        }
        self.echo_pin = echo_pin;
        Ok(())
    }

    /// Sets the round-trip timeout. Must be at least the trigger pulse width
    /// plus [`timing::TIMEOUT_MARGIN_US`].
    pub fn set_timeout_us(&mut self, timeout_us: u32) -> Result<(), Hcsr04Error> {
        if timeout_us < timing::MIN_TIMEOUT_US {
            return Err(Hcsr04Error::BadParam(Param::Timeout));
        }
        self.timeout_us = timeout_us;
        Ok(())
    }

    pub fn set_min_cycle_us(&mut self, min_cycle_us: u32) -> Result<(), Hcsr04Error> {
        if min_cycle_us == 0 {
            return Err(Hcsr04Error::BadParam(Param::MinCycle));
        }
        self.min_cycle_us = min_cycle_us;
        Ok(())
    }

    /// Sets the speed of sound in cm/µs. Accepted only strictly inside
    /// 0.02..0.06 (about 200..600 m/s).
    pub fn set_sound_speed(&mut self, cm_per_us: f32) -> Result<(), Hcsr04Error> {
        // NaN fails both comparisons.
        let plausible = cm_per_us > timing::SOUND_SPEED_MIN_CM_PER_US
            && cm_per_us < timing::SOUND_SPEED_MAX_CM_PER_US;
        if !plausible {
            return Err(Hcsr04Error::BadParam(Param::SoundSpeed));
        }
        self.cm_per_us = cm_per_us;
        Ok(())
    }

    // --- Getters ---

    #[inline]
    pub fn trig_pin(&self) -> PinId {
        self.trig_pin
    }

    #[inline]
    pub fn echo_pin(&self) -> PinId {
        self.echo_pin
    }

    #[inline]
    pub fn timeout_us(&self) -> u32 {
        self.timeout_us
    }

    #[inline]
    pub fn min_cycle_us(&self) -> u32 {
        self.min_cycle_us
    }

    /// Speed of sound in cm/µs.
    #[inline]
    pub fn sound_speed(&self) -> f32 {
        self.cm_per_us
    }
}
