// src/common/error.rs

use core::fmt;

/// Identifies which value a validation step rejected.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Param {
    /// Trigger pin would collide with the echo pin.
    TriggerPin,
    /// Echo pin would collide with the trigger pin.
    EchoPin,
    /// Timeout shorter than the trigger pulse plus its margin.
    Timeout,
    /// Minimum cycle interval of zero.
    MinCycle,
    /// Speed of sound outside the plausible window.
    SoundSpeed,
    /// Zero-length echo pulse handed to the distance conversion.
    EchoDuration,
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Param::TriggerPin => "trigger pin",
            Param::EchoPin => "echo pin",
            Param::Timeout => "timeout",
            Param::MinCycle => "minimum cycle interval",
            Param::SoundSpeed => "speed of sound",
            Param::EchoDuration => "echo duration",
        };
        f.write_str(name)
    }
}

/// Every non-`Ok` outcome of a driver operation.
///
/// `E` is the error type of the platform's pin interface. Operations that
/// never touch hardware (configuration, conversion) use the default `E = ()`.
#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Hcsr04Error<E = ()>
where
    E: fmt::Debug,
{
    /// Underlying pin error from the HAL implementation.
    #[error("I/O error: {0:?}")]
    Io(E),

    /// No rising edge on the echo line within the timeout window.
    #[error("timed out waiting for echo start")]
    TimeoutEchoStart,

    /// Rising edge seen, but no falling edge within the same window.
    #[error("timed out waiting for echo end")]
    TimeoutEchoEnd,

    /// Minimum cycle interval has not elapsed; no shot was started.
    #[error("minimum cycle interval not elapsed")]
    Busy,

    /// A shot is in flight and has not produced a result yet.
    #[error("measurement not ready")]
    NotReady,

    /// Operation not allowed in the driver's current state.
    #[error("invalid driver state")]
    BadState,

    /// A setter or conversion rejected its input.
    #[error("invalid parameter: {0}")]
    BadParam(Param),
}

impl<E: fmt::Debug> From<E> for Hcsr04Error<E> {
    fn from(e: E) -> Self {
        Hcsr04Error::Io(e)
    }
}

impl<E: fmt::Debug> Hcsr04Error<E> {
    /// `true` for the two timeout kinds, which point at the environment or wiring.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Hcsr04Error::TimeoutEchoStart | Hcsr04Error::TimeoutEchoEnd)
    }

    /// `true` when calling again later may succeed without any reconfiguration.
    pub fn is_transient(&self) -> bool {
        matches!(self, Hcsr04Error::Busy | Hcsr04Error::NotReady)
    }
}

impl Hcsr04Error<()> {
    /// Re-types a hardware-free error so it can flow out of a HAL-backed operation.
    pub(crate) fn with_io<E: fmt::Debug>(self) -> Hcsr04Error<E> {
        match self {
            // Hardware-free operations never produce `Io`.
            Hcsr04Error::Io(()) => Hcsr04Error::BadState,
            Hcsr04Error::TimeoutEchoStart => Hcsr04Error::TimeoutEchoStart,
            Hcsr04Error::TimeoutEchoEnd => Hcsr04Error::TimeoutEchoEnd,
            Hcsr04Error::Busy => Hcsr04Error::Busy,
            Hcsr04Error::NotReady => Hcsr04Error::NotReady,
            Hcsr04Error::BadState => Hcsr04Error::BadState,
            Hcsr04Error::BadParam(p) => Hcsr04Error::BadParam(p),
        }
    }
}
