// src/common/timing.rs

// All durations are in microseconds and compared against a wrapping `u32`
// clock. Values follow the HC-SR04 datasheet.

// === Trigger Pulse ===

/// Width of the high phase of the trigger pulse.
pub const TRIGGER_PULSE_US: u32 = 10;
/// Low phase forced on the trigger line before the pulse.
pub const TRIGGER_SETTLE_US: u32 = 2;

// === Echo Window ===

/// Margin the timeout must keep above the trigger pulse width.
pub const TIMEOUT_MARGIN_US: u32 = 100;
/// Smallest accepted round-trip timeout.
pub const MIN_TIMEOUT_US: u32 = TRIGGER_PULSE_US + TIMEOUT_MARGIN_US;
/// Default round-trip timeout, roughly 5 m out and back.
pub const DEFAULT_TIMEOUT_US: u32 = 30_000;

// === Shot Cadence ===

/// Default minimum idle time between shots (datasheet recommends ~60 ms
/// so a late echo of one shot is not read as the next one's).
pub const DEFAULT_MIN_CYCLE_US: u32 = 60_000;

// === Speed of Sound ===

/// Speed of sound in dry air at ~20 °C, in cm/µs.
pub const DEFAULT_CM_PER_US: f32 = 0.0343;
/// Exclusive lower bound for a configured speed of sound (~200 m/s).
pub const SOUND_SPEED_MIN_CM_PER_US: f32 = 0.02;
/// Exclusive upper bound for a configured speed of sound (~600 m/s).
pub const SOUND_SPEED_MAX_CM_PER_US: f32 = 0.06;
