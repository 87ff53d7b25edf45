// src/sensor/interrupt/coordinator.rs
//
// Process-wide edge-capture state shared between the echo interrupt and the
// one bound `InterruptHcsr04`. Interrupt handlers cannot carry a reference to
// a driver instance, so the state lives in a static and at most one driver
// may be bound to it at a time.

use crate::common::pin::Level;
use core::cell::Cell;
use critical_section::Mutex;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct EdgeCapture {
    bound: bool,
    awaiting_rise: bool,
    rise_us: Option<u32>,
    fall_us: Option<u32>,
}

impl EdgeCapture {
    const IDLE: EdgeCapture = EdgeCapture {
        bound: false,
        awaiting_rise: true,
        rise_us: None,
        fall_us: None,
    };
}

static CAPTURE: Mutex<Cell<EdgeCapture>> = Mutex::new(Cell::new(EdgeCapture::IDLE));

/// Claims the coordinator for one driver. Returns `false` if another driver
/// already holds it.
pub(crate) fn bind() -> bool {
    critical_section::with(|cs| {
        let cell = CAPTURE.borrow(cs);
        if cell.get().bound {
            return false;
        }
        cell.set(EdgeCapture { bound: true, ..EdgeCapture::IDLE });
        true
    })
}

/// Releases the coordinator and drops any captured edges.
pub(crate) fn unbind() {
    critical_section::with(|cs| CAPTURE.borrow(cs).set(EdgeCapture::IDLE));
}

/// `true` while a driver holds the coordinator.
pub fn is_bound() -> bool {
    critical_section::with(|cs| CAPTURE.borrow(cs).get().bound)
}

/// Resets capture for a new shot: awaiting rise, no timestamps.
pub(crate) fn arm() {
    critical_section::with(|cs| {
        let cell = CAPTURE.borrow(cs);
        let bound = cell.get().bound;
        cell.set(EdgeCapture { bound, ..EdgeCapture::IDLE });
    });
}

/// Takes the `(rise, fall)` timestamps if both have been captured, clearing
/// them so each pulse is handed out exactly once.
pub(crate) fn take_pulse() -> Option<(u32, u32)> {
    critical_section::with(|cs| {
        let cell = CAPTURE.borrow(cs);
        let mut capture = cell.get();
        let pulse = capture.rise_us.zip(capture.fall_us)?;
        capture.rise_us = None;
        capture.fall_us = None;
        cell.set(capture);
        Some(pulse)
    })
}

/// Echo-line interrupt handler, registered through
/// [`EdgeInterrupt::attach_edge_interrupt`](crate::common::hal_traits::EdgeInterrupt::attach_edge_interrupt).
///
/// Records the rise while awaiting one, then the fall while awaiting one.
/// Any other transition, and every transition while no driver is bound, is
/// ignored. Constant time, no allocation.
pub fn on_echo_edge(level: Level, now_us: u32) {
    critical_section::with(|cs| {
        let cell = CAPTURE.borrow(cs);
        let mut capture = cell.get();
        if !capture.bound {
            return;
        }
        match (capture.awaiting_rise, level) {
            (true, Level::High) => {
                capture.rise_us = Some(now_us);
                capture.awaiting_rise = false;
            }
            (false, Level::Low) => {
                capture.fall_us = Some(now_us);
                capture.awaiting_rise = true;
            }
            _ => return,
        }
        cell.set(capture);
    });
}

/// Serializes tests that touch the process-wide state and starts each one
/// from an unbound coordinator.
#[cfg(test)]
pub(crate) fn exclusive() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    let guard = LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    unbind();
    guard
}
