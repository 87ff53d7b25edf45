// src/sensor/mock.rs
//
// Simulated HC-SR04 wiring for engine tests. The clock only moves when the
// driver delays or samples the echo pin, so busy-wait loops terminate.

use crate::common::{
    hal_traits::{DigitalIo, EdgeHandler, EdgeInterrupt, MicrosClock},
    pin::{EdgeTrigger, Level, PinDirection, PinId},
};
use core::cell::Cell;

pub(crate) const TRIG: PinId = PinId::new(9);
pub(crate) const ECHO: PinId = PinId::new(2);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct MockPinError;

/// Echo response relative to the falling edge of the trigger pulse.
#[derive(Debug, Copy, Clone)]
pub(crate) struct EchoProfile {
    pub rise_after_us: u32,
    /// `None` keeps the echo high forever.
    pub high_for_us: Option<u32>,
}

pub(crate) struct MockInterface {
    now_us: Cell<u32>,
    /// Clock advance per echo sample.
    pub tick_us: u32,
    pub echo: Option<EchoProfile>,
    pub fail_echo_reads: bool,
    pub fail_attach: bool,
    /// Number of upcoming detach calls that fail.
    pub failing_detaches: u32,
    pub trig_level: Level,
    pub trigger_fell_at: Option<u32>,
    pub trigger_pulses: u32,
    pub echo_samples: u32,
    pub modes: [Option<PinDirection>; 16],
    pub attached: Option<(PinId, EdgeTrigger, EdgeHandler)>,
    pub detached: Option<PinId>,
}

impl MockInterface {
    pub fn new(start_us: u32) -> Self {
        MockInterface {
            now_us: Cell::new(start_us),
            tick_us: 1,
            echo: None,
            fail_echo_reads: false,
            fail_attach: false,
            failing_detaches: 0,
            trig_level: Level::Low,
            trigger_fell_at: None,
            trigger_pulses: 0,
            echo_samples: 0,
            modes: [None; 16],
            attached: None,
            detached: None,
        }
    }

    pub fn with_echo(mut self, rise_after_us: u32, high_for_us: Option<u32>) -> Self {
        self.echo = Some(EchoProfile { rise_after_us, high_for_us });
        self
    }

    pub fn advance(&self, us: u32) {
        self.now_us.set(self.now_us.get().wrapping_add(us));
    }

    pub fn mode(&self, pin: PinId) -> Option<PinDirection> {
        self.modes[pin.number() as usize]
    }

    /// Simulates the platform's interrupt glue calling the registered handler.
    pub fn fire_edge(&self, level: Level, at_us: u32) {
        if let Some((_, _, handler)) = self.attached {
            handler(level, at_us);
        }
    }

    fn echo_level(&self, now: u32) -> Level {
        let (Some(fell), Some(profile)) = (self.trigger_fell_at, self.echo) else {
            return Level::Low;
        };
        let since = now.wrapping_sub(fell);
        let started = since >= profile.rise_after_us;
        let ended = profile
            .high_for_us
            .is_some_and(|high| since >= profile.rise_after_us + high);
        Level::from(started && !ended)
    }
}

impl MicrosClock for MockInterface {
    fn now_us(&self) -> u32 {
        self.now_us.get()
    }

    fn delay_us(&mut self, us: u32) {
        self.advance(us);
    }
}

impl DigitalIo for MockInterface {
    type Error = MockPinError;

    fn set_pin_mode(&mut self, pin: PinId, direction: PinDirection) -> Result<(), Self::Error> {
        self.modes[pin.number() as usize] = Some(direction);
        Ok(())
    }

    fn write_digital(&mut self, pin: PinId, level: Level) -> Result<(), Self::Error> {
        if pin == TRIG {
            if self.trig_level == Level::High && level == Level::Low {
                self.trigger_fell_at = Some(self.now_us());
                self.trigger_pulses += 1;
            }
            self.trig_level = level;
        }
        Ok(())
    }

    fn read_digital(&mut self, pin: PinId) -> Result<Level, Self::Error> {
        if pin != ECHO || self.fail_echo_reads {
            return Err(MockPinError);
        }
        let level = self.echo_level(self.now_us());
        self.echo_samples += 1;
        self.advance(self.tick_us);
        Ok(level)
    }
}

impl EdgeInterrupt for MockInterface {
    fn attach_edge_interrupt(
        &mut self,
        pin: PinId,
        trigger: EdgeTrigger,
        handler: EdgeHandler,
    ) -> Result<(), Self::Error> {
        if self.fail_attach {
            return Err(MockPinError);
        }
        self.attached = Some((pin, trigger, handler));
        Ok(())
    }

    fn detach_edge_interrupt(&mut self, pin: PinId) -> Result<(), Self::Error> {
        if self.failing_detaches > 0 {
            self.failing_detaches -= 1;
            return Err(MockPinError);
        }
        if matches!(self.attached, Some((p, _, _)) if p == pin) {
            self.attached = None;
        }
        self.detached = Some(pin);
        Ok(())
    }
}
