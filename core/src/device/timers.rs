//! The VIA's two 16-bit interval timers.
//!
//! Timer 1 paces line drawing and can drive a square wave out of PB7;
//! Timer 2 is the 50 Hz game frame timer. Both count down once per CPU
//! cycle and wrap modulo 2^16; the interrupt flag rises on the cycle the
//! programmed count elapses.

use std::fmt;

use crate::core::error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerMode {
    FreeRunning,
    OneShot,
    PulseCounting,
}

impl fmt::Display for TimerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimerMode::FreeRunning => "free-running",
            TimerMode::OneShot => "one-shot",
            TimerMode::PulseCounting => "pulse-counting",
        };
        f.write_str(name)
    }
}

#[derive(Default)]
pub struct Timer1 {
    latch_low: u8,
    latch_high: u8,
    counter: u16,
    interrupt_flag: bool,
    pb7_enabled: bool,
    pb7_signal_low: bool,
}

impl Timer1 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only one-shot mode is implemented; the Vectrex BIOS and every known
    /// title leave the timer there. Other modes are reported and ignored
    /// so the emulator stays live.
    pub fn set_mode(&mut self, mode: TimerMode) {
        if mode != TimerMode::OneShot {
            error::unsupported(format_args!("timer 1 {mode} mode"));
        }
    }

    pub fn mode(&self) -> TimerMode {
        TimerMode::OneShot
    }

    pub fn write_counter_low(&mut self, value: u8) {
        // Counter-low writes land in the latch until the high write
        self.latch_low = value;
    }

    /// Writing the high byte transfers both latches into the counter,
    /// clears the interrupt flag, and re-arms PB7 (signal goes low until
    /// the count elapses).
    pub fn write_counter_high(&mut self, value: u8) {
        self.latch_high = value;
        self.counter = u16::from_be_bytes([self.latch_high, self.latch_low]);
        self.interrupt_flag = false;
        if self.pb7_enabled {
            self.pb7_signal_low = true;
        }
    }

    pub fn read_counter_low(&mut self) -> u8 {
        self.interrupt_flag = false;
        self.counter as u8
    }

    pub fn read_counter_high(&self) -> u8 {
        (self.counter >> 8) as u8
    }

    pub fn write_latch_low(&mut self, value: u8) {
        self.latch_low = value;
    }

    pub fn write_latch_high(&mut self, value: u8) {
        self.latch_high = value;
    }

    pub fn read_latch_low(&self) -> u8 {
        self.latch_low
    }

    pub fn read_latch_high(&self) -> u8 {
        self.latch_high
    }

    pub fn update(&mut self, cycles: u64) {
        let expired = cycles >= self.counter as u64;
        self.counter = self.counter.wrapping_sub(cycles as u16);
        if expired {
            self.interrupt_flag = true;
            self.pb7_signal_low = false;
        }
    }

    pub fn set_interrupt_flag(&mut self, raised: bool) {
        self.interrupt_flag = raised;
    }

    pub fn interrupt_flag(&self) -> bool {
        self.interrupt_flag
    }

    pub fn set_pb7_enabled(&mut self, enabled: bool) {
        self.pb7_enabled = enabled;
    }

    pub fn pb7_enabled(&self) -> bool {
        self.pb7_enabled
    }

    pub fn pb7_signal_low(&self) -> bool {
        self.pb7_signal_low
    }
}

#[derive(Default)]
pub struct Timer2 {
    // Timer 2 has no high-order latch
    latch_low: u8,
    counter: u16,
    interrupt_flag: bool,
}

impl Timer2 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_mode(&mut self, mode: TimerMode) {
        if mode != TimerMode::OneShot {
            error::unsupported(format_args!("timer 2 {mode} mode"));
        }
    }

    pub fn mode(&self) -> TimerMode {
        TimerMode::OneShot
    }

    pub fn write_counter_low(&mut self, value: u8) {
        self.latch_low = value;
    }

    pub fn write_counter_high(&mut self, value: u8) {
        self.counter = u16::from_be_bytes([value, self.latch_low]);
        self.interrupt_flag = false;
    }

    pub fn read_counter_low(&mut self) -> u8 {
        self.interrupt_flag = false;
        self.counter as u8
    }

    pub fn read_counter_high(&self) -> u8 {
        (self.counter >> 8) as u8
    }

    pub fn update(&mut self, cycles: u64) {
        let expired = cycles >= self.counter as u64;
        self.counter = self.counter.wrapping_sub(cycles as u16);
        if expired {
            self.interrupt_flag = true;
        }
    }

    pub fn set_interrupt_flag(&mut self, raised: bool) {
        self.interrupt_flag = raised;
    }

    pub fn interrupt_flag(&self) -> bool {
        self.interrupt_flag
    }
}
