//! Model of the vector CRT: two analog integrators move the beam, a ramp
//! circuit gates them, and the blank/brightness inputs decide what gets
//! drawn. Hardware delays on the inputs are modeled with small per-input
//! FIFOs; getting these wrong skews every diagonal in every game.

use crate::core::math::{self, Vec2};
use crate::engine::{Line, RenderContext};

const RAMP_UP_DELAY: i32 = 5;
const RAMP_DOWN_DELAY: i32 = 10;
// The X integrator input runs through one more amplifier stage than Y and
// lags it by about 6 cycles.
const VELOCITY_X_DELAY: u32 = 6;
// Ramp and velocity delays push lines outside the nominal 256x256 grid;
// scale drawing down a little so everything fits again.
const LINE_DRAW_SCALE: f32 = 0.85;

/// A value that takes effect a fixed number of cycles after assignment.
#[derive(Clone, Copy, Debug, Default)]
struct DelayedValue {
    delay: u32,
    cycles_left: u32,
    next: f32,
    value: f32,
}

impl DelayedValue {
    fn with_delay(delay: u32) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    fn set(&mut self, value: f32) {
        self.next = value;
        self.cycles_left = self.delay;
        if self.delay == 0 {
            self.value = value;
        }
    }

    fn tick(&mut self) {
        if self.cycles_left > 0 {
            self.cycles_left -= 1;
            if self.cycles_left == 0 {
                self.value = self.next;
            }
        }
    }

    fn get(&self) -> f32 {
        self.value
    }
}

/// The ramp circuit's charging state. Integration happens while the ramp
/// is on or still decaying.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum RampPhase {
    #[default]
    RampOff,
    RampUp,
    RampOn,
    RampDown,
}

pub struct Beam {
    pos: Vec2,
    last_dir: Vec2,
    last_drawing_enabled: bool,

    velocity_x: DelayedValue,
    velocity_y: DelayedValue,
    xy_offset: f32,
    brightness: f32,
    blank: bool,
    integrators_enabled: bool,

    ramp_phase: RampPhase,
    ramp_delay: i32,

    brightness_curve: f32,
}

impl Beam {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            last_dir: Vec2::ZERO,
            last_drawing_enabled: false,
            velocity_x: DelayedValue::with_delay(VELOCITY_X_DELAY),
            velocity_y: DelayedValue::with_delay(0),
            xy_offset: 0.0,
            brightness: 0.0,
            blank: false,
            integrators_enabled: false,
            ramp_phase: RampPhase::RampOff,
            ramp_delay: 0,
            brightness_curve: 0.0,
        }
    }

    pub fn set_blank(&mut self, blanked: bool) {
        self.blank = blanked;
    }

    pub fn set_integrators_enabled(&mut self, enabled: bool) {
        self.integrators_enabled = enabled;
    }

    pub fn set_velocity_x(&mut self, value: i8) {
        self.velocity_x.set(value as f32);
    }

    pub fn set_velocity_y(&mut self, value: i8) {
        self.velocity_y.set(value as f32);
    }

    pub fn set_xy_offset(&mut self, value: i8) {
        self.xy_offset = value as f32;
    }

    pub fn set_brightness(&mut self, value: u8) {
        self.brightness = value as f32;
    }

    /// 0.0 keeps brightness linear; 1.0 applies the full perceptual curve.
    pub fn set_brightness_curve(&mut self, curve: f32) {
        self.brightness_curve = curve;
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Snap the beam to the origin (the ZERO line discharging the
    /// integrator capacitors). The next drawn segment must not extend
    /// across the jump.
    pub fn zero_beam(&mut self) {
        self.pos = Vec2::ZERO;
        self.last_drawing_enabled = false;
    }

    /// Advance one cycle: age the input FIFOs, run the ramp state machine,
    /// integrate the position, and emit or extend a line segment.
    pub fn step(&mut self, render_context: &mut RenderContext) {
        self.velocity_x.tick();
        self.velocity_y.tick();

        // Ramp switching toward up/down
        match self.ramp_phase {
            RampPhase::RampOff | RampPhase::RampDown => {
                if self.integrators_enabled {
                    self.ramp_phase = RampPhase::RampUp;
                    self.ramp_delay = RAMP_UP_DELAY;
                }
            }
            RampPhase::RampOn | RampPhase::RampUp => {
                if !self.integrators_enabled {
                    self.ramp_phase = RampPhase::RampDown;
                    self.ramp_delay = RAMP_DOWN_DELAY;
                }
            }
        }

        // Ramp settling into on/off
        match self.ramp_phase {
            RampPhase::RampUp => {
                self.ramp_delay -= 1;
                if self.ramp_delay <= 0 {
                    self.ramp_phase = RampPhase::RampOn;
                }
            }
            RampPhase::RampDown => {
                self.ramp_delay -= 1;
                if self.ramp_delay <= 0 {
                    self.ramp_phase = RampPhase::RampOff;
                }
            }
            _ => {}
        }

        let last_pos = self.pos;
        let velocity = Vec2::new(self.velocity_x.get(), self.velocity_y.get());
        let current_dir = velocity.normalized();

        // The beam moves while the ramp is on or still on its way down
        if matches!(self.ramp_phase, RampPhase::RampOn | RampPhase::RampDown) {
            let offset = Vec2::new(self.xy_offset, self.xy_offset);
            self.pos += (velocity + offset) / 128.0 * LINE_DRAW_SCALE;
        }

        // Dots get drawn even with the integrators off, so drawing is
        // gated only by blank and brightness.
        let drawing_enabled = !self.blank && self.brightness > 0.0 && self.brightness <= 128.0;
        if drawing_enabled {
            let extend = self.last_drawing_enabled
                && self.last_dir.magnitude() > 0.0
                && self.last_dir == current_dir;
            if let Some(last) = render_context.lines.last_mut().filter(|_| extend) {
                last.p1 = self.pos;
            } else {
                render_context.lines.push(Line {
                    p0: last_pos,
                    p1: self.pos,
                    brightness: self.shaped_brightness(),
                });
            }
        }

        self.last_drawing_enabled = drawing_enabled;
        self.last_dir = current_dir;
    }

    fn shaped_brightness(&self) -> f32 {
        let linear = self.brightness / 128.0;
        let curved = 1.0 - (1.0 - linear).powi(5);
        math::lerp(linear, curved, self.brightness_curve)
    }
}

impl Default for Beam {
    fn default() -> Self {
        Self::new()
    }
}
