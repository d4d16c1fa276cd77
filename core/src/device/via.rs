//! 6522 Versatile Interface Adapter: the hub that wires the CPU to every
//! Vectrex peripheral. Port A carries the DAC value and the sound chip's
//! data bus; port B selects where the DAC value lands (Y integrator,
//! X/Y offset, brightness, or sound) and drives the sound chip's control
//! lines; the timers, shift register, PSG, and beam all live behind it
//! and advance through its sync hook.

use crate::core::error;
use crate::core::math::AverageValue;
use crate::cpu::CPU_HZ;
use crate::device::beam::Beam;
use crate::device::psg::Psg;
use crate::device::shift_register::{ShiftRegister, ShiftRegisterMode};
use crate::device::timers::{Timer1, Timer2, TimerMode};
use crate::engine::{AudioContext, Input, RenderContext};
use crate::memory::bus::BusDevice;
use crate::memory::map;

/// Register offsets within the VIA's 16-byte window.
mod reg {
    pub const PORT_B: usize = 0x0;
    /// Port A with handshake: reads clear the CA1 flag.
    pub const PORT_A: usize = 0x1;
    pub const DDR_B: usize = 0x2;
    pub const DDR_A: usize = 0x3;
    pub const T1_COUNTER_LOW: usize = 0x4;
    pub const T1_COUNTER_HIGH: usize = 0x5;
    pub const T1_LATCH_LOW: usize = 0x6;
    pub const T1_LATCH_HIGH: usize = 0x7;
    pub const T2_COUNTER_LOW: usize = 0x8;
    pub const T2_COUNTER_HIGH: usize = 0x9;
    pub const SHIFT: usize = 0xA;
    pub const AUX_CNTL: usize = 0xB;
    pub const PERIPH_CNTL: usize = 0xC;
    pub const INT_FLAGS: usize = 0xD;
    pub const INT_ENABLE: usize = 0xE;
    pub const PORT_A_NO_HANDSHAKE: usize = 0xF;
}

/// Port B bit assignments per the Vectrex schematic.
mod port_b {
    /// PB0: 0 enables the analog multiplexer.
    pub const MUX_DISABLED: u8 = 0x01;
    /// PB1-PB2: multiplexer channel select.
    pub const MUX_SEL_MASK: u8 = 0x06;
    pub const MUX_SEL_SHIFT: u8 = 1;
    /// PB3: sound chip BC1.
    pub const SOUND_BC1: u8 = 0x08;
    /// PB4: sound chip BDIR.
    pub const SOUND_BDIR: u8 = 0x10;
    /// PB5: input from the joystick pot comparator.
    pub const COMPARATOR: u8 = 0x20;
    /// PB7: 0 charges the integrators (RAMP, active low).
    pub const RAMP_DISABLED: u8 = 0x80;
}

/// Multiplexer channels fanned out from the DAC.
mod mux {
    pub const Y_VELOCITY: u8 = 0;
    pub const XY_OFFSET: u8 = 1;
    pub const BRIGHTNESS: u8 = 2;
    pub const SOUND: u8 = 3;
}

/// Interrupt flag/enable bits (IFR/IER layout).
pub mod interrupt {
    pub const CA2: u8 = 0x01;
    pub const CA1: u8 = 0x02;
    pub const SHIFT: u8 = 0x04;
    pub const CB2: u8 = 0x08;
    pub const CB1: u8 = 0x10;
    pub const TIMER2: u8 = 0x20;
    pub const TIMER1: u8 = 0x40;
    /// Set on IFR reads iff any (flag AND enable) pair is true.
    pub const ANY: u8 = 0x80;
}

pub struct Via {
    // Register file
    port_b: u8,
    port_a: u8,
    ddr_b: u8,
    ddr_a: u8,
    aux_cntl: u8,
    periph_cntl: u8,
    interrupt_enable: u8,

    // Sub-devices
    timer1: Timer1,
    timer2: Timer2,
    shift_register: ShiftRegister,
    psg: Psg,
    beam: Beam,

    // Cartridge-port lines
    ca1_line: bool,
    ca1_interrupt_flag: bool,
    firq_enabled: bool,

    // Host-facing contexts
    input: Input,
    render_context: RenderContext,
    audio_context: AudioContext,

    // Audio decimation down to the host sample rate
    elapsed_audio_cycles: f32,
    direct_audio_level: f32,
    direct_samples: AverageValue,
    psg_samples: AverageValue,
}

impl Via {
    pub fn new() -> Self {
        Self {
            port_b: 0,
            port_a: 0,
            ddr_b: 0,
            ddr_a: 0,
            aux_cntl: 0,
            periph_cntl: 0,
            interrupt_enable: 0,
            timer1: Timer1::new(),
            timer2: Timer2::new(),
            shift_register: ShiftRegister::new(),
            psg: Psg::new(),
            beam: Beam::new(),
            ca1_line: false,
            ca1_interrupt_flag: false,
            firq_enabled: false,
            input: Input::default(),
            render_context: RenderContext::default(),
            audio_context: AudioContext::default(),
            elapsed_audio_cycles: 0.0,
            direct_audio_level: 0.0,
            direct_samples: AverageValue::default(),
            psg_samples: AverageValue::default(),
        }
    }

    /// Power-on/reset state. Contexts and input survive so the host's
    /// wiring stays intact across resets.
    pub fn reset(&mut self) {
        self.port_b = 0;
        self.port_a = 0;
        self.ddr_b = 0;
        self.ddr_a = 0;
        self.aux_cntl = 0;
        self.periph_cntl = 0;
        self.interrupt_enable = 0;
        self.timer1 = Timer1::new();
        self.timer2 = Timer2::new();
        self.shift_register = ShiftRegister::new();
        self.psg.reset();
        self.beam = Beam::new();
        self.ca1_line = false;
        self.ca1_interrupt_flag = false;
        self.elapsed_audio_cycles = 0.0;
        self.direct_audio_level = 0.0;
        self.direct_samples = AverageValue::default();
        self.psg_samples = AverageValue::default();
    }

    /// Host frame hook: latch the input snapshot the upcoming stepping
    /// batch will see.
    pub fn frame_update(&mut self, _frame_time: f64) {
        self.psg.set_port_input(self.input.psg_button_mask());
    }

    pub fn set_input(&mut self, input: Input) {
        self.input = input;
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn render_context_mut(&mut self) -> &mut RenderContext {
        &mut self.render_context
    }

    pub fn audio_context_mut(&mut self) -> &mut AudioContext {
        &mut self.audio_context
    }

    pub fn beam(&self) -> &Beam {
        &self.beam
    }

    pub fn beam_mut(&mut self) -> &mut Beam {
        &mut self.beam
    }

    pub fn timer1(&self) -> &Timer1 {
        &self.timer1
    }

    pub fn timer2(&self) -> &Timer2 {
        &self.timer2
    }

    pub fn shift_register(&self) -> &ShiftRegister {
        &self.shift_register
    }

    pub fn psg(&self) -> &Psg {
        &self.psg
    }

    /// IRQ line to the CPU: any raised flag with its enable bit set.
    pub fn irq_asserted(&self) -> bool {
        self.interrupt_flag_value() & interrupt::ANY != 0
    }

    /// FIRQ comes in on the cartridge port and is unused by most titles;
    /// when a cartridge enables it, shift-register completion drives it.
    pub fn firq_asserted(&self) -> bool {
        self.firq_enabled
            && self.shift_register.interrupt_flag()
            && self.interrupt_enable & interrupt::SHIFT != 0
    }

    pub fn set_firq_enabled(&mut self, enabled: bool) {
        self.firq_enabled = enabled;
    }

    /// CA1 edge input from the cartridge port. PCR bit 0 selects the
    /// active edge: 0 = falling, 1 = rising.
    pub fn set_ca1(&mut self, level: bool) {
        let rising = level && !self.ca1_line;
        let falling = !level && self.ca1_line;
        self.ca1_line = level;

        let trigger_on_rising = self.periph_cntl & 0x01 != 0;
        if (trigger_on_rising && rising) || (!trigger_on_rising && falling) {
            self.ca1_interrupt_flag = true;
        }
    }

    fn interrupt_flag_value(&self) -> u8 {
        let mut flags = 0;
        if self.timer1.interrupt_flag() {
            flags |= interrupt::TIMER1;
        }
        if self.timer2.interrupt_flag() {
            flags |= interrupt::TIMER2;
        }
        if self.shift_register.interrupt_flag() {
            flags |= interrupt::SHIFT;
        }
        if self.ca1_interrupt_flag {
            flags |= interrupt::CA1;
        }
        if flags & self.interrupt_enable != 0 {
            flags |= interrupt::ANY;
        }
        flags
    }

    /// Comparator output: high while the selected pot line exceeds the
    /// DAC value latched on port A. Surfaces on PB5.
    fn pot_comparator(&self) -> bool {
        let channel = (self.port_b & port_b::MUX_SEL_MASK) >> port_b::MUX_SEL_SHIFT;
        self.input.pot(channel) as i16 > self.port_a as i8 as i16
    }

    /// Route the DAC (port A latch) to its consumers. The X integrator is
    /// fed directly; the multiplexer fans the value out to the selected
    /// target when enabled.
    fn strobe_dac(&mut self) {
        let dac = self.port_a as i8;
        self.beam.set_velocity_x(dac);

        if self.port_b & port_b::MUX_DISABLED == 0 {
            match (self.port_b & port_b::MUX_SEL_MASK) >> port_b::MUX_SEL_SHIFT {
                mux::Y_VELOCITY => self.beam.set_velocity_y(dac),
                mux::XY_OFFSET => self.beam.set_xy_offset(dac),
                mux::BRIGHTNESS => self.beam.set_brightness(self.port_a),
                mux::SOUND => self.direct_audio_level = dac as f32 / 128.0,
                _ => unreachable!(),
            }
        }
    }

    fn update_psg_bus(&mut self) {
        let bdir = self.port_b & port_b::SOUND_BDIR != 0;
        let bc1 = self.port_b & port_b::SOUND_BC1 != 0;
        self.psg.set_bus_control(bdir, bc1, self.port_a);
    }

    fn read_port_a(&self) -> u8 {
        // In read mode port A's input pins carry the sound chip's bus
        let external = if self.psg.in_read_mode() {
            self.psg.read_da()
        } else {
            0
        };
        (self.port_a & self.ddr_a) | (external & !self.ddr_a)
    }

    fn read_port_b(&self) -> u8 {
        let mut external = 0;
        if self.pot_comparator() {
            external |= port_b::COMPARATOR;
        }
        let mut value = (self.port_b & self.ddr_b) | (external & !self.ddr_b);

        // PB7 is multiplexed with timer 1's square-wave output
        if self.timer1.pb7_enabled() {
            if self.timer1.pb7_signal_low() {
                value &= !port_b::RAMP_DISABLED;
            } else {
                value |= port_b::RAMP_DISABLED;
            }
        }
        value
    }

    /// RAMP level seen by the integrators: PB7 from the output latch, or
    /// from timer 1 when its PB7 output is enabled. Active low.
    fn ramp_enabled(&self) -> bool {
        if self.timer1.pb7_enabled() {
            self.timer1.pb7_signal_low()
        } else {
            self.port_b & port_b::RAMP_DISABLED == 0
        }
    }

    /// BLANK level seen by the beam: CB2, driven by the shift register
    /// when it is running, else by PCR manual output (110 = low = blank).
    fn blank_asserted(&self) -> bool {
        if self.shift_register.mode() == ShiftRegisterMode::Disabled {
            self.periph_cntl >> 5 == 0b110
        } else {
            !self.shift_register.cb2_active()
        }
    }

    fn write_aux_cntl(&mut self, value: u8) {
        self.aux_cntl = value;
        self.timer1.set_pb7_enabled(value & 0x80 != 0);
        self.timer1.set_mode(if value & 0x40 != 0 {
            TimerMode::FreeRunning
        } else {
            TimerMode::OneShot
        });
        self.timer2.set_mode(if value & 0x20 != 0 {
            TimerMode::PulseCounting
        } else {
            TimerMode::OneShot
        });
        self.shift_register.set_mode_bits(value >> 2);
        if value & 0x03 != 0 {
            error::unsupported(format_args!("VIA port latching (ACR ${value:02X})"));
        }
    }

    fn write_periph_cntl(&mut self, value: u8) {
        self.periph_cntl = value;
        // CA2 manual-low drives /ZERO: the integrator capacitors discharge
        // and the beam snaps back to center.
        if (value >> 1) & 0x07 == 0b110 {
            self.beam.zero_beam();
        }
    }

    fn write_interrupt_flags(&mut self, value: u8) {
        // Writing 1s clears the corresponding flags
        if value & interrupt::TIMER1 != 0 {
            self.timer1.set_interrupt_flag(false);
        }
        if value & interrupt::TIMER2 != 0 {
            self.timer2.set_interrupt_flag(false);
        }
        if value & interrupt::SHIFT != 0 {
            self.shift_register.set_interrupt_flag(false);
        }
        if value & interrupt::CA1 != 0 {
            self.ca1_interrupt_flag = false;
        }
    }

    fn write_interrupt_enable(&mut self, value: u8) {
        // Bit 7 selects set (1) or clear (0) of the written enable bits
        if value & 0x80 != 0 {
            self.interrupt_enable |= value & 0x7F;
        } else {
            self.interrupt_enable &= !(value & 0x7F);
        }
    }

    /// Advance every sub-device. Order is timers, shift register, PSG,
    /// beam; the audio decimator runs last so a sample sees the cycle's
    /// final levels.
    fn do_sync(&mut self, cycles: u64) {
        let cycles_per_sample = CPU_HZ as f32 / self.audio_context.sample_rate;

        for _ in 0..cycles {
            self.timer1.update(1);
            self.timer2.update(1);
            self.shift_register.update(1);
            self.psg.update(1);

            self.beam.set_integrators_enabled(self.ramp_enabled());
            let blank = self.blank_asserted();
            self.beam.set_blank(blank);
            self.beam.step(&mut self.render_context);

            self.direct_samples.add(self.direct_audio_level);
            self.psg_samples.add(self.psg.sample());
            self.elapsed_audio_cycles += 1.0;
            if self.elapsed_audio_cycles >= cycles_per_sample {
                self.elapsed_audio_cycles -= cycles_per_sample;
                let mixed =
                    self.direct_samples.average_and_reset() + self.psg_samples.average_and_reset();
                self.audio_context.samples.push(mixed.clamp(-1.0, 1.0));
            }
        }
    }
}

impl Default for Via {
    fn default() -> Self {
        Self::new()
    }
}

impl BusDevice for Via {
    fn read(&mut self, address: u16) -> u8 {
        match map::VIA.map_address(address) {
            reg::PORT_B => self.read_port_b(),
            reg::PORT_A => {
                self.ca1_interrupt_flag = false;
                self.read_port_a()
            }
            reg::DDR_B => self.ddr_b,
            reg::DDR_A => self.ddr_a,
            reg::T1_COUNTER_LOW => self.timer1.read_counter_low(),
            reg::T1_COUNTER_HIGH => self.timer1.read_counter_high(),
            reg::T1_LATCH_LOW => self.timer1.read_latch_low(),
            reg::T1_LATCH_HIGH => self.timer1.read_latch_high(),
            reg::T2_COUNTER_LOW => self.timer2.read_counter_low(),
            reg::T2_COUNTER_HIGH => self.timer2.read_counter_high(),
            reg::SHIFT => self.shift_register.read_value(),
            reg::AUX_CNTL => self.aux_cntl,
            reg::PERIPH_CNTL => self.periph_cntl,
            reg::INT_FLAGS => self.interrupt_flag_value(),
            // IER reads have bit 7 fixed high
            reg::INT_ENABLE => self.interrupt_enable | 0x80,
            reg::PORT_A_NO_HANDSHAKE => self.read_port_a(),
            _ => unreachable!(),
        }
    }

    fn write(&mut self, address: u16, value: u8) {
        match map::VIA.map_address(address) {
            reg::PORT_B => {
                self.port_b = value;
                self.update_psg_bus();
                self.strobe_dac();
                self.beam.set_integrators_enabled(self.ramp_enabled());
            }
            reg::PORT_A | reg::PORT_A_NO_HANDSHAKE => {
                self.port_a = value;
                self.strobe_dac();
            }
            reg::DDR_B => self.ddr_b = value,
            reg::DDR_A => self.ddr_a = value,
            reg::T1_COUNTER_LOW => self.timer1.write_counter_low(value),
            reg::T1_COUNTER_HIGH => self.timer1.write_counter_high(value),
            reg::T1_LATCH_LOW => self.timer1.write_latch_low(value),
            reg::T1_LATCH_HIGH => self.timer1.write_latch_high(value),
            reg::T2_COUNTER_LOW => self.timer2.write_counter_low(value),
            reg::T2_COUNTER_HIGH => self.timer2.write_counter_high(value),
            reg::SHIFT => self.shift_register.set_value(value),
            reg::AUX_CNTL => self.write_aux_cntl(value),
            reg::PERIPH_CNTL => self.write_periph_cntl(value),
            reg::INT_FLAGS => self.write_interrupt_flags(value),
            reg::INT_ENABLE => self.write_interrupt_enable(value),
            _ => unreachable!(),
        }
    }

    fn sync(&mut self, cycles: u64) {
        self.do_sync(cycles);
    }
}
