//! MC68A09 CPU: instruction fetch/decode/execute across three opcode
//! pages, interrupt dispatch, and the CWAI/SYNC wait states.

mod addressing;
mod alu;
mod branch;
mod load_store;
pub mod opcodes;
mod registers;
mod stack;
mod transfer;

pub use registers::{CcFlag, Registers};

use crate::core::error;
use crate::memory::MemoryBus;
use opcodes::AddressingMode;

/// Frequency of the CPU clock in cycles/second: 6 MHz crystal divided by 4.
pub const CPU_HZ: f64 = 6_000_000.0 / 4.0;

pub const VEC_SWI3: u16 = 0xFFF2;
pub const VEC_SWI2: u16 = 0xFFF4;
pub const VEC_FIRQ: u16 = 0xFFF6;
pub const VEC_IRQ: u16 = 0xFFF8;
pub const VEC_SWI: u16 = 0xFFFA;
pub const VEC_NMI: u16 = 0xFFFC;
pub const VEC_RESET: u16 = 0xFFFE;

// Service charges from interrupt recognition to the first handler
// instruction. Entire-state interrupts stack 12 bytes, FIRQ stacks 3.
const IRQ_SERVICE_CYCLES: u64 = 19;
const FIRQ_SERVICE_CYCLES: u64 = 10;

/// Interrupt lines sampled at each instruction boundary. IRQ and FIRQ are
/// level-sensitive; NMI is serviced on its rising edge regardless of masks.
#[derive(Clone, Copy, Debug, Default)]
pub struct InterruptState {
    pub nmi: bool,
    pub irq: bool,
    pub firq: bool,
}

pub struct Cpu {
    pub reg: Registers,
    nmi_line: bool,
    sync_waiting: bool,
    cwai_waiting: bool,
}

impl Cpu {
    pub fn new() -> Self {
        Self {
            reg: Registers::default(),
            nmi_line: false,
            sync_waiting: false,
            cwai_waiting: false,
        }
    }

    /// Hardware reset: clear the register file, mask both interrupts, and
    /// begin execution at the reset vector. Never suppressed by the error
    /// policy.
    pub fn reset(&mut self, bus: &mut MemoryBus) {
        self.reg = Registers::default();
        self.reg.set_flag(CcFlag::InterruptMask, true);
        self.reg.set_flag(CcFlag::FastInterruptMask, true);
        self.reg.pc = bus.read16(VEC_RESET);
        self.nmi_line = false;
        self.sync_waiting = false;
        self.cwai_waiting = false;
    }

    /// True while the CPU sits in a CWAI or SYNC wait state.
    pub fn is_waiting(&self) -> bool {
        self.sync_waiting || self.cwai_waiting
    }

    /// Execute one instruction and return the elapsed cycle count. If a
    /// pending interrupt is serviced, the step performs only the service
    /// sequence and returns its cycles.
    pub fn step(&mut self, bus: &mut MemoryBus, lines: &InterruptState) -> u64 {
        let nmi_edge = lines.nmi && !self.nmi_line;
        self.nmi_line = lines.nmi;

        if self.cwai_waiting {
            return self.cwai_resume(bus, nmi_edge, lines);
        }

        if self.sync_waiting {
            if !(nmi_edge || lines.firq || lines.irq) {
                return 1;
            }
            self.sync_waiting = false;
            // A masked line resumes execution at the next instruction; an
            // unmasked one is serviced below like any pending interrupt.
        }

        if nmi_edge {
            return self.service_entire(bus, VEC_NMI, true);
        }
        if lines.firq && !self.reg.flag(CcFlag::FastInterruptMask) {
            return self.service_fast(bus);
        }
        if lines.irq && !self.reg.flag(CcFlag::InterruptMask) {
            return self.service_entire(bus, VEC_IRQ, false);
        }

        self.execute_instruction(bus)
    }

    /// Full-frame interrupt entry shared by NMI and IRQ: stack the entire
    /// machine state with CC.Entire set, mask, and vector.
    fn service_entire(&mut self, bus: &mut MemoryBus, vector: u16, set_firq_mask: bool) -> u64 {
        self.push_entire_frame(bus);
        self.reg.set_flag(CcFlag::InterruptMask, true);
        if set_firq_mask {
            self.reg.set_flag(CcFlag::FastInterruptMask, true);
        }
        self.reg.pc = bus.read16(vector);
        IRQ_SERVICE_CYCLES
    }

    /// FIRQ entry: only PC and CC go on the stack, with CC.Entire clear so
    /// RTI knows to restore the short frame.
    fn service_fast(&mut self, bus: &mut MemoryBus) -> u64 {
        self.reg.set_flag(CcFlag::Entire, false);
        let pc = self.reg.pc;
        self.push_s16(bus, pc);
        let cc = self.reg.cc;
        self.push_s8(bus, cc);
        self.reg.set_flag(CcFlag::InterruptMask, true);
        self.reg.set_flag(CcFlag::FastInterruptMask, true);
        self.reg.pc = bus.read16(VEC_FIRQ);
        FIRQ_SERVICE_CYCLES
    }

    /// CWAI already stacked the entire state (with Entire set) before
    /// halting, so a permitted interrupt only needs masking and the vector
    /// fetch.
    fn cwai_resume(&mut self, bus: &mut MemoryBus, nmi_edge: bool, lines: &InterruptState) -> u64 {
        if nmi_edge {
            self.cwai_waiting = false;
            self.reg.set_flag(CcFlag::InterruptMask, true);
            self.reg.set_flag(CcFlag::FastInterruptMask, true);
            self.reg.pc = bus.read16(VEC_NMI);
            return IRQ_SERVICE_CYCLES;
        }
        if lines.firq && !self.reg.flag(CcFlag::FastInterruptMask) {
            self.cwai_waiting = false;
            self.reg.set_flag(CcFlag::InterruptMask, true);
            self.reg.set_flag(CcFlag::FastInterruptMask, true);
            self.reg.pc = bus.read16(VEC_FIRQ);
            return FIRQ_SERVICE_CYCLES;
        }
        if lines.irq && !self.reg.flag(CcFlag::InterruptMask) {
            self.cwai_waiting = false;
            self.reg.set_flag(CcFlag::InterruptMask, true);
            self.reg.pc = bus.read16(VEC_IRQ);
            return IRQ_SERVICE_CYCLES;
        }
        1
    }

    fn execute_instruction(&mut self, bus: &mut MemoryBus) -> u64 {
        let code = self.read_pc8(bus);
        let (page, entry) = if opcodes::is_page1_escape(code) {
            let code = self.read_pc8(bus);
            (1, opcodes::lookup(1, code))
        } else if opcodes::is_page2_escape(code) {
            let code = self.read_pc8(bus);
            (2, opcodes::lookup(2, code))
        } else {
            (0, opcodes::lookup(0, code))
        };

        if entry.mode == AddressingMode::Illegal {
            // PC has already advanced past the opcode, so a stream of
            // illegal bytes still makes forward progress.
            error::illegal(format_args!("opcode ${:02X} on page {page}", entry.code));
            return entry.cycles;
        }

        entry.cycles + self.dispatch(bus, page, entry.code, entry.mode)
    }

    /// Execute the decoded operation. Returns the cycles to add on top of
    /// the table's base count (indexed-mode surcharges, taken long
    /// branches, RTI's dynamic frame size, pushed/pulled bytes).
    fn dispatch(&mut self, bus: &mut MemoryBus, page: u8, code: u8, mode: AddressingMode) -> u64 {
        use CcFlag::Carry;

        match (page, code) {
            // --- Memory read-modify-write (direct/indexed/extended) ---
            (0, 0x00 | 0x60 | 0x70) => self.rmw8(bus, mode, |cpu, v| cpu.neg8(v)),
            (0, 0x03 | 0x63 | 0x73) => self.rmw8(bus, mode, |cpu, v| cpu.com8(v)),
            (0, 0x04 | 0x64 | 0x74) => self.rmw8(bus, mode, |cpu, v| cpu.lsr8(v)),
            (0, 0x06 | 0x66 | 0x76) => self.rmw8(bus, mode, |cpu, v| cpu.ror8(v)),
            (0, 0x07 | 0x67 | 0x77) => self.rmw8(bus, mode, |cpu, v| cpu.asr8(v)),
            (0, 0x08 | 0x68 | 0x78) => self.rmw8(bus, mode, |cpu, v| cpu.asl8(v)),
            (0, 0x09 | 0x69 | 0x79) => self.rmw8(bus, mode, |cpu, v| cpu.rol8(v)),
            (0, 0x0A | 0x6A | 0x7A) => self.rmw8(bus, mode, |cpu, v| cpu.dec8(v)),
            (0, 0x0C | 0x6C | 0x7C) => self.rmw8(bus, mode, |cpu, v| cpu.inc8(v)),
            (0, 0x0D | 0x6D | 0x7D) => self.op_tst_mem(bus, mode),
            (0, 0x0E | 0x6E | 0x7E) => self.op_jmp(bus, mode),
            (0, 0x0F | 0x6F | 0x7F) => self.rmw8(bus, mode, |cpu, _| cpu.clr8()),

            // --- Inherent and CC operations ---
            (0, 0x12) => 0, // NOP
            (0, 0x13) => self.op_sync(),
            (0, 0x19) => self.op_daa(),
            (0, 0x1A) => self.op_orcc(bus),
            (0, 0x1C) => self.op_andcc(bus),
            (0, 0x1D) => self.op_sex(),
            (0, 0x1E) => self.op_exg(bus),
            (0, 0x1F) => self.op_tfr(bus),
            (0, 0x3A) => self.op_abx(),
            (0, 0x3D) => self.op_mul(),

            // --- Branches and subroutine linkage ---
            (0, 0x16) => self.op_lbra(bus),
            (0, 0x17) => self.op_lbsr(bus),
            (0, 0x20..=0x2F) => self.op_branch_short(bus, code),
            (0, 0x8D) => self.op_bsr(bus),
            (1, 0x21..=0x2F) => self.op_branch_long(bus, code),
            (0, 0x9D | 0xAD | 0xBD) => self.op_jsr(bus, mode),
            (0, 0x39) => self.op_rts(bus),

            // --- Load effective address ---
            (0, 0x30..=0x33) => self.op_lea(bus, code),

            // --- Stack operations and software interrupts ---
            (0, 0x34) => self.op_pshs(bus),
            (0, 0x35) => self.op_puls(bus),
            (0, 0x36) => self.op_pshu(bus),
            (0, 0x37) => self.op_pulu(bus),
            (0, 0x3B) => self.op_rti(bus),
            (0, 0x3C) => self.op_cwai(bus),
            (0, 0x3F) => self.op_swi(bus, VEC_SWI, true),
            (1, 0x3F) => self.op_swi(bus, VEC_SWI2, false),
            (2, 0x3F) => self.op_swi(bus, VEC_SWI3, false),

            // --- Accumulator A inherent ---
            (0, 0x40) => { self.reg.a = self.neg8(self.reg.a); 0 }
            (0, 0x43) => { self.reg.a = self.com8(self.reg.a); 0 }
            (0, 0x44) => { self.reg.a = self.lsr8(self.reg.a); 0 }
            (0, 0x46) => { self.reg.a = self.ror8(self.reg.a); 0 }
            (0, 0x47) => { self.reg.a = self.asr8(self.reg.a); 0 }
            (0, 0x48) => { self.reg.a = self.asl8(self.reg.a); 0 }
            (0, 0x49) => { self.reg.a = self.rol8(self.reg.a); 0 }
            (0, 0x4A) => { self.reg.a = self.dec8(self.reg.a); 0 }
            (0, 0x4C) => { self.reg.a = self.inc8(self.reg.a); 0 }
            (0, 0x4D) => { self.tst8(self.reg.a); 0 }
            (0, 0x4F) => { self.reg.a = self.clr8(); 0 }

            // --- Accumulator B inherent ---
            (0, 0x50) => { self.reg.b = self.neg8(self.reg.b); 0 }
            (0, 0x53) => { self.reg.b = self.com8(self.reg.b); 0 }
            (0, 0x54) => { self.reg.b = self.lsr8(self.reg.b); 0 }
            (0, 0x56) => { self.reg.b = self.ror8(self.reg.b); 0 }
            (0, 0x57) => { self.reg.b = self.asr8(self.reg.b); 0 }
            (0, 0x58) => { self.reg.b = self.asl8(self.reg.b); 0 }
            (0, 0x59) => { self.reg.b = self.rol8(self.reg.b); 0 }
            (0, 0x5A) => { self.reg.b = self.dec8(self.reg.b); 0 }
            (0, 0x5C) => { self.reg.b = self.inc8(self.reg.b); 0 }
            (0, 0x5D) => { self.tst8(self.reg.b); 0 }
            (0, 0x5F) => { self.reg.b = self.clr8(); 0 }

            // --- Accumulator A binary ALU ---
            (0, 0x80 | 0x90 | 0xA0 | 0xB0) => {
                self.op_alu8(bus, mode, |cpu, m| cpu.reg.a = cpu.sub8(cpu.reg.a, m, false))
            }
            (0, 0x81 | 0x91 | 0xA1 | 0xB1) => {
                self.op_alu8(bus, mode, |cpu, m| { cpu.sub8(cpu.reg.a, m, false); })
            }
            (0, 0x82 | 0x92 | 0xA2 | 0xB2) => self.op_alu8(bus, mode, |cpu, m| {
                let carry = cpu.reg.flag(Carry);
                cpu.reg.a = cpu.sub8(cpu.reg.a, m, carry);
            }),
            (0, 0x84 | 0x94 | 0xA4 | 0xB4) => {
                self.op_alu8(bus, mode, |cpu, m| cpu.reg.a = cpu.and8(cpu.reg.a, m))
            }
            (0, 0x85 | 0x95 | 0xA5 | 0xB5) => {
                self.op_alu8(bus, mode, |cpu, m| { cpu.and8(cpu.reg.a, m); })
            }
            (0, 0x86 | 0x96 | 0xA6 | 0xB6) => {
                self.op_alu8(bus, mode, |cpu, m| cpu.reg.a = cpu.load8(m))
            }
            (0, 0x88 | 0x98 | 0xA8 | 0xB8) => {
                self.op_alu8(bus, mode, |cpu, m| cpu.reg.a = cpu.eor8(cpu.reg.a, m))
            }
            (0, 0x89 | 0x99 | 0xA9 | 0xB9) => self.op_alu8(bus, mode, |cpu, m| {
                let carry = cpu.reg.flag(Carry);
                cpu.reg.a = cpu.add8(cpu.reg.a, m, carry);
            }),
            (0, 0x8A | 0x9A | 0xAA | 0xBA) => {
                self.op_alu8(bus, mode, |cpu, m| cpu.reg.a = cpu.or8(cpu.reg.a, m))
            }
            (0, 0x8B | 0x9B | 0xAB | 0xBB) => {
                self.op_alu8(bus, mode, |cpu, m| cpu.reg.a = cpu.add8(cpu.reg.a, m, false))
            }
            (0, 0x97 | 0xA7 | 0xB7) => self.op_st8(bus, mode, self.reg.a),

            // --- Accumulator B binary ALU ---
            (0, 0xC0 | 0xD0 | 0xE0 | 0xF0) => {
                self.op_alu8(bus, mode, |cpu, m| cpu.reg.b = cpu.sub8(cpu.reg.b, m, false))
            }
            (0, 0xC1 | 0xD1 | 0xE1 | 0xF1) => {
                self.op_alu8(bus, mode, |cpu, m| { cpu.sub8(cpu.reg.b, m, false); })
            }
            (0, 0xC2 | 0xD2 | 0xE2 | 0xF2) => self.op_alu8(bus, mode, |cpu, m| {
                let carry = cpu.reg.flag(Carry);
                cpu.reg.b = cpu.sub8(cpu.reg.b, m, carry);
            }),
            (0, 0xC4 | 0xD4 | 0xE4 | 0xF4) => {
                self.op_alu8(bus, mode, |cpu, m| cpu.reg.b = cpu.and8(cpu.reg.b, m))
            }
            (0, 0xC5 | 0xD5 | 0xE5 | 0xF5) => {
                self.op_alu8(bus, mode, |cpu, m| { cpu.and8(cpu.reg.b, m); })
            }
            (0, 0xC6 | 0xD6 | 0xE6 | 0xF6) => {
                self.op_alu8(bus, mode, |cpu, m| cpu.reg.b = cpu.load8(m))
            }
            (0, 0xC8 | 0xD8 | 0xE8 | 0xF8) => {
                self.op_alu8(bus, mode, |cpu, m| cpu.reg.b = cpu.eor8(cpu.reg.b, m))
            }
            (0, 0xC9 | 0xD9 | 0xE9 | 0xF9) => self.op_alu8(bus, mode, |cpu, m| {
                let carry = cpu.reg.flag(Carry);
                cpu.reg.b = cpu.add8(cpu.reg.b, m, carry);
            }),
            (0, 0xCA | 0xDA | 0xEA | 0xFA) => {
                self.op_alu8(bus, mode, |cpu, m| cpu.reg.b = cpu.or8(cpu.reg.b, m))
            }
            (0, 0xCB | 0xDB | 0xEB | 0xFB) => {
                self.op_alu8(bus, mode, |cpu, m| cpu.reg.b = cpu.add8(cpu.reg.b, m, false))
            }
            (0, 0xD7 | 0xE7 | 0xF7) => self.op_st8(bus, mode, self.reg.b),

            // --- 16-bit arithmetic ---
            (0, 0x83 | 0x93 | 0xA3 | 0xB3) => self.op_alu16(bus, mode, |cpu, m| {
                let result = cpu.sub16(cpu.reg.d(), m);
                cpu.reg.set_d(result);
            }),
            (0, 0xC3 | 0xD3 | 0xE3 | 0xF3) => self.op_alu16(bus, mode, |cpu, m| {
                let result = cpu.add16(cpu.reg.d(), m);
                cpu.reg.set_d(result);
            }),
            (0, 0x8C | 0x9C | 0xAC | 0xBC) => {
                self.op_alu16(bus, mode, |cpu, m| { cpu.sub16(cpu.reg.x, m); })
            }
            (1, 0x83 | 0x93 | 0xA3 | 0xB3) => {
                self.op_alu16(bus, mode, |cpu, m| { cpu.sub16(cpu.reg.d(), m); })
            }
            (1, 0x8C | 0x9C | 0xAC | 0xBC) => {
                self.op_alu16(bus, mode, |cpu, m| { cpu.sub16(cpu.reg.y, m); })
            }
            (2, 0x83 | 0x93 | 0xA3 | 0xB3) => {
                self.op_alu16(bus, mode, |cpu, m| { cpu.sub16(cpu.reg.u, m); })
            }
            (2, 0x8C | 0x9C | 0xAC | 0xBC) => {
                self.op_alu16(bus, mode, |cpu, m| { cpu.sub16(cpu.reg.s, m); })
            }

            // --- 16-bit loads and stores ---
            (0, 0x8E | 0x9E | 0xAE | 0xBE) => {
                self.op_alu16(bus, mode, |cpu, m| cpu.reg.x = cpu.load16(m))
            }
            (0, 0x9F | 0xAF | 0xBF) => self.op_st16(bus, mode, self.reg.x),
            (0, 0xCC | 0xDC | 0xEC | 0xFC) => self.op_alu16(bus, mode, |cpu, m| {
                let value = cpu.load16(m);
                cpu.reg.set_d(value);
            }),
            (0, 0xDD | 0xED | 0xFD) => self.op_st16(bus, mode, self.reg.d()),
            (0, 0xCE | 0xDE | 0xEE | 0xFE) => {
                self.op_alu16(bus, mode, |cpu, m| cpu.reg.u = cpu.load16(m))
            }
            (0, 0xDF | 0xEF | 0xFF) => self.op_st16(bus, mode, self.reg.u),
            (1, 0x8E | 0x9E | 0xAE | 0xBE) => {
                self.op_alu16(bus, mode, |cpu, m| cpu.reg.y = cpu.load16(m))
            }
            (1, 0x9F | 0xAF | 0xBF) => self.op_st16(bus, mode, self.reg.y),
            (1, 0xCE | 0xDE | 0xEE | 0xFE) => {
                self.op_alu16(bus, mode, |cpu, m| cpu.reg.s = cpu.load16(m))
            }
            (1, 0xDF | 0xEF | 0xFF) => self.op_st16(bus, mode, self.reg.s),

            _ => {
                error::illegal(format_args!("opcode ${code:02X} on page {page}"));
                0
            }
        }
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
