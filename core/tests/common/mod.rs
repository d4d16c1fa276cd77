#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use vectra_core::cpu::{Cpu, InterruptState};
use vectra_core::memory::{BusDevice, MemoryBus, SyncMode};

/// Flat 64 KiB read/write memory with no peripherals, for CPU-only tests.
pub struct FlatRam {
    pub memory: Box<[u8; 0x10000]>,
}

impl FlatRam {
    pub fn new() -> Self {
        Self {
            memory: Box::new([0; 0x10000]),
        }
    }
}

impl BusDevice for FlatRam {
    fn read(&mut self, address: u16) -> u8 {
        self.memory[address as usize]
    }

    fn write(&mut self, address: u16, value: u8) {
        self.memory[address as usize] = value;
    }
}

/// CPU + bus + flat memory, pre-wired. The stack pointer starts high so
/// push-heavy tests have room.
pub struct TestRig {
    pub cpu: Cpu,
    pub bus: MemoryBus,
    pub ram: Rc<RefCell<FlatRam>>,
}

impl TestRig {
    pub fn new() -> Self {
        let ram = Rc::new(RefCell::new(FlatRam::new()));
        let mut bus = MemoryBus::new();
        bus.connect(ram.clone(), (0x0000, 0xFFFF), SyncMode::Disabled);

        let mut cpu = Cpu::new();
        cpu.reg.s = 0x8000;
        cpu.reg.u = 0x7000;

        Self { cpu, bus, ram }
    }

    /// Rig with a program loaded at `origin` and PC pointing at it.
    pub fn with_program(origin: u16, program: &[u8]) -> Self {
        let mut rig = Self::new();
        rig.load(origin, program);
        rig.cpu.reg.pc = origin;
        rig
    }

    pub fn load(&mut self, address: u16, bytes: &[u8]) {
        let start = address as usize;
        self.ram.borrow_mut().memory[start..start + bytes.len()].copy_from_slice(bytes);
    }

    pub fn peek(&self, address: u16) -> u8 {
        self.ram.borrow().memory[address as usize]
    }

    pub fn peek16(&self, address: u16) -> u16 {
        u16::from_be_bytes([self.peek(address), self.peek(address.wrapping_add(1))])
    }

    pub fn poke(&mut self, address: u16, value: u8) {
        self.ram.borrow_mut().memory[address as usize] = value;
    }

    pub fn step(&mut self) -> u64 {
        self.cpu.step(&mut self.bus, &InterruptState::default())
    }

    pub fn step_with(&mut self, lines: InterruptState) -> u64 {
        self.cpu.step(&mut self.bus, &lines)
    }

    /// Step `count` instructions, returning the total elapsed cycles.
    pub fn step_n(&mut self, count: usize) -> u64 {
        (0..count).map(|_| self.step()).sum()
    }
}
