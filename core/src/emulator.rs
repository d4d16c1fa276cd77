//! Composition root: owns the CPU, the VIA, the passive byte stores, and
//! the memory bus that connects them.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use crate::cpu::{Cpu, InterruptState};
use crate::device::Via;
use crate::engine::{AudioContext, Input, RenderContext};
use crate::memory::{
    BiosRom, Cartridge, MemoryBus, Ram, RomLoadError, SyncMode, UnmappedDevice, map,
};

/// CPU cycles in one 50 Hz video frame at 1.5 MHz.
pub const CYCLES_PER_FRAME: u64 = 30_000;

pub struct Emulator {
    bus: MemoryBus,
    cpu: Cpu,
    via: Rc<RefCell<Via>>,
    ram: Rc<RefCell<Ram>>,
    bios: Rc<RefCell<BiosRom>>,
    cartridge: Rc<RefCell<Cartridge>>,
}

impl Emulator {
    pub fn new() -> Self {
        Self {
            bus: MemoryBus::new(),
            cpu: Cpu::new(),
            via: Rc::new(RefCell::new(Via::new())),
            ram: Rc::new(RefCell::new(Ram::new())),
            bios: Rc::new(RefCell::new(BiosRom::new())),
            cartridge: Rc::new(RefCell::new(Cartridge::new())),
        }
    }

    /// Wire every device onto the bus in memory-map order and load the
    /// BIOS image. Call once before `reset`.
    pub fn init(&mut self, bios_path: &Path) -> Result<(), RomLoadError> {
        let image = std::fs::read(bios_path)?;
        self.init_with_bios(&image)
    }

    /// `init` with an in-memory BIOS image (tests, embedded images).
    pub fn init_with_bios(&mut self, bios_image: &[u8]) -> Result<(), RomLoadError> {
        self.bus
            .connect(self.cartridge.clone(), map::CARTRIDGE.range(), SyncMode::Disabled);
        self.bus.connect(
            Rc::new(RefCell::new(UnmappedDevice::dev())),
            map::DEV.range(),
            SyncMode::Disabled,
        );
        self.bus
            .connect(self.ram.clone(), map::RAM.range(), SyncMode::Disabled);
        self.bus
            .connect(self.via.clone(), map::VIA.range(), SyncMode::Enabled);
        self.bus.connect(
            Rc::new(RefCell::new(UnmappedDevice::illegal())),
            map::ILLEGAL.range(),
            SyncMode::Disabled,
        );
        self.bus
            .connect(self.bios.clone(), map::BIOS.range(), SyncMode::Disabled);

        self.bios.borrow_mut().load_image(bios_image)
    }

    pub fn load_cartridge(&mut self, path: &Path) -> Result<(), RomLoadError> {
        self.cartridge.borrow_mut().load_file(path)
    }

    pub fn load_cartridge_image(&mut self, image: &[u8]) -> Result<(), RomLoadError> {
        self.cartridge.borrow_mut().load_image(image)
    }

    /// Power-cycle: RAM comes back with fresh random contents (some
    /// titles read it before writing), then the CPU and VIA reset and the
    /// CPU fetches the reset vector through the bus.
    pub fn reset(&mut self) {
        self.reset_with_seed(rand::random());
    }

    /// Deterministic variant of [`reset`](Self::reset) for golden traces
    /// and tests.
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.ram.borrow_mut().randomize(seed);
        self.via.borrow_mut().reset();
        self.cpu.reset(&mut self.bus);
    }

    /// Execute one instruction and credit its cycles to the peripherals.
    /// The explicit sync at the boundary keeps the VIA's interrupt lines
    /// fresh even when the program never touches a peripheral register
    /// (spinning on BRA while waiting for an IRQ).
    pub fn step(&mut self) -> u64 {
        let lines = {
            let via = self.via.borrow();
            InterruptState {
                nmi: false,
                irq: via.irq_asserted(),
                firq: via.firq_asserted(),
            }
        };
        let cycles = self.cpu.step(&mut self.bus, &lines);
        self.bus.add_sync_cycles(cycles);
        self.bus.sync();
        cycles
    }

    /// Step until `cycle_budget` cycles have elapsed, then flush pending
    /// sync so every device has caught up to the batch boundary.
    pub fn execute_frame(&mut self, cycle_budget: u64) -> u64 {
        let mut elapsed = 0;
        while elapsed < cycle_budget {
            elapsed += self.step();
        }
        self.bus.sync();
        elapsed
    }

    /// Host frame hook: forwards to the VIA (input latching, debug
    /// surfaces). Performs no CPU stepping.
    pub fn frame_update(&mut self, frame_time: f64) {
        self.via.borrow_mut().frame_update(frame_time);
    }

    pub fn set_input(&mut self, input: Input) {
        self.via.borrow_mut().set_input(input);
    }

    /// Borrow the line list produced since the renderer last cleared it.
    pub fn with_render_context<R>(&self, f: impl FnOnce(&mut RenderContext) -> R) -> R {
        f(self.via.borrow_mut().render_context_mut())
    }

    /// Borrow the audio sample buffer.
    pub fn with_audio_context<R>(&self, f: impl FnOnce(&mut AudioContext) -> R) -> R {
        f(self.via.borrow_mut().audio_context_mut())
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn bus_mut(&mut self) -> &mut MemoryBus {
        &mut self.bus
    }

    pub fn via(&self) -> &Rc<RefCell<Via>> {
        &self.via
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
