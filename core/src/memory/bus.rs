//! Memory bus: routes reads and writes to the device owning each address
//! and carries the per-device cycle ledger that keeps peripherals in step
//! with the CPU.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::error;

/// A device addressable through the bus. Reads take `&mut self` because
/// several VIA registers have read side effects (interrupt flags clear).
pub trait BusDevice {
    fn read(&mut self, address: u16) -> u8;
    fn write(&mut self, address: u16, value: u8);

    /// Advance internal state by `cycles`. Only called on devices
    /// registered with [`SyncMode::Enabled`].
    fn sync(&mut self, cycles: u64) {
        let _ = cycles;
    }
}

pub type SharedDevice = Rc<RefCell<dyn BusDevice>>;

/// Whether a device participates in per-cycle synchronization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncMode {
    Disabled,
    Enabled,
}

pub type ReadObserver = Box<dyn FnMut(u16, u8)>;
pub type WriteObserver = Box<dyn FnMut(u16, u8)>;

struct DeviceRecord {
    device: SharedDevice,
    start: u16,
    end: u16,
    sync_enabled: bool,
    pending_cycles: u64,
}

#[derive(Default)]
pub struct MemoryBus {
    // Sorted by range start
    devices: Vec<DeviceRecord>,
    on_read: Option<ReadObserver>,
    on_write: Option<WriteObserver>,
}

impl MemoryBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a device over an inclusive address range. Ranges must not
    /// overlap; an overlap is a wiring bug in the composition root, not an
    /// emulation fault, so it panics rather than going through the error
    /// policy.
    pub fn connect(&mut self, device: SharedDevice, range: (u16, u16), sync: SyncMode) {
        let (start, end) = range;
        assert!(start <= end, "inverted device range [${start:04X}, ${end:04X}]");
        for record in &self.devices {
            assert!(
                end < record.start || start > record.end,
                "device range [${start:04X}, ${end:04X}] overlaps [${:04X}, ${:04X}]",
                record.start,
                record.end
            );
        }

        self.devices.push(DeviceRecord {
            device,
            start,
            end,
            sync_enabled: sync == SyncMode::Enabled,
            pending_cycles: 0,
        });
        self.devices.sort_by_key(|record| record.start);
    }

    /// Install debugger/trace observers, fired synchronously inside `read`
    /// and `write`. Observer order relative to device access is part of the
    /// contract: writes fire the observer before the device sees the value,
    /// reads fire it after.
    pub fn set_observers(&mut self, on_read: Option<ReadObserver>, on_write: Option<WriteObserver>) {
        self.on_read = on_read;
        self.on_write = on_write;
    }

    pub fn read(&mut self, address: u16) -> u8 {
        let value = match self.find(address) {
            Some(index) => {
                self.flush_sync(index);
                self.devices[index].device.borrow_mut().read(address)
            }
            None => {
                error::unmapped(format_args!("read from unmapped address ${address:04X}"));
                0
            }
        };

        if let Some(observer) = self.on_read.as_mut() {
            observer(address, value);
        }
        value
    }

    pub fn write(&mut self, address: u16, value: u8) {
        if let Some(observer) = self.on_write.as_mut() {
            observer(address, value);
        }

        match self.find(address) {
            Some(index) => {
                self.flush_sync(index);
                self.devices[index].device.borrow_mut().write(address, value);
            }
            None => {
                error::unmapped(format_args!(
                    "write of ${value:02X} to unmapped address ${address:04X}"
                ));
            }
        }
    }

    /// Read without firing observers or flushing pending sync. Used by the
    /// trace and debugger hooks so that inspecting memory does not perturb
    /// access logs or device timing.
    pub fn read_raw(&mut self, address: u16) -> u8 {
        match self.find(address) {
            Some(index) => self.devices[index].device.borrow_mut().read(address),
            None => {
                error::unmapped(format_args!("raw read from unmapped address ${address:04X}"));
                0
            }
        }
    }

    /// Big-endian 16-bit read as two ordered 8-bit reads.
    pub fn read16(&mut self, address: u16) -> u16 {
        let high = self.read(address);
        let low = self.read(address.wrapping_add(1));
        u16::from_be_bytes([high, low])
    }

    /// Credit `cycles` to every sync-enabled device. The cycles are applied
    /// lazily, right before the next access to the device or on the next
    /// explicit [`sync`](Self::sync).
    pub fn add_sync_cycles(&mut self, cycles: u64) {
        for record in &mut self.devices {
            if record.sync_enabled {
                record.pending_cycles += cycles;
            }
        }
    }

    /// Flush pending cycles on every sync-enabled device.
    pub fn sync(&mut self) {
        for index in 0..self.devices.len() {
            self.flush_sync(index);
        }
    }

    fn flush_sync(&mut self, index: usize) {
        let record = &mut self.devices[index];
        if record.pending_cycles > 0 {
            let cycles = std::mem::take(&mut record.pending_cycles);
            record.device.borrow_mut().sync(cycles);
        }
    }

    fn find(&self, address: u16) -> Option<usize> {
        // Records are sorted by start, so the first record whose end bounds
        // the address is the unique candidate.
        if self.devices.first().is_some_and(|first| address >= first.start) {
            for (index, record) in self.devices.iter().enumerate() {
                if address <= record.end {
                    return (address >= record.start).then_some(index);
                }
            }
        }
        None
    }
}
