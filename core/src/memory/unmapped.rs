use super::bus::BusDevice;
use crate::core::error;

/// Placeholder device for address windows with no hardware behind them:
/// the 2 KiB hole between the cartridge and RAM, and the window where both
/// the VIA and RAM are selected at once. Reads float to zero; every access
/// is reported as undefined.
pub struct UnmappedDevice {
    name: &'static str,
}

impl UnmappedDevice {
    /// The development/unmapped window below RAM.
    pub fn dev() -> Self {
        Self { name: "dev" }
    }

    /// The combined VIA+RAM selection window.
    pub fn illegal() -> Self {
        Self { name: "illegal" }
    }
}

impl BusDevice for UnmappedDevice {
    fn read(&mut self, address: u16) -> u8 {
        error::undefined(format_args!(
            "read from {} area address ${address:04X}",
            self.name
        ));
        0
    }

    fn write(&mut self, address: u16, value: u8) {
        error::undefined(format_args!(
            "write of ${value:02X} to {} area address ${address:04X}",
            self.name
        ));
    }
}
