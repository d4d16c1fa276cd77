use std::path::Path;

use super::bus::BusDevice;
use super::{RomLoadError, map};
use crate::core::error;

/// 8 KiB ROM chip holding Mine Storm and the BIOS code.
pub struct BiosRom {
    data: [u8; map::BIOS.logical_size],
}

impl BiosRom {
    pub fn new() -> Self {
        Self {
            data: [0; map::BIOS.logical_size],
        }
    }

    /// Load a BIOS image. Anything but exactly 8192 bytes is rejected.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), RomLoadError> {
        if image.len() != self.data.len() {
            return Err(RomLoadError::BadBiosSize(image.len()));
        }
        self.data.copy_from_slice(image);
        Ok(())
    }

    pub fn load_file(&mut self, path: &Path) -> Result<(), RomLoadError> {
        let image = std::fs::read(path)?;
        self.load_image(&image)
    }
}

impl Default for BiosRom {
    fn default() -> Self {
        Self::new()
    }
}

impl BusDevice for BiosRom {
    fn read(&mut self, address: u16) -> u8 {
        self.data[map::BIOS.map_address(address)]
    }

    fn write(&mut self, address: u16, value: u8) {
        error::undefined(format_args!(
            "write of ${value:02X} to BIOS ROM address ${address:04X}"
        ));
    }
}
