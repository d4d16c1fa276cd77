use std::path::Path;

use super::bus::BusDevice;
use super::{RomLoadError, map};
use crate::core::error;

/// Cartridge ROM in the 48 KiB window at the bottom of the address space.
/// Shorter images occupy the low portion; reads past the end of the image
/// float high, as on real cartridge hardware.
pub struct Cartridge {
    data: Vec<u8>,
}

impl Cartridge {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn load_image(&mut self, image: &[u8]) -> Result<(), RomLoadError> {
        if image.len() > map::CARTRIDGE.logical_size {
            return Err(RomLoadError::CartridgeTooLarge(image.len()));
        }
        self.data = image.to_vec();
        Ok(())
    }

    pub fn load_file(&mut self, path: &Path) -> Result<(), RomLoadError> {
        let image = std::fs::read(path)?;
        self.load_image(&image)
    }

    pub fn eject(&mut self) {
        self.data.clear();
    }

    pub fn is_loaded(&self) -> bool {
        !self.data.is_empty()
    }
}

impl Default for Cartridge {
    fn default() -> Self {
        Self::new()
    }
}

impl BusDevice for Cartridge {
    fn read(&mut self, address: u16) -> u8 {
        match self.data.get(map::CARTRIDGE.map_address(address)) {
            Some(&byte) => byte,
            None => 0xFF,
        }
    }

    fn write(&mut self, address: u16, value: u8) {
        error::undefined(format_args!(
            "write of ${value:02X} to cartridge ROM address ${address:04X}"
        ));
    }
}
