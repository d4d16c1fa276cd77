pub mod bios;
pub mod bus;
pub mod cartridge;
pub mod map;
pub mod ram;
pub mod unmapped;

pub use bios::BiosRom;
pub use bus::{BusDevice, MemoryBus, SharedDevice, SyncMode};
pub use cartridge::Cartridge;
pub use map::Mapping;
pub use ram::Ram;
pub use unmapped::UnmappedDevice;

use std::fmt;

/// Errors surfaced when loading BIOS or cartridge images from disk.
#[derive(Debug)]
pub enum RomLoadError {
    /// Underlying I/O error (file not found, permission denied, etc.)
    Io(std::io::Error),

    /// BIOS images must be exactly 8 KiB.
    BadBiosSize(usize),

    /// Cartridge image exceeds the 48 KiB window.
    CartridgeTooLarge(usize),
}

impl fmt::Display for RomLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RomLoadError::Io(err) => write!(f, "i/o error: {err}"),
            RomLoadError::BadBiosSize(size) => {
                write!(f, "BIOS image is {size} bytes, expected exactly 8192")
            }
            RomLoadError::CartridgeTooLarge(size) => {
                write!(f, "cartridge image is {size} bytes, larger than the 49152-byte window")
            }
        }
    }
}

impl std::error::Error for RomLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RomLoadError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RomLoadError {
    fn from(err: std::io::Error) -> Self {
        RomLoadError::Io(err)
    }
}
