use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::bus::BusDevice;
use super::map;

/// 1 KiB of system RAM, shadow-mirrored twice across its 2 KiB window.
///
/// The BIOS keeps housekeeping state at the top and bottom of the store;
/// the 874 bytes in between (including the system stack) belong to the
/// running game.
pub struct Ram {
    data: [u8; map::RAM.logical_size],
}

impl Ram {
    pub fn new() -> Self {
        Self {
            data: [0; map::RAM.logical_size],
        }
    }

    pub fn zero(&mut self) {
        self.data.fill(0);
    }

    /// Fill RAM with pseudo-random bytes. Power-on contents of the real
    /// chip are unpredictable and some titles (Mine Storm among them)
    /// read them before writing, so reset must not hand out zeroes.
    pub fn randomize(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        for byte in &mut self.data {
            *byte = rng.gen();
        }
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl BusDevice for Ram {
    fn read(&mut self, address: u16) -> u8 {
        self.data[map::RAM.map_address(address)]
    }

    fn write(&mut self, address: u16, value: u8) {
        self.data[map::RAM.map_address(address)] = value;
    }
}
