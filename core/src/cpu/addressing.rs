//! Effective-address resolution. The indexed postbyte decode is the fiddly
//! part: the postbyte picks one of roughly twenty computations, and the
//! indirect bit is applied last as a 16-bit dereference through the bus.

use super::opcodes::AddressingMode;
use super::Cpu;
use crate::core::error;
use crate::memory::MemoryBus;

impl Cpu {
    #[inline]
    pub(crate) fn read_pc8(&mut self, bus: &mut MemoryBus) -> u8 {
        let value = bus.read(self.reg.pc);
        self.reg.pc = self.reg.pc.wrapping_add(1);
        value
    }

    #[inline]
    pub(crate) fn read_pc16(&mut self, bus: &mut MemoryBus) -> u16 {
        let high = self.read_pc8(bus);
        let low = self.read_pc8(bus);
        u16::from_be_bytes([high, low])
    }

    /// Resolve the effective address for a memory-referencing mode.
    /// Returns the address and the mode-dependent cycle surcharge (zero for
    /// everything but indexed modes).
    pub(crate) fn resolve_ea(&mut self, bus: &mut MemoryBus, mode: AddressingMode) -> (u16, u64) {
        match mode {
            AddressingMode::Direct => {
                let low = self.read_pc8(bus);
                (u16::from_be_bytes([self.reg.dp, low]), 0)
            }
            AddressingMode::Extended => (self.read_pc16(bus), 0),
            AddressingMode::Indexed => self.resolve_indexed(bus),
            _ => {
                error::illegal(format_args!(
                    "no effective address for addressing mode {mode:?}"
                ));
                (0, 0)
            }
        }
    }

    fn index_register(&self, select: u8) -> u16 {
        match select & 0x03 {
            0 => self.reg.x,
            1 => self.reg.y,
            2 => self.reg.u,
            3 => self.reg.s,
            _ => unreachable!(),
        }
    }

    fn set_index_register(&mut self, select: u8, value: u16) {
        match select & 0x03 {
            0 => self.reg.x = value,
            1 => self.reg.y = value,
            2 => self.reg.u = value,
            3 => self.reg.s = value,
            _ => unreachable!(),
        }
    }

    fn sign_extend5(value: u8) -> u16 {
        if value & 0x10 != 0 {
            value as u16 | 0xFFE0
        } else {
            value as u16
        }
    }

    /// Parse the indexed postbyte. Surcharges are the datasheet's "+" cycle
    /// counts; the indirect bit adds 3 on top of the base variant.
    fn resolve_indexed(&mut self, bus: &mut MemoryBus) -> (u16, u64) {
        let postbyte = self.read_pc8(bus);

        // 0xxxxxxx: 5-bit signed constant offset, never indirect
        if postbyte & 0x80 == 0 {
            let reg = self.index_register(postbyte >> 5);
            return (reg.wrapping_add(Self::sign_extend5(postbyte & 0x1F)), 1);
        }

        let select = (postbyte >> 5) & 0x03;
        let indirect = postbyte & 0x10 != 0;
        let reg = self.index_register(select);

        let (mut address, mut cycles) = match postbyte & 0x0F {
            0x00 => {
                // ,R+ (no indirect form exists)
                if indirect {
                    error::illegal(format_args!("indirect post-increment postbyte ${postbyte:02X}"));
                }
                self.set_index_register(select, reg.wrapping_add(1));
                return (reg, 2);
            }
            0x01 => {
                // ,R++
                self.set_index_register(select, reg.wrapping_add(2));
                (reg, 3)
            }
            0x02 => {
                // ,-R (no indirect form exists)
                if indirect {
                    error::illegal(format_args!("indirect pre-decrement postbyte ${postbyte:02X}"));
                }
                let address = reg.wrapping_sub(1);
                self.set_index_register(select, address);
                return (address, 2);
            }
            0x03 => {
                // ,--R
                let address = reg.wrapping_sub(2);
                self.set_index_register(select, address);
                (address, 3)
            }
            0x04 => (reg, 0),                                              // ,R
            0x05 => (reg.wrapping_add(self.reg.b as i8 as i16 as u16), 1), // B,R
            0x06 => (reg.wrapping_add(self.reg.a as i8 as i16 as u16), 1), // A,R
            0x08 => {
                // n8,R
                let offset = self.read_pc8(bus) as i8 as i16 as u16;
                (reg.wrapping_add(offset), 1)
            }
            0x09 => {
                // n16,R
                let offset = self.read_pc16(bus);
                (reg.wrapping_add(offset), 4)
            }
            0x0B => (reg.wrapping_add(self.reg.d()), 4), // D,R
            0x0C => {
                // n8,PCR — relative to the PC after the offset byte
                let offset = self.read_pc8(bus) as i8 as i16 as u16;
                (self.reg.pc.wrapping_add(offset), 1)
            }
            0x0D => {
                // n16,PCR
                let offset = self.read_pc16(bus);
                (self.reg.pc.wrapping_add(offset), 5)
            }
            0x0F => {
                // [n16] extended indirect; only exists with the indirect bit
                (self.read_pc16(bus), 2)
            }
            _ => {
                error::illegal(format_args!("indexed postbyte ${postbyte:02X}"));
                (reg, 0)
            }
        };

        if indirect {
            address = bus.read16(address);
            cycles += 3;
        }
        (address, cycles)
    }
}
