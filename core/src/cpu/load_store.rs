//! Load/store flag plumbing, stores, LEA, and jump/jump-to-subroutine.

use super::Cpu;
use super::opcodes::AddressingMode;
use super::registers::CcFlag;
use crate::memory::MemoryBus;

impl Cpu {
    /// Loads update N and Z and clear V without touching C.
    #[inline]
    pub(crate) fn load8(&mut self, value: u8) -> u8 {
        self.set_flags_logical8(value);
        value
    }

    #[inline]
    pub(crate) fn load16(&mut self, value: u16) -> u16 {
        self.set_flags_logical16(value);
        value
    }

    pub(crate) fn op_st8(&mut self, bus: &mut MemoryBus, mode: AddressingMode, value: u8) -> u64 {
        let (address, extra) = self.resolve_ea(bus, mode);
        bus.write(address, value);
        self.set_flags_logical8(value);
        extra
    }

    pub(crate) fn op_st16(&mut self, bus: &mut MemoryBus, mode: AddressingMode, value: u16) -> u64 {
        let (address, extra) = self.resolve_ea(bus, mode);
        let [high, low] = value.to_be_bytes();
        bus.write(address, high);
        bus.write(address.wrapping_add(1), low);
        self.set_flags_logical16(value);
        extra
    }

    /// LEAX/LEAY update Z (so loops can count in an index register);
    /// LEAS/LEAU touch no flags.
    pub(crate) fn op_lea(&mut self, bus: &mut MemoryBus, code: u8) -> u64 {
        let (address, extra) = self.resolve_ea(bus, AddressingMode::Indexed);
        match code {
            0x30 => {
                self.reg.x = address;
                self.reg.set_flag(CcFlag::Zero, address == 0);
            }
            0x31 => {
                self.reg.y = address;
                self.reg.set_flag(CcFlag::Zero, address == 0);
            }
            0x32 => self.reg.s = address,
            0x33 => self.reg.u = address,
            _ => unreachable!(),
        }
        extra
    }

    pub(crate) fn op_jmp(&mut self, bus: &mut MemoryBus, mode: AddressingMode) -> u64 {
        let (address, extra) = self.resolve_ea(bus, mode);
        self.reg.pc = address;
        extra
    }

    pub(crate) fn op_jsr(&mut self, bus: &mut MemoryBus, mode: AddressingMode) -> u64 {
        let (address, extra) = self.resolve_ea(bus, mode);
        let return_address = self.reg.pc;
        self.push_s16(bus, return_address);
        self.reg.pc = address;
        extra
    }
}
