//! Arithmetic/logic primitives and their condition-code updates, plus the
//! inherent ALU instructions (DAA, SEX, MUL, ABX, ORCC, ANDCC).
//!
//! Every primitive takes operand values and returns the result, updating
//! CC as a side effect: N is the sign of the result, Z is result == 0,
//! C is the unsigned carry/borrow out of the high bit, V is signed
//! overflow, and H (8-bit adds only) is the carry out of bit 3.

use super::opcodes::AddressingMode;
use super::registers::CcFlag;
use super::Cpu;
use crate::memory::MemoryBus;

impl Cpu {
    #[inline]
    pub(crate) fn set_flags_logical8(&mut self, result: u8) {
        self.reg.set_flag(CcFlag::Negative, result & 0x80 != 0);
        self.reg.set_flag(CcFlag::Zero, result == 0);
        self.reg.set_flag(CcFlag::Overflow, false);
    }

    #[inline]
    pub(crate) fn set_flags_logical16(&mut self, result: u16) {
        self.reg.set_flag(CcFlag::Negative, result & 0x8000 != 0);
        self.reg.set_flag(CcFlag::Zero, result == 0);
        self.reg.set_flag(CcFlag::Overflow, false);
    }

    /// Fetch an 8-bit operand (immediate or through the effective address)
    /// and run `operation` on it. Returns the addressing-mode surcharge.
    #[inline]
    pub(crate) fn op_alu8<F>(&mut self, bus: &mut MemoryBus, mode: AddressingMode, operation: F) -> u64
    where
        F: FnOnce(&mut Self, u8),
    {
        match mode {
            AddressingMode::Immediate => {
                let operand = self.read_pc8(bus);
                operation(self, operand);
                0
            }
            _ => {
                let (address, extra) = self.resolve_ea(bus, mode);
                let operand = bus.read(address);
                operation(self, operand);
                extra
            }
        }
    }

    /// 16-bit flavor of [`op_alu8`](Self::op_alu8).
    #[inline]
    pub(crate) fn op_alu16<F>(&mut self, bus: &mut MemoryBus, mode: AddressingMode, operation: F) -> u64
    where
        F: FnOnce(&mut Self, u16),
    {
        match mode {
            AddressingMode::Immediate => {
                let operand = self.read_pc16(bus);
                operation(self, operand);
                0
            }
            _ => {
                let (address, extra) = self.resolve_ea(bus, mode);
                let operand = bus.read16(address);
                operation(self, operand);
                extra
            }
        }
    }

    /// Read-modify-write on a memory operand.
    #[inline]
    pub(crate) fn rmw8<F>(&mut self, bus: &mut MemoryBus, mode: AddressingMode, operation: F) -> u64
    where
        F: FnOnce(&mut Self, u8) -> u8,
    {
        let (address, extra) = self.resolve_ea(bus, mode);
        let value = bus.read(address);
        let result = operation(self, value);
        bus.write(address, result);
        extra
    }

    pub(crate) fn op_tst_mem(&mut self, bus: &mut MemoryBus, mode: AddressingMode) -> u64 {
        let (address, extra) = self.resolve_ea(bus, mode);
        let value = bus.read(address);
        self.tst8(value);
        extra
    }

    // --- 8-bit arithmetic ---

    pub(crate) fn add8(&mut self, a: u8, m: u8, carry: bool) -> u8 {
        let wide = a as u16 + m as u16 + carry as u16;
        let result = wide as u8;
        self.reg
            .set_flag(CcFlag::HalfCarry, (a & 0x0F) + (m & 0x0F) + carry as u8 > 0x0F);
        self.reg.set_flag(CcFlag::Negative, result & 0x80 != 0);
        self.reg.set_flag(CcFlag::Zero, result == 0);
        self.reg
            .set_flag(CcFlag::Overflow, (a ^ result) & (m ^ result) & 0x80 != 0);
        self.reg.set_flag(CcFlag::Carry, wide > 0xFF);
        result
    }

    pub(crate) fn sub8(&mut self, a: u8, m: u8, borrow: bool) -> u8 {
        let wide = (a as u16).wrapping_sub(m as u16).wrapping_sub(borrow as u16);
        let result = wide as u8;
        self.reg.set_flag(CcFlag::Negative, result & 0x80 != 0);
        self.reg.set_flag(CcFlag::Zero, result == 0);
        self.reg
            .set_flag(CcFlag::Overflow, (a ^ m) & (a ^ result) & 0x80 != 0);
        self.reg.set_flag(CcFlag::Carry, wide > 0xFF);
        result
    }

    pub(crate) fn add16(&mut self, a: u16, m: u16) -> u16 {
        let wide = a as u32 + m as u32;
        let result = wide as u16;
        self.reg.set_flag(CcFlag::Negative, result & 0x8000 != 0);
        self.reg.set_flag(CcFlag::Zero, result == 0);
        self.reg
            .set_flag(CcFlag::Overflow, (a ^ result) & (m ^ result) & 0x8000 != 0);
        self.reg.set_flag(CcFlag::Carry, wide > 0xFFFF);
        result
    }

    pub(crate) fn sub16(&mut self, a: u16, m: u16) -> u16 {
        let wide = (a as u32).wrapping_sub(m as u32);
        let result = wide as u16;
        self.reg.set_flag(CcFlag::Negative, result & 0x8000 != 0);
        self.reg.set_flag(CcFlag::Zero, result == 0);
        self.reg
            .set_flag(CcFlag::Overflow, (a ^ m) & (a ^ result) & 0x8000 != 0);
        self.reg.set_flag(CcFlag::Carry, wide > 0xFFFF);
        result
    }

    // --- 8-bit logic ---

    pub(crate) fn and8(&mut self, a: u8, m: u8) -> u8 {
        let result = a & m;
        self.set_flags_logical8(result);
        result
    }

    pub(crate) fn or8(&mut self, a: u8, m: u8) -> u8 {
        let result = a | m;
        self.set_flags_logical8(result);
        result
    }

    pub(crate) fn eor8(&mut self, a: u8, m: u8) -> u8 {
        let result = a ^ m;
        self.set_flags_logical8(result);
        result
    }

    // --- 8-bit unary ---

    pub(crate) fn neg8(&mut self, value: u8) -> u8 {
        let result = 0u8.wrapping_sub(value);
        self.reg.set_flag(CcFlag::Negative, result & 0x80 != 0);
        self.reg.set_flag(CcFlag::Zero, result == 0);
        self.reg.set_flag(CcFlag::Overflow, value == 0x80);
        self.reg.set_flag(CcFlag::Carry, value != 0);
        result
    }

    pub(crate) fn com8(&mut self, value: u8) -> u8 {
        let result = !value;
        self.set_flags_logical8(result);
        self.reg.set_flag(CcFlag::Carry, true);
        result
    }

    pub(crate) fn inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.reg.set_flag(CcFlag::Negative, result & 0x80 != 0);
        self.reg.set_flag(CcFlag::Zero, result == 0);
        self.reg.set_flag(CcFlag::Overflow, value == 0x7F);
        result
    }

    pub(crate) fn dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.reg.set_flag(CcFlag::Negative, result & 0x80 != 0);
        self.reg.set_flag(CcFlag::Zero, result == 0);
        self.reg.set_flag(CcFlag::Overflow, value == 0x80);
        result
    }

    pub(crate) fn tst8(&mut self, value: u8) {
        self.set_flags_logical8(value);
    }

    pub(crate) fn clr8(&mut self) -> u8 {
        self.reg.set_flag(CcFlag::Negative, false);
        self.reg.set_flag(CcFlag::Zero, true);
        self.reg.set_flag(CcFlag::Overflow, false);
        self.reg.set_flag(CcFlag::Carry, false);
        0
    }

    // --- Shifts and rotates ---

    pub(crate) fn lsr8(&mut self, value: u8) -> u8 {
        let result = value >> 1;
        self.reg.set_flag(CcFlag::Negative, false);
        self.reg.set_flag(CcFlag::Zero, result == 0);
        self.reg.set_flag(CcFlag::Carry, value & 0x01 != 0);
        result
    }

    pub(crate) fn asr8(&mut self, value: u8) -> u8 {
        let result = (value >> 1) | (value & 0x80);
        self.reg.set_flag(CcFlag::Negative, result & 0x80 != 0);
        self.reg.set_flag(CcFlag::Zero, result == 0);
        self.reg.set_flag(CcFlag::Carry, value & 0x01 != 0);
        result
    }

    /// ASL/LSL. V = N ^ C after the shift, per the datasheet.
    pub(crate) fn asl8(&mut self, value: u8) -> u8 {
        let carry = value & 0x80 != 0;
        let result = value << 1;
        let negative = result & 0x80 != 0;
        self.reg.set_flag(CcFlag::Negative, negative);
        self.reg.set_flag(CcFlag::Zero, result == 0);
        self.reg.set_flag(CcFlag::Overflow, negative ^ carry);
        self.reg.set_flag(CcFlag::Carry, carry);
        result
    }

    pub(crate) fn rol8(&mut self, value: u8) -> u8 {
        let carry = value & 0x80 != 0;
        let result = (value << 1) | self.reg.flag(CcFlag::Carry) as u8;
        let negative = result & 0x80 != 0;
        self.reg.set_flag(CcFlag::Negative, negative);
        self.reg.set_flag(CcFlag::Zero, result == 0);
        self.reg.set_flag(CcFlag::Overflow, negative ^ carry);
        self.reg.set_flag(CcFlag::Carry, carry);
        result
    }

    pub(crate) fn ror8(&mut self, value: u8) -> u8 {
        let result = (value >> 1) | ((self.reg.flag(CcFlag::Carry) as u8) << 7);
        self.reg.set_flag(CcFlag::Negative, result & 0x80 != 0);
        self.reg.set_flag(CcFlag::Zero, result == 0);
        self.reg.set_flag(CcFlag::Carry, value & 0x01 != 0);
        result
    }

    // --- Inherent instructions ---

    /// DAA adjusts A back to packed BCD after an 8-bit add, using H and C
    /// from that add.
    pub(crate) fn op_daa(&mut self) -> u64 {
        let a = self.reg.a;
        let mut adjust = 0u8;
        if self.reg.flag(CcFlag::HalfCarry) || a & 0x0F > 0x09 {
            adjust |= 0x06;
        }
        if self.reg.flag(CcFlag::Carry) || a >> 4 > 0x09 || (a >> 4 == 0x09 && a & 0x0F > 0x09) {
            adjust |= 0x60;
        }
        let (result, carry) = a.overflowing_add(adjust);
        self.reg.a = result;
        self.reg.set_flag(CcFlag::Negative, result & 0x80 != 0);
        self.reg.set_flag(CcFlag::Zero, result == 0);
        if carry {
            self.reg.set_flag(CcFlag::Carry, true);
        }
        0
    }

    /// SEX: sign-extend B into A; N and Z reflect the 16-bit result.
    pub(crate) fn op_sex(&mut self) -> u64 {
        self.reg.a = if self.reg.b & 0x80 != 0 { 0xFF } else { 0x00 };
        let d = self.reg.d();
        self.reg.set_flag(CcFlag::Negative, d & 0x8000 != 0);
        self.reg.set_flag(CcFlag::Zero, d == 0);
        0
    }

    /// MUL: D = A * B unsigned; C picks up bit 7 of the low byte so BCD
    /// rounding tricks work.
    pub(crate) fn op_mul(&mut self) -> u64 {
        let product = self.reg.a as u16 * self.reg.b as u16;
        self.reg.set_d(product);
        self.reg.set_flag(CcFlag::Zero, product == 0);
        self.reg.set_flag(CcFlag::Carry, product & 0x80 != 0);
        0
    }

    /// ABX: X += B unsigned, no flags.
    pub(crate) fn op_abx(&mut self) -> u64 {
        self.reg.x = self.reg.x.wrapping_add(self.reg.b as u16);
        0
    }

    pub(crate) fn op_orcc(&mut self, bus: &mut MemoryBus) -> u64 {
        let mask = self.read_pc8(bus);
        self.reg.cc |= mask;
        0
    }

    pub(crate) fn op_andcc(&mut self, bus: &mut MemoryBus) -> u64 {
        let mask = self.read_pc8(bus);
        self.reg.cc &= mask;
        0
    }
}
