//! Opcode metadata for all three 6809 instruction pages.
//!
//! Each page is a dense 256-entry table indexed directly by the opcode
//! byte; undefined entries hold an `Illegal` sentinel so dispatch is a
//! single lookup with no searching. Pages 1 and 2 are selected by the
//! escape bytes 0x10 and 0x11 on page 0.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressingMode {
    /// Signed 8- or 16-bit PC offset; branch instructions.
    Relative,
    /// Opcode carries all addressing information (no effective address).
    Inherent,
    /// Operand byte or word follows the opcode.
    Immediate,
    /// EA = DP:low, where low follows the opcode.
    Direct,
    /// Postbyte selects one of ~20 effective-address computations.
    Indexed,
    /// 16-bit EA follows the opcode.
    Extended,
    /// Not an addressing mode; marks an undefined opcode.
    Illegal,
    /// Not an addressing mode; marks the page-escape bytes 0x10/0x11.
    Variant,
}

#[derive(Clone, Copy, Debug)]
pub struct Opcode {
    pub code: u8,
    pub name: &'static str,
    pub mode: AddressingMode,
    pub cycles: u64,
    pub size: u8,
    pub description: &'static str,
}

const fn op(
    code: u8,
    name: &'static str,
    mode: AddressingMode,
    cycles: u64,
    size: u8,
    description: &'static str,
) -> Opcode {
    Opcode {
        code,
        name,
        mode,
        cycles,
        size,
        description,
    }
}

const fn illegal(code: u8) -> Opcode {
    op(code, "Illegal", AddressingMode::Illegal, 1, 1, "Illegal")
}

/// Spread a sparse list of defined entries across a dense 256-entry table
/// filled with `Illegal` sentinels.
const fn densify<const N: usize>(defined: [Opcode; N]) -> [Opcode; 256] {
    let mut table = [illegal(0); 256];
    let mut index = 0;
    while index < 256 {
        table[index] = illegal(index as u8);
        index += 1;
    }
    let mut entry = 0;
    while entry < N {
        table[defined[entry].code as usize] = defined[entry];
        entry += 1;
    }
    table
}

pub fn lookup(page: u8, code: u8) -> &'static Opcode {
    match page {
        0 => &PAGE0[code as usize],
        1 => &PAGE1[code as usize],
        2 => &PAGE2[code as usize],
        _ => unreachable!("no opcode page {page}"),
    }
}

pub fn is_page1_escape(code: u8) -> bool {
    code == 0x10
}

pub fn is_page2_escape(code: u8) -> bool {
    code == 0x11
}

use AddressingMode::*;

#[rustfmt::skip]
pub static PAGE0: [Opcode; 256] = [
    op(0x00, "NEG",       Direct,     6, 2, "Negate memory location"),
    illegal(0x01),
    illegal(0x02),
    op(0x03, "COM",       Direct,     6, 2, "Complement memory location"),
    op(0x04, "LSR",       Direct,     6, 2, "Logical shift right memory"),
    illegal(0x05),
    op(0x06, "ROR",       Direct,     6, 2, "Rotate right memory"),
    op(0x07, "ASR",       Direct,     6, 2, "Arithmetic shift right memory"),
    op(0x08, "LSL/ASL",   Direct,     6, 2, "Logical shift left memory"),
    op(0x09, "ROL",       Direct,     6, 2, "Rotate left memory"),
    op(0x0A, "DEC",       Direct,     6, 2, "Decrement memory location"),
    illegal(0x0B),
    op(0x0C, "INC",       Direct,     6, 2, "Increment memory location"),
    op(0x0D, "TST",       Direct,     6, 2, "Test memory location"),
    op(0x0E, "JMP",       Direct,     3, 2, "Jump"),
    op(0x0F, "CLR",       Direct,     6, 2, "Clear memory location"),
    op(0x10, "PAGE1+",    Variant,    1, 1, "Page 1 escape"),
    op(0x11, "PAGE2+",    Variant,    1, 1, "Page 2 escape"),
    op(0x12, "NOP",       Inherent,   2, 1, "No operation"),
    op(0x13, "SYNC",      Inherent,   2, 1, "Sync to interrupt"),
    illegal(0x14),
    illegal(0x15),
    op(0x16, "LBRA",      Relative,   5, 3, "Long branch always"),
    op(0x17, "LBSR",      Relative,   9, 3, "Long branch to subroutine"),
    illegal(0x18),
    op(0x19, "DAA",       Inherent,   2, 1, "Decimal addition adjust"),
    op(0x1A, "ORCC",      Immediate,  3, 2, "Inclusive OR into CC"),
    illegal(0x1B),
    op(0x1C, "ANDCC",     Immediate,  3, 2, "Logical AND into CC"),
    op(0x1D, "SEX",       Inherent,   2, 1, "Sign extend B into A"),
    op(0x1E, "EXG",       Inherent,   8, 2, "Exchange registers"),
    op(0x1F, "TFR",       Inherent,   6, 2, "Transfer register"),
    op(0x20, "BRA",       Relative,   3, 2, "Branch always"),
    op(0x21, "BRN",       Relative,   3, 2, "Branch never"),
    op(0x22, "BHI",       Relative,   3, 2, "Branch if higher"),
    op(0x23, "BLS",       Relative,   3, 2, "Branch if lower or same"),
    op(0x24, "BHS/BCC",   Relative,   3, 2, "Branch if carry clear"),
    op(0x25, "BLO/BCS",   Relative,   3, 2, "Branch if carry set"),
    op(0x26, "BNE",       Relative,   3, 2, "Branch if not equal"),
    op(0x27, "BEQ",       Relative,   3, 2, "Branch if equal"),
    op(0x28, "BVC",       Relative,   3, 2, "Branch if overflow clear"),
    op(0x29, "BVS",       Relative,   3, 2, "Branch if overflow set"),
    op(0x2A, "BPL",       Relative,   3, 2, "Branch if plus"),
    op(0x2B, "BMI",       Relative,   3, 2, "Branch if minus"),
    op(0x2C, "BGE",       Relative,   3, 2, "Branch if greater or equal"),
    op(0x2D, "BLT",       Relative,   3, 2, "Branch if less than"),
    op(0x2E, "BGT",       Relative,   3, 2, "Branch if greater than"),
    op(0x2F, "BLE",       Relative,   3, 2, "Branch if less or equal"),
    op(0x30, "LEAX",      Indexed,    4, 2, "Load effective address into X"),
    op(0x31, "LEAY",      Indexed,    4, 2, "Load effective address into Y"),
    op(0x32, "LEAS",      Indexed,    4, 2, "Load effective address into S"),
    op(0x33, "LEAU",      Indexed,    4, 2, "Load effective address into U"),
    op(0x34, "PSHS",      Immediate,  5, 2, "Push registers onto S"),
    op(0x35, "PULS",      Immediate,  5, 2, "Pull registers from S"),
    op(0x36, "PSHU",      Immediate,  5, 2, "Push registers onto U"),
    op(0x37, "PULU",      Immediate,  5, 2, "Pull registers from U"),
    illegal(0x38),
    op(0x39, "RTS",       Inherent,   5, 1, "Return from subroutine"),
    op(0x3A, "ABX",       Inherent,   3, 1, "Add B into X"),
    op(0x3B, "RTI",       Inherent,   0, 1, "Return from interrupt"),
    op(0x3C, "CWAI",      Immediate, 20, 2, "AND CC, wait for interrupt"),
    op(0x3D, "MUL",       Inherent,  11, 1, "Multiply A by B"),
    illegal(0x3E),
    op(0x3F, "SWI",       Inherent,  19, 1, "Software interrupt 1"),
    op(0x40, "NEGA",      Inherent,   2, 1, "Negate accumulator A"),
    illegal(0x41),
    illegal(0x42),
    op(0x43, "COMA",      Inherent,   2, 1, "Complement accumulator A"),
    op(0x44, "LSRA",      Inherent,   2, 1, "Logical shift right A"),
    illegal(0x45),
    op(0x46, "RORA",      Inherent,   2, 1, "Rotate right A"),
    op(0x47, "ASRA",      Inherent,   2, 1, "Arithmetic shift right A"),
    op(0x48, "LSLA/ASLA", Inherent,   2, 1, "Logical shift left A"),
    op(0x49, "ROLA",      Inherent,   2, 1, "Rotate left A"),
    op(0x4A, "DECA",      Inherent,   2, 1, "Decrement accumulator A"),
    illegal(0x4B),
    op(0x4C, "INCA",      Inherent,   2, 1, "Increment accumulator A"),
    op(0x4D, "TSTA",      Inherent,   2, 1, "Test accumulator A"),
    illegal(0x4E),
    op(0x4F, "CLRA",      Inherent,   2, 1, "Clear accumulator A"),
    op(0x50, "NEGB",      Inherent,   2, 1, "Negate accumulator B"),
    illegal(0x51),
    illegal(0x52),
    op(0x53, "COMB",      Inherent,   2, 1, "Complement accumulator B"),
    op(0x54, "LSRB",      Inherent,   2, 1, "Logical shift right B"),
    illegal(0x55),
    op(0x56, "RORB",      Inherent,   2, 1, "Rotate right B"),
    op(0x57, "ASRB",      Inherent,   2, 1, "Arithmetic shift right B"),
    op(0x58, "LSLB/ASLB", Inherent,   2, 1, "Logical shift left B"),
    op(0x59, "ROLB",      Inherent,   2, 1, "Rotate left B"),
    op(0x5A, "DECB",      Inherent,   2, 1, "Decrement accumulator B"),
    illegal(0x5B),
    op(0x5C, "INCB",      Inherent,   2, 1, "Increment accumulator B"),
    op(0x5D, "TSTB",      Inherent,   2, 1, "Test accumulator B"),
    illegal(0x5E),
    op(0x5F, "CLRB",      Inherent,   2, 1, "Clear accumulator B"),
    op(0x60, "NEG",       Indexed,    6, 2, "Negate memory location"),
    illegal(0x61),
    illegal(0x62),
    op(0x63, "COM",       Indexed,    6, 2, "Complement memory location"),
    op(0x64, "LSR",       Indexed,    6, 2, "Logical shift right memory"),
    illegal(0x65),
    op(0x66, "ROR",       Indexed,    6, 2, "Rotate right memory"),
    op(0x67, "ASR",       Indexed,    6, 2, "Arithmetic shift right memory"),
    op(0x68, "LSL/ASL",   Indexed,    6, 2, "Logical shift left memory"),
    op(0x69, "ROL",       Indexed,    6, 2, "Rotate left memory"),
    op(0x6A, "DEC",       Indexed,    6, 2, "Decrement memory location"),
    illegal(0x6B),
    op(0x6C, "INC",       Indexed,    6, 2, "Increment memory location"),
    op(0x6D, "TST",       Indexed,    6, 2, "Test memory location"),
    op(0x6E, "JMP",       Indexed,    3, 2, "Jump"),
    op(0x6F, "CLR",       Indexed,    6, 2, "Clear memory location"),
    op(0x70, "NEG",       Extended,   7, 3, "Negate memory location"),
    illegal(0x71),
    illegal(0x72),
    op(0x73, "COM",       Extended,   7, 3, "Complement memory location"),
    op(0x74, "LSR",       Extended,   7, 3, "Logical shift right memory"),
    illegal(0x75),
    op(0x76, "ROR",       Extended,   7, 3, "Rotate right memory"),
    op(0x77, "ASR",       Extended,   7, 3, "Arithmetic shift right memory"),
    op(0x78, "LSL/ASL",   Extended,   7, 3, "Logical shift left memory"),
    op(0x79, "ROL",       Extended,   7, 3, "Rotate left memory"),
    op(0x7A, "DEC",       Extended,   7, 3, "Decrement memory location"),
    illegal(0x7B),
    op(0x7C, "INC",       Extended,   7, 3, "Increment memory location"),
    op(0x7D, "TST",       Extended,   7, 3, "Test memory location"),
    op(0x7E, "JMP",       Extended,   4, 3, "Jump"),
    op(0x7F, "CLR",       Extended,   7, 3, "Clear memory location"),
    op(0x80, "SUBA",      Immediate,  2, 2, "Subtract from A"),
    op(0x81, "CMPA",      Immediate,  2, 2, "Compare against A"),
    op(0x82, "SBCA",      Immediate,  2, 2, "Subtract with carry from A"),
    op(0x83, "SUBD",      Immediate,  4, 3, "Subtract from D"),
    op(0x84, "ANDA",      Immediate,  2, 2, "Logical AND into A"),
    op(0x85, "BITA",      Immediate,  2, 2, "Bit test A"),
    op(0x86, "LDA",       Immediate,  2, 2, "Load accumulator A"),
    illegal(0x87),
    op(0x88, "EORA",      Immediate,  2, 2, "Exclusive OR into A"),
    op(0x89, "ADCA",      Immediate,  2, 2, "Add with carry into A"),
    op(0x8A, "ORA",       Immediate,  2, 2, "Inclusive OR into A"),
    op(0x8B, "ADDA",      Immediate,  2, 2, "Add into A"),
    op(0x8C, "CMPX",      Immediate,  4, 3, "Compare against X"),
    op(0x8D, "BSR",       Relative,   7, 2, "Branch to subroutine"),
    op(0x8E, "LDX",       Immediate,  3, 3, "Load index register X"),
    illegal(0x8F),
    op(0x90, "SUBA",      Direct,     4, 2, "Subtract from A"),
    op(0x91, "CMPA",      Direct,     4, 2, "Compare against A"),
    op(0x92, "SBCA",      Direct,     4, 2, "Subtract with carry from A"),
    op(0x93, "SUBD",      Direct,     6, 2, "Subtract from D"),
    op(0x94, "ANDA",      Direct,     4, 2, "Logical AND into A"),
    op(0x95, "BITA",      Direct,     4, 2, "Bit test A"),
    op(0x96, "LDA",       Direct,     4, 2, "Load accumulator A"),
    op(0x97, "STA",       Direct,     4, 2, "Store accumulator A"),
    op(0x98, "EORA",      Direct,     4, 2, "Exclusive OR into A"),
    op(0x99, "ADCA",      Direct,     4, 2, "Add with carry into A"),
    op(0x9A, "ORA",       Direct,     4, 2, "Inclusive OR into A"),
    op(0x9B, "ADDA",      Direct,     4, 2, "Add into A"),
    op(0x9C, "CMPX",      Direct,     6, 2, "Compare against X"),
    op(0x9D, "JSR",       Direct,     7, 2, "Jump to subroutine"),
    op(0x9E, "LDX",       Direct,     5, 2, "Load index register X"),
    op(0x9F, "STX",       Direct,     5, 2, "Store index register X"),
    op(0xA0, "SUBA",      Indexed,    4, 2, "Subtract from A"),
    op(0xA1, "CMPA",      Indexed,    4, 2, "Compare against A"),
    op(0xA2, "SBCA",      Indexed,    4, 2, "Subtract with carry from A"),
    op(0xA3, "SUBD",      Indexed,    6, 2, "Subtract from D"),
    op(0xA4, "ANDA",      Indexed,    4, 2, "Logical AND into A"),
    op(0xA5, "BITA",      Indexed,    4, 2, "Bit test A"),
    op(0xA6, "LDA",       Indexed,    4, 2, "Load accumulator A"),
    op(0xA7, "STA",       Indexed,    4, 2, "Store accumulator A"),
    op(0xA8, "EORA",      Indexed,    4, 2, "Exclusive OR into A"),
    op(0xA9, "ADCA",      Indexed,    4, 2, "Add with carry into A"),
    op(0xAA, "ORA",       Indexed,    4, 2, "Inclusive OR into A"),
    op(0xAB, "ADDA",      Indexed,    4, 2, "Add into A"),
    op(0xAC, "CMPX",      Indexed,    6, 2, "Compare against X"),
    op(0xAD, "JSR",       Indexed,    7, 2, "Jump to subroutine"),
    op(0xAE, "LDX",       Indexed,    5, 2, "Load index register X"),
    op(0xAF, "STX",       Indexed,    5, 2, "Store index register X"),
    op(0xB0, "SUBA",      Extended,   5, 3, "Subtract from A"),
    op(0xB1, "CMPA",      Extended,   5, 3, "Compare against A"),
    op(0xB2, "SBCA",      Extended,   5, 3, "Subtract with carry from A"),
    op(0xB3, "SUBD",      Extended,   7, 3, "Subtract from D"),
    op(0xB4, "ANDA",      Extended,   5, 3, "Logical AND into A"),
    op(0xB5, "BITA",      Extended,   5, 3, "Bit test A"),
    op(0xB6, "LDA",       Extended,   5, 3, "Load accumulator A"),
    op(0xB7, "STA",       Extended,   5, 3, "Store accumulator A"),
    op(0xB8, "EORA",      Extended,   5, 3, "Exclusive OR into A"),
    op(0xB9, "ADCA",      Extended,   5, 3, "Add with carry into A"),
    op(0xBA, "ORA",       Extended,   5, 3, "Inclusive OR into A"),
    op(0xBB, "ADDA",      Extended,   5, 3, "Add into A"),
    op(0xBC, "CMPX",      Extended,   7, 3, "Compare against X"),
    op(0xBD, "JSR",       Extended,   8, 3, "Jump to subroutine"),
    op(0xBE, "LDX",       Extended,   6, 3, "Load index register X"),
    op(0xBF, "STX",       Extended,   6, 3, "Store index register X"),
    op(0xC0, "SUBB",      Immediate,  2, 2, "Subtract from B"),
    op(0xC1, "CMPB",      Immediate,  2, 2, "Compare against B"),
    op(0xC2, "SBCB",      Immediate,  2, 2, "Subtract with carry from B"),
    op(0xC3, "ADDD",      Immediate,  4, 3, "Add into D"),
    op(0xC4, "ANDB",      Immediate,  2, 2, "Logical AND into B"),
    op(0xC5, "BITB",      Immediate,  2, 2, "Bit test B"),
    op(0xC6, "LDB",       Immediate,  2, 2, "Load accumulator B"),
    illegal(0xC7),
    op(0xC8, "EORB",      Immediate,  2, 2, "Exclusive OR into B"),
    op(0xC9, "ADCB",      Immediate,  2, 2, "Add with carry into B"),
    op(0xCA, "ORB",       Immediate,  2, 2, "Inclusive OR into B"),
    op(0xCB, "ADDB",      Immediate,  2, 2, "Add into B"),
    op(0xCC, "LDD",       Immediate,  3, 3, "Load double accumulator D"),
    illegal(0xCD),
    op(0xCE, "LDU",       Immediate,  3, 3, "Load user stack pointer"),
    illegal(0xCF),
    op(0xD0, "SUBB",      Direct,     4, 2, "Subtract from B"),
    op(0xD1, "CMPB",      Direct,     4, 2, "Compare against B"),
    op(0xD2, "SBCB",      Direct,     4, 2, "Subtract with carry from B"),
    op(0xD3, "ADDD",      Direct,     6, 2, "Add into D"),
    op(0xD4, "ANDB",      Direct,     4, 2, "Logical AND into B"),
    op(0xD5, "BITB",      Direct,     4, 2, "Bit test B"),
    op(0xD6, "LDB",       Direct,     4, 2, "Load accumulator B"),
    op(0xD7, "STB",       Direct,     4, 2, "Store accumulator B"),
    op(0xD8, "EORB",      Direct,     4, 2, "Exclusive OR into B"),
    op(0xD9, "ADCB",      Direct,     4, 2, "Add with carry into B"),
    op(0xDA, "ORB",       Direct,     4, 2, "Inclusive OR into B"),
    op(0xDB, "ADDB",      Direct,     4, 2, "Add into B"),
    op(0xDC, "LDD",       Direct,     5, 2, "Load double accumulator D"),
    op(0xDD, "STD",       Direct,     5, 2, "Store double accumulator D"),
    op(0xDE, "LDU",       Direct,     5, 2, "Load user stack pointer"),
    op(0xDF, "STU",       Direct,     5, 2, "Store user stack pointer"),
    op(0xE0, "SUBB",      Indexed,    4, 2, "Subtract from B"),
    op(0xE1, "CMPB",      Indexed,    4, 2, "Compare against B"),
    op(0xE2, "SBCB",      Indexed,    4, 2, "Subtract with carry from B"),
    op(0xE3, "ADDD",      Indexed,    6, 2, "Add into D"),
    op(0xE4, "ANDB",      Indexed,    4, 2, "Logical AND into B"),
    op(0xE5, "BITB",      Indexed,    4, 2, "Bit test B"),
    op(0xE6, "LDB",       Indexed,    4, 2, "Load accumulator B"),
    op(0xE7, "STB",       Indexed,    4, 2, "Store accumulator B"),
    op(0xE8, "EORB",      Indexed,    4, 2, "Exclusive OR into B"),
    op(0xE9, "ADCB",      Indexed,    4, 2, "Add with carry into B"),
    op(0xEA, "ORB",       Indexed,    4, 2, "Inclusive OR into B"),
    op(0xEB, "ADDB",      Indexed,    4, 2, "Add into B"),
    op(0xEC, "LDD",       Indexed,    5, 2, "Load double accumulator D"),
    op(0xED, "STD",       Indexed,    5, 2, "Store double accumulator D"),
    op(0xEE, "LDU",       Indexed,    5, 2, "Load user stack pointer"),
    op(0xEF, "STU",       Indexed,    5, 2, "Store user stack pointer"),
    op(0xF0, "SUBB",      Extended,   5, 3, "Subtract from B"),
    op(0xF1, "CMPB",      Extended,   5, 3, "Compare against B"),
    op(0xF2, "SBCB",      Extended,   5, 3, "Subtract with carry from B"),
    op(0xF3, "ADDD",      Extended,   7, 3, "Add into D"),
    op(0xF4, "ANDB",      Extended,   5, 3, "Logical AND into B"),
    op(0xF5, "BITB",      Extended,   5, 3, "Bit test B"),
    op(0xF6, "LDB",       Extended,   5, 3, "Load accumulator B"),
    op(0xF7, "STB",       Extended,   5, 3, "Store accumulator B"),
    op(0xF8, "EORB",      Extended,   5, 3, "Exclusive OR into B"),
    op(0xF9, "ADCB",      Extended,   5, 3, "Add with carry into B"),
    op(0xFA, "ORB",       Extended,   5, 3, "Inclusive OR into B"),
    op(0xFB, "ADDB",      Extended,   5, 3, "Add into B"),
    op(0xFC, "LDD",       Extended,   6, 3, "Load double accumulator D"),
    op(0xFD, "STD",       Extended,   6, 3, "Store double accumulator D"),
    op(0xFE, "LDU",       Extended,   6, 3, "Load user stack pointer"),
    op(0xFF, "STU",       Extended,   6, 3, "Store user stack pointer"),
];

#[rustfmt::skip]
pub static PAGE1: [Opcode; 256] = densify([
    op(0x21, "LBRN",      Relative,   5, 4, "Long branch never"),
    op(0x22, "LBHI",      Relative,   5, 4, "Long branch if higher"),
    op(0x23, "LBLS",      Relative,   5, 4, "Long branch if lower or same"),
    op(0x24, "LBHS/LBCC", Relative,   5, 4, "Long branch if carry clear"),
    op(0x25, "LBLO/LBCS", Relative,   5, 4, "Long branch if carry set"),
    op(0x26, "LBNE",      Relative,   5, 4, "Long branch if not equal"),
    op(0x27, "LBEQ",      Relative,   5, 4, "Long branch if equal"),
    op(0x28, "LBVC",      Relative,   5, 4, "Long branch if overflow clear"),
    op(0x29, "LBVS",      Relative,   5, 4, "Long branch if overflow set"),
    op(0x2A, "LBPL",      Relative,   5, 4, "Long branch if plus"),
    op(0x2B, "LBMI",      Relative,   5, 4, "Long branch if minus"),
    op(0x2C, "LBGE",      Relative,   5, 4, "Long branch if greater or equal"),
    op(0x2D, "LBLT",      Relative,   5, 4, "Long branch if less than"),
    op(0x2E, "LBGT",      Relative,   5, 4, "Long branch if greater than"),
    op(0x2F, "LBLE",      Relative,   5, 4, "Long branch if less or equal"),
    op(0x3F, "SWI2",      Inherent,  20, 2, "Software interrupt 2"),
    op(0x83, "CMPD",      Immediate,  5, 4, "Compare against D"),
    op(0x8C, "CMPY",      Immediate,  5, 4, "Compare against Y"),
    op(0x8E, "LDY",       Immediate,  4, 4, "Load index register Y"),
    op(0x93, "CMPD",      Direct,     7, 3, "Compare against D"),
    op(0x9C, "CMPY",      Direct,     7, 3, "Compare against Y"),
    op(0x9E, "LDY",       Direct,     6, 3, "Load index register Y"),
    op(0x9F, "STY",       Direct,     6, 3, "Store index register Y"),
    op(0xA3, "CMPD",      Indexed,    7, 3, "Compare against D"),
    op(0xAC, "CMPY",      Indexed,    7, 3, "Compare against Y"),
    op(0xAE, "LDY",       Indexed,    6, 3, "Load index register Y"),
    op(0xAF, "STY",       Indexed,    6, 3, "Store index register Y"),
    op(0xB3, "CMPD",      Extended,   8, 4, "Compare against D"),
    op(0xBC, "CMPY",      Extended,   8, 4, "Compare against Y"),
    op(0xBE, "LDY",       Extended,   7, 4, "Load index register Y"),
    op(0xBF, "STY",       Extended,   7, 4, "Store index register Y"),
    op(0xCE, "LDS",       Immediate,  4, 4, "Load hardware stack pointer"),
    op(0xDE, "LDS",       Direct,     6, 3, "Load hardware stack pointer"),
    op(0xDF, "STS",       Direct,     6, 3, "Store hardware stack pointer"),
    op(0xEE, "LDS",       Indexed,    6, 3, "Load hardware stack pointer"),
    op(0xEF, "STS",       Indexed,    6, 3, "Store hardware stack pointer"),
    op(0xFE, "LDS",       Extended,   7, 4, "Load hardware stack pointer"),
    op(0xFF, "STS",       Extended,   7, 4, "Store hardware stack pointer"),
]);

#[rustfmt::skip]
pub static PAGE2: [Opcode; 256] = densify([
    op(0x3F, "SWI3",      Inherent,  20, 2, "Software interrupt 3"),
    op(0x83, "CMPU",      Immediate,  5, 4, "Compare against U"),
    op(0x8C, "CMPS",      Immediate,  5, 4, "Compare against S"),
    op(0x93, "CMPU",      Direct,     7, 3, "Compare against U"),
    op(0x9C, "CMPS",      Direct,     7, 3, "Compare against S"),
    op(0xA3, "CMPU",      Indexed,    7, 3, "Compare against U"),
    op(0xAC, "CMPS",      Indexed,    7, 3, "Compare against S"),
    op(0xB3, "CMPU",      Extended,   8, 4, "Compare against U"),
    op(0xBC, "CMPS",      Extended,   8, 4, "Compare against S"),
]);
