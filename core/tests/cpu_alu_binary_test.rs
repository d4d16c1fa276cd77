use vectra_core::cpu::CcFlag;

mod common;
use common::TestRig;

#[test]
fn test_lda_immediate() {
    let mut rig = TestRig::with_program(0x1000, &[0x86, 0x42]); // LDA #$42
    let cycles = rig.step();

    assert_eq!(rig.cpu.reg.a, 0x42);
    assert_eq!(rig.cpu.reg.pc, 0x1002);
    assert_eq!(cycles, 2);
    assert!(!rig.cpu.reg.flag(CcFlag::Negative), "N should be clear");
    assert!(!rig.cpu.reg.flag(CcFlag::Zero), "Z should be clear");
}

#[test]
fn test_adda_immediate() {
    let mut rig = TestRig::with_program(0, &[0x86, 0x10, 0x8B, 0x20]); // LDA #$10; ADDA #$20
    rig.step_n(2);

    assert_eq!(rig.cpu.reg.a, 0x30);
    assert!(!rig.cpu.reg.flag(CcFlag::Carry), "carry should be clear");
    assert!(!rig.cpu.reg.flag(CcFlag::Zero), "zero should be clear");
    assert!(!rig.cpu.reg.flag(CcFlag::Negative), "negative should be clear");
    assert!(!rig.cpu.reg.flag(CcFlag::Overflow), "overflow should be clear");
}

#[test]
fn test_adda_unsigned_carry() {
    let mut rig = TestRig::with_program(0, &[0x86, 0xFF, 0x8B, 0x01]); // LDA #$FF; ADDA #$01
    rig.step_n(2);

    assert_eq!(rig.cpu.reg.a, 0x00, "A should wrap to zero");
    assert!(rig.cpu.reg.flag(CcFlag::Carry), "carry should be set");
    assert!(rig.cpu.reg.flag(CcFlag::Zero), "zero should be set");
    assert!(!rig.cpu.reg.flag(CcFlag::Overflow), "overflow should be clear");
}

#[test]
fn test_adda_signed_overflow_sets_half_carry() {
    // A = 0x7F + 1 => 0x80: signed overflow, carry clear, half-carry set
    let mut rig = TestRig::with_program(0, &[0x86, 0x7F, 0x8B, 0x01]);
    rig.step_n(2);

    assert_eq!(rig.cpu.reg.a, 0x80);
    assert!(rig.cpu.reg.flag(CcFlag::Negative), "N should be set");
    assert!(rig.cpu.reg.flag(CcFlag::Overflow), "V should be set");
    assert!(!rig.cpu.reg.flag(CcFlag::Carry), "C should be clear");
    assert!(rig.cpu.reg.flag(CcFlag::HalfCarry), "H should be set");
}

#[test]
fn test_adca_uses_carry_in() {
    // Set carry via ADDA overflow, then ADCA #$00 should add 1
    let mut rig = TestRig::with_program(0, &[0x86, 0xFF, 0x8B, 0x01, 0x89, 0x00]);
    rig.step_n(3);

    assert_eq!(rig.cpu.reg.a, 0x01);
    assert!(!rig.cpu.reg.flag(CcFlag::Carry));
}

#[test]
fn test_suba_borrow() {
    let mut rig = TestRig::with_program(0, &[0x86, 0x10, 0x80, 0x20]); // LDA #$10; SUBA #$20
    rig.step_n(2);

    assert_eq!(rig.cpu.reg.a, 0xF0);
    assert!(rig.cpu.reg.flag(CcFlag::Carry), "borrow should set carry");
    assert!(rig.cpu.reg.flag(CcFlag::Negative));
}

#[test]
fn test_suba_zero_result() {
    let mut rig = TestRig::with_program(0, &[0x86, 0x42, 0x80, 0x42]);
    rig.step_n(2);

    assert_eq!(rig.cpu.reg.a, 0x00);
    assert!(rig.cpu.reg.flag(CcFlag::Zero));
    assert!(!rig.cpu.reg.flag(CcFlag::Carry));
}

#[test]
fn test_sbca_subtracts_borrow() {
    // SUBA #$20 leaves carry set; SBCA #$00 then subtracts 1 more
    let mut rig = TestRig::with_program(0, &[0x86, 0x10, 0x80, 0x20, 0x82, 0x00]);
    rig.step_n(3);

    assert_eq!(rig.cpu.reg.a, 0xEF);
}

#[test]
fn test_cmpa_sets_flags_without_writing() {
    let mut rig = TestRig::with_program(0, &[0x86, 0x42, 0x81, 0x42]); // LDA; CMPA #$42
    rig.step_n(2);

    assert_eq!(rig.cpu.reg.a, 0x42, "CMPA must not modify A");
    assert!(rig.cpu.reg.flag(CcFlag::Zero));
}

#[test]
fn test_bita_preserves_accumulator() {
    let mut rig = TestRig::with_program(0, &[0x86, 0xF0, 0x85, 0x0F]); // LDA #$F0; BITA #$0F
    rig.step_n(2);

    assert_eq!(rig.cpu.reg.a, 0xF0);
    assert!(rig.cpu.reg.flag(CcFlag::Zero), "no common bits => Z set");
}

#[test]
fn test_anda_ora_eora() {
    let mut rig = TestRig::with_program(
        0,
        &[
            0x86, 0xF0, // LDA #$F0
            0x84, 0x3C, // ANDA #$3C -> $30
            0x8A, 0x03, // ORA  #$03 -> $33
            0x88, 0xFF, // EORA #$FF -> $CC
        ],
    );
    rig.step_n(2);
    assert_eq!(rig.cpu.reg.a, 0x30);
    rig.step();
    assert_eq!(rig.cpu.reg.a, 0x33);
    rig.step();
    assert_eq!(rig.cpu.reg.a, 0xCC);
    assert!(rig.cpu.reg.flag(CcFlag::Negative));
    assert!(!rig.cpu.reg.flag(CcFlag::Overflow), "logic ops clear V");
}

#[test]
fn test_addb_direct_mode() {
    let mut rig = TestRig::with_program(0x0200, &[0xC6, 0x05, 0xDB, 0x40]); // LDB #$05; ADDB <$40
    rig.cpu.reg.dp = 0x03;
    rig.poke(0x0340, 0x0A);
    rig.step_n(2);

    assert_eq!(rig.cpu.reg.b, 0x0F);
}

#[test]
fn test_addd_immediate() {
    let mut rig = TestRig::with_program(0, &[0xCC, 0x12, 0x34, 0xC3, 0x01, 0x00]); // LDD; ADDD #$0100
    rig.step_n(2);

    assert_eq!(rig.cpu.reg.d(), 0x1334);
    assert!(!rig.cpu.reg.flag(CcFlag::Carry));
}

#[test]
fn test_subd_carry_and_overflow() {
    let mut rig = TestRig::with_program(0, &[0xCC, 0x80, 0x00, 0x83, 0x00, 0x01]); // LDD #$8000; SUBD #$0001
    rig.step_n(2);

    assert_eq!(rig.cpu.reg.d(), 0x7FFF);
    assert!(rig.cpu.reg.flag(CcFlag::Overflow), "0x8000 - 1 overflows signed");
    assert!(!rig.cpu.reg.flag(CcFlag::Carry));
}

#[test]
fn test_cmpx_immediate() {
    let mut rig = TestRig::with_program(0, &[0x8E, 0x12, 0x34, 0x8C, 0x12, 0x34]); // LDX; CMPX
    rig.step_n(2);

    assert_eq!(rig.cpu.reg.x, 0x1234, "CMPX must not modify X");
    assert!(rig.cpu.reg.flag(CcFlag::Zero));
}

#[test]
fn test_cmpy_page1() {
    let mut rig = TestRig::with_program(
        0,
        &[0x10, 0x8E, 0x00, 0x10, 0x10, 0x8C, 0x00, 0x20], // LDY #$10; CMPY #$20
    );
    rig.step_n(2);

    assert!(rig.cpu.reg.flag(CcFlag::Carry), "Y < operand sets borrow");
    assert!(rig.cpu.reg.flag(CcFlag::Negative));
}

#[test]
fn test_cmpu_cmps_page2() {
    let mut rig = TestRig::with_program(
        0,
        &[0x11, 0x83, 0x70, 0x00, 0x11, 0x8C, 0x80, 0x00], // CMPU #$7000; CMPS #$8000
    );
    rig.step_n(2);

    // U == 0x7000 and S == 0x8000 in the rig
    assert!(rig.cpu.reg.flag(CcFlag::Zero));
}

#[test]
fn test_alu_reference_flags_against_wide_arithmetic() {
    // Property check: N/Z/V/C from add8 must match a 16-bit reference
    // model for a spread of inputs and both carry-in values.
    for &a in &[0x00u8, 0x01, 0x0F, 0x10, 0x7F, 0x80, 0x81, 0xFE, 0xFF] {
        for &m in &[0x00u8, 0x01, 0x0F, 0x7F, 0x80, 0xFF] {
            for &carry in &[false, true] {
                let program = [
                    0x1A,
                    if carry { 0x01 } else { 0x00 }, // ORCC #carry
                    0x86,
                    a, // LDA #a
                    0x89,
                    m, // ADCA #m
                ];
                let mut rig = TestRig::with_program(0, &program);
                rig.step_n(3);

                let wide = a as u16 + m as u16 + carry as u16;
                let result = wide as u8;
                assert_eq!(rig.cpu.reg.a, result, "a={a:#x} m={m:#x} carry={carry}");
                assert_eq!(
                    rig.cpu.reg.flag(CcFlag::Negative),
                    result & 0x80 != 0,
                    "N for a={a:#x} m={m:#x} carry={carry}"
                );
                assert_eq!(
                    rig.cpu.reg.flag(CcFlag::Zero),
                    result == 0,
                    "Z for a={a:#x} m={m:#x} carry={carry}"
                );
                assert_eq!(
                    rig.cpu.reg.flag(CcFlag::Carry),
                    wide > 0xFF,
                    "C for a={a:#x} m={m:#x} carry={carry}"
                );
                let expected_v = (a ^ result) & (m ^ result) & 0x80 != 0;
                assert_eq!(
                    rig.cpu.reg.flag(CcFlag::Overflow),
                    expected_v,
                    "V for a={a:#x} m={m:#x} carry={carry}"
                );
            }
        }
    }
}
