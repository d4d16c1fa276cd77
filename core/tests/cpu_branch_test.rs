use vectra_core::cpu::CcFlag;

mod common;
use common::TestRig;

#[test]
fn test_bra_taken() {
    let mut rig = TestRig::with_program(0x1000, &[0x20, 0x10]); // BRA +$10
    let cycles = rig.step();

    assert_eq!(rig.cpu.reg.pc, 0x1012);
    assert_eq!(cycles, 3);
}

#[test]
fn test_brn_never_branches() {
    let mut rig = TestRig::with_program(0x1000, &[0x21, 0x10]); // BRN +$10
    let cycles = rig.step();

    assert_eq!(rig.cpu.reg.pc, 0x1002, "BRN falls through");
    assert_eq!(cycles, 3, "but still pays for the operand");
}

#[test]
fn test_backward_branch() {
    let mut rig = TestRig::with_program(0x1000, &[0x20, 0xFE]); // BRA -2 (self)
    rig.step();

    assert_eq!(rig.cpu.reg.pc, 0x1000);
}

#[test]
fn test_beq_bne() {
    let mut rig = TestRig::with_program(0, &[0x86, 0x00, 0x27, 0x10]); // LDA #0; BEQ +$10
    rig.step_n(2);
    assert_eq!(rig.cpu.reg.pc, 0x0014);

    let mut rig = TestRig::with_program(0, &[0x86, 0x01, 0x27, 0x10]); // LDA #1; BEQ +$10
    rig.step_n(2);
    assert_eq!(rig.cpu.reg.pc, 0x0004, "BEQ not taken with Z clear");
}

#[test]
fn test_unsigned_compares_drive_bhi_bls() {
    // A=0x30 vs 0x20: higher, BHI taken
    let mut rig = TestRig::with_program(0, &[0x86, 0x30, 0x81, 0x20, 0x22, 0x04]);
    rig.step_n(3);
    assert_eq!(rig.cpu.reg.pc, 0x000A);

    // A=0x10 vs 0x20: lower, BLS taken
    let mut rig = TestRig::with_program(0, &[0x86, 0x10, 0x81, 0x20, 0x23, 0x04]);
    rig.step_n(3);
    assert_eq!(rig.cpu.reg.pc, 0x000A);
}

#[test]
fn test_signed_compares_drive_blt_bge() {
    // A = -1 vs 1: less-than (signed), BLT taken
    let mut rig = TestRig::with_program(0, &[0x86, 0xFF, 0x81, 0x01, 0x2D, 0x04]);
    rig.step_n(3);
    assert_eq!(rig.cpu.reg.pc, 0x000A);

    // A = 1 vs -1: greater (signed, operand 0xFF), BGE taken
    let mut rig = TestRig::with_program(0, &[0x86, 0x01, 0x81, 0xFF, 0x2C, 0x04]);
    rig.step_n(3);
    assert_eq!(rig.cpu.reg.pc, 0x000A);
}

#[test]
fn test_bmi_bpl_bvs_bcs() {
    let mut rig = TestRig::with_program(0, &[0x86, 0x80, 0x2B, 0x02]); // LDA #$80; BMI +2
    rig.step_n(2);
    assert_eq!(rig.cpu.reg.pc, 0x0006);

    let mut rig = TestRig::with_program(0, &[0x86, 0x7F, 0x8B, 0x01, 0x29, 0x02]); // overflow; BVS
    rig.step_n(3);
    assert_eq!(rig.cpu.reg.pc, 0x0008);

    let mut rig = TestRig::with_program(0, &[0x86, 0xFF, 0x8B, 0x01, 0x25, 0x02]); // carry; BCS
    rig.step_n(3);
    assert_eq!(rig.cpu.reg.pc, 0x0008);
}

#[test]
fn test_long_branch_cycle_penalty_when_taken() {
    let mut rig = TestRig::with_program(0x1000, &[0x10, 0x27, 0x01, 0x00]); // LBEQ +$100
    rig.cpu.reg.set_flag(CcFlag::Zero, true);
    let cycles = rig.step();
    assert_eq!(rig.cpu.reg.pc, 0x1104);
    assert_eq!(cycles, 6, "taken long branch costs one extra");

    let mut rig = TestRig::with_program(0x1000, &[0x10, 0x27, 0x01, 0x00]);
    let cycles = rig.step();
    assert_eq!(rig.cpu.reg.pc, 0x1004);
    assert_eq!(cycles, 5);
}

#[test]
fn test_lbrn_consumes_cycles_never_branches() {
    let mut rig = TestRig::with_program(0x1000, &[0x10, 0x21, 0x7F, 0xFF]); // LBRN +$7FFF
    rig.cpu.reg.set_flag(CcFlag::Zero, true);
    let cycles = rig.step();

    assert_eq!(rig.cpu.reg.pc, 0x1004, "LBRN never branches");
    assert_eq!(cycles, 5);
}

#[test]
fn test_lbra_unconditional() {
    let mut rig = TestRig::with_program(0x1000, &[0x16, 0x02, 0x00]); // LBRA +$200
    let cycles = rig.step();

    assert_eq!(rig.cpu.reg.pc, 0x1203);
    assert_eq!(cycles, 5);
}

#[test]
fn test_bsr_rts_round_trip() {
    // BSR +2; NOP; NOP; RTS — after the BSR and the RTS, PC sits after
    // the BSR and S is back where it started.
    let mut rig = TestRig::with_program(0x1000, &[0x8D, 0x02, 0x12, 0x12, 0x39]);
    let s_before = rig.cpu.reg.s;

    let cycles = rig.step(); // BSR jumps over the two NOPs
    assert_eq!(cycles, 7);
    assert_eq!(rig.cpu.reg.pc, 0x1004);
    assert_eq!(rig.cpu.reg.s, s_before - 2, "return address pushed");
    assert_eq!(rig.peek16(rig.cpu.reg.s), 0x1002, "pushed big-endian");

    let cycles = rig.step(); // RTS
    assert_eq!(cycles, 5);
    assert_eq!(rig.cpu.reg.pc, 0x1002, "back at the byte after BSR");
    assert_eq!(rig.cpu.reg.s, s_before, "stack balanced");
}

#[test]
fn test_lbsr() {
    let mut rig = TestRig::with_program(0x1000, &[0x17, 0x01, 0x00]); // LBSR +$100
    let cycles = rig.step();

    assert_eq!(rig.cpu.reg.pc, 0x1103);
    assert_eq!(rig.peek16(rig.cpu.reg.s), 0x1003);
    assert_eq!(cycles, 9);
}
