use vectra_core::cpu::CcFlag;

mod common;
use common::TestRig;

#[test]
fn test_tfr_16_bit() {
    let mut rig = TestRig::with_program(0, &[0x8E, 0x12, 0x34, 0x1F, 0x12]); // LDX #$1234; TFR X,Y
    rig.step_n(2);

    assert_eq!(rig.cpu.reg.y, 0x1234);
    assert_eq!(rig.cpu.reg.x, 0x1234, "TFR leaves the source alone");
}

#[test]
fn test_tfr_8_bit() {
    let mut rig = TestRig::with_program(0, &[0x86, 0x42, 0x1F, 0x89]); // LDA #$42; TFR A,B
    rig.step_n(2);

    assert_eq!(rig.cpu.reg.b, 0x42);
}

#[test]
fn test_tfr_a_to_dp() {
    let mut rig = TestRig::with_program(0, &[0x86, 0xC8, 0x1F, 0x8B]); // LDA #$C8; TFR A,DP
    rig.step_n(2);

    assert_eq!(rig.cpu.reg.dp, 0xC8);
}

#[test]
fn test_tfr_to_pc_jumps() {
    let mut rig = TestRig::with_program(0, &[0x8E, 0x30, 0x00, 0x1F, 0x15]); // LDX #$3000; TFR X,PC
    rig.step_n(2);

    assert_eq!(rig.cpu.reg.pc, 0x3000);
}

#[test]
fn test_tfr_cc_masks_interrupts() {
    let mut rig = TestRig::with_program(0, &[0x86, 0x50, 0x1F, 0x8A]); // LDA #$50; TFR A,CC
    rig.step_n(2);

    assert!(rig.cpu.reg.flag(CcFlag::InterruptMask));
    assert!(rig.cpu.reg.flag(CcFlag::FastInterruptMask));
}

#[test]
fn test_exg_16_bit() {
    let mut rig = TestRig::with_program(
        0,
        &[0x8E, 0x11, 0x11, 0xCE, 0x22, 0x22, 0x1E, 0x13], // LDX; LDU; EXG X,U
    );
    rig.step_n(3);

    assert_eq!(rig.cpu.reg.x, 0x2222);
    assert_eq!(rig.cpu.reg.u, 0x1111);
}

#[test]
fn test_exg_8_bit() {
    let mut rig = TestRig::with_program(0, &[0x86, 0xAA, 0xC6, 0x55, 0x1E, 0x89]); // LDA; LDB; EXG A,B
    rig.step_n(3);

    assert_eq!(rig.cpu.reg.a, 0x55);
    assert_eq!(rig.cpu.reg.b, 0xAA);
}

#[test]
fn test_tfr_size_mismatch_loads_all_ones() {
    // TFR X,A mixes sizes: the destination picks up 0xFF, per the
    // documented behavior of the part.
    let mut rig = TestRig::with_program(0, &[0x8E, 0x12, 0x34, 0x1F, 0x18]); // LDX; TFR X,A
    rig.step_n(2);

    assert_eq!(rig.cpu.reg.a, 0xFF);
    assert_eq!(rig.cpu.reg.x, 0x1234);
}

#[test]
fn test_exg_size_mismatch_loads_all_ones() {
    let mut rig = TestRig::with_program(0, &[0x86, 0x42, 0x1E, 0x81]); // LDA #$42; EXG A,X
    rig.step_n(2);

    assert_eq!(rig.cpu.reg.a, 0xFF, "8-bit side gets 0xFF");
    assert_eq!(rig.cpu.reg.x, 0xFFFF, "16-bit side gets 0xFFFF");
}

#[test]
fn test_tfr_invalid_code_is_harmless() {
    let mut rig = TestRig::with_program(0, &[0x1F, 0x6F, 0x12]); // TFR with invalid nibbles; NOP
    rig.step();

    // Nothing to write; execution continues
    let cycles = rig.step();
    assert_eq!(cycles, 2);
}
