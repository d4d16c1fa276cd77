use vectra_core::device::{ShiftRegister, ShiftRegisterMode};

fn shifting_register(pattern: u8) -> ShiftRegister {
    let mut sr = ShiftRegister::new();
    sr.set_mode(ShiftRegisterMode::ShiftOutUnderPhase2);
    sr.set_value(pattern);
    sr
}

#[test]
fn test_disabled_register_holds_still() {
    let mut sr = ShiftRegister::new();
    sr.set_value(0xA5);
    sr.update(100);

    assert_eq!(sr.read_value(), 0xA5);
    assert!(!sr.interrupt_flag());
}

#[test]
fn test_msb_appears_on_cb2_at_load() {
    let sr = shifting_register(0x80);
    assert!(sr.cb2_active());

    let sr = shifting_register(0x7F);
    assert!(!sr.cb2_active());
}

#[test]
fn test_one_shift_every_two_cycles() {
    let mut sr = shifting_register(0b1010_0000);

    assert!(sr.cb2_active(), "bit 7 out first");
    sr.update(1);
    assert!(sr.cb2_active(), "half a shift period: no change yet");
    sr.update(1);
    assert!(!sr.cb2_active(), "bit 6 after one full period");
    sr.update(2);
    assert!(sr.cb2_active(), "bit 5");
}

#[test]
fn test_interrupt_after_eight_shifts() {
    let mut sr = shifting_register(0xFF);

    sr.update(14);
    assert!(!sr.interrupt_flag(), "seven shifts in");
    sr.update(2);
    assert!(sr.interrupt_flag(), "eighth shift raises the flag");
}

#[test]
fn test_pattern_rotates_and_repeats() {
    let mut sr = shifting_register(0b1100_1010);

    // After eight full shift periods the pattern is back
    sr.update(16);
    assert_eq!(sr.read_value(), 0b1100_1010);

    // And keeps rotating: two more periods land on bit 5 of the pattern
    let mut observed = Vec::new();
    for _ in 0..4 {
        sr.update(2);
        observed.push(sr.cb2_active());
    }
    assert_eq!(observed, vec![true, false, false, true], "bits 6,5,4,3 of the pattern");
}

#[test]
fn test_read_clears_interrupt_flag() {
    let mut sr = shifting_register(0x00);
    sr.update(16);
    assert!(sr.interrupt_flag());

    sr.read_value();
    assert!(!sr.interrupt_flag());
}

#[test]
fn test_reload_rearms_the_flag() {
    let mut sr = shifting_register(0xF0);
    sr.update(16);
    assert!(sr.interrupt_flag());

    sr.set_value(0x0F);
    assert!(!sr.interrupt_flag());
    sr.update(16);
    assert!(sr.interrupt_flag());
}
