//! Beam model: ramp delays, integration, line emission/extension, and the
//! blanking rules.

use vectra_core::device::Beam;
use vectra_core::engine::RenderContext;

/// Scale factor applied per cycle of integration: velocity / 128 * 0.85.
const STEP_SCALE: f32 = 0.85 / 128.0;
/// Cycles the ramp takes to switch on after RAMP asserts.
const RAMP_UP_DELAY: u64 = 5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn stepped_beam() -> (Beam, RenderContext) {
    let mut beam = Beam::new();
    beam.set_integrators_enabled(true);
    (beam, RenderContext::default())
}

/// Run the ramp-up delay out so subsequent steps integrate.
fn run_ramp_up(beam: &mut Beam, ctx: &mut RenderContext) {
    for _ in 0..RAMP_UP_DELAY {
        beam.step(ctx);
    }
}

#[test]
fn test_no_motion_while_ramp_off() {
    let mut beam = Beam::new();
    let mut ctx = RenderContext::default();
    beam.set_velocity_y(100);
    for _ in 0..50 {
        beam.step(&mut ctx);
    }

    assert_eq!(beam.pos().x, 0.0);
    assert_eq!(beam.pos().y, 0.0);
}

#[test]
fn test_ramp_up_delay_gates_integration() {
    let (mut beam, mut ctx) = stepped_beam();
    beam.set_velocity_y(64);

    // The beam holds still while the ramp charges; integration starts on
    // the step the delay runs out.
    for _ in 0..RAMP_UP_DELAY - 1 {
        beam.step(&mut ctx);
        assert_eq!(beam.pos().y, 0.0, "still ramping up");
    }

    beam.step(&mut ctx);
    assert!(approx(beam.pos().y, 64.0 * STEP_SCALE), "first integrated step");
}

#[test]
fn test_blank_and_idle_appends_nothing() {
    // Integrators off and blank asserted: stepping draws nothing
    let mut beam = Beam::new();
    let mut ctx = RenderContext::default();
    beam.set_blank(true);
    beam.set_brightness(100);
    for _ in 0..100 {
        beam.step(&mut ctx);
    }

    assert!(ctx.lines.is_empty());
}

#[test]
fn test_out_of_range_brightness_blanks() {
    let (mut beam, mut ctx) = stepped_beam();
    beam.set_brightness(0);
    beam.step(&mut ctx);
    assert!(ctx.lines.is_empty(), "zero brightness draws nothing");

    beam.set_brightness(200);
    beam.step(&mut ctx);
    assert!(ctx.lines.is_empty(), "over-range brightness draws nothing");
}

#[test]
fn test_horizontal_line_extends_to_one_segment() {
    // X velocity only, drawing on: two identical steps produce exactly
    // one segment whose endpoint is the later position.
    let (mut beam, mut ctx) = stepped_beam();
    beam.set_velocity_x(10);
    beam.set_brightness(64);
    run_ramp_up(&mut beam, &mut ctx);
    // Let the X-velocity FIFO latency drain before measuring
    for _ in 0..6 {
        beam.step(&mut ctx);
    }
    let start = beam.pos();
    ctx.lines.clear();
    beam.step(&mut ctx);
    beam.step(&mut ctx);

    assert_eq!(ctx.lines.len(), 1, "colinear steps extend the segment");
    let line = ctx.lines[0];
    assert!(approx(line.p0.x, start.x));
    assert!(approx(line.p1.x, start.x + 2.0 * 10.0 * STEP_SCALE));
    assert!(approx(line.p1.y, 0.0));
    assert!(approx(line.brightness, 0.5), "brightness 64/128");
}

#[test]
fn test_direction_change_starts_new_segment() {
    let (mut beam, mut ctx) = stepped_beam();
    beam.set_velocity_y(10);
    beam.set_brightness(64);
    run_ramp_up(&mut beam, &mut ctx);
    ctx.lines.clear();

    beam.step(&mut ctx);
    beam.step(&mut ctx);
    assert_eq!(ctx.lines.len(), 1);

    beam.set_velocity_y(-10);
    beam.step(&mut ctx);

    assert_eq!(ctx.lines.len(), 2, "reversed direction must not extend");
}

#[test]
fn test_xy_offset_applies_to_both_axes() {
    let (mut beam, mut ctx) = stepped_beam();
    beam.set_xy_offset(16);
    run_ramp_up(&mut beam, &mut ctx);
    let base = beam.pos();
    beam.step(&mut ctx);

    assert!(approx(beam.pos().x - base.x, 16.0 * STEP_SCALE));
    assert!(approx(beam.pos().y - base.y, 16.0 * STEP_SCALE));
}

#[test]
fn test_velocity_x_lags_velocity_y() {
    let (mut beam, mut ctx) = stepped_beam();
    run_ramp_up(&mut beam, &mut ctx);

    beam.set_velocity_x(100);
    beam.set_velocity_y(100);
    beam.step(&mut ctx);

    assert_eq!(beam.pos().x, 0.0, "X input still in its delay FIFO");
    assert!(approx(beam.pos().y, 100.0 * STEP_SCALE), "Y applies immediately");

    for _ in 0..6 {
        beam.step(&mut ctx);
    }
    assert!(beam.pos().x > 0.0, "X catches up after its latency");
}

#[test]
fn test_zero_beam_recenters_and_breaks_extension() {
    let (mut beam, mut ctx) = stepped_beam();
    beam.set_velocity_y(50);
    beam.set_brightness(64);
    run_ramp_up(&mut beam, &mut ctx);
    beam.step(&mut ctx);
    beam.step(&mut ctx);
    assert!(beam.pos().y > 0.0);
    let segments_before = ctx.lines.len();

    beam.zero_beam();
    assert_eq!(beam.pos().y, 0.0);

    beam.step(&mut ctx);
    assert_eq!(
        ctx.lines.len(),
        segments_before + 1,
        "drawing after a zero starts a new segment instead of extending across the jump"
    );
    assert_eq!(ctx.lines.last().unwrap().p0.y, 0.0, "new segment starts at the origin");
}

#[test]
fn test_ramp_down_keeps_integrating_until_off() {
    let (mut beam, mut ctx) = stepped_beam();
    beam.set_velocity_y(64);
    run_ramp_up(&mut beam, &mut ctx);
    beam.step(&mut ctx);
    let y_at_disable = beam.pos().y;

    // Integrators off: the ramp decays for 10 cycles and the beam drifts
    beam.set_integrators_enabled(false);
    for _ in 0..10 {
        beam.step(&mut ctx);
    }
    let y_after_decay = beam.pos().y;
    assert!(y_after_decay > y_at_disable, "motion continues through ramp-down");

    beam.step(&mut ctx);
    assert_eq!(beam.pos().y, y_after_decay, "ramp off: no further motion");
}

#[test]
fn test_brightness_curve_brightens_midtones() {
    let (mut beam, mut ctx) = stepped_beam();
    beam.set_brightness_curve(1.0);
    beam.set_velocity_y(10);
    beam.set_brightness(64);
    run_ramp_up(&mut beam, &mut ctx);
    ctx.lines.clear();
    beam.step(&mut ctx);

    let shaped = ctx.lines[0].brightness;
    assert!(approx(shaped, 1.0 - (1.0 - 0.5f32).powi(5)));
    assert!(shaped > 0.5);
}
