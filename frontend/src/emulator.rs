//! Host frame loop: poll input, run one frame's worth of CPU cycles, hand
//! the line list to the renderer and the samples to the audio ring.

use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use vectra_core::prelude::*;

use crate::audio;
use crate::input::KeyMap;
use crate::video::Video;

const FRAME_TIME: Duration = Duration::from_millis(20); // 50 Hz video

pub fn run(emulator: &mut Emulator, scale: u32) {
    let sdl_context = sdl2::init().expect("Failed to initialize SDL2");
    let sdl_video = sdl_context.video().expect("Failed to init SDL video");
    let sdl_audio = sdl_context.audio().expect("Failed to init SDL audio");

    let mut video = Video::new(&sdl_video, "Vectra", scale);
    let mut event_pump = sdl_context.event_pump().expect("Failed to get event pump");

    let (_device, audio_ring, fade_out) = audio::init(&sdl_audio, 44_100);
    emulator.with_audio_context(|ctx| ctx.sample_rate = 44_100.0);

    let key_map = KeyMap::default();
    let mut input = Input::default();

    'main: loop {
        let frame_start = Instant::now();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'main,

                Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => break 'main,

                Event::KeyDown {
                    scancode: Some(scancode),
                    repeat: false,
                    ..
                } => key_map.apply(&mut input, scancode, true),

                Event::KeyUp {
                    scancode: Some(scancode),
                    ..
                } => key_map.apply(&mut input, scancode, false),

                _ => {}
            }
        }

        emulator.set_input(input);
        emulator.frame_update(FRAME_TIME.as_secs_f64());
        emulator.execute_frame(CYCLES_PER_FRAME);

        emulator.with_render_context(|ctx| {
            video.present(&ctx.lines);
            ctx.lines.clear();
        });

        emulator.with_audio_context(|ctx| {
            let mut ring = audio_ring.lock().unwrap();
            for &sample in &ctx.samples {
                ring.push_back((sample * i16::MAX as f32 * 0.5) as i16);
            }
            ctx.samples.clear();
        });

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    audio::fade_and_stop(&fade_out);
}
