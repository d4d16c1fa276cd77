//! SDL2 audio playback. The emulator thread pushes samples into a shared
//! ring; the audio callback drains it, fading in at startup and out at
//! shutdown to avoid clicks.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

/// Number of samples over which to fade in/out (~5.8 ms at 44.1 kHz).
const FADE_SAMPLES: u32 = 256;

pub type AudioRing = Arc<Mutex<VecDeque<i16>>>;
pub type FadeOut = Arc<AtomicBool>;

pub struct AudioPlayer {
    ring: AudioRing,
    fade_in_pos: u32,
    fading_out: FadeOut,
    fade_out_pos: u32,
}

impl AudioCallback for AudioPlayer {
    type Channel = i16;

    fn callback(&mut self, out: &mut [i16]) {
        let mut ring = self.ring.lock().unwrap();
        for sample in out.iter_mut() {
            let raw = ring.pop_front().unwrap_or(0);

            if self.fade_in_pos < FADE_SAMPLES {
                let gain = self.fade_in_pos as f32 / FADE_SAMPLES as f32;
                *sample = (raw as f32 * gain) as i16;
                self.fade_in_pos += 1;
            } else if self.fading_out.load(Ordering::Relaxed) {
                if self.fade_out_pos < FADE_SAMPLES {
                    let gain = 1.0 - (self.fade_out_pos as f32 / FADE_SAMPLES as f32);
                    *sample = (raw as f32 * gain) as i16;
                    self.fade_out_pos += 1;
                } else {
                    *sample = 0;
                }
            } else {
                *sample = raw;
            }
        }
    }
}

/// Open the audio device and start playback. The returned device must be
/// kept alive for audio to keep flowing.
pub fn init(
    sdl_audio: &sdl2::AudioSubsystem,
    sample_rate: u32,
) -> (AudioDevice<AudioPlayer>, AudioRing, FadeOut) {
    let ring: AudioRing = Arc::new(Mutex::new(VecDeque::new()));
    let fading_out: FadeOut = Arc::new(AtomicBool::new(false));

    let desired = AudioSpecDesired {
        freq: Some(sample_rate as i32),
        channels: Some(1),
        samples: Some(512),
    };

    let device = sdl_audio
        .open_playback(None, &desired, |_spec| AudioPlayer {
            ring: ring.clone(),
            fade_in_pos: 0,
            fading_out: fading_out.clone(),
            fade_out_pos: 0,
        })
        .expect("Failed to open audio device");

    device.resume();
    (device, ring, fading_out)
}

/// Signal the callback to fade to silence and give it time to do so.
pub fn fade_and_stop(fade_out: &FadeOut) {
    fade_out.store(true, Ordering::Relaxed);
    std::thread::sleep(std::time::Duration::from_millis(20));
}
