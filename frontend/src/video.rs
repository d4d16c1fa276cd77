//! SDL2 vector renderer. The beam coordinate space is roughly the
//! analog grid the hardware draws in; lines are scaled into the window
//! and shaded by brightness.

use sdl2::pixels::Color;
use sdl2::rect::Point;
use sdl2::render::Canvas;
use sdl2::video::Window;
use vectra_core::engine::Line;

/// Half-extent of the beam coordinate grid mapped onto the window.
const GRID_HALF_EXTENT: f32 = 140.0;
const BASE_SIZE: u32 = 256;

pub struct Video {
    canvas: Canvas<Window>,
    size: u32,
}

impl Video {
    pub fn new(sdl_video: &sdl2::VideoSubsystem, title: &str, scale: u32) -> Self {
        let size = BASE_SIZE * scale.max(1);
        let window = sdl_video
            .window(title, size, size)
            .position_centered()
            .build()
            .expect("Failed to create window");

        let canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .expect("Failed to create canvas");

        Self { canvas, size }
    }

    pub fn present(&mut self, lines: &[Line]) {
        self.canvas.set_draw_color(Color::RGB(0, 0, 0));
        self.canvas.clear();

        for line in lines {
            let intensity = (line.brightness.clamp(0.0, 1.0) * 255.0) as u8;
            self.canvas
                .set_draw_color(Color::RGB(intensity, intensity, intensity));
            let _ = self
                .canvas
                .draw_line(self.to_screen(line.p0.x, line.p0.y), self.to_screen(line.p1.x, line.p1.y));
        }

        self.canvas.present();
    }

    fn to_screen(&self, x: f32, y: f32) -> Point {
        let half = self.size as f32 / 2.0;
        let sx = half + x / GRID_HALF_EXTENT * half;
        // Beam Y grows upward, screen Y downward
        let sy = half - y / GRID_HALF_EXTENT * half;
        Point::new(sx as i32, sy as i32)
    }
}
