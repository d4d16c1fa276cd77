//! Keyboard mapping onto the two emulated controllers. Digital keys snap
//! the analog stick to full deflection.

use sdl2::keyboard::Scancode;
use vectra_core::engine::Input;

#[derive(Clone, Copy)]
enum Control {
    AxisX(usize, i8),
    AxisY(usize, i8),
    Button(usize, usize),
}

pub struct KeyMap {
    bindings: Vec<(Scancode, Control)>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            bindings: vec![
                // Player 1: arrows + A/S/D/F
                (Scancode::Left, Control::AxisX(0, -127)),
                (Scancode::Right, Control::AxisX(0, 127)),
                (Scancode::Down, Control::AxisY(0, -127)),
                (Scancode::Up, Control::AxisY(0, 127)),
                (Scancode::A, Control::Button(0, 0)),
                (Scancode::S, Control::Button(0, 1)),
                (Scancode::D, Control::Button(0, 2)),
                (Scancode::F, Control::Button(0, 3)),
                // Player 2: IJKL + Z/X/C/V
                (Scancode::J, Control::AxisX(1, -127)),
                (Scancode::L, Control::AxisX(1, 127)),
                (Scancode::K, Control::AxisY(1, -127)),
                (Scancode::I, Control::AxisY(1, 127)),
                (Scancode::Z, Control::Button(1, 0)),
                (Scancode::X, Control::Button(1, 1)),
                (Scancode::C, Control::Button(1, 2)),
                (Scancode::V, Control::Button(1, 3)),
            ],
        }
    }
}

impl KeyMap {
    pub fn apply(&self, input: &mut Input, scancode: Scancode, pressed: bool) {
        for (bound, control) in &self.bindings {
            if *bound != scancode {
                continue;
            }
            match *control {
                Control::AxisX(player, value) => {
                    input.set_axis_x(player, if pressed { value } else { 0 })
                }
                Control::AxisY(player, value) => {
                    input.set_axis_y(player, if pressed { value } else { 0 })
                }
                Control::Button(player, button) => input.set_button(player, button, pressed),
            }
        }
    }
}
