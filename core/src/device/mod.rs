pub mod beam;
pub mod psg;
pub mod shift_register;
pub mod timers;
pub mod via;

pub use beam::Beam;
pub use psg::Psg;
pub use shift_register::{ShiftRegister, ShiftRegisterMode};
pub use timers::{Timer1, Timer2, TimerMode};
pub use via::Via;
