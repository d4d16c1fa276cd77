pub mod error;
pub mod math;
pub mod sync;

pub use error::ErrorPolicy;
pub use math::{AverageValue, Vec2};
pub use sync::{SignalEvent, SyncQueue};
