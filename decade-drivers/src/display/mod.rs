//! Seven-segment output stages

pub mod direct;
pub mod shift;

pub use direct::{DirectLines, SEGMENT_LINES};
pub use shift::{ShiftRegister, ShiftRegisterError};
