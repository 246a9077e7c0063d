//! Counter state and transitions
//!
//! The displayed digit is the only externally visible state; the
//! debounce windows are internal bookkeeping. All mutation goes through
//! [`Counter::feed`].

pub mod counter;
pub mod events;

pub use counter::{Counter, Digit};
pub use events::ButtonEvent;
