//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod buttons;
pub mod counter;
#[cfg(feature = "shift-register")]
pub mod refresh;

pub use buttons::button_task;
pub use counter::counter_task;
#[cfg(feature = "shift-register")]
pub use refresh::refresh_task;
