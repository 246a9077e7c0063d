//! Inter-task communication
//!
//! Raw button edges flow from the edge-capture tasks to the counter
//! task over a bounded channel; the displayed digit is published
//! through an atomic cell. The counter task is the only writer of the
//! digit; the refresh task only reads it.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use portable_atomic::AtomicU8;

use decade_core::state::ButtonEvent;

/// Channel capacity for raw button edges
const EDGE_CHANNEL_SIZE: usize = 8;

/// One raw falling edge, stamped when the line changed
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawEdge {
    pub event: ButtonEvent,
    pub at_ms: u64,
}

/// Raw edges from the button tasks (bounces included)
pub static EDGE_CHANNEL: Channel<CriticalSectionRawMutex, RawEdge, EDGE_CHANNEL_SIZE> =
    Channel::new();

/// Currently displayed digit value, written by the counter task only
pub static DIGIT_VALUE: AtomicU8 = AtomicU8::new(0);
