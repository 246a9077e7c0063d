//! Button edge-capture tasks
//!
//! One task instance per button. Waits for a falling edge on the
//! pulled-up input line, stamps it, and forwards it raw; the counter
//! task owns the debounce decision.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use decade_core::state::ButtonEvent;

use crate::channels::{RawEdge, EDGE_CHANNEL};

/// Edge-capture task, one instance per button line
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(mut line: Input<'static>, event: ButtonEvent) {
    info!("Button task started: {:?}", event);

    loop {
        line.wait_for_falling_edge().await;

        let edge = RawEdge {
            event,
            at_ms: Instant::now().as_millis(),
        };

        // Dropping an edge under backpressure is acceptable: anything
        // queued that densely is bounce the guard would reject anyway
        if EDGE_CHANNEL.try_send(edge).is_err() {
            warn!("Edge channel full, dropping {:?}", event);
        }
    }
}
