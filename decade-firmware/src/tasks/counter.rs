//! Counter task
//!
//! Owns the core [`Counter`] state. Consumes raw button edges, applies
//! the debounce guard and the clamped transition, and publishes the
//! accepted digit. With the direct-GPIO stage the new glyph is driven
//! immediately from this task; with the shift-register stage the
//! refresh task picks the value up on its next cycle.

use defmt::*;
use portable_atomic::Ordering;

use decade_core::state::Counter;

use crate::channels::{DIGIT_VALUE, EDGE_CHANNEL};

/// Counter task for the direct-GPIO output stage
///
/// Presents inline: the display reflects an accepted edge before the
/// next edge is processed.
#[cfg(feature = "direct-gpio")]
#[embassy_executor::task]
pub async fn counter_task(
    mut driver: decade_drivers::display::DirectLines<embassy_rp::gpio::Output<'static>>,
) {
    use decade_core::segment::DIRECT_FONT;
    use decade_core::traits::SegmentDriver;

    info!("Counter task started (direct GPIO stage)");

    let mut counter = Counter::new();
    // Show the initial 0 before the first button press
    let _ = driver.present(DIRECT_FONT.encode(counter.digit()));

    loop {
        let edge = EDGE_CHANNEL.receive().await;
        match counter.feed(edge.event, edge.at_ms) {
            Some(digit) => {
                debug!("Digit: {}", digit.value());
                DIGIT_VALUE.store(digit.value(), Ordering::Relaxed);
                let _ = driver.present(DIRECT_FONT.encode(digit));
            }
            None => trace!("Edge filtered: {:?}", edge.event),
        }
    }
}

/// Counter task for the shift-register output stage
///
/// Only publishes the digit; the refresh task shifts it out on its own
/// schedule.
#[cfg(feature = "shift-register")]
#[embassy_executor::task]
pub async fn counter_task() {
    info!("Counter task started (shift register stage)");

    let mut counter = Counter::new();

    loop {
        let edge = EDGE_CHANNEL.receive().await;
        match counter.feed(edge.event, edge.at_ms) {
            Some(digit) => {
                debug!("Digit: {}", digit.value());
                DIGIT_VALUE.store(digit.value(), Ordering::Relaxed);
            }
            None => trace!("Edge filtered: {:?}", edge.event),
        }
    }
}
