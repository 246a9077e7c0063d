//! Display refresh task (shift-register stage)
//!
//! The serial stage is polled rather than event driven: every refresh
//! period the current digit is re-encoded and shifted out, so a change
//! shows up after at most one period. The trade-off buys the segment
//! bank back for three pins (data, clock, latch).

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Blocking, Spi};
use embassy_time::{Duration, Ticker};
use portable_atomic::Ordering;

use decade_core::segment::SHIFT_FONT;
use decade_core::state::Digit;
use decade_core::traits::SegmentDriver;
use decade_drivers::display::ShiftRegister;

use crate::channels::DIGIT_VALUE;

/// Refresh period in milliseconds
pub const REFRESH_PERIOD_MS: u64 = 100;

type ShiftStage = ShiftRegister<Spi<'static, SPI0, Blocking>, Output<'static>>;

/// Refresh task - re-presents the current digit every period
#[embassy_executor::task]
pub async fn refresh_task(mut driver: ShiftStage) {
    info!("Refresh task started ({} ms period)", REFRESH_PERIOD_MS);

    let mut ticker = Ticker::every(Duration::from_millis(REFRESH_PERIOD_MS));

    loop {
        // The counter task only ever stores clamped values
        let digit = Digit::new(DIGIT_VALUE.load(Ordering::Relaxed)).unwrap_or(Digit::ZERO);

        if driver.present(SHIFT_FONT.encode(digit)).is_err() {
            warn!("Shift stage transfer failed");
        }

        ticker.next().await;
    }
}
