//! Decade - single-digit counter firmware
//!
//! Drives one common-cathode seven-segment digit showing a value in
//! 0..=9, stepped up and down by two push buttons. The output stage is
//! selected at build time: dedicated GPIO segment lines, or a 74HC595
//! shift register fed over SPI.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use {defmt_rtt as _, panic_probe as _};

use decade_core::state::ButtonEvent;

mod channels;
mod tasks;

#[cfg(all(feature = "direct-gpio", feature = "shift-register"))]
compile_error!("select exactly one output stage: direct-gpio or shift-register");

#[cfg(not(any(feature = "direct-gpio", feature = "shift-register")))]
compile_error!("an output stage feature is required: direct-gpio or shift-register");

/// SPI clock for the shift register link (the 74HC595 is comfortable
/// well above this)
#[cfg(feature = "shift-register")]
const SHIFT_CLOCK_HZ: u32 = 1_000_000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Decade firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Buttons switch to ground; pull the lines up and watch for
    // falling edges. Change the GPIO pin assignments here.
    let up = Input::new(p.PIN_2, Pull::Up);
    let down = Input::new(p.PIN_3, Pull::Up);

    #[cfg(feature = "direct-gpio")]
    {
        use decade_drivers::display::DirectLines;
        use embassy_rp::gpio::{Level, Output};

        // Segment bank on GPIO 9..15, routed b c d e f a g
        let lines = [
            Output::new(p.PIN_9, Level::Low),
            Output::new(p.PIN_10, Level::Low),
            Output::new(p.PIN_11, Level::Low),
            Output::new(p.PIN_12, Level::Low),
            Output::new(p.PIN_13, Level::Low),
            Output::new(p.PIN_14, Level::Low),
            Output::new(p.PIN_15, Level::Low),
        ];
        let driver = DirectLines::new(lines);

        spawner.spawn(tasks::counter_task(driver)).unwrap();
        info!("Direct GPIO output stage ready");
    }

    #[cfg(feature = "shift-register")]
    {
        use decade_drivers::display::ShiftRegister;
        use embassy_rp::gpio::{Level, Output};
        use embassy_rp::spi::{Config as SpiConfig, Spi};

        // Shift register on SPI0: SRCLK=GPIO18, SER=GPIO19, RCLK=GPIO20
        let mut spi_config = SpiConfig::default();
        spi_config.frequency = SHIFT_CLOCK_HZ;
        let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
        let latch = Output::new(p.PIN_20, Level::Low);

        let driver = ShiftRegister::new(spi, latch);

        spawner.spawn(tasks::counter_task()).unwrap();
        spawner.spawn(tasks::refresh_task(driver)).unwrap();
        info!("Shift register output stage ready");
    }

    spawner
        .spawn(tasks::button_task(up, ButtonEvent::Increment))
        .unwrap();
    spawner
        .spawn(tasks::button_task(down, ButtonEvent::Decrement))
        .unwrap();

    info!("All tasks spawned, firmware running");
}
