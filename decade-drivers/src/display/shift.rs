//! Shift-register output stage
//!
//! Serializes the segment byte over SPI (MSB first, one byte per
//! refresh) into a 74HC595-style register, then pulses the storage
//! latch (set, then clear) to move the shifted bits onto the parallel
//! outputs. Meant to be called from a steady polling loop; a digit
//! change shows up after at most one refresh period.

use decade_core::segment::SegmentMask;
use decade_core::traits::SegmentDriver;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

/// Errors from the serial link or the latch line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftRegisterError<SpiError, PinError> {
    /// Serial transfer failed
    Spi(SpiError),
    /// Latch line write failed
    Latch(PinError),
}

/// Serial-to-parallel output stage
///
/// The latch line must idle low; it is only pulsed inside `present`.
pub struct ShiftRegister<SPI, P> {
    spi: SPI,
    latch: P,
}

impl<SPI, P> ShiftRegister<SPI, P>
where
    SPI: SpiBus,
    P: OutputPin,
{
    /// Stage over an SPI link and a storage-clock (latch) line
    pub fn new(spi: SPI, latch: P) -> Self {
        Self { spi, latch }
    }

    /// Release the bus and the latch pin
    pub fn release(self) -> (SPI, P) {
        (self.spi, self.latch)
    }
}

impl<SPI, P> SegmentDriver for ShiftRegister<SPI, P>
where
    SPI: SpiBus,
    P: OutputPin,
{
    type Error = ShiftRegisterError<SPI::Error, P::Error>;

    fn present(&mut self, mask: SegmentMask) -> Result<(), Self::Error> {
        self.spi
            .write(&[mask.byte()])
            .map_err(ShiftRegisterError::Spi)?;
        self.spi.flush().map_err(ShiftRegisterError::Spi)?;

        // Commit the shifted byte to the parallel outputs
        self.latch.set_high().map_err(ShiftRegisterError::Latch)?;
        self.latch.set_low().map_err(ShiftRegisterError::Latch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use decade_core::segment::SHIFT_FONT;
    use decade_core::state::{ButtonEvent, Counter, Digit};

    /// Mock SPI bus remembering the last byte written
    #[derive(Default)]
    struct MockSpi {
        last_byte: Option<u8>,
        writes: usize,
    }

    impl embedded_hal::spi::ErrorType for MockSpi {
        type Error = Infallible;
    }

    impl SpiBus for MockSpi {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Infallible> {
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Infallible> {
            self.writes += 1;
            self.last_byte = words.last().copied();
            Ok(())
        }

        fn transfer(&mut self, _read: &mut [u8], write: &[u8]) -> Result<(), Infallible> {
            self.write(write)
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Infallible> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Infallible> {
            Ok(())
        }
    }

    /// Mock latch pin counting rising edges
    #[derive(Default)]
    struct MockLatch {
        high: bool,
        pulses: usize,
    }

    impl embedded_hal::digital::ErrorType for MockLatch {
        type Error = Infallible;
    }

    impl OutputPin for MockLatch {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            if !self.high {
                self.pulses += 1;
            }
            self.high = true;
            Ok(())
        }
    }

    #[test]
    fn test_present_sends_one_byte_then_latches() {
        let mut stage = ShiftRegister::new(MockSpi::default(), MockLatch::default());
        stage
            .present(SHIFT_FONT.encode(Digit::new(5).unwrap()))
            .unwrap();

        assert_eq!(stage.spi.writes, 1);
        assert_eq!(stage.spi.last_byte, Some(0x76));
        assert_eq!(stage.latch.pulses, 1);
        assert!(!stage.latch.high, "latch must be released after the pulse");
    }

    #[test]
    fn test_each_refresh_is_one_frame() {
        let mut stage = ShiftRegister::new(MockSpi::default(), MockLatch::default());
        for d in 0..10u8 {
            stage
                .present(SHIFT_FONT.encode(Digit::new(d).unwrap()))
                .unwrap();
        }
        assert_eq!(stage.spi.writes, 10);
        assert_eq!(stage.latch.pulses, 10);
    }

    #[test]
    fn test_counter_to_register_pipeline() {
        // Accepted increment from 0: the next refresh shifts out the
        // glyph for 1 and commits it with a single latch pulse
        let mut counter = Counter::new();
        let digit = counter.feed(ButtonEvent::Increment, 500).unwrap();

        let mut stage = ShiftRegister::new(MockSpi::default(), MockLatch::default());
        stage.present(SHIFT_FONT.encode(digit)).unwrap();

        assert_eq!(stage.spi.last_byte, Some(0x03));
        assert_eq!(stage.spi.writes, 1);
        assert_eq!(stage.latch.pulses, 1);
    }

    #[test]
    fn test_release_returns_resources() {
        let stage = ShiftRegister::new(MockSpi::default(), MockLatch::default());
        let (spi, latch) = stage.release();
        assert_eq!(spi.writes, 0);
        assert!(!latch.high);
    }
}
