//! Direct GPIO output stage
//!
//! Drives one dedicated output line per segment. Levels for all seven
//! lines are computed up front and applied in one pass, so a partially
//! updated glyph never outlives a single `present` call. Fast and
//! non-blocking; safe to call from the transition handler.

use decade_core::segment::{SegmentMask, DIRECT_LINE_BASE};
use decade_core::traits::SegmentDriver;
use embedded_hal::digital::{OutputPin, PinState};

/// Number of segment lines in the direct-wired bank
pub const SEGMENT_LINES: usize = 7;

/// Direct-drive output stage
///
/// `lines[i]` is the GPIO output wired to segment line `base + i`, in
/// the board routing order of the font tables.
pub struct DirectLines<P> {
    lines: [P; SEGMENT_LINES],
    base: u8,
}

impl<P: OutputPin> DirectLines<P> {
    /// Stage over the default segment bank (GPIO 9..15)
    pub fn new(lines: [P; SEGMENT_LINES]) -> Self {
        Self::with_base(lines, DIRECT_LINE_BASE)
    }

    /// Stage over a bank starting at an arbitrary line
    pub fn with_base(lines: [P; SEGMENT_LINES], base: u8) -> Self {
        Self { lines, base }
    }

    /// Release the pins
    pub fn release(self) -> [P; SEGMENT_LINES] {
        self.lines
    }
}

impl<P: OutputPin> SegmentDriver for DirectLines<P> {
    type Error = P::Error;

    fn present(&mut self, mask: SegmentMask) -> Result<(), Self::Error> {
        let mut levels = [PinState::Low; SEGMENT_LINES];
        for (i, level) in levels.iter_mut().enumerate() {
            if mask.line_high(self.base + i as u8) {
                *level = PinState::High;
            }
        }

        for (line, level) in self.lines.iter_mut().zip(levels) {
            line.set_state(level)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use decade_core::segment::DIRECT_FONT;
    use decade_core::state::Digit;

    /// Mock GPIO pin remembering the last driven level
    #[derive(Default)]
    struct MockPin {
        high: bool,
    }

    impl embedded_hal::digital::ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            Ok(())
        }
    }

    fn stage() -> DirectLines<MockPin> {
        DirectLines::new(Default::default())
    }

    fn lit(stage: &DirectLines<MockPin>) -> [bool; SEGMENT_LINES] {
        let mut out = [false; SEGMENT_LINES];
        for (i, line) in stage.lines.iter().enumerate() {
            out[i] = line.high;
        }
        out
    }

    #[test]
    fn test_one_lights_first_two_lines() {
        let mut stage = stage();
        stage
            .present(DIRECT_FONT.encode(Digit::new(1).unwrap()))
            .unwrap();
        assert_eq!(lit(&stage), [true, true, false, false, false, false, false]);
    }

    #[test]
    fn test_eight_lights_every_line() {
        let mut stage = stage();
        stage
            .present(DIRECT_FONT.encode(Digit::new(8).unwrap()))
            .unwrap();
        assert_eq!(lit(&stage), [true; SEGMENT_LINES]);
    }

    #[test]
    fn test_blank_clears_every_line() {
        let mut stage = stage();
        stage
            .present(DIRECT_FONT.encode(Digit::new(8).unwrap()))
            .unwrap();
        stage.present(SegmentMask::BLANK).unwrap();
        assert_eq!(lit(&stage), [false; SEGMENT_LINES]);
    }

    #[test]
    fn test_represent_overwrites_previous_glyph() {
        let mut stage = stage();
        stage
            .present(DIRECT_FONT.encode(Digit::new(8).unwrap()))
            .unwrap();
        stage
            .present(DIRECT_FONT.encode(Digit::new(1).unwrap()))
            .unwrap();
        assert_eq!(lit(&stage), [true, true, false, false, false, false, false]);
    }
}
