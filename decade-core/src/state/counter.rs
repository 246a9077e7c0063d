//! Digit counter state
//!
//! Transitions clamp at the range ends rather than wrapping; an
//! increment at 9 or a decrement at 0 is accepted but leaves the digit
//! unchanged.

use super::events::ButtonEvent;
use crate::debounce::DebounceWindow;

/// A single decimal digit in `0..=9`
///
/// The range invariant holds by construction: the only ways to obtain a
/// `Digit` are the checked constructor and the clamped transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// Lowest displayable digit
    pub const ZERO: Digit = Digit(0);
    /// Highest displayable digit
    pub const MAX: Digit = Digit(9);

    /// Create a digit, rejecting values outside `0..=9`
    pub const fn new(value: u8) -> Option<Digit> {
        if value <= Self::MAX.0 {
            Some(Digit(value))
        } else {
            None
        }
    }

    /// Raw value in `0..=9`
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Next digit up, clamped at 9
    pub const fn incremented(self) -> Digit {
        if self.0 < Self::MAX.0 {
            Digit(self.0 + 1)
        } else {
            self
        }
    }

    /// Next digit down, clamped at 0
    pub const fn decremented(self) -> Digit {
        if self.0 > 0 {
            Digit(self.0 - 1)
        } else {
            self
        }
    }
}

impl Default for Digit {
    fn default() -> Self {
        Digit::ZERO
    }
}

/// Counter state shared between the input stage and the output stage
///
/// Owns the displayed digit plus the per-button debounce windows. Raw
/// button edges go in; clamped digit values come out. This is the single
/// mutation path for the digit.
#[derive(Debug, Clone, Copy)]
pub struct Counter {
    digit: Digit,
    windows: [DebounceWindow; ButtonEvent::COUNT],
}

impl Counter {
    /// Counter at power-on: digit 0, no accepted edges yet
    pub const fn new() -> Self {
        Self {
            digit: Digit::ZERO,
            windows: [DebounceWindow::new(); ButtonEvent::COUNT],
        }
    }

    /// Currently displayed digit
    pub const fn digit(&self) -> Digit {
        self.digit
    }

    /// Feed one raw button edge observed at `now_ms`
    ///
    /// Returns the digit to present when the edge clears the debounce
    /// guard, `None` when it is filtered out as bounce. An accepted edge
    /// at a range end leaves the digit unchanged but still restarts that
    /// button's guard window.
    pub fn feed(&mut self, event: ButtonEvent, now_ms: u64) -> Option<Digit> {
        if !self.windows[event.index()].accept(now_ms) {
            return None;
        }

        self.digit = match event {
            ButtonEvent::Increment => self.digit.incremented(),
            ButtonEvent::Decrement => self.digit.decremented(),
        };
        Some(self.digit)
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}
