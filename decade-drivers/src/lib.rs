//! Output-stage implementations
//!
//! Concrete [`SegmentDriver`](decade_core::traits::SegmentDriver)
//! implementations over `embedded-hal` pins and buses:
//!
//! - Direct drive (one GPIO line per segment)
//! - Serial-to-parallel shift register behind a latched SPI link

#![no_std]
#![deny(unsafe_code)]

pub mod display;
