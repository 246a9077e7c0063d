//! Seven-segment encoding
//!
//! Pure digit-to-bitmask lookup. One constant table per wiring variant;
//! the tables differ only in which bit position each physical segment
//! line occupies.

pub mod font;

pub use font::{SegmentFont, SegmentMask, DIRECT_FONT, DIRECT_LINE_BASE, SHIFT_FONT};
