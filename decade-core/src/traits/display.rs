//! Output-stage trait for the seven-segment display

use crate::segment::SegmentMask;

/// Contract shared by both output stages
///
/// `present` must leave the physical display showing `mask` before it
/// returns. How the mask reaches the display (dedicated lines or a
/// latched serial register) is the implementor's concern; the encoding
/// logic never branches on it.
pub trait SegmentDriver {
    /// Transport error type
    type Error;

    /// Drive the display to show `mask`
    fn present(&mut self, mask: SegmentMask) -> Result<(), Self::Error>;
}
