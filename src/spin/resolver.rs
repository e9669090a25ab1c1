//! Winner resolution: settled angle -> segment index
//!
//! The wheel art carries a constant half-segment counter-rotation so that
//! a freshly mounted wheel (rotation 0) shows a wedge midpoint under the
//! indicator rather than an edge. Resolution therefore samples the wheel
//! at `angle - angle_offset`, then walks the sweep in reverse: the wheel
//! rotates clockwise while indices advance the other way, hence the
//! `(360 - x)` reversal and the `+1` rotation.

use crate::layout::SegmentLayout;
use crate::{consts::ONE_TURN, normalize_degrees};

/// Map a settled rotation to the segment under the indicator.
///
/// Total and pure: any finite angle yields an index in `[0, count)`, with
/// no hidden state and no randomness. Periodic in 360 degrees.
pub fn resolve(final_angle: f64, layout: &SegmentLayout) -> usize {
    let normalized = normalize_degrees(normalize_degrees(final_angle) - layout.angle_offset());
    let reversed = ((ONE_TURN - normalized) / layout.segment_angle()).floor() as usize;
    let index = (reversed + 1) % layout.count();
    debug_assert!(index < layout.count());
    index
}
