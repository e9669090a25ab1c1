//! Indicator (knob) deflection
//!
//! Purely cosmetic: the fixed pointer at 12 o'clock kicks over as each
//! segment boundary sweeps past it, then relaxes to rest over the next
//! half segment. The renderer applies the returned tilt to the knob
//! transform; winner resolution never looks at this.

use crate::layout::SegmentLayout;
use crate::normalize_degrees;

/// Peak tilt when a boundary passes under the pointer (degrees)
pub const KNOB_KICK_DEG: f64 = 35.0;

/// Tilt of the pointer for a wheel rotation, in degrees.
pub fn knob_deflection(angle: f64, layout: &SegmentLayout) -> f64 {
    // Fraction of the current segment that has swept past the pointer
    let swept = normalize_degrees(angle - layout.angle_offset()) / layout.segment_angle();
    let f = swept.fract();
    if f < 0.5 {
        -KNOB_KICK_DEG * (1.0 - 2.0 * f)
    } else {
        0.0
    }
}
