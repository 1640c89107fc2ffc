//! Geometry of the circular progress meter.
//!
//! The ring is an 80×80 SVG. The status circle is drawn with a dash as long
//! as its circumference and shifted by `stroke-dashoffset`, so an offset
//! equal to [`DASH_ARRAY`] hides it and an offset of 0 draws it whole.

use std::f64::consts::PI;

use crate::UploadState;

/// Side of the SVG viewport.
pub const VIEW_SIZE: f64 = 80.0;

/// Ring centre on both axes.
pub const CENTER: f64 = VIEW_SIZE / 2.0;

/// Ring radius, leaving half a pixel for the 1px stroke.
pub const RADIUS: f64 = 39.5;

/// Circumference of the ring.
pub const DASH_ARRAY: f64 = PI * 2.0 * RADIUS;

/// `stroke-dashoffset` for a completion percentage.
pub fn dash_offset(percent: f64) -> f64 {
    let percent = percent.clamp(0.0, 100.0);
    DASH_ARRAY - DASH_ARRAY * percent / 100.0
}

/// Offset for the current state.
pub fn state_offset(state: &UploadState) -> f64 {
    dash_offset(state.percent())
}

/// `transform` attribute starting the stroke at twelve o'clock.
pub fn rotation() -> String {
    format!("rotate(-90 {} {})", CENTER, CENTER)
}
