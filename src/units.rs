//! Unit conversion.
//!
//! Every declared unit tag either converts or fails with
//! [`Error::UnsupportedUnit`]; there is no silent passthrough of
//! unconverted magnitudes.

use crate::error::{Error, Result};
use crate::model::{Measure, Unit};

/// Device pixels per inch.
pub const PIXELS_PER_INCH: f64 = 96.0;

/// Device pixels per typographic point.
pub const PIXELS_PER_POINT: f64 = 4.0 / 3.0;

/// English Metric Units per inch.
pub const EMU_PER_INCH: f64 = 914_400.0;

/// English Metric Units per device pixel.
pub const EMU_PER_PIXEL: f64 = EMU_PER_INCH / PIXELS_PER_INCH;

/// Canvas width in inches (16:9).
pub const CANVAS_WIDTH_IN: f64 = 40.0 / 3.0;

/// Canvas height in inches (16:9).
pub const CANVAS_HEIGHT_IN: f64 = 7.5;

/// Canvas width in device pixels.
pub const CANVAS_WIDTH_PX: f64 = CANVAS_WIDTH_IN * PIXELS_PER_INCH;

/// Canvas height in device pixels.
pub const CANVAS_HEIGHT_PX: f64 = CANVAS_HEIGHT_IN * PIXELS_PER_INCH;

/// Convert a measure to device pixels.
///
/// `PERCENT` has no absolute pixel meaning and is rejected; callers that
/// can tolerate the failure downgrade it to a per-element warning.
pub fn to_pixels(measure: Measure) -> Result<f64> {
    match measure.unit {
        Unit::Pixel => Ok(measure.value),
        Unit::Point => Ok(measure.value * PIXELS_PER_POINT),
        Unit::Inch => Ok(measure.value * PIXELS_PER_INCH),
        Unit::Emu => Ok(measure.value / EMU_PER_PIXEL),
        Unit::Percent => Err(Error::UnsupportedUnit(format!(
            "{} has no pixel conversion",
            measure.unit
        ))),
    }
}

/// Convert a pixel value to inches.
pub fn to_inches(pixels: f64) -> f64 {
    pixels / PIXELS_PER_INCH
}

/// Resolve a font size to typographic points.
///
/// Pixel magnitudes are converted; anything else is taken as already
/// point-like and passes through unchanged.
pub fn points_from_font_size(measure: Measure) -> f64 {
    match measure.unit {
        Unit::Pixel => measure.value / PIXELS_PER_POINT,
        _ => measure.value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_identity() {
        assert_eq!(to_pixels(Measure::px(100.0)).unwrap(), 100.0);
    }

    #[test]
    fn test_point_and_inch_conversion() {
        assert_eq!(to_pixels(Measure::pt(12.0)).unwrap(), 16.0);
        assert_eq!(
            to_pixels(Measure::new(1.0, Unit::Inch)).unwrap(),
            PIXELS_PER_INCH
        );
    }

    #[test]
    fn test_emu_conversion() {
        // 914400 EMU = 1 inch = 96 px
        assert_eq!(to_pixels(Measure::emu(914_400.0)).unwrap(), 96.0);
        assert_eq!(to_pixels(Measure::emu(9_525.0)).unwrap(), 1.0);
    }

    #[test]
    fn test_percent_rejected() {
        let result = to_pixels(Measure::new(50.0, Unit::Percent));
        assert!(matches!(result, Err(Error::UnsupportedUnit(_))));
    }

    #[test]
    fn test_to_inches() {
        assert_eq!(to_inches(96.0), 1.0);
        assert_eq!(to_inches(CANVAS_WIDTH_PX), CANVAS_WIDTH_IN);
    }

    #[test]
    fn test_font_size_resolution() {
        // 16 px = 12 pt
        assert_eq!(points_from_font_size(Measure::px(16.0)), 12.0);
        // Non-pixel input passes through unchanged
        assert_eq!(points_from_font_size(Measure::pt(18.0)), 18.0);
        assert_eq!(
            points_from_font_size(Measure::new(14.0, Unit::Percent)),
            14.0
        );
    }

    #[test]
    fn test_canvas_is_16_9() {
        assert_eq!(CANVAS_WIDTH_PX, 1280.0);
        assert_eq!(CANVAS_HEIGHT_PX, 720.0);
    }
}
