//! Measurement and placement models.

use serde::{Deserialize, Serialize};

/// Measurement unit tag.
///
/// This is the full unit set the normalization layer accepts. Unknown tags
/// fail at deserialization with a descriptive error instead of passing
/// through as unconverted magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    /// Device pixels (96 per inch)
    #[serde(rename = "PX", alias = "px")]
    Pixel,
    /// Typographic points (72 per inch)
    #[serde(rename = "PT", alias = "pt")]
    Point,
    /// Inches
    #[serde(rename = "IN", alias = "in")]
    Inch,
    /// English Metric Units (914400 per inch)
    #[serde(rename = "EMU", alias = "emu")]
    Emu,
    /// Percentage of an unspecified basis (crop offsets)
    #[serde(rename = "PERCENT", alias = "percent")]
    Percent,
}

impl Unit {
    /// The wire tag for this unit.
    pub fn tag(&self) -> &'static str {
        match self {
            Unit::Pixel => "PX",
            Unit::Point => "PT",
            Unit::Inch => "IN",
            Unit::Emu => "EMU",
            Unit::Percent => "PERCENT",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A numeric magnitude tagged with its measurement unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    /// Magnitude in the tagged unit
    pub value: f64,

    /// Measurement unit
    pub unit: Unit,
}

impl Measure {
    /// Create a measure with the given unit.
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Create a pixel measure.
    pub fn px(value: f64) -> Self {
        Self::new(value, Unit::Pixel)
    }

    /// Create a point measure.
    pub fn pt(value: f64) -> Self {
        Self::new(value, Unit::Point)
    }

    /// Create an EMU measure.
    pub fn emu(value: f64) -> Self {
        Self::new(value, Unit::Emu)
    }
}

impl Default for Measure {
    fn default() -> Self {
        Self::px(0.0)
    }
}

/// Element extent as width/height measures.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: Measure,

    /// Height
    pub height: Measure,
}

impl Size {
    /// Create a size from two measures.
    pub fn new(width: Measure, height: Measure) -> Self {
        Self { width, height }
    }

    /// Create a pixel size.
    pub fn px(width: f64, height: f64) -> Self {
        Self::new(Measure::px(width), Measure::px(height))
    }
}

/// Element placement as x/y measures from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal offset
    pub x: Measure,

    /// Vertical offset
    pub y: Measure,
}

impl Position {
    /// Create a position from two measures.
    pub fn new(x: Measure, y: Measure) -> Self {
        Self { x, y }
    }

    /// Create a pixel position.
    pub fn px(x: f64, y: f64) -> Self {
        Self::new(Measure::px(x), Measure::px(y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_wire_tags() {
        let m: Measure = serde_json::from_str(r#"{"value":100,"unit":"PX"}"#).unwrap();
        assert_eq!(m.unit, Unit::Pixel);
        assert_eq!(m.value, 100.0);

        let json = serde_json::to_string(&Measure::pt(12.0)).unwrap();
        assert!(json.contains("\"PT\""));
    }

    #[test]
    fn test_unit_lowercase_alias() {
        let m: Measure = serde_json::from_str(r#"{"value":1,"unit":"emu"}"#).unwrap();
        assert_eq!(m.unit, Unit::Emu);
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let result: std::result::Result<Measure, _> =
            serde_json::from_str(r#"{"value":1,"unit":"FURLONG"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_size_and_position_roundtrip() {
        let size = Size::px(100.0, 50.0);
        let json = serde_json::to_string(&size).unwrap();
        let back: Size = serde_json::from_str(&json).unwrap();
        assert_eq!(back, size);

        let pos = Position::px(10.0, 20.0);
        let json = serde_json::to_string(&pos).unwrap();
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pos);
    }
}
