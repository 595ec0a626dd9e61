//! Color normalization.
//!
//! Converts `rgb(r, g, b)` textual colors to `#rrggbb` hex. Strings that do
//! not look rgb-shaped (already-hex values, named colors) pass through
//! unchanged; rgb-shaped strings that cannot produce valid hex (channels
//! above 255, negative or non-integer channels) are rejected rather than
//! emitted as malformed hex.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};

fn rgb_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^rgb\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*\)$").unwrap()
    })
}

/// Normalize a color string.
///
/// `rgb(r, g, b)` with integer channels 0-255 becomes `#rrggbb` (lowercase,
/// zero-padded). Input that is not rgb-shaped is returned unchanged.
pub fn normalize_color(input: &str) -> Result<Cow<'_, str>> {
    let trimmed = input.trim();

    if let Some(caps) = rgb_pattern().captures(trimmed) {
        let mut channels = [0u8; 3];
        for (slot, cap) in channels.iter_mut().zip(caps.iter().skip(1)) {
            let digits = cap.map(|m| m.as_str()).unwrap_or_default();
            *slot = digits.parse::<u8>().map_err(|_| {
                Error::UnsupportedColorFormat(format!(
                    "channel `{}` out of range in `{}`",
                    digits, input
                ))
            })?;
        }
        return Ok(Cow::Owned(format!(
            "#{:02x}{:02x}{:02x}",
            channels[0], channels[1], channels[2]
        )));
    }

    // rgb-prefixed but not matching the strict pattern: negative,
    // non-integer, or otherwise malformed channels.
    if trimmed.starts_with("rgb(") || trimmed.starts_with("rgb (") {
        return Err(Error::UnsupportedColorFormat(format!(
            "malformed rgb color `{}`",
            input
        )));
    }

    Ok(Cow::Borrowed(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(normalize_color("rgb(255, 0, 0)").unwrap(), "#ff0000");
        assert_eq!(normalize_color("rgb(0,0,0)").unwrap(), "#000000");
        assert_eq!(normalize_color("rgb(255,255,255)").unwrap(), "#ffffff");
        assert_eq!(normalize_color("rgb( 16 , 32 , 48 )").unwrap(), "#102030");
    }

    #[test]
    fn test_hex_is_seven_chars_lowercase() {
        for color in ["rgb(1, 2, 3)", "rgb(200, 150, 100)", "rgb(255, 255, 255)"] {
            let hex = normalize_color(color).unwrap();
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert_eq!(hex.to_lowercase(), hex.to_string());
        }
    }

    #[test]
    fn test_round_trip() {
        for (r, g, b) in [(0u8, 0u8, 0u8), (255, 0, 0), (12, 34, 56), (255, 255, 255)] {
            let input = format!("rgb({}, {}, {})", r, g, b);
            let hex = normalize_color(&input).unwrap();
            let back_r = u8::from_str_radix(&hex[1..3], 16).unwrap();
            let back_g = u8::from_str_radix(&hex[3..5], 16).unwrap();
            let back_b = u8::from_str_radix(&hex[5..7], 16).unwrap();
            assert_eq!((back_r, back_g, back_b), (r, g, b));
        }
    }

    #[test]
    fn test_non_rgb_identity() {
        for input in ["#ff0000", "black", "transparent", "", "hsl(0, 50%, 50%)"] {
            assert_eq!(normalize_color(input).unwrap(), input);
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(matches!(
            normalize_color("rgb(300, 0, 0)"),
            Err(Error::UnsupportedColorFormat(_))
        ));
    }

    #[test]
    fn test_malformed_rgb_rejected() {
        for input in ["rgb(-1, 0, 0)", "rgb(1.5, 0, 0)", "rgb(1, 2)", "rgb(a, b, c)"] {
            assert!(
                matches!(
                    normalize_color(input),
                    Err(Error::UnsupportedColorFormat(_))
                ),
                "expected rejection for `{}`",
                input
            );
        }
    }
}
