//! Structured particle colour.

use std::fmt;

/// An HSLA colour with saturation and lightness in percent.
///
/// Particles keep their colour in this form and the renderer swaps in a
/// per-frame alpha before formatting it as a CSS colour string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    /// Hue in degrees.
    pub hue: f64,
    /// Saturation in percent (0-100).
    pub saturation: f64,
    /// Lightness in percent (0-100).
    pub lightness: f64,
    /// Opacity (0.0-1.0).
    pub alpha: f64,
}

impl Hsla {
    pub const fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    /// Same hue, saturation and lightness with a different alpha.
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Convert to 8-bit RGB, ignoring alpha.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        hsl_to_rgb(self.hue, self.saturation / 100.0, self.lightness / 100.0)
    }
}

/// Formats as a CSS `hsla()` value with alpha rounded to two decimals.
impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {:.2})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// Convert HSL to RGB. Hue is in degrees and wraps; saturation and
/// lightness are fractions clamped to 0.0-1.0.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let saturation = saturation.clamp(0.0, 1.0);
    let lightness = lightness.clamp(0.0, 1.0);

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue.rem_euclid(360.0) / 60.0;
    let secondary = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

    let (r, g, b) = match sector as u8 {
        0 => (chroma, secondary, 0.0),
        1 => (secondary, chroma, 0.0),
        2 => (0.0, chroma, secondary),
        3 => (0.0, secondary, chroma),
        4 => (secondary, 0.0, chroma),
        _ => (chroma, 0.0, secondary),
    };

    let floor = lightness - chroma / 2.0;
    let channel = |value: f64| ((value + floor) * 255.0).round() as u8;
    (channel(r), channel(g), channel(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_display_formats_alpha_to_two_decimals() {
        let color = Hsla::new(40.0, 75.5, 50.0, 0.9).with_alpha(0.72345);
        assert_eq!(color.to_string(), "hsla(40, 75.5%, 50%, 0.72)");
    }

    #[test]
    fn test_with_alpha_keeps_hsl() {
        let base = Hsla::new(32.0, 65.0, 42.0, 0.9);
        let faded = base.with_alpha(0.45);
        assert_eq!(faded.hue, base.hue);
        assert_eq!(faded.saturation, base.saturation);
        assert_eq!(faded.lightness, base.lightness);
        assert_eq!(faded.alpha, 0.45);
    }

    #[test_case(0.0, 1.0, 0.5, (255, 0, 0) ; "red")]
    #[test_case(120.0, 1.0, 0.5, (0, 255, 0) ; "green")]
    #[test_case(240.0, 1.0, 0.5, (0, 0, 255) ; "blue")]
    #[test_case(60.0, 1.0, 0.5, (255, 255, 0) ; "yellow")]
    #[test_case(0.0, 0.0, 1.0, (255, 255, 255) ; "white")]
    #[test_case(200.0, 0.0, 0.5, (128, 128, 128) ; "grey")]
    #[test_case(480.0, 1.0, 0.5, (0, 255, 0) ; "hue wraps")]
    #[test_case(-120.0, 1.0, 0.5, (0, 0, 255) ; "negative hue")]
    fn test_hsl_to_rgb(hue: f64, saturation: f64, lightness: f64, expected: (u8, u8, u8)) {
        assert_eq!(hsl_to_rgb(hue, saturation, lightness), expected);
    }

    #[test]
    fn test_warm_particle_is_orange() {
        let (r, g, b) = Hsla::new(40.0, 80.0, 55.0, 0.9).to_rgb();
        assert!(r > g && g > b);
    }
}
