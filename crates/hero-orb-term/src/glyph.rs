//! Glyph and colour selection for particles drawn as terminal cells.

use ratatui::style::Color;

use crate::surface::Dot;

/// Glyphs for small, medium and large particles.
pub const DOT_CHARS: [char; 3] = ['·', '•', '●'];

/// Pick a glyph by rendered radius.
pub fn dot_char(radius: f64) -> char {
    if radius < 0.9 {
        DOT_CHARS[0]
    } else if radius < 1.4 {
        DOT_CHARS[1]
    } else {
        DOT_CHARS[2]
    }
}

/// Particle colour dimmed toward black by its effective opacity.
pub fn dot_color(dot: &Dot) -> Color {
    let (r, g, b) = dot.color.to_rgb();
    let opacity = (dot.color.alpha * dot.global_alpha).clamp(0.0, 1.0);
    Color::Rgb(
        (r as f64 * opacity) as u8,
        (g as f64 * opacity) as u8,
        (b as f64 * opacity) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hero_orb_core::Hsla;

    #[test]
    fn test_dot_char_grows_with_radius() {
        assert_eq!(dot_char(0.3), '·');
        assert_eq!(dot_char(1.0), '•');
        assert_eq!(dot_char(2.5), '●');
    }

    #[test]
    fn test_dot_color_dims_with_alpha() {
        let color = Hsla::new(0.0, 100.0, 50.0, 1.0);
        let bright = Dot {
            x: 0.0,
            y: 0.0,
            radius: 1.0,
            color,
            global_alpha: 1.0,
        };
        let dim = Dot {
            global_alpha: 0.5,
            ..bright
        };
        assert_eq!(dot_color(&bright), Color::Rgb(255, 0, 0));
        assert_eq!(dot_color(&dim), Color::Rgb(127, 0, 0));
    }
}
