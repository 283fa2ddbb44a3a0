//! Per-frame drawing of the projected particle field.

use hero_orb_core::{Hsla, OrbSettings, Viewport};

use crate::particle::ParticleField;
use crate::transform::{Rotation, transform};

/// Shadow colour of a freshly created 2D context.
pub const TRANSPARENT_SHADOW: &str = "rgba(0, 0, 0, 0)";

/// The subset of a 2D canvas context the renderer drives.
///
/// Coordinates are in layout pixels; implementations map them onto their
/// backing store through [`DrawContext::set_scale_transform`].
pub trait DrawContext {
    /// Replace the current transform with a uniform scale.
    fn set_scale_transform(&mut self, scale: f64);
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn set_fill_color(&mut self, color: &Hsla);
    fn set_shadow(&mut self, color: &str, blur: f64);
    fn set_global_alpha(&mut self, alpha: f64);
    /// Fill a full circle with the current fill, shadow and alpha.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
}

/// Size multiplier oscillating around 1 for the given particle phase.
pub fn twinkle_factor(time: f64, phase: f64, twinkle: f64) -> f64 {
    1.0 + (time * 2.2 + phase).sin() * twinkle * 0.2
}

/// Opacity from depth, kept within [0.2, 1].
pub fn depth_fade(scale: f64) -> f64 {
    (scale * 0.65).clamp(0.2, 1.0)
}

/// Alpha written into the particle fill colour.
pub fn fill_alpha(fade: f64) -> f64 {
    0.45 + fade * 0.55
}

/// Clear the viewport and draw one circle per particle.
///
/// Leaves global alpha at 1 and the shadow transparent on return. Returns the
/// number of circles drawn.
pub fn render_frame<C: DrawContext + ?Sized>(
    ctx: &mut C,
    field: &ParticleField,
    time: f64,
    settings: &OrbSettings,
    viewport: &Viewport,
) -> usize {
    ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);

    let rotation = Rotation::at(time, settings);
    for particle in field.particles() {
        let twinkle = twinkle_factor(time, particle.phase, settings.twinkle);
        let projected = transform(particle.base, &rotation, settings, viewport);

        let size = particle.size * projected.scale * twinkle;
        let fade = depth_fade(projected.scale);

        ctx.set_fill_color(&particle.color.with_alpha(fill_alpha(fade)));
        ctx.set_shadow(&settings.shadow_color, size * 1.8);
        ctx.set_global_alpha(fade);
        ctx.fill_circle(projected.x, projected.y, size);
    }

    ctx.set_global_alpha(1.0);
    ctx.set_shadow(TRANSPARENT_SHADOW, 0.0);

    field.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawOp, RecordingSurface};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use test_case::test_case;

    #[test_case(0.0, 0.2 ; "far clamps to floor")]
    #[test_case(100.0, 1.0 ; "near clamps to ceiling")]
    #[test_case(1.0, 0.65 ; "unit scale")]
    #[test_case(-5.0, 0.2 ; "behind camera")]
    fn test_depth_fade(scale: f64, expected: f64) {
        assert!((depth_fade(scale) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_twinkle_disabled() {
        assert_eq!(twinkle_factor(12.3, 1.0, 0.0), 1.0);
    }

    #[test]
    fn test_twinkle_range() {
        for i in 0..100 {
            let factor = twinkle_factor(i as f64 * 0.37, 0.5, 0.55);
            assert!((1.0 - 0.11 - 1e-12..=1.0 + 0.11 + 1e-12).contains(&factor));
        }
    }

    #[test]
    fn test_fill_alpha_bounds() {
        assert!((fill_alpha(0.2) - 0.56).abs() < 1e-12);
        assert!((fill_alpha(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_frame_clears_then_draws_each_particle_and_resets_state() {
        let mut rng = SmallRng::seed_from_u64(3);
        let field = ParticleField::generate(5, 1.52, 1.4, &mut rng);
        let settings = OrbSettings::default();
        let viewport = Viewport::new(400.0, 400.0, 1.0);
        let (mut surface, log) = RecordingSurface::new(400.0, 400.0);

        let drawn = render_frame(&mut surface, &field, 0.011, &settings, &viewport);
        assert_eq!(drawn, 5);

        let ops = log.borrow().ops.clone();
        assert_eq!(ops.first(), Some(&DrawOp::Clear(0.0, 0.0, 400.0, 400.0)));
        assert_eq!(log.borrow().circles().len(), 5);
        assert_eq!(
            &ops[ops.len() - 2..],
            &[
                DrawOp::GlobalAlpha(1.0),
                DrawOp::Shadow(TRANSPARENT_SHADOW.to_string(), 0.0),
            ]
        );
    }

    #[test]
    fn test_fill_colour_keeps_particle_hue() {
        let mut rng = SmallRng::seed_from_u64(11);
        let field = ParticleField::generate(1, 1.52, 1.4, &mut rng);
        let particle = &field.particles()[0];
        let (mut surface, log) = RecordingSurface::new(200.0, 200.0);

        render_frame(
            &mut surface,
            &field,
            0.5,
            &OrbSettings::default(),
            &Viewport::new(200.0, 200.0, 1.0),
        );

        let fill = log
            .borrow()
            .ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Fill(color) => Some(*color),
                _ => None,
            })
            .unwrap();
        assert_eq!(fill.hue, particle.color.hue);
        assert_eq!(fill.saturation, particle.color.saturation);
        assert!((0.56..=1.0).contains(&fill.alpha));
    }

    #[test]
    fn test_empty_field_only_clears() {
        let field = ParticleField::default();
        let (mut surface, log) = RecordingSurface::new(100.0, 100.0);
        let drawn = render_frame(
            &mut surface,
            &field,
            1.0,
            &OrbSettings::default(),
            &Viewport::new(100.0, 100.0, 1.0),
        );

        assert_eq!(drawn, 0);
        assert!(log.borrow().circles().is_empty());
        assert_eq!(log.borrow().clears(), 1);
    }
}
