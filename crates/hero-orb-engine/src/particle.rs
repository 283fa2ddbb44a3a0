//! Particle field sampled uniformly on a sphere surface.

use std::f64::consts::TAU;

use glam::DVec3;
use hero_orb_core::Hsla;
use rand::Rng;

/// Hue band in degrees (start, width).
const HUE_BAND: (f64, f64) = (32.0, 18.0);
/// Saturation band in percent (start, width).
const SATURATION_BAND: (f64, f64) = (65.0, 25.0);
/// Lightness band in percent (start, width).
const LIGHTNESS_BAND: (f64, f64) = (42.0, 25.0);
/// Alpha every particle colour starts with.
const BASE_ALPHA: f64 = 0.9;

/// A single point of the orb.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position on the sphere surface in model units.
    pub base: DVec3,
    /// Base colour; the renderer replaces alpha per frame.
    pub color: Hsla,
    /// Base radius before depth scale and twinkle.
    pub size: f64,
    /// Twinkle phase offset in [0, 2π).
    pub phase: f64,
}

/// The fixed set of particles an engine animates.
///
/// The field only hands out shared references, so base positions stay as
/// sampled for the lifetime of the engine.
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
    radius: f64,
}

impl ParticleField {
    /// Sample `count` particles on a sphere of `radius`.
    pub fn generate<R: Rng + ?Sized>(
        count: usize,
        radius: f64,
        base_size: f64,
        rng: &mut R,
    ) -> Self {
        let particles = (0..count)
            .map(|_| make_particle(radius, base_size, rng))
            .collect();
        Self { particles, radius }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Radius the field was sampled on.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// Map two uniform samples in [0, 1) to a point on the sphere surface.
///
/// Inclination is `acos(2v - 1)` so points are uniform per unit area rather
/// than per angle, which keeps them from bunching at the poles.
pub fn sample_sphere(radius: f64, u: f64, v: f64) -> DVec3 {
    let theta = TAU * u;
    let phi = (2.0 * v - 1.0).clamp(-1.0, 1.0).acos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    DVec3::new(
        radius * sin_phi * theta.cos(),
        radius * cos_phi,
        radius * sin_phi * theta.sin(),
    )
}

fn make_particle<R: Rng + ?Sized>(radius: f64, base_size: f64, rng: &mut R) -> Particle {
    let u: f64 = rng.random();
    let v: f64 = rng.random();
    let base = sample_sphere(radius, u, v);

    let color = Hsla::new(
        HUE_BAND.0 + rng.random::<f64>() * HUE_BAND.1,
        SATURATION_BAND.0 + rng.random::<f64>() * SATURATION_BAND.1,
        LIGHTNESS_BAND.0 + rng.random::<f64>() * LIGHTNESS_BAND.1,
        BASE_ALPHA,
    );

    Particle {
        base,
        color,
        size: base_size * (0.45 + rng.random::<f64>() * 0.55),
        phase: rng.random::<f64>() * TAU,
    }
}
