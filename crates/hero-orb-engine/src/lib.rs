//! Sphere particle engine behind the hero orb.
//!
//! Points are sampled once on a sphere surface, then every frame they are
//! rotated (continuous yaw, oscillating pitch), perspective-projected and
//! drawn as glowing circles whose size and opacity follow their depth. The
//! engine draws through the [`Surface`] trait and is driven by a [`Host`]
//! that schedules frames and reports resizes, so the same code runs against
//! a browser canvas, a terminal buffer or a test double.

mod animator;
mod controller;
mod element;
mod particle;
mod render;
mod transform;

#[cfg(test)]
mod testing;

pub use animator::{FrameOutcome, OrbAnimator, Surface};
pub use controller::{FrameRequest, Hook, Host, HostHooks, LifecycleState, OrbController};
pub use element::{
    ElementAttributes, ElementMount, ElementOptions, HeroOrbElement, OBSERVED_ATTRIBUTES,
    SIZE_PROPERTY, parse_leading_float,
};
pub use glam::DVec3;
pub use particle::{Particle, ParticleField, sample_sphere};
pub use render::{
    DrawContext, TRANSPARENT_SHADOW, depth_fade, fill_alpha, render_frame, twinkle_factor,
};
pub use transform::{Projected, Rotation, project, rotate_x, rotate_y, transform};
