//! Orb animation state bound to one drawing surface.

use hero_orb_core::{OrbSettings, Viewport};
use rand::Rng;

use crate::particle::ParticleField;
use crate::render::{DrawContext, render_frame};

/// A drawing surface the engine can size and draw into.
///
/// In the browser this is a `<canvas>` plus its 2D context; `layout_size`
/// measures the resize target (the canvas itself unless told otherwise).
pub trait Surface: DrawContext {
    /// Layout box size in CSS pixels.
    fn layout_size(&self) -> (f64, f64);
    /// Set the backing store size in device pixels.
    fn set_backing_size(&mut self, width: u32, height: u32);
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Viewport had no area; the clock did not advance.
    Skipped,
    /// Frame drawn with this many particles.
    Drawn(usize),
}

/// Orb animation state.
#[derive(Debug)]
pub struct OrbAnimator<S> {
    /// Effective settings after overrides.
    settings: OrbSettings,
    /// Particles sampled once at construction.
    field: ParticleField,
    /// Surface the orb draws into.
    surface: S,
    /// Last measured viewport.
    viewport: Viewport,
    /// Animation clock.
    time: f64,
}

impl<S: Surface> OrbAnimator<S> {
    /// Sample the particle field for `settings`. The viewport stays empty
    /// until the first [`resize`](Self::resize).
    pub fn new<R: Rng + ?Sized>(surface: S, settings: OrbSettings, rng: &mut R) -> Self {
        let field = ParticleField::generate(
            settings.particle_count,
            settings.radius,
            settings.base_size,
            rng,
        );
        Self {
            settings,
            field,
            surface,
            viewport: Viewport::default(),
            time: 0.0,
        }
    }

    /// Re-measure the surface and size its backing store.
    ///
    /// A zero-sized layout box is recorded so later frames skip, but the
    /// backing store and transform are left as they were.
    pub fn resize(&mut self, device_ratio: f64) {
        let (width, height) = self.surface.layout_size();
        let measured = Viewport::new(width, height, device_ratio);
        if !measured.is_drawable() {
            self.viewport.width = width;
            self.viewport.height = height;
            log::debug!("orb surface collapsed to {width}x{height}, pausing draws");
            return;
        }

        self.viewport = measured;
        let (backing_width, backing_height) = measured.backing_size();
        self.surface.set_backing_size(backing_width, backing_height);
        self.surface.set_scale_transform(measured.device_ratio);
        log::debug!(
            "orb surface resized to {width}x{height} at ratio {}",
            measured.device_ratio
        );
    }

    /// Advance the clock and draw one frame.
    pub fn tick(&mut self) -> FrameOutcome {
        if !self.viewport.is_drawable() {
            return FrameOutcome::Skipped;
        }

        self.time += self.settings.spin_speed;
        let drawn = render_frame(
            &mut self.surface,
            &self.field,
            self.time,
            &self.settings,
            &self.viewport,
        );
        FrameOutcome::Drawn(drawn)
    }

    pub fn settings(&self) -> &OrbSettings {
        &self.settings
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Current animation clock.
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
