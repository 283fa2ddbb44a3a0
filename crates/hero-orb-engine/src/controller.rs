//! Lifecycle of a running orb: frame loop, resize handling and teardown.
//!
//! A controller moves through `Uninitialized -> Running -> Destroyed`. Host
//! callbacks only hold weak references to the running engine, so once the
//! controller is destroyed or dropped a callback that was already queued
//! does nothing.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use hero_orb_core::{OrbOverrides, OrbSettings, Result};
use rand::Rng;

use crate::animator::{OrbAnimator, Surface};

/// Callback registered with a [`Host`].
pub type Hook = Rc<dyn Fn()>;

/// Callbacks the engine hands to its host on start.
#[derive(Clone)]
pub struct HostHooks {
    /// Run once per scheduled animation frame.
    pub frame: Hook,
    /// Run on window resize and on resize observation of the container.
    pub resize: Hook,
}

/// Handle of a scheduled animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRequest(pub i32);

/// The environment an orb runs in: frame scheduling and resize events.
pub trait Host {
    fn device_pixel_ratio(&self) -> f64;

    /// Register the window resize listener and, where the platform supports
    /// it, resize observation of the surface's container.
    fn install(&mut self, hooks: HostHooks);

    /// Schedule one call of the frame hook.
    fn request_frame(&mut self) -> Option<FrameRequest>;

    fn cancel_frame(&mut self, request: FrameRequest);

    /// Remove every listener and observer added by [`Host::install`].
    fn uninstall(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    Running,
    Destroyed,
}

struct Running<S, H> {
    animator: OrbAnimator<S>,
    host: H,
    pending_frame: Option<FrameRequest>,
}

struct Shared<S, H> {
    state: Cell<LifecycleState>,
    /// Set when destroy arrives while a callback holds the engine.
    teardown_pending: Cell<bool>,
    running: RefCell<Running<S, H>>,
}

impl<S: Surface, H: Host> Shared<S, H> {
    fn on_frame(&self) {
        if self.state.get() == LifecycleState::Running {
            if let Ok(mut running) = self.running.try_borrow_mut() {
                // Schedule first so a slow frame never delays the next one.
                running.pending_frame = running.host.request_frame();
                running.animator.tick();
            }
        }
        self.finish_teardown();
    }

    fn on_resize(&self) {
        if self.state.get() == LifecycleState::Running {
            if let Ok(mut running) = self.running.try_borrow_mut() {
                let ratio = running.host.device_pixel_ratio();
                running.animator.resize(ratio);
            }
        }
        self.finish_teardown();
    }

    fn destroy(&self) {
        if self.state.get() == LifecycleState::Destroyed {
            return;
        }
        self.state.set(LifecycleState::Destroyed);
        self.teardown();
    }

    /// Run a teardown that was deferred while the engine was borrowed.
    fn finish_teardown(&self) {
        if self.teardown_pending.get() {
            self.teardown();
        }
    }

    /// Cancel the pending frame and release host listeners, or mark the
    /// teardown pending if the engine is borrowed right now.
    fn teardown(&self) {
        let Ok(mut running) = self.running.try_borrow_mut() else {
            self.teardown_pending.set(true);
            return;
        };
        self.teardown_pending.set(false);
        if let Some(request) = running.pending_frame.take() {
            running.host.cancel_frame(request);
        }
        running.host.uninstall();
        log::debug!("hero orb destroyed");
    }
}

/// Create/destroy handle around one orb engine.
///
/// Dropping the controller destroys it. Creating two controllers on the same
/// surface is not supported.
pub struct OrbController<S: Surface + 'static, H: Host + 'static> {
    shared: Option<Rc<Shared<S, H>>>,
}

impl<S: Surface + 'static, H: Host + 'static> OrbController<S, H> {
    /// Start an orb on an acquired surface, or return an inert controller if
    /// acquisition failed.
    pub fn create<R: Rng + ?Sized>(
        surface: Result<S>,
        overrides: &OrbOverrides,
        host: H,
        rng: &mut R,
    ) -> Self {
        match surface {
            Ok(surface) => {
                Self::start(surface, OrbSettings::from_overrides(overrides), host, rng)
            }
            Err(err) => {
                log::warn!("hero orb disabled: {err}");
                Self::inert()
            }
        }
    }

    /// A controller that never runs; `destroy` is a no-op.
    pub fn inert() -> Self {
        Self { shared: None }
    }

    /// Build the field, size the surface, hook into the host and draw the
    /// first frame.
    pub fn start<R: Rng + ?Sized>(
        surface: S,
        settings: OrbSettings,
        host: H,
        rng: &mut R,
    ) -> Self {
        let particle_count = settings.particle_count;
        let mut animator = OrbAnimator::new(surface, settings, rng);
        animator.resize(host.device_pixel_ratio());

        let shared = Rc::new(Shared {
            state: Cell::new(LifecycleState::Uninitialized),
            teardown_pending: Cell::new(false),
            running: RefCell::new(Running {
                animator,
                host,
                pending_frame: None,
            }),
        });

        let frame_target = Rc::downgrade(&shared);
        let resize_target = Rc::downgrade(&shared);
        let hooks = HostHooks {
            frame: Rc::new(move || {
                if let Some(shared) = frame_target.upgrade() {
                    shared.on_frame();
                }
            }),
            resize: Rc::new(move || {
                if let Some(shared) = resize_target.upgrade() {
                    shared.on_resize();
                }
            }),
        };

        shared.running.borrow_mut().host.install(hooks);
        shared.state.set(LifecycleState::Running);
        log::debug!("hero orb started with {particle_count} particles");

        shared.on_frame();
        Self {
            shared: Some(shared),
        }
    }

    /// Stop the frame loop and release host listeners. Safe to call again.
    pub fn destroy(&self) {
        if let Some(shared) = &self.shared {
            shared.destroy();
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.shared
            .as_ref()
            .map_or(LifecycleState::Uninitialized, |shared| shared.state.get())
    }

    /// Whether surface acquisition failed at creation.
    pub fn is_inert(&self) -> bool {
        self.shared.is_none()
    }

    /// Effective settings; `None` for an inert controller.
    pub fn settings(&self) -> Option<OrbSettings> {
        self.with_animator(|animator| animator.settings().clone())
    }

    /// Inspect the engine between frames.
    ///
    /// A `destroy` issued from inside `f` completes once `f` returns.
    pub fn with_animator<T>(&self, f: impl FnOnce(&OrbAnimator<S>) -> T) -> Option<T> {
        let shared = self.shared.as_ref()?;
        let value = {
            let running = shared.running.try_borrow().ok()?;
            f(&running.animator)
        };
        shared.finish_teardown();
        Some(value)
    }
}

impl<S: Surface + 'static, H: Host + 'static> Drop for OrbController<S, H> {
    fn drop(&mut self) {
        self.destroy();
    }
}
