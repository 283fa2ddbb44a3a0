//! Browser bindings for the hero orb.
//!
//! Exposes `createOrbAnimator(canvas, configuration)` and the
//! `HeroOrbElement` class that a custom element forwards its lifecycle
//! callbacks to.

#![cfg(target_arch = "wasm32")]

mod api;
mod element;
mod host;
mod surface;

use wasm_bindgen::prelude::*;

pub use api::{OrbHandle, create_orb_animator};
pub use element::HeroOrbElementBinding;
pub use host::BrowserHost;
pub use surface::CanvasSurface;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}
