//! Core types for the hero orb particle engine.
//!
//! Holds the configuration model shared by every host (engine settings and
//! caller overrides), the structured colour type used for particles, viewport
//! math for device-pixel-ratio aware canvases and the crate-wide error type.

mod color;
mod error;
mod settings;
mod viewport;

pub use color::{Hsla, hsl_to_rgb};
pub use error::{OrbError, Result};
pub use settings::{OrbOverrides, OrbSettings};
pub use viewport::{MAX_DEVICE_RATIO, Viewport, clamp_device_ratio};
