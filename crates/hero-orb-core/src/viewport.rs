//! Viewport state for device-pixel-ratio aware canvases.

/// Upper bound on the device pixel ratio used for the backing store.
pub const MAX_DEVICE_RATIO: f64 = 2.0;

/// Normalise a host-reported device pixel ratio.
///
/// Missing, zero, negative or non-finite ratios fall back to 1; anything
/// above [`MAX_DEVICE_RATIO`] is capped.
pub fn clamp_device_ratio(raw: f64) -> f64 {
    if raw.is_finite() && raw > 0.0 {
        raw.min(MAX_DEVICE_RATIO)
    } else {
        1.0
    }
}

/// Current layout size of the drawing surface and the ratio in effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in layout pixels.
    pub width: f64,
    /// Height in layout pixels.
    pub height: f64,
    /// Device pixel ratio applied to the backing store.
    pub device_ratio: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            device_ratio: 1.0,
        }
    }
}

impl Viewport {
    /// Build a viewport from a measured layout box and a raw device ratio.
    pub fn new(width: f64, height: f64, raw_ratio: f64) -> Self {
        Self {
            width,
            height,
            device_ratio: clamp_device_ratio(raw_ratio),
        }
    }

    /// Whether there is anything to draw into.
    pub fn is_drawable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Backing store size in device pixels (truncated like canvas attributes).
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.device_ratio) as u32,
            (self.height * self.device_ratio) as u32,
        )
    }

    /// Centre of the viewport in layout pixels.
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}
