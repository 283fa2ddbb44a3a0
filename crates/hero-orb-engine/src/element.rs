//! Attribute-driven wrapper that embeds an orb in a host element.
//!
//! The host element exposes `size`, `spin-speed` and `twinkle` attributes.
//! It only runs an engine while attached to a document and rebuilds it
//! whenever an observed attribute changes.

use hero_orb_core::OrbOverrides;

use crate::animator::Surface;
use crate::controller::{Host, OrbController};

/// Attributes whose changes trigger a rebuild.
pub const OBSERVED_ATTRIBUTES: [&str; 3] = ["spin-speed", "twinkle", "size"];

/// CSS custom property that carries the host size.
pub const SIZE_PROPERTY: &str = "--hero-orb-size";

const SPIN_SPEED_FINE: f64 = 0.011;
const SPIN_SPEED_COARSE: f64 = 0.008;
const TWINKLE_FINE: f64 = 0.55;
const TWINKLE_COARSE: f64 = 0.45;

/// Raw attribute values as last seen on the element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementAttributes {
    pub size: Option<String>,
    pub spin_speed: Option<String>,
    pub twinkle: Option<String>,
}

impl ElementAttributes {
    /// Record a changed attribute. Returns `false` for attributes the element
    /// does not observe.
    pub fn set(&mut self, name: &str, value: Option<String>) -> bool {
        let slot = match name {
            "size" => &mut self.size,
            "spin-speed" => &mut self.spin_speed,
            "twinkle" => &mut self.twinkle,
            _ => return false,
        };
        *slot = value;
        true
    }
}

/// Options resolved from attributes and the pointer type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementOptions {
    /// Host width and height in pixels, when a positive size was given.
    pub host_size: Option<f64>,
    pub spin_speed: f64,
    pub twinkle: f64,
}

impl ElementOptions {
    /// Resolve options; touch devices default to a calmer orb.
    pub fn collect(attributes: &ElementAttributes, coarse_pointer: bool) -> Self {
        let size = attributes.size.as_deref().and_then(parse_leading_float);
        let spin = attributes.spin_speed.as_deref().and_then(parse_leading_float);
        let twinkle = attributes.twinkle.as_deref().and_then(parse_leading_float);

        Self {
            host_size: size.filter(|size| *size > 0.0),
            spin_speed: spin.unwrap_or(if coarse_pointer {
                SPIN_SPEED_COARSE
            } else {
                SPIN_SPEED_FINE
            }),
            twinkle: twinkle.unwrap_or(if coarse_pointer {
                TWINKLE_COARSE
            } else {
                TWINKLE_FINE
            }),
        }
    }

    pub fn overrides(&self) -> OrbOverrides {
        OrbOverrides {
            spin_speed: Some(self.spin_speed),
            twinkle: Some(self.twinkle),
            ..Default::default()
        }
    }
}

/// Parse the longest numeric prefix of `value`, ignoring leading whitespace
/// (`"12px"` gives 12). Non-finite results are rejected.
pub fn parse_leading_float(value: &str) -> Option<f64> {
    let trimmed = value.trim_start();
    let candidate_len = trimmed
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        .last()
        .map_or(0, |(i, c)| i + c.len_utf8());

    (1..=candidate_len)
        .rev()
        .find_map(|len| trimmed[..len].parse::<f64>().ok())
        .filter(|parsed| parsed.is_finite())
}

/// Platform side of a host element.
pub trait ElementMount {
    type Surface: Surface + 'static;
    type Host: Host + 'static;

    /// Whether the primary pointer is coarse (touch).
    fn coarse_pointer(&self) -> bool;

    /// Apply a pixel size to the host element.
    fn apply_host_size(&mut self, pixels: f64);

    /// Start an engine on the element's canvas, sized by the element itself.
    fn mount(&mut self, overrides: &OrbOverrides) -> OrbController<Self::Surface, Self::Host>;
}

/// Host element state: attributes, attachment and the running engine.
pub struct HeroOrbElement<M: ElementMount> {
    mount: M,
    attributes: ElementAttributes,
    connected: bool,
    controller: Option<OrbController<M::Surface, M::Host>>,
}

impl<M: ElementMount> HeroOrbElement<M> {
    pub fn new(mount: M) -> Self {
        Self {
            mount,
            attributes: ElementAttributes::default(),
            connected: false,
            controller: None,
        }
    }

    /// Element attached to a document.
    pub fn connected(&mut self) {
        self.connected = true;
        self.ensure_engine();
    }

    /// Element removed from its document.
    pub fn disconnected(&mut self) {
        self.connected = false;
        self.destroy_engine();
    }

    /// An attribute changed; rebuilds the engine when attached.
    pub fn attribute_changed(&mut self, name: &str, value: Option<String>) {
        if !self.attributes.set(name, value) {
            return;
        }
        if self.connected {
            self.destroy_engine();
            self.ensure_engine();
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn controller(&self) -> Option<&OrbController<M::Surface, M::Host>> {
        self.controller.as_ref()
    }

    pub fn attributes(&self) -> &ElementAttributes {
        &self.attributes
    }

    pub fn mount(&self) -> &M {
        &self.mount
    }

    fn ensure_engine(&mut self) {
        if self.controller.is_some() {
            return;
        }
        let options = ElementOptions::collect(&self.attributes, self.mount.coarse_pointer());
        if let Some(size) = options.host_size {
            self.mount.apply_host_size(size);
        }
        self.controller = Some(self.mount.mount(&options.overrides()));
    }

    fn destroy_engine(&mut self) {
        if let Some(controller) = self.controller.take() {
            controller.destroy();
        }
    }
}
