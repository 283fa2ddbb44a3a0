//! Backing logic for the `<kd-hero-orb>` custom element.
//!
//! A thin JavaScript `HTMLElement` subclass owns the shadow root and canvas
//! and forwards `connectedCallback`, `disconnectedCallback` and
//! `attributeChangedCallback` to this class.

use hero_orb_core::OrbOverrides;
use hero_orb_engine::{
    ElementMount, HeroOrbElement, OBSERVED_ATTRIBUTES, OrbController, SIZE_PROPERTY,
};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlElement};

use crate::api::mount_orb;
use crate::host::BrowserHost;
use crate::surface::CanvasSurface;

struct WebMount {
    host: HtmlElement,
    canvas: HtmlCanvasElement,
}

impl ElementMount for WebMount {
    type Surface = CanvasSurface;
    type Host = BrowserHost;

    fn coarse_pointer(&self) -> bool {
        web_sys::window()
            .and_then(|window| window.match_media("(pointer: coarse)").ok().flatten())
            .is_some_and(|query| query.matches())
    }

    fn apply_host_size(&mut self, pixels: f64) {
        if let Err(err) = self
            .host
            .style()
            .set_property(SIZE_PROPERTY, &format!("{pixels}px"))
        {
            log::debug!("unable to size hero orb host: {err:?}");
        }
    }

    fn mount(&mut self, overrides: &OrbOverrides) -> OrbController<CanvasSurface, BrowserHost> {
        mount_orb(&self.canvas.clone().into(), overrides, Some(self.host.clone().into()))
    }
}

#[wasm_bindgen(js_name = HeroOrbElement)]
pub struct HeroOrbElementBinding {
    inner: HeroOrbElement<WebMount>,
}

#[wasm_bindgen(js_class = HeroOrbElement)]
impl HeroOrbElementBinding {
    #[wasm_bindgen(constructor)]
    pub fn new(host: HtmlElement, canvas: HtmlCanvasElement) -> Self {
        Self {
            inner: HeroOrbElement::new(WebMount { host, canvas }),
        }
    }

    #[wasm_bindgen(js_name = observedAttributes)]
    pub fn observed_attributes() -> js_sys::Array {
        OBSERVED_ATTRIBUTES
            .iter()
            .map(|name| JsValue::from_str(name))
            .collect()
    }

    pub fn connected(&mut self) {
        self.inner.connected();
    }

    pub fn disconnected(&mut self) {
        self.inner.disconnected();
    }

    #[wasm_bindgen(js_name = attributeChanged)]
    pub fn attribute_changed(&mut self, name: &str, value: Option<String>) {
        self.inner.attribute_changed(name, value);
    }
}
