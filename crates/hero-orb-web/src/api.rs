//! `createOrbAnimator` and the handle it returns.

use hero_orb_core::{OrbOverrides, OrbSettings};
use hero_orb_engine::OrbController;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::host::BrowserHost;
use crate::surface::CanvasSurface;

pub(crate) type WebController = OrbController<CanvasSurface, BrowserHost>;

/// Handle returned by `createOrbAnimator`.
#[wasm_bindgen]
pub struct OrbHandle {
    controller: WebController,
    resize_target: Option<Element>,
}

#[wasm_bindgen]
impl OrbHandle {
    /// Stop the animation and remove listeners. Safe to call repeatedly.
    pub fn destroy(&self) {
        self.controller.destroy();
    }

    /// Effective configuration, or an empty object if the orb never started.
    #[wasm_bindgen(getter)]
    pub fn settings(&self) -> JsValue {
        match self.controller.settings() {
            Some(settings) => settings_to_js(&settings, self.resize_target.as_ref()),
            None => js_sys::Object::new().into(),
        }
    }
}

/// Start an orb on `canvas`. Never throws: an unusable canvas yields a
/// handle whose `destroy` does nothing.
#[wasm_bindgen(js_name = createOrbAnimator)]
pub fn create_orb_animator(canvas: JsValue, configuration: JsValue) -> OrbHandle {
    let resize_target = read_resize_target(&configuration);
    let overrides = read_overrides(&configuration);
    OrbHandle {
        controller: mount_orb(&canvas, &overrides, resize_target.clone()),
        resize_target,
    }
}

/// Acquire the canvas and start an engine sized by `resize_target`.
pub(crate) fn mount_orb(
    canvas: &JsValue,
    overrides: &OrbOverrides,
    resize_target: Option<Element>,
) -> WebController {
    let Some(window) = web_sys::window() else {
        log::warn!("hero orb needs a window");
        return OrbController::inert();
    };

    let surface = CanvasSurface::acquire(canvas, resize_target);
    let observe_target = surface.as_ref().ok().map(CanvasSurface::observe_target);
    let host = BrowserHost::new(window, observe_target);

    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let mut rng = SmallRng::seed_from_u64(seed);
    OrbController::create(surface, overrides, host, &mut rng)
}

fn read_resize_target(configuration: &JsValue) -> Option<Element> {
    if !configuration.is_object() {
        return None;
    }
    js_sys::Reflect::get(configuration, &JsValue::from_str("resizeTarget"))
        .ok()
        .and_then(|target| target.dyn_into::<Element>().ok())
}

fn read_overrides(configuration: &JsValue) -> OrbOverrides {
    if configuration.is_undefined() || configuration.is_null() {
        return OrbOverrides::default();
    }

    let json = match js_sys::JSON::stringify(configuration) {
        Ok(json) => String::from(json),
        Err(err) => {
            log::warn!("hero orb configuration is not serialisable: {err:?}");
            return OrbOverrides::default();
        }
    };

    OrbOverrides::from_json_str(&json).unwrap_or_else(|err| {
        log::warn!("ignoring hero orb configuration: {err}");
        OrbOverrides::default()
    })
}

fn settings_to_js(settings: &OrbSettings, resize_target: Option<&Element>) -> JsValue {
    let parsed = settings
        .to_json()
        .ok()
        .and_then(|json| js_sys::JSON::parse(&json).ok());
    let Some(object) = parsed else {
        return js_sys::Object::new().into();
    };

    let target = resize_target.map_or(JsValue::NULL, |target| target.clone().into());
    if js_sys::Reflect::set(&object, &JsValue::from_str("resizeTarget"), &target).is_err() {
        log::debug!("unable to expose resizeTarget on settings");
    }
    object
}
