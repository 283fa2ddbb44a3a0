//! Browser window as the engine host.

use hero_orb_engine::{FrameRequest, Host, HostHooks};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, ResizeObserver, Window};

/// Schedules frames with `requestAnimationFrame` and reports window and
/// container resizes.
///
/// Closures stay alive until the host is dropped, since `uninstall` may run
/// from inside the frame closure itself.
pub struct BrowserHost {
    window: Window,
    observe_target: Option<Element>,
    frame: Option<Closure<dyn FnMut()>>,
    resize: Option<Closure<dyn FnMut()>>,
    observer: Option<ResizeObserver>,
    listening: bool,
}

impl BrowserHost {
    pub fn new(window: Window, observe_target: Option<Element>) -> Self {
        Self {
            window,
            observe_target,
            frame: None,
            resize: None,
            observer: None,
            listening: false,
        }
    }

    fn resize_observer_supported(&self) -> bool {
        js_sys::Reflect::has(&self.window, &JsValue::from_str("ResizeObserver")).unwrap_or(false)
    }
}

impl Host for BrowserHost {
    fn device_pixel_ratio(&self) -> f64 {
        self.window.device_pixel_ratio()
    }

    fn install(&mut self, hooks: HostHooks) {
        let frame_hook = hooks.frame;
        self.frame = Some(Closure::<dyn FnMut()>::new(move || frame_hook()));

        let resize_hook = hooks.resize;
        let resize = Closure::<dyn FnMut()>::new(move || resize_hook());

        match self
            .window
            .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
        {
            Ok(()) => self.listening = true,
            Err(err) => log::warn!("unable to listen for window resize: {err:?}"),
        }

        if let Some(target) = &self.observe_target {
            if self.resize_observer_supported() {
                match ResizeObserver::new(resize.as_ref().unchecked_ref()) {
                    Ok(observer) => {
                        observer.observe(target);
                        self.observer = Some(observer);
                    }
                    Err(err) => log::debug!("resize observation unavailable: {err:?}"),
                }
            }
        }

        self.resize = Some(resize);
    }

    fn request_frame(&mut self) -> Option<FrameRequest> {
        let frame = self.frame.as_ref()?;
        self.window
            .request_animation_frame(frame.as_ref().unchecked_ref())
            .map(FrameRequest)
            .ok()
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if let Err(err) = self.window.cancel_animation_frame(request.0) {
            log::debug!("cancelAnimationFrame failed: {err:?}");
        }
    }

    fn uninstall(&mut self) {
        if self.listening {
            if let Some(resize) = &self.resize {
                if let Err(err) = self
                    .window
                    .remove_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
                {
                    log::debug!("removing resize listener failed: {err:?}");
                }
            }
            self.listening = false;
        }
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}
