//! `<canvas>` 2D context as an engine surface.

use std::f64::consts::TAU;

use hero_orb_core::{Hsla, OrbError, Result};
use hero_orb_engine::{DrawContext, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

/// A canvas, its 2D context and the element whose box sizes it.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Element measured on resize; the canvas unless a target was given.
    measure: Element,
    resize_target: Option<Element>,
}

impl CanvasSurface {
    /// Validate `canvas` and acquire its 2D context.
    pub fn acquire(canvas: &JsValue, resize_target: Option<Element>) -> Result<Self> {
        let canvas = canvas
            .dyn_ref::<HtmlCanvasElement>()
            .ok_or(OrbError::MissingCanvas)?
            .clone();

        let ctx = canvas
            .get_context("2d")
            .map_err(|err| OrbError::ContextUnavailable(format!("{err:?}")))?
            .ok_or_else(|| OrbError::ContextUnavailable("no 2d context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| OrbError::ContextUnavailable("unexpected context type".to_string()))?;

        let measure = resize_target
            .clone()
            .unwrap_or_else(|| canvas.clone().unchecked_into());

        Ok(Self {
            canvas,
            ctx,
            measure,
            resize_target,
        })
    }

    /// Element to watch for container-driven size changes: the resize target
    /// when given, else the canvas's parent, else the canvas.
    pub fn observe_target(&self) -> Element {
        self.resize_target
            .clone()
            .or_else(|| self.canvas.parent_element())
            .unwrap_or_else(|| self.canvas.clone().unchecked_into())
    }
}

impl DrawContext for CanvasSurface {
    fn set_scale_transform(&mut self, scale: f64) {
        if let Err(err) = self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0) {
            log::debug!("orb canvas rejected transform: {err:?}");
        }
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.clear_rect(x, y, width, height);
    }

    fn set_fill_color(&mut self, color: &Hsla) {
        self.ctx.set_fill_style_str(&color.to_string());
    }

    fn set_shadow(&mut self, color: &str, blur: f64) {
        self.ctx.set_shadow_color(color);
        self.ctx.set_shadow_blur(blur);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.ctx.begin_path();
        // Negative radii only come from invalid settings; skip the particle.
        if self.ctx.arc(x, y, radius, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
    }
}

impl Surface for CanvasSurface {
    fn layout_size(&self) -> (f64, f64) {
        let rect = self.measure.get_bounding_client_rect();
        (rect.width(), rect.height())
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}
