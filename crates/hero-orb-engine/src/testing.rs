//! Test doubles for surfaces and hosts.

use std::cell::RefCell;
use std::rc::Rc;

use hero_orb_core::Hsla;

use crate::animator::Surface;
use crate::controller::{FrameRequest, Host, HostHooks};
use crate::render::DrawContext;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Transform(f64),
    Clear(f64, f64, f64, f64),
    Fill(Hsla),
    Shadow(String, f64),
    GlobalAlpha(f64),
    Circle(f64, f64, f64),
}

#[derive(Default)]
pub struct SurfaceLog {
    pub layout: (f64, f64),
    pub backing: (u32, u32),
    pub transform_scale: Option<f64>,
    pub ops: Vec<DrawOp>,
    /// Run once, from inside the next `clear_rect`.
    pub on_clear: Option<Box<dyn FnOnce()>>,
}

impl SurfaceLog {
    pub fn circles(&self) -> Vec<(f64, f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle(x, y, r) => Some((*x, *y, *r)),
                _ => None,
            })
            .collect()
    }

    pub fn clears(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Clear(..)))
            .count()
    }
}

/// Surface that records every call into a shared log.
pub struct RecordingSurface {
    log: Rc<RefCell<SurfaceLog>>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> (Self, Rc<RefCell<SurfaceLog>>) {
        let log = Rc::new(RefCell::new(SurfaceLog {
            layout: (width, height),
            ..Default::default()
        }));
        (Self { log: log.clone() }, log)
    }
}

impl DrawContext for RecordingSurface {
    fn set_scale_transform(&mut self, scale: f64) {
        let mut log = self.log.borrow_mut();
        log.transform_scale = Some(scale);
        log.ops.push(DrawOp::Transform(scale));
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let hook = {
            let mut log = self.log.borrow_mut();
            log.ops.push(DrawOp::Clear(x, y, width, height));
            log.on_clear.take()
        };
        if let Some(hook) = hook {
            hook();
        }
    }

    fn set_fill_color(&mut self, color: &Hsla) {
        self.log.borrow_mut().ops.push(DrawOp::Fill(*color));
    }

    fn set_shadow(&mut self, color: &str, blur: f64) {
        self.log
            .borrow_mut()
            .ops
            .push(DrawOp::Shadow(color.to_string(), blur));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.log.borrow_mut().ops.push(DrawOp::GlobalAlpha(alpha));
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.log.borrow_mut().ops.push(DrawOp::Circle(x, y, radius));
    }
}

impl Surface for RecordingSurface {
    fn layout_size(&self) -> (f64, f64) {
        self.log.borrow().layout
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.log.borrow_mut().backing = (width, height);
    }
}

#[derive(Default)]
pub struct HostLog {
    pub device_ratio: f64,
    pub observer_supported: bool,
    pub hooks: Option<HostHooks>,
    pub observing: bool,
    pub listening: bool,
    pub next_id: i32,
    pub pending: Vec<FrameRequest>,
    pub requested: usize,
    pub cancelled: Vec<FrameRequest>,
    pub installs: usize,
    pub uninstalls: usize,
}

/// Host whose frames and resize events are fired by hand.
pub struct ManualHost {
    log: Rc<RefCell<HostLog>>,
}

impl ManualHost {
    pub fn new(device_ratio: f64, observer_supported: bool) -> (Self, ManualHostProbe) {
        let log = Rc::new(RefCell::new(HostLog {
            device_ratio,
            observer_supported,
            next_id: 1,
            ..Default::default()
        }));
        (Self { log: log.clone() }, ManualHostProbe { log })
    }
}

impl Host for ManualHost {
    fn device_pixel_ratio(&self) -> f64 {
        self.log.borrow().device_ratio
    }

    fn install(&mut self, hooks: HostHooks) {
        let mut log = self.log.borrow_mut();
        log.installs += 1;
        log.listening = true;
        log.observing = log.observer_supported;
        log.hooks = Some(hooks);
    }

    fn request_frame(&mut self) -> Option<FrameRequest> {
        let mut log = self.log.borrow_mut();
        let request = FrameRequest(log.next_id);
        log.next_id += 1;
        log.requested += 1;
        log.pending.push(request);
        Some(request)
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        let mut log = self.log.borrow_mut();
        log.pending.retain(|pending| *pending != request);
        log.cancelled.push(request);
    }

    fn uninstall(&mut self) {
        let mut log = self.log.borrow_mut();
        log.uninstalls += 1;
        log.listening = false;
        log.observing = false;
    }
}

/// Test-side handle onto a [`ManualHost`].
///
/// Firing keeps the hooks even after uninstall so tests can simulate a
/// callback that was already queued when the engine was destroyed.
pub struct ManualHostProbe {
    pub log: Rc<RefCell<HostLog>>,
}

impl ManualHostProbe {
    /// Run the frame hook as the browser would for the oldest pending frame.
    pub fn fire_frame(&self) {
        let hook = {
            let mut log = self.log.borrow_mut();
            if !log.pending.is_empty() {
                log.pending.remove(0);
            }
            log.hooks.as_ref().map(|hooks| hooks.frame.clone())
        };
        if let Some(hook) = hook {
            hook();
        }
    }

    pub fn fire_resize(&self) {
        let hook = self
            .log
            .borrow()
            .hooks
            .as_ref()
            .map(|hooks| hooks.resize.clone());
        if let Some(hook) = hook {
            hook();
        }
    }

    pub fn pending(&self) -> usize {
        self.log.borrow().pending.len()
    }

    pub fn requested(&self) -> usize {
        self.log.borrow().requested
    }
}
