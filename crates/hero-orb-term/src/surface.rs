//! Drawing surface that collects particles for a terminal buffer.

use hero_orb_core::Hsla;
use hero_orb_engine::{DrawContext, Surface};

/// Layout units covered by one terminal row.
pub const ROW_UNITS: f64 = 2.0;

/// One filled circle as requested by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Hsla,
    pub global_alpha: f64,
}

/// Surface backed by a list of dots, repainted into cells after each frame.
///
/// Shadows and transforms have no terminal equivalent and are ignored.
#[derive(Debug, Clone)]
pub struct CellSurface {
    layout: (f64, f64),
    dots: Vec<Dot>,
    fill: Hsla,
    global_alpha: f64,
}

impl Default for CellSurface {
    fn default() -> Self {
        Self {
            layout: (0.0, 0.0),
            dots: Vec::new(),
            fill: Hsla::new(0.0, 0.0, 0.0, 1.0),
            global_alpha: 1.0,
        }
    }
}

impl CellSurface {
    /// Size the layout box to a terminal area of `columns` x `rows` cells.
    pub fn set_cells(&mut self, columns: u16, rows: u16) {
        self.layout = (f64::from(columns), f64::from(rows) * ROW_UNITS);
    }

    /// Dots drawn since the last clear, in draw order.
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }
}

impl DrawContext for CellSurface {
    fn set_scale_transform(&mut self, _scale: f64) {}

    fn clear_rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) {
        self.dots.clear();
    }

    fn set_fill_color(&mut self, color: &Hsla) {
        self.fill = *color;
    }

    fn set_shadow(&mut self, _color: &str, _blur: f64) {}

    fn set_global_alpha(&mut self, alpha: f64) {
        self.global_alpha = alpha;
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.dots.push(Dot {
            x,
            y,
            radius,
            color: self.fill,
            global_alpha: self.global_alpha,
        });
    }
}

impl Surface for CellSurface {
    fn layout_size(&self) -> (f64, f64) {
        self.layout
    }

    fn set_backing_size(&mut self, _width: u32, _height: u32) {}
}
