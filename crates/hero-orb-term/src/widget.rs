//! Orb widget for ratatui.

use hero_orb_core::{OrbOverrides, OrbSettings};
use hero_orb_engine::{FrameOutcome, OrbAnimator};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    widgets::Widget,
};

use crate::glyph::{dot_char, dot_color};
use crate::surface::{CellSurface, ROW_UNITS};

/// Orb animation state for a terminal area.
#[derive(Debug)]
pub struct TerminalOrb {
    /// Engine drawing into collected dots.
    animator: OrbAnimator<CellSurface>,
    /// Last rendered area; a change triggers a resize.
    last_area: Rect,
}

impl TerminalOrb {
    /// Create a new orb seeded from the system clock.
    pub fn new(settings: OrbSettings) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::with_seed(settings, seed)
    }

    /// Defaults with caller overrides applied.
    pub fn from_overrides(overrides: &OrbOverrides) -> Self {
        Self::new(OrbSettings::from_overrides(overrides))
    }

    /// Create an orb with a fixed particle layout.
    pub fn with_seed(settings: OrbSettings, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self {
            animator: OrbAnimator::new(CellSurface::default(), settings, &mut rng),
            last_area: Rect::default(),
        }
    }

    pub fn animator(&self) -> &OrbAnimator<CellSurface> {
        &self.animator
    }

    /// Advance one frame and paint it into `buf` within `area`.
    pub fn render_frame(&mut self, area: Rect, buf: &mut Buffer) -> FrameOutcome {
        if area != self.last_area {
            self.animator
                .surface_mut()
                .set_cells(area.width, area.height);
            self.animator.resize(1.0);
            self.last_area = area;
        }

        let outcome = self.animator.tick();
        if outcome == FrameOutcome::Skipped {
            return outcome;
        }

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
                    cell.set_char(' ').set_style(Style::reset());
                }
            }
        }

        for dot in self.animator.surface().dots() {
            if dot.x < 0.0 || dot.y < 0.0 {
                continue;
            }
            let column = dot.x as u16;
            let row = (dot.y / ROW_UNITS) as u16;
            if column >= area.width || row >= area.height {
                continue;
            }
            let position = Position::new(area.x + column, area.y + row);
            if let Some(cell) = buf.cell_mut(position) {
                cell.set_char(dot_char(dot.radius)).set_fg(dot_color(dot));
            }
        }

        outcome
    }
}

impl Widget for &mut TerminalOrb {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_frame(area, buf);
    }
}
