//! DmdView: maps a dot `Frame` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Frame;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::MAX_DOT;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Glyph used for a lit dot.
const LIT: char = '█';
/// Glyph used for an unlit dot (a faint grid, like a real panel).
const UNLIT: char = '·';

const PANEL_BG: Rgb = Rgb::new(12, 6, 0);

/// Plasma-orange ramp indexed by dot intensity.
const PALETTE: [Rgb; MAX_DOT as usize + 1] = [
    Rgb::new(45, 22, 0),
    Rgb::new(110, 50, 0),
    Rgb::new(185, 90, 10),
    Rgb::new(255, 140, 20),
];

/// Renders a DMD frame as a bordered panel of colored blocks.
pub struct DmdView {
    /// Terminal columns per dot.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for DmdView {
    fn default() -> Self {
        // 2x1 keeps dots roughly square in typical terminal fonts.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl DmdView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Terminal size needed to show a `width` x `height` frame with border.
    pub fn panel_size(&self, width: usize, height: usize) -> (u16, u16) {
        let clamp = |v: usize| u16::try_from(v).unwrap_or(u16::MAX);
        let w = clamp(width).saturating_mul(self.cell_w).saturating_add(2);
        let h = clamp(height).saturating_add(2);
        (w, h)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Panels larger than the viewport are clipped at the right/bottom.
    pub fn render_into(&self, frame: &Frame, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (panel_w, panel_h) = self.panel_size(frame.width(), frame.height());
        let start_x = viewport.width.saturating_sub(panel_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(panel_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(150, 150, 150), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, panel_w, panel_h, border);

        for y in 0..frame.height() {
            for x in 0..frame.width() {
                let dot = frame.get_dot(x as i32, y as i32).unwrap_or(0);
                let shade = PALETTE[dot.min(MAX_DOT) as usize];
                let ch = if dot == 0 { UNLIT } else { LIT };
                let style = CellStyle::new(shade, PANEL_BG);
                let cx = start_x
                    .saturating_add(1)
                    .saturating_add((x as u16).saturating_mul(self.cell_w));
                let cy = start_y.saturating_add(1).saturating_add(y as u16);
                for dx in 0..self.cell_w {
                    let glyph = if dx == 0 || dot != 0 { ch } else { ' ' };
                    fb.set(cx.saturating_add(dx), cy, style.cell(glyph));
                }
            }
        }
    }

    /// Render into a freshly allocated framebuffer.
    pub fn render(&self, frame: &Frame, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let (right, bottom) = (x + w - 1, y + h - 1);
        fb.set(x, y, style.cell('┌'));
        fb.set(right, y, style.cell('┐'));
        fb.set(x, bottom, style.cell('└'));
        fb.set(right, bottom, style.cell('┘'));
        for cx in x + 1..right {
            fb.set(cx, y, style.cell('─'));
            fb.set(cx, bottom, style.cell('─'));
        }
        for cy in y + 1..bottom {
            fb.set(x, cy, style.cell('│'));
            fb.set(right, cy, style.cell('│'));
        }
    }
}
