//! TerminalSink: a [`DmdSink`] that shows frames in the terminal.

use std::time::Instant;

use anyhow::Result;

use crossterm::terminal;

use crate::core::Frame;
use crate::dmd_view::{DmdView, Viewport};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::renderer::TerminalRenderer;
use crate::throttle::RenderThrottle;
use tui_dmd_engine::DmdSink;

/// Unchanged frames are still repainted this often.
const REFRESH_MS: u64 = 250;

pub struct TerminalSink {
    view: DmdView,
    renderer: TerminalRenderer,
    throttle: RenderThrottle,
    fb: FrameBuffer,
    viewport: Viewport,
    status: String,
    started: Instant,
}

impl TerminalSink {
    pub fn new(view: DmdView) -> Self {
        Self {
            view,
            renderer: TerminalRenderer::new(),
            throttle: RenderThrottle::new(REFRESH_MS),
            fb: FrameBuffer::new(0, 0),
            viewport: Viewport::new(0, 0),
            status: String::new(),
            started: Instant::now(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    /// One line of text shown on the bottom row of the terminal.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.throttle.reset();
    }

    /// Drop all cached terminal state (e.g. on a resize event).
    pub fn invalidate(&mut self) {
        self.renderer.invalidate();
        self.throttle.reset();
    }
}

impl DmdSink for TerminalSink {
    fn draw(&mut self, frame: &Frame) -> Result<()> {
        let (w, h) = terminal::size()?;
        let viewport = Viewport::new(w, h);
        if viewport != self.viewport {
            self.viewport = viewport;
            self.invalidate();
        }

        let now_ms = self.started.elapsed().as_millis() as u64;
        if !self.throttle.should_render(now_ms, frame.fingerprint()) {
            return Ok(());
        }

        self.view.render_into(frame, viewport, &mut self.fb);
        if h > 0 {
            let style = CellStyle::new(Rgb::new(160, 160, 160), Rgb::new(0, 0, 0));
            self.fb.put_str(0, h - 1, &self.status, style);
        }
        self.renderer.draw(&self.fb)
    }
}
