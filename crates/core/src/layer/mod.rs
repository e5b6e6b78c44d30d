//! Layer module - independently animated sources composited each tick
//!
//! Every layer kind answers one question per tick: "what frame do you show
//! now?" ([`Layer::next_frame`]). [`Layer::composite_next`] asks that question
//! and blits the answer onto a target at the layer's position.
//!
//! # Kinds
//!
//! - [`FrameLayer`]: a fixed frame, or nothing
//! - [`AnimatedLayer`]: a frame sequence advancing every `frame_time` ticks
//! - [`TextLayer`]: a string rendered through a [`Font`], optionally expiring
//! - [`ScriptedLayer`]: a looping playlist of child layers with durations
//! - [`GroupedLayer`]: a stack of children flattened into one frame
//!
//! # Time
//!
//! Layers never read a clock. Callers pass a monotonic millisecond timestamp
//! into every `next_frame` call; text expiry and script advances are checked
//! lazily against it, so they resolve on the first tick past the deadline.
//!
//! # Buffer lifetime
//!
//! Scripted and grouped layers hand out a reference to an internal scratch
//! frame that is overwritten on the next tick. The borrow checker already
//! prevents holding it across calls.

mod animated;
mod grouped;
mod scripted;
mod text;

use std::rc::Rc;
use std::time::Duration;

use crate::error::{DmdError, Result};
use crate::font::Font;
use crate::frame::Frame;
use crate::types::{CompositeOp, Justify};

pub use animated::AnimatedLayer;
pub use grouped::GroupedLayer;
pub use scripted::{ScriptEntry, ScriptedLayer};
pub use text::TextLayer;

/// Layer showing a single fixed frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameLayer {
    pub frame: Option<Frame>,
}

impl FrameLayer {
    pub fn new(frame: Option<Frame>) -> Self {
        Self { frame }
    }

    pub fn next_frame(&mut self) -> Option<&Frame> {
        self.frame.as_ref()
    }
}

/// The closed set of layer behaviours.
#[derive(Debug, Clone)]
pub enum LayerKind {
    Frame(FrameLayer),
    Animated(AnimatedLayer),
    Text(TextLayer),
    Scripted(ScriptedLayer),
    Grouped(GroupedLayer),
}

impl LayerKind {
    pub fn next_frame(&mut self, now_ms: u64) -> Option<&Frame> {
        match self {
            LayerKind::Frame(l) => l.next_frame(),
            LayerKind::Animated(l) => l.next_frame(),
            LayerKind::Text(l) => l.next_frame(now_ms),
            LayerKind::Scripted(l) => l.next_frame(now_ms),
            LayerKind::Grouped(l) => l.next_frame(now_ms),
        }
    }
}

impl From<FrameLayer> for LayerKind {
    fn from(l: FrameLayer) -> Self {
        LayerKind::Frame(l)
    }
}

impl From<AnimatedLayer> for LayerKind {
    fn from(l: AnimatedLayer) -> Self {
        LayerKind::Animated(l)
    }
}

impl From<TextLayer> for LayerKind {
    fn from(l: TextLayer) -> Self {
        LayerKind::Text(l)
    }
}

impl From<ScriptedLayer> for LayerKind {
    fn from(l: ScriptedLayer) -> Self {
        LayerKind::Scripted(l)
    }
}

impl From<GroupedLayer> for LayerKind {
    fn from(l: GroupedLayer) -> Self {
        LayerKind::Grouped(l)
    }
}

/// A positioned, optionally opaque source of frames.
#[derive(Debug, Clone)]
pub struct Layer {
    /// When set, a successful draw hides the remaining siblings of a group.
    pub opaque: bool,
    pub target_x: i32,
    pub target_y: i32,
    /// Alignment adjustment added to the target position (text justification).
    pub target_x_offset: i32,
    pub target_y_offset: i32,
    pub enabled: bool,
    pub composite_op: CompositeOp,
    pub kind: LayerKind,
}

impl Layer {
    pub fn new(kind: impl Into<LayerKind>) -> Self {
        Self {
            opaque: false,
            target_x: 0,
            target_y: 0,
            target_x_offset: 0,
            target_y_offset: 0,
            enabled: true,
            composite_op: CompositeOp::Copy,
            kind: kind.into(),
        }
    }

    pub fn frame(frame: Option<Frame>) -> Self {
        Self::new(FrameLayer::new(frame))
    }

    pub fn animated(layer: AnimatedLayer) -> Self {
        Self::new(layer)
    }

    /// Text layer anchored at `(x, y)`; nothing is shown until
    /// [`Layer::set_text`] is called.
    pub fn text(x: i32, y: i32, font: Rc<Font>, justify: Justify) -> Self {
        Self::new(TextLayer::new(font, justify)).with_position(x, y)
    }

    pub fn scripted(width: usize, height: usize, script: Vec<ScriptEntry>) -> Self {
        Self::new(ScriptedLayer::new(width, height, script))
    }

    pub fn grouped(width: usize, height: usize, layers: Vec<Layer>) -> Self {
        Self::new(GroupedLayer::new(width, height, layers))
    }

    pub fn with_opaque(mut self, opaque: bool) -> Self {
        self.opaque = opaque;
        self
    }

    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.set_target_position(x, y);
        self
    }

    pub fn with_composite_op(mut self, op: CompositeOp) -> Self {
        self.composite_op = op;
        self
    }

    /// Set where this layer lands in the target.
    pub fn set_target_position(&mut self, x: i32, y: i32) {
        self.target_x = x;
        self.target_y = y;
    }

    /// The frame to show this tick, or `None` when there is nothing to show.
    pub fn next_frame(&mut self, now_ms: u64) -> Option<&Frame> {
        self.kind.next_frame(now_ms)
    }

    /// Fetch the next frame and, if there is one, blit it onto `target` at
    /// `(target_x + target_x_offset, target_y + target_y_offset)`.
    ///
    /// Returns what [`Layer::next_frame`] returned so callers can tell
    /// whether anything was drawn.
    pub fn composite_next(&mut self, target: &mut Frame, now_ms: u64) -> Option<&Frame> {
        let x = self.target_x.saturating_add(self.target_x_offset);
        let y = self.target_y.saturating_add(self.target_y_offset);
        let op = self.composite_op;
        let src = self.kind.next_frame(now_ms)?;
        target.blit(src, x, y, op);
        Some(src)
    }

    /// Render new text (or clear it with `None`/empty), shown for `seconds`
    /// or indefinitely.
    ///
    /// Only valid on text layers. The target offset is updated from the
    /// layer's justification whenever text is rendered.
    pub fn set_text(&mut self, text: Option<&str>, seconds: Option<Duration>) -> Result<()> {
        let LayerKind::Text(layer) = &mut self.kind else {
            return Err(DmdError::Contract("set_text called on a non-text layer".into()));
        };
        if let Some(width) = layer.set_text(text, seconds) {
            (self.target_x_offset, self.target_y_offset) = layer.justify.offset(width);
        }
        Ok(())
    }

    /// Whether the layer currently holds something to show: rendered text,
    /// a frame, or remaining animation frames. Scripted and grouped layers
    /// report `true`.
    pub fn is_visible(&self) -> bool {
        match &self.kind {
            LayerKind::Frame(l) => l.frame.is_some(),
            LayerKind::Animated(l) => !l.is_empty(),
            LayerKind::Text(l) => l.is_visible(),
            LayerKind::Scripted(_) | LayerKind::Grouped(_) => true,
        }
    }

    pub fn as_text(&self) -> Option<&TextLayer> {
        match &self.kind {
            LayerKind::Text(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_animated_mut(&mut self) -> Option<&mut AnimatedLayer> {
        match &mut self.kind {
            LayerKind::Animated(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_grouped_mut(&mut self) -> Option<&mut GroupedLayer> {
        match &mut self.kind {
            LayerKind::Grouped(l) => Some(l),
            _ => None,
        }
    }
}
