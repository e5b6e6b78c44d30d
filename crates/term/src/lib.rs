//! Terminal front end for the DMD engine.
//!
//! Frames are turned into a cell framebuffer by [`DmdView`] (pure, testable)
//! and flushed with diffing by [`TerminalRenderer`]. [`TerminalSink`] wires
//! both behind the engine's [`tui_dmd_engine::DmdSink`] trait.

pub mod dmd_view;
pub mod fb;
pub mod renderer;
pub mod sink;
pub mod throttle;

pub use tui_dmd_core as core;
pub use tui_dmd_types as types;

pub use dmd_view::{AnchorY, DmdView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_changes, encode_full, TerminalRenderer};
pub use sink::TerminalSink;
pub use throttle::RenderThrottle;
