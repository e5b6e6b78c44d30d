//! Display engine - the per-tick compositor
//!
//! This crate wires layers from `tui-dmd-core` to the outside world through
//! two seams:
//!
//! - [`LayerSource`]: the mode manager, queried fresh every tick for the
//!   layers of the active modes (newest first)
//! - [`DmdSink`]: the display hardware, handed the finished frame
//!
//! [`DisplayController`] sits between them. It is single-threaded and
//! poll-driven: call [`DisplayController::update`] once per tick with a
//! monotonic millisecond timestamp.
//!
//! # Example
//!
//! ```
//! use tui_dmd_engine::{DisplayConfig, DisplayController, FrameCapture, LayerMode, ModeStack};
//! use tui_dmd_engine::core::{Frame, Layer};
//!
//! let mut modes = ModeStack::new();
//! let dot = Frame::from_data(1, 1, vec![3]).unwrap();
//! modes.add(LayerMode::new("attract", Some(Layer::frame(Some(dot)))));
//!
//! let mut dmd = DisplayController::new(
//!     modes,
//!     FrameCapture::new(),
//!     DisplayConfig::new(4, 2),
//!     None,
//!     0,
//! )
//! .unwrap();
//! dmd.update(16).unwrap();
//! assert_eq!(dmd.sink().last().unwrap().get_dot(0, 0), Some(3));
//! ```

pub mod config;
pub mod controller;
pub mod modes;
pub mod sink;

pub use tui_dmd_core as core;
pub use tui_dmd_types as types;

pub use config::DisplayConfig;
pub use controller::{DisplayController, PRIMING_UPDATES};
pub use modes::{ActiveLayers, LayerMode, LayerSource, Mode, ModeStack};
pub use sink::{DmdSink, FrameCapture};
