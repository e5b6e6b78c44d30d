//! Core display logic - assets, fonts and layers
//!
//! This crate holds everything needed to turn assets into composited dot
//! frames. It has **no dependency** on terminals, timers or the game that
//! owns the layers, making it:
//!
//! - **Deterministic**: time is passed in as milliseconds, never read
//! - **Testable**: every layer transition is reproducible tick by tick
//! - **Strict**: asset files are validated in full before use
//!
//! # Module Structure
//!
//! - [`frame`]: the dot buffer and its clipped, op-aware blit
//! - [`animation`]: frame sequences and the `.dmd` file format
//! - [`font`]: proportional bitmap fonts stored as two-frame animations
//! - [`layer`]: the five layer kinds and the compositing contract
//! - [`error`]: the shared error type
//!
//! # Example
//!
//! ```
//! use tui_dmd_core::{AnimatedLayer, Frame, Layer};
//!
//! let on = Frame::from_data(2, 1, vec![3, 3]).unwrap();
//! let off = Frame::new(2, 1);
//! let mut blink = Layer::animated(
//!     AnimatedLayer::new(vec![on, off]).with_repeat(true).with_frame_time(2),
//! );
//!
//! let mut out = Frame::new(4, 1);
//! blink.composite_next(&mut out, 0);
//! assert_eq!(out.data(), &[3, 3, 0, 0]);
//! ```

pub mod animation;
pub mod error;
pub mod font;
pub mod frame;
pub mod layer;

pub use tui_dmd_types as types;

// Re-export commonly used types for convenience
pub use animation::Animation;
pub use error::{DmdError, Result};
pub use font::Font;
pub use frame::Frame;
pub use layer::{
    AnimatedLayer, FrameLayer, GroupedLayer, Layer, LayerKind, ScriptEntry, ScriptedLayer,
    TextLayer,
};
