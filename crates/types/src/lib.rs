//! Core types module - shared constants and small enums
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used by the asset loaders, the layer engine and the terminal backend alike.
//!
//! # Display Geometry
//!
//! The classic dot-matrix display is a 128x32 grid of dots. Each dot holds a
//! 2-bit intensity:
//!
//! | Value | Meaning |
//! |-------|---------|
//! | 0 | off |
//! | 1 | dim |
//! | 2 | medium |
//! | 3 | brightest |
//!
//! # Asset Format Constants
//!
//! `.dmd` files start with a fixed 16-byte header (`DMD_HEADER_LEN`) made of
//! four little-endian `u32` values: magic, frame count, width, height.
//! The magic written on save is `DMD_MAGIC`; it is ignored on load.
//!
//! # Fonts
//!
//! Fonts cover the 96 printable ASCII codes starting at space (`FIRST_GLYPH`),
//! laid out row-major in a `FONT_GRID` x `FONT_GRID` grid of square cells.
//!
//! # Examples
//!
//! ```
//! use tui_dmd_types::{CompositeOp, Justify, DMD_WIDTH, DMD_HEIGHT, GLYPH_COUNT};
//!
//! assert_eq!(CompositeOp::from_str("copy"), Some(CompositeOp::Copy));
//! assert_eq!(Justify::from_str("Center"), Some(Justify::Center));
//! assert_eq!((DMD_WIDTH, DMD_HEIGHT), (128, 32));
//! assert_eq!(GLYPH_COUNT, 96);
//! ```

/// Default display width in dots
pub const DMD_WIDTH: usize = 128;

/// Default display height in dots
pub const DMD_HEIGHT: usize = 32;

/// Brightest dot intensity (dots range 0..=3)
pub const MAX_DOT: u8 = 3;

/// Magic value written at offset 0 of saved `.dmd` files
pub const DMD_MAGIC: u32 = 0x0064_6D64;

/// Size of the `.dmd` file header in bytes
pub const DMD_HEADER_LEN: usize = 16;

/// Number of glyphs in a font (printable ASCII 32..128)
pub const GLYPH_COUNT: usize = 96;

/// Character code of the first glyph (space)
pub const FIRST_GLYPH: u32 = b' ' as u32;

/// Glyph cells per atlas row/column
pub const FONT_GRID: usize = 10;

/// Vertical distance of the message line from the bottom edge (two 7-dot rows)
pub const MESSAGE_LINE_OFFSET: usize = 2 * 7;

/// Default update interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u64 = 16;

/// Upper bound on layers composited by the display controller per tick
pub const MAX_ACTIVE_LAYERS: usize = 32;

/// How a source rectangle is combined with the destination during a blit.
///
/// Only [`CompositeOp::Copy`] is used by the stock layers; the other
/// operations are available for layers that opt in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompositeOp {
    /// Overwrite destination dots.
    #[default]
    Copy,
    /// Copy only non-zero source dots (black is transparent).
    BlackSrc,
    /// Add intensities, saturating at [`MAX_DOT`].
    Add,
}

impl CompositeOp {
    /// Parse an operation tag (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_dmd_types::CompositeOp;
    ///
    /// assert_eq!(CompositeOp::from_str("COPY"), Some(CompositeOp::Copy));
    /// assert_eq!(CompositeOp::from_str("blacksrc"), Some(CompositeOp::BlackSrc));
    /// assert_eq!(CompositeOp::from_str("xor"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "copy" => Some(CompositeOp::Copy),
            "blacksrc" => Some(CompositeOp::BlackSrc),
            "add" => Some(CompositeOp::Add),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompositeOp::Copy => "copy",
            CompositeOp::BlackSrc => "blacksrc",
            CompositeOp::Add => "add",
        }
    }

    /// Combine one source dot into one destination dot.
    #[inline(always)]
    pub fn apply(&self, dst: u8, src: u8) -> u8 {
        match self {
            CompositeOp::Copy => src,
            CompositeOp::BlackSrc => {
                if src == 0 {
                    dst
                } else {
                    src
                }
            }
            CompositeOp::Add => dst.saturating_add(src).min(MAX_DOT),
        }
    }
}

/// Horizontal alignment of rendered text relative to the layer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Justify {
    #[default]
    Left,
    Right,
    Center,
}

impl Justify {
    /// Parse a justification name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Justify::Left),
            "right" => Some(Justify::Right),
            "center" | "centre" => Some(Justify::Center),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Justify::Left => "left",
            Justify::Right => "right",
            Justify::Center => "center",
        }
    }

    /// Target offset `(x, y)` for text `width` dots wide.
    ///
    /// Centering rounds toward negative infinity, so odd widths sit one dot
    /// further left.
    pub fn offset(&self, width: usize) -> (i32, i32) {
        let w = width as i32;
        match self {
            Justify::Left => (0, 0),
            Justify::Right => (-w, 0),
            Justify::Center => ((-w).div_euclid(2), 0),
        }
    }
}
