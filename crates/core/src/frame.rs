//! Frame module - the 2-bit dot buffer everything draws into
//!
//! A frame is a fixed-size grid of dots stored row-major in a flat `Vec<u8>`
//! (one byte per dot, `y * width + x`). Display intensities are 0..=3, but
//! any byte value may be stored: font width tables ride on frames too.
//!
//! Blits are clipped: a rectangle that hangs off either the source or the
//! destination is silently trimmed to the overlapping region, so callers can
//! position layers partly (or entirely) off-screen.

use crate::error::{DmdError, Result};
use crate::types::CompositeOp;

/// DMD frame/bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    dots: Vec<u8>,
}

impl Frame {
    /// Create a blank (all-zero) frame.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            dots: vec![0; width * height],
        }
    }

    /// Build a frame from raw row-major dot bytes.
    ///
    /// Fails with a contract error unless `data.len() == width * height`.
    pub fn from_data(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if data.len() != width * height {
            return Err(DmdError::Contract(format!(
                "frame data is {} bytes, expected {}x{} = {}",
                data.len(),
                width,
                height,
                width * height
            )));
        }
        Ok(Self {
            width,
            height,
            dots: data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw row-major dot bytes.
    pub fn data(&self) -> &[u8] {
        &self.dots
    }

    /// Replace all dots from raw bytes of exactly `width * height` length.
    pub fn set_data(&mut self, data: &[u8]) -> Result<()> {
        if data.len() != self.dots.len() {
            return Err(DmdError::Contract(format!(
                "frame data is {} bytes, expected {}",
                data.len(),
                self.dots.len()
            )));
        }
        self.dots.copy_from_slice(data);
        Ok(())
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    /// Dot at `(x, y)`, or `None` when out of bounds.
    pub fn get_dot(&self, x: i32, y: i32) -> Option<u8> {
        self.idx(x, y).map(|i| self.dots[i])
    }

    /// Set the dot at `(x, y)`; writes outside the frame are ignored.
    pub fn set_dot(&mut self, x: i32, y: i32, value: u8) {
        if let Some(i) = self.idx(x, y) {
            self.dots[i] = value;
        }
    }

    /// Reset every dot to 0.
    pub fn clear(&mut self) {
        self.dots.fill(0);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, value: u8) {
        for dy in 0..height.max(0) {
            for dx in 0..width.max(0) {
                self.set_dot(x.saturating_add(dx), y.saturating_add(dy), value);
            }
        }
    }

    /// Make this frame an exact copy of `src`, reusing the allocation when
    /// the sizes match.
    pub fn copy_from(&mut self, src: &Frame) {
        self.width = src.width;
        self.height = src.height;
        self.dots.clear();
        self.dots.extend_from_slice(&src.dots);
    }

    /// Copy a `width` x `height` rectangle from `src` at `(src_x, src_y)`
    /// into `dst` at `(dst_x, dst_y)`, combining dots with `op`.
    ///
    /// The rectangle is clipped against both buffers; nothing outside
    /// either one is read or written.
    #[allow(clippy::too_many_arguments)]
    pub fn copy_rect(
        dst: &mut Frame,
        dst_x: i32,
        dst_y: i32,
        src: &Frame,
        src_x: i32,
        src_y: i32,
        width: i32,
        height: i32,
        op: CompositeOp,
    ) {
        // Widened so clipping extreme coordinates cannot overflow.
        let (mut dst_x, mut dst_y) = (i64::from(dst_x), i64::from(dst_y));
        let (mut src_x, mut src_y) = (i64::from(src_x), i64::from(src_y));
        let (mut width, mut height) = (i64::from(width), i64::from(height));

        // Trim the left/top edges so both origins are non-negative.
        let shift_x = (-dst_x).max(-src_x).max(0);
        dst_x += shift_x;
        src_x += shift_x;
        width -= shift_x;
        let shift_y = (-dst_y).max(-src_y).max(0);
        dst_y += shift_y;
        src_y += shift_y;
        height -= shift_y;

        // Trim the right/bottom edges to whichever buffer ends first.
        width = width
            .min(dst.width as i64 - dst_x)
            .min(src.width as i64 - src_x);
        height = height
            .min(dst.height as i64 - dst_y)
            .min(src.height as i64 - src_y);
        if width <= 0 || height <= 0 {
            return;
        }

        let (w, h) = (width as usize, height as usize);
        let (dx, dy, sx, sy) = (
            dst_x as usize,
            dst_y as usize,
            src_x as usize,
            src_y as usize,
        );
        for row in 0..h {
            let s = (sy + row) * src.width + sx;
            let d = (dy + row) * dst.width + dx;
            let src_row = &src.dots[s..s + w];
            let dst_row = &mut dst.dots[d..d + w];
            match op {
                CompositeOp::Copy => dst_row.copy_from_slice(src_row),
                _ => {
                    for (out, &dot) in dst_row.iter_mut().zip(src_row) {
                        *out = op.apply(*out, dot);
                    }
                }
            }
        }
    }

    /// Blit the whole of `src` onto this frame at `(x, y)`.
    pub fn blit(&mut self, src: &Frame, x: i32, y: i32, op: CompositeOp) {
        Frame::copy_rect(
            self,
            x,
            y,
            src,
            0,
            0,
            src.width as i32,
            src.height as i32,
            op,
        );
    }

    /// Text rendering of the dots, one line per row (` `, `.`, `+`, `#` by
    /// intensity; anything brighter than 3 shows as `#`).
    pub fn ascii(&self) -> String {
        const SHADES: [char; 4] = [' ', '.', '+', '#'];
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.dots.chunks(self.width.max(1)).take(self.height) {
            for &dot in row {
                out.push(SHADES[(dot as usize).min(SHADES.len() - 1)]);
            }
            out.push('\n');
        }
        out
    }

    /// Stable 64-bit FNV-1a hash of the size and dots.
    ///
    /// `DefaultHasher` output is not guaranteed stable across Rust versions,
    /// and renderers compare this value between frames.
    pub fn fingerprint(&self) -> u64 {
        const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
        const PRIME: u64 = 0x100000001b3;

        let mut state = OFFSET_BASIS;
        let dims = [self.width as u64, self.height as u64];
        for b in dims.iter().flat_map(|d| d.to_le_bytes()).chain(self.dots.iter().copied()) {
            state ^= b as u64;
            state = state.wrapping_mul(PRIME);
        }
        state
    }
}
