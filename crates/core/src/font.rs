//! Font module - proportional bitmap fonts stored as animations
//!
//! A font file is a `.dmd` animation with a square frame 0 holding the glyph
//! atlas: 96 glyphs (ASCII 32..128) in a 10x10 grid of `char_size` cells,
//! starting with space at the top-left. Frame 1 holds the advance widths, one
//! per glyph, encoded as the dot value at `(i % width, i / width)`.
//!
//! A file with only frame 0 is accepted (hand-drawn atlases before their
//! widths are authored); the width table is then all zeros.

use std::path::Path;

use crate::animation::Animation;
use crate::error::{DmdError, Result};
use crate::frame::Frame;
use crate::types::{CompositeOp, FIRST_GLYPH, FONT_GRID, GLYPH_COUNT};

/// A DMD bitmap font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    char_size: usize,
    bitmap: Frame,
    char_widths: [u8; GLYPH_COUNT],
}

/// Glyph index for `ch`, or `None` when it is not printable ASCII.
#[inline(always)]
fn glyph_index(ch: char) -> Option<usize> {
    let offset = (ch as u32).checked_sub(FIRST_GLYPH)? as usize;
    (offset < GLYPH_COUNT).then_some(offset)
}

impl Font {
    /// Decode a font from its animation form.
    pub fn from_animation(anim: Animation) -> Result<Self> {
        let (Some(width), Some(height)) = (anim.width(), anim.height()) else {
            return Err(DmdError::Format("font animation has no size".into()));
        };
        if width != height {
            return Err(DmdError::Format(format!(
                "font atlas must be square, got {width}x{height}"
            )));
        }
        if width < FONT_GRID {
            return Err(DmdError::Format(format!(
                "font atlas {width}x{height} is too small for a {FONT_GRID}x{FONT_GRID} glyph grid"
            )));
        }

        let mut frames = anim.into_frames();
        match frames.len() {
            1 => {
                log::warn!("font animation has 1 frame; adding a blank width table");
                frames.push(Frame::new(width, height));
            }
            2 => {}
            n => {
                return Err(DmdError::Format(format!(
                    "expected 1 or 2 font frames, got {n}"
                )))
            }
        }

        let widths_frame = frames.pop().unwrap_or_else(|| Frame::new(width, height));
        let bitmap = frames.pop().unwrap_or_else(|| Frame::new(width, height));

        let mut char_widths = [0u8; GLYPH_COUNT];
        for (i, w) in char_widths.iter_mut().enumerate() {
            *w = widths_frame
                .get_dot((i % width) as i32, (i / width) as i32)
                .unwrap_or(0);
        }

        Ok(Self {
            char_size: width / FONT_GRID,
            bitmap,
            char_widths,
        })
    }

    /// Load a font from a `.dmd` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_animation(Animation::load(path)?)
    }

    /// Encode back to a two-frame animation (atlas + width table).
    pub fn to_animation(&self) -> Result<Animation> {
        let size = self.bitmap.width();
        let mut widths = Frame::new(size, size);
        for (i, &w) in self.char_widths.iter().enumerate() {
            widths.set_dot((i % size) as i32, (i / size) as i32, w);
        }

        let mut anim = Animation::with_size(size, size);
        anim.push_frame(self.bitmap.clone())?;
        anim.push_frame(widths)?;
        Ok(anim)
    }

    /// Save the font to a `.dmd` file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.to_animation()?.save(path)
    }

    /// Glyph cell edge length in dots.
    pub fn char_size(&self) -> usize {
        self.char_size
    }

    pub fn bitmap(&self) -> &Frame {
        &self.bitmap
    }

    pub fn char_widths(&self) -> &[u8; GLYPH_COUNT] {
        &self.char_widths
    }

    /// Advance width of `ch`; 0 for characters the font does not cover.
    pub fn char_width(&self, ch: char) -> u8 {
        glyph_index(ch).map_or(0, |i| self.char_widths[i])
    }

    /// Change the advance width of a printable character.
    pub fn set_char_width(&mut self, ch: char, width: u8) -> Result<()> {
        let i = glyph_index(ch).ok_or_else(|| {
            DmdError::Contract(format!("{ch:?} is not a printable ASCII glyph"))
        })?;
        self.char_widths[i] = width;
        Ok(())
    }

    /// Draw `text` with its top-left corner at `(x, y)`.
    ///
    /// Characters outside printable ASCII are skipped. Returns the x
    /// coordinate just past the last glyph.
    pub fn draw(&self, target: &mut Frame, text: &str, x: i32, y: i32) -> i32 {
        let size = self.char_size as i32;
        let mut x = x;
        for ch in text.chars() {
            let Some(i) = glyph_index(ch) else {
                continue;
            };
            let width = self.char_widths[i] as i32;
            let char_x = size * (i % FONT_GRID) as i32;
            let char_y = size * (i / FONT_GRID) as i32;
            Frame::copy_rect(
                target,
                x,
                y,
                &self.bitmap,
                char_x,
                char_y,
                width,
                size,
                CompositeOp::Copy,
            );
            x = x.saturating_add(width);
        }
        x
    }

    /// `(width, height)` of `text` as rendered with this font.
    pub fn size(&self, text: &str) -> (usize, usize) {
        let width = text
            .chars()
            .filter_map(glyph_index)
            .map(|i| self.char_widths[i] as usize)
            .sum();
        (width, self.char_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 20x20 atlas (2x2 cells): every glyph cell filled with its column
    /// parity + 1, widths 1 for '!' and 2 for '"'.
    fn tiny_font_animation() -> Animation {
        let mut atlas = Frame::new(20, 20);
        for cell in 0..GLYPH_COUNT {
            let (cx, cy) = ((cell % FONT_GRID) * 2, (cell / FONT_GRID) * 2);
            atlas.fill_rect(cx as i32, cy as i32, 2, 2, (cell % 2) as u8 + 1);
        }
        let mut widths = Frame::new(20, 20);
        widths.set_dot(1, 0, 1);
        widths.set_dot(2, 0, 2);
        let mut anim = Animation::new();
        anim.push_frame(atlas).unwrap();
        anim.push_frame(widths).unwrap();
        anim
    }

    #[test]
    fn decodes_width_table() {
        let font = Font::from_animation(tiny_font_animation()).unwrap();
        assert_eq!(font.char_size(), 2);
        assert_eq!(font.char_widths().len(), GLYPH_COUNT);
        assert_eq!(font.char_width(' '), 0);
        assert_eq!(font.char_width('!'), 1);
        assert_eq!(font.char_width('"'), 2);
        assert_eq!(font.char_width('é'), 0);
    }

    #[test]
    fn single_frame_font_gets_blank_widths() {
        let mut anim = Animation::new();
        anim.push_frame(Frame::new(10, 10)).unwrap();
        let font = Font::from_animation(anim).unwrap();
        assert!(font.char_widths().iter().all(|&w| w == 0));
        assert_eq!(font.char_size(), 1);
    }

    #[test]
    fn rejects_bad_frame_counts_and_shapes() {
        let mut three = Animation::new();
        for _ in 0..3 {
            three.push_frame(Frame::new(10, 10)).unwrap();
        }
        assert!(Font::from_animation(three).unwrap_err().is_format());
        assert!(Font::from_animation(Animation::with_size(10, 10))
            .unwrap_err()
            .is_format());

        let mut oblong = Animation::new();
        oblong.push_frame(Frame::new(20, 10)).unwrap();
        assert!(Font::from_animation(oblong).unwrap_err().is_format());

        let mut tiny = Animation::new();
        tiny.push_frame(Frame::new(5, 5)).unwrap();
        assert!(Font::from_animation(tiny).unwrap_err().is_format());
    }

    #[test]
    fn draw_advances_by_glyph_width_and_skips_unprintables() {
        let font = Font::from_animation(tiny_font_animation()).unwrap();
        let mut target = Frame::new(8, 2);
        let end = font.draw(&mut target, "!\n\"", 1, 0);
        assert_eq!(end, 1 + 1 + 2);
        // '!' is cell 1 (odd, value 2), one dot wide.
        assert_eq!(target.get_dot(1, 0), Some(2));
        assert_eq!(target.get_dot(1, 1), Some(2));
        // '"' is cell 2 (even, value 1), two dots wide.
        assert_eq!(target.get_dot(2, 0), Some(1));
        assert_eq!(target.get_dot(3, 1), Some(1));
        assert_eq!(target.get_dot(4, 0), Some(0));
    }

    #[test]
    fn size_sums_printable_widths() {
        let font = Font::from_animation(tiny_font_animation()).unwrap();
        assert_eq!(font.size("!\"!\t"), (4, 2));
        assert_eq!(font.size(""), (0, 2));
    }

    #[test]
    fn width_table_survives_animation_round_trip() {
        let mut font = Font::from_animation(tiny_font_animation()).unwrap();
        font.set_char_width('A', 3).unwrap();
        assert!(font.set_char_width('\u{80}', 1).is_err());
        assert!(font.set_char_width('\u{7f}', 1).is_ok());
        let again = Font::from_animation(font.to_animation().unwrap()).unwrap();
        assert_eq!(again, font);
    }
}
