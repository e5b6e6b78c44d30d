//! Animation module - ordered frames and the `.dmd` file format
//!
//! File layout (all header fields little-endian `u32`):
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 4 | magic (`DMD_MAGIC` on save, ignored on load) |
//! | 4 | 4 | frame count |
//! | 8 | 4 | width |
//! | 12 | 4 | height |
//! | 16 | w*h*n | frame dots, row-major, one byte per dot |
//!
//! Loading validates the total length against the header before any frame
//! is built, so a truncated or padded file never yields a partial animation.

use std::path::Path;

use crate::error::{DmdError, Result};
use crate::frame::Frame;
use crate::types::{DMD_HEADER_LEN, DMD_MAGIC};

/// A set of same-sized frames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Animation {
    width: Option<usize>,
    height: Option<usize>,
    frames: Vec<Frame>,
}

impl Animation {
    /// Empty animation with no size; the size is fixed by the first frame
    /// pushed or by [`Animation::set_size`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            frames: Vec::new(),
        }
    }

    pub fn width(&self) -> Option<usize> {
        self.width
    }

    pub fn height(&self) -> Option<usize> {
        self.height
    }

    /// Set the frame size. Fails if frames of another size are present.
    pub fn set_size(&mut self, width: usize, height: usize) -> Result<()> {
        if let Some(f) = self.frames.first() {
            if (f.width(), f.height()) != (width, height) {
                return Err(DmdError::Contract(format!(
                    "animation holds {}x{} frames, cannot resize to {}x{}",
                    f.width(),
                    f.height(),
                    width,
                    height
                )));
            }
        }
        self.width = Some(width);
        self.height = Some(height);
        Ok(())
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Append a frame; its size must match the animation's.
    pub fn push_frame(&mut self, frame: Frame) -> Result<()> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if (w, h) != (frame.width(), frame.height()) => {
                return Err(DmdError::Contract(format!(
                    "frame is {}x{}, animation is {}x{}",
                    frame.width(),
                    frame.height(),
                    w,
                    h
                )));
            }
            (Some(_), Some(_)) => {}
            _ => {
                self.width = Some(frame.width());
                self.height = Some(frame.height());
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    /// Parse a complete `.dmd` file image.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < DMD_HEADER_LEN {
            return Err(DmdError::Format(format!(
                "file is {} bytes, shorter than the {}-byte header",
                bytes.len(),
                DMD_HEADER_LEN
            )));
        }
        let field = |i: usize| {
            let at = 4 * i;
            u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
        };
        let frame_count = field(1) as u64;
        let width = field(2) as u64;
        let height = field(3) as u64;

        let frame_len = width
            .checked_mul(height)
            .ok_or_else(|| DmdError::Format("frame size overflows".into()))?;
        let expected = frame_len
            .checked_mul(frame_count)
            .and_then(|n| n.checked_add(DMD_HEADER_LEN as u64))
            .ok_or_else(|| DmdError::Format("animation size overflows".into()))?;
        if bytes.len() as u64 != expected {
            return Err(DmdError::Format(format!(
                "file size {} inconsistent with header ({} frames of {}x{} need {}); \
                 old or incompatible file format?",
                bytes.len(),
                frame_count,
                width,
                height,
                expected
            )));
        }

        let (width, height, frame_len) = (width as usize, height as usize, frame_len as usize);
        let frames = if frame_len == 0 {
            // Zero-size frames carry no bytes; only the header says how many.
            let count = usize::try_from(frame_count)
                .map_err(|_| DmdError::Format(format!("{frame_count} frames do not fit in memory")))?;
            let mut frames = Vec::new();
            frames.try_reserve_exact(count).map_err(|_| {
                DmdError::Format(format!("{frame_count} frames of empty size {width}x{height}"))
            })?;
            frames.extend((0..count).map(|_| Frame::new(width, height)));
            frames
        } else {
            bytes[DMD_HEADER_LEN..]
                .chunks_exact(frame_len)
                .map(|chunk| Frame::from_data(width, height, chunk.to_vec()))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(Self {
            width: Some(width),
            height: Some(height),
            frames,
        })
    }

    /// Serialize to a `.dmd` file image.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let (Some(width), Some(height)) = (self.width, self.height) else {
            return Err(DmdError::Format(
                "width and height must be set on an animation before it can be saved".into(),
            ));
        };
        let as_u32 = |v: usize, what: &str| {
            u32::try_from(v).map_err(|_| DmdError::Format(format!("{what} {v} does not fit in u32")))
        };

        let mut header = [0u8; DMD_HEADER_LEN];
        let fields = [
            DMD_MAGIC,
            as_u32(self.frames.len(), "frame count")?,
            as_u32(width, "width")?,
            as_u32(height, "height")?,
        ];
        for (slot, value) in header.chunks_exact_mut(4).zip(fields) {
            slot.copy_from_slice(&value.to_le_bytes());
        }

        let mut out = Vec::with_capacity(DMD_HEADER_LEN + width * height * self.frames.len());
        out.extend_from_slice(&header);
        for frame in &self.frames {
            out.extend_from_slice(frame.data());
        }
        Ok(out)
    }

    /// Load a `.dmd` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let anim = Self::from_bytes(&bytes)?;
        log::debug!(
            "loaded {}: {} frames of {}x{}",
            path.display(),
            anim.len(),
            anim.width.unwrap_or(0),
            anim.height.unwrap_or(0)
        );
        Ok(anim)
    }

    /// Save as a `.dmd` file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
