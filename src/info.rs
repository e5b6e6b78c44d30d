//! `dmd-info`: summarize `.dmd` files as JSON.

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::core::{Animation, Font};
use crate::types::{FIRST_GLYPH, GLYPH_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoArgs {
    pub path: PathBuf,
    pub ascii: bool,
}

pub fn parse_info_args(args: &[String]) -> Result<InfoArgs> {
    let mut path = None;
    let mut ascii = false;
    for arg in args {
        match arg.as_str() {
            "--ascii" => ascii = true,
            flag if flag.starts_with("--") => {
                return Err(anyhow!("dmd-info: unknown argument: {}", flag));
            }
            file => {
                if path.replace(PathBuf::from(file)).is_some() {
                    return Err(anyhow!("dmd-info: more than one file given"));
                }
            }
        }
    }
    let path = path.ok_or_else(|| anyhow!("usage: dmd-info <file.dmd> [--ascii]"))?;
    Ok(InfoArgs { path, ascii })
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameSummary {
    pub index: usize,
    /// Number of non-zero dots.
    pub lit: usize,
    pub fingerprint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ascii: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FontSummary {
    pub char_size: usize,
    /// Glyphs with a non-zero advance, as a string.
    pub glyphs: String,
    pub widths: Vec<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnimationSummary {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub frame_count: usize,
    pub frames: Vec<FrameSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontSummary>,
}

impl AnimationSummary {
    /// Summarize `anim`; files that also parse as a font get a font section.
    pub fn new(anim: &Animation, ascii: bool) -> Self {
        let frames = anim
            .frames()
            .iter()
            .enumerate()
            .map(|(index, frame)| FrameSummary {
                index,
                lit: frame.data().iter().filter(|&&d| d != 0).count(),
                fingerprint: format!("{:016x}", frame.fingerprint()),
                ascii: ascii.then(|| frame.ascii()),
            })
            .collect();

        let looks_like_font =
            matches!(anim.len(), 1 | 2) && anim.width().is_some() && anim.width() == anim.height();
        let font = looks_like_font
            .then(|| Font::from_animation(anim.clone()).ok())
            .flatten()
            .map(|font| FontSummary::new(&font));

        Self {
            width: anim.width(),
            height: anim.height(),
            frame_count: anim.len(),
            frames,
            font,
        }
    }
}

impl FontSummary {
    pub fn new(font: &Font) -> Self {
        let glyphs = (0..GLYPH_COUNT)
            .filter(|&i| font.char_widths()[i] != 0)
            .filter_map(|i| char::from_u32(FIRST_GLYPH + i as u32))
            .collect();
        Self {
            char_size: font.char_size(),
            glyphs,
            widths: font.char_widths().to_vec(),
        }
    }
}
