//! Demo scene shared by the `tui-dmd` binary, the benchmarks and the
//! integration tests.
//!
//! Everything here is procedural so the demo runs without any asset files;
//! a font or an animation can be layered in when available.

use std::rc::Rc;
use std::time::Duration;

use crate::core::{AnimatedLayer, Animation, Font, Frame, Layer, ScriptEntry, TextLayer};
use crate::engine::{DisplayConfig, LayerMode, ModeStack};
use crate::types::{CompositeOp, Justify, MAX_DOT};

pub const BASE_MODE: &str = "base";
pub const ATTRACT_MODE: &str = "attract";
pub const OVERLAY_MODE: &str = "overlay";

/// Ticks each sweep frame stays up.
const SWEEP_FRAME_TIME: u32 = 2;

/// Frame with a one-dot border at full brightness.
pub fn border_frame(width: usize, height: usize) -> Frame {
    let mut frame = Frame::new(width, height);
    let (w, h) = (width as i32, height as i32);
    frame.fill_rect(0, 0, w, 1, MAX_DOT);
    frame.fill_rect(0, h - 1, w, 1, MAX_DOT);
    frame.fill_rect(0, 0, 1, h, MAX_DOT);
    frame.fill_rect(w - 1, 0, 1, h, MAX_DOT);
    frame
}

/// A vertical bar crossing the display left to right with a fading tail.
pub fn sweep_frames(width: usize, height: usize) -> Vec<Frame> {
    let h = height as i32;
    (0..width as i32)
        .step_by(2)
        .map(|x| {
            let mut frame = Frame::new(width, height);
            for (tail, value) in (0..MAX_DOT).rev().enumerate() {
                frame.fill_rect(x - 2 * tail as i32, 0, 2, h, value + 1);
            }
            frame
        })
        .collect()
}

/// Looping animation with an optional title on top.
///
/// `anim` replaces the procedural sweep when given.
pub fn attract_layer(
    config: DisplayConfig,
    anim: Option<Animation>,
    font: Option<Rc<Font>>,
) -> Layer {
    let frames = match anim {
        Some(anim) if !anim.is_empty() => anim.into_frames(),
        _ => sweep_frames(config.width, config.height),
    };
    let animated = AnimatedLayer::new(frames)
        .with_repeat(true)
        .with_frame_time(SWEEP_FRAME_TIME);

    let mut children = vec![Layer::animated(animated)];
    if let Some(font) = font {
        let mut text = TextLayer::new(font, Justify::Center);
        let offset = text
            .set_text(Some("TUI DMD"), None)
            .map_or((0, 0), |width| text.justify.offset(width));
        let mut title = Layer::new(text).with_position((config.width / 2) as i32, 2);
        (title.target_x_offset, title.target_y_offset) = offset;
        children.push(title);
    }
    Layer::grouped(config.width, config.height, children)
}

/// Blinking box in the middle of the display; its black interior lets the
/// layers below show through.
pub fn overlay_layer(config: DisplayConfig) -> Layer {
    let (w, h) = (config.width / 2, config.height / 2);
    let (wi, hi) = (w as i32, h as i32);

    let mut outline = Frame::new(w, h);
    outline.fill_rect(0, 0, wi, hi, MAX_DOT);
    outline.fill_rect(2, 2, wi - 4, hi - 4, 0);

    let mut inner = Frame::new(w, h);
    inner.fill_rect(4, 4, wi - 8, hi - 8, 2);

    let script = vec![
        ScriptEntry::new(Some(Layer::frame(Some(outline))), Duration::from_millis(400)),
        ScriptEntry::new(Some(Layer::frame(Some(inner))), Duration::from_millis(400)),
        ScriptEntry::blank(Duration::from_millis(200)),
    ];
    Layer::scripted(w, h, script)
        .with_position((config.width / 4) as i32, (config.height / 4) as i32)
        .with_composite_op(CompositeOp::BlackSrc)
}

/// Base border plus the attract animation, attract on top.
pub fn demo_modes(
    config: DisplayConfig,
    anim: Option<Animation>,
    font: Option<Rc<Font>>,
) -> ModeStack {
    let mut modes = ModeStack::new();
    let border = Layer::frame(Some(border_frame(config.width, config.height))).with_opaque(true);
    modes.add(LayerMode::new(BASE_MODE, Some(border)));
    let attract = attract_layer(config, anim, font).with_composite_op(CompositeOp::BlackSrc);
    modes.add(LayerMode::new(ATTRACT_MODE, Some(attract)));
    modes
}

/// Add the overlay mode, or remove it if it is already active.
///
/// Returns whether the overlay is now shown.
pub fn toggle_overlay(modes: &mut ModeStack, config: DisplayConfig) -> bool {
    if modes.remove(OVERLAY_MODE).is_some() {
        return false;
    }
    modes.add(LayerMode::new(OVERLAY_MODE, Some(overlay_layer(config))));
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_bar_has_fading_tail() {
        let frames = sweep_frames(8, 1);
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].data(), &[3, 3, 0, 0, 0, 0, 0, 0]);
        assert_eq!(frames[2].data(), &[1, 1, 2, 2, 3, 3, 0, 0]);
    }

    fn dot_font() -> Rc<Font> {
        use crate::types::{FONT_GRID, GLYPH_COUNT};

        let mut atlas = Frame::new(FONT_GRID, FONT_GRID);
        atlas.fill_rect(0, 0, FONT_GRID as i32, FONT_GRID as i32, 3);
        let mut widths = Frame::new(FONT_GRID, FONT_GRID);
        for i in 0..GLYPH_COUNT {
            widths.set_dot((i % FONT_GRID) as i32, (i / FONT_GRID) as i32, 1);
        }
        let mut anim = Animation::new();
        anim.push_frame(atlas).unwrap();
        anim.push_frame(widths).unwrap();
        Rc::new(Font::from_animation(anim).unwrap())
    }

    #[test]
    fn title_is_centered_over_the_animation() {
        let font = dot_font();
        let config = DisplayConfig::new(32, 8);
        let mut attract = attract_layer(config, None, Some(font.clone()));
        let group = attract.as_grouped_mut().unwrap();
        assert_eq!(group.layers().len(), 2);

        let title = &group.layers()[1];
        assert!(title.is_visible());
        assert!(Rc::ptr_eq(title.as_text().unwrap().font(), &font));
        // "TUI DMD" is 7 dots wide with this font.
        assert_eq!((title.target_x, title.target_y), (16, 2));
        assert_eq!((title.target_x_offset, title.target_y_offset), (-4, 0));

        let frame = attract.next_frame(0).unwrap();
        assert_eq!(frame.get_dot(12, 2), Some(3));
        assert_eq!(frame.get_dot(18, 2), Some(3));
    }

    #[test]
    fn overlay_toggles() {
        let config = DisplayConfig::new(16, 8);
        let mut modes = demo_modes(config, None, None);
        assert!(toggle_overlay(&mut modes, config));
        assert_eq!(modes.names().next(), Some(OVERLAY_MODE));
        assert!(!toggle_overlay(&mut modes, config));
        assert!(!modes.contains(OVERLAY_MODE));
    }
}
