//! Text rendered once through a font and shown until it expires.

use std::rc::Rc;
use std::time::Duration;

use crate::font::Font;
use crate::frame::Frame;
use crate::types::Justify;

/// Layer that displays text.
#[derive(Debug, Clone)]
pub struct TextLayer {
    font: Rc<Font>,
    pub justify: Justify,
    frame: Option<Frame>,
    expire_after: Option<Duration>,
    started_ms: Option<u64>,
}

impl TextLayer {
    pub fn new(font: Rc<Font>, justify: Justify) -> Self {
        Self {
            font,
            justify,
            frame: None,
            expire_after: None,
            started_ms: None,
        }
    }

    pub fn font(&self) -> &Rc<Font> {
        &self.font
    }

    /// Render `text` into the cached frame and restart the expiry timer.
    ///
    /// `None` or an empty string clears the frame. `seconds = None` never
    /// expires. Returns the rendered width when a frame was produced.
    pub fn set_text(&mut self, text: Option<&str>, seconds: Option<Duration>) -> Option<usize> {
        self.started_ms = None;
        self.expire_after = seconds;
        match text.filter(|t| !t.is_empty()) {
            None => {
                self.frame = None;
                None
            }
            Some(text) => {
                let (width, height) = self.font.size(text);
                let mut frame = Frame::new(width, height);
                self.font.draw(&mut frame, text, 0, 0);
                self.frame = Some(frame);
                Some(width)
            }
        }
    }

    /// The cached text frame. The expiry clock starts on the first call after
    /// [`TextLayer::set_text`]; once `now_ms` is past the deadline the frame
    /// is discarded.
    pub fn next_frame(&mut self, now_ms: u64) -> Option<&Frame> {
        let started = *self.started_ms.get_or_insert(now_ms);
        if let Some(limit) = self.expire_after {
            if Duration::from_millis(now_ms.saturating_sub(started)) > limit {
                self.frame = None;
            }
        }
        self.frame.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.frame.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Animation;
    use crate::types::{FONT_GRID, GLYPH_COUNT};

    /// 10x10 atlas with 1-dot glyphs; every glyph is lit and 1 dot wide.
    fn unit_font() -> Rc<Font> {
        let atlas = Frame::from_data(10, 10, vec![3; 100]).unwrap();
        let mut widths = Frame::new(10, 10);
        for i in 0..GLYPH_COUNT {
            widths.set_dot((i % FONT_GRID) as i32, (i / FONT_GRID) as i32, 1);
        }
        let mut anim = Animation::new();
        anim.push_frame(atlas).unwrap();
        anim.push_frame(widths).unwrap();
        Rc::new(Font::from_animation(anim).unwrap())
    }

    #[test]
    fn renders_text_into_cached_frame() {
        let mut layer = TextLayer::new(unit_font(), Justify::Left);
        assert_eq!(layer.set_text(Some("ABC"), None), Some(3));
        let frame = layer.next_frame(0).unwrap();
        assert_eq!((frame.width(), frame.height()), (3, 1));
        assert_eq!(frame.data(), &[3, 3, 3]);
    }

    #[test]
    fn empty_or_missing_text_clears() {
        let mut layer = TextLayer::new(unit_font(), Justify::Left);
        layer.set_text(Some("A"), None);
        assert!(layer.is_visible());
        assert_eq!(layer.set_text(Some(""), None), None);
        assert!(!layer.is_visible());
        layer.set_text(Some("A"), None);
        layer.set_text(None, None);
        assert!(layer.next_frame(0).is_none());
    }

    #[test]
    fn expiry_starts_on_first_frame_request() {
        let mut layer = TextLayer::new(unit_font(), Justify::Left);
        layer.set_text(Some("HI"), Some(Duration::from_secs(1)));
        // Time passing before the first request does not count.
        assert!(layer.next_frame(5_000).is_some());
        assert!(layer.next_frame(6_000).is_some());
        assert!(layer.next_frame(6_001).is_none());
        assert!(!layer.is_visible());
    }

    #[test]
    fn set_text_restarts_timer() {
        let mut layer = TextLayer::new(unit_font(), Justify::Left);
        layer.set_text(Some("A"), Some(Duration::from_millis(100)));
        layer.next_frame(0);
        layer.set_text(Some("B"), Some(Duration::from_millis(100)));
        assert!(layer.next_frame(150).is_some());
        assert!(layer.next_frame(250).is_some());
        assert!(layer.next_frame(251).is_none());
    }
}
