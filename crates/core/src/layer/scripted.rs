//! Looping playlist of child layers.

use std::time::Duration;

use super::Layer;
use crate::frame::Frame;

/// One playlist step: a child to show (or a deliberate blank) and how long.
#[derive(Debug, Clone)]
pub struct ScriptEntry {
    pub layer: Option<Layer>,
    pub duration: Duration,
}

impl ScriptEntry {
    pub fn new(layer: Option<Layer>, duration: Duration) -> Self {
        Self { layer, duration }
    }

    /// A step that shows nothing for `duration`.
    pub fn blank(duration: Duration) -> Self {
        Self::new(None, duration)
    }
}

/// Displays a sequence of layers, each for its own duration, forever.
#[derive(Debug, Clone)]
pub struct ScriptedLayer {
    buffer: Frame,
    script: Vec<ScriptEntry>,
    index: usize,
    entry_started_ms: Option<u64>,
}

impl ScriptedLayer {
    pub fn new(width: usize, height: usize, script: Vec<ScriptEntry>) -> Self {
        Self {
            buffer: Frame::new(width, height),
            script,
            index: 0,
            entry_started_ms: None,
        }
    }

    pub fn script(&self) -> &[ScriptEntry] {
        &self.script
    }

    /// Index of the entry currently playing.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance to the next entry once the current one has outlived its
    /// duration, then render the current child into the scratch buffer.
    ///
    /// At most one entry is skipped per call. A blank entry yields `None`,
    /// as does an empty script.
    pub fn next_frame(&mut self, now_ms: u64) -> Option<&Frame> {
        if self.script.is_empty() {
            return None;
        }
        let started = *self.entry_started_ms.get_or_insert(now_ms);
        let elapsed = Duration::from_millis(now_ms.saturating_sub(started));
        if elapsed > self.script[self.index].duration {
            self.index = (self.index + 1) % self.script.len();
            self.entry_started_ms = Some(now_ms);
        }

        let layer = self.script[self.index].layer.as_mut()?;
        self.buffer.clear();
        layer.composite_next(&mut self.buffer, now_ms);
        Some(&self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_layer(value: u8) -> Layer {
        Layer::frame(Some(Frame::from_data(2, 1, vec![value; 2]).unwrap()))
    }

    fn shown(layer: &mut ScriptedLayer, now_ms: u64) -> Option<u8> {
        layer.next_frame(now_ms).map(|f| f.data()[0])
    }

    #[test]
    fn cycles_entries_by_duration() {
        let mut layer = ScriptedLayer::new(
            2,
            1,
            vec![
                ScriptEntry::new(Some(solid_layer(1)), Duration::from_millis(100)),
                ScriptEntry::blank(Duration::from_millis(50)),
                ScriptEntry::new(Some(solid_layer(3)), Duration::from_millis(100)),
            ],
        );
        assert_eq!(layer.script().len(), 3);
        assert!(layer.script()[1].layer.is_none());
        assert_eq!(shown(&mut layer, 1_000), Some(1));
        assert_eq!(shown(&mut layer, 1_100), Some(1));
        assert_eq!(shown(&mut layer, 1_101), None);
        assert_eq!(layer.index(), 1);
        assert_eq!(shown(&mut layer, 1_152), Some(3));
        assert_eq!(shown(&mut layer, 1_253), Some(1));
        assert_eq!(layer.index(), 0);
    }

    #[test]
    fn advances_at_most_one_entry_per_call() {
        let mut layer = ScriptedLayer::new(
            2,
            1,
            vec![
                ScriptEntry::new(Some(solid_layer(1)), Duration::from_millis(10)),
                ScriptEntry::new(Some(solid_layer(2)), Duration::from_millis(10)),
                ScriptEntry::new(Some(solid_layer(3)), Duration::from_millis(10)),
            ],
        );
        shown(&mut layer, 0);
        assert_eq!(shown(&mut layer, 10_000), Some(2));
        assert_eq!(shown(&mut layer, 10_005), Some(2));
    }

    #[test]
    fn scratch_buffer_is_cleared_between_children() {
        let partial = Layer::frame(Some(Frame::from_data(1, 1, vec![2]).unwrap()));
        let mut layer = ScriptedLayer::new(
            2,
            1,
            vec![
                ScriptEntry::new(Some(solid_layer(3)), Duration::ZERO),
                ScriptEntry::new(Some(partial), Duration::ZERO),
            ],
        );
        assert_eq!(layer.next_frame(0).unwrap().data(), &[3, 3]);
        assert_eq!(layer.next_frame(1).unwrap().data(), &[2, 0]);
    }

    #[test]
    fn empty_script_shows_nothing() {
        let mut layer = ScriptedLayer::new(2, 1, Vec::new());
        assert!(layer.next_frame(0).is_none());
    }
}
