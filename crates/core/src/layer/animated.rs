//! Frame sequence played back at a fixed number of ticks per frame.
//!
//! Frames live in a ring: `cursor` is the head, `live` counts the frames
//! still in play. Dropping the head advances the cursor; rotating it to the
//! tail swaps it into the first dead slot (a no-op while nothing has been
//! dropped) and advances the cursor.

use crate::frame::Frame;

/// Collection of frames displayed sequentially, optionally looping or holding
/// the last frame on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimatedLayer {
    /// Keep showing the last frame instead of dropping it.
    pub hold: bool,
    /// Move each finished frame to the back instead of dropping it.
    pub repeat: bool,
    frame_time: u32,
    counter: u32,
    frames: Vec<Frame>,
    cursor: usize,
    live: usize,
}

impl AnimatedLayer {
    /// Play `frames` once, one tick each, holding the last one.
    pub fn new(frames: Vec<Frame>) -> Self {
        let live = frames.len();
        Self {
            hold: true,
            repeat: false,
            frame_time: 1,
            counter: 1,
            frames,
            cursor: 0,
            live,
        }
    }

    pub fn with_hold(mut self, hold: bool) -> Self {
        self.hold = hold;
        self
    }

    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn with_frame_time(mut self, frame_time: u32) -> Self {
        self.set_frame_time(frame_time);
        self
    }

    /// Ticks each frame stays on screen; 0 freezes the current frame.
    pub fn frame_time(&self) -> u32 {
        self.frame_time
    }

    /// Change the frame time and restart the countdown.
    pub fn set_frame_time(&mut self, frame_time: u32) {
        self.frame_time = frame_time;
        self.counter = frame_time;
    }

    /// Number of frames still in play.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Frames still in play, head first.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> + '_ {
        let len = self.frames.len();
        (0..self.live).map(move |i| &self.frames[(self.cursor + i) % len])
    }

    /// Append a frame after the current tail.
    pub fn push_frame(&mut self, frame: Frame) {
        if self.live < self.frames.len() || self.cursor != 0 {
            let len = self.frames.len();
            let cursor = self.cursor;
            let mut ordered: Vec<Frame> = Vec::with_capacity(self.live + 1);
            for i in 0..self.live {
                ordered.push(self.frames[(cursor + i) % len].clone());
            }
            self.frames = ordered;
            self.cursor = 0;
        }
        self.frames.push(frame);
        self.live += 1;
    }

    /// Returns the frame to show this tick, then advances the countdown.
    ///
    /// The tick that exhausts the countdown still returns the outgoing frame;
    /// the promoted frame shows from the next tick on.
    pub fn next_frame(&mut self) -> Option<&Frame> {
        if self.live == 0 {
            return None;
        }
        let mut shown = self.cursor;
        if self.frame_time == 0 {
            return Some(&self.frames[shown]);
        }

        self.counter -= 1;
        if self.counter == 0 {
            if !self.hold || self.live > 1 {
                let len = self.frames.len();
                if self.repeat {
                    let tail = (self.cursor + self.live) % len;
                    self.frames.swap(self.cursor, tail);
                    shown = tail;
                } else {
                    self.live -= 1;
                }
                self.cursor = (self.cursor + 1) % len;
            }
            self.counter = self.frame_time;
        }
        Some(&self.frames[shown])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(values: &[u8]) -> Vec<Frame> {
        values
            .iter()
            .map(|&v| Frame::from_data(1, 1, vec![v]).unwrap())
            .collect()
    }

    fn play(layer: &mut AnimatedLayer, ticks: usize) -> Vec<Option<u8>> {
        (0..ticks)
            .map(|_| layer.next_frame().map(|f| f.data()[0]))
            .collect()
    }

    #[test]
    fn plays_once_and_drops_without_hold() {
        let mut layer = AnimatedLayer::new(frames(&[1, 2])).with_hold(false);
        assert_eq!(play(&mut layer, 4), vec![Some(1), Some(2), None, None]);
        assert!(layer.is_empty());
    }

    #[test]
    fn single_held_frame_never_drops() {
        let mut layer = AnimatedLayer::new(frames(&[5])).with_frame_time(2);
        assert_eq!(play(&mut layer, 5), vec![Some(5); 5]);
        assert_eq!(layer.len(), 1);
    }

    #[test]
    fn zero_frame_time_freezes_head() {
        let mut layer = AnimatedLayer::new(frames(&[1, 2]))
            .with_frame_time(0)
            .with_repeat(true);
        assert_eq!(play(&mut layer, 3), vec![Some(1); 3]);
    }

    #[test]
    fn empty_layer_shows_nothing() {
        let mut layer = AnimatedLayer::new(Vec::new());
        assert!(layer.next_frame().is_none());
    }

    #[test]
    fn repeat_after_drops_cycles_remaining_frames() {
        let mut layer = AnimatedLayer::new(frames(&[1, 2, 3])).with_hold(false);
        assert_eq!(play(&mut layer, 1), vec![Some(1)]);
        layer.repeat = true;
        assert_eq!(
            play(&mut layer, 5),
            vec![Some(2), Some(3), Some(2), Some(3), Some(2)]
        );
        let remaining: Vec<u8> = layer.frames().map(|f| f.data()[0]).collect();
        assert_eq!(remaining, vec![3, 2]);
    }

    #[test]
    fn push_frame_appends_after_tail() {
        let mut layer = AnimatedLayer::new(frames(&[1, 2])).with_hold(false);
        play(&mut layer, 1);
        layer.push_frame(Frame::from_data(1, 1, vec![9]).unwrap());
        let order: Vec<u8> = layer.frames().map(|f| f.data()[0]).collect();
        assert_eq!(order, vec![2, 9]);
        assert_eq!(play(&mut layer, 3), vec![Some(2), Some(9), None]);
    }
}
