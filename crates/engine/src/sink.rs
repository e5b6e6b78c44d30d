//! Hardware seam: where finished frames go.

use anyhow::Result;

use crate::core::Frame;

/// The "draw this buffer on the physical display" primitive.
///
/// Called once per tick with the fully composited frame. The frame is only
/// valid for the duration of the call.
pub trait DmdSink {
    fn draw(&mut self, frame: &Frame) -> Result<()>;
}

impl<S: DmdSink + ?Sized> DmdSink for &mut S {
    fn draw(&mut self, frame: &Frame) -> Result<()> {
        (**self).draw(frame)
    }
}

impl<S: DmdSink + ?Sized> DmdSink for Box<S> {
    fn draw(&mut self, frame: &Frame) -> Result<()> {
        (**self).draw(frame)
    }
}

/// Headless sink that keeps a copy of the last frame drawn.
///
/// The copy reuses its allocation, so steady-state draws do not allocate.
#[derive(Debug, Clone, Default)]
pub struct FrameCapture {
    last: Option<Frame>,
    draws: u64,
}

impl FrameCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Frame> {
        self.last.as_ref()
    }

    /// Number of frames drawn so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl DmdSink for FrameCapture {
    fn draw(&mut self, frame: &Frame) -> Result<()> {
        match self.last.as_mut() {
            Some(last) => last.copy_from(frame),
            None => self.last = Some(frame.clone()),
        }
        self.draws += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_keeps_latest_frame() {
        let mut sink = FrameCapture::new();
        assert!(sink.last().is_none());
        sink.draw(&Frame::from_data(1, 1, vec![1]).unwrap()).unwrap();
        sink.draw(&Frame::from_data(1, 1, vec![2]).unwrap()).unwrap();
        assert_eq!(sink.last().unwrap().data(), &[2]);
        assert_eq!(sink.draws(), 2);
    }
}
