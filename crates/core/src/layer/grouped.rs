//! Stack of child layers flattened into one frame.

use super::Layer;
use crate::frame::Frame;

/// Composites its children bottom (first) to top (last) into a scratch frame.
#[derive(Debug, Clone)]
pub struct GroupedLayer {
    buffer: Frame,
    layers: Vec<Layer>,
}

impl GroupedLayer {
    pub fn new(width: usize, height: usize, layers: Vec<Layer>) -> Self {
        Self {
            buffer: Frame::new(width, height),
            layers,
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut Vec<Layer> {
        &mut self.layers
    }

    /// Add a child on top of the existing ones.
    pub fn push(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Clear the scratch frame and composite every enabled child in order.
    ///
    /// Iteration stops after the first opaque child that actually draws; an
    /// opaque child with nothing to show does not stop it. Returns `None`
    /// when no child drew anything.
    pub fn next_frame(&mut self, now_ms: u64) -> Option<&Frame> {
        self.buffer.clear();
        let mut drawn = 0usize;
        for layer in self.layers.iter_mut().filter(|l| l.enabled) {
            if layer.composite_next(&mut self.buffer, now_ms).is_some() {
                drawn += 1;
                if layer.opaque {
                    break;
                }
            }
        }
        (drawn > 0).then_some(&self.buffer)
    }
}
