//! Mode-manager seam.
//!
//! The display controller does not own game state. Each tick it asks a
//! [`LayerSource`] for the layers of the currently active modes, most
//! recently activated first, and composites them in reverse so the newest
//! mode ends up on top.
//!
//! [`ModeStack`] is a ready-made source for games that just need an ordered
//! set of named modes.

use arrayvec::ArrayVec;

use crate::core::Layer;
use crate::types::MAX_ACTIVE_LAYERS;

/// Per-tick buffer of borrowed active layers (no allocation).
pub type ActiveLayers<'a> = ArrayVec<&'a mut Layer, MAX_ACTIVE_LAYERS>;

/// Anything that can report the currently active layers.
pub trait LayerSource {
    /// Push the layers of all active modes into `out`, in the manager's
    /// natural order (most recently activated first). Modes without a layer
    /// are skipped.
    fn collect_active_layers<'a>(&'a mut self, out: &mut ActiveLayers<'a>);
}

impl<L: LayerSource + ?Sized> LayerSource for &mut L {
    fn collect_active_layers<'a>(&'a mut self, out: &mut ActiveLayers<'a>) {
        (**self).collect_active_layers(out)
    }
}

/// A game mode as seen by the display: a name and an optional layer.
pub trait Mode {
    fn name(&self) -> &str;

    fn layer_mut(&mut self) -> Option<&mut Layer> {
        None
    }
}

/// Minimal mode that only carries a layer.
#[derive(Debug, Clone)]
pub struct LayerMode {
    pub name: String,
    pub layer: Option<Layer>,
}

impl LayerMode {
    pub fn new(name: impl Into<String>, layer: Option<Layer>) -> Self {
        Self {
            name: name.into(),
            layer,
        }
    }
}

impl Mode for LayerMode {
    fn name(&self) -> &str {
        &self.name
    }

    fn layer_mut(&mut self) -> Option<&mut Layer> {
        self.layer.as_mut()
    }
}

/// Active modes ordered most recently added first.
#[derive(Default)]
pub struct ModeStack {
    modes: Vec<Box<dyn Mode>>,
}

impl ModeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate a mode; it becomes the topmost for display purposes.
    pub fn add(&mut self, mode: impl Mode + 'static) {
        log::debug!("mode added: {}", mode.name());
        self.modes.insert(0, Box::new(mode));
    }

    /// Deactivate the mode named `name`, returning it.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Mode>> {
        let index = self.modes.iter().position(|m| m.name() == name)?;
        log::debug!("mode removed: {name}");
        Some(self.modes.remove(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modes.iter().any(|m| m.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut (dyn Mode + 'static)> {
        self.modes
            .iter_mut()
            .find(|m| m.name() == name)
            .map(|m| m.as_mut())
    }

    /// Layer of the mode named `name`, if both exist.
    pub fn layer_mut(&mut self, name: &str) -> Option<&mut Layer> {
        self.get_mut(name)?.layer_mut()
    }

    /// Mode names, most recent first.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.modes.iter().map(|m| m.name())
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

impl LayerSource for ModeStack {
    fn collect_active_layers<'a>(&'a mut self, out: &mut ActiveLayers<'a>) {
        for mode in self.modes.iter_mut() {
            let Some(layer) = mode.layer_mut() else {
                continue;
            };
            if out.try_push(layer).is_err() {
                log::warn!(
                    "more than {} active layers; the oldest modes are not drawn",
                    MAX_ACTIVE_LAYERS
                );
                break;
            }
        }
    }
}
