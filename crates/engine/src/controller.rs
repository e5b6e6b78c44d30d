//! DisplayController: composites the active modes' layers every tick.
//!
//! Each [`DisplayController::update`]:
//!
//! 1. clears the output frame
//! 2. collects the active layers from the [`LayerSource`] (newest first)
//! 3. composites the enabled ones oldest first, so the newest mode is on top
//! 4. composites the message layer, if configured, above everything
//! 5. hands the frame to the [`DmdSink`]
//!
//! The per-tick path performs no heap allocation.

use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;

use crate::config::DisplayConfig;
use crate::core::{DmdError, Font, Frame, Layer};
use crate::modes::{ActiveLayers, LayerSource};
use crate::sink::DmdSink;
use crate::types::Justify;

/// Number of updates run during construction to settle layer countdowns and
/// timers before the first externally observed frame.
pub const PRIMING_UPDATES: usize = 2;

pub struct DisplayController<S, D> {
    source: S,
    sink: D,
    config: DisplayConfig,
    message_layer: Option<Layer>,
    output: Frame,
}

impl<S: LayerSource, D: DmdSink> DisplayController<S, D> {
    /// Build the controller and prime it with two updates at `now_ms`.
    ///
    /// Supplying `message_font` enables [`DisplayController::set_message`].
    pub fn new(
        source: S,
        sink: D,
        config: DisplayConfig,
        message_font: Option<Rc<Font>>,
        now_ms: u64,
    ) -> Result<Self> {
        let message_layer = message_font.map(|font| {
            let (x, y) = config.message_anchor();
            Layer::text(x, y, font, Justify::Center)
        });
        let mut controller = Self {
            source,
            sink,
            config,
            message_layer,
            output: Frame::new(config.width, config.height),
        };
        log::info!(
            "display controller {}x{} (message layer: {})",
            config.width,
            config.height,
            controller.message_layer.is_some()
        );
        for _ in 0..PRIMING_UPDATES {
            controller.update(now_ms)?;
        }
        Ok(controller)
    }

    /// Show `text` on the message line for `seconds` (or until replaced).
    pub fn set_message(
        &mut self,
        text: &str,
        seconds: Option<Duration>,
    ) -> std::result::Result<(), DmdError> {
        let layer = self.message_layer.as_mut().ok_or_else(|| {
            DmdError::Config(
                "a message font must be given at construction to enable the message layer".into(),
            )
        })?;
        layer.set_text(Some(text), seconds)
    }

    /// Composite one frame and send it to the sink.
    pub fn update(&mut self, now_ms: u64) -> Result<()> {
        self.output.clear();

        let mut layers = ActiveLayers::new();
        self.source.collect_active_layers(&mut layers);
        // Newest first from the source; draw it last so it wins.
        for layer in layers.iter_mut().rev() {
            if layer.enabled {
                layer.composite_next(&mut self.output, now_ms);
            }
        }
        drop(layers);

        if let Some(message) = self.message_layer.as_mut() {
            message.composite_next(&mut self.output, now_ms);
        }

        self.sink.draw(&self.output)
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut D {
        &mut self.sink
    }

    pub fn message_layer(&self) -> Option<&Layer> {
        self.message_layer.as_ref()
    }
}
