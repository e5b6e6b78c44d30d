//! Display configuration.

use crate::types::{DMD_HEIGHT, DMD_WIDTH};

/// Output geometry of the display controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DMD_WIDTH,
            height: DMD_HEIGHT,
        }
    }
}

impl DisplayConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Create from environment variables (`DMD_WIDTH`, `DMD_HEIGHT`).
    ///
    /// Missing, unparsable or zero values fall back to the defaults.
    pub fn from_env() -> Self {
        use std::env;

        let read = |key: &str, default: usize| {
            env::var(key)
                .ok()
                .and_then(|s| s.trim().parse::<usize>().ok())
                .filter(|&v| v > 0)
                .unwrap_or(default)
        };

        Self {
            width: read("DMD_WIDTH", DMD_WIDTH),
            height: read("DMD_HEIGHT", DMD_HEIGHT),
        }
    }

    /// Anchor of the message line: horizontally centered, two text rows up
    /// from the bottom edge.
    pub fn message_anchor(&self) -> (i32, i32) {
        (
            (self.width / 2) as i32,
            self.height as i32 - crate::types::MESSAGE_LINE_OFFSET as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_dmd() {
        let c = DisplayConfig::default();
        assert_eq!((c.width, c.height), (128, 32));
        assert_eq!(c.message_anchor(), (64, 18));
    }
}
