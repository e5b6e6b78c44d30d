/// Skips terminal redraws while the DMD shows the same picture.
///
/// A changed frame fingerprint always redraws. An unchanged frame is
/// redrawn at most once per `refresh_ms` so a damaged terminal heals.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    refresh_ms: u64,
    last: Option<Shown>,
}

#[derive(Debug, Clone, Copy)]
struct Shown {
    at_ms: u64,
    fingerprint: u64,
}

impl RenderThrottle {
    pub fn new(refresh_ms: u64) -> Self {
        Self {
            refresh_ms,
            last: None,
        }
    }

    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let render = match self.last {
            None => true,
            Some(shown) if shown.fingerprint != fingerprint => true,
            Some(shown) => now_ms.saturating_sub(shown.at_ms) >= self.refresh_ms,
        };
        if render {
            self.last = Some(Shown {
                at_ms: now_ms,
                fingerprint,
            });
        }
        render
    }

    /// Forget what was shown; the next call renders.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
