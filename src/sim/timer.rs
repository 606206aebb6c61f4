//! Round countdown timer
//!
//! Second-granularity countdown driven by the monotonic wall clock,
//! independent of the render-rate tick. Expiry gates input; it does not end
//! the round (see `RoundConfig::end_on_timeout` for the stricter policy).

use serde::{Deserialize, Serialize};

/// Countdown that disables input once it reaches zero
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundTimer {
    /// Seconds left on the clock, floored at zero
    pub remaining: u32,
    /// False once the countdown expires; never re-enables within a round
    pub input_enabled: bool,
    /// Wall-clock timestamp of the next whole-second decrement
    next_decrement: Option<f32>,
}

impl RoundTimer {
    pub fn new(round_seconds: u32) -> Self {
        Self {
            remaining: round_seconds,
            input_enabled: true,
            next_decrement: None,
        }
    }

    /// Consume newly elapsed whole seconds from the monotonic clock
    ///
    /// Anchors on the first call, then decrements once per elapsed second,
    /// catching up if the caller skipped several.
    pub fn tick(&mut self, now: f32) {
        let next = self.next_decrement.get_or_insert(now + 1.0);

        while now >= *next {
            *next += 1.0;
            if self.remaining > 0 {
                self.remaining -= 1;
                if self.remaining == 0 {
                    self.input_enabled = false;
                    log::info!("Countdown expired, input disabled");
                }
            }
        }
    }

    pub fn expired(&self) -> bool {
        self.remaining == 0
    }
}
