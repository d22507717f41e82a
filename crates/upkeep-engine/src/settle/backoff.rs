//! Bounded exponential backoff between settle reads.

use std::time::Duration;

/// Delay schedule: `initial`, grown by `factor` for `growth_steps` steps,
/// never above `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    pub initial: Duration,
    pub factor: u32,
    pub growth_steps: u32,
    pub max: Duration,
}

impl Backoff {
    pub fn new(initial: Duration, max: Duration) -> Self {
        Self {
            initial,
            max,
            ..Self::default()
        }
    }

    pub fn with_factor(mut self, factor: u32) -> Self {
        self.factor = factor;
        self
    }

    pub fn with_growth_steps(mut self, growth_steps: u32) -> Self {
        self.growth_steps = growth_steps;
        self
    }

    /// Delay after the read at zero-based position `step`.
    pub fn delay(&self, step: u32) -> Duration {
        let growth = self.factor.max(1).saturating_pow(step.min(self.growth_steps));
        self.initial.saturating_mul(growth).min(self.max)
    }
}

impl Default for Backoff {
    /// 500ms doubling four times, capped at 5s
    fn default() -> Self {
        Self {
            initial: Duration::from_millis(500),
            factor: 2,
            growth_steps: 4,
            max: Duration::from_secs(5),
        }
    }
}
