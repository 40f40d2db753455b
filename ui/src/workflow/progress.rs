//! Cosmetic progress simulation shown while a submission is in flight.
//!
//! Samples are never read as real progress by anything else.

/// Timings and bounds for the progress sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowConfig {
    pub tick_interval_ms: u64,
    /// Largest random increment added per tick (inclusive).
    pub max_increment: u8,
    /// Value the first tick jumps to from indeterminate.
    pub first_sample: u8,
    /// Once reached, ticks stop advancing.
    pub hold_at: u8,
    /// Hard cap while the call is pending; 100 is reserved for resolution.
    pub ceiling: u8,
    /// Pause between showing 100% and revealing the result.
    pub grace_ms: u64,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 500,
            max_increment: 15,
            first_sample: 10,
            hold_at: 90,
            ceiling: 95,
            grace_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressSample {
    Indeterminate,
    Percent(u8),
}

impl ProgressSample {
    pub const COMPLETE: ProgressSample = ProgressSample::Percent(100);

    pub fn percent(self) -> Option<u8> {
        match self {
            ProgressSample::Indeterminate => None,
            ProgressSample::Percent(value) => Some(value),
        }
    }

    /// Next sample for a tick. Never decreases and never exceeds the ceiling.
    pub fn advance(self, increment: u8, config: &WorkflowConfig) -> Self {
        match self {
            ProgressSample::Indeterminate => {
                ProgressSample::Percent(config.first_sample.min(config.ceiling))
            }
            ProgressSample::Percent(current) if current >= config.hold_at => self,
            ProgressSample::Percent(current) => {
                let next = current.saturating_add(increment).min(config.ceiling);
                ProgressSample::Percent(next.max(current))
            }
        }
    }

    /// Caption under the progress bar.
    pub fn caption(self) -> String {
        match self {
            ProgressSample::Indeterminate => "This may take a few moments...".to_string(),
            ProgressSample::Percent(value) => format!("{value}% complete"),
        }
    }

    /// How many of `total` pipeline steps to show as done.
    pub fn completed_steps(self, total: usize) -> usize {
        match self {
            ProgressSample::Indeterminate => 0,
            ProgressSample::Percent(value) => {
                let value = usize::from(value.min(100));
                // step i is done while i < value / 100 * total
                (value * total).div_ceil(100).min(total)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_leaves_indeterminate() {
        let config = WorkflowConfig::default();
        assert_eq!(
            ProgressSample::Indeterminate.advance(7, &config),
            ProgressSample::Percent(10)
        );
    }

    #[test]
    fn advance_holds_and_clamps() {
        let config = WorkflowConfig::default();
        assert_eq!(
            ProgressSample::Percent(85).advance(15, &config),
            ProgressSample::Percent(95)
        );
        assert_eq!(
            ProgressSample::Percent(92).advance(15, &config),
            ProgressSample::Percent(92)
        );
        assert_eq!(
            ProgressSample::Percent(40).advance(0, &config),
            ProgressSample::Percent(40)
        );
    }

    #[test]
    fn captions() {
        assert_eq!(ProgressSample::Percent(42).caption(), "42% complete");
        assert_eq!(
            ProgressSample::Indeterminate.caption(),
            "This may take a few moments..."
        );
    }

    #[test]
    fn completed_steps_track_fraction() {
        assert_eq!(ProgressSample::Indeterminate.completed_steps(7), 0);
        assert_eq!(ProgressSample::Percent(0).completed_steps(7), 0);
        assert_eq!(ProgressSample::Percent(10).completed_steps(7), 1);
        assert_eq!(ProgressSample::Percent(50).completed_steps(7), 4);
        assert_eq!(ProgressSample::COMPLETE.completed_steps(7), 7);
    }
}
