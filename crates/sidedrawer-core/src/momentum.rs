//! Post-release momentum for panel scrolling.
//!
//! A discrete-time linear decay: every tick the velocity loses a fixed
//! [`RESISTANCE`] toward zero and the remainder is added to the offset. The
//! run stops once the velocity drops below the resistance or the offset
//! crosses a content edge, where it is clamped. There is no overshoot.

use crate::gesture::ScrollBounds;

/// Velocity lost per tick, in pixels per tick.
pub const RESISTANCE: f64 = 0.3;

/// Period of the decay timer in milliseconds.
pub const TICK_PERIOD_MS: u32 = 10;

/// Why a tick ended the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Still moving; schedule another tick.
    Continue,
    /// Velocity fell below the resistance. The offset was not advanced.
    Decayed,
    /// The offset crossed a bound and was clamped.
    HitBound,
}

impl StepOutcome {
    pub fn is_finished(self) -> bool {
        !matches!(self, StepOutcome::Continue)
    }
}

/// Result of one decay tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumStep {
    pub velocity: f64,
    pub offset: f64,
    pub outcome: StepOutcome,
}

/// Moves `velocity` one resistance step toward zero.
pub fn decelerate(velocity: f64) -> f64 {
    if velocity > 0.0 {
        velocity - RESISTANCE
    } else if velocity < 0.0 {
        velocity + RESISTANCE
    } else {
        velocity
    }
}

/// Advances the simulation by one tick.
pub fn step(velocity: f64, offset: f64, bounds: ScrollBounds) -> MomentumStep {
    let velocity = decelerate(velocity);
    if velocity.abs() < RESISTANCE {
        return MomentumStep {
            velocity,
            offset,
            outcome: StepOutcome::Decayed,
        };
    }

    let (offset, clamped) = bounds.clamp(offset + velocity);
    MomentumStep {
        velocity,
        offset,
        outcome: if clamped {
            StepOutcome::HitBound
        } else {
            StepOutcome::Continue
        },
    }
}

/// Iterator over the ticks of one release, ending with the finishing tick.
///
/// Useful for predicting where a fling will come to rest.
#[derive(Debug, Clone)]
pub struct MomentumRun {
    velocity: f64,
    offset: f64,
    bounds: ScrollBounds,
    finished: bool,
}

impl MomentumRun {
    pub fn new(velocity: f64, offset: f64, bounds: ScrollBounds) -> Self {
        Self {
            velocity,
            offset,
            bounds,
            finished: false,
        }
    }

    /// Offset at which the run comes to rest.
    pub fn rest_offset(self) -> f64 {
        let start = self.offset;
        self.last().map_or(start, |step| step.offset)
    }
}

impl Iterator for MomentumRun {
    type Item = MomentumStep;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let next = step(self.velocity, self.offset, self.bounds);
        self.velocity = next.velocity;
        self.offset = next.offset;
        self.finished = next.outcome.is_finished();
        Some(next)
    }
}

#[cfg(test)]
#[path = "tests/momentum_tests.rs"]
mod tests;
