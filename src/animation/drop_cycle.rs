//! Cyclic ease-out drop
//!
//! The ball height is a pure function of elapsed time. Nothing is stored
//! between frames, so any timestamp can be evaluated directly.

/// Which half of the cycle a timestamp falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPhase {
    Falling,
    Paused,
}

/// Parameters of the repeating drop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropCycle {
    /// Seconds spent falling
    pub drop_duration: f32,
    /// Seconds spent holding at the top before the next drop
    pub pause_duration: f32,
    /// Height at the start of the fall
    pub start_y: f32,
    /// Distance covered by a complete fall
    pub drop_distance: f32,
}

impl Default for DropCycle {
    fn default() -> Self {
        Self {
            drop_duration: 5.0,
            pause_duration: 2.0,
            start_y: 3.9,
            drop_distance: 3.4,
        }
    }
}

impl DropCycle {
    /// Length of one full cycle
    pub fn period(&self) -> f32 {
        self.drop_duration + self.pause_duration
    }

    /// Position of `elapsed` within the current cycle, in `[0, period)`
    pub fn cycle_time(&self, elapsed: f32) -> f32 {
        elapsed.rem_euclid(self.period())
    }

    pub fn phase_at(&self, elapsed: f32) -> DropPhase {
        if self.cycle_time(elapsed) < self.drop_duration {
            DropPhase::Falling
        } else {
            DropPhase::Paused
        }
    }

    /// Cubic ease-out: fast start, slowing into the end
    pub fn ease_out(normalized: f32) -> f32 {
        1.0 - (1.0 - normalized).powi(3)
    }

    /// Ball height at `elapsed` seconds
    pub fn height_at(&self, elapsed: f32) -> f32 {
        let cycle = self.cycle_time(elapsed);

        if cycle < self.drop_duration {
            let normalized = cycle / self.drop_duration;
            self.start_y - Self::ease_out(normalized) * self.drop_distance
        } else {
            self.start_y
        }
    }
}
