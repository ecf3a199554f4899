use std::time::Instant;

/// Source of "seconds since start" for the animation
pub trait Clock {
    fn elapsed(&self) -> f32;

    /// Make the current moment time zero
    fn restart(&mut self);
}

/// Wall-clock time since construction or the last restart
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    start: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for WallClock {
    fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    fn restart(&mut self) {
        self.start = Instant::now();
    }
}

/// Clock that only moves when told to
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ManualClock {
    now: f32,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump to `seconds`; going backwards is ignored
    pub fn set(&mut self, seconds: f32) {
        self.now = self.now.max(seconds);
    }

    pub fn advance(&mut self, seconds: f32) {
        self.now += seconds.max(0.0);
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> f32 {
        self.now
    }

    fn restart(&mut self) {
        self.now = 0.0;
    }
}
