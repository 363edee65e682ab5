/// Tracks frame time: a monotonic frame counter and accumulated seconds.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    frame: u64,
    elapsed: f32,
    last_delta: f32,
}

impl FrameClock {
    /// Create a clock at frame 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame lasting `delta` seconds. Returns the new frame number.
    ///
    /// Negative deltas are treated as zero.
    pub fn advance(&mut self, delta: f32) -> u64 {
        let delta = delta.max(0.0);
        self.frame += 1;
        self.elapsed += delta;
        self.last_delta = delta;
        self.frame
    }

    /// Return the current frame number.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Total elapsed seconds since the clock started.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Length of the most recent frame in seconds.
    pub fn last_delta(&self) -> f32 {
        self.last_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_initial_state() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame(), 0);
        assert_eq!(clock.elapsed(), 0.0);
    }

    #[test]
    fn clock_advance_accumulates() {
        let mut clock = FrameClock::new();
        clock.advance(0.25);
        clock.advance(0.25);
        assert_eq!(clock.advance(0.5), 3);
        assert_eq!(clock.elapsed(), 1.0);
        assert_eq!(clock.last_delta(), 0.5);
    }

    #[test]
    fn negative_delta_clamped() {
        let mut clock = FrameClock::new();
        clock.advance(-1.0);
        assert_eq!(clock.frame(), 1);
        assert_eq!(clock.elapsed(), 0.0);
    }
}
