/// Fires once after a delay measured in accumulated frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneShotTimer {
    remaining: f32,
    fired: bool,
}

impl OneShotTimer {
    /// Start a timer that fires after `delay` seconds.
    pub fn new(delay: f32) -> Self {
        Self {
            remaining: delay,
            fired: false,
        }
    }

    /// Advance by `delta` seconds. Returns true on the tick the timer fires.
    pub fn tick(&mut self, delta: f32) -> bool {
        if self.fired {
            return false;
        }
        self.remaining -= delta;
        if self.remaining <= 0.0 {
            self.fired = true;
            return true;
        }
        false
    }

    /// Seconds left before firing (zero or less once fired).
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Returns true once the timer has fired.
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_exactly_once() {
        let mut timer = OneShotTimer::new(1.0);
        assert!(!timer.tick(0.5));
        assert!(timer.tick(0.5));
        assert!(timer.has_fired());
        assert!(!timer.tick(0.5));
    }

    #[test]
    fn overshoot_still_fires() {
        let mut timer = OneShotTimer::new(0.3);
        assert!(timer.tick(1.0));
        assert!(timer.remaining() < 0.0);
    }

    #[test]
    fn zero_delay_fires_on_first_tick() {
        let mut timer = OneShotTimer::new(0.0);
        assert!(timer.tick(0.0));
    }
}
