//! Step pacing.
//!
//! The driver's loop runs at the frame rate, but steps should happen at their own rate. A
//! [`StepPacer`] accumulates frame time and hands out whole steps as they become due.
//!
//! # Example
//! ```
//! use sortviz::driver::pacer::StepPacer;
//!
//! let mut pacer = StepPacer::new(20.0);
//! pacer.fuel(0.1); // from the frame loop
//! let mut steps = 0;
//! while pacer.has_gas() {
//!     pacer.consume();
//!     steps += 1;
//! }
//! assert_eq!(steps, 2);
//! ```

/// Accumulates elapsed time and releases steps at a fixed rate.
#[derive(Clone, Debug)]
pub struct StepPacer {
    accumulator: f64,
    step_dt: f64,
}

impl StepPacer {
    /// A pacer releasing `steps_per_second` steps per second of fuel.
    pub fn new(steps_per_second: f64) -> Self {
        Self {
            accumulator: 0.0,
            step_dt: 1.0 / steps_per_second,
        }
    }

    pub fn rate(&self) -> f64 {
        1.0 / self.step_dt
    }

    /// Changes the rate. Time already accumulated is kept.
    pub fn set_rate(&mut self, steps_per_second: f64) {
        self.step_dt = 1.0 / steps_per_second;
    }

    /// Adds elapsed seconds.
    pub fn fuel(&mut self, dt: f64) {
        self.accumulator += dt;
    }

    /// Whether a step is due.
    pub fn has_gas(&self) -> bool {
        self.accumulator >= self.step_dt
    }

    /// Takes one step's worth of time.
    pub fn consume(&mut self) {
        self.accumulator -= self.step_dt;
    }

    /// Drops accumulated time, e.g. when resuming from a pause.
    pub fn drain(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::iter::repeat_n;

    #[test]
    fn releases_steps_at_its_rate() {
        let mut pacer = StepPacer::new(60.0);

        // 120 fps of frames, then a 1s stall
        let mut frames = vec![1.0 / 120.0; 120];
        frames.push(1.0);
        let mut steps_at = vec![];
        for (i, dt) in frames.iter().enumerate() {
            pacer.fuel(*dt);
            while pacer.has_gas() {
                pacer.consume();
                steps_at.push(i);
            }
        }

        // a step every second frame
        let mut expected = (0..60).map(|x| x * 2 + 1).collect::<Vec<_>>();
        // and the stall catches up (59, not 60, due to rounding)
        expected.extend(repeat_n(120, 59));
        assert_eq!(steps_at, expected);
        assert!(!pacer.has_gas());
    }

    #[test]
    fn rate_changes_keep_fuel() {
        let mut pacer = StepPacer::new(2.0);
        pacer.fuel(0.25);
        assert!(!pacer.has_gas());
        pacer.set_rate(8.0);
        // 0.25s at 8 steps/s
        pacer.consume();
        assert!(pacer.has_gas());
        pacer.consume();
        assert!(!pacer.has_gas());
        assert_eq!(pacer.rate(), 8.0);
        pacer.fuel(1.0);
        pacer.drain();
        assert!(!pacer.has_gas());
    }
}
