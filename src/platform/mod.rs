//! Platform abstraction layer
//!
//! Hosts drive the simulation from wall-clock frames. [`FixedStep`] turns
//! variable frame times into a whole number of fixed simulation ticks; the
//! browser bindings live in [`web`].

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Longest frame time fed to the accumulator (seconds)
pub const MAX_FRAME_DT: f32 = 0.1;
/// Cap on ticks per host frame so a stalled tab cannot spiral
pub const MAX_SUBSTEPS: u32 = 8;

/// Fixed timestep accumulator
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    accumulator: f32,
}

impl FixedStep {
    /// `frame_rate` ticks per second
    pub fn new(frame_rate: f32) -> Self {
        let rate = if frame_rate > 0.0 { frame_rate } else { crate::consts::FRAME_RATE };
        Self {
            step: 1.0 / rate,
            accumulator: 0.0,
        }
    }

    /// Add `dt` seconds and return how many ticks to run now
    pub fn advance(&mut self, dt: f32) -> u32 {
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_DT) } else { 0.0 };
        self.accumulator += dt;

        let mut steps = 0;
        while self.accumulator >= self.step && steps < MAX_SUBSTEPS {
            self.accumulator -= self.step;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS {
            // Drop the backlog rather than carry it into the next frame
            self.accumulator = 0.0;
        }
        steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steady_frames() {
        let mut step = FixedStep::new(60.0);
        let total: u32 = (0..60).map(|_| step.advance(1.0 / 60.0 + 1e-6)).sum();
        assert_eq!(total, 60);
    }

    #[test]
    fn test_partial_frames_accumulate() {
        let mut step = FixedStep::new(60.0);
        assert_eq!(step.advance(0.01), 0);
        assert_eq!(step.advance(0.01), 1);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut step = FixedStep::new(45.0);
        // Clamped to 0.1s, which is 4.5 ticks
        assert_eq!(step.advance(5.0), 4);
        assert_eq!(step.advance(f32::NAN), 0);

        let mut fast = FixedStep::new(240.0);
        assert_eq!(fast.advance(0.1), MAX_SUBSTEPS);
        assert_eq!(fast.advance(0.0), 0);
    }
}
