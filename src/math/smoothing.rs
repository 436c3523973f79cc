use serde::{Deserialize, Serialize};

/// Blend base used while a signal is growing in magnitude
pub const SPEED_UP_BASE: f32 = 0.6;
/// Blend base used while a signal is shrinking in magnitude
pub const SLOW_DOWN_BASE: f32 = 0.8;
/// Frame rate the blend bases are tuned for
pub const REFERENCE_RATE: f32 = 60.0;

/// Frame-rate independent exponential smoothing with separate
/// attack and release constants.
///
/// The bases are the fraction of the previous value kept after one frame
/// at `reference_rate`. Lower bases follow the target faster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Smoothing {
    pub speed_up: f32,
    pub slow_down: f32,
    pub reference_rate: f32,
}

impl Default for Smoothing {
    fn default() -> Self {
        Self {
            speed_up: SPEED_UP_BASE,
            slow_down: SLOW_DOWN_BASE,
            reference_rate: REFERENCE_RATE,
        }
    }
}

impl Smoothing {
    pub fn new(speed_up: f32, slow_down: f32, reference_rate: f32) -> Self {
        Self {
            speed_up,
            slow_down,
            reference_rate,
        }
    }

    /// Weight kept from `prev` for a step of `dt` seconds
    pub fn factor(&self, prev: f32, target: f32, dt: f32) -> f32 {
        let base = if prev.abs() < target.abs() {
            self.speed_up
        } else {
            self.slow_down
        };
        base.powf(dt * self.reference_rate)
    }

    /// Blend `prev` toward `target`. Pure: returns the new value.
    pub fn blend(&self, prev: f32, target: f32, dt: f32) -> f32 {
        let a = self.factor(prev, target, dt);
        // Weighted form keeps the endpoints exact: a == 1 yields prev, a == 0 yields target.
        let x = prev * a + target * (1.0 - a);
        // Rounding can land a ulp outside the endpoints
        x.max(prev.min(target)).min(prev.max(target))
    }

    /// Stateful variant: blends `target` against the accumulator, then
    /// writes the result back into both.
    pub fn apply(&self, prev: &mut f32, target: &mut f32, dt: f32) {
        let x = self.blend(*prev, *target, dt);
        *prev = x;
        *target = x;
    }
}

/// Smooth with the default tuning (0.6 speeding up, 0.8 slowing down, 60 Hz)
pub fn smooth(prev: f32, target: f32, dt: f32) -> f32 {
    Smoothing::default().blend(prev, target, dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dt_keeps_previous() {
        assert_eq!(smooth(0.25, 3.0, 0.0), 0.25);
        assert_eq!(smooth(-4.0, 1.0, 0.0), -4.0);
    }

    #[test]
    fn test_large_dt_snaps_to_target() {
        assert_eq!(smooth(0.0, 2.0, 1000.0), 2.0);
        assert_eq!(smooth(5.0, 1.0, 1000.0), 1.0);
    }

    #[test]
    fn test_speeding_up_uses_fast_base() {
        let s = Smoothing::default();
        let a = s.factor(0.0, 1.0, 1.0 / 60.0);
        assert!((a - 0.6).abs() < 1e-6);

        let x = s.blend(0.0, 1.0, 1.0 / 60.0);
        assert!((x - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_slowing_down_uses_slow_base() {
        let s = Smoothing::default();
        let a = s.factor(1.0, 0.0, 1.0 / 60.0);
        assert!((a - 0.8).abs() < 1e-6);

        let x = s.blend(1.0, 0.0, 1.0 / 60.0);
        assert!((x - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_equal_magnitudes_take_slow_branch() {
        let s = Smoothing::default();
        let a = s.factor(-1.0, 1.0, 1.0 / 60.0);
        assert!((a - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_two_half_steps_match_one_full_step() {
        let s = Smoothing::default();
        let full = s.blend(0.0, 1.0, 1.0 / 60.0);
        let half = s.blend(0.0, 1.0, 1.0 / 120.0);
        let twice = s.blend(half, 1.0, 1.0 / 120.0);
        assert!((full - twice).abs() < 1e-5);
    }

    #[test]
    fn test_apply_writes_both() {
        let s = Smoothing::default();
        let mut prev = 0.0;
        let mut target = 1.0;
        s.apply(&mut prev, &mut target, 1.0 / 60.0);
        assert_eq!(prev, target);
        assert!(prev > 0.0 && prev < 1.0);
    }
}
