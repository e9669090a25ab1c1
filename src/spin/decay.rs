//! Exponential decay model for the friction phase
//!
//! Velocity decays as v(t) = v0 * e^(-kappa * t) with t in milliseconds
//! and kappa = 1 - deceleration. Displacement converges to v0 / kappa, so
//! every spin travels a finite, closed-form distance regardless of how
//! hard the wheel is flicked.

use serde::{Deserialize, Serialize};

use crate::tuning::SpinTuning;

/// Friction parameters for one wheel
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DecayModel {
    /// Per-millisecond decay rate (kappa)
    decay_rate: f64,
    /// Speed below which the phase is finished (degrees/ms)
    rest_velocity: f64,
}

impl DecayModel {
    pub fn new(tuning: &SpinTuning) -> Self {
        Self {
            decay_rate: tuning.decay_rate(),
            rest_velocity: tuning.rest_velocity,
        }
    }

    /// Advance the decay by `dt_ms`. Returns the displacement over the
    /// step and the velocity at its end, integrating the exponential
    /// exactly so the result is independent of tick rate.
    pub fn step(&self, velocity: f64, dt_ms: f64) -> (f64, f64) {
        let retain = (-self.decay_rate * dt_ms).exp();
        let displacement = velocity / self.decay_rate * (1.0 - retain);
        (displacement, velocity * retain)
    }

    /// Whether a velocity counts as stopped
    #[inline]
    pub fn at_rest(&self, velocity: f64) -> bool {
        velocity.abs() < self.rest_velocity
    }

    /// Total distance a release velocity will cover before resting
    /// (closed form, ignoring the negligible tail below the threshold)
    pub fn projected_travel(&self, velocity: f64) -> f64 {
        velocity / self.decay_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> DecayModel {
        DecayModel::new(&SpinTuning::default())
    }

    #[test]
    fn test_velocity_monotonically_decreases() {
        let m = model();
        let mut v = 2.0; // degrees per ms
        for _ in 0..200 {
            let (_, next) = m.step(v, 8.0);
            assert!(next < v);
            v = next;
        }
    }

    #[test]
    fn test_step_is_tick_rate_independent() {
        let m = model();
        // One 100ms step vs ten 10ms steps must land on the same angle.
        let (d_one, v_one) = m.step(1.5, 100.0);
        let mut d_many = 0.0;
        let mut v_many = 1.5;
        for _ in 0..10 {
            let (d, v) = m.step(v_many, 10.0);
            d_many += d;
            v_many = v;
        }
        assert!((d_one - d_many).abs() < 1e-9);
        assert!((v_one - v_many).abs() < 1e-12);
    }

    #[test]
    fn test_total_travel_matches_closed_form() {
        let m = model();
        let v0 = 1.0;
        let mut traveled = 0.0;
        let mut v = v0;
        while !m.at_rest(v) {
            let (d, next) = m.step(v, 8.0);
            traveled += d;
            v = next;
        }
        // kappa = 0.001 so total travel approaches 1000 degrees; the
        // truncated tail is at most rest_velocity / kappa = 5 degrees.
        let projected = m.projected_travel(v0);
        assert!(traveled <= projected);
        assert!(projected - traveled < 5.0 + 1e-9);
    }

    #[test]
    fn test_zero_velocity_rests_immediately() {
        let m = model();
        assert!(m.at_rest(0.0));
        let (d, v) = m.step(0.0, 8.0);
        assert_eq!(d, 0.0);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn test_negative_velocity_spins_backward() {
        let m = model();
        let (d, v) = m.step(-1.0, 8.0);
        assert!(d < 0.0);
        assert!(v < 0.0 && v > -1.0);
    }
}
