//! Data-driven spin behavior
//!
//! Everything that shapes the feel of a spin lives here so embedders can
//! tweak it without touching the engine. Loaded from JSON or built from
//! the reference defaults.

use serde::{Deserialize, Serialize};

use crate::consts;

/// Tunable spin parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpinTuning {
    /// Fraction of angular velocity retained per millisecond of decay
    pub deceleration: f64,
    /// Speed (degrees/ms) below which the decay phase ends
    pub rest_velocity: f64,
    /// Snap phase duration in milliseconds
    pub snap_duration_ms: f64,
    /// Gate cooldown after result delivery, milliseconds
    pub rearm_cooldown_ms: f64,
}

impl Default for SpinTuning {
    fn default() -> Self {
        Self {
            deceleration: consts::DECELERATION,
            rest_velocity: consts::REST_VELOCITY,
            snap_duration_ms: consts::SNAP_DURATION_MS,
            rearm_cooldown_ms: consts::REARM_COOLDOWN_MS,
        }
    }
}

impl SpinTuning {
    /// Parse tuning from a JSON document, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(tuning) => tuning,
            Err(err) => {
                log::warn!("invalid spin tuning, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Per-millisecond decay rate kappa = 1 - deceleration
    #[inline]
    pub fn decay_rate(&self) -> f64 {
        1.0 - self.deceleration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_behavior() {
        let t = SpinTuning::default();
        assert_eq!(t.deceleration, 0.999);
        assert_eq!(t.snap_duration_ms, 3000.0);
        assert_eq!(t.rearm_cooldown_ms, 20.0);
    }

    #[test]
    fn test_from_json() {
        let t = SpinTuning::from_json(
            r#"{"deceleration":0.998,"rest_velocity":0.01,"snap_duration_ms":1500.0,"rearm_cooldown_ms":20.0}"#,
        );
        assert_eq!(t.deceleration, 0.998);
        assert_eq!(t.snap_duration_ms, 1500.0);
    }

    #[test]
    fn test_from_json_bad_input_falls_back() {
        let t = SpinTuning::from_json("not json");
        assert_eq!(t.deceleration, SpinTuning::default().deceleration);
    }
}
