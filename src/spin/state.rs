//! Rotation state and result types

use serde::{Deserialize, Serialize};

use crate::normalize_degrees;

/// Current phase of the spin timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpinPhase {
    /// No spin in flight; the wheel is parked on a segment boundary
    #[default]
    Idle,
    /// Friction phase - velocity decays geometrically toward zero
    Decaying,
    /// Fixed-duration eased glide onto the nearest segment boundary
    Snapping,
}

/// The one mutable value in the engine: a continuous rotation angle plus
/// the phase that owns it. Lives as long as the wheel widget; mutated only
/// by the controller's tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationState {
    /// Degrees, unbounded while a spin is in flight (accumulates across
    /// the decay so the visual rotation stays continuous)
    pub current_angle: f64,
    pub phase: SpinPhase,
}

impl Default for RotationState {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationState {
    /// State at widget mount: angle 0, nothing in flight
    pub fn new() -> Self {
        Self {
            current_angle: 0.0,
            phase: SpinPhase::Idle,
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.phase == SpinPhase::Idle
    }

    /// Wrap the angle into [0, 360) without moving the wheel visually.
    /// Called between phases so snap targets stay near zero; never called
    /// mid-flight.
    pub fn normalize(&mut self) {
        self.current_angle = normalize_degrees(self.current_angle);
    }
}

/// Winner of one completed spin. Ephemeral - handed to the caller once,
/// never stored by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinResult {
    pub segment_index: usize,
    pub label: String,
}
