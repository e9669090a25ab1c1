//! Spin admission
//!
//! A two-state lock in front of the controller. `Armed` admits exactly one
//! spin and flips to `Locked`; the gate re-arms only after the spin's
//! result has been handed to the caller and a short cooldown has passed,
//! so downstream bookkeeping (prize assignment, UI state) settles before
//! the next gesture can land.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a spin request was turned away
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdmissionError {
    /// A spin is already in flight (or cooling down). The control surface
    /// should be disabled in this state, so this is rejected silently -
    /// no per-attempt user message.
    #[error("a spin is already in flight")]
    Locked,
    /// Player identity is missing; the caller surfaces a
    /// "registration required" message.
    #[error("registration required before spinning")]
    RegistrationRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GateState {
    /// Accepting one spin start
    #[default]
    Armed,
    /// Rejecting spin starts until the current spin fully resolves
    Locked,
}

/// Admission lock for one wheel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionGate {
    state: GateState,
    /// Cooldown left in milliseconds; `Some` only after the result has
    /// been delivered, so a zero-length cooldown still waits for delivery
    cooldown_ms: Option<f64>,
    rearm_cooldown_ms: f64,
}

impl InteractionGate {
    pub fn new(rearm_cooldown_ms: f64) -> Self {
        Self {
            state: GateState::Armed,
            cooldown_ms: None,
            rearm_cooldown_ms,
        }
    }

    #[inline]
    pub fn state(&self) -> GateState {
        self.state
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.state == GateState::Armed
    }

    /// Decide a spin-start request. On success the gate locks; on failure
    /// nothing changes.
    pub fn admit(&mut self, registration_complete: bool) -> Result<(), AdmissionError> {
        if self.state == GateState::Locked {
            return Err(AdmissionError::Locked);
        }
        if !registration_complete {
            log::info!("spin rejected: registration incomplete");
            return Err(AdmissionError::RegistrationRequired);
        }
        self.state = GateState::Locked;
        Ok(())
    }

    /// Called once the spin result has been observed by the caller; starts
    /// the re-arm cooldown.
    pub fn result_delivered(&mut self) {
        debug_assert_eq!(self.state, GateState::Locked);
        self.cooldown_ms = Some(self.rearm_cooldown_ms);
    }

    /// Advance the cooldown; re-arms when it elapses. Never re-arms before
    /// `result_delivered` has been called for the in-flight spin.
    pub fn tick(&mut self, dt: f64) {
        if self.state != GateState::Locked {
            return;
        }
        if let Some(remaining) = self.cooldown_ms {
            let remaining = remaining - dt * 1000.0;
            if remaining <= 0.0 {
                self.cooldown_ms = None;
                self.state = GateState::Armed;
            } else {
                self.cooldown_ms = Some(remaining);
            }
        }
    }
}
