//! Wheel facade
//!
//! Wires the gate, controller and resolver into the widget-facing surface:
//! admission-checked spin starts, one tick entry point, and pull-based
//! reads for the renderer. One `Wheel` per on-screen wheel; the engine
//! holds no global state.

use crate::gate::{AdmissionError, GateState, InteractionGate};
use crate::indicator;
use crate::layout::SegmentLayout;
use crate::player::PlayerProfile;
use crate::spin::{RotationController, SpinEvent, SpinPhase, SpinResult, resolve};
use crate::tuning::SpinTuning;

/// An embeddable prize wheel
#[derive(Debug, Clone)]
pub struct Wheel {
    layout: SegmentLayout,
    controller: RotationController,
    gate: InteractionGate,
    player: Option<PlayerProfile>,
}

impl Wheel {
    pub fn new(layout: SegmentLayout) -> Self {
        Self::with_tuning(layout, SpinTuning::default())
    }

    pub fn with_tuning(layout: SegmentLayout, tuning: SpinTuning) -> Self {
        Self {
            controller: RotationController::new(&layout, &tuning),
            gate: InteractionGate::new(tuning.rearm_cooldown_ms),
            layout,
            player: None,
        }
    }

    #[inline]
    pub fn layout(&self) -> &SegmentLayout {
        &self.layout
    }

    /// Current rotation for the renderer's transform. Read-only, callable
    /// every frame, staleness of one tick is fine.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.controller.angle()
    }

    /// Current phase; renderers use this to show or hide entry controls
    #[inline]
    pub fn phase(&self) -> SpinPhase {
        self.controller.phase()
    }

    #[inline]
    pub fn gate_state(&self) -> GateState {
        self.gate.state()
    }

    /// Pointer tilt for the current rotation (cosmetic)
    pub fn knob_deflection(&self) -> f64 {
        indicator::knob_deflection(self.controller.angle(), &self.layout)
    }

    /// Attach the registered player. Spins are rejected until a complete
    /// profile is present.
    pub fn register(&mut self, player: PlayerProfile) {
        log::info!("player registered: {}", player.name);
        self.player = Some(player);
    }

    #[inline]
    pub fn player(&self) -> Option<&PlayerProfile> {
        self.player.as_ref()
    }

    /// Drop the registration (new-player flow)
    pub fn reset_registration(&mut self) {
        self.player = None;
    }

    fn registration_complete(&self) -> bool {
        self.player.as_ref().is_some_and(PlayerProfile::is_complete)
    }

    /// Request a spin from a gesture's release velocity (degrees/ms).
    /// Goes through the gate; on admission the decay phase starts on the
    /// next tick.
    pub fn try_spin(&mut self, release_velocity: f64) -> Result<(), AdmissionError> {
        self.gate.admit(self.registration_complete())?;
        let started = self.controller.begin_spin(release_velocity);
        debug_assert!(started, "gate armed while controller not idle");
        Ok(())
    }

    /// Advance the engine by `dt` seconds. Yields the winner exactly once
    /// per completed spin; the caller forwards it to its result sink.
    pub fn tick(&mut self, dt: f64) -> Option<SpinResult> {
        let result = match self.controller.tick(dt) {
            Some(SpinEvent::Settled { final_angle }) => {
                let segment_index = resolve(final_angle, &self.layout);
                let result = SpinResult {
                    segment_index,
                    label: self.layout.label(segment_index).to_owned(),
                };
                log::info!(
                    "spin settled at {final_angle:.2} deg: segment {segment_index} ({})",
                    self.layout.display_label(segment_index)
                );
                self.gate.result_delivered();
                Some(result)
            }
            Some(SpinEvent::DecayFinished { .. }) | None => None,
        };
        self.gate.tick(dt);
        result
    }
}
