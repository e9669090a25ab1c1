//! Spinwheel - an embeddable prize-wheel interaction engine
//!
//! Core modules:
//! - `spin`: Deterministic spin pipeline (decay physics, snap, winner resolution)
//! - `layout`: Immutable segment layout and label geometry
//! - `gate`: Non-reentrant spin admission (registration + in-flight lock)
//! - `wheel`: Facade wiring gate, controller and resolver together
//! - `tuning`: Data-driven spin behavior
//!
//! The engine is driven by a cooperative fixed-timestep tick; the embedding
//! render loop pulls the current angle whenever it wants to draw.

pub mod demo;
pub mod gate;
pub mod indicator;
pub mod layout;
pub mod player;
pub mod spin;
pub mod tuning;
pub mod wheel;

pub use gate::{AdmissionError, GateState, InteractionGate};
pub use layout::{LayoutError, SegmentLayout};
pub use player::PlayerProfile;
pub use spin::{RotationController, RotationState, SpinPhase, SpinResult, resolve};
pub use tuning::SpinTuning;
pub use wheel::Wheel;

use glam::Vec2;

/// Engine configuration constants
pub mod consts {
    /// Fixed tick timestep (120 Hz, plenty for a one-axis animation)
    pub const SIM_DT: f64 = 1.0 / 120.0;

    /// One full revolution in degrees
    pub const ONE_TURN: f64 = 360.0;

    /// Velocity retained per millisecond during the decay phase
    pub const DECELERATION: f64 = 0.999;
    /// Decay is considered finished below this speed (degrees/ms)
    pub const REST_VELOCITY: f64 = 0.005;

    /// Snap phase duration (milliseconds)
    pub const SNAP_DURATION_MS: f64 = 3000.0;
    /// Gate cooldown after a result is delivered (milliseconds)
    pub const REARM_COOLDOWN_MS: f64 = 20.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    angle.rem_euclid(consts::ONE_TURN)
}

/// Convert polar (r, theta in degrees, clockwise from 12 o'clock) to
/// cartesian screen coordinates (y grows downward)
#[inline]
pub fn polar_to_screen(r: f32, theta_deg: f32) -> Vec2 {
    let rad = theta_deg.to_radians();
    Vec2::new(r * rad.sin(), -r * rad.cos())
}
