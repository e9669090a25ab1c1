//! Deterministic spin pipeline
//!
//! All spin logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No rendering or platform dependencies
//! - The same release velocity from the same angle always lands the same
//!   segment

pub mod controller;
pub mod decay;
pub mod resolver;
pub mod state;

pub use controller::{RotationController, SpinEvent};
pub use decay::DecayModel;
pub use resolver::resolve;
pub use state::{RotationState, SpinPhase, SpinResult};
