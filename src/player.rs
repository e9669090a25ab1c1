//! Player identity supplied by the registration collaborator
//!
//! The engine only cares that both fields are present; validation,
//! storage and the form UI live outside.

use serde::{Deserialize, Serialize};

/// Identity captured by the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub phone: String,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Both fields present and non-empty - the gate's admission check
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.phone.trim().is_empty()
    }
}
