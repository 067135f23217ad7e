//! Beta signup payload

use crate::{VerdraError, VerdraResult};
use serde::{Deserialize, Serialize};

/// Body posted to the beta-signup endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    #[serde(default)]
    pub organization: String,
    pub email: String,
}

impl SignupRequest {
    pub fn new(
        name: impl Into<String>,
        organization: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            organization: organization.into(),
            email: email.into(),
        }
    }

    /// Checks run before anything is sent. Email is checked first.
    pub fn validate(&self) -> VerdraResult<()> {
        if self.email.trim().is_empty() {
            return Err(VerdraError::Validation("Email is required".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(VerdraError::Validation("Name is required".to_string()));
        }
        Ok(())
    }
}
