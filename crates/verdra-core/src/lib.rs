//! Verdra core
//!
//! Data model, presentation table and service clients behind the Verdra
//! landing site. Nothing in here depends on a UI framework: the site crate
//! renders what this crate prepares.

pub mod category;
#[cfg(feature = "client")]
pub mod client;
pub mod config;
pub mod model;
pub mod repo;
pub mod response;
pub mod signup;
pub mod state;
pub mod view;

use thiserror::Error;

pub use category::{Category, CategoryStyle, CATEGORY_TABLE};
#[cfg(feature = "client")]
pub use client::VerdraClient;
pub use config::ClientConfig;
pub use model::{Issue, ScanReport, ScanResultSet};
pub use repo::RepoUrl;
pub use response::ScanResponse;
pub use signup::SignupRequest;
pub use state::{ScanState, SignupState};
pub use view::{format_savings, ResultsView, SectionView};

#[derive(Error, Debug)]
pub enum VerdraError {
    #[error("Please enter a valid GitHub repository URL")]
    InvalidRepoUrl,

    #[error("{0}")]
    Validation(String),

    #[error("API error: {0}")]
    HttpStatus(u16),

    #[cfg(feature = "client")]
    #[error("Could not reach the scan service: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response from the scan service: {0}")]
    Json(#[from] serde_json::Error),

    /// Error reported by the scan backend inside an otherwise valid response.
    #[error("{0}")]
    Analysis(String),

    #[error("Failed to submit. Please try again.")]
    SignupRejected(u16),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl VerdraError {
    /// Message shown under the signup form.
    ///
    /// Validation and rejection messages are shown as-is; anything that went
    /// wrong on the way to the signup service collapses into a generic line.
    pub fn signup_message(&self) -> String {
        match self {
            VerdraError::Validation(_) | VerdraError::SignupRejected(_) => self.to_string(),
            _ => "Something went wrong".to_string(),
        }
    }
}

pub type VerdraResult<T> = Result<T, VerdraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            VerdraError::InvalidRepoUrl.to_string(),
            "Please enter a valid GitHub repository URL"
        );
        assert_eq!(VerdraError::HttpStatus(502).to_string(), "API error: 502");
        assert_eq!(
            VerdraError::Analysis("repository not found".to_string()).to_string(),
            "repository not found"
        );
    }

    #[test]
    fn test_signup_message() {
        let rejected = VerdraError::SignupRejected(500);
        assert_eq!(rejected.signup_message(), "Failed to submit. Please try again.");

        let invalid = VerdraError::Validation("Email is required".to_string());
        assert_eq!(invalid.signup_message(), "Email is required");

        assert_eq!(VerdraError::HttpStatus(404).signup_message(), "Something went wrong");
    }
}
