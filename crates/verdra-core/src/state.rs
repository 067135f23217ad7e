//! Request lifecycles for the scan and signup forms
//!
//! Each form owns exactly one of these. Being an enum, a form can never be
//! pending and failed at the same time, and a failed scan never carries
//! results.

use crate::model::{ScanReport, ScanResultSet};
use crate::repo::RepoUrl;
use crate::signup::SignupRequest;
use crate::VerdraError;

/// Scan form lifecycle: `Idle -> Pending -> {Succeeded, Failed} -> Pending ...`
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ScanState {
    #[default]
    Idle,
    Pending,
    Succeeded(ScanReport),
    Failed(String),
}

impl ScanState {
    /// Handle a form submission.
    ///
    /// Returns the repository to scan when a request should go out. Invalid
    /// input fails immediately without a request; a submission while one is
    /// already pending is ignored.
    pub fn submit(&mut self, input: &str) -> Option<RepoUrl> {
        if self.is_pending() {
            return None;
        }
        match RepoUrl::parse(input) {
            Ok(repo) => {
                *self = ScanState::Pending;
                Some(repo)
            }
            Err(err) => {
                *self = ScanState::rejected(&err);
                None
            }
        }
    }

    /// Settle a pending request
    pub fn settle(outcome: Result<ScanReport, String>) -> Self {
        match outcome {
            Ok(report) => ScanState::Succeeded(report),
            Err(message) => ScanState::Failed(message),
        }
    }

    pub fn rejected(err: &VerdraError) -> Self {
        ScanState::Failed(err.to_string())
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ScanState::Pending)
    }

    pub fn report(&self) -> Option<&ScanReport> {
        match self {
            ScanState::Succeeded(report) => Some(report),
            _ => None,
        }
    }

    pub fn results(&self) -> Option<&ScanResultSet> {
        self.report().map(|report| &report.results)
    }

    pub fn savings(&self) -> Option<f64> {
        self.report().and_then(|report| report.savings)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ScanState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Signup form lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SignupState {
    #[default]
    Editing,
    Submitting,
    Joined,
    Failed(String),
}

impl SignupState {
    /// Returns true when the request should be sent
    pub fn submit(&mut self, request: &SignupRequest) -> bool {
        if self.is_submitting() {
            return false;
        }
        match request.validate() {
            Ok(()) => {
                *self = SignupState::Submitting;
                true
            }
            Err(err) => {
                *self = SignupState::Failed(err.signup_message());
                false
            }
        }
    }

    pub fn settle(outcome: Result<(), String>) -> Self {
        match outcome {
            Ok(()) => SignupState::Joined,
            Err(message) => SignupState::Failed(message),
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SignupState::Submitting)
    }

    pub fn is_joined(&self) -> bool {
        matches!(self, SignupState::Joined)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SignupState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::model::Issue;

    fn report() -> ScanReport {
        ScanReport {
            results: ScanResultSet::new()
                .with_category(Category::DbLoops, vec![Issue::new("a.py", 12, "query")]),
            savings: Some(12.0),
        }
    }

    #[test]
    fn test_empty_input_fails_without_request() {
        let mut state = ScanState::Idle;
        assert_eq!(state.submit("   "), None);
        assert_eq!(state.error(), Some("Please enter a valid GitHub repository URL"));
        assert!(state.results().is_none());
    }

    #[test]
    fn test_valid_input_goes_pending() {
        let mut state = ScanState::Idle;
        let repo = state.submit("https://github.com/owner/repo").unwrap();
        assert_eq!(repo.path(), "owner/repo");
        assert!(state.is_pending());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_submit_while_pending_is_ignored() {
        let mut state = ScanState::Pending;
        assert_eq!(state.submit("owner/repo"), None);
        assert!(state.is_pending());
    }

    #[test]
    fn test_resubmit_after_failure() {
        let mut state = ScanState::Failed("API error: 500".to_string());
        assert!(state.submit("owner/repo").is_some());
        assert_eq!(state, ScanState::Pending);
    }

    #[test]
    fn test_settle() {
        let state = ScanState::settle(Ok(report()));
        assert_eq!(state.results().map(ScanResultSet::total_issues), Some(1));
        assert_eq!(state.savings(), Some(12.0));

        let state = ScanState::settle(Err("X".to_string()));
        assert_eq!(state.error(), Some("X"));
        assert!(state.results().is_none());
        assert!(state.savings().is_none());
    }

    #[test]
    fn test_signup_validation_blocks_request() {
        let mut state = SignupState::Editing;
        assert!(!state.submit(&SignupRequest::new("Ada", "", "")));
        assert_eq!(state.error(), Some("Email is required"));

        assert!(state.submit(&SignupRequest::new("Ada", "", "ada@example.com")));
        assert!(state.is_submitting());
        assert!(!state.submit(&SignupRequest::new("Ada", "", "ada@example.com")));
    }

    #[test]
    fn test_signup_settle() {
        assert!(SignupState::settle(Ok(())).is_joined());
        let failed = SignupState::settle(Err("Something went wrong".to_string()));
        assert_eq!(failed.error(), Some("Something went wrong"));
    }
}
