//! Scan service response schema
//!
//! The service has shipped with and without the `savings` field, and any
//! category array may be missing or `null`. Every field is optional here and
//! unknown fields are ignored.

use crate::category::Category;
use crate::model::{Issue, ScanReport, ScanResultSet};
use crate::{VerdraError, VerdraResult};
use serde::{Deserialize, Serialize};

/// Body of `GET /scan`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanResponse {
    pub db_calls_in_loops: Option<Vec<Issue>>,
    pub logging_in_loops: Option<Vec<Issue>>,
    pub unused_imports: Option<Vec<Issue>>,
    pub large_imports: Option<Vec<Issue>>,
    pub unused_functions: Option<Vec<Issue>>,
    pub error: Option<String>,
    pub savings: Option<f64>,
}

impl ScanResponse {
    pub fn from_json(body: &str) -> VerdraResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Error reported by the backend; an empty string counts as no error
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|message| !message.is_empty())
    }

    /// Map the wire fields onto the five known categories.
    ///
    /// Every known category is present in the result, absent fields become
    /// empty lists.
    pub fn into_report(self) -> VerdraResult<ScanReport> {
        if let Some(message) = self.error_message() {
            return Err(VerdraError::Analysis(message.to_string()));
        }

        let results = ScanResultSet::new()
            .with_category(Category::DbLoops, self.db_calls_in_loops.unwrap_or_default())
            .with_category(Category::LoggingLoops, self.logging_in_loops.unwrap_or_default())
            .with_category(Category::UnusedImports, self.unused_imports.unwrap_or_default())
            .with_category(Category::LargeImports, self.large_imports.unwrap_or_default())
            .with_category(Category::UnusedFunctions, self.unused_functions.unwrap_or_default());

        Ok(ScanReport {
            results,
            savings: self.savings,
        })
    }
}

/// Turn a raw HTTP status and body into a report.
///
/// A non-2xx status wins over anything in the body.
pub fn interpret_scan_response(status: u16, body: &str) -> VerdraResult<ScanReport> {
    if !(200..300).contains(&status) {
        return Err(VerdraError::HttpStatus(status));
    }
    ScanResponse::from_json(body)?.into_report()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_response() {
        let body = r#"{
            "db_calls_in_loops": [{"filepath": "a.py", "line": 12, "name": "query"}],
            "logging_in_loops": [],
            "unused_imports": [{"filepath": "b.py", "line": 1, "name": "os"}],
            "large_imports": [],
            "unused_functions": [],
            "savings": 42.5
        }"#;

        let report = interpret_scan_response(200, body).unwrap();
        assert_eq!(report.savings, Some(42.5));
        assert_eq!(report.results.len(), 5);
        assert_eq!(report.results.total_issues(), 2);
        assert_eq!(
            report.results.get(&Category::DbLoops).unwrap(),
            &[Issue::new("a.py", 12, "query")]
        );
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let report = interpret_scan_response(200, r#"{"unused_functions": null}"#).unwrap();
        assert_eq!(report.savings, None);
        assert!(report.results.is_clean());

        let keys: Vec<&str> = report.results.iter().map(|(category, _)| category.key()).collect();
        assert_eq!(
            keys,
            ["dbLoops", "loggingLoops", "unusedImports", "largeImports", "unusedFunctions"]
        );
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let report = interpret_scan_response(200, r#"{"scanned_files": 12, "version": "2"}"#).unwrap();
        assert!(report.results.is_clean());
    }

    #[test]
    fn test_backend_error_field() {
        let err = interpret_scan_response(200, r#"{"error": "X"}"#).unwrap_err();
        assert!(matches!(err, VerdraError::Analysis(ref message) if message == "X"));
        assert_eq!(err.to_string(), "X");
    }

    #[test]
    fn test_empty_error_is_not_a_failure() {
        assert!(interpret_scan_response(200, r#"{"error": ""}"#).is_ok());
    }

    #[test]
    fn test_http_status_wins() {
        let err = interpret_scan_response(500, r#"{"error": "boom"}"#).unwrap_err();
        assert_eq!(err.to_string(), "API error: 500");
    }

    #[test]
    fn test_malformed_issue_rejected() {
        let body = r#"{"db_calls_in_loops": [{"filepath": "a.py"}]}"#;
        let err = interpret_scan_response(200, body).unwrap_err();
        assert!(matches!(err, VerdraError::Json(_)));
    }
}
