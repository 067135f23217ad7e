//! Server functions and plain HTTP routes
//!
//! The browser never talks to the scan or signup services directly; it calls
//! these server functions, which use the `VerdraClient` provided as context.

use leptos::*;
use verdra_core::ScanReport;

/// Shown for any signup failure that did not come back as a message
pub const SIGNUP_FALLBACK_MESSAGE: &str = "Something went wrong";

/// Scan a GitHub repository. `repo_url` is the raw form input.
#[server(ScanRepository, "/api")]
pub async fn scan_repository(repo_url: String) -> Result<ScanReport, ServerFnError> {
    let client = use_context::<verdra_core::VerdraClient>().ok_or_else(|| {
        ServerFnError::<leptos::server_fn::error::NoCustomError>::ServerError("Scan service is not configured".to_string())
    })?;

    client.scan_input(&repo_url).await.map_err(|err| {
        tracing::warn!("Scan of {:?} failed: {}", repo_url, err);
        ServerFnError::ServerError(err.to_string())
    })
}

/// Register interest in the beta
#[server(JoinBeta, "/api")]
pub async fn join_beta(
    name: String,
    organization: String,
    email: String,
) -> Result<(), ServerFnError> {
    let client = use_context::<verdra_core::VerdraClient>().ok_or_else(|| {
        ServerFnError::<leptos::server_fn::error::NoCustomError>::ServerError(SIGNUP_FALLBACK_MESSAGE.to_string())
    })?;

    let request = verdra_core::SignupRequest::new(name, organization, email);
    client.join_beta(&request).await.map_err(|err| {
        tracing::warn!("Beta signup failed: {}", err);
        ServerFnError::ServerError(err.signup_message())
    })
}

/// Message to show for a failed scan
pub fn failure_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(message) => message.clone(),
        other => other.to_string(),
    }
}

/// Message to show for a failed signup. Anything that never reached the
/// signup service collapses to [`SIGNUP_FALLBACK_MESSAGE`].
pub fn signup_failure_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(message) => message.clone(),
        _ => SIGNUP_FALLBACK_MESSAGE.to_string(),
    }
}

#[cfg(feature = "ssr")]
#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[cfg(feature = "ssr")]
pub async fn health_check() -> axum::Json<HealthResponse> {
    axum::Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_unwraps_server_errors() {
        let err = ServerFnError::ServerError("API error: 502".to_string());
        assert_eq!(failure_message(&err), "API error: 502");
    }

    #[test]
    fn test_failure_message_keeps_transport_errors() {
        let err = ServerFnError::Request("connection refused".to_string());
        assert!(failure_message(&err).contains("connection refused"));
    }

    #[test]
    fn test_signup_message_keeps_service_messages() {
        let err = ServerFnError::ServerError("Failed to submit. Please try again.".to_string());
        assert_eq!(signup_failure_message(&err), "Failed to submit. Please try again.");

        let err = ServerFnError::ServerError("Email is required".to_string());
        assert_eq!(signup_failure_message(&err), "Email is required");
    }

    #[test]
    fn test_signup_transport_errors_are_generic() {
        for err in [
            ServerFnError::Request("connection refused".to_string()),
            ServerFnError::Response("bad gateway".to_string()),
            ServerFnError::Deserialization("unexpected token".to_string()),
        ] {
            assert_eq!(signup_failure_message(&err), "Something went wrong");
        }
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_health_check() {
        let axum::Json(health) = health_check().await;
        assert_eq!(health.status, "ok");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
    }
}
