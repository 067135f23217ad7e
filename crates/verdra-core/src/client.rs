//! HTTP clients for the scan and signup services

use crate::config::ClientConfig;
use crate::model::ScanReport;
use crate::repo::RepoUrl;
use crate::response::interpret_scan_response;
use crate::signup::SignupRequest;
use crate::{VerdraError, VerdraResult};
use reqwest::header::ACCEPT;
use std::sync::Arc;

/// Talks to the external scan and signup services.
///
/// Cheap to clone; clones share one connection pool. No request timeout is
/// applied, a request settles whenever the transport does.
#[derive(Debug, Clone)]
pub struct VerdraClient {
    config: Arc<ClientConfig>,
    client: reqwest::Client,
}

impl VerdraClient {
    pub fn new(config: ClientConfig) -> VerdraResult<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Scan a repository given raw form input
    pub async fn scan_input(&self, input: &str) -> VerdraResult<ScanReport> {
        let repo = RepoUrl::parse(input)?;
        self.scan(&repo).await
    }

    /// `GET {scan_api_url}/scan?repo_url=https://github.com/{owner}/{repo}`
    pub async fn scan(&self, repo: &RepoUrl) -> VerdraResult<ScanReport> {
        let repo_url = repo.github_url();
        tracing::info!("Requesting scan of {}", repo_url);

        let response = self
            .client
            .get(self.config.scan_endpoint())
            .query(&[("repo_url", repo_url.as_str())])
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!("Scan service answered {} ({} bytes)", status, body.len());

        let report = interpret_scan_response(status, &body)?;
        tracing::info!(
            "Scan of {} found {} issues",
            repo_url,
            report.results.total_issues()
        );
        Ok(report)
    }

    /// `POST {signup_url}` with `{name, organization, email}`; any 2xx is success
    pub async fn join_beta(&self, request: &SignupRequest) -> VerdraResult<()> {
        request.validate()?;

        let response = self
            .client
            .post(&self.config.signup_url)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Beta signup rejected with status {}", status);
            return Err(VerdraError::SignupRejected(status.as_u16()));
        }

        tracing::info!("Beta signup accepted");
        Ok(())
    }
}
