//! reqwest-backed GitHub issues client.

use super::IssueSource;
use crate::config::GitHubConfig;
use crate::error::FetchError;
use crate::models::{RawIssue, RepositoryDescriptor};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::debug;

const ACCEPT_V3: &str = "application/vnd.github.v3+json";

/// Lists issues through the GitHub REST API.
pub struct GitHubClient {
    http_client: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a client from the GitHub settings.
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// URL of the issues listing for a repository, without the query.
    fn issues_url(&self, descriptor: &RepositoryDescriptor) -> String {
        format!(
            "{}/repos/{}/{}/issues",
            self.api_url, descriptor.owner, descriptor.repo
        )
    }
}

#[async_trait]
impl IssueSource for GitHubClient {
    async fn fetch_issues(
        &self,
        descriptor: &RepositoryDescriptor,
    ) -> Result<Vec<RawIssue>, FetchError> {
        let url = self.issues_url(descriptor);
        debug!("GET {} labels={:?}", url, descriptor.label);

        let mut request = self
            .http_client
            .get(&url)
            .query(&[("state", "open"), ("labels", descriptor.label.as_str())])
            .header(ACCEPT, ACCEPT_V3)
            .header(
                USER_AGENT,
                concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
            );

        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Remote { status });
        }

        let body = response.text().await?;
        let issues: Vec<RawIssue> = serde_json::from_str(&body)?;

        Ok(issues)
    }
}
