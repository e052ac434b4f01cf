//! GitHub access.
//!
//! The aggregator only sees the [`IssueSource`] trait, so tests can swap the
//! network for canned responses.

pub mod client;

pub use client::GitHubClient;

use crate::error::FetchError;
use crate::models::{RawIssue, RepositoryDescriptor};
use async_trait::async_trait;

/// Something that can list the open, labeled issues of a repository.
#[async_trait]
pub trait IssueSource {
    /// Returns one page of open issues carrying `descriptor.label`, in the
    /// order the service returned them. Pull requests are not filtered here.
    async fn fetch_issues(
        &self,
        descriptor: &RepositoryDescriptor,
    ) -> Result<Vec<RawIssue>, FetchError>;
}
