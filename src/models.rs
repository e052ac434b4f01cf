//! Data models for the issue harvester.
//!
//! This module contains the core data structures that flow through the
//! pipeline: repository descriptors, raw GitHub issues, the output records,
//! and the per-repository outcomes of a run.

use crate::error::FetchError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A repository to harvest issues from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDescriptor {
    /// Account or organization that owns the repository.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Exact label name to filter on (case-sensitive).
    pub label: String,
    /// Topic tags copied onto every issue from this repository.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RepositoryDescriptor {
    /// Creates a descriptor from borrowed parts.
    pub fn new(owner: &str, repo: &str, label: &str, tags: &[&str]) -> Self {
        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            label: label.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Returns `owner/repo`.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl fmt::Display for RepositoryDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// One element of the GitHub issues listing.
///
/// Only the fields the harvester needs are kept; everything else in the
/// response is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawIssue {
    pub id: u64,
    pub title: String,
    pub html_url: String,
    pub created_at: String,
    pub number: u64,
    /// GitHub lists pull requests under issues too. Any `pull_request` key,
    /// even `null`, marks the element as one.
    #[serde(default, rename = "pull_request", deserialize_with = "key_present")]
    pub is_pull_request: bool,
}

fn key_present<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    serde::de::IgnoredAny::deserialize(deserializer).map(|_| true)
}

/// A harvested issue, as written to the output document.
///
/// Field order here is the field order in the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    pub id: u64,
    pub title: String,
    pub url: String,
    /// `owner/repo` of the originating repository.
    pub repository: String,
    pub tags: Vec<String>,
    /// Passed through from GitHub unmodified.
    pub created_at: String,
    pub number: u64,
}

impl IssueRecord {
    /// Builds a record from a raw issue and the repository it came from.
    ///
    /// Returns `None` for pull requests.
    pub fn from_raw(raw: RawIssue, descriptor: &RepositoryDescriptor) -> Option<Self> {
        if raw.is_pull_request {
            return None;
        }

        Some(Self {
            id: raw.id,
            title: raw.title,
            url: raw.html_url,
            repository: descriptor.full_name(),
            tags: descriptor.tags.clone(),
            created_at: raw.created_at,
            number: raw.number,
        })
    }
}

/// Result of processing a single repository.
#[derive(Debug)]
pub enum RepoOutcome {
    /// The listing was fetched and parsed.
    Fetched {
        repository: String,
        /// Number of elements GitHub returned, pull requests included.
        received: usize,
        /// Retained issues in response order.
        records: Vec<IssueRecord>,
    },
    /// The repository could not be queried; it contributes no records.
    Failed {
        repository: String,
        error: FetchError,
    },
}

impl RepoOutcome {
    /// Returns the `owner/repo` this outcome belongs to.
    pub fn repository(&self) -> &str {
        match self {
            RepoOutcome::Fetched { repository, .. } => repository,
            RepoOutcome::Failed { repository, .. } => repository,
        }
    }

    /// Returns the error if the repository failed.
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            RepoOutcome::Fetched { .. } => None,
            RepoOutcome::Failed { error, .. } => Some(error),
        }
    }
}

/// Summary counts for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Number of repositories processed.
    pub repositories: usize,
    /// Repositories queried successfully.
    pub succeeded: usize,
    /// Repositories that failed.
    pub failed: usize,
    /// Raw elements received across all successful repositories.
    pub received: usize,
    /// Issues retained in the output document.
    pub records: usize,
}

impl RunSummary {
    /// Creates a summary from a list of outcomes.
    pub fn from_outcomes(outcomes: &[RepoOutcome]) -> Self {
        let mut summary = Self {
            repositories: outcomes.len(),
            ..Self::default()
        };

        for outcome in outcomes {
            match outcome {
                RepoOutcome::Fetched {
                    received, records, ..
                } => {
                    summary.succeeded += 1;
                    summary.received += received;
                    summary.records += records.len();
                }
                RepoOutcome::Failed { .. } => summary.failed += 1,
            }
        }

        summary
    }
}
