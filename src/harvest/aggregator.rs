//! Issue aggregation across repositories.
//!
//! Each repository is processed exactly once, in configured order. A failure
//! for one repository becomes a [`RepoOutcome::Failed`] and never stops the
//! others.

use crate::github::IssueSource;
use crate::models::{IssueRecord, RawIssue, RepoOutcome, RepositoryDescriptor, RunSummary};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Everything a run produced.
#[derive(Debug)]
pub struct Harvest {
    /// The output document, in repository order then response order.
    pub records: Vec<IssueRecord>,
    /// Counts for reporting.
    pub summary: RunSummary,
    /// `(repository, error message)` for every repository that failed.
    pub failures: Vec<(String, String)>,
}

/// Fetches, filters and tags issues for a fixed list of repositories.
pub struct IssueAggregator<S> {
    repositories: Vec<RepositoryDescriptor>,
    source: S,
    throttle: Duration,
}

impl<S: IssueSource> IssueAggregator<S> {
    /// Create an aggregator. A zero `throttle` disables the pause between
    /// repositories.
    pub fn new(repositories: Vec<RepositoryDescriptor>, source: S, throttle: Duration) -> Self {
        Self {
            repositories,
            source,
            throttle,
        }
    }

    /// Process every repository and return one outcome per repository.
    pub async fn run(&self) -> Vec<RepoOutcome> {
        info!(
            "Fetching issues from {} repositories...",
            self.repositories.len()
        );

        let mut outcomes = Vec::with_capacity(self.repositories.len());

        for (index, descriptor) in self.repositories.iter().enumerate() {
            if index > 0 && !self.throttle.is_zero() {
                tokio::time::sleep(self.throttle).await;
            }
            outcomes.push(self.process(descriptor).await);
        }

        outcomes
    }

    /// Run the whole pipeline and flatten the outcomes into the output document.
    pub async fn collect(&self) -> Harvest {
        let outcomes = self.run().await;
        let summary = RunSummary::from_outcomes(&outcomes);

        let failures: Vec<(String, String)> = outcomes
            .iter()
            .filter_map(|outcome| {
                outcome
                    .error()
                    .map(|error| (outcome.repository().to_string(), error.to_string()))
            })
            .collect();

        let records = records(outcomes);
        info!("Total issues fetched: {}", records.len());
        if !failures.is_empty() {
            warn!(
                "{} of {} repositories failed",
                failures.len(),
                summary.repositories
            );
        }

        Harvest {
            records,
            summary,
            failures,
        }
    }

    async fn process(&self, descriptor: &RepositoryDescriptor) -> RepoOutcome {
        let repository = descriptor.full_name();
        info!(
            "Fetching issues for {} with label '{}'...",
            repository, descriptor.label
        );

        match self.source.fetch_issues(descriptor).await {
            Ok(raw) => {
                let received = raw.len();
                info!("Found {} issues for {}.", received, repository);

                let records = to_records(raw, descriptor);
                if records.len() < received {
                    debug!(
                        "Skipped {} pull requests for {}",
                        received - records.len(),
                        repository
                    );
                }

                RepoOutcome::Fetched {
                    repository,
                    received,
                    records,
                }
            }
            Err(error) => {
                warn!("Error fetching issues for {}: {}", repository, error);
                RepoOutcome::Failed { repository, error }
            }
        }
    }
}

/// Turn a repository's raw listing into records, dropping pull requests and
/// keeping response order.
pub fn to_records(raw: Vec<RawIssue>, descriptor: &RepositoryDescriptor) -> Vec<IssueRecord> {
    raw.into_iter()
        .filter_map(|issue| IssueRecord::from_raw(issue, descriptor))
        .collect()
}

/// Flatten outcomes into the output document. Failed repositories contribute
/// nothing.
pub fn records(outcomes: Vec<RepoOutcome>) -> Vec<IssueRecord> {
    outcomes
        .into_iter()
        .flat_map(|outcome| match outcome {
            RepoOutcome::Fetched { records, .. } => records,
            RepoOutcome::Failed { .. } => Vec::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GitHubConfig;
    use crate::error::FetchError;
    use crate::github::GitHubClient;
    use crate::report::{render_issues, write_issues};
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Instant;

    enum Canned {
        Issues(Value),
        Status(u16),
        Garbage,
    }

    /// Serves canned listings keyed by `owner/repo` and records the call order.
    struct CannedSource {
        responses: HashMap<String, Canned>,
        calls: Mutex<Vec<String>>,
    }

    impl CannedSource {
        fn new(responses: Vec<(&str, Canned)>) -> Self {
            Self {
                responses: responses
                    .into_iter()
                    .map(|(name, canned)| (name.to_string(), canned))
                    .collect(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl IssueSource for CannedSource {
        async fn fetch_issues(
            &self,
            descriptor: &RepositoryDescriptor,
        ) -> Result<Vec<RawIssue>, FetchError> {
            let name = descriptor.full_name();
            self.calls.lock().unwrap().push(name.clone());

            match self.responses.get(&name) {
                Some(Canned::Issues(body)) => Ok(serde_json::from_value(body.clone())?),
                Some(Canned::Status(code)) => Err(FetchError::Remote {
                    status: StatusCode::from_u16(*code).unwrap(),
                }),
                Some(Canned::Garbage) | None => {
                    Err(serde_json::from_str::<Vec<RawIssue>>("not json").unwrap_err().into())
                }
            }
        }
    }

    fn acme() -> RepositoryDescriptor {
        RepositoryDescriptor::new("acme", "widget", "good first issue", &["x", "y"])
    }

    fn other() -> RepositoryDescriptor {
        RepositoryDescriptor::new("other", "gadget", "Good First Issue", &["z"])
    }

    fn issue(id: u64, number: u64) -> Value {
        json!({
            "id": id,
            "title": format!("T{id}"),
            "html_url": format!("u{id}"),
            "created_at": "2024-01-01T00:00:00Z",
            "number": number,
        })
    }

    #[tokio::test]
    async fn test_plain_issue_kept_pull_request_dropped() {
        let source = CannedSource::new(vec![(
            "acme/widget",
            Canned::Issues(json!([
                issue(1, 5),
                {"id": 2, "title": "T2", "html_url": "u2",
                 "created_at": "2024-01-01T00:00:00Z", "number": 6, "pull_request": {}}
            ])),
        )]);

        let aggregator = IssueAggregator::new(vec![acme()], source, Duration::ZERO);
        let harvest = aggregator.collect().await;

        assert_eq!(
            serde_json::to_value(&harvest.records).unwrap(),
            json!([{
                "id": 1,
                "title": "T1",
                "url": "u1",
                "repository": "acme/widget",
                "tags": ["x", "y"],
                "created_at": "2024-01-01T00:00:00Z",
                "number": 5
            }])
        );
        assert_eq!(harvest.summary.received, 2);
        assert_eq!(harvest.summary.records, 1);
        assert!(harvest.failures.is_empty());
    }

    #[tokio::test]
    async fn test_failure_is_isolated() {
        let source = CannedSource::new(vec![
            ("acme/widget", Canned::Status(500)),
            (
                "other/gadget",
                Canned::Issues(json!([issue(10, 1), issue(11, 2), issue(12, 3)])),
            ),
        ]);

        let aggregator = IssueAggregator::new(vec![acme(), other()], source, Duration::ZERO);
        let harvest = aggregator.collect().await;

        assert_eq!(harvest.records.len(), 3);
        for record in &harvest.records {
            assert_eq!(record.repository, "other/gadget");
            assert_eq!(record.tags, vec!["z"]);
        }
        assert_eq!(harvest.summary.succeeded, 1);
        assert_eq!(harvest.summary.failed, 1);
        assert_eq!(harvest.failures.len(), 1);
        assert_eq!(harvest.failures[0].0, "acme/widget");
        assert!(harvest.failures[0].1.contains("500"));
    }

    #[tokio::test]
    async fn test_every_repository_visited_once_in_order() {
        let source = CannedSource::new(vec![
            ("acme/widget", Canned::Garbage),
            ("other/gadget", Canned::Issues(json!([issue(20, 1)]))),
        ]);
        let third = RepositoryDescriptor::new("third", "thing", "help wanted", &[]);

        let aggregator = IssueAggregator::new(vec![acme(), other(), third], source, Duration::ZERO);
        let outcomes = aggregator.run().await;

        assert_eq!(
            outcomes.iter().map(|o| o.repository()).collect::<Vec<_>>(),
            vec!["acme/widget", "other/gadget", "third/thing"]
        );
        assert!(matches!(
            outcomes[0],
            RepoOutcome::Failed {
                error: FetchError::Parse(_),
                ..
            }
        ));
        assert!(outcomes[1].error().is_none());
        assert_eq!(
            aggregator.source.calls(),
            vec!["acme/widget", "other/gadget", "third/thing"]
        );
    }

    #[tokio::test]
    async fn test_order_is_repository_then_response() {
        let source = CannedSource::new(vec![
            ("acme/widget", Canned::Issues(json!([issue(3, 30), issue(1, 10)]))),
            ("other/gadget", Canned::Issues(json!([issue(2, 20)]))),
        ]);

        let aggregator = IssueAggregator::new(vec![acme(), other()], source, Duration::ZERO);
        let harvest = aggregator.collect().await;

        let ids: Vec<u64> = harvest.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn test_no_repositories() {
        let source = CannedSource::new(vec![]);
        let aggregator = IssueAggregator::new(vec![], source, Duration::from_secs(10));
        let harvest = aggregator.collect().await;

        assert!(harvest.records.is_empty());
        assert_eq!(harvest.summary, RunSummary::default());

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("public").join("issues.json");
        write_issues(&output, &harvest.records).unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "[]\n");
    }

    #[tokio::test]
    async fn test_throttle_between_repositories() {
        let source = CannedSource::new(vec![
            ("acme/widget", Canned::Status(404)),
            ("other/gadget", Canned::Status(404)),
        ]);
        let third = RepositoryDescriptor::new("third", "thing", "help wanted", &[]);
        let throttle = Duration::from_millis(30);

        let aggregator = IssueAggregator::new(vec![acme(), other(), third], source, throttle);
        let started = Instant::now();
        aggregator.run().await;

        // Pauses happen after failures too.
        assert!(started.elapsed() >= throttle * 2);
    }

    #[tokio::test]
    async fn test_identical_responses_render_identically() {
        let build = || {
            CannedSource::new(vec![
                ("acme/widget", Canned::Issues(json!([issue(1, 5), issue(7, 9)]))),
                ("other/gadget", Canned::Status(502)),
            ])
        };

        let first = IssueAggregator::new(vec![acme(), other()], build(), Duration::ZERO)
            .collect()
            .await;
        let second = IssueAggregator::new(vec![acme(), other()], build(), Duration::ZERO)
            .collect()
            .await;

        assert_eq!(
            render_issues(&first.records).unwrap(),
            render_issues(&second.records).unwrap()
        );
    }

    #[tokio::test]
    async fn test_transport_failure_still_writes_empty_document() {
        let config = GitHubConfig {
            api_url: "http://127.0.0.1:1".to_string(),
            timeout_seconds: 5,
            delay_ms: 0,
            token: None,
        };
        let client = GitHubClient::new(&config).unwrap();
        let aggregator = IssueAggregator::new(vec![acme()], client, config.delay());

        let harvest = aggregator.collect().await;
        assert_eq!(harvest.summary.failed, 1);

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("public").join("issues.json");
        write_issues(&output, &harvest.records).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        let written: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(written, json!([]));
    }
}
