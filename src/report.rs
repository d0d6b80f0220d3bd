use octocrab::Octocrab;
use std::time::Instant;
use tracing::info;

use crate::error::ReportError;
use crate::github::{query_pull_requests, ListOptions, PullRequestRecord, RepoId};

/// Fetch and enrich pull requests for every repository, in the given order.
///
/// Repositories are processed one after another and their records are
/// concatenated. The first failure aborts the run and nothing collected so
/// far is returned.
pub async fn collect_records(
    client: &Octocrab,
    repos: &[RepoId],
    options: &ListOptions,
) -> Result<Vec<PullRequestRecord>, ReportError> {
    let mut all_records = Vec::new();

    for repo in repos {
        let repo_start = Instant::now();
        let records = query_pull_requests(client, repo, options).await?;
        let reviewed = records.iter().filter(|r| r.first_review.is_some()).count();
        info!(
            repo = %repo,
            pull_requests = records.len(),
            reviewed,
            elapsed = ?repo_start.elapsed(),
            "collected pull requests"
        );
        all_records.extend(records);
    }

    Ok(all_records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::github::create_client;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> Octocrab {
        create_client(&ApiConfig {
            api_url: server.uri(),
            token: None,
        })
        .unwrap()
    }

    async fn mount_repo(server: &MockServer, repo: &str, numbers: &[u64]) {
        let prs: Vec<serde_json::Value> = numbers
            .iter()
            .map(|n| {
                json!({
                    "number": n,
                    "title": format!("{} #{}", repo, n),
                    "state": "closed",
                    "url": format!("https://api.github.com/repos/{}/pulls/{}", repo, n),
                    "user": { "login": "author" },
                    "created_at": "2024-05-01T00:00:00Z"
                })
            })
            .collect();
        Mock::given(method("GET"))
            .and(path(format!("/repos/{}/pulls", repo)))
            .respond_with(ResponseTemplate::new(200).set_body_json(prs))
            .mount(server)
            .await;
        for n in numbers {
            Mock::given(method("GET"))
                .and(path(format!("/repos/{}/pulls/{}/reviews", repo, n)))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                    { "user": { "login": "reviewer" }, "submitted_at": "2024-05-01T06:30:00Z" }
                ])))
                .mount(server)
                .await;
        }
    }

    #[tokio::test]
    async fn test_collects_repositories_in_order() {
        let server = MockServer::start().await;
        mount_repo(&server, "acme/api", &[12, 11]).await;
        mount_repo(&server, "acme/web", &[3]).await;

        let repos = RepoId::parse_list("acme/api,acme/web").unwrap();
        let records = collect_records(&client_for(&server), &repos, &ListOptions::default())
            .await
            .unwrap();

        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["acme/api #12", "acme/api #11", "acme/web #3"]);
        assert_eq!(records[2].repo, "acme/web");
        assert!(records
            .iter()
            .all(|r| r.time_to_first_review() == Some(chrono::Duration::minutes(390))));
    }

    #[tokio::test]
    async fn test_failing_repository_aborts_run() {
        let server = MockServer::start().await;
        mount_repo(&server, "acme/api", &[1]).await;
        Mock::given(method("GET"))
            .and(path("/repos/acme/missing/pulls"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "Not Found",
                "documentation_url": "https://docs.github.com/rest"
            })))
            .mount(&server)
            .await;
        mount_repo(&server, "acme/web", &[]).await;

        let repos = RepoId::parse_list("acme/api,acme/missing,acme/web").unwrap();
        let err = collect_records(&client_for(&server), &repos, &ListOptions::default())
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "listing pull requests for acme/missing failed"
        );
    }
}
