use octocrab::{Octocrab, Page};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::{DEFAULT_MAX_PAGES, DEFAULT_PER_PAGE};
use crate::error::{Operation, ReportError};
use crate::github::repo::RepoId;
use crate::github::types::{ApiPullRequest, PullRequestRecord, Review};
use crate::review::first_review;

/// Page sizes and page limit applied to the listing calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    pub per_page: u8,
    /// Page size for review listings; None leaves GitHub's default (30)
    pub review_per_page: Option<u8>,
    /// Pages to fetch per listing; 0 means follow `next` links to the end
    pub max_pages: u32,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            review_per_page: None,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl ListOptions {
    fn allows_another_page(&self, fetched: u32) -> bool {
        self.max_pages == 0 || fetched < self.max_pages
    }
}

/// Items gathered from one or more pages of a listing
#[derive(Debug)]
pub struct Listing<T> {
    pub items: Vec<T>,
    /// True when more pages existed but the page limit stopped the walk
    pub truncated: bool,
}

async fn fetch_listing<T: DeserializeOwned>(
    client: &Octocrab,
    route: &str,
    filters: &[(&str, &str)],
    per_page: Option<u8>,
    options: &ListOptions,
) -> octocrab::Result<Listing<T>> {
    let per_page = per_page.map(|n| n.to_string());
    let mut params = filters.to_vec();
    if let Some(per_page) = &per_page {
        params.push(("per_page", per_page.as_str()));
    }
    params.push(("page", "1"));

    let mut page: Page<T> = client.get(route, Some(&params)).await?;
    let mut items = Vec::new();
    let mut fetched = 1;

    loop {
        items.append(&mut page.items);
        if page.next.is_none() {
            return Ok(Listing { items, truncated: false });
        }
        if !options.allows_another_page(fetched) {
            return Ok(Listing { items, truncated: true });
        }
        match client.get_page::<T>(&page.next).await? {
            Some(next) => {
                page = next;
                fetched += 1;
            }
            None => return Ok(Listing { items, truncated: false }),
        }
    }
}

/// List pull requests in every state for a repository
pub async fn list_pull_requests(
    client: &Octocrab,
    repo: &RepoId,
    options: &ListOptions,
) -> Result<Listing<ApiPullRequest>, ReportError> {
    fetch_listing(
        client,
        &repo.pulls_path(),
        &[("state", "all")],
        Some(options.per_page),
        options,
    )
        .await
        .map_err(|source| ReportError::UpstreamRequestFailed {
            operation: Operation::ListPullRequests,
            target: repo.to_string(),
            source,
        })
}

/// List the reviews of one pull request
pub async fn list_reviews(
    client: &Octocrab,
    repo: &RepoId,
    number: u64,
    options: &ListOptions,
) -> Result<Listing<Review>, ReportError> {
    fetch_listing(
        client,
        &repo.reviews_path(number),
        &[],
        options.review_per_page,
        options,
    )
        .await
        .map_err(|source| ReportError::UpstreamRequestFailed {
            operation: Operation::ListReviews,
            target: format!("{}#{}", repo, number),
            source,
        })
}

/// Fetch a repository's pull requests and compute each one's first review
///
/// Records come back in the order GitHub listed the pull requests. Reviews
/// are fetched one pull request at a time and the first failure aborts the
/// whole repository.
pub async fn query_pull_requests(
    client: &Octocrab,
    repo: &RepoId,
    options: &ListOptions,
) -> Result<Vec<PullRequestRecord>, ReportError> {
    let prs = list_pull_requests(client, repo, options).await?;
    if prs.truncated {
        warn!(repo = %repo, fetched = prs.items.len(), "more pull requests exist beyond the page limit");
    }

    let mut records = Vec::with_capacity(prs.items.len());
    for pr in prs.items {
        let reviews = list_reviews(client, repo, pr.number, options).await?;
        if reviews.truncated {
            warn!(repo = %repo, number = pr.number, "more reviews exist beyond the page limit");
        }

        let author = pr.author().unwrap_or_default().to_string();
        let first = first_review(pr.created_at, &author, &reviews.items);
        debug!(
            repo = %repo,
            number = pr.number,
            reviews = reviews.items.len(),
            reviewed = first.is_some(),
            "processed pull request"
        );

        records.push(PullRequestRecord {
            repo: repo.to_string(),
            created_at: pr.created_at,
            url: pr.url.unwrap_or_default(),
            title: pr.title.unwrap_or_default(),
            username: author,
            state: pr.state.unwrap_or_default(),
            first_review: first,
        });
    }

    Ok(records)
}
