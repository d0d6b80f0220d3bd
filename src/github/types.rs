use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// Pull request fields read from the list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPullRequest {
    pub number: u64,
    pub title: Option<String>,
    pub state: Option<String>,
    pub url: Option<String>, // API link, e.g. https://api.github.com/repos/o/r/pulls/7
    pub user: Option<ApiUser>,
    pub created_at: DateTime<Utc>,
}

impl ApiPullRequest {
    pub fn author(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.login.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiUser {
    pub login: String,
}

/// A submitted (or pending) review on a pull request
#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    pub user: Option<ApiUser>,
    pub submitted_at: Option<DateTime<Utc>>, // None while the review is pending
}

impl Review {
    pub fn reviewer(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.login.as_str())
    }
}

/// The first review counted for a pull request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstReview {
    pub submitted_at: DateTime<Utc>,
    pub time_to_first_review: Duration,
}

/// One output row: a pull request and its time to first review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRecord {
    pub repo: String,           // "owner/name" format
    pub created_at: DateTime<Utc>,
    pub url: String,
    pub title: String,
    pub username: String,
    pub state: String,          // as reported by GitHub, e.g. "open", "closed"
    pub first_review: Option<FirstReview>,
}

impl PullRequestRecord {
    pub fn first_review_at(&self) -> Option<DateTime<Utc>> {
        self.first_review.map(|r| r.submitted_at)
    }

    pub fn time_to_first_review(&self) -> Option<Duration> {
        self.first_review.map(|r| r.time_to_first_review)
    }
}
