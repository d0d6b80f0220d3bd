pub mod client;
pub mod pulls;
pub mod repo;
pub mod types;

pub use client::create_client;
pub use pulls::{list_pull_requests, list_reviews, query_pull_requests, ListOptions, Listing};
pub use repo::RepoId;
pub use types::{FirstReview, PullRequestRecord, Review};
