use chrono::{DateTime, Utc};

use crate::github::types::{FirstReview, Review};

/// Find the first review not written by the pull request's author.
///
/// Reviews are scanned in the order GitHub returned them and the scan stops
/// at the first match, so this is the first qualifying review encountered,
/// not necessarily the earliest one. Pending reviews carry no submission
/// time and are skipped. A review whose user is gone (deleted account)
/// counts as someone else's.
pub fn first_review(
    created_at: DateTime<Utc>,
    author: &str,
    reviews: &[Review],
) -> Option<FirstReview> {
    reviews
        .iter()
        .filter(|review| review.reviewer() != Some(author))
        .find_map(|review| review.submitted_at)
        .map(|submitted_at| FirstReview {
            submitted_at,
            time_to_first_review: submitted_at - created_at,
        })
}
