use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use super::formatter::{format_duration, format_timestamp};
use crate::error::ReportError;
use crate::github::types::PullRequestRecord;

/// Column names, in output order
pub const HEADERS: [&str; 8] = [
    "Repo",
    "CreatedAt",
    "URL",
    "Title",
    "Username",
    "State",
    "FirstReviewCommentAt",
    "TimeToFirstReview",
];

fn row(record: &PullRequestRecord) -> [String; 8] {
    [
        record.repo.clone(),
        format_timestamp(record.created_at),
        record.url.clone(),
        record.title.clone(),
        record.username.clone(),
        record.state.clone(),
        record
            .first_review_at()
            .map(format_timestamp)
            .unwrap_or_default(),
        record
            .time_to_first_review()
            .map(format_duration)
            .unwrap_or_default(),
    ]
}

/// Write records as CSV
///
/// The header row is emitted together with the first record, so an empty
/// slice writes nothing at all. Unreviewed pull requests get empty
/// FirstReviewCommentAt and TimeToFirstReview cells.
pub fn write_records<W: Write>(writer: W, records: &[PullRequestRecord]) -> io::Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    for (idx, record) in records.iter().enumerate() {
        if idx == 0 {
            out.write_record(HEADERS).map_err(io::Error::from)?;
        }
        out.write_record(row(record)).map_err(io::Error::from)?;
    }
    out.flush()
}

/// Create (or truncate) the file at `path` and write records to it
pub fn write_csv(records: &[PullRequestRecord], path: &Path) -> Result<(), ReportError> {
    let file = File::create(path).map_err(|source| ReportError::OutputIo {
        action: "opening",
        path: path.to_path_buf(),
        source,
    })?;

    write_records(file, records).map_err(|source| ReportError::OutputIo {
        action: "writing",
        path: path.to_path_buf(),
        source,
    })
}
