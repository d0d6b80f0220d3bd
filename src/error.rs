//! Error taxonomy for a report run.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which GitHub listing call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListPullRequests,
    ListReviews,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::ListPullRequests => write!(f, "listing pull requests"),
            Operation::ListReviews => write!(f, "listing reviews"),
        }
    }
}

/// Errors that abort a report run.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A repository identifier was not of the form `owner/name`.
    #[error("invalid repository identifier '{input}': expected owner/name")]
    InvalidIdentifier { input: String },

    /// The configured API base URL could not be parsed.
    #[error("invalid GitHub API URL '{url}'")]
    InvalidApiUrl { url: String },

    /// The GitHub client could not be constructed.
    #[error("failed to create GitHub client")]
    Client {
        #[source]
        source: octocrab::Error,
    },

    /// A GitHub API call failed.
    #[error("{operation} for {target} failed")]
    UpstreamRequestFailed {
        operation: Operation,
        target: String,
        #[source]
        source: octocrab::Error,
    },

    /// The output file could not be opened or written.
    #[error("{action} {}", .path.display())]
    OutputIo {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_identifier_message_names_input() {
        let err = ReportError::InvalidIdentifier {
            input: "nope".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid repository identifier 'nope': expected owner/name"
        );
    }

    #[test]
    fn test_output_io_message_names_path() {
        let err = ReportError::OutputIo {
            action: "opening",
            path: PathBuf::from("/tmp/out.csv"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "opening /tmp/out.csv");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::ListPullRequests.to_string(), "listing pull requests");
        assert_eq!(Operation::ListReviews.to_string(), "listing reviews");
    }
}
