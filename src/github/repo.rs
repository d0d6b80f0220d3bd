use std::fmt;

use crate::error::ReportError;

/// A repository identifier in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoId {
    owner: String,
    name: String,
}

impl RepoId {
    /// Parse an `owner/name` string
    ///
    /// Surrounding whitespace is ignored. Anything other than exactly two
    /// non-empty segments separated by a single `/` is rejected.
    pub fn parse(input: &str) -> Result<Self, ReportError> {
        let trimmed = input.trim();
        let invalid = || ReportError::InvalidIdentifier {
            input: input.to_string(),
        };

        let (owner, name) = trimmed.split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    /// Parse a comma-separated list of identifiers, failing on the first bad entry
    pub fn parse_list(list: &str) -> Result<Vec<Self>, ReportError> {
        list.split(',').map(Self::parse).collect()
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// API path of the repository's pull request collection
    pub(crate) fn pulls_path(&self) -> String {
        format!("/repos/{}/{}/pulls", self.owner, self.name)
    }

    /// API path of one pull request's reviews
    pub(crate) fn reviews_path(&self, number: u64) -> String {
        format!("/repos/{}/{}/pulls/{}/reviews", self.owner, self.name, number)
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
