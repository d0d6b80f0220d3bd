use serde::Deserialize;

/// Optional settings file. Every field falls back to a built-in default.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// GitHub API base, e.g. "https://github.example.com/api/v3"
    pub api_url: Option<String>,
    /// Items requested per page (1-100)
    pub per_page: Option<u8>,
    /// Pages followed per listing; 0 follows every page
    pub max_pages: Option<u32>,
}
