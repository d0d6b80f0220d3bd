/// Environment variable holding the GitHub personal access token
pub const ENV_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Check for a GitHub token in the GITHUB_TOKEN environment variable.
/// Returns Some(token) if the env var is set and non-empty, None otherwise.
pub fn get_token_from_env() -> Option<String> {
    std::env::var(ENV_TOKEN_VAR)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
