use http::Uri;
use octocrab::Octocrab;
use std::sync::Once;

use crate::config::ApiConfig;
use crate::error::ReportError;

static CRYPTO_PROVIDER: Once = Once::new();

/// Install the process-wide rustls provider once; rustls 0.23+ refuses to
/// build a TLS config without one
fn install_crypto_provider() {
    CRYPTO_PROVIDER.call_once(|| {
        if rustls::crypto::ring::default_provider()
            .install_default()
            .is_err()
        {
            tracing::debug!("rustls crypto provider was already installed");
        }
    });
}

/// Create a GitHub client for the configured API base
///
/// Authenticates with the personal access token when one is configured;
/// without a token requests are anonymous.
pub fn create_client(config: &ApiConfig) -> Result<Octocrab, ReportError> {
    install_crypto_provider();

    let invalid = || ReportError::InvalidApiUrl {
        url: config.api_url.clone(),
    };
    let base_uri: Uri = config.api_url.parse().map_err(|_| invalid())?;
    if base_uri.scheme().is_none() || base_uri.host().is_none() {
        return Err(invalid());
    }

    let mut builder = Octocrab::builder()
        .base_uri(base_uri)
        .map_err(|source| ReportError::Client { source })?;
    if let Some(token) = &config.token {
        builder = builder.personal_token(token.clone());
    }

    builder.build().map_err(|source| ReportError::Client { source })
}
