//! Authentication against Google Cloud using Application Default Credentials.
//!
//! Credential discovery is delegated to `gcp_auth`, which checks in order:
//! a service account JSON file named by `GOOGLE_APPLICATION_CREDENTIALS`,
//! user credentials from `gcloud auth application-default login`, and the
//! GCE metadata server. Tokens are cached and refreshed by the provider;
//! callers should not hold on to them.

use std::sync::Arc;

use gcp_auth::TokenProvider;
use tracing::debug;

use crate::error::AuthError;

/// OAuth2 scope required by the Cloud TTS API.
pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

enum TokenSource {
    /// Production token provider from gcp_auth
    Adc(Arc<dyn TokenProvider>),
    /// Fixed token for tests
    #[cfg(test)]
    Fixed(String),
}

/// Token source for Google Cloud API calls.
pub struct AuthProvider {
    source: TokenSource,
}

impl AuthProvider {
    /// Discover Application Default Credentials.
    ///
    /// # Errors
    /// Returns [`AuthError::NotConfigured`] if no credentials can be found.
    pub async fn new() -> Result<Self, AuthError> {
        let provider = gcp_auth::provider().await.map_err(|e| {
            debug!("ADC discovery failed: {e}");
            AuthError::NotConfigured
        })?;

        Ok(Self {
            source: TokenSource::Adc(provider),
        })
    }

    /// Auth provider that always returns `token`, for tests.
    #[cfg(test)]
    pub fn fixed(token: &str) -> Self {
        Self {
            source: TokenSource::Fixed(token.to_string()),
        }
    }

    /// Get a valid access token for the `cloud-platform` scope.
    ///
    /// # Errors
    /// Returns [`AuthError::RefreshFailed`] if the token cannot be obtained
    /// or refreshed.
    pub async fn token(&self) -> Result<String, AuthError> {
        match &self.source {
            TokenSource::Adc(provider) => {
                let token = provider
                    .token(&[CLOUD_PLATFORM_SCOPE])
                    .await
                    .map_err(|e| AuthError::RefreshFailed(e.to_string()))?;

                Ok(token.as_str().to_string())
            }
            #[cfg(test)]
            TokenSource::Fixed(token) => Ok(token.clone()),
        }
    }
}
