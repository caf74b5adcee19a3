//! Configuration for the `PostgREST` task store adapter.

use reqwest::Url;
use std::env;
use std::sync::Arc;
use thiserror::Error;

/// Environment variable naming the API base URL (for example
/// `https://example.supabase.co/rest/v1`).
pub const API_URL_ENV: &str = "DESKBOARD_API_URL";

/// Environment variable naming the static API key. The same key is sent as
/// both the `apikey` header and the bearer token; there is no per-user
/// session.
pub const API_KEY_ENV: &str = "DESKBOARD_API_KEY";

/// Connection settings for the remote task store.
#[derive(Debug, Clone)]
pub struct PostgrestConfig {
    base_url: Url,
    api_key: String,
}

impl PostgrestConfig {
    /// Creates a configuration from an already-parsed base URL and API key.
    #[must_use]
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Loads the configuration from [`API_URL_ENV`] and [`API_KEY_ENV`].
    ///
    /// # Errors
    ///
    /// Returns [`PostgrestConfigError::MissingVar`] when either variable is
    /// unset and [`PostgrestConfigError::InvalidBaseUrl`] when the URL does
    /// not parse.
    pub fn from_env() -> Result<Self, PostgrestConfigError> {
        let raw_url =
            env::var(API_URL_ENV).map_err(|_| PostgrestConfigError::MissingVar(API_URL_ENV))?;
        let api_key =
            env::var(API_KEY_ENV).map_err(|_| PostgrestConfigError::MissingVar(API_KEY_ENV))?;
        let base_url = Url::parse(&raw_url).map_err(|err| PostgrestConfigError::InvalidBaseUrl {
            value: raw_url,
            reason: Arc::new(err),
        })?;
        Ok(Self::new(base_url, api_key))
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the static API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

/// Errors raised while assembling the `PostgREST` adapter.
#[derive(Debug, Clone, Error)]
pub enum PostgrestConfigError {
    /// A required environment variable is unset.
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),

    /// The base URL did not parse.
    #[error("invalid base URL '{value}': {reason}")]
    InvalidBaseUrl {
        /// The rejected value.
        value: String,
        /// Parse failure reported by the URL parser.
        reason: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// The base URL cannot carry the `tasks` resource path segment.
    #[error("base URL cannot address the tasks resource: {0}")]
    UnsupportedBaseUrl(String),

    /// The API key contains bytes that are not valid in an HTTP header.
    #[error("API key is not a valid HTTP header value")]
    InvalidApiKey,

    /// The underlying HTTP client failed to build.
    #[error("failed to build HTTP client: {0}")]
    Client(Arc<dyn std::error::Error + Send + Sync>),
}

impl PostgrestConfigError {
    /// Wraps an HTTP client construction error.
    pub fn client(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Client(Arc::new(err))
    }
}
