//! Read-only access to the remote conversation table.
//!
//! The backend is a hosted Supabase table reached over its REST endpoint.
//! [`SupabaseStore`] is the single remote binding: it owns one HTTP client,
//! issues ordered `select=*` queries (optionally filtered to one sender),
//! and applies the configured empty-result policy. The transform that
//! shapes flat rows into per-sender views lives in [`grouping`].

pub mod config;
pub mod error;
pub mod grouping;
pub mod supabase;
pub mod types;

pub use config::{EmptyResult, OrderBy, StoreConfig};
pub use error::StoreError;
pub use grouping::{group_by_sender, unique_senders};
pub use types::{Conversation, SenderGroup};

use std::future::Future;
use std::pin::Pin;

/// Boxed future type for store operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Read access to the stored conversation records.
///
/// Request handlers depend on this trait rather than on the concrete
/// backend binding, so tests can substitute an in-memory store.
pub trait ConversationStore: Send + Sync {
    /// Fetch all conversation rows, newest first, optionally restricted to
    /// one sender (exact, case-sensitive match).
    ///
    /// Under the [`EmptyResult::NotFound`] policy an empty result set is an
    /// error whose message names the sender filter when one was given;
    /// under [`EmptyResult::EmptyOk`] it is an empty `Ok`.
    fn fetch(&self, sender: Option<&str>) -> StoreFuture<'_, StoreResult<Vec<Conversation>>>;
}

/// Supabase-backed conversation store.
///
/// Constructed once at startup and shared across requests; holds no state
/// beyond the HTTP client and its immutable configuration.
pub struct SupabaseStore {
    client: reqwest::Client,
    config: StoreConfig,
}

impl SupabaseStore {
    /// Create a store from the given configuration.
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        url::Url::parse(&config.base_url)?;
        let client = Self::build_client(&config)?;
        Ok(Self { client, config })
    }

    /// Build an HTTP client carrying the backend credentials and timeouts.
    fn build_client(config: &StoreConfig) -> Result<reqwest::Client, StoreError> {
        use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

        let mut api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| StoreError::Config("API key is not a valid header value".to_string()))?;
        api_key.set_sensitive(true);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| StoreError::Config("API key is not a valid header value".to_string()))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);

        reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| StoreError::HttpClient(e.to_string()))
    }
}

impl ConversationStore for SupabaseStore {
    fn fetch(&self, sender: Option<&str>) -> StoreFuture<'_, StoreResult<Vec<Conversation>>> {
        let sender = sender.map(str::to_owned);
        Box::pin(async move {
            let rows = supabase::fetch_rows(&self.client, &self.config, sender.as_deref()).await?;
            tracing::debug!("fetched {} conversation rows", rows.len());

            if rows.is_empty() && self.config.empty_result == EmptyResult::NotFound {
                return Err(match sender {
                    Some(s) => StoreError::NoConversationsForSender(s),
                    None => StoreError::NoConversations,
                });
            }

            Ok(rows)
        })
    }
}
