//! Configuration for the conversation store.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::StoreError;

/// Environment variable holding the backend base URL.
const SUPABASE_URL_ENV: &str = "SUPABASE_URL";
/// Environment variable holding the backend API key.
const SUPABASE_KEY_ENV: &str = "SUPABASE_KEY";
/// Environment variable overriding the conversation table name.
const TABLE_ENV: &str = "MEMOLINE_TABLE";
/// Environment variable selecting the query sort key.
const ORDER_BY_ENV: &str = "MEMOLINE_ORDER_BY";
/// Environment variable selecting the empty-result policy.
const EMPTY_RESULT_ENV: &str = "MEMOLINE_EMPTY_RESULT";

/// Configuration for the conversation store.
///
/// Read once at process start; the service has no hot reload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the backend project, without the REST path.
    pub base_url: String,
    /// API key sent as the `apikey` header and bearer token.
    pub api_key: String,
    /// Name of the conversation table.
    pub table: String,
    /// Sort key for the backing query (always descending).
    pub order_by: OrderBy,
    /// Behavior when a query matches no rows.
    pub empty_result: EmptyResult,
    /// Request timeout.
    pub request_timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            table: Self::DEFAULT_TABLE.to_string(),
            order_by: OrderBy::default(),
            empty_result: EmptyResult::default(),
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl StoreConfig {
    /// Default name of the conversation table.
    pub const DEFAULT_TABLE: &'static str = "conversationmemories";

    /// Create a config for the given backend with default settings.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Read the configuration from the environment.
    ///
    /// `SUPABASE_URL` and `SUPABASE_KEY` are required; the table name, sort
    /// key, and empty-result policy fall back to their defaults.
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or an optional one
    /// holds an unrecognized value.
    pub fn from_env() -> Result<Self, StoreError> {
        let base_url = std::env::var(SUPABASE_URL_ENV)
            .map_err(|_| StoreError::Config(format!("{SUPABASE_URL_ENV} is not set")))?;
        let api_key = std::env::var(SUPABASE_KEY_ENV)
            .map_err(|_| StoreError::Config(format!("{SUPABASE_KEY_ENV} is not set")))?;

        let mut config = Self::new(base_url, api_key);
        if let Ok(table) = std::env::var(TABLE_ENV) {
            config.table = table;
        }
        if let Ok(order_by) = std::env::var(ORDER_BY_ENV) {
            config.order_by = order_by.parse()?;
        }
        if let Ok(policy) = std::env::var(EMPTY_RESULT_ENV) {
            config.empty_result = policy.parse()?;
        }

        Ok(config)
    }

    /// Set the conversation table name.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Set the query sort key.
    #[must_use]
    pub const fn with_order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = order_by;
        self
    }

    /// Set the empty-result policy.
    #[must_use]
    pub const fn with_empty_result(mut self, policy: EmptyResult) -> Self {
        self.empty_result = policy;
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Sort key for the backing query.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    /// Order by the creation timestamp column (default).
    #[default]
    CreatedAt,
    /// Order by the numeric row identifier.
    Id,
}

impl OrderBy {
    /// Column name as it appears in the remote table.
    #[must_use]
    pub const fn column(&self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::Id => "id",
        }
    }
}

impl FromStr for OrderBy {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created_at" => Ok(Self::CreatedAt),
            "id" => Ok(Self::Id),
            other => Err(StoreError::Config(format!(
                "unknown sort key {other:?} (expected \"created_at\" or \"id\")"
            ))),
        }
    }
}

/// Behavior when a query matches no rows.
///
/// Applied inside the store so both endpoints share one policy.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyResult {
    /// Fail the request with a not-found error (default).
    #[default]
    NotFound,
    /// Succeed with an empty list.
    EmptyOk,
}

impl FromStr for EmptyResult {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_found" => Ok(Self::NotFound),
            "empty_ok" => Ok(Self::EmptyOk),
            other => Err(StoreError::Config(format!(
                "unknown empty-result policy {other:?} (expected \"not_found\" or \"empty_ok\")"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.table, StoreConfig::DEFAULT_TABLE);
        assert_eq!(config.order_by, OrderBy::CreatedAt);
        assert_eq!(config.empty_result, EmptyResult::NotFound);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_config_builder() {
        let config = StoreConfig::new("https://demo.supabase.co", "service-key")
            .with_table("othermemories")
            .with_order_by(OrderBy::Id)
            .with_empty_result(EmptyResult::EmptyOk)
            .with_request_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "https://demo.supabase.co");
        assert_eq!(config.api_key, "service-key");
        assert_eq!(config.table, "othermemories");
        assert_eq!(config.order_by, OrderBy::Id);
        assert_eq!(config.empty_result, EmptyResult::EmptyOk);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_order_by_parses_known_keys() {
        assert_eq!("created_at".parse::<OrderBy>().ok(), Some(OrderBy::CreatedAt));
        assert_eq!("id".parse::<OrderBy>().ok(), Some(OrderBy::Id));
        assert!("updated_at".parse::<OrderBy>().is_err());
    }

    #[test]
    fn test_order_by_column_names() {
        assert_eq!(OrderBy::CreatedAt.column(), "created_at");
        assert_eq!(OrderBy::Id.column(), "id");
    }

    #[test]
    fn test_empty_result_parses_known_policies() {
        assert_eq!("not_found".parse::<EmptyResult>().ok(), Some(EmptyResult::NotFound));
        assert_eq!("empty_ok".parse::<EmptyResult>().ok(), Some(EmptyResult::EmptyOk));
        assert!("silent".parse::<EmptyResult>().is_err());
    }
}
