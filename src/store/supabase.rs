//! Supabase REST request building and execution.
//!
//! The backend is reached through its PostgREST endpoint:
//! `GET {base}/rest/v1/{table}?select=*&order=<key>.desc[&sender=eq.<value>]`
//! authenticated with the project API key (attached as default headers by
//! the store's HTTP client).

use reqwest::StatusCode;
use url::Url;

use super::config::StoreConfig;
use super::error::StoreError;
use super::types::Conversation;

/// Fetch the conversation rows, optionally restricted to one sender,
/// ordered descending by the configured key.
///
/// The whole result set is returned in one response; the service does no
/// pagination or row limiting.
///
/// # Errors
/// Returns an error if the request fails, the backend rejects it, or the
/// response body does not decode as conversation rows.
pub async fn fetch_rows(
    client: &reqwest::Client,
    config: &StoreConfig,
    sender: Option<&str>,
) -> Result<Vec<Conversation>, StoreError> {
    let url = build_query_url(config, sender)?;

    let response = client.get(url).send().await?;
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(StoreError::AccessDenied(
            "backend rejected the API key".to_string(),
        ));
    }

    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(StoreError::Backend {
            status: status.as_u16(),
            message,
        });
    }

    let rows: Vec<Conversation> = response.json().await?;
    Ok(rows)
}

/// Build the REST query URL for the conversation table.
///
/// Query values are percent-encoded by the URL serializer, so senders like
/// `+1555` travel as `eq.%2B1555` and match exactly on the backend.
fn build_query_url(config: &StoreConfig, sender: Option<&str>) -> Result<Url, StoreError> {
    let mut url = Url::parse(&config.base_url)?;
    url.path_segments_mut()
        .map_err(|_| StoreError::Config("backend URL cannot be a base".to_string()))?
        .pop_if_empty()
        .extend(["rest", "v1", config.table.as_str()]);

    {
        let mut params = url.query_pairs_mut();
        params.append_pair("select", "*");
        params.append_pair("order", &format!("{}.desc", config.order_by.column()));
        if let Some(sender) = sender {
            params.append_pair("sender", &format!("eq.{sender}"));
        }
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::config::OrderBy;

    fn config() -> StoreConfig {
        StoreConfig::new("https://demo.supabase.co", "service-key")
    }

    fn build(config: &StoreConfig, sender: Option<&str>) -> String {
        build_query_url(config, sender)
            .map(String::from)
            .unwrap_or_default()
    }

    #[test]
    fn test_build_query_url_unfiltered() {
        let url = build(&config(), None);

        assert!(url.starts_with("https://demo.supabase.co/rest/v1/conversationmemories?"));
        assert!(url.contains("select=*"));
        assert!(url.contains("order=created_at.desc"));
        assert!(!url.contains("sender="));
    }

    #[test]
    fn test_build_query_url_encodes_the_sender_filter() {
        let url = build(&config(), Some("+15551234"));
        assert!(url.contains("sender=eq.%2B15551234"));
    }

    #[test]
    fn test_build_query_url_respects_the_sort_key() {
        let url = build(&config().with_order_by(OrderBy::Id), None);
        assert!(url.contains("order=id.desc"));
    }

    #[test]
    fn test_build_query_url_tolerates_trailing_slash() {
        let url = build(&StoreConfig::new("https://demo.supabase.co/", "k"), None);
        assert!(url.starts_with("https://demo.supabase.co/rest/v1/conversationmemories?"));
    }

    #[test]
    fn test_build_query_url_uses_the_configured_table() {
        let url = build(&config().with_table("archivedmemories"), None);
        assert!(url.contains("/rest/v1/archivedmemories?"));
    }
}
