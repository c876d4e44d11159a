//! YouTube Data API v3 search client.
//!
//! One bounded GET per Generate action. Failures are classified, not
//! propagated: the service reporting a structured error body is an
//! [`FetchOutcome::ApiError`], anything transport-level (DNS, refused
//! connection, undecodable body) is a [`FetchOutcome::NetworkError`]. Neither
//! is retried.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::constants::constants;

/// Result of one fetch: combined title/description text, or a classified
/// failure carrying the message shown verbatim to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
  Text(String),
  ApiError(String),
  NetworkError(String),
}

// --- API response shapes ---

/// Search response body. The service returns either `error` or `items`;
/// both are optional here so any well-formed JSON body deserializes.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
  #[serde(default)]
  error: Option<ApiErrorBody>,
  #[serde(default)]
  items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
  #[serde(default)]
  message: String,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
  snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct Snippet {
  #[serde(default)]
  title: String,
  #[serde(default)]
  description: String,
}

// --- Fetching ---

/// Fetch up to `max_results` videos matching `query` and combine their titles
/// and descriptions into one space-separated, trimmed string.
///
/// The caller clamps `max_results` to the slider range. The body is parsed
/// regardless of HTTP status: the API reports quota and key problems as a
/// JSON error body on non-2xx responses.
pub async fn fetch_trending(client: &Client, api_key: &str, query: &str, max_results: u32) -> FetchOutcome {
  let max_results = max_results.to_string();
  let response = client
    .get(&constants().search_endpoint)
    .query(&[
      ("part", "snippet"),
      ("q", query),
      ("type", "video"),
      ("maxResults", max_results.as_str()),
      ("key", api_key),
    ])
    .send()
    .await;

  let response = match response {
    Ok(r) => r,
    Err(e) => {
      warn!(err = %e, query, "youtube: request failed");
      return FetchOutcome::NetworkError(e.to_string());
    }
  };

  let body: SearchResponse = match response.json().await {
    Ok(b) => b,
    Err(e) => {
      warn!(err = %e, query, "youtube: undecodable response body");
      return FetchOutcome::NetworkError(e.to_string());
    }
  };

  debug!(query, items = body.items.len(), has_error = body.error.is_some(), "youtube: response parsed");
  outcome_from_body(body)
}

/// Classify a parsed response body. Split out from the network call so the
/// API-error and concatenation paths are testable offline.
pub fn outcome_from_body(body: SearchResponse) -> FetchOutcome {
  if let Some(err) = body.error {
    return FetchOutcome::ApiError(err.message);
  }

  let mut text = String::new();
  for item in &body.items {
    text.push(' ');
    text.push_str(&item.snippet.title);
    text.push(' ');
    text.push_str(&item.snippet.description);
  }
  FetchOutcome::Text(text.trim().to_string())
}
