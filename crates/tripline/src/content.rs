//! Read-only content store boundary.
//!
//! The page content lives in a hosted headless CMS and is fetched with
//! a single query over its HTTP API. This module builds the query URL,
//! performs the fetch, and decodes the response envelope into
//! [`PageContent`]. Nothing here writes back.

use poll_promise::Promise;
use serde::Deserialize;
use tracing::error;

use crate::error::{Error, Result};
use crate::model::PageContent;

/// The one query this site runs: the home page document.
pub const HOME_PAGE_QUERY: &str = r#"*[_type == "homePage"][0]"#;

/// Connection parameters for the content store's query endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            project_id: "tripsite".to_owned(),
            dataset: "production".to_owned(),
            api_version: "v2024-01-01".to_owned(),
        }
    }
}

impl ContentConfig {
    /// Query endpoint URL for `query`, with the query string encoded.
    pub fn query_url(&self, query: &str) -> String {
        format!(
            "https://{}.api.sanity.io/{}/data/query/{}?query={}",
            self.project_id,
            self.api_version,
            self.dataset,
            urlencoding::encode(query)
        )
    }
}

/// Query responses arrive wrapped in a `result` envelope.
#[derive(Deserialize)]
struct QueryResponse {
    result: Option<PageContent>,
}

/// Decodes a raw query response body into the page record.
pub fn decode_page(bytes: &[u8]) -> Result<PageContent> {
    let response: QueryResponse = serde_json::from_slice(bytes)?;
    response
        .result
        .ok_or_else(|| Error::Fetch("query returned no result".to_owned()))
}

/// Fetches the home page document.
///
/// Returns immediately; the promise resolves once the request
/// completes. Decode failures and non-2xx statuses surface as errors on
/// the promise, never as panics.
pub fn fetch_home_page(config: &ContentConfig) -> Promise<Result<PageContent>> {
    let url = config.query_url(HOME_PAGE_QUERY);
    let (sender, promise) = Promise::new();
    let request = ehttp::Request::get(&url);

    ehttp::fetch(request, move |response| {
        let result = response.map_err(Error::Fetch).and_then(|resp| {
            if !resp.ok {
                return Err(Error::Fetch(format!(
                    "content query failed: {} {}",
                    resp.status, resp.status_text
                )));
            }
            decode_page(&resp.bytes)
        });

        if let Err(err) = &result {
            error!("home page fetch failed: {err}");
        }

        sender.send(result);
    });

    promise
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_query_url_is_encoded() {
        let config = ContentConfig::default();
        let url = config.query_url(HOME_PAGE_QUERY);
        assert_eq!(
            url,
            "https://tripsite.api.sanity.io/v2024-01-01/data/query/production\
             ?query=%2A%5B_type%20%3D%3D%20%22homePage%22%5D%5B0%5D"
        );
    }

    #[test]
    fn test_decode_page() {
        let body = r#"{
            "result": {
                "hero": { "title": "Summer in LA" },
                "itinerary": [
                    { "title": "Arrive", "date": "2025-07-10T16:00:00Z" }
                ]
            }
        }"#;
        let page = decode_page(body.as_bytes()).unwrap();
        assert_eq!(page.hero.title, "Summer in LA");
        assert_eq!(page.itinerary.len(), 1);
        assert_eq!(page.itinerary[0].title, "Arrive");
    }

    #[test]
    fn test_decode_missing_itinerary_defaults_empty() {
        let body = r#"{ "result": { "hero": { "title": "Summer in LA" } } }"#;
        let page = decode_page(body.as_bytes()).unwrap();
        assert!(page.itinerary.is_empty());
    }

    #[test]
    fn test_decode_null_result_is_an_error() {
        let err = decode_page(br#"{ "result": null }"#).unwrap_err();
        assert!(matches!(err, Error::Fetch(_)));
    }

    #[test]
    fn test_decode_malformed_body_is_an_error() {
        let err = decode_page(b"not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
