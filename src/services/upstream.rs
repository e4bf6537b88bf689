//! HTTP client for the upstream country-data API.
//!
//! Every call goes to the network: no caching, no retries, and no timeout
//! other than the transport default.

use crate::{error::AppError, models::country::Country};
use reqwest::StatusCode;
use url::Url;

/// Fields requested from upstream. `/all` rejects requests without a
/// projection, and it keeps payloads small.
const FIELDS: &str = "name,capital,population,region,languages,area";

/// Client for the restcountries-style API rooted at `base_url`.
///
/// Cheap to clone: `reqwest::Client` shares its connection pool internally.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: Url,
}

impl UpstreamClient {
    /// Create a client for the API at `base_url` (e.g. `https://restcountries.com/v3.1`).
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL that can carry
    /// path segments.
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    /// Same as [`UpstreamClient::new`] but with a caller-configured `reqwest::Client`.
    pub fn with_http_client(
        http: reqwest::Client,
        base_url: &str,
    ) -> Result<Self, url::ParseError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase);
        }

        Ok(Self { http, base_url })
    }

    /// Fetch every country.
    ///
    /// # Errors
    ///
    /// - `UpstreamUnavailable`: request failed or returned a non-success status
    /// - `Decode`: body is not a JSON array of countries
    pub async fn fetch_all(&self) -> Result<Vec<Country>, AppError> {
        let url = self.endpoint(&["all"]);
        self.get_countries(url, false).await
    }

    /// Fetch countries whose name matches `name`.
    ///
    /// Upstream matching is fuzzy, so several records may come back. An
    /// upstream 404 means "no match" and yields an empty list.
    ///
    /// # Errors
    ///
    /// Same as [`UpstreamClient::fetch_all`].
    pub async fn fetch_by_name(&self, name: &str) -> Result<Vec<Country>, AppError> {
        let url = self.endpoint(&["name", name]);
        self.get_countries(url, true).await
    }

    /// Build `{base}/{segments...}?fields=...`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.query_pairs_mut().append_pair("fields", FIELDS);
        url
    }

    async fn get_countries(
        &self,
        url: Url,
        not_found_is_empty: bool,
    ) -> Result<Vec<Country>, AppError> {
        tracing::debug!("GET {}", url);

        let response = self.http.get(url.clone()).send().await.map_err(|e| {
            tracing::error!("Error making the request to {}: {}", url, e);
            AppError::from(e)
        })?;

        let status = response.status();
        if not_found_is_empty && status == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            tracing::error!("Upstream {} returned {}", url, status);
            return Err(AppError::UpstreamUnavailable(format!(
                "upstream returned {status}"
            )));
        }

        response.json::<Vec<Country>>().await.map_err(|e| {
            tracing::error!("Error decoding JSON from {}: {}", url, e);
            AppError::from(e)
        })
    }
}
