//! HTTP client for the Ganjoor poetry service.
//!
//! Four read-only JSON lookups, each a single GET with no retry and no
//! caching:
//!
//! - poem by site path
//! - verses of a poem by id
//! - a random poem (extended payload)
//! - a poet by id
//!
//! Non-success statuses become [`DivanError::Http`]; bodies that fail to
//! decode become [`DivanError::Parse`]. The base URL is injectable so tests
//! can point the client at a fixture server.
//!
//! # Examples
//!
//! ```no_run
//! use divan::client::GanjoorClient;
//!
//! # async fn example() -> Result<(), divan::error::DivanError> {
//! let client = GanjoorClient::new();
//! let poem = client.poem_by_path("/hafez/ghazal/sh1").await?;
//! let verses = client.verses(poem.id).await?;
//! # Ok(())
//! # }
//! ```

use serde::de::DeserializeOwned;

use super::*;
use crate::poem::{PoemRecord, PoetRecord, VerseRecord};

/// Base URL of the public poetry service.
pub const DEFAULT_BASE_URL: &str = "https://api.ganjoor.net/api/ganjoor";

/// Client for the poetry service.
///
/// Cheap to clone; the inner `reqwest::Client` pools connections.
#[derive(Debug, Clone)]
pub struct GanjoorClient {
  /// Shared HTTP client.
  http:     reqwest::Client,
  /// Service base URL, overridable for tests.
  base_url: String,
}

impl Default for GanjoorClient {
  fn default() -> Self { Self::new() }
}

impl GanjoorClient {
  /// Creates a client against the public service.
  pub fn new() -> Self { Self::with_base_url(DEFAULT_BASE_URL) }

  /// Creates a client against the given base URL.
  pub fn with_base_url(base_url: impl Into<String>) -> Self {
    Self { http: reqwest::Client::new(), base_url: base_url.into() }
  }

  /// Fetches a poem record by its site path (e.g. `/hafez/ghazal/sh1`).
  ///
  /// The path travels URL-encoded in the `url` query parameter.
  pub async fn poem_by_path(&self, path: &str) -> Result<PoemRecord> {
    let endpoint = format!("{}/poem", self.base_url);
    debug!("fetching poem for path {path} via {endpoint}");
    let response = self.http.get(&endpoint).query(&[("url", path)]).send().await?;
    Self::decode(response).await
  }

  /// Fetches the ordered verses of a poem.
  pub async fn verses(&self, poem_id: i64) -> Result<Vec<VerseRecord>> {
    let endpoint = format!("{}/poem/{poem_id}/verses", self.base_url);
    debug!("fetching verses via {endpoint}");
    let response = self.http.get(&endpoint).send().await?;
    Self::decode(response).await
  }

  /// Fetches a random poem.
  ///
  /// The payload is the extended shape carrying `category` and `sections`,
  /// the two places a poet id may hide.
  pub async fn random_poem(&self) -> Result<PoemRecord> {
    let endpoint = format!("{}/poem/random", self.base_url);
    debug!("fetching a random poem via {endpoint}");
    let response = self.http.get(&endpoint).send().await?;
    Self::decode(response).await
  }

  /// Fetches a poet record by id.
  ///
  /// Callers running the random-poem flow treat a failure here as a
  /// soft enrichment miss, not a workflow error.
  pub async fn poet(&self, poet_id: i64) -> Result<PoetRecord> {
    let endpoint = format!("{}/poet/{poet_id}", self.base_url);
    debug!("fetching poet via {endpoint}");
    let response = self.http.get(&endpoint).send().await?;
    Self::decode(response).await
  }

  /// Checks the status and decodes the JSON body.
  async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
      return Err(DivanError::Http { status: status.as_u16() });
    }

    let data = response.bytes().await?;
    trace!("service response: {}", String::from_utf8_lossy(&data));
    Ok(serde_json::from_slice(&data)?)
  }
}
