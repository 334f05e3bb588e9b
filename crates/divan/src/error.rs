//! Error types for the divan library.
//!
//! One enum covers every failure mode in the pipeline: input validation,
//! network transport, service responses, response decoding, and the small
//! amount of filesystem access the theme preference needs.
//!
//! # Examples
//!
//! ```
//! use divan::{error::DivanError, link};
//!
//! match link::poem_path("https://example.com/not-a-poem") {
//!   Err(DivanError::InvalidLink) => println!("not a poem page link"),
//!   Err(e) => println!("other error: {}", e),
//!   Ok(path) => println!("poem path: {}", path),
//! }
//! ```

use thiserror::Error;

/// Error type alias used for the [`divan`](crate) crate.
pub type Result<T> = core::result::Result<T, DivanError>;

/// Errors that can occur while fetching, validating, or rendering poems.
///
/// Validation variants (`InvalidLink`, `EmptyPoemText`) are produced before
/// any network call is attempted. `Http` and `Network` are the two faces of a
/// failed service call and are handled identically by callers; `Parse` means
/// the service answered with something that is not the expected JSON.
#[derive(Error, Debug)]
pub enum DivanError {
  /// The supplied link does not point to a poem page on the source site.
  ///
  /// Produced by [`crate::link::poem_path`] when the expected domain segment
  /// is missing. No network call is made for an invalid link.
  #[error("the link does not point to a poem on ganjoor.net")]
  InvalidLink,

  /// A manually entered poem had an empty body.
  ///
  /// Whitespace-only input counts as empty. Nothing is rendered.
  #[error("the poem body is empty")]
  EmptyPoemText,

  /// The poetry service responded with a non-success status code.
  ///
  /// The request is never retried; the status is surfaced to the user.
  #[error("the poetry service responded with status {status}")]
  Http {
    /// HTTP status code returned by the service.
    status: u16,
  },

  /// A network request failed at the transport level.
  ///
  /// Unreachable host, timeout, TLS failure. Treated the same as [`Http`]
  /// for user display.
  ///
  /// [`Http`]: DivanError::Http
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// The service response body was not the JSON shape we expect.
  #[error("failed to decode the service response: {0}")]
  Parse(#[from] serde_json::Error),

  /// A filesystem operation failed.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// An extractor heuristics file could not be parsed.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// Configuration problem described by the message.
  #[error("{0}")]
  Config(String),
}
