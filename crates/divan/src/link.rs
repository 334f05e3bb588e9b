//! Poem page link validation.
//!
//! A user-supplied link is valid when it contains the source site's domain
//! followed by a poem path; everything up to a fragment or query string is
//! the path the API's poem lookup expects, with a leading slash restored.

use lazy_static::lazy_static;
use regex::Regex;

use super::*;

lazy_static! {
  /// Matches `ganjoor.net/<path>`, capturing the path up to `#` or `?`.
  static ref POEM_LINK: Regex =
    Regex::new(r"(?i)ganjoor\.net/([^#?]+)").expect("poem link pattern is valid");
}

/// Resolves a poem page link to the site path the API expects.
///
/// Returns the captured path prefixed with `/`; any input without the
/// expected domain segment is rejected with [`DivanError::InvalidLink`]
/// before any network call is attempted.
///
/// # Examples
///
/// ```
/// use divan::link::poem_path;
///
/// assert_eq!(poem_path("https://ganjoor.net/hafez/ghazal/sh1").unwrap(), "/hafez/ghazal/sh1");
/// assert!(poem_path("https://example.com/hafez").is_err());
/// ```
pub fn poem_path(url: &str) -> Result<String> {
  POEM_LINK
    .captures(url.trim())
    .and_then(|caps| caps.get(1))
    .map(|path| format!("/{}", path.as_str()))
    .ok_or(DivanError::InvalidLink)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_poem_links_and_strips_fragments() {
    assert_eq!(poem_path("https://ganjoor.net/hafez/ghazal/sh255").unwrap(), "/hafez/ghazal/sh255");
    assert_eq!(poem_path("http://GANJOOR.net/saadi/golestan").unwrap(), "/saadi/golestan");
    assert_eq!(poem_path("https://ganjoor.net/hafez/sh1#bn3").unwrap(), "/hafez/sh1");
    assert_eq!(poem_path("https://ganjoor.net/hafez/sh1?a=b").unwrap(), "/hafez/sh1");
  }

  #[test]
  fn rejects_links_outside_the_source_domain() {
    for input in ["", "hafez/ghazal", "https://example.com/hafez", "ganjoor dot net"] {
      assert!(matches!(poem_path(input), Err(DivanError::InvalidLink)), "accepted {input:?}");
    }
  }

  #[test]
  fn rejects_bare_domain_without_path() {
    assert!(poem_path("https://ganjoor.net").is_err());
  }
}
