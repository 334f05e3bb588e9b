//! Persian poetry retrieval and couplet pretty-printing library.
//!
//! `divan` fetches poems from the public Ganjoor API and reshapes them into a
//! print-friendly two-column (hemistich) layout. It provides:
//!
//! - An API client for the four poem/poet lookups the service offers
//! - Link validation for poem pages on the source site
//! - Verse flattening and positional couplet layout
//! - A best-effort heuristic extractor for poems buried in arbitrary HTML
//! - Rendering to a standalone printable page or a terminal layout
//! - A single persisted theme preference for generated pages
//!
//! # Getting Started
//!
//! ```no_run
//! use divan::{client::GanjoorClient, format, link, prelude::*};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!   // Resolve a poem page link to the path the API expects
//!   let path = link::poem_path("https://ganjoor.net/hafez/ghazal/sh1")?;
//!
//!   // Fetch the poem and its verses
//!   let client = GanjoorClient::new();
//!   let poem = client.poem_by_path(&path).await?;
//!   let verses = client.verses(poem.id).await?;
//!
//!   // Flatten to display lines and group into couplets
//!   let lines = format::flatten(&verses);
//!   let blocks = format::layout(&lines);
//!   println!("{} couplet blocks", blocks.len());
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`client`]: HTTP client for the poetry service
//! - [`poem`]: API record types and fallback-chain field resolution
//! - [`link`]: poem page link validation
//! - [`format`]: verse flattening and couplet layout
//! - [`extract`]: heuristic poem extraction from rendered page text
//! - [`page`]: printable HTML and terminal rendering
//! - [`theme`]: persisted theme preference for generated pages
//! - [`prelude`]: common types for ergonomic imports
//!
//! # Design Philosophy
//!
//! The library keeps every transform after the network boundary pure: verse
//! records go in, display lines and couplet blocks come out, and rendering is
//! a deterministic function of those blocks plus the theme preference. A
//! failed core fetch aborts the whole pipeline rather than rendering partial
//! data; only the poet-name enrichment during the random-poem flow is allowed
//! to fail softly.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use serde::Deserialize;
use tracing::{debug, trace, warn};

pub mod client;
pub mod error;
pub mod extract;
pub mod format;
pub mod link;
pub mod page;
pub mod poem;
pub mod theme;

use crate::error::*;

/// Common types for ergonomic imports.
///
/// A single glob import brings in the error type and `Result` alias used
/// throughout the crate:
///
/// ```
/// use divan::prelude::*;
///
/// fn check(link: &str) -> Result<String> { divan::link::poem_path(link) }
/// ```
pub mod prelude {
  pub use crate::error::{DivanError, Result};
}
