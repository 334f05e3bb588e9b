//! Error types for the divan CLI.

use divan::error::DivanError;
use thiserror::Error;

/// Error type alias used for the CLI crate.
pub type Result<T> = core::result::Result<T, DivandError>;

/// Errors surfaced by CLI workflows.
///
/// Library errors pass through unchanged; the CLI adds only the failure
/// modes of its own surface (files it reads and writes, the interactive
/// prompts).
#[derive(Error, Debug)]
pub enum DivandError {
  /// Any error from the divan library.
  #[error(transparent)]
  Divan(#[from] DivanError),

  /// A file the CLI was asked to read or write was not accessible.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// An interactive prompt failed.
  #[error(transparent)]
  Interaction(#[from] dialoguer::Error),
}
