//! Status surface and user interaction seam.
//!
//! Workflows never print directly: they describe what happened through
//! [`ResponseContent`] and an implementation of [`UserInteraction`] decides
//! how to show it. The CLI implementation styles messages for the terminal;
//! tests substitute a recording implementation to observe a workflow without
//! a live surface.

use console::style;
use dialoguer::{Confirm, Input};

use super::*;

/// Prefix for in-progress status messages
pub static WORKING_PREFIX: &str = "» ";
/// Prefix for success messages
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for error messages
pub static ERROR_PREFIX: &str = "✗ ";
/// Prefix for information messages
pub static INFO_PREFIX: &str = "ℹ ";
/// Prefix for warning messages
pub static WARNING_PREFIX: &str = "! ";

/// One unit of workflow output.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// A workflow step is underway (the loading state).
  Working(&'a str),
  /// The workflow finished successfully.
  Success(&'a str),
  /// Neutral information.
  Info(&'a str),
  /// Something degraded but not fatal.
  Warning(&'a str),
  /// A fully rendered poem.
  Poem(&'a str),
  /// The workflow failed.
  Error(DivandError),
}

/// The seam between workflows and whatever surface shows their output.
pub trait UserInteraction {
  /// Asks a yes/no question.
  fn confirm(&self, message: &str) -> Result<bool>;
  /// Asks for a line of input.
  fn prompt(&self, message: &str) -> Result<String>;
  /// Shows one unit of workflow output.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

/// Terminal implementation of [`UserInteraction`].
pub struct CliInteraction;

impl UserInteraction for CliInteraction {
  fn confirm(&self, message: &str) -> Result<bool> {
    Ok(Confirm::new().with_prompt(message).default(true).interact()?)
  }

  fn prompt(&self, message: &str) -> Result<String> {
    Ok(Input::<String>::new().with_prompt(message).allow_empty(true).interact_text()?)
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    match content {
      ResponseContent::Working(message) => println!("{}{message}", style(WORKING_PREFIX).cyan()),
      ResponseContent::Success(message) => println!("{}{message}", style(SUCCESS_PREFIX).green()),
      ResponseContent::Info(message) => println!("{}{message}", style(INFO_PREFIX).blue()),
      ResponseContent::Warning(message) => println!("{}{message}", style(WARNING_PREFIX).yellow()),
      ResponseContent::Poem(text) => println!("{text}"),
      ResponseContent::Error(error) => eprintln!("{}{error}", style(ERROR_PREFIX).red()),
    }
    Ok(())
  }
}
