//! Heuristic poem extraction from arbitrary page text.
//!
//! When no structured API data is available, the only input is the rendered
//! text of some HTML document. [`extract_poem_lines`] scans that text line by
//! line and guesses which lines are poetry: breadcrumbs are skipped, a fixed
//! set of footer/UI markers terminates the scan, and a line qualifies as
//! poetry when it carries Persian/Arabic script and a plausible length. Once
//! poetry has been found, substantial non-matching lines are kept as
//! continuation.
//!
//! This is a best-effort, no-failure-mode heuristic: it never errors, and an
//! empty result is a valid answer for a page without recognizable poetry.
//!
//! All marker strings and thresholds live in [`ExtractorConfig`], which is
//! TOML-deserializable so tests and callers can substitute fixtures:
//!
//! ```toml
//! brand_marker = "گنجور"
//! terminators  = ["حاشیه"]
//! min_line_chars = 10
//! ```

use std::{ops::RangeInclusive, path::Path};

use scraper::{ElementRef, Html, Selector};

use super::*;
use crate::poem::{UNKNOWN_POET, UNTITLED};

/// Marker strings and thresholds driving the extraction heuristics.
///
/// The defaults mirror the source site's page furniture; every field can be
/// overridden from a TOML file via [`ExtractorConfig::from_file`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
  /// Site brand string; together with the nav separator it marks breadcrumb
  /// lines, which are skipped.
  pub brand_marker:           String,
  /// Navigation separator glyph, also the segment separator in page titles.
  pub nav_separator:          String,
  /// Footer/UI marker strings; a line containing any of them ends the scan.
  pub terminators:            Vec<String>,
  /// Lines shorter than this (in chars) are skipped outright.
  pub min_line_chars:         usize,
  /// After poetry has been found, non-matching lines longer than this are
  /// collected as continuation.
  pub continuation_min_chars: usize,
  /// Minimum char count for a line to qualify as poetry (inclusive).
  pub poetry_min_chars:       usize,
  /// Maximum char count for a poetry line (exclusive).
  pub poetry_max_chars:       usize,
  /// Script range a poetry line must touch at least once.
  pub script_range:           RangeInclusive<char>,
  /// Common verb endings hinting at a rhyme word. Diagnostic only: traced,
  /// never used to gate inclusion.
  pub rhyme_markers:          Vec<String>,
}

impl Default for ExtractorConfig {
  fn default() -> Self {
    Self {
      brand_marker:           "گنجور".to_owned(),
      nav_separator:          "»".to_owned(),
      terminators:            ["با انتخاب متن", "هوش مصنوعی", "پیشنهاد تصاویر", "حاشیه"]
        .map(String::from)
        .to_vec(),
      min_line_chars:         10,
      continuation_min_chars: 20,
      poetry_min_chars:       20,
      poetry_max_chars:       200,
      script_range:           '\u{0600}'..='\u{06FF}',
      rhyme_markers:          ["رفت", "شد", "است"].map(String::from).to_vec(),
    }
  }
}

impl ExtractorConfig {
  /// Loads heuristics from a TOML string; absent keys keep their defaults.
  pub fn from_toml_str(content: &str) -> Result<Self> { Ok(toml::from_str(content)?) }

  /// Loads heuristics from a TOML file.
  pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
    let content = std::fs::read_to_string(path)?;
    Self::from_toml_str(&content)
  }

  /// A breadcrumb carries both the brand marker and the nav separator.
  fn is_breadcrumb(&self, line: &str) -> bool {
    line.contains(&self.brand_marker) && line.contains(&self.nav_separator)
  }

  /// Whether this line ends the scan.
  fn is_terminator(&self, line: &str) -> bool {
    self.terminators.iter().any(|marker| line.contains(marker.as_str()))
  }

  /// Whether this line reads as poetry: at least one script-range character
  /// and a char count within the configured window.
  pub fn is_poetry_line(&self, line: &str) -> bool {
    let chars = line.chars().count();
    chars >= self.poetry_min_chars
      && chars < self.poetry_max_chars
      && line.chars().any(|c| self.script_range.contains(&c))
  }

  /// Whether the line ends in one of the common rhyme-word verb endings.
  /// Informational only.
  pub fn has_rhyme_marker(&self, line: &str) -> bool {
    self.rhyme_markers.iter().any(|marker| line.contains(marker.as_str()))
  }
}

/// Scans rendered page text and collects the lines that look like poetry.
///
/// Lines are trimmed and empties dropped before the scan. Breadcrumbs are
/// skipped, terminator markers end the scan entirely, short lines are
/// skipped; once a poetry line has been found, substantial non-matching
/// lines are collected as continuation until the scan terminates.
pub fn extract_poem_lines(text: &str, config: &ExtractorConfig) -> Vec<String> {
  let mut collected = Vec::new();
  let mut found_poetry = false;

  for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
    if config.is_breadcrumb(line) {
      continue;
    }
    if config.is_terminator(line) {
      trace!("scan terminated by marker line: {line}");
      break;
    }
    if line.chars().count() < config.min_line_chars {
      continue;
    }

    if config.is_poetry_line(line) {
      if config.has_rhyme_marker(line) {
        trace!("candidate line carries a rhyme marker: {line}");
      }
      collected.push(line.to_owned());
      found_poetry = true;
    } else if found_poetry && line.chars().count() > config.continuation_min_chars {
      collected.push(line.to_owned());
    }
  }

  collected
}

/// Renders an HTML document's visible text, one text node per line.
///
/// Scripts, styles and noscript content are skipped. The result is the input
/// [`extract_poem_lines`] expects; it approximates what a reader of the page
/// would actually see.
pub fn visible_text(html: &str) -> String {
  let document = Html::parse_document(html);
  let mut out = String::new();

  if let Ok(selector) = Selector::parse("body") {
    if let Some(body) = document.select(&selector).next() {
      collect_text(body, &mut out);
      return out;
    }
  }

  collect_text(document.root_element(), &mut out);
  out
}

/// Appends the visible text nodes beneath `element` to `out`.
fn collect_text(element: ElementRef<'_>, out: &mut String) {
  if matches!(element.value().name(), "script" | "style" | "noscript") {
    return;
  }
  for child in element.children() {
    if let Some(text) = child.value().as_text() {
      let trimmed = text.trim();
      if !trimmed.is_empty() {
        out.push_str(trimmed);
        out.push('\n');
      }
    } else if let Some(child_element) = ElementRef::wrap(child) {
      collect_text(child_element, out);
    }
  }
}

/// Reads the `<title>` of an HTML document, if it has a non-empty one.
pub fn document_title(html: &str) -> Option<String> {
  let document = Html::parse_document(html);
  let selector = Selector::parse("title").ok()?;
  document
    .select(&selector)
    .next()
    .map(|title| title.text().collect::<String>().trim().to_owned())
    .filter(|title| !title.is_empty())
}

/// Splits a document title into poet name and poem title.
///
/// The source site's titles read `گنجور » حافظ » غزلیات » غزل ۱`: segment 1
/// is the poet, the last segment is the poem title. Without the separator
/// (or with blank segments) the defaults apply.
pub fn title_parts(title: &str, nav_separator: &str) -> (String, String) {
  if !title.contains(nav_separator) {
    return (UNKNOWN_POET.to_owned(), UNTITLED.to_owned());
  }

  let segments: Vec<&str> = title.split(nav_separator).collect();
  let poet = segments.get(1).map(|s| s.trim()).filter(|s| !s.is_empty()).unwrap_or(UNKNOWN_POET);
  let poem = segments.last().map(|s| s.trim()).filter(|s| !s.is_empty()).unwrap_or(UNTITLED);
  (poet.to_owned(), poem.to_owned())
}
