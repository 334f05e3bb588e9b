//! Verse flattening and couplet layout.
//!
//! Two pure transforms sit between the API records and the rendered page:
//! [`flatten`] turns verse records into an ordered sequence of non-blank
//! display lines, and [`layout`] groups those lines two at a time into
//! [`VerseBlock`]s. The pairing is purely positional (lines i and i+1 form a
//! couplet, a trailing unpaired line is centered) and carries no linguistic
//! meaning.
//!
//! # Examples
//!
//! ```
//! use divan::format::{layout, VerseBlock};
//!
//! let lines = vec!["A".to_string(), "B".to_string(), "C".to_string()];
//! let blocks = layout(&lines);
//! assert_eq!(blocks, vec![
//!   VerseBlock::Couplet { left: "A".into(), right: "B".into() },
//!   VerseBlock::Single("C".into()),
//! ]);
//! ```

use super::*;
use crate::poem::VerseRecord;

/// One rendering unit of the two-column layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerseBlock {
  /// Two consecutive display lines shown side by side.
  Couplet {
    /// First line of the pair.
    left:  String,
    /// Second line of the pair.
    right: String,
  },
  /// A trailing line without a partner, shown centered.
  Single(String),
}

/// Flattens verse records into display lines.
///
/// Each verse becomes its [`display_line`](VerseRecord::display_line); lines
/// that are empty after trimming are dropped, the relative order of the rest
/// is preserved. The output is never longer than the input.
pub fn flatten(verses: &[VerseRecord]) -> Vec<String> {
  verses.iter().map(VerseRecord::display_line).filter(|line| !line.trim().is_empty()).collect()
}

/// Groups display lines into verse blocks, two at a time.
pub fn layout(lines: &[String]) -> Vec<VerseBlock> {
  let mut blocks = Vec::with_capacity(lines.len().div_ceil(2));
  let mut lines = lines.iter();
  while let Some(left) = lines.next() {
    match lines.next() {
      Some(right) => blocks.push(VerseBlock::Couplet { left: left.clone(), right: right.clone() }),
      None => blocks.push(VerseBlock::Single(left.clone())),
    }
  }
  blocks
}

/// Splits verse blocks back into their display lines.
///
/// The inverse of [`layout`] for even-length inputs; re-running [`layout`]
/// on the result reproduces the same blocks.
pub fn split_blocks(blocks: &[VerseBlock]) -> Vec<String> {
  let mut lines = Vec::new();
  for block in blocks {
    match block {
      VerseBlock::Couplet { left, right } => {
        lines.push(left.clone());
        lines.push(right.clone());
      },
      VerseBlock::Single(line) => lines.push(line.clone()),
    }
  }
  lines
}

/// Splits a manually entered poem body into display lines.
///
/// The body's own line breaks are the segmentation; there is no structured
/// verse source to flatten. A body that is empty after trimming is a
/// validation error and nothing is rendered.
pub fn body_lines(body: &str) -> Result<Vec<String>> {
  if body.trim().is_empty() {
    return Err(DivanError::EmptyPoemText);
  }
  Ok(body.lines().map(str::trim).filter(|line| !line.is_empty()).map(str::to_owned).collect())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn verses(json: &str) -> Vec<VerseRecord> { serde_json::from_str(json).unwrap() }

  #[test]
  fn flatten_joins_hemistichs_and_drops_blanks() {
    let verses = verses(
      r#"[
        {"hemistichs": [{"text": "الف"}, {"text": "ب"}]},
        {"text": "   "},
        {"text": "ج"},
        {}
      ]"#,
    );
    assert_eq!(flatten(&verses), vec!["الف   ب".to_string(), "ج".to_string()]);
  }

  #[test]
  fn flatten_preserves_order_and_never_grows() {
    let verses = verses(r#"[{"text": "۱"}, {"text": "۲"}, {"text": "۳"}]"#);
    let lines = flatten(&verses);
    assert_eq!(lines, vec!["۱", "۲", "۳"]);
    assert!(lines.len() <= verses.len());
  }

  #[test]
  fn layout_pairs_consecutive_lines() {
    let lines: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
    assert_eq!(layout(&lines), vec![
      VerseBlock::Couplet { left: "A".into(), right: "B".into() },
      VerseBlock::Couplet { left: "C".into(), right: "D".into() },
    ]);
  }

  #[test]
  fn layout_centers_a_trailing_singleton() {
    let lines: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
    assert_eq!(layout(&lines), vec![
      VerseBlock::Couplet { left: "A".into(), right: "B".into() },
      VerseBlock::Single("C".into()),
    ]);
  }

  #[test]
  fn layout_pairs_regardless_of_source_structure() {
    // A hemistich-joined line and a plain-text line still pair positionally.
    let verses = verses(r#"[{"hemistichs": [{"text": "الف"}, {"text": "ب"}]}, {"text": "ج"}]"#);
    let lines = flatten(&verses);
    assert_eq!(lines, vec!["الف   ب", "ج"]);
    assert_eq!(layout(&lines), vec![VerseBlock::Couplet {
      left:  "الف   ب".into(),
      right: "ج".into(),
    }]);
  }

  #[test]
  fn layout_round_trips_through_split_blocks() {
    let lines: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
    let blocks = layout(&lines);
    assert_eq!(layout(&split_blocks(&blocks)), blocks);
    assert_eq!(split_blocks(&blocks), lines);
  }

  #[test]
  fn empty_input_yields_no_blocks() {
    assert!(layout(&[]).is_empty());
  }

  #[test]
  fn body_lines_rejects_empty_bodies() {
    assert!(matches!(body_lines(""), Err(DivanError::EmptyPoemText)));
    assert!(matches!(body_lines("  \n\t\n "), Err(DivanError::EmptyPoemText)));
  }

  #[test]
  fn body_lines_keeps_existing_breaks() {
    assert_eq!(body_lines("line1\nline2\n\nline3").unwrap(), vec!["line1", "line2", "line3"]);
  }
}
