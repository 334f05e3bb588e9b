//! Record types for the poetry service API and field fallback resolution.
//!
//! The service reports the same facts under different keys depending on the
//! endpoint: a poem's title may live in `title` or `fullTitle`, and a poet's
//! name can surface in four places across two payload shapes. Rather than
//! relying on loose truthiness chains, each record exposes a resolution
//! method built on [`first_filled`], an explicit ordered candidate list where
//! the first non-empty value wins.
//!
//! # Examples
//!
//! ```
//! use divan::poem::{first_filled, UNKNOWN_POET};
//!
//! let name = first_filled([None, Some("  "), Some("حافظ")], UNKNOWN_POET);
//! assert_eq!(name, "حافظ");
//! ```

use super::*;

/// Separator placed between hemistich texts when a verse is flattened to a
/// single display line.
pub const HEMISTICH_SEPARATOR: &str = "   ";

/// Default label when no poet name can be resolved.
pub const UNKNOWN_POET: &str = "شاعر ناشناس";

/// Default label when no poem title can be resolved.
pub const UNTITLED: &str = "بدون عنوان";

/// A poem as reported by the service.
///
/// The plain poem lookup fills `title`/`poetName`/`category`; the random-poem
/// endpoint additionally carries `fullTitle` and `sections`. Every field
/// beyond the id is optional and resolved through a fallback chain.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoemRecord {
  /// Numeric poem id, the key for the verse lookup.
  pub id:         i64,
  /// Short title of the poem.
  pub title:      Option<String>,
  /// Full title including the collection path, present on random lookups.
  pub full_title: Option<String>,
  /// Poet name as reported directly on the poem.
  pub poet_name:  Option<String>,
  /// Category subtree carrying the poet summary.
  pub category:   Option<CategoryRecord>,
  /// Poem sections, an alternate location for the poet id.
  pub sections:   Option<Vec<SectionRecord>>,
}

/// Category wrapper around the poet summary.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRecord {
  /// Poet summary for the category this poem belongs to.
  pub poet: Option<PoetSummary>,
}

/// Poet id and name as nested inside a poem's category.
#[derive(Debug, Clone, Deserialize)]
pub struct PoetSummary {
  /// Numeric poet id.
  pub id:   Option<i64>,
  /// Poet display name.
  pub name: Option<String>,
}

/// One section of a poem; only the poet id is of interest here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRecord {
  /// Poet id owning this section.
  pub poet_id: Option<i64>,
}

/// A single verse of a poem.
///
/// Either pre-split into hemistichs or a plain text blob; a verse carrying
/// neither flattens to an empty line and is dropped by the formatter.
#[derive(Debug, Clone, Deserialize)]
pub struct VerseRecord {
  /// Hemistich halves, when the service pre-splits the verse.
  pub hemistichs: Option<Vec<Hemistich>>,
  /// Plain verse text, used when no hemistichs are present.
  pub text:       Option<String>,
}

/// One half-line of a couplet verse.
#[derive(Debug, Clone, Deserialize)]
pub struct Hemistich {
  /// Text of this half-line.
  pub text: Option<String>,
}

/// A poet as reported by the poet lookup endpoint.
///
/// The name may appear nested under `poet` or at the top level, as a full
/// name or a nickname.
#[derive(Debug, Clone, Deserialize)]
pub struct PoetRecord {
  /// Nested poet details, the preferred location.
  pub poet:     Option<PoetDetails>,
  /// Top-level name fallback.
  pub name:     Option<String>,
  /// Top-level nickname fallback.
  pub nickname: Option<String>,
}

/// Nested name fields of a poet record.
#[derive(Debug, Clone, Deserialize)]
pub struct PoetDetails {
  /// Poet's full name.
  pub name:     Option<String>,
  /// Poet's pen name.
  pub nickname: Option<String>,
}

/// Returns the first candidate that is non-empty after trimming, or the
/// default.
///
/// This is the explicit form of the `a || b || default` chains the service's
/// payloads invite: candidates are tried in the order given, whitespace-only
/// values are treated as absent.
pub fn first_filled<'a, I>(candidates: I, default: &str) -> String
where I: IntoIterator<Item = Option<&'a str>> {
  candidates
    .into_iter()
    .flatten()
    .map(str::trim)
    .find(|value| !value.is_empty())
    .unwrap_or(default)
    .to_owned()
}

impl PoemRecord {
  /// Title for a poem fetched by path: `title`, then `fullTitle`, then the
  /// untitled label.
  pub fn display_title(&self) -> String {
    first_filled([self.title.as_deref(), self.full_title.as_deref()], UNTITLED)
  }

  /// Title for a random poem: the full path-like title is preferred there.
  pub fn random_title(&self) -> String {
    first_filled([self.full_title.as_deref(), self.title.as_deref()], UNTITLED)
  }

  /// Poet label resolved from the poem itself: `category.poet.name`, then
  /// `poetName`, then the unknown-poet label.
  pub fn poet_label(&self) -> String {
    first_filled(
      [
        self.category.as_ref().and_then(|c| c.poet.as_ref()).and_then(|p| p.name.as_deref()),
        self.poet_name.as_deref(),
      ],
      UNKNOWN_POET,
    )
  }

  /// Poet id for the enrichment lookup: `category.poet.id`, else the first
  /// section's `poetId`.
  pub fn poet_id(&self) -> Option<i64> {
    self
      .category
      .as_ref()
      .and_then(|c| c.poet.as_ref())
      .and_then(|p| p.id)
      .or_else(|| self.sections.as_ref().and_then(|s| s.first()).and_then(|s| s.poet_id))
  }
}

impl VerseRecord {
  /// Flattens this verse to a single display line.
  ///
  /// Hemistich texts joined by [`HEMISTICH_SEPARATOR`] when present,
  /// otherwise the plain text, otherwise empty.
  pub fn display_line(&self) -> String {
    match &self.hemistichs {
      Some(hemistichs) if !hemistichs.is_empty() => hemistichs
        .iter()
        .map(|h| h.text.as_deref().unwrap_or(""))
        .collect::<Vec<_>>()
        .join(HEMISTICH_SEPARATOR),
      _ => self.text.clone().unwrap_or_default(),
    }
  }
}

impl PoetRecord {
  /// Display name: `poet.name`, `poet.nickname`, `name`, `nickname`, first
  /// non-empty wins, defaulting to the unknown-poet label.
  pub fn display_name(&self) -> String {
    first_filled(
      [
        self.poet.as_ref().and_then(|p| p.name.as_deref()),
        self.poet.as_ref().and_then(|p| p.nickname.as_deref()),
        self.name.as_deref(),
        self.nickname.as_deref(),
      ],
      UNKNOWN_POET,
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn first_filled_prefers_earlier_candidates() {
    assert_eq!(first_filled([Some("a"), Some("b")], "d"), "a");
    assert_eq!(first_filled([None, Some("b")], "d"), "b");
    assert_eq!(first_filled([None, None], "d"), "d");
  }

  #[test]
  fn first_filled_treats_whitespace_as_absent() {
    assert_eq!(first_filled([Some("   "), Some(" b ")], "d"), "b");
    assert_eq!(first_filled([Some(""), Some("\t")], "d"), "d");
  }

  #[test]
  fn poem_title_falls_back_through_full_title() {
    let poem: PoemRecord =
      serde_json::from_str(r#"{"id": 1, "fullTitle": "حافظ » غزلیات » غزل ۱"}"#).unwrap();
    assert_eq!(poem.display_title(), "حافظ » غزلیات » غزل ۱");

    let untitled: PoemRecord = serde_json::from_str(r#"{"id": 2}"#).unwrap();
    assert_eq!(untitled.display_title(), UNTITLED);
  }

  #[test]
  fn random_title_prefers_full_title() {
    let poem: PoemRecord =
      serde_json::from_str(r#"{"id": 1, "title": "غزل ۱", "fullTitle": "حافظ » غزل ۱"}"#).unwrap();
    assert_eq!(poem.random_title(), "حافظ » غزل ۱");
    assert_eq!(poem.display_title(), "غزل ۱");
  }

  #[test]
  fn poet_label_resolves_category_before_poet_name() {
    let poem: PoemRecord = serde_json::from_str(
      r#"{"id": 1, "poetName": "سعدی", "category": {"poet": {"id": 2, "name": "حافظ"}}}"#,
    )
    .unwrap();
    assert_eq!(poem.poet_label(), "حافظ");

    let bare: PoemRecord = serde_json::from_str(r#"{"id": 1, "poetName": "سعدی"}"#).unwrap();
    assert_eq!(bare.poet_label(), "سعدی");

    let unknown: PoemRecord = serde_json::from_str(r#"{"id": 1}"#).unwrap();
    assert_eq!(unknown.poet_label(), UNKNOWN_POET);
  }

  #[test]
  fn poet_id_checks_category_then_sections() {
    let via_category: PoemRecord = serde_json::from_str(
      r#"{"id": 1, "category": {"poet": {"id": 7, "name": "x"}}, "sections": [{"poetId": 9}]}"#,
    )
    .unwrap();
    assert_eq!(via_category.poet_id(), Some(7));

    let via_sections: PoemRecord =
      serde_json::from_str(r#"{"id": 1, "sections": [{"poetId": 9}]}"#).unwrap();
    assert_eq!(via_sections.poet_id(), Some(9));

    let missing: PoemRecord = serde_json::from_str(r#"{"id": 1, "sections": []}"#).unwrap();
    assert_eq!(missing.poet_id(), None);
  }

  #[test]
  fn verse_joins_hemistichs_with_fixed_separator() {
    let verse: VerseRecord =
      serde_json::from_str(r#"{"hemistichs": [{"text": "الف"}, {"text": "ب"}]}"#).unwrap();
    assert_eq!(verse.display_line(), "الف   ب");
  }

  #[test]
  fn verse_without_hemistichs_uses_plain_text() {
    let verse: VerseRecord = serde_json::from_str(r#"{"text": "ج"}"#).unwrap();
    assert_eq!(verse.display_line(), "ج");

    let empty: VerseRecord = serde_json::from_str(r#"{}"#).unwrap();
    assert_eq!(empty.display_line(), "");
  }

  #[test]
  fn poet_name_resolution_order() {
    let nested: PoetRecord = serde_json::from_str(
      r#"{"poet": {"name": "خواجه حافظ", "nickname": "حافظ"}, "name": "x", "nickname": "y"}"#,
    )
    .unwrap();
    assert_eq!(nested.display_name(), "خواجه حافظ");

    let nickname_only: PoetRecord =
      serde_json::from_str(r#"{"poet": {"nickname": "حافظ"}}"#).unwrap();
    assert_eq!(nickname_only.display_name(), "حافظ");

    let top_level: PoetRecord = serde_json::from_str(r#"{"nickname": "سعدی"}"#).unwrap();
    assert_eq!(top_level.display_name(), "سعدی");

    let empty: PoetRecord = serde_json::from_str(r#"{}"#).unwrap();
    assert_eq!(empty.display_name(), UNKNOWN_POET);
  }
}
