//! Print-friendly rendering of couplet blocks.
//!
//! Two renditions of the same [`VerseBlock`] sequence: a standalone
//! right-to-left HTML page suitable for printing, and a plain-text layout for
//! the terminal. Both are deterministic functions of the blocks plus the
//! poet/title header; the HTML page additionally honors the persisted theme
//! preference.

use crate::{format::VerseBlock, theme::ThemePreference};

/// Gap between the two columns of the terminal layout.
const GUTTER: &str = "     ";

/// Renders a standalone printable HTML page.
///
/// Couplets become side-by-side hemistich cells, singles are centered. With
/// an explicit theme the page is fixed to that palette; with the preference
/// unset the palette follows the viewer's system setting via a
/// `prefers-color-scheme` media query.
pub fn render_html(poet: &str, title: &str, blocks: &[VerseBlock], theme: ThemePreference) -> String {
  let body_class = match theme {
    ThemePreference::Dark => " class=\"dark-theme\"",
    ThemePreference::Light | ThemePreference::Unset => "",
  };
  // Unset defers the choice to the system; an explicit light preference pins
  // the light palette even for dark-mode viewers.
  let auto_dark = match theme {
    ThemePreference::Unset => AUTO_DARK_CSS,
    ThemePreference::Dark | ThemePreference::Light => "",
  };

  let mut verses = String::new();
  for block in blocks {
    match block {
      VerseBlock::Couplet { left, right } => {
        verses.push_str("      <div class=\"verse\">\n        <div class=\"hemistichs\">\n");
        verses.push_str(&format!(
          "          <div class=\"hemistich\">{}</div>\n          <div class=\"hemistich\">{}</div>\n",
          escape_html(left),
          escape_html(right)
        ));
        verses.push_str("        </div>\n      </div>\n");
      },
      VerseBlock::Single(line) => {
        verses.push_str(&format!(
          "      <div class=\"verse\">\n        <div class=\"single\">{}</div>\n      </div>\n",
          escape_html(line)
        ));
      },
    }
  }

  format!(
    r#"<!DOCTYPE html>
<html dir="rtl" lang="fa">
<head>
  <meta charset="utf-8">
  <title>{title} - {poet}</title>
  <style>
{PAGE_CSS}{auto_dark}  </style>
</head>
<body{body_class}>
  <div class="poem">
    <h1 class="poem-title">{title}</h1>
    <h2 class="poet-name">{poet}</h2>
    <div class="poem-content">
{verses}    </div>
  </div>
</body>
</html>
"#,
    title = escape_html(title),
    poet = escape_html(poet),
  )
}

/// Base palette and couplet layout for the printable page.
const PAGE_CSS: &str = r#"    body { font-family: "Amiri", "Vazirmatn", serif; background: #fdfcf8; color: #222; margin: 2em; }
    body.dark-theme { background: #1e1e22; color: #e8e6e0; }
    .poem { max-width: 42em; margin: 0 auto; }
    .poem-title { text-align: center; font-size: 1.4em; }
    .poet-name { text-align: center; font-size: 1.1em; font-weight: normal; margin-bottom: 2em; }
    .verse { margin: 0.6em 0; }
    .hemistichs { display: flex; justify-content: space-between; gap: 3em; }
    .hemistich { white-space: nowrap; }
    .single { text-align: center; }
    @media print { body { background: #fff; color: #000; margin: 0; } }
"#;

/// Dark palette applied only when the viewer's system asks for it.
const AUTO_DARK_CSS: &str = r#"    @media (prefers-color-scheme: dark) {
      body { background: #1e1e22; color: #e8e6e0; }
    }
"#;

/// Renders the terminal layout.
///
/// Couplets are printed as two columns with the first hemistich padded to
/// the widest left column; a trailing single line is centered across the
/// full width.
pub fn render_text(poet: &str, title: &str, blocks: &[VerseBlock]) -> String {
  let left_width = blocks
    .iter()
    .map(|block| match block {
      VerseBlock::Couplet { left, .. } => left.chars().count(),
      VerseBlock::Single(_) => 0,
    })
    .max()
    .unwrap_or(0);
  let right_width = blocks
    .iter()
    .map(|block| match block {
      VerseBlock::Couplet { right, .. } => right.chars().count(),
      VerseBlock::Single(_) => 0,
    })
    .max()
    .unwrap_or(0);
  let total_width = left_width + GUTTER.chars().count() + right_width;

  let mut out = String::new();
  out.push_str(&center(title, total_width));
  out.push('\n');
  out.push_str(&center(poet, total_width));
  out.push_str("\n\n");

  for block in blocks {
    match block {
      VerseBlock::Couplet { left, right } => {
        let pad = left_width.saturating_sub(left.chars().count());
        out.push_str(left);
        out.push_str(&" ".repeat(pad));
        out.push_str(GUTTER);
        out.push_str(right);
        out.push('\n');
      },
      VerseBlock::Single(line) => {
        out.push_str(&center(line, total_width));
        out.push('\n');
      },
    }
  }
  out
}

/// Centers `text` within `width` columns (no-op when it does not fit).
fn center(text: &str, width: usize) -> String {
  let len = text.chars().count();
  let pad = width.saturating_sub(len) / 2;
  format!("{}{}", " ".repeat(pad), text)
}

/// Escapes the handful of characters that matter inside HTML text nodes.
fn escape_html(text: &str) -> String {
  let mut escaped = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      _ => escaped.push(c),
    }
  }
  escaped
}

#[cfg(test)]
mod tests {
  use super::*;

  fn blocks() -> Vec<VerseBlock> {
    vec![
      VerseBlock::Couplet { left: "الف   ب".into(), right: "ج".into() },
      VerseBlock::Single("پایان".into()),
    ]
  }

  #[test]
  fn html_page_pairs_hemistichs_and_centers_singles() {
    let html = render_html("حافظ", "غزل ۱", &blocks(), ThemePreference::Unset);
    assert!(html.contains("<div class=\"hemistich\">الف   ب</div>"));
    assert!(html.contains("<div class=\"hemistich\">ج</div>"));
    assert!(html.contains("<div class=\"single\">پایان</div>"));
    assert!(html.contains("dir=\"rtl\""));
  }

  #[test]
  fn theme_preference_drives_the_page_palette() {
    let dark = render_html("p", "t", &[], ThemePreference::Dark);
    assert!(dark.contains("<body class=\"dark-theme\">"));
    assert!(!dark.contains("prefers-color-scheme"));

    let light = render_html("p", "t", &[], ThemePreference::Light);
    assert!(light.contains("<body>"));
    assert!(!light.contains("prefers-color-scheme"));

    let unset = render_html("p", "t", &[], ThemePreference::Unset);
    assert!(unset.contains("<body>"));
    assert!(unset.contains("prefers-color-scheme"));
  }

  #[test]
  fn html_escapes_markup_in_text() {
    let blocks = vec![VerseBlock::Single("a < b & c".into())];
    let html = render_html("<poet>", "t", &blocks, ThemePreference::Unset);
    assert!(html.contains("a &lt; b &amp; c"));
    assert!(html.contains("&lt;poet&gt;"));
    assert!(!html.contains("<poet>"));
  }

  #[test]
  fn text_layout_aligns_columns() {
    let blocks = vec![
      VerseBlock::Couplet { left: "aa".into(), right: "bb".into() },
      VerseBlock::Couplet { left: "cccc".into(), right: "dd".into() },
    ];
    let text = render_text("poet", "title", &blocks);
    let lines: Vec<&str> = text.lines().collect();
    // Header, blank, then the two couplets with the right column aligned.
    assert_eq!(lines[3], "aa       bb");
    assert_eq!(lines[4], "cccc     dd");
  }

  #[test]
  fn text_layout_centers_singles() {
    let text = render_text("p", "t", &blocks());
    assert!(text.lines().any(|line| line.trim_start().starts_with("پایان")));
  }
}
