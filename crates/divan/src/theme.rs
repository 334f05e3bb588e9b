//! Persisted theme preference for generated pages.
//!
//! One string, one file: `"dark"` or `"light"` under the platform config
//! directory, absent meaning "follow the system preference". The value is
//! read once per invocation and only ever mutated by an explicit user
//! command; there is no concurrent writer.

use std::path::{Path, PathBuf};

use super::*;

/// File name the preference is stored under inside the config directory.
pub const THEME_FILE: &str = "theme";

/// The user's theme choice for generated pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
  /// Fixed dark palette.
  Dark,
  /// Fixed light palette.
  Light,
  /// No explicit choice; pages follow the viewer's system preference.
  #[default]
  Unset,
}

impl std::fmt::Display for ThemePreference {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(match self {
      Self::Dark => "dark",
      Self::Light => "light",
      Self::Unset => "unset",
    })
  }
}

impl ThemePreference {
  /// The persisted spelling, if this preference is persisted at all.
  pub fn as_stored(self) -> Option<&'static str> {
    match self {
      Self::Dark => Some("dark"),
      Self::Light => Some("light"),
      Self::Unset => None,
    }
  }

  /// The preference after one toggle of the theme control.
  ///
  /// Dark and light swap. An unset preference renders light (unless the
  /// viewer's system says otherwise), so the first toggle lands on dark.
  pub fn toggle(self) -> Self {
    match self {
      Self::Dark => Self::Light,
      Self::Light | Self::Unset => Self::Dark,
    }
  }

  /// Reads the preference from `path`; a missing file or an unrecognized
  /// value is unset.
  pub fn load(path: &Path) -> Self {
    match std::fs::read_to_string(path) {
      Ok(contents) => match contents.trim() {
        "dark" => Self::Dark,
        "light" => Self::Light,
        other => {
          if !other.is_empty() {
            warn!("ignoring unrecognized theme value {other:?}");
          }
          Self::Unset
        },
      },
      Err(_) => Self::Unset,
    }
  }

  /// Writes the preference to `path`, creating parent directories as
  /// needed. Storing [`Unset`](Self::Unset) removes the file.
  pub fn store(self, path: &Path) -> Result<()> {
    match self.as_stored() {
      Some(value) => {
        if let Some(parent) = path.parent() {
          std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, value)?;
      },
      None => clear(path)?,
    }
    Ok(())
  }
}

/// Removes the persisted preference, if any.
pub fn clear(path: &Path) -> Result<()> {
  match std::fs::remove_file(path) {
    Ok(()) => Ok(()),
    Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
    Err(e) => Err(e.into()),
  }
}

/// Default location of the preference file in the platform config directory.
pub fn default_path() -> Result<PathBuf> {
  dirs::config_dir()
    .map(|dir| dir.join("divan").join(THEME_FILE))
    .ok_or_else(|| DivanError::Config("could not resolve a configuration directory".to_owned()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_file_is_unset() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(ThemePreference::load(&dir.path().join(THEME_FILE)), ThemePreference::Unset);
  }

  #[test]
  fn store_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs").join(THEME_FILE);

    ThemePreference::Dark.store(&path).unwrap();
    assert_eq!(ThemePreference::load(&path), ThemePreference::Dark);

    ThemePreference::Light.store(&path).unwrap();
    assert_eq!(ThemePreference::load(&path), ThemePreference::Light);
  }

  #[test]
  fn toggle_flips_between_dark_and_light() {
    assert_eq!(ThemePreference::Dark.toggle(), ThemePreference::Light);
    assert_eq!(ThemePreference::Light.toggle(), ThemePreference::Dark);
    assert_eq!(ThemePreference::Unset.toggle(), ThemePreference::Dark);
  }

  #[test]
  fn repeated_identical_stores_are_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(THEME_FILE);

    ThemePreference::Dark.store(&path).unwrap();
    ThemePreference::Dark.store(&path).unwrap();
    assert_eq!(ThemePreference::load(&path), ThemePreference::Dark);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "dark");
  }

  #[test]
  fn storing_unset_clears_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(THEME_FILE);

    ThemePreference::Dark.store(&path).unwrap();
    ThemePreference::Unset.store(&path).unwrap();
    assert!(!path.exists());
    assert_eq!(ThemePreference::load(&path), ThemePreference::Unset);

    // Clearing an already-absent preference is fine.
    clear(&path).unwrap();
  }

  #[test]
  fn unrecognized_values_fall_back_to_unset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(THEME_FILE);
    std::fs::write(&path, "sepia").unwrap();
    assert_eq!(ThemePreference::load(&path), ThemePreference::Unset);
  }
}
