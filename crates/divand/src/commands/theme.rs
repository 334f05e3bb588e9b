//! Showing and changing the theme of generated pages.

use super::*;

/// Arguments for [`Commands::Theme`]
#[derive(Args, Clone)]
pub struct ThemeArgs {
  /// What to do with the saved preference
  #[arg(value_enum, default_value = "show")]
  pub action: ThemeAction,
}

/// Operations on the persisted theme preference.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ThemeAction {
  /// Pin generated pages to the dark palette
  Dark,
  /// Pin generated pages to the light palette
  Light,
  /// Swap between dark and light
  Toggle,
  /// Forget the preference; pages follow the system setting again
  Clear,
  /// Print the current preference
  Show,
}

/// Function for the [`Commands::Theme`] workflow.
pub async fn theme<I: UserInteraction>(
  cli: &Cli,
  interaction: &I,
  args: ThemeArgs,
) -> Result<()> {
  let path = theme_path(cli)?;
  let current = ThemePreference::load(&path);

  match args.action {
    ThemeAction::Dark => set(interaction, ThemePreference::Dark, &path),
    ThemeAction::Light => set(interaction, ThemePreference::Light, &path),
    ThemeAction::Toggle => set(interaction, current.toggle(), &path),
    ThemeAction::Clear => {
      divan::theme::clear(&path)?;
      interaction
        .reply(ResponseContent::Success("theme cleared; pages follow the system setting"))
    },
    ThemeAction::Show => interaction.reply(ResponseContent::Info(&format!("theme is {current}"))),
  }
}

/// Stores `preference` and reports the new state.
fn set<I: UserInteraction>(
  interaction: &I,
  preference: ThemePreference,
  path: &Path,
) -> Result<()> {
  preference.store(path)?;
  interaction.reply(ResponseContent::Success(&format!("theme set to {preference}")))
}
