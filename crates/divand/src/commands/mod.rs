//! CLI workflows, one module per user-triggered action.

use super::*;

pub mod fetch;
pub mod manual;
pub mod random;
pub mod scrape;
pub mod theme;

pub use fetch::{fetch, FetchArgs};
pub use manual::{manual, ManualArgs};
pub use random::{random, RandomArgs};
pub use scrape::{scrape, ScrapeArgs};
pub use theme::{theme, ThemeArgs};

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Fetch a poem from a ganjoor.net link and pretty-print it
  Fetch(FetchArgs),

  /// Fetch a random poem
  Random(RandomArgs),

  /// Pretty-print a poem typed in by hand
  Manual(ManualArgs),

  /// Best-effort extraction of a poem from a saved HTML page
  Scrape(ScrapeArgs),

  /// Show or change the theme of generated pages
  Theme(ThemeArgs),
}

/// Output selection shared by the rendering commands.
#[derive(Args, Clone)]
pub struct OutputArgs {
  /// Write a printable HTML page to this path instead of printing to the
  /// terminal
  #[arg(long)]
  pub out: Option<PathBuf>,
}

/// Location of the persisted theme preference for this invocation.
pub(crate) fn theme_path(cli: &Cli) -> Result<PathBuf> {
  match &cli.config_dir {
    Some(dir) => Ok(dir.join(divan::theme::THEME_FILE)),
    None => Ok(divan::theme::default_path()?),
  }
}

/// Renders a finished poem to the selected output surface.
///
/// With `--out`, writes the printable HTML page (themed by the persisted
/// preference, asking before overwriting an existing file); otherwise prints
/// the terminal layout.
pub(crate) fn present<I: UserInteraction>(
  cli: &Cli,
  interaction: &I,
  poet: &str,
  title: &str,
  blocks: &[format::VerseBlock],
  output: &OutputArgs,
) -> Result<()> {
  match &output.out {
    Some(path) => {
      // Only ask about overwriting when someone is there to answer.
      if path.exists()
        && console::Term::stderr().is_term()
        && !interaction.confirm(&format!("{} exists, overwrite?", path.display()))?
      {
        return interaction.reply(ResponseContent::Info("left the existing file untouched"));
      }
      let preference = ThemePreference::load(&theme_path(cli)?);
      std::fs::write(path, page::render_html(poet, title, blocks, preference))?;
      interaction.reply(ResponseContent::Info(&format!("wrote {}", path.display())))
    },
    None => interaction.reply(ResponseContent::Poem(&page::render_text(poet, title, blocks))),
  }
}
