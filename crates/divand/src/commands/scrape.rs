//! Best-effort extraction of a poem from a saved HTML page.

use super::*;

/// Arguments for [`Commands::Scrape`]
#[derive(Args, Clone)]
pub struct ScrapeArgs {
  /// Path to a saved HTML page
  pub file: PathBuf,

  /// TOML file overriding the built-in extraction heuristics
  #[arg(long)]
  pub heuristics: Option<PathBuf>,

  #[command(flatten)]
  pub output: OutputArgs,
}

/// Function for the [`Commands::Scrape`] workflow.
///
/// This is the fallback path for pages where no structured API data is
/// available: the document's visible text is scanned by the heuristic
/// extractor, and the poet/title are guessed from the page title. Finding
/// nothing is a degraded-but-valid outcome, not an error.
pub async fn scrape<I: UserInteraction>(
  cli: &Cli,
  interaction: &I,
  args: ScrapeArgs,
) -> Result<()> {
  let ScrapeArgs { file, heuristics, output } = args;

  let config = match &heuristics {
    Some(path) => ExtractorConfig::from_file(path)?,
    None => ExtractorConfig::default(),
  };

  interaction.reply(ResponseContent::Working("scanning the page for poetry"))?;
  let html = std::fs::read_to_string(&file)?;
  let lines = extract::extract_poem_lines(&extract::visible_text(&html), &config);
  if lines.is_empty() {
    return interaction.reply(ResponseContent::Warning("no poetry found in the document"));
  }

  let title_line = extract::document_title(&html).unwrap_or_default();
  let (poet, title) = extract::title_parts(&title_line, &config.nav_separator);

  let blocks = format::layout(&lines);
  present(cli, interaction, &poet, &title, &blocks, &output)?;
  interaction.reply(ResponseContent::Success(&format!("extracted {} lines", lines.len())))
}
