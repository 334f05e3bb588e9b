//! Fetching a poem from a link to its page on the source site.

use super::*;

/// Arguments for [`Commands::Fetch`]
#[derive(Args, Clone)]
pub struct FetchArgs {
  /// Link to a poem page, e.g. https://ganjoor.net/hafez/ghazal/sh1
  pub link: String,

  #[command(flatten)]
  pub output: OutputArgs,
}

/// Function for the [`Commands::Fetch`] workflow.
///
/// Validates the link before anything touches the network; a failed poem or
/// verse fetch aborts the workflow without rendering partial data.
pub async fn fetch<I: UserInteraction>(
  cli: &Cli,
  interaction: &I,
  args: FetchArgs,
) -> Result<()> {
  let FetchArgs { link, output } = args;

  let path = link::poem_path(&link)?;
  interaction.reply(ResponseContent::Working("fetching the poem from the Ganjoor API"))?;

  let client = GanjoorClient::new();
  let poem = client.poem_by_path(&path).await?;
  let verses = client.verses(poem.id).await?;

  let lines = format::flatten(&verses);
  let blocks = format::layout(&lines);
  present(cli, interaction, &poem.poet_label(), &poem.display_title(), &blocks, &output)?;
  interaction.reply(ResponseContent::Success("poem extracted"))
}
