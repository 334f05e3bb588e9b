//! Fetching a random poem with poet-name enrichment.

use super::*;

/// Arguments for [`Commands::Random`]
#[derive(Args, Clone)]
pub struct RandomArgs {
  #[command(flatten)]
  pub output: OutputArgs,
}

/// Function for the [`Commands::Random`] workflow.
///
/// The poet lookup is an enrichment: its failure is logged and the default
/// label is used, but the workflow carries on. A failed poem or verse fetch
/// still aborts everything.
pub async fn random<I: UserInteraction>(
  cli: &Cli,
  interaction: &I,
  args: RandomArgs,
) -> Result<()> {
  let RandomArgs { output } = args;

  interaction.reply(ResponseContent::Working("fetching a random poem"))?;
  let client = GanjoorClient::new();
  let poem = client.random_poem().await?;

  let poet = match poem.poet_id() {
    Some(poet_id) => match client.poet(poet_id).await {
      Ok(record) => record.display_name(),
      Err(e) => {
        warn!("poet lookup failed, using the default label: {e}");
        UNKNOWN_POET.to_owned()
      },
    },
    None => UNKNOWN_POET.to_owned(),
  };

  let verses = client.verses(poem.id).await?;
  let lines = format::flatten(&verses);
  let blocks = format::layout(&lines);
  present(cli, interaction, &poet, &poem.random_title(), &blocks, &output)?;
  interaction.reply(ResponseContent::Success("random poem loaded"))
}
