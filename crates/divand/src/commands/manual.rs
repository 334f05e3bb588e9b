//! Rendering a poem typed in by hand.

use super::*;

/// Poet of the built-in sample poem.
static SAMPLE_POET: &str = "ادیب الممالک";
/// Title of the built-in sample poem.
static SAMPLE_TITLE: &str = "مقطعات - شماره ۳۴";
/// Body of the built-in sample poem.
static SAMPLE_BODY: &str = "بیچاره آدمی که گرفتار عقل شد
خوش آن کسی که کره خر آمد الاغ رفت
ای باغبان منال ز رنج دی و خزان
بنشین بجای و فاتحه برخوان که باغ رفت
ای پاسبان مخسب که در غارت سرای
دزد دغل به خانه تو با چراغ رفت
ای دهخدا عراق و ری و طوس هم نماند
چو بانه رفت و سقز و ساوجبلاغ رفت
یاران حذر کنید که در بوستان عدل
امروز جوقه جوقه بسی بوم و زاغ رفت";

/// Arguments for [`Commands::Manual`]
#[derive(Args, Clone)]
pub struct ManualArgs {
  /// Poet name (prompted for when omitted on a terminal)
  #[arg(long)]
  pub poet: Option<String>,

  /// Poem title (prompted for when omitted on a terminal)
  #[arg(long)]
  pub title: Option<String>,

  /// Poem body; its own line breaks are kept as the verse lines
  #[arg(long, group = "body_source")]
  pub body: Option<String>,

  /// Read the poem body from a file
  #[arg(long, group = "body_source")]
  pub body_file: Option<PathBuf>,

  /// Use the built-in sample poem
  #[arg(long, group = "body_source")]
  pub sample: bool,

  #[command(flatten)]
  pub output: OutputArgs,
}

/// Function for the [`Commands::Manual`] workflow.
///
/// There is no structured verse source here: the body's existing line
/// breaks are the display lines. An empty body is a validation error and
/// nothing is rendered; empty poet/title fall back to the default labels.
pub async fn manual<I: UserInteraction>(
  cli: &Cli,
  interaction: &I,
  args: ManualArgs,
) -> Result<()> {
  let ManualArgs { poet, title, body, body_file, sample, output } = args;

  let body = if let Some(text) = body {
    text
  } else if let Some(path) = body_file {
    std::fs::read_to_string(path)?
  } else if sample {
    SAMPLE_BODY.to_owned()
  } else {
    String::new()
  };
  let lines = format::body_lines(&body)?;

  let poet = field(interaction, poet, sample.then(|| SAMPLE_POET.to_owned()), "poet name")?;
  let title = field(interaction, title, sample.then(|| SAMPLE_TITLE.to_owned()), "poem title")?;
  let poet = first_filled([Some(poet.as_str())], UNKNOWN_POET);
  let title = first_filled([Some(title.as_str())], UNTITLED);

  let blocks = format::layout(&lines);
  present(cli, interaction, &poet, &title, &blocks, &output)?;
  interaction.reply(ResponseContent::Success("poem rendered"))
}

/// Resolves one free-text field: the flag wins, then the sample value, then
/// an interactive prompt when a terminal is attached, then empty.
fn field<I: UserInteraction>(
  interaction: &I,
  flag: Option<String>,
  sample: Option<String>,
  prompt: &str,
) -> Result<String> {
  match (flag, sample) {
    (Some(value), _) => Ok(value),
    (None, Some(value)) => Ok(value),
    (None, None) if console::Term::stdout().is_term() => interaction.prompt(prompt),
    (None, None) => Ok(String::new()),
  }
}
