// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Explicit command table and the fetch -> filter -> print -> write -> chart pipeline shared by activity commands
// role: commands/orchestrator
// inputs: parsed Command + EffectiveConfig; env access token; Fetcher backend
// outputs: stdout table rows; <start>-<user>-<name>.csv datasets and .png charts under out_dir
// side_effects: Network via Fetcher; writes files; prints to stdout/stderr
// invariants:
// - targets and dates are validated before the first fetch
// - any failing step stops the command; later steps never run
// - stdout lines end with " \n"
// errors: anyhow with a short context prefix per step
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;

use crate::chart::{self, SeriesInput};
use crate::cli::{Command, EffectiveConfig};
use crate::dataset;
use crate::dates::{DAY_FORMAT, DateWindow};
use crate::github::{self, Fetcher};
use crate::model::Reactions;

pub mod discussion;
pub mod events;
pub mod pulls;
pub mod version;

pub const COMMENT_HEADER: [&str; 10] = [
  "created_date",
  "handle",
  "body",
  "reaction_total_count",
  "reaction_plusone",
  "reaction_minusone",
  "reaction_laugh",
  "reaction_confused",
  "reaction_heart",
  "reaction_hooray",
];

/// Everything an activity command needs besides its own flags.
pub struct RunContext<'a> {
  pub fetcher: &'a dyn Fetcher,
  pub out_dir: &'a Path,
  pub chart_font: Option<&'a Path>,
}

/// Files written and rows printed by one activity command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityOutputs {
  pub rows: usize,
  pub datasets: Vec<PathBuf>,
  pub chart: PathBuf,
}

/// Run one parsed command. The command set is the `Command` enum; nothing registers itself.
pub fn dispatch(command: Command, cfg: &EffectiveConfig) -> Result<()> {
  let stdout = std::io::stdout();
  let mut out = stdout.lock();

  match command {
    Command::Version => version::run(&mut out),
    Command::TeamDiscussion(args) => with_context(cfg, |ctx| discussion::run(ctx, &args, &mut out)).map(log_outputs),
    Command::PrComments(args) => with_context(cfg, |ctx| pulls::run(ctx, &args, &mut out)).map(log_outputs),
    Command::RepoEvents(args) => with_context(cfg, |ctx| events::run(ctx, &args, &mut out)).map(log_outputs),
  }
}

fn log_outputs(outputs: ActivityOutputs) {
  tracing::info!(
    rows = outputs.rows,
    datasets = outputs.datasets.len(),
    chart = %outputs.chart.display(),
    "command finished"
  );
}

/// Read the token once, pick the backend, and hand a RunContext to `f`.
fn with_context<T>(cfg: &EffectiveConfig, f: impl FnOnce(&RunContext) -> Result<T>) -> Result<T> {
  let token = github::token::access_token();

  if token.is_none() {
    eprintln!("{}", github::token::NO_TOKEN_WARNING);
  }

  let fetcher = github::build_fetcher(&cfg.api_url, token).context("could not create GitHub client")?;
  let ctx = RunContext {
    fetcher: fetcher.as_ref(),
    out_dir: &cfg.out_dir,
    chart_font: cfg.chart_font.as_deref(),
  };

  f(&ctx)
}

/// `<start>-<user>-<name>` without extension.
pub fn file_stem(window: &DateWindow, user: &str, name: &str) -> String {
  format!("{}-{}-{}", window.start.format(DAY_FORMAT), user, name)
}

/// One CSV record (quoted where a field needs it), closed with `" \n"`.
pub fn write_row(out: &mut dyn Write, fields: &[String]) -> Result<()> {
  let mut wtr = csv::WriterBuilder::new()
    .has_headers(false)
    .terminator(csv::Terminator::Any(b'\n'))
    .from_writer(Vec::new());

  wtr.write_record(fields).context("could not encode output row")?;
  let mut line = wtr.into_inner().map_err(|e| anyhow!("could not encode output row: {}", e.error()))?;

  // Swap the record terminator for the trailing-space line ending.
  line.pop();
  line.extend_from_slice(b" \n");

  out.write_all(&line).context("could not write to stdout")
}

pub fn write_header(out: &mut dyn Write, header: &[&str]) -> Result<()> {
  let fields: Vec<String> = header.iter().map(|s| s.to_string()).collect();
  write_row(out, &fields)
}

pub fn comment_fields(created_on: NaiveDate, handle: &str, body: &str, r: &Reactions) -> Vec<String> {
  vec![
    created_on.format(DAY_FORMAT).to_string(),
    handle.to_string(),
    body.to_string(),
    r.total_count.to_string(),
    r.plus_one.to_string(),
    r.minus_one.to_string(),
    r.laugh.to_string(),
    r.confused.to_string(),
    r.heart.to_string(),
    r.hooray.to_string(),
  ]
}

/// Write `<stem>.csv` for `dates` and return its path.
pub fn write_dates(ctx: &RunContext, stem: &str, dates: &[NaiveDate]) -> Result<PathBuf> {
  let path = ctx.out_dir.join(format!("{}.csv", stem));
  dataset::write_dataset(&path, &dataset::encode_dates(dates.iter().copied()))?;
  Ok(path)
}

/// Shared tail of the comment commands: one dataset, one single-series chart.
pub fn write_single_series(ctx: &RunContext, window: &DateWindow, user: &str, name: &str, dates: &[NaiveDate], rows: usize) -> Result<ActivityOutputs> {
  let stem = file_stem(window, user, name);
  let dataset_path = write_dates(ctx, &stem, dates)?;
  let chart_path = ctx.out_dir.join(format!("{}.png", stem));

  let span = window.chart_span()?;
  chart::draw_chart(&span, SeriesInput::new(name, &dataset_path), &chart_path, ctx.chart_font)
    .context("an error occurred while drawing the chart")?;

  Ok(ActivityOutputs {
    rows,
    datasets: vec![dataset_path],
    chart: chart_path,
  })
}
