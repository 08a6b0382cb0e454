// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: repoevents command; split one user's repository events into branch/push/pull-request categories and chart them together
// role: commands/repoevents
// outputs: <start>-<user>-{createbranch,pushes,pullrequests,deletebranch,repoevents}.csv and <start>-<user>-repoevents.png
// invariants: every matching event is printed and lands in repoevents.csv; only the four charted kinds land in a category file
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use super::{ActivityOutputs, RunContext, file_stem, write_dates, write_header, write_row};
use crate::chart::{self, SeriesInput};
use crate::cli::RepoActivityArgs;
use crate::dates::{DAY_FORMAT, DateWindow};
use crate::filter::filter_records;
use crate::model::EventKind;

pub const NAME: &str = "repoevents";
pub const EVENT_HEADER: [&str; 3] = ["created_date", "handle", "type"];

/// Chart series names, in drawing order.
pub const CATEGORIES: [&str; 4] = ["createbranch", "pushes", "pullrequests", "deletebranch"];

fn category_index(kind: &EventKind) -> Option<usize> {
  match kind {
    EventKind::CreateBranch => Some(0),
    EventKind::Push => Some(1),
    EventKind::PullRequest => Some(2),
    EventKind::DeleteBranch => Some(3),
    EventKind::Other(_) => None,
  }
}

pub fn run(ctx: &RunContext, args: &RepoActivityArgs, out: &mut dyn Write) -> Result<ActivityOutputs> {
  let window = DateWindow::parse(&args.window.start, &args.window.end)?;
  let user = args.window.user.as_str();

  let events = ctx
    .fetcher
    .repo_events(&args.repo)
    .with_context(|| format!("an error occurred while fetching events for {}", args.repo))?;

  write_header(out, &EVENT_HEADER)?;
  let mut all: Vec<NaiveDate> = Vec::new();
  let mut per_category: [Vec<NaiveDate>; 4] = Default::default();

  for e in filter_records(&events, user, &window) {
    tracing::debug!(repo = %e.repo, kind = e.kind.as_api_type(), has_payload = !e.payload.is_null(), "matched event");
    write_row(
      out,
      &[e.created_on.format(DAY_FORMAT).to_string(), e.handle.clone(), e.kind.as_api_type().to_string()],
    )?;
    all.push(e.created_on);

    if let Some(i) = category_index(&e.kind) {
      per_category[i].push(e.created_on);
    }
  }

  let mut datasets = Vec::with_capacity(CATEGORIES.len() + 1);
  for (name, dates) in CATEGORIES.iter().zip(per_category.iter()) {
    datasets.push(write_dates(ctx, &file_stem(&window, user, name), dates)?);
  }

  let stem = file_stem(&window, user, NAME);
  datasets.push(write_dates(ctx, &stem, &all)?);

  let chart_path = ctx.out_dir.join(format!("{}.png", stem));
  let series = [
    SeriesInput::new(CATEGORIES[0], &datasets[0]),
    SeriesInput::new(CATEGORIES[1], &datasets[1]),
    SeriesInput::new(CATEGORIES[2], &datasets[2]),
    SeriesInput::new(CATEGORIES[3], &datasets[3]),
  ];
  let span = window.chart_span()?;
  chart::draw_chart_with_four_lines(&span, series, &chart_path, ctx.chart_font)
    .context("an error occurred while drawing the chart")?;

  Ok(ActivityOutputs {
    rows: all.len(),
    datasets,
    chart: chart_path,
  })
}
