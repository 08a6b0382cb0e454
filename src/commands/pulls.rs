use std::io::Write;

use anyhow::{Context, Result};

use super::{ActivityOutputs, COMMENT_HEADER, RunContext, comment_fields, write_header, write_row, write_single_series};
use crate::cli::RepoActivityArgs;
use crate::dates::DateWindow;
use crate::filter::filter_records;

pub const NAME: &str = "prcomments";

pub fn run(ctx: &RunContext, args: &RepoActivityArgs, out: &mut dyn Write) -> Result<ActivityOutputs> {
  let window = DateWindow::parse(&args.window.start, &args.window.end)?;
  let user = args.window.user.as_str();

  let comments = ctx
    .fetcher
    .pull_request_comments(&args.repo)
    .with_context(|| format!("an error occurred while fetching pull request comments for {}", args.repo))?;

  write_header(out, &COMMENT_HEADER)?;
  let mut dates = Vec::new();
  for c in filter_records(&comments, user, &window) {
    tracing::debug!(id = ?c.id, "matched pull request comment");
    write_row(out, &comment_fields(c.created_on, &c.handle, &c.body, &c.reactions))?;
    dates.push(c.created_on);
  }

  write_single_series(ctx, &window, user, NAME, &dates, dates.len())
}
