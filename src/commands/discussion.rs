use std::io::Write;

use anyhow::{Context, Result};

use super::{ActivityOutputs, COMMENT_HEADER, RunContext, comment_fields, write_header, write_row, write_single_series};
use crate::cli::TeamDiscussionArgs;
use crate::dates::DateWindow;
use crate::filter::filter_records;
use crate::github::TeamTarget;

pub const NAME: &str = "teamdiscussion";

/// Print, write and chart one user's comments across a team's discussion threads.
pub fn run(ctx: &RunContext, args: &TeamDiscussionArgs, out: &mut dyn Write) -> Result<ActivityOutputs> {
  let team = TeamTarget::parse(&args.team)?;
  let window = DateWindow::parse(&args.window.start, &args.window.end)?;
  let user = args.window.user.as_str();

  let comments = ctx
    .fetcher
    .team_discussion_comments(&team.org, &team.team)
    .with_context(|| format!("an error occurred while fetching discussions for team {}/{}", team.org, team.team))?;

  write_header(out, &COMMENT_HEADER)?;
  let mut dates = Vec::new();
  for c in filter_records(&comments, user, &window) {
    tracing::debug!(thread = c.title.as_deref().unwrap_or(""), id = ?c.id, "matched discussion comment");
    write_row(out, &comment_fields(c.created_on, &c.handle, &c.body, &c.reactions))?;
    dates.push(c.created_on);
  }

  write_single_series(ctx, &window, user, NAME, &dates, dates.len())
}
