use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::github::transport::DEFAULT_API_URL;

#[derive(Parser, Debug)]
#[command(
    name = "github-teamwork",
    version,
    about = "a set of commands to foster collaboration on github.com",
    long_about = "github-teamwork - collect per-user GitHub activity (team discussion comments, pull request comments, repository events) for a date range, write it as a daily dataset and chart it."
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Option<Command>,

  /// Directory for the .csv datasets and .png charts
  #[arg(long, global = true, default_value = ".")]
  pub out_dir: PathBuf,

  /// GitHub REST API base URL (GitHub Enterprise: https://<host>/api/v3)
  #[arg(long, global = true, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
  pub api_url: String,

  /// TrueType font used for chart captions, labels and legends
  #[arg(long, global = true, env = "GTW_CHART_FONT")]
  pub chart_font: Option<PathBuf>,

  /// Log fetch progress to stderr (RUST_LOG overrides)
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
  /// Print team discussion comments by date and user, with reactions
  #[command(name = "teamdiscussion")]
  TeamDiscussion(TeamDiscussionArgs),

  /// Print pull request comments by date and user, with reactions
  #[command(name = "prcomments")]
  PrComments(RepoActivityArgs),

  /// Print repository events by date and user
  #[command(name = "repoevents")]
  RepoEvents(RepoActivityArgs),

  /// Print version information and check for a newer release
  Version,
}

/// Flags shared by every activity command.
#[derive(Args, Debug, Clone)]
pub struct ActivityWindow {
  /// Handle (login) to search for
  #[arg(short = 'U', long)]
  pub user: String,

  /// First day, YYYY-MM-DD (inclusive)
  #[arg(short = 'S', long)]
  pub start: String,

  /// Last day, YYYY-MM-DD (inclusive)
  #[arg(short = 'E', long)]
  pub end: String,
}

#[derive(Args, Debug, Clone)]
pub struct TeamDiscussionArgs {
  /// Team to search for discussion threads, as org/team
  #[arg(short = 'T', long)]
  pub team: String,

  #[command(flatten)]
  pub window: ActivityWindow,
}

#[derive(Args, Debug, Clone)]
pub struct RepoActivityArgs {
  /// Repository URL (https://github.com/owner/repo) or owner/repo
  #[arg(short = 'R', long)]
  pub repo: String,

  #[command(flatten)]
  pub window: ActivityWindow,
}

#[derive(Debug, Clone)]
pub struct EffectiveConfig {
  pub out_dir: PathBuf,
  pub api_url: String,
  pub chart_font: Option<PathBuf>,
  pub verbose: bool,
}

/// Split the parsed CLI into the command to run and the settings shared by all commands.
pub fn normalize(cli: Cli) -> Result<(Command, EffectiveConfig)> {
  let Some(command) = cli.command else {
    bail!("Provide a command: teamdiscussion, prcomments, repoevents or version (see --help)");
  };

  if cli.api_url.trim().is_empty() {
    bail!("--api-url must not be empty");
  }

  let cfg = EffectiveConfig {
    out_dir: cli.out_dir,
    api_url: cli.api_url.trim().trim_end_matches('/').to_string(),
    chart_font: cli.chart_font,
    verbose: cli.verbose,
  };

  Ok((command, cfg))
}
