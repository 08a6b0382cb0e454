use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use ureq::ResponseExt;

pub const APP: &str = env!("CARGO_PKG_NAME");
pub const RELEASES_URL: &str = "https://github.com/ctava/github-teamwork/releases/latest";
/// Resolved release URL used instead of the network lookup.
pub const RELEASE_FIXTURE_ENV: &str = "GTW_TEST_LATEST_RELEASE_URL";

pub fn version_line() -> String {
  format!("{} v{}", APP, env!("CARGO_PKG_VERSION"))
}

/// Print the version, then compare it with the latest published release.
pub fn run(out: &mut dyn Write) -> Result<()> {
  run_with(out, latest_release_url)
}

/// A failed lookup is reported on stderr; the command still succeeds.
pub fn run_with(out: &mut dyn Write, lookup: impl FnOnce() -> Result<String>) -> Result<()> {
  writeln!(out, "{}", version_line()).context("could not write to stdout")?;
  writeln!(out, "\nChecking for new version...").context("could not write to stdout")?;

  match lookup() {
    Ok(url) => writeln!(out, "{}", update_notice(env!("CARGO_PKG_VERSION"), &url)).context("could not write to stdout"),
    Err(e) => {
      eprintln!("warning: could not check for a new version: {:#}", e);
      Ok(())
    }
  }
}

/// `releases/latest` redirects to `releases/tag/<tag>`; return the final URL.
fn latest_release_url() -> Result<String> {
  if let Ok(url) = std::env::var(RELEASE_FIXTURE_ENV) {
    return Ok(url);
  }

  let agent: ureq::Agent = ureq::Agent::config_builder()
    .timeout_global(Some(Duration::from_secs(10)))
    .build()
    .into();

  let resp = agent
    .get(RELEASES_URL)
    .header("User-Agent", version_line().as_str())
    .call()
    .with_context(|| format!("network error requesting {}", RELEASES_URL))?;

  Ok(resp.get_uri().to_string())
}

/// Last non-empty path segment of a release URL.
pub fn release_tag(url: &str) -> Option<&str> {
  url.trim_end_matches('/').rsplit('/').next().filter(|s| !s.is_empty())
}

fn parse_version(raw: &str) -> Option<Vec<u64>> {
  raw
    .trim_start_matches('v')
    .split('.')
    .map(|part| part.parse::<u64>().ok())
    .collect()
}

pub fn update_notice(current: &str, release_url: &str) -> String {
  let tag = release_tag(release_url).unwrap_or_default();

  match (parse_version(tag), parse_version(current)) {
    (Some(released), Some(running)) if released > running => {
      format!("New version available: {} {} at {}", APP, tag, release_url)
    }
    (Some(_), Some(_)) => format!("You are using the latest version of {}", APP),
    _ => format!("Could not read a release version from {}", release_url),
  }
}
