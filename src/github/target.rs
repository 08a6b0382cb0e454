// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Parse --repo and --team targets into owner/name pairs before any API call
// role: github/targets
// inputs: repository URL (https://github.com/o/r[.git][/...]) or o/r shorthand; org/team string
// outputs: RepoTarget, TeamTarget
// invariants: No network; owner and name are non-empty; trailing .git is stripped
// errors: FetchError::MalformedTarget with a user-facing message
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::error::FetchError;

pub const TEAM_FORMAT_ERROR: &str = "team name needs to be owner/teamname";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoTarget {
  pub owner: String,
  pub name: String,
}

impl RepoTarget {
  pub fn parse(raw: &str) -> Result<Self, FetchError> {
    static RE_SHORTHAND: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)$").unwrap());

    let raw = raw.trim();

    if raw.is_empty() {
      return Err(FetchError::MalformedTarget("repository url is empty".into()));
    }

    let (owner, name) = if let Some(c) = RE_SHORTHAND.captures(raw) {
      (c[1].to_string(), c[2].to_string())
    } else {
      let url = Url::parse(raw).map_err(|e| FetchError::MalformedTarget(format!("invalid repository url {:?}: {}", raw, e)))?;
      let mut segments = url.path_segments().into_iter().flatten().filter(|s| !s.is_empty());

      match (segments.next(), segments.next()) {
        (Some(o), Some(r)) => (o.to_string(), r.to_string()),
        _ => return Err(FetchError::MalformedTarget(format!("invalid repository url {:?}: expected owner/repo", raw))),
      }
    };

    let name = name.strip_suffix(".git").map(str::to_string).unwrap_or(name);

    if name.is_empty() {
      return Err(FetchError::MalformedTarget(format!("invalid repository url {:?}: expected owner/repo", raw)));
    }

    Ok(Self { owner, name })
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamTarget {
  pub org: String,
  pub team: String,
}

impl TeamTarget {
  pub fn parse(raw: &str) -> Result<Self, FetchError> {
    let mut parts = raw.trim().splitn(2, '/');

    match (parts.next(), parts.next()) {
      (Some(org), Some(team)) if !org.is_empty() && !team.is_empty() => Ok(Self {
        org: org.to_string(),
        team: team.to_string(),
      }),
      _ => Err(FetchError::MalformedTarget(TEAM_FORMAT_ERROR.into())),
    }
  }
}
