// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Fetch every page of PR review comments, repository events and team discussion comments and map them to local records
// role: github/fetcher
// inputs: repository URL or org/team pair; a Transport (HTTP or fixtures)
// outputs: Vec<PullComment> | Vec<RepoEvent> | Vec<DiscussionComment>
// side_effects: Sequential page requests through the transport; nothing else
// invariants:
// - pages are fetched one at a time until next_page is None
// - an error on any page discards everything fetched so far
// - every listing is paginated, including per-thread discussion comments
// - reactions default to zero when absent
// errors: FetchError (MalformedTarget before any request; NotFound for unknown teams)
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde_json::Value;
use tracing::{debug, info};

use super::error::FetchError;
use super::target::{RepoTarget, TeamTarget};
use super::transport::Transport;
use crate::ext::serde_json::JsonFetch;
use crate::model::{DiscussionComment, EventKind, PullComment, Reactions, RepoEvent};

pub const PULL_COMMENTS_PER_PAGE: u32 = 100;
pub const LIST_PER_PAGE: u32 = 30;

// --- Trait seam for the three activity sources ---
pub trait Fetcher {
  fn pull_request_comments(&self, repository_url: &str) -> Result<Vec<PullComment>, FetchError>;
  fn repo_events(&self, repository_url: &str) -> Result<Vec<RepoEvent>, FetchError>;
  fn team_discussion_comments(&self, org: &str, team_name: &str) -> Result<Vec<DiscussionComment>, FetchError>;
}

/// Production fetcher: GitHub REST semantics over any page transport.
pub struct GithubFetcher<T: Transport> {
  transport: T,
}

impl<T: Transport> GithubFetcher<T> {
  pub fn new(transport: T) -> Self {
    Self { transport }
  }

  /// Collect every item of a paginated list endpoint.
  fn fetch_all(&self, path: &str, per_page: u32) -> Result<Vec<Value>, FetchError> {
    let mut out = Vec::new();
    let mut page = 1u32;

    loop {
      let resp = self.transport.get_page(path, page, per_page)?;
      debug!(path, page, items = resp.items.len(), "fetched page");
      out.extend(resp.items);

      match resp.next_page {
        Some(next) if next > page => page = next,
        _ => break,
      }
    }

    Ok(out)
  }

  fn resolve_team(&self, team: &TeamTarget) -> Result<(i64, String), FetchError> {
    let path = format!("/orgs/{}/teams", team.org);
    let teams = self.fetch_all(&path, LIST_PER_PAGE)?;

    teams
      .iter()
      .find(|t| {
        t.fetch("name").to::<String>().as_deref() == Some(team.team.as_str())
          || t.fetch("slug").to::<String>().as_deref() == Some(team.team.as_str())
      })
      .and_then(|t| Some((t.fetch("id").to::<i64>()?, t.fetch("slug").to::<String>()?)))
      .ok_or_else(|| FetchError::NotFound(format!("team {:?} in org {:?}", team.team, team.org)))
  }
}

impl<T: Transport> Fetcher for GithubFetcher<T> {
  fn pull_request_comments(&self, repository_url: &str) -> Result<Vec<PullComment>, FetchError> {
    let repo = RepoTarget::parse(repository_url)?;
    let path = format!("/repos/{}/{}/pulls/comments", repo.owner, repo.name);

    let comments = self
      .fetch_all(&path, PULL_COMMENTS_PER_PAGE)?
      .iter()
      .filter_map(pull_comment_from_json)
      .collect::<Vec<_>>();

    info!(owner = %repo.owner, repo = %repo.name, count = comments.len(), "fetched pull request comments");
    Ok(comments)
  }

  fn repo_events(&self, repository_url: &str) -> Result<Vec<RepoEvent>, FetchError> {
    let repo = RepoTarget::parse(repository_url)?;
    let path = format!("/repos/{}/{}/events", repo.owner, repo.name);

    let events = self
      .fetch_all(&path, LIST_PER_PAGE)?
      .iter()
      .filter_map(repo_event_from_json)
      .collect::<Vec<_>>();

    info!(owner = %repo.owner, repo = %repo.name, count = events.len(), "fetched repository events");
    Ok(events)
  }

  fn team_discussion_comments(&self, org: &str, team_name: &str) -> Result<Vec<DiscussionComment>, FetchError> {
    let team = TeamTarget {
      org: org.to_string(),
      team: team_name.to_string(),
    };

    // Phase 1: team name -> id/slug
    let (team_id, slug) = self.resolve_team(&team)?;
    debug!(team_id, slug = %slug, "resolved team");

    // Phase 2: discussions, then every comment page of each thread
    let discussions_path = format!("/orgs/{}/teams/{}/discussions", team.org, slug);
    let discussions = self.fetch_all(&discussions_path, LIST_PER_PAGE)?;

    let mut out = Vec::new();

    for discussion in &discussions {
      let Some(number) = discussion.fetch("number").to::<i64>() else { continue };
      let title = discussion.fetch("title").to::<String>();
      let comments_path = format!("{}/{}/comments", discussions_path, number);

      for c in self.fetch_all(&comments_path, LIST_PER_PAGE)? {
        if let Some(comment) = discussion_comment_from_json(&c, title.clone()) {
          out.push(comment);
        }
      }
    }

    info!(org = %team.org, team = %slug, count = out.len(), "fetched team discussion comments");
    Ok(out)
  }
}

fn reactions_from_json(v: &Value) -> Reactions {
  if !v.fetch("reactions").is_present() {
    return Reactions::default();
  }

  Reactions {
    total_count: v.fetch("reactions.total_count").to_or_default(),
    plus_one: v.fetch("reactions.+1").to_or_default(),
    minus_one: v.fetch("reactions.-1").to_or_default(),
    laugh: v.fetch("reactions.laugh").to_or_default(),
    confused: v.fetch("reactions.confused").to_or_default(),
    heart: v.fetch("reactions.heart").to_or_default(),
    hooray: v.fetch("reactions.hooray").to_or_default(),
  }
}

/// Map one `/pulls/comments` item; items without an author or timestamp are skipped.
pub fn pull_comment_from_json(v: &Value) -> Option<PullComment> {
  Some(PullComment {
    handle: v.fetch("user.login").to::<String>()?,
    id: v.fetch("id").to::<i64>(),
    body: v.fetch("body").to_or_default::<String>(),
    reactions: reactions_from_json(v),
    created_on: v.fetch("created_at").to_day()?,
  })
}

pub fn repo_event_from_json(v: &Value) -> Option<RepoEvent> {
  Some(RepoEvent {
    handle: v.fetch("actor.login").to::<String>()?,
    repo: v.fetch("repo.name").to_or_default::<String>(),
    kind: EventKind::from_api_type(&v.fetch("type").to::<String>()?),
    created_on: v.fetch("created_at").to_day()?,
    payload: v.fetch("payload").to::<Value>().unwrap_or(Value::Null),
  })
}

pub fn discussion_comment_from_json(v: &Value, title: Option<String>) -> Option<DiscussionComment> {
  Some(DiscussionComment {
    handle: v.fetch("author.login").to::<String>()?,
    id: v.fetch("number").to::<i64>(),
    title,
    body: v.fetch("body").to_or_default::<String>(),
    reactions: reactions_from_json(v),
    created_on: v.fetch("created_at").to_day()?,
  })
}
