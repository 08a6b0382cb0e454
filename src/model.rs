// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Flat local records for GitHub comments and repository events
// role: model/types
// outputs: PullComment, DiscussionComment, RepoEvent, Reactions, EventKind and the Record trait used by the filter
// invariants: Records are built once from API payloads and never mutated; created_on is a UTC calendar day
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::NaiveDate;

/// Anything the filter can select on.
pub trait Record {
  fn handle(&self) -> &str;
  fn created_on(&self) -> NaiveDate;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reactions {
  pub total_count: u32,
  pub plus_one: u32,
  pub minus_one: u32,
  pub laugh: u32,
  pub confused: u32,
  pub heart: u32,
  pub hooray: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullComment {
  pub handle: String,
  pub id: Option<i64>,
  pub body: String,
  pub reactions: Reactions,
  pub created_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscussionComment {
  pub handle: String,
  /// Comment number within its discussion thread.
  pub id: Option<i64>,
  /// Title of the enclosing discussion thread.
  pub title: Option<String>,
  pub body: String,
  pub reactions: Reactions,
  pub created_on: NaiveDate,
}

/// Event categories the charts care about; everything else is `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
  CreateBranch,
  Push,
  PullRequest,
  DeleteBranch,
  Other(String),
}

impl EventKind {
  pub fn from_api_type(t: &str) -> Self {
    match t {
      "CreateEvent" => Self::CreateBranch,
      "PushEvent" => Self::Push,
      "PullRequestEvent" => Self::PullRequest,
      "DeleteEvent" => Self::DeleteBranch,
      other => Self::Other(other.to_string()),
    }
  }

  pub fn as_api_type(&self) -> &str {
    match self {
      Self::CreateBranch => "CreateEvent",
      Self::Push => "PushEvent",
      Self::PullRequest => "PullRequestEvent",
      Self::DeleteBranch => "DeleteEvent",
      Self::Other(t) => t,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoEvent {
  pub handle: String,
  pub repo: String,
  pub kind: EventKind,
  pub created_on: NaiveDate,
  /// Raw event payload; carried along but not read by any command yet.
  pub payload: serde_json::Value,
}

impl Record for PullComment {
  fn handle(&self) -> &str {
    &self.handle
  }

  fn created_on(&self) -> NaiveDate {
    self.created_on
  }
}

impl Record for DiscussionComment {
  fn handle(&self) -> &str {
    &self.handle
  }

  fn created_on(&self) -> NaiveDate {
    self.created_on
  }
}

impl Record for RepoEvent {
  fn handle(&self) -> &str {
    &self.handle
  }

  fn created_on(&self) -> NaiveDate {
    self.created_on
  }
}
