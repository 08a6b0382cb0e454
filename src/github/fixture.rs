use std::cell::Cell;

use super::error::FetchError;
use super::fetcher::Fetcher;
use super::target::RepoTarget;
use crate::model::{DiscussionComment, PullComment, RepoEvent};

/// In-memory fetcher returning fixed record lists; counts calls so tests can assert "no API calls".
#[derive(Debug, Default)]
pub struct StaticFetcher {
  pub pull_comments: Vec<PullComment>,
  pub events: Vec<RepoEvent>,
  pub discussion_comments: Vec<DiscussionComment>,
  calls: Cell<usize>,
}

impl StaticFetcher {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_pull_comments(mut self, v: Vec<PullComment>) -> Self {
    self.pull_comments = v;
    self
  }

  pub fn with_events(mut self, v: Vec<RepoEvent>) -> Self {
    self.events = v;
    self
  }

  pub fn with_discussion_comments(mut self, v: Vec<DiscussionComment>) -> Self {
    self.discussion_comments = v;
    self
  }

  pub fn calls(&self) -> usize {
    self.calls.get()
  }

  fn record_call(&self) {
    self.calls.set(self.calls.get() + 1);
  }
}

impl Fetcher for StaticFetcher {
  fn pull_request_comments(&self, repository_url: &str) -> Result<Vec<PullComment>, FetchError> {
    self.record_call();
    RepoTarget::parse(repository_url)?;
    Ok(self.pull_comments.clone())
  }

  fn repo_events(&self, repository_url: &str) -> Result<Vec<RepoEvent>, FetchError> {
    self.record_call();
    RepoTarget::parse(repository_url)?;
    Ok(self.events.clone())
  }

  fn team_discussion_comments(&self, _org: &str, _team_name: &str) -> Result<Vec<DiscussionComment>, FetchError> {
    self.record_call();
    Ok(self.discussion_comments.clone())
  }
}
