use thiserror::Error;

/// Failures surfaced by the remote fetcher.
#[derive(Debug, Error)]
pub enum FetchError {
  #[error("transport error: {0}")]
  Transport(String),

  #[error("not authorized ({status}): check GITHUB_ACCESS_TOKEN")]
  Unauthorized { status: u16 },

  #[error("not found: {0}")]
  NotFound(String),

  #[error("{0}")]
  MalformedTarget(String),

  #[error("unexpected response from {path}: {reason}")]
  Decode { path: String, reason: String },
}

impl FetchError {
  pub fn from_status(status: u16, path: &str) -> Self {
    match status {
      401 | 403 => Self::Unauthorized { status },
      404 => Self::NotFound(path.to_string()),
      other => Self::Transport(format!("GitHub API returned {} for {}", other, path)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_codes_map_to_taxonomy() {
    assert!(matches!(FetchError::from_status(401, "/x"), FetchError::Unauthorized { status: 401 }));
    assert!(matches!(FetchError::from_status(403, "/x"), FetchError::Unauthorized { status: 403 }));
    assert!(matches!(FetchError::from_status(404, "/x"), FetchError::NotFound(ref p) if p == "/x"));
    assert!(matches!(FetchError::from_status(502, "/x"), FetchError::Transport(_)));
  }
}
