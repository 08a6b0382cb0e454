// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Namespace for the GitHub remote fetcher (targets, transport, record mapping, token discovery)
// role: github/namespace
// outputs: Fetcher trait, GithubFetcher, transports, FetchError, and the backend selection used by commands
// invariants: Fixture backend wins whenever GTW_TEST_API_JSON is set; otherwise HTTP against the configured API base
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

pub mod error;
pub mod fetcher;
#[cfg(test)]
pub mod fixture;
pub mod target;
pub mod token;
pub mod transport;

pub use error::FetchError;
pub use fetcher::{Fetcher, GithubFetcher};
pub use target::TeamTarget;
pub use transport::{FixtureTransport, HttpTransport};

/// Select the fetcher backend for a run: env fixtures when present, otherwise HTTP.
pub fn build_fetcher(api_url: &str, token: Option<String>) -> Result<Box<dyn Fetcher>, FetchError> {
  if let Some(fixtures) = FixtureTransport::from_env() {
    tracing::debug!("using fixture transport from {}", transport::FIXTURE_ENV);
    return Ok(Box::new(GithubFetcher::new(fixtures?)));
  }

  Ok(Box::new(GithubFetcher::new(HttpTransport::new(api_url, token)?)))
}
