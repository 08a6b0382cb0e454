// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Page-level access to the GitHub REST API (blocking HTTP) plus an in-memory fixture backend
// role: github/transport
// inputs: API path, page number, page size; token; env GTW_TEST_API_JSON for fixtures
// outputs: Page { items, next_page }
// side_effects: Network calls to the configured API base (HttpTransport only)
// invariants:
// - next_page is Some only when the API advertises rel="next"
// - non-2xx statuses become FetchError (401/403 Unauthorized, 404 NotFound)
// - FixtureTransport treats unknown paths as 404
// errors: FetchError; nothing is retried
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::error::FetchError;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const FIXTURE_ENV: &str = "GTW_TEST_API_JSON";

const USER_AGENT: &str = concat!("github-teamwork/", env!("CARGO_PKG_VERSION"));

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
  pub items: Vec<Value>,
  pub next_page: Option<u32>,
}

// --- Trait seam for paged GitHub access ---
pub trait Transport {
  fn get_page(&self, path: &str, page: u32, per_page: u32) -> Result<Page, FetchError>;
}

/// Extract the `page` number of the `rel="next"` entry of a `Link` header.
pub fn next_page_from_link(link: &str) -> Option<u32> {
  static RE_NEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r#"<([^>]*)>\s*;\s*rel="next""#).unwrap());
  static RE_PAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[?&]page=(\d+)").unwrap());

  let next_url = RE_NEXT.captures(link)?.get(1)?.as_str().to_string();
  RE_PAGE.captures(&next_url)?.get(1)?.as_str().parse().ok()
}

fn items_of(path: &str, body: Value) -> Result<Vec<Value>, FetchError> {
  match body {
    Value::Array(items) => Ok(items),
    other => Err(FetchError::Decode {
      path: path.to_string(),
      reason: format!("expected a JSON array, got {}", kind_of(&other)),
    }),
  }
}

fn kind_of(v: &Value) -> &'static str {
  match v {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}

pub struct HttpTransport {
  agent: ureq::Agent,
  api_url: String,
  token: Option<String>,
}

impl HttpTransport {
  pub fn new(api_url: &str, token: Option<String>) -> Result<Self, FetchError> {
    if !api_url.starts_with("https://") {
      return Err(FetchError::MalformedTarget(format!("GitHub API URL must use HTTPS: {}", api_url)));
    }

    let agent: ureq::Agent = ureq::Agent::config_builder().build().into();

    Ok(Self {
      agent,
      api_url: api_url.trim_end_matches('/').to_string(),
      token,
    })
  }
}

impl Transport for HttpTransport {
  fn get_page(&self, path: &str, page: u32, per_page: u32) -> Result<Page, FetchError> {
    let url = format!("{}{}?per_page={}&page={}", self.api_url, path, per_page, page);

    let mut req = self
      .agent
      .get(url.as_str())
      .header("Accept", "application/vnd.github+json")
      .header("User-Agent", USER_AGENT);

    if let Some(token) = &self.token {
      req = req.header("Authorization", &format!("Bearer {}", token));
    }

    let mut resp = match req.call() {
      Ok(r) => r,
      Err(ureq::Error::StatusCode(code)) => return Err(FetchError::from_status(code, path)),
      Err(e) => return Err(FetchError::Transport(format!("{}: {}", url, e))),
    };

    let next_page = resp
      .headers()
      .get("link")
      .and_then(|v| v.to_str().ok())
      .and_then(next_page_from_link);

    let body = resp.body_mut().read_json::<Value>().map_err(|e| FetchError::Decode {
      path: path.to_string(),
      reason: e.to_string(),
    })?;

    Ok(Page {
      items: items_of(path, body)?,
      next_page,
    })
  }
}

/// Serves canned pages keyed by API path.
#[derive(Debug, Default, Clone)]
pub struct FixtureTransport {
  pages: HashMap<String, Vec<Vec<Value>>>,
}

impl FixtureTransport {
  pub fn new() -> Self {
    Self::default()
  }

  /// Register the pages returned for `path`, in order.
  #[cfg(test)]
  pub fn with_pages(mut self, path: &str, pages: Vec<Vec<Value>>) -> Self {
    self.pages.insert(path.to_string(), pages);
    self
  }

  #[cfg(test)]
  pub fn with_items(self, path: &str, items: Vec<Value>) -> Self {
    self.with_pages(path, vec![items])
  }

  /// Parse `{ "<path>": [items...] | { "pages": [[items...], ...] } }`.
  pub fn from_json(raw: &str) -> Result<Self, FetchError> {
    let decode = |reason: String| FetchError::Decode {
      path: FIXTURE_ENV.to_string(),
      reason,
    };

    let root: Value = serde_json::from_str(raw).map_err(|e| decode(e.to_string()))?;
    let Some(obj) = root.as_object() else {
      return Err(decode("expected an object keyed by API path".into()));
    };

    let mut out = Self::new();

    for (path, entry) in obj {
      let pages = match entry {
        Value::Array(items) => vec![items.clone()],
        Value::Object(o) => match o.get("pages") {
          Some(Value::Array(pages)) => pages
            .iter()
            .map(|p| items_of(path, p.clone()))
            .collect::<Result<Vec<_>, _>>()?,
          _ => return Err(decode(format!("{}: expected an array or {{\"pages\": [...]}}", path))),
        },
        _ => return Err(decode(format!("{}: expected an array or {{\"pages\": [...]}}", path))),
      };
      out.pages.insert(path.clone(), pages);
    }

    Ok(out)
  }

  /// Fixture backend from the environment, when the variable is set.
  pub fn from_env() -> Option<Result<Self, FetchError>> {
    std::env::var(FIXTURE_ENV).ok().map(|raw| Self::from_json(&raw))
  }
}

impl Transport for FixtureTransport {
  fn get_page(&self, path: &str, page: u32, _per_page: u32) -> Result<Page, FetchError> {
    let pages = self.pages.get(path).ok_or_else(|| FetchError::NotFound(path.to_string()))?;
    let idx = page.max(1) as usize - 1;

    let items = pages.get(idx).cloned().unwrap_or_default();
    let next_page = (idx + 1 < pages.len()).then_some(page.max(1) + 1);

    Ok(Page { items, next_page })
  }
}
