/// Env vars consulted for an access token, in priority order.
pub const TOKEN_VARS: [&str; 3] = ["GITHUB_ACCESS_TOKEN", "GITHUB_TOKEN", "GH_TOKEN"];

pub const NO_TOKEN_WARNING: &str = "warning: will be limited to 60 calls per hour without a token";

/// Discover an access token from the environment; blank values are ignored.
pub fn access_token() -> Option<String> {
  TOKEN_VARS.iter().find_map(|var| {
    std::env::var(var)
      .ok()
      .map(|t| t.trim().to_string())
      .filter(|t| !t.is_empty())
  })
}
