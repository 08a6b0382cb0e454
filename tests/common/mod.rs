use assert_cmd::Command;
use serde_json::{Value, json};

pub const BIN: &str = "github-teamwork";

/// Binary with a clean environment: no tokens, no real API, fixtures from `fixtures`.
pub fn cmd(out_dir: &std::path::Path, fixtures: &Value) -> Command {
  let mut cmd = Command::cargo_bin(BIN).unwrap();

  for var in ["GITHUB_ACCESS_TOKEN", "GITHUB_TOKEN", "GH_TOKEN", "GITHUB_API_URL", "GTW_CHART_FONT", "RUST_LOG"] {
    cmd.env_remove(var);
  }

  cmd.env("GTW_TEST_API_JSON", fixtures.to_string());
  cmd.arg("--out-dir").arg(out_dir);
  cmd
}

#[allow(dead_code)]
pub fn window(user: &str, start: &str, end: &str) -> Vec<String> {
  ["--user", user, "--start", start, "--end", end].iter().map(|s| s.to_string()).collect()
}

#[allow(dead_code)]
pub fn pr_comment(login: &str, id: i64, at: &str, body: &str) -> Value {
  json!({
    "id": id,
    "body": body,
    "user": {"login": login},
    "created_at": at,
    "reactions": {"total_count": 3, "+1": 2, "-1": 0, "laugh": 0, "confused": 0, "heart": 1, "hooray": 0}
  })
}

#[allow(dead_code)]
pub fn event(login: &str, kind: &str, at: &str) -> Value {
  json!({
    "type": kind,
    "actor": {"login": login},
    "repo": {"name": "o/r"},
    "created_at": at,
    "payload": {}
  })
}

#[allow(dead_code)]
pub fn read(dir: &tempfile::TempDir, name: &str) -> String {
  std::fs::read_to_string(dir.path().join(name)).unwrap()
}
