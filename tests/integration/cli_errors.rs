use predicates::prelude::*;
use serde_json::json;

use crate::common;

#[test]
fn team_without_slash_is_rejected() {
  let td = tempfile::TempDir::new().unwrap();
  // No team fixtures: any API call would fail with "not found" instead.
  let mut cmd = common::cmd(td.path(), &json!({}));
  cmd.args(["teamdiscussion", "--team", "myorg"]).args(common::window("bob", "2018-05-01", "2018-05-31"));

  cmd
    .assert()
    .code(1)
    .stderr(predicate::str::contains("error: team name needs to be owner/teamname"))
    .stderr(predicate::str::contains("not found").not());
  assert_eq!(std::fs::read_dir(td.path()).unwrap().count(), 0);
}

#[test]
fn invalid_date_stops_before_any_output() {
  let td = tempfile::TempDir::new().unwrap();
  let fixtures = json!({ "/repos/o/r/pulls/comments": [common::pr_comment("bob", 1, "2018-05-02T10:00:00Z", "lgtm")] });
  let mut cmd = common::cmd(td.path(), &fixtures);
  cmd.args(["prcomments", "--repo", "o/r"]).args(common::window("bob", "2018-13-40", "2018-05-31"));

  cmd
    .assert()
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains("parsing the start date"));
  assert_eq!(std::fs::read_dir(td.path()).unwrap().count(), 0);
}

#[test]
fn missing_command_asks_for_one() {
  let td = tempfile::TempDir::new().unwrap();
  common::cmd(td.path(), &json!({}))
    .assert()
    .failure()
    .stderr(predicate::str::contains("Provide a command"));
}

#[test]
fn missing_required_flag_is_a_usage_error() {
  let td = tempfile::TempDir::new().unwrap();
  common::cmd(td.path(), &json!({}))
    .args(["repoevents", "--repo", "o/r", "--user", "bob"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("--start"));
}

#[test]
fn unknown_repository_reports_fetch_failure() {
  let td = tempfile::TempDir::new().unwrap();
  let mut cmd = common::cmd(td.path(), &json!({}));
  cmd.args(["repoevents", "--repo", "https://github.com/o/missing"]).args(common::window("bob", "2018-05-01", "2018-05-31"));

  cmd
    .assert()
    .code(1)
    .stderr(predicate::str::contains("error: an error occurred while fetching events"))
    .stderr(predicate::str::contains("not found"));
}
