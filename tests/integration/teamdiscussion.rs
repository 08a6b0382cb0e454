use predicates::prelude::*;
use serde_json::json;

use crate::common;

fn comment(login: &str, number: i64, at: &str, body: &str) -> serde_json::Value {
  json!({
    "number": number,
    "body": body,
    "author": {"login": login},
    "created_at": at,
    "reactions": {"total_count": 1, "hooray": 1}
  })
}

#[test]
fn collects_comments_across_all_team_threads() {
  let td = tempfile::TempDir::new().unwrap();
  let fixtures = json!({
    "/orgs/acme/teams": [
      {"id": 7, "name": "Core Team", "slug": "core-team"},
      {"id": 8, "name": "Docs", "slug": "docs"}
    ],
    "/orgs/acme/teams/core-team/discussions": [
      {"number": 1, "title": "Roadmap"},
      {"number": 2, "title": "Retro"}
    ],
    "/orgs/acme/teams/core-team/discussions/1/comments": {
      "pages": [
        [comment("bob", 1, "2018-05-04T09:00:00Z", "agreed")],
        [comment("bob", 2, "2018-05-05T09:00:00Z", "second page")]
      ]
    },
    "/orgs/acme/teams/core-team/discussions/2/comments": [
      comment("alice", 1, "2018-05-06T09:00:00Z", "hello"),
      comment("bob", 2, "2018-04-30T09:00:00Z", "too early")
    ]
  });

  let mut cmd = common::cmd(td.path(), &fixtures);
  cmd.args(["teamdiscussion", "--team", "acme/Core Team"]).args(common::window("bob", "2018-05-01", "2018-05-31"));

  cmd
    .assert()
    .success()
    .stdout(predicate::str::contains("2018-05-04,bob,agreed,1,0,0,0,0,0,1 \n"))
    .stdout(predicate::str::contains("second page"))
    .stdout(predicate::str::contains("too early").not())
    .stdout(predicate::str::contains("hello").not());

  assert_eq!(common::read(&td, "2018-05-01-bob-teamdiscussion.csv"), "2018-05-04\n2018-05-05\n");
  assert!(td.path().join("2018-05-01-bob-teamdiscussion.png").exists());
}

#[test]
fn unknown_team_is_an_error() {
  let td = tempfile::TempDir::new().unwrap();
  let fixtures = json!({ "/orgs/acme/teams": [{"id": 8, "name": "Docs", "slug": "docs"}] });

  let mut cmd = common::cmd(td.path(), &fixtures);
  cmd.args(["teamdiscussion", "-T", "acme/core"]).args(common::window("bob", "2018-05-01", "2018-05-31"));

  cmd.assert().code(1).stderr(predicate::str::contains("team \"core\""));
}
