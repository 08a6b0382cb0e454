use predicates::prelude::*;
use serde_json::json;

use crate::common;

#[test]
fn prints_rows_and_writes_dataset_and_chart() {
  let td = tempfile::TempDir::new().unwrap();
  let fixtures = json!({
    "/repos/o/r/pulls/comments": {
      "pages": [
        [common::pr_comment("bob", 1, "2018-05-02T10:00:00Z", "lgtm")],
        [
          common::pr_comment("alice", 2, "2018-05-03T10:00:00Z", "nit"),
          common::pr_comment("bob", 3, "2018-06-03T10:00:00Z", "late")
        ]
      ]
    }
  });

  let mut cmd = common::cmd(td.path(), &fixtures);
  cmd.args(["prcomments", "--repo", "https://github.com/o/r.git"]).args(common::window("bob", "2018-05-01", "2018-05-31"));

  cmd
    .assert()
    .success()
    .stdout(predicate::str::starts_with(
      "created_date,handle,body,reaction_total_count,reaction_plusone,reaction_minusone,reaction_laugh,reaction_confused,reaction_heart,reaction_hooray \n",
    ))
    .stdout(predicate::str::contains("2018-05-02,bob,lgtm,3,2,0,0,0,1,0 \n"))
    .stdout(predicate::str::contains("late").not())
    .stderr(predicate::str::contains("warning: will be limited to 60 calls per hour without a token"));

  assert_eq!(common::read(&td, "2018-05-01-bob-prcomments.csv"), "2018-05-02\n");
  let png = std::fs::read(td.path().join("2018-05-01-bob-prcomments.png")).unwrap();
  assert_eq!(&png[..4], b"\x89PNG");
}

#[test]
fn token_suppresses_rate_limit_warning() {
  let td = tempfile::TempDir::new().unwrap();
  let fixtures = json!({ "/repos/o/r/pulls/comments": [] });

  let mut cmd = common::cmd(td.path(), &fixtures);
  cmd.env("GITHUB_ACCESS_TOKEN", "t0ken");
  cmd.args(["prcomments", "-R", "o/r", "-U", "bob", "-S", "2018-05-01", "-E", "2018-05-31"]);

  cmd.assert().success().stderr(predicate::str::contains("warning:").not());
  assert_eq!(common::read(&td, "2018-05-01-bob-prcomments.csv"), "");
}
