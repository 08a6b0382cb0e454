use predicates::prelude::*;
use serde_json::json;

use crate::common;

#[test]
fn may_pushes_are_counted_and_june_is_dropped() {
  let td = tempfile::TempDir::new().unwrap();
  let fixtures = json!({
    "/repos/o/r/events": [
      common::event("bob", "PushEvent", "2018-05-01T08:00:00Z"),
      common::event("bob", "PushEvent", "2018-05-02T08:00:00Z"),
      common::event("bob", "PushEvent", "2018-06-01T08:00:00Z"),
      common::event("bob", "CreateEvent", "2018-05-10T08:00:00Z"),
      common::event("carol", "DeleteEvent", "2018-05-11T08:00:00Z")
    ]
  });

  let mut cmd = common::cmd(td.path(), &fixtures);
  cmd.args(["repoevents", "--repo", "o/r"]).args(common::window("bob", "2018-05-01", "2018-05-31"));

  cmd
    .assert()
    .success()
    .stdout(predicate::str::starts_with("created_date,handle,type \n"))
    .stdout(predicate::str::contains("2018-05-02,bob,PushEvent \n"))
    .stdout(predicate::str::contains("2018-06-01").not())
    .stdout(predicate::str::contains("carol").not());

  assert_eq!(common::read(&td, "2018-05-01-bob-pushes.csv"), "2018-05-01\n2018-05-02\n");
  assert_eq!(common::read(&td, "2018-05-01-bob-createbranch.csv"), "2018-05-10\n");
  assert_eq!(common::read(&td, "2018-05-01-bob-pullrequests.csv"), "");
  assert_eq!(common::read(&td, "2018-05-01-bob-deletebranch.csv"), "");
  assert_eq!(common::read(&td, "2018-05-01-bob-repoevents.csv").lines().count(), 3);
  assert!(td.path().join("2018-05-01-bob-repoevents.png").exists());
}
