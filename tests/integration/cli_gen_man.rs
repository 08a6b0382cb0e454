use assert_cmd::Command;

#[test]
fn cli_generates_man_page() {
  let mut cmd = Command::cargo_bin("github-teamwork").unwrap();
  let out = cmd.args(["--gen-man"]).output().unwrap();
  assert!(out.status.success());
  let s = String::from_utf8_lossy(&out.stdout);
  assert!(s.contains(".TH"));
  assert!(s.contains("teamwork"));
}

#[test]
fn version_reports_newer_release() {
  let tag_url = "https://github.com/ctava/github-teamwork/releases/tag/v99.0.0";
  let mut cmd = Command::cargo_bin("github-teamwork").unwrap();
  cmd
    .env("GTW_TEST_LATEST_RELEASE_URL", tag_url)
    .arg("version")
    .assert()
    .success()
    .stdout(format!(
      "github-teamwork v{}\n\nChecking for new version...\nNew version available: github-teamwork v99.0.0 at {}\n",
      env!("CARGO_PKG_VERSION"),
      tag_url
    ));
}

#[test]
fn version_on_latest_release() {
  let tag_url = format!("https://github.com/ctava/github-teamwork/releases/tag/v{}", env!("CARGO_PKG_VERSION"));
  let mut cmd = Command::cargo_bin("github-teamwork").unwrap();
  cmd
    .env("GTW_TEST_LATEST_RELEASE_URL", &tag_url)
    .arg("version")
    .assert()
    .success()
    .stdout(predicates::str::ends_with("You are using the latest version of github-teamwork\n"));
}
