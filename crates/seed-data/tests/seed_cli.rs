use predicates::prelude::*;

#[test]
fn unreachable_server_exits_non_zero() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seed");
    cmd.env("MONGODB_URI", "mongodb://127.0.0.1:1/?directConnection=true")
        .env("MONGODB_TIMEOUT_SECS", "1")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Inserted").not())
        .stderr(predicate::str::contains("Connection error"));
}

#[test]
fn malformed_uri_exits_non_zero() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seed");
    cmd.env("MONGODB_URI", "not-a-uri")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Connection error"));
}

#[test]
fn invalid_timeout_exits_non_zero() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seed");
    cmd.env("MONGODB_TIMEOUT_SECS", "soon")
        .assert()
        .failure()
        .stderr(predicate::str::contains("MONGODB_TIMEOUT_SECS"));
}

#[test]
fn empty_books_file_exits_non_zero() -> anyhow::Result<()> {
    let temp = tempfile::TempDir::new()?;
    let path = temp.path().join("books.json");
    std::fs::write(&path, "[]")?;

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("seed");
    cmd.env("BOOKS_FILE", &path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no records"));
    Ok(())
}
