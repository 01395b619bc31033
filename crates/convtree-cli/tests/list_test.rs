mod common;

use common::TestFixture;
use convtree_testing::MappingFixture;
use predicates::prelude::*;
use serde_json::json;

fn archive() -> serde_json::Value {
    let first = MappingFixture::new()
        .turn("r", None, &["a"], "user", "Hi")
        .turn("a", Some("r"), &[], "assistant", "Hello!")
        .into_conversation("First chat");
    let second = MappingFixture::new()
        .turn("r", None, &[], "user", "solo")
        .into_conversation("Second chat");
    json!([first, second])
}

#[test]
fn test_list_plain() {
    let fixture = TestFixture::new();
    let path = fixture.write_export("archive.json", &archive());

    let output = fixture
        .command()
        .arg("list")
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let rows: Vec<&str> = stdout.lines().collect();
    assert_eq!(rows.len(), 2);

    // Fixture conversations carry create_time 1700000000 (2023-11-14 UTC).
    assert_eq!(rows[0], "   0  2023-11-14      2 nodes  First chat");
    assert_eq!(rows[1], "   1  2023-11-14      1 nodes  Second chat");
}

#[test]
fn test_list_json() {
    let fixture = TestFixture::new();
    let path = fixture.write_export("archive.json", &archive());

    let output = fixture
        .command()
        .arg("list")
        .arg(&path)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rows: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["index"], 0);
    assert_eq!(rows[0]["title"], "First chat");
    assert_eq!(rows[0]["nodes"], 2);
    assert_eq!(rows[1]["title"], "Second chat");
}

#[test]
fn test_list_single_object_as_one_row() {
    let fixture = TestFixture::new();
    let conversation = MappingFixture::new()
        .turn("r", None, &[], "user", "Hi")
        .into_conversation("Only one");
    let path = fixture.write_export("single.json", &conversation);

    fixture
        .command()
        .arg("list")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Only one"));
}

#[test]
fn test_list_empty_archive() {
    let fixture = TestFixture::new();
    let path = fixture.write_export("empty.json", &json!([]));

    fixture
        .command()
        .arg("list")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No conversations in export"));
}

#[test]
fn test_list_missing_title_shows_placeholder() {
    let fixture = TestFixture::new();
    let mapping = MappingFixture::new()
        .turn("r", None, &[], "user", "Hi")
        .into_value();
    let path = fixture.write_export("untitled.json", &json!([{"mapping": mapping}]));

    fixture
        .command()
        .arg("list")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("(untitled)"));
}
