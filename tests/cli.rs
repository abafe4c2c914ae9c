mod support;

use std::path::Path;
use std::process::{Command, Output, Stdio};

use support::census::CensusFixture;

fn olive_census(file: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_olive-census"))
        .arg("--file")
        .arg(file)
        .args(args)
        .env_remove("OLIVE_CENSUS_FILE")
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn count_prints_number_of_records() {
    let census = CensusFixture::sample();
    let output = olive_census(&census.path, &["count"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).trim(), "6");
}

#[test]
fn file_can_come_from_environment() {
    let census = CensusFixture::sample();
    let output = Command::new(env!("CARGO_BIN_EXE_olive-census"))
        .arg("count")
        .env("OLIVE_CENSUS_FILE", &census.path)
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).trim(), "6");
}

#[test]
fn find_id_prints_json() {
    let census = CensusFixture::sample();
    let output = olive_census(&census.path, &["find-id", "2", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["prod_ID"], 2);
    assert_eq!(json[0]["region_name"], "Norte");
    assert_eq!(json[0]["oil_prod_hl"], 520.25);
}

#[test]
fn unknown_id_exits_with_one() {
    let census = CensusFixture::sample();
    let output = olive_census(&census.path, &["find-id", "840"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn ambiguous_key_exits_with_one() {
    let census = CensusFixture::with_rows(&[
        "1,2020,Private,Traditional,Alentejo,95,1,140",
        "2,2020,Private,Traditional,Alentejo,80,1,120",
    ]);
    let output = olive_census(
        &census.path,
        &[
            "find",
            "--year",
            "2020",
            "--unit-type",
            "Private",
            "--extraction-type",
            "Traditional",
            "--region",
            "Alentejo",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn required_missing_file_exits_with_two() {
    let census = CensusFixture::absent();
    let output = olive_census(&census.path, &["--require-file", "count"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!census.path.exists());
}

#[test]
fn missing_flag_with_closed_stdin_exits_with_two() {
    let census = CensusFixture::sample();
    let before = census.contents();
    let output = olive_census(&census.path, &["delete", "--year", "2020"]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(census.contents(), before);
}

#[test]
fn add_with_all_flags_appends_record() {
    let census = CensusFixture::sample();
    let output = olive_census(
        &census.path,
        &[
            "add",
            "--year",
            "2021",
            "--unit-type",
            "Industrial",
            "--extraction-type",
            "Others",
            "--region",
            "Alentejo",
            "--olive-tons",
            "103",
            "--presses",
            "3",
            "--oil-hl",
            "65",
            "--json",
        ],
    );

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["prod_ID"], 7);
    assert_eq!(census.store().count().unwrap(), 7);
}
