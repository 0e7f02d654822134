//! Integration test: serde-driven CSV and JSON output.

use checkdam_io::{write_csv, write_json};
use serde::Serialize;

#[derive(Serialize)]
struct Row {
    date: String,
    #[serde(rename = "Evaporation (mm/day)")]
    evaporation: f64,
    #[serde(rename = "stage(m)")]
    stage: Option<f64>,
}

const HEADER: [&str; 3] = ["date", "Evaporation (mm/day)", "stage(m)"];

#[test]
fn csv_header_and_blank_for_none_and_blank_for_none() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("out.csv");
    let rows = vec![
        Row {
            date: "2014-05-01".into(),
            evaporation: 5.25,
            stage: None,
        },
        Row {
            date: "2014-05-02".into(),
            evaporation: 4.5,
            stage: Some(1.2),
        },
    ];

    write_csv(&path, &HEADER, &rows).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "date,Evaporation (mm/day),stage(m)");
    assert_eq!(lines[1], "2014-05-01,5.25,");
    assert_eq!(lines[2], "2014-05-02,4.5,1.2");
}

#[test]
fn json_is_pretty_printed() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("report.json");
    let row = Row {
        date: "2014-05-01".into(),
        evaporation: 5.0,
        stage: Some(0.8),
    };

    write_json(&path, &row).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["stage(m)"], 0.8);
    assert!(text.contains('\n'));
}

#[test]
fn csv_into_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("missing").join("out.csv");
    let rows: Vec<Row> = Vec::new();
    assert!(write_csv(&path, &HEADER, &rows).is_err());
}

#[test]
fn empty_table_keeps_header() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("empty.csv");
    let rows: Vec<Row> = Vec::new();

    write_csv(&path, &HEADER, &rows).unwrap();
    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, HEADER);
    assert_eq!(reader.records().count(), 0);
}
