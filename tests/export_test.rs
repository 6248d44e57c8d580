use std::fs::{self, File};
use std::io::BufWriter;

use rs_seo_extractor::export::{self, ExportFormat};
use rs_seo_extractor::input::parse_url_list;
use rs_seo_extractor::{extract_document, Error, Field, ResultRow};
use tempfile::TempDir;

fn sample_rows(fields: &[Field]) -> Vec<ResultRow> {
    let ok = extract_document(
        r#"<title>Home</title><meta name="description" content="Welcome, friend"><h1>Hi</h1>"#,
        "https://a.example/",
    )
    .project(fields);
    let failed = ResultRow::failed(
        "not a url",
        fields,
        Error::Schema {
            url: "not a url".into(),
            reason: "missing host".into(),
        },
    );
    vec![ok, failed]
}

#[test]
fn csv_file_round_trips_through_disk() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("report.csv");
    let fields = [Field::MetaTitle, Field::MetaDescription, Field::MetaDescriptionLength];

    let file = File::create(&path).expect("create");
    export::write(ExportFormat::Csv, &sample_rows(&fields), &fields, BufWriter::new(file))
        .expect("write csv");

    let mut reader = csv::Reader::from_path(&path).expect("open csv");
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["URL", "Meta title", "Meta description", "Meta description length"]
    );

    let records = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .expect("records");
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0].iter().collect::<Vec<_>>(),
        vec!["https://a.example/", "Home", "Welcome, friend", "15"]
    );
    assert_eq!(
        records[1].iter().collect::<Vec<_>>(),
        vec![
            "not a url",
            "ERROR: SchemaError",
            "ERROR: SchemaError",
            "ERROR: SchemaError"
        ]
    );
}

#[test]
fn json_file_has_one_object_per_row() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("report.json");
    let fields = [Field::H1, Field::MetaTitleLength];

    let file = File::create(&path).expect("create");
    export::write(ExportFormat::Json, &sample_rows(&fields), &fields, file).expect("write json");

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read")).expect("parse");
    let rows = value.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["H1"], "Hi");
    assert_eq!(rows[0]["Meta title length"], 4);
    assert_eq!(rows[1]["URL"], "not a url");
    assert_eq!(rows[1]["Meta title length"], "ERROR: SchemaError");
}

#[test]
fn xlsx_file_is_written() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("report.xlsx");

    let file = File::create(&path).expect("create");
    export::write(ExportFormat::Xlsx, &sample_rows(&Field::ALL), &Field::ALL, file)
        .expect("write xlsx");

    let bytes = fs::read(&path).expect("read");
    assert!(bytes.len() > 100);
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn pasted_list_yields_one_row_per_line() {
    let urls = parse_url_list("https://a.example/\n\n   \nnot a url\n");
    assert_eq!(urls, vec!["https://a.example/", "not a url"]);

    let rows = sample_rows(&[Field::H1]);
    assert_eq!(rows.len(), urls.len());
    assert_eq!(
        rows.iter().map(|r| r.url.as_str()).collect::<Vec<_>>(),
        urls.iter().map(String::as_str).collect::<Vec<_>>()
    );
}
