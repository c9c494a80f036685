use std::fs;
use std::path::PathBuf;

use leadwash_ingest::{read_leads, write_leads};
use leadwash_model::{LeadError, LeadRecord};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("leadwash_ingest_{stamp}_{name}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

fn cleanup(path: &PathBuf) {
    let _ = fs::remove_file(path);
    if let Some(parent) = path.parent() {
        let _ = fs::remove_dir_all(parent);
    }
}

const HEADER: &str = "tel,email,name,firstname,idade,sexo,onde,date";

#[test]
fn reads_rows_with_trimmed_cells() {
    let contents = format!(
        "{HEADER}\n11987654321,  user@gmail.com , joao silva ,joao,30,M,facebook,2024-01-15\n"
    );
    let path = temp_file("leads.csv", &contents);
    let records = read_leads(&path).expect("read leads");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].tel.as_deref(), Some("11987654321"));
    assert_eq!(records[0].email.as_deref(), Some("user@gmail.com"));
    assert_eq!(records[0].name.as_deref(), Some("joao silva"));
    cleanup(&path);
}

#[test]
fn empty_cells_become_none() {
    let contents = format!("{HEADER}\n,,joao,,,,,\n");
    let path = temp_file("sparse.csv", &contents);
    let records = read_leads(&path).expect("read leads");

    assert_eq!(records.len(), 1);
    assert!(records[0].tel.is_none());
    assert!(records[0].email.is_none());
    assert_eq!(records[0].name.as_deref(), Some("joao"));
    assert!(records[0].date.is_none());
    cleanup(&path);
}

#[test]
fn column_order_is_irrelevant() {
    let contents = "date,onde,sexo,idade,firstname,name,email,tel\n\
                    2024-01-15,facebook,F,25,maria,maria souza,m@gmail.com,21987654321\n";
    let path = temp_file("reordered.csv", contents);
    let records = read_leads(&path).expect("read leads");

    assert_eq!(records[0].tel.as_deref(), Some("21987654321"));
    assert_eq!(records[0].sexo.as_deref(), Some("F"));
    assert_eq!(records[0].date.as_deref(), Some("2024-01-15"));
    cleanup(&path);
}

#[test]
fn header_only_file_yields_empty_dataset() {
    let path = temp_file("header_only.csv", &format!("{HEADER}\n"));
    let records = read_leads(&path).expect("read leads");
    assert!(records.is_empty());
    cleanup(&path);
}

#[test]
fn missing_file_is_distinct_error() {
    let path = PathBuf::from("/nonexistent/leadwash/raw.csv");
    match read_leads(&path) {
        Err(LeadError::NotFound(reported)) => assert_eq!(reported, path),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn empty_file_is_distinct_error() {
    let path = temp_file("empty.csv", "");
    match read_leads(&path) {
        Err(LeadError::EmptyFile(_)) => {}
        other => panic!("expected EmptyFile, got {other:?}"),
    }
    cleanup(&path);
}

#[test]
fn missing_column_is_distinct_error() {
    let contents = "tel,email,name,firstname,idade,sexo,onde\n1,2,3,4,5,6,7\n";
    let path = temp_file("no_date.csv", contents);
    match read_leads(&path) {
        Err(LeadError::MissingColumn(column)) => assert_eq!(column, "date"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
    cleanup(&path);
}

#[test]
fn write_then_read_round_trips() {
    let records = vec![
        LeadRecord {
            tel: Some("+5511987654321".to_string()),
            email: Some("user@gmail.com".to_string()),
            name: Some("Joao Silva".to_string()),
            firstname: Some("Joao".to_string()),
            idade: Some("30".to_string()),
            sexo: Some("Masculino".to_string()),
            onde: Some("Facebook".to_string()),
            date: Some("2024-01-15".to_string()),
        },
        LeadRecord {
            tel: Some("+5521987654321".to_string()),
            onde: Some("Desconhecido".to_string()),
            ..LeadRecord::default()
        },
    ];

    let path = temp_file("out.csv", "");
    write_leads(&path, &records).expect("write leads");
    let round = read_leads(&path).expect("read leads");
    assert_eq!(round, records);
    cleanup(&path);
}
