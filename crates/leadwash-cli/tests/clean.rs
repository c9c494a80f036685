//! End-to-end tests for the cleaning run.

use std::fs;
use std::path::PathBuf;

use leadwash_cli::pipeline::{CleanOptions, run_clean};
use leadwash_model::CleanSummary;

fn temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("leadwash_cli_{stamp}_{name}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

const RAW_CSV: &str = "\
tel,email,name,firstname,idade,sexo,onde,date
11987654321,user@gmial.com,joao silva,joao,30,m,facebook,15/01/2024
123,second@gmail.com,ana,ana,25,f,instagram,2024-02-01
,third@gmail.com,bia,bia,40,f,,2024-03-01
";

#[test]
fn cleans_and_filters_a_small_dataset() {
    let dir = temp_dir("basic");
    let input = dir.join("raw_data.csv");
    fs::write(&input, RAW_CSV).expect("write input");

    let result = run_clean(&input, &CleanOptions::default()).expect("run clean");

    assert_eq!(result.summary.input_rows, 3);
    assert_eq!(result.summary.retained_rows, 1);
    assert_eq!(result.summary.valid_phones, 1);
    assert_eq!(result.summary.invalid_phones, 2);
    assert_eq!(result.summary.valid_emails, 1);
    assert_eq!(result.summary.ddd_counts.get("11"), Some(&1));

    let output = result.output_path.expect("output written");
    assert_eq!(output, dir.join("cleaned_data.csv"));
    let contents = fs::read_to_string(&output).expect("read output");
    let mut lines = contents.lines();
    assert_eq!(
        lines.next(),
        Some("tel,email,name,firstname,idade,sexo,onde,date")
    );
    assert_eq!(
        lines.next(),
        Some("+5511987654321,user@gmail.com,Joao Silva,Joao,30,Masculino,Facebook,2024-01-15")
    );
    assert_eq!(lines.next(), None);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = temp_dir("dry_run");
    let input = dir.join("raw_data.csv");
    fs::write(&input, RAW_CSV).expect("write input");

    let options = CleanOptions {
        dry_run: true,
        summary_json: Some(dir.join("summary.json")),
        ..CleanOptions::default()
    };
    let result = run_clean(&input, &options).expect("run clean");

    assert!(result.output_path.is_none());
    assert!(result.summary_json_path.is_none());
    assert!(!dir.join("cleaned_data.csv").exists());
    assert!(!dir.join("summary.json").exists());
    assert_eq!(result.summary.retained_rows, 1);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn explicit_output_path_is_honored() {
    let dir = temp_dir("explicit");
    let input = dir.join("raw_data.csv");
    fs::write(&input, RAW_CSV).expect("write input");
    let output = dir.join("leads_clean.csv");

    let options = CleanOptions {
        output: Some(output.clone()),
        ..CleanOptions::default()
    };
    let result = run_clean(&input, &options).expect("run clean");

    assert_eq!(result.output_path.as_deref(), Some(output.as_path()));
    assert!(output.exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn summary_json_round_trips() {
    let dir = temp_dir("json");
    let input = dir.join("raw_data.csv");
    fs::write(&input, RAW_CSV).expect("write input");

    let options = CleanOptions {
        summary_json: Some(dir.join("summary.json")),
        ..CleanOptions::default()
    };
    let result = run_clean(&input, &options).expect("run clean");

    let path = result.summary_json_path.expect("summary json written");
    let json = fs::read_to_string(path).expect("read summary json");
    let summary: CleanSummary = serde_json::from_str(&json).expect("parse summary json");
    assert_eq!(summary, result.summary);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_input_aborts_without_output() {
    let dir = temp_dir("missing");
    let input = dir.join("nope.csv");

    let error = run_clean(&input, &CleanOptions::default()).expect_err("load must fail");
    assert!(error.to_string().contains("load"));
    assert!(!dir.join("cleaned_data.csv").exists());

    let _ = fs::remove_dir_all(&dir);
}
