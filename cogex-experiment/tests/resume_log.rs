use std::fs;
use std::path::Path;

use cogex_core::{Cell, CogexError};
use cogex_experiment::{ResponseLogConfig, ResumePoint, continue_log_auto};
use rust_xlsxwriter::Workbook;

const HEADER: &str = "ifcorrect,fixTime,targetTime,SMI,maskTime,orientation,rt";

fn write_log(dir: &Path, name: &str, rows: &[&str]) {
    let mut body = String::from(HEADER);
    for row in rows {
        body.push('\n');
        body.push_str(row);
    }
    body.push('\n');
    fs::write(dir.join(name), body).expect("write log");
}

/// Writes a single-sheet workbook; `None` leaves the cell blank.
fn write_workbook(path: &Path, rows: &[[Option<f64>; 7]]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, name) in HEADER.split(',').enumerate() {
        sheet.write_string(0, col as u16, name).expect("write header");
    }
    for (row, values) in rows.iter().enumerate() {
        for (col, value) in values.iter().enumerate() {
            if let Some(value) = value {
                sheet
                    .write_number(row as u32 + 1, col as u16, *value)
                    .expect("write cell");
            }
        }
    }
    workbook.save(path).expect("save workbook");
}

fn trial(ifcorrect: Option<f64>, fix_time: f64, smi: Option<f64>) -> [Option<f64>; 7] {
    [
        ifcorrect,
        Some(fix_time),
        Some(40.0),
        smi,
        Some(100.0),
        Some(1.0),
        ifcorrect.map(|_| 0.45),
    ]
}

#[test]
fn missing_log_is_absent() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let point = continue_log_auto(dir.path(), "s_01.csv", &ResponseLogConfig::default())
        .expect("absent is not an error");
    assert_eq!(point, ResumePoint::Absent);
}

#[test]
fn complete_log_is_finished() {
    let dir = tempfile::tempdir().expect("tmp dir");
    write_log(
        dir.path(),
        "s_01.csv",
        &["1.0,1500.0,40.0,2.0,100.0,0.0,0.43", "0.0,1750.0,40.0,3.0,100.0,1.0,0.51"],
    );
    let point = continue_log_auto(dir.path(), "s_01.csv", &ResponseLogConfig::default())
        .expect("load log");
    assert_eq!(point, ResumePoint::Finished);
}

#[test]
fn interrupted_log_resumes_after_first_gap() {
    let dir = tempfile::tempdir().expect("tmp dir");
    write_log(
        dir.path(),
        "s_02.csv",
        &[
            "1.0,1500.0,40.0,2.0,100.0,0.0,0.43",
            "0.0,1750.0,40.0,3.0,100.0,1.0,0.51",
            "1.0,2000.0,40.0,1.0,100.0,0.0,0.47",
            ",1500.0,40.0,,100.0,1.0,",
            ",1600.0,40.0,,100.0,0.0,",
        ],
    );
    let point = continue_log_auto(dir.path(), "s_02.csv", &ResponseLogConfig::default())
        .expect("load log");
    let ResumePoint::Resume { table, row } = point else {
        panic!("expected resume, got {point:?}");
    };
    assert_eq!(row, 4);
    assert_eq!(table.n_rows(), 5);
    assert_eq!(table.cell(2, "fixTime"), Some(&Cell::Int(2000)));
    assert_eq!(table.cell(3, "SMI"), Some(&Cell::Missing));
    // not in the integer schema, stays a float
    assert_eq!(table.cell(0, "rt"), Some(&Cell::Float(0.43)));
}

#[test]
fn log_without_schema_columns_is_rejected() {
    let dir = tempfile::tempdir().expect("tmp dir");
    fs::write(dir.path().join("s_03.csv"), "ifcorrect,rt\n1.0,0.4\n").expect("write");
    let err = continue_log_auto(dir.path(), "s_03.csv", &ResponseLogConfig::default())
        .unwrap_err();
    assert!(matches!(err, CogexError::MissingColumn { .. }), "{err}");
}

#[test]
fn config_file_narrows_schema() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let config_path = dir.path().join("log.json");
    fs::write(&config_path, r#"{"integer_columns": ["ifcorrect"]}"#).expect("write config");
    fs::write(dir.path().join("s_03.csv"), "ifcorrect,rt\n1.0,0.4\n,\n").expect("write");

    let config = ResponseLogConfig::from_json_file(&config_path).expect("config");
    let point = continue_log_auto(dir.path(), "s_03.csv", &config).expect("load");
    assert_eq!(point.status(), "resume");
}

#[test]
fn unreadable_workbook_is_fatal() {
    let dir = tempfile::tempdir().expect("tmp dir");
    fs::write(dir.path().join("s_04.xlsx"), b"garbage").expect("write");
    let err = continue_log_auto(dir.path(), "s_04.xlsx", &ResponseLogConfig::default())
        .unwrap_err();
    assert!(matches!(err, CogexError::Workbook(_)), "{err}");
}

#[test]
fn complete_workbook_is_finished() {
    let dir = tempfile::tempdir().expect("tmp dir");
    write_workbook(
        &dir.path().join("s_01.xlsx"),
        &[trial(Some(1.0), 1500.0, Some(2.0)), trial(Some(0.0), 1750.0, Some(3.0))],
    );
    let point = continue_log_auto(dir.path(), "s_01.xlsx", &ResponseLogConfig::default())
        .expect("load workbook");
    assert_eq!(point, ResumePoint::Finished);
}

#[test]
fn interrupted_workbook_resumes_after_first_gap() {
    let dir = tempfile::tempdir().expect("tmp dir");
    write_workbook(
        &dir.path().join("s_02.xlsx"),
        &[
            trial(Some(1.0), 1500.0, Some(2.0)),
            trial(Some(0.0), 1750.0, Some(3.0)),
            trial(Some(1.0), 2000.0, Some(1.0)),
            trial(None, 1500.0, None),
            trial(None, 1600.0, None),
        ],
    );
    let point = continue_log_auto(dir.path(), "s_02.xlsx", &ResponseLogConfig::default())
        .expect("load workbook");
    let ResumePoint::Resume { table, row } = point else {
        panic!("expected resume, got {point:?}");
    };
    assert_eq!(row, 4);
    assert_eq!(table.n_rows(), 5);
    assert_eq!(table.cell(0, "ifcorrect"), Some(&Cell::Int(1)));
    assert_eq!(table.cell(4, "fixTime"), Some(&Cell::Int(1600)));
    assert_eq!(table.cell(3, "SMI"), Some(&Cell::Missing));
    assert_eq!(table.cell(0, "rt"), Some(&Cell::Float(0.45)));
    assert_eq!(table.cell(3, "rt"), Some(&Cell::Missing));
}
