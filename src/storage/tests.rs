use super::{FileReportSink, MemoryReportSink, ReportError, ReportSink};
use anyhow::{anyhow, Result};
use serde_json::{json, Value};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_memory_sink_stores_and_overwrites_by_key() -> Result<()> {
    let sink = MemoryReportSink::new();

    assert!(sink.is_empty());
    assert!(sink.get("report.json").is_none());

    sink.write("report.json", &json!({"total_expenses": -10.0}))?;
    sink.write("report.json", &json!({"total_expenses": -20.0}))?;
    sink.write("other.json", &json!({"total_expenses": 0}))?;

    let stored = sink.get("report.json").ok_or_else(|| anyhow!("Report missing from sink"))?;

    assert_eq!(stored["total_expenses"], json!(-20.0));
    assert_eq!(sink.len(), 2);

    Ok(())
}

#[test]
fn test_file_sink_writes_pretty_json_into_its_directory() -> Result<()> {
    let directory = tempdir()?;
    let sink = FileReportSink::new(directory.path().join("reports"));
    let record = json!({"category": "Фастфуд", "total_expenses": -1446.4});

    sink.write("31.12.2021-report_file.json", &record)?;

    let contents = fs::read_to_string(sink.directory().join("31.12.2021-report_file.json"))?;
    let parsed: Value = serde_json::from_str(&contents)?;

    assert_eq!(parsed, record);
    assert!(contents.contains("Фастфуд"));
    assert!(contents.contains('\n'));

    Ok(())
}

#[test]
fn test_file_sink_rejects_names_that_leave_its_directory() -> Result<()> {
    let directory = tempdir()?;
    let sink = FileReportSink::new(directory.path());

    for key in ["../escape.json", "nested/report.json", "", "/absolute.json"] {
        let result = sink.write(key, &json!({}));
        assert!(matches!(result, Err(ReportError::InvalidName(_))), "{key}");
    }

    Ok(())
}

#[test]
fn test_file_sink_reports_io_failures() -> Result<()> {
    let directory = tempdir()?;
    let blocker = directory.path().join("not-a-directory");
    fs::write(&blocker, "occupied")?;

    let sink = FileReportSink::new(&blocker);
    let result = sink.write("report.json", &json!({}));

    assert!(matches!(result, Err(ReportError::Io { .. })));

    Ok(())
}
