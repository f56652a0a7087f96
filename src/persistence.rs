// src/persistence.rs
use std::fs::{self, File, OpenOptions};
use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::types::WindowRecord;

// Fixed column contract. Never read back from the file.
pub const CSV_HEADER: [&str; 3] = ["timestamp", "title", "process_id"];

fn ensure_parent_dir(path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
        }
    }
    Ok(())
}

/// Creates the log with its header row if no file exists yet.
///
/// Returns `true` when the file was created. An existing file is left
/// untouched, whatever its header says.
pub fn initialize_csv(path: &Path) -> AppResult<bool> {
    if path.is_file() {
        return Ok(false);
    }
    ensure_parent_dir(path)?;

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| AppError::io(path, e))?;
    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(CSV_HEADER).map_err(|e| AppError::csv(path, e))?;
    writer.flush().map_err(|e| AppError::io(path, e))?;
    log::debug!("Created activity log {:?} with header", path);
    Ok(true)
}

/// Appends one row. The file is opened and closed on every call.
pub fn append_record(path: &Path, record: &WindowRecord) -> AppResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::io(path, e))?;
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
    writer.serialize(record).map_err(|e| AppError::csv(path, e))?;
    writer.flush().map_err(|e| AppError::io(path, e))?;
    Ok(())
}

/// Loads every well-formed row of the log. Malformed rows are skipped.
pub fn read_records(path: &Path) -> AppResult<Vec<WindowRecord>> {
    let file = File::open(path).map_err(|e| AppError::io(path, e))?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<WindowRecord>().enumerate() {
        match row {
            Ok(record) => records.push(record),
            // +2: header line and 1-based numbering
            Err(e) => log::warn!("Skipping malformed row {} in {:?}: {}", index + 2, path, e),
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn record(title: &str, id: i64) -> WindowRecord {
        let at = Local.with_ymd_and_hms(2024, 8, 9, 10, 15, 30).single().unwrap();
        WindowRecord::new(at, title, id)
    }

    #[test]
    fn initialize_writes_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activity_log.csv");

        assert!(initialize_csv(&path).unwrap());
        assert!(!initialize_csv(&path).unwrap());

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "timestamp,title,process_id\n");
    }

    #[test]
    fn initialize_leaves_existing_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activity_log.csv");
        fs::write(&path, "some,other,header\nx,y,z\n").unwrap();

        assert!(!initialize_csv(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "some,other,header\nx,y,z\n");
    }

    #[test]
    fn initialize_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("logs").join("activity_log.csv");
        assert!(initialize_csv(&path).unwrap());
        assert!(path.is_file());
    }

    #[test]
    fn initialize_fails_loudly_when_path_is_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = initialize_csv(dir.path()).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn append_writes_fields_in_header_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activity_log.csv");
        initialize_csv(&path).unwrap();

        append_record(&path, &record("Editor", 42)).unwrap();
        append_record(&path, &record("", 7)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "timestamp,title,process_id",
                "2024-08-09T10:15:30.000000,Editor,42",
                "2024-08-09T10:15:30.000000,,7",
            ]
        );
    }

    #[test]
    fn titles_with_commas_and_quotes_survive_a_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activity_log.csv");
        initialize_csv(&path).unwrap();

        let tricky = record("main.rs, \"draft\" - Editor", 1);
        append_record(&path, &tricky).unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records, vec![tricky]);
    }

    #[test]
    fn read_skips_malformed_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activity_log.csv");
        fs::write(
            &path,
            "timestamp,title,process_id\n\
             2024-08-09T10:00:00.000000,Editor,1\n\
             2024-08-09T10:01:00.000000,Broken,not-a-number\n\
             2024-08-09T10:02:00.000000,Browser,2\n",
        )
        .unwrap();

        let titles: Vec<String> = read_records(&path).unwrap().into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Editor", "Browser"]);
    }

    #[test]
    fn read_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_records(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }
}
