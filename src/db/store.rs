//! Flat-file store for the task collection.
//!
//! The store is a single JSON object whose keys are task ids and whose
//! values are [`TaskRecord`]s. It is always rewritten as a whole.
//!
//! Reading distinguishes three outcomes so callers can recover explicitly:
//! the file does not exist, the file exists but cannot be read or decoded,
//! or the records were decoded.

use crate::libs::error::{TaskError, TaskResult};
use crate::libs::task::TaskRecord;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Records keyed by task id, as laid out in the store file.
pub type StoreRecords = BTreeMap<String, TaskRecord>;

/// Result of reading the store file.
#[derive(Debug)]
pub enum StoreRead {
    /// No file at the configured path.
    Absent,
    /// The file exists but could not be read or parsed.
    Corrupt(String),
    Ok(StoreRecords),
}

pub fn read_store(path: &Path) -> StoreRead {
    if !path.exists() {
        return StoreRead::Absent;
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) => return StoreRead::Corrupt(error.to_string()),
    };
    match serde_json::from_str::<StoreRecords>(&contents) {
        Ok(records) => {
            debug!(path = %path.display(), count = records.len(), "task store read");
            StoreRead::Ok(records)
        }
        Err(error) => StoreRead::Corrupt(error.to_string()),
    }
}

/// Overwrites the store file with `records`, creating its directory if needed.
pub fn write_store(path: &Path, records: &StoreRecords) -> TaskResult<()> {
    let unwritable = |source: std::io::Error| TaskError::StoreUnwritable {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(unwritable)?;
    }

    let file = File::create(path).map_err(unwritable)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|e| {
        if e.is_io() {
            unwritable(e.into())
        } else {
            TaskError::StoreEncode(e)
        }
    })?;
    writer.flush().map_err(unwritable)?;

    debug!(path = %path.display(), count = records.len(), "task store written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::Task;

    #[test]
    fn test_read_absent_store() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(read_store(&dir.path().join("tasks.json")), StoreRead::Absent));
    }

    #[test]
    fn test_read_corrupt_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(read_store(&path), StoreRead::Corrupt(_)));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tasks.json");
        let task = Task::new("Stored", "", 2, Some("2024-02-29"), &["work"]);

        let mut records = StoreRecords::new();
        records.insert(task.id.clone(), task.to_record());
        write_store(&path, &records).unwrap();

        match read_store(&path) {
            StoreRead::Ok(read) => assert_eq!(read, records),
            other => panic!("unexpected read result: {:?}", other),
        }
    }
}
