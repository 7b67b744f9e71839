//! JSON array file sink.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use osm_model::Record;

use crate::error::{OutputError, Result};
use crate::sink::{RecordSink, SinkReport};

/// Buffers every record and writes them as one JSON array on `finish`.
#[derive(Debug)]
pub struct JsonArrayWriter {
    path: PathBuf,
    records: Vec<Record>,
    finished: bool,
}

impl JsonArrayWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Vec::new(),
            finished: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records buffered so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordSink for JsonArrayWriter {
    fn insert(&mut self, record: Record) -> Result<()> {
        if self.finished {
            return Err(OutputError::AlreadyFinished);
        }
        self.records.push(record);
        Ok(())
    }

    fn finish(&mut self) -> Result<SinkReport> {
        if self.finished {
            return Err(OutputError::AlreadyFinished);
        }
        write_json_array(&self.path, &self.records)?;
        self.finished = true;
        Ok(SinkReport {
            records: self.records.len(),
            destination: self.path.display().to_string(),
        })
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    PathBuf::from(temp)
}

/// Writes records to `path` as a single JSON array.
///
/// The array is written to a sibling temp file which is then renamed over
/// `path`, so a failed write leaves any previous file intact.
pub fn write_json_array(path: &Path, records: &[Record]) -> Result<()> {
    let bytes = serde_json::to_vec(records)?;

    let temp_path = temp_path_for(path);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| OutputError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|e| OutputError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(&bytes).map_err(|e| OutputError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    file.sync_all().map_err(|e| OutputError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| OutputError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(records = records.len(), "Wrote JSON array to {}", path.display());
    Ok(())
}
