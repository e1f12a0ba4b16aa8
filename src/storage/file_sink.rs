use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::storage::{ReportError, ReportSink};

/// Writes each report as pretty-printed JSON into `directory/<key>`, replacing any previous file.
pub struct FileReportSink {
    directory: PathBuf
}

impl FileReportSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into()
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, ReportError> {
        let mut components = Path::new(key).components();

        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) => Ok(self.directory.join(name)),
            _ => Err(ReportError::InvalidName(key.to_string()))
        }
    }
}

impl ReportSink for FileReportSink {
    fn write(&self, key: &str, record: &Value) -> Result<(), ReportError> {
        let path = self.path_for(key)?;

        create_dir_all(&self.directory).map_err(|error| ReportError::io(&self.directory, error))?;

        let file = File::create(&path).map_err(|error| ReportError::io(&path, error))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, record)?;
        writer.flush().map_err(|error| ReportError::io(&path, error))?;

        debug!("Report written to {}", path.display());

        Ok(())
    }
}
