mod errors;
mod file_sink;
mod memory_sink;
#[cfg(test)]
mod tests;

use serde_json::Value;

pub use errors::ReportError;
pub use file_sink::FileReportSink;
pub use memory_sink::MemoryReportSink;

/// Destination for computed reports, keyed by report name.
pub trait ReportSink: Send + Sync + 'static {
    fn write(&self, key: &str, record: &Value) -> Result<(), ReportError>;
}
