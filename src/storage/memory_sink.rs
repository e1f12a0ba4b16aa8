use dashmap::DashMap;
use serde_json::Value;

use crate::storage::{ReportError, ReportSink};

/// Keeps reports in memory; later writes under the same key replace earlier ones.
#[derive(Default)]
pub struct MemoryReportSink {
    reports: DashMap<String, Value>
}

impl MemoryReportSink {
    pub fn new() -> Self {
        Self {
            reports: DashMap::new()
        }
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.reports.get(key).map(|entry| entry.value().clone())
    }

    pub fn keys(&self) -> Vec<String> {
        self.reports.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl ReportSink for MemoryReportSink {
    fn write(&self, key: &str, record: &Value) -> Result<(), ReportError> {
        self.reports.insert(key.to_string(), record.clone());
        Ok(())
    }
}
