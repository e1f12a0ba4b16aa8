use thiserror::Error;

use crate::models::{Column, SchemaError};
use crate::types::RowIndex;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("Row [{row}] has no value in column '{column}'")]
    MissingValue {
        row: RowIndex,
        column: Column
    },
    #[error("Numeric overflow occurred while summing amounts for [{group}]")]
    Overflow {
        group: String
    }
}

impl AnalyticsError {
    pub fn missing_value(row: RowIndex, column: Column) -> Self {
        Self::MissingValue { row, column }
    }

    pub fn overflow(group: impl Into<String>) -> Self {
        Self::Overflow { group: group.into() }
    }
}
