use std::fmt;
use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::models::Column;

/// The dataset lacks columns an operation depends on.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("Dataset is missing required columns: {missing}")]
pub struct SchemaError {
    pub missing: ColumnList
}

impl SchemaError {
    pub fn new(missing: Vec<Column>) -> Self {
        Self { missing: ColumnList(missing) }
    }

    pub fn columns(&self) -> &[Column] {
        &self.missing.0
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ColumnList(pub Vec<Column>);

impl Display for ColumnList {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        for (position, column) in self.0.iter().enumerate() {
            if position > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "'{column}'")?;
        }
        Ok(())
    }
}
