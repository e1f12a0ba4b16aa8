use std::collections::BTreeSet;

use crate::models::{Column, SchemaError, Transaction};
use crate::types::RowIndex;

/// An ordered, read-only collection of transactions plus the columns its source provided.
///
/// Row order is the order of the source file and is not guaranteed to be
/// chronological. Views derived from a dataset keep its column set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    columns: BTreeSet<Column>,
    transactions: Vec<Transaction>
}

impl Dataset {
    pub fn new<C>(columns: C, transactions: Vec<Transaction>) -> Self
    where
        C: IntoIterator<Item = Column>,
    {
        Self {
            columns: columns.into_iter().collect(),
            transactions
        }
    }

    /// A dataset whose source provided every known column.
    pub fn with_all_columns(transactions: Vec<Transaction>) -> Self {
        Self::new(Column::ALL, transactions)
    }

    pub fn columns(&self) -> &BTreeSet<Column> {
        &self.columns
    }

    pub fn has_column(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = (RowIndex, &Transaction)> {
        self.transactions.iter().enumerate()
    }

    /// Checks that every required column is present.
    ///
    /// # Errors
    /// Returns `SchemaError` listing the missing columns in declaration order.
    pub fn require(&self, required: &[Column]) -> Result<(), SchemaError> {
        let missing: Vec<Column> = Column::ALL.into_iter()
            .filter(|column| required.contains(column) && !self.has_column(*column))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::new(missing))
        }
    }

    /// Builds a new view holding the rows accepted by `predicate`, in their original order.
    pub fn retain_view<P>(&self, mut predicate: P) -> Dataset
    where
        P: FnMut(&Transaction) -> bool,
    {
        Dataset {
            columns: self.columns.clone(),
            transactions: self.transactions.iter()
                .filter(|transaction| predicate(transaction))
                .cloned()
                .collect()
        }
    }
}
