mod dataset;
mod errors;
mod transaction;

use std::fmt;
use std::fmt::{Display, Formatter};

pub use dataset::Dataset;
pub use errors::{ColumnList, SchemaError};
pub use transaction::{mask_card_id, Transaction};

/// A column of the normalized transaction dataset.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Column {
    OperationDate,
    CardId,
    Amount,
    Category,
    Description
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::OperationDate,
        Column::CardId,
        Column::Amount,
        Column::Category,
        Column::Description
    ];

    /// Header used for this column by the bank's operations export.
    pub fn header(self) -> &'static str {
        match self {
            Column::OperationDate => "Дата операции",
            Column::CardId => "Номер карты",
            Column::Amount => "Сумма операции",
            Column::Category => "Категория",
            Column::Description => "Описание"
        }
    }

    pub fn from_header(header: &str) -> Option<Self> {
        let header = header.trim();
        Self::ALL.into_iter().find(|column| column.header() == header)
    }
}

impl Display for Column {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.header())
    }
}
