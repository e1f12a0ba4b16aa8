use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;
use std::str::FromStr;

use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord, Trim};
use rust_decimal::Decimal;
use tracing::{error, info, warn};

use crate::models::{Column, Dataset, Transaction};
use crate::provider::{DatasetProvider, ProviderError, SignConvention};
use crate::types::RowIndex;

const OPERATION_DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Reads the bank's operations export saved as CSV.
///
/// Columns are recognised by their header, unknown headers are ignored and a
/// missing header simply leaves that column out of the dataset. Blank or
/// unparseable cells become `None`; records the CSV reader rejects are skipped.
pub struct CsvDatasetProvider {
    path: PathBuf,
    sign_convention: SignConvention
}

impl CsvDatasetProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sign_convention: SignConvention::default()
        }
    }

    pub fn with_sign_convention(mut self, sign_convention: SignConvention) -> Self {
        self.sign_convention = sign_convention;
        self
    }

    /// Parses a dataset from any CSV source.
    ///
    /// # Errors
    /// Returns `ProviderError::Csv` if the header row cannot be read.
    pub fn read<R: Read>(source: R, sign_convention: SignConvention) -> Result<Dataset, ProviderError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        let mut positions: Vec<(Column, usize)> = Vec::new();

        for (index, header) in reader.headers()?.iter().enumerate() {
            let Some(column) = Column::from_header(header.trim_start_matches(BYTE_ORDER_MARK)) else {
                continue
            };

            if positions.iter().any(|(known, _)| *known == column) {
                warn!("Duplicate column '{column}' at position {index} ignored");
                continue;
            }

            positions.push((column, index));
        }

        let mut transactions = Vec::new();

        for (row, result) in reader.records().enumerate() {
            match result {
                Ok(record) => {
                    let cells = Cells { row, record: &record, positions: &positions };
                    transactions.push(cells.transaction(sign_convention));
                }
                Err(error) => {
                    error!("CSV record error: {error}");
                }
            }
        }

        Ok(Dataset::new(positions.into_iter().map(|(column, _)| column), transactions))
    }
}

impl DatasetProvider for CsvDatasetProvider {
    fn load(&self) -> Result<Dataset, ProviderError> {
        info!("Reading operations from {}", self.path.display());

        let file = File::open(&self.path).map_err(|source| ProviderError::Open {
            path: self.path.clone(),
            source
        })?;

        let dataset = Self::read(BufReader::new(file), self.sign_convention)?;

        info!("Read {} operations with columns {:?}", dataset.len(), dataset.columns());

        Ok(dataset)
    }
}

struct Cells<'a> {
    row: RowIndex,
    record: &'a StringRecord,
    positions: &'a [(Column, usize)]
}

impl<'a> Cells<'a> {
    fn transaction(&self, sign_convention: SignConvention) -> Transaction {
        Transaction {
            operation_date: self.parse(Column::OperationDate, |value| {
                NaiveDateTime::parse_from_str(value, OPERATION_DATE_FORMAT).ok()
            }),
            card_id: self.text(Column::CardId),
            amount: self.parse(Column::Amount, parse_amount)
                .map(|amount| sign_convention.apply(amount)),
            category: self.text(Column::Category),
            description: self.text(Column::Description)
        }
    }

    fn cell(&self, column: Column) -> Option<&'a str> {
        let (_, index) = self.positions.iter().find(|(known, _)| *known == column)?;

        self.record.get(*index).filter(|value| !value.is_empty())
    }

    fn text(&self, column: Column) -> Option<String> {
        self.cell(column).map(str::to_string)
    }

    fn parse<T, F>(&self, column: Column, parser: F) -> Option<T>
    where
        F: FnOnce(&str) -> Option<T>,
    {
        let value = self.cell(column)?;
        let parsed = parser(value);

        if parsed.is_none() {
            warn!("Row [{}] has an unreadable '{column}' value '{value}'", self.row);
        }

        parsed
    }
}

/// Accepts `-1411.40`, `-1411,40` and `-1 411,40`.
fn parse_amount(value: &str) -> Option<Decimal> {
    let normalized: String = value.chars()
        .filter(|symbol| !symbol.is_whitespace())
        .map(|symbol| if symbol == ',' { '.' } else { symbol })
        .collect();

    Decimal::from_str(&normalized).ok()
}
