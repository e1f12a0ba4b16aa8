mod csv_provider;
mod errors;
#[cfg(test)]
mod tests;

use rust_decimal::Decimal;

use crate::models::Dataset;

pub use csv_provider::CsvDatasetProvider;
pub use errors::ProviderError;

/// Supplies the dataset the query operations run against.
pub trait DatasetProvider {
    fn load(&self) -> Result<Dataset, ProviderError>;
}

/// Sign normalization applied once while a dataset is ingested.
///
/// The operations never re-normalize amounts; they work with whichever
/// convention the provider was configured with.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum SignConvention {
    /// Amounts keep the sign found in the source.
    #[default]
    AsGiven,
    /// Every amount is replaced by its absolute value.
    Magnitude
}

impl SignConvention {
    pub fn apply(self, amount: Decimal) -> Decimal {
        match self {
            SignConvention::AsGiven => amount,
            SignConvention::Magnitude => amount.abs()
        }
    }
}
