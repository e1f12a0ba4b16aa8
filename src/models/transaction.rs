use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// Represents a single row of the operations export.
///
/// Every field is optional because the export routinely leaves cells blank:
/// cash withdrawals carry no card, some rows have no description. Whether a
/// blank cell is a non-match or a failure is up to the operation reading it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transaction {
    /// When the operation happened, to the second.
    pub operation_date: Option<NaiveDateTime>,
    /// Masked card token such as `*7197`. `None` for cash or unlinked operations.
    pub card_id: Option<String>,
    /// Signed amount in the convention guaranteed by the dataset provider.
    pub amount: Option<Decimal>,
    pub category: Option<String>,
    pub description: Option<String>
}

impl Transaction {
    /// Card token without its leading type marker.
    pub fn masked_card(&self) -> Option<String> {
        self.card_id.as_deref().map(mask_card_id)
    }
}

/// Strips the leading marker character from a card token, `*7197` becomes `7197`.
pub fn mask_card_id(card_id: &str) -> String {
    card_id.chars().skip(1).collect()
}
