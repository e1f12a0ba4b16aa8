mod clock;
mod monetary;
#[cfg(test)]
mod tests;

pub use clock::{Clock, FixedClock, SystemClock};
pub use monetary::{cashback, checked_sum, round_money, MONEY_DECIMAL_PLACES};

/// Zero-based position of a row in its source dataset.
pub type RowIndex = usize;
