//! Analytics over a personal bank-card transaction export: category spend,
//! text search, per-card cashback, top transactions, month-to-date views and
//! a time-of-day greeting.

pub mod analytics;
pub mod engine;
pub mod models;
pub mod provider;
pub mod storage;
pub mod types;

#[cfg(test)]
mod fixtures;
