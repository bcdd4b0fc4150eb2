use thiserror::Error;

pub mod aggregator;
pub mod ledger;
pub mod record;

#[cfg(test)]
mod record_tests;

pub use aggregator::{
    percentages_by_category, percentages_from_totals, totals_by_category, CategoryPercentages, CategoryTotals,
};
pub use ledger::Ledger;
pub use record::{parse_amount, Record, ValueParseWarning, MAX_AMOUNT};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountParseError {
    #[error("amount is empty")]
    Empty,
    #[error("'{0}' is not a valid number")]
    Invalid(String),
    #[error("'{0}' is outside the supported range of ±{max}", max = record::MAX_AMOUNT)]
    OutOfRange(String),
}
