use std::fmt;
use std::str::FromStr;

use getset::{CopyGetters, Getters};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::AmountParseError;
use crate::config::LedgerColumns;

/// One normalized ledger row.
///
/// Raw fields are kept in header order exactly as read; only the amount is
/// converted, and the category is lifted out for aggregation.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct Record {
    #[getset(get_copy = "pub")]
    line: u64,
    #[getset(get = "pub")]
    fields: Vec<(String, String)>,
    #[getset(get = "pub")]
    category: String,
    #[getset(get_copy = "pub")]
    amount: Decimal,
}

/// An amount cell that could not be read as a number. The record keeps an
/// amount of zero and loading carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueParseWarning {
    pub line: u64,
    pub value: String,
    pub row: String,
    pub reason: AmountParseError,
}

impl fmt::Display for ValueParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not convert amount '{}' to a number on line {} {}: {}; using 0",
            self.value, self.line, self.row, self.reason
        )
    }
}

/// Largest magnitude a single amount may have. Keeps the per-category and
/// grand totals of any realistic ledger inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000000);

/// Parses amount text written with either `.` or `,` as decimal separator.
///
/// Every comma becomes a point, so `"10,50"` reads as `10.50` while
/// `"1.234,56"` ends up with two separators and is rejected. Numbers beyond
/// [`MAX_AMOUNT`] are rejected as out of range.
pub fn parse_amount(raw: &str) -> Result<Decimal, AmountParseError> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return Err(AmountParseError::Empty);
    }

    let parsed = if normalized.contains(['e', 'E']) {
        Decimal::from_scientific(&normalized)
    } else {
        Decimal::from_str(&normalized)
    };

    match parsed {
        Ok(amount) if amount.abs() <= MAX_AMOUNT => Ok(amount),
        Ok(_) => Err(AmountParseError::OutOfRange(normalized)),
        // Numeric text that Decimal cannot hold.
        Err(_) if normalized.parse::<f64>().is_ok_and(f64::is_finite) => {
            Err(AmountParseError::OutOfRange(normalized))
        },
        Err(_) => Err(AmountParseError::Invalid(normalized)),
    }
}

impl Record {
    /// Builds a record from the raw `(column, value)` pairs of one source row.
    ///
    /// Missing columns read as empty strings. A bad amount yields zero plus a
    /// warning instead of an error.
    pub fn normalize(
        line: u64,
        fields: Vec<(String, String)>,
        columns: &LedgerColumns,
    ) -> (Record, Option<ValueParseWarning>) {
        let category = lookup(&fields, &columns.category).to_string();
        let raw_amount = lookup(&fields, &columns.amount);

        let (amount, warning) = match parse_amount(raw_amount) {
            Ok(amount) => (amount, None),
            Err(reason) => {
                let warning = ValueParseWarning {
                    line,
                    value: raw_amount.trim().to_string(),
                    row: render_row(&fields),
                    reason,
                };
                (Decimal::ZERO, Some(warning))
            },
        };

        let record = Record {
            line,
            fields,
            category,
            amount,
        };

        (record, warning)
    }

    /// Raw value of `column`, or `""` when the row does not have it.
    pub fn field(&self, column: &str) -> &str {
        lookup(&self.fields, column)
    }
}

// The last duplicate header wins, the same way a keyed row would overwrite it.
fn lookup<'a>(fields: &'a [(String, String)], column: &str) -> &'a str {
    fields
        .iter()
        .rev()
        .find(|(name, _)| name == column)
        .map(|(_, value)| value.as_str())
        .unwrap_or("")
}

fn render_row(fields: &[(String, String)]) -> String {
    let pairs: Vec<String> = fields
        .iter()
        .map(|(name, value)| format!("{}: '{}'", name, value))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}
