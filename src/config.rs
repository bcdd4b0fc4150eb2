pub const DEFAULT_CATEGORY_COLUMN: &str = "categoría";
pub const DEFAULT_AMOUNT_COLUMN: &str = "monto";

/// Names of the columns the ledger is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerColumns {
    pub category: String,
    pub amount: String,
}

impl LedgerColumns {
    pub fn new(category: impl Into<String>, amount: impl Into<String>) -> LedgerColumns {
        LedgerColumns {
            category: category.into(),
            amount: amount.into(),
        }
    }

    /// Columns that must be present in the header row, in reporting order.
    pub fn required(&self) -> Vec<&str> {
        vec![self.category.as_str(), self.amount.as_str()]
    }
}

impl Default for LedgerColumns {
    fn default() -> Self {
        LedgerColumns::new(DEFAULT_CATEGORY_COLUMN, DEFAULT_AMOUNT_COLUMN)
    }
}

/// Keep only rows whose raw value at `column` is exactly `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

impl Filter {
    pub fn new(column: impl Into<String>, value: impl Into<String>) -> Filter {
        Filter {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Both halves must be supplied for a filter to apply.
    pub fn from_parts(column: Option<String>, value: Option<String>) -> Option<Filter> {
        match (column, value) {
            (Some(column), Some(value)) => Some(Filter { column, value }),
            _ => None,
        }
    }
}
