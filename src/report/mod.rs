use getset::{CopyGetters, Getters};
use rust_decimal::Decimal;

use crate::accounting::{self, CategoryPercentages, CategoryTotals, Ledger};

pub mod budget;
pub mod export;
pub mod text;


pub use budget::{BudgetCheck, BudgetStatus};
pub use text::{render_budget, render_text};

pub const DEFAULT_CURRENCY: &str = "₡";

#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct ReportRow {
    #[getset(get = "pub")]
    category: String,
    #[getset(get_copy = "pub")]
    amount: Decimal,
    #[getset(get_copy = "pub")]
    percentage: f64,
}

/// Presentation-ready view of a ledger: one row per category in first-seen
/// order, plus the grand total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    rows: Vec<ReportRow>,
    grand_total: Decimal,
}

impl Report {
    pub fn build(totals: &CategoryTotals, percentages: &CategoryPercentages) -> Report {
        let rows = totals
            .iter()
            .map(|(category, amount)| ReportRow {
                category: category.to_string(),
                amount: *amount,
                percentage: percentages.get(category).copied().unwrap_or(0.0),
            })
            .collect();

        Report {
            rows,
            grand_total: totals.grand_total(),
        }
    }

    pub fn from_ledger(ledger: &Ledger) -> Report {
        let totals = accounting::totals_by_category(ledger);
        let percentages = accounting::percentages_from_totals(&totals);
        Report::build(&totals, &percentages)
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn grand_total(&self) -> Decimal {
        self.grand_total
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn check_budget(&self, budget: Decimal) -> BudgetCheck {
        BudgetCheck::evaluate(self.grand_total, budget)
    }
}
