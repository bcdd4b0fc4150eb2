//! Fixed-width text rendering for the console report and the `.txt` export.

use rust_decimal::{Decimal, RoundingStrategy};

use super::budget::{BudgetCheck, BudgetStatus};
use super::Report;

const CATEGORY_WIDTH: usize = 20;
const AMOUNT_WIDTH: usize = 16;
const PERCENTAGE_WIDTH: usize = 7;
const TABLE_WIDTH: usize = CATEGORY_WIDTH + AMOUNT_WIDTH + PERCENTAGE_WIDTH + 6;

pub const UNCATEGORIZED_LABEL: &str = "(uncategorized)";

/// Rounds half away from zero to whole cents.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Two decimals with `,` grouping thousands, e.g. `1234567.5` -> `1,234,567.50`.
pub fn format_amount(amount: Decimal) -> String {
    let fixed = format!("{:.2}", round_cents(amount));
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", fixed.as_str()),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}.{}", sign, grouped, fraction)
}

pub fn format_money(amount: Decimal, currency: &str) -> String {
    format!("{}{}", currency, format_amount(amount))
}

pub fn format_percentage(percentage: f64) -> String {
    format!("{:.2}%", percentage)
}

pub fn category_label(category: &str) -> &str {
    if category.is_empty() {
        UNCATEGORIZED_LABEL
    } else {
        category
    }
}

pub fn render_text(report: &Report, currency: &str) -> String {
    let mut lines = vec![format!("{:=^width$}", " EXPENSE REPORT ", width = TABLE_WIDTH)];

    for row in report.rows() {
        lines.push(format!(
            "{:<cw$} | {:>aw$} | {:>pw$}",
            category_label(row.category()),
            format_money(row.amount(), currency),
            format_percentage(row.percentage()),
            cw = CATEGORY_WIDTH,
            aw = AMOUNT_WIDTH,
            pw = PERCENTAGE_WIDTH,
        ));
    }

    lines.push("-".repeat(TABLE_WIDTH));
    lines.push(format!(
        "{:<cw$} | {:>aw$}",
        "GRAND TOTAL",
        format_money(report.grand_total(), currency),
        cw = CATEGORY_WIDTH,
        aw = AMOUNT_WIDTH,
    ));
    lines.push("=".repeat(TABLE_WIDTH));

    lines.join("\n") + "\n"
}

pub fn render_budget(check: &BudgetCheck, currency: &str) -> String {
    let message = match check.status {
        BudgetStatus::Exceeded => "⚠️ ALERT: Your expenses have exceeded the budget! ⚠️",
        BudgetStatus::WithinBudget => "✅ You are within your budget. Good job!",
    };

    format!(
        "Your monthly budget: {}\nTotal expenses: {}\n\n{}\n",
        format_money(check.budget, currency),
        format_money(check.total, currency),
        message
    )
}
