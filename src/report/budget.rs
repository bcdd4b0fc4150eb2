use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Exceeded,
    WithinBudget,
}

impl BudgetStatus {
    pub fn is_exceeded(&self) -> bool {
        self == &BudgetStatus::Exceeded
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetCheck {
    pub total: Decimal,
    pub budget: Decimal,
    pub status: BudgetStatus,
}

impl BudgetCheck {
    /// Spending that reaches the budget exactly already counts as exceeded.
    pub fn evaluate(total: Decimal, budget: Decimal) -> BudgetCheck {
        let status = if total >= budget {
            BudgetStatus::Exceeded
        } else {
            BudgetStatus::WithinBudget
        };

        BudgetCheck { total, budget, status }
    }

    pub fn remaining(&self) -> Decimal {
        self.budget - self.total
    }
}
