//! Budget summary figures
//!
//! Monthly figures derived from income and expenses, plus the year-end
//! values of a projection.

use serde::{Deserialize, Serialize};

use super::calculator::{
    clamp_percentage, round_to_cents, FinancialProjection, PROJECTION_MONTHS,
};
use crate::models::{total_monthly_expenses, Expense};

/// Summary of a budget and its projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub income: f64,
    pub total_monthly_expenses: f64,
    /// Income minus expenses; negative when spending exceeds income
    pub remaining_balance: f64,
    /// Remaining balance floored at zero
    pub remaining_after_expenses: f64,
    pub investment_percentage: f64,
    /// Net income sent to investment each month
    pub monthly_investment: f64,
    /// Net income kept as savings each month
    pub monthly_savings: f64,
    pub expenses_at_year_end: f64,
    pub savings_at_year_end: f64,
    pub investment_at_year_end: f64,
    /// Principal paid into the investment over the year
    pub investment_contributed: f64,
    /// Interest earned on top of the contributed principal
    pub investment_growth: f64,
}

impl BudgetSummary {
    /// Summarize a budget together with the projection computed from it
    pub fn new(
        income: f64,
        expenses: &[Expense],
        investment_percentage: f64,
        projection: &FinancialProjection,
    ) -> Self {
        let total = total_monthly_expenses(expenses);
        let percentage = clamp_percentage(investment_percentage);
        let remaining_balance = income - total;
        let monthly_investment = percentage / 100.0 * remaining_balance;
        let monthly_savings = remaining_balance - monthly_investment;
        let investment_contributed = round_to_cents(monthly_investment * PROJECTION_MONTHS as f64);
        let investment_at_year_end = projection.final_investment();

        Self {
            income,
            total_monthly_expenses: total,
            remaining_balance,
            remaining_after_expenses: remaining_balance.max(0.0),
            investment_percentage: percentage,
            monthly_investment: round_to_cents(monthly_investment),
            monthly_savings: round_to_cents(monthly_savings),
            expenses_at_year_end: projection.final_expense_total(),
            savings_at_year_end: projection.final_savings(),
            investment_at_year_end,
            investment_contributed,
            investment_growth: round_to_cents(investment_at_year_end - investment_contributed),
        }
    }

    /// Whether monthly expenses exceed income
    pub fn is_overspending(&self) -> bool {
        self.remaining_balance < 0.0
    }

    /// Savings plus investment at the end of the year
    pub fn net_worth_at_year_end(&self) -> f64 {
        round_to_cents(self.savings_at_year_end + self.investment_at_year_end)
    }
}
