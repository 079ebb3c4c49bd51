//! Twelve-month financial projection
//!
//! Given a monthly income, the recurring expenses and the share of net
//! income that goes to investment, projects one year of cumulative
//! expenses, plain savings and a compounding investment balance.
//!
//! Each month the new investment portion is added first and then the whole
//! running balance earns one month of interest at 8% / 12. Savings and
//! investment values are reported rounded to cents; the running totals
//! carried between months are not rounded.

use serde::{Deserialize, Serialize};

use crate::models::{total_monthly_expenses, Expense};

/// Number of simulated months
pub const PROJECTION_MONTHS: usize = 12;

/// Nominal annual interest rate of the investment balance
pub const ANNUAL_INTEREST_RATE: f64 = 0.08;

/// Interest applied to the investment balance once per month
pub const MONTHLY_INTEREST_RATE: f64 = ANNUAL_INTEREST_RATE / 12.0;

/// One projected metric, month by month
pub type Series = [f64; PROJECTION_MONTHS];

/// Result of a projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialProjection {
    /// Cumulative expenses through each month (not rounded)
    pub expense_totals: Series,
    /// Cumulative savings portion of net income, rounded to cents
    pub savings_balance: Series,
    /// Compounding investment value, rounded to cents
    pub investment_balance: Series,
}

/// One month of a projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionRow {
    /// Zero-based month index
    pub month: usize,
    pub expense_total: f64,
    pub savings: f64,
    pub investment: f64,
}

impl ProjectionRow {
    /// Label for this row from `labels`, or the 1-based month number when
    /// no label is given for it
    pub fn label(&self, labels: &[String]) -> String {
        labels
            .get(self.month)
            .cloned()
            .unwrap_or_else(|| (self.month + 1).to_string())
    }
}

impl FinancialProjection {
    /// Iterate the projection month by month
    pub fn rows(&self) -> impl Iterator<Item = ProjectionRow> + '_ {
        (0..PROJECTION_MONTHS).map(move |month| ProjectionRow {
            month,
            expense_total: self.expense_totals[month],
            savings: self.savings_balance[month],
            investment: self.investment_balance[month],
        })
    }

    /// Savings after the last simulated month
    pub fn final_savings(&self) -> f64 {
        self.savings_balance[PROJECTION_MONTHS - 1]
    }

    /// Investment value after the last simulated month
    pub fn final_investment(&self) -> f64 {
        self.investment_balance[PROJECTION_MONTHS - 1]
    }

    /// Expenses accumulated over the whole year
    pub fn final_expense_total(&self) -> f64 {
        self.expense_totals[PROJECTION_MONTHS - 1]
    }
}

/// Project twelve months of expenses, savings and investment growth
///
/// `investment_percentage` is clamped to `0..=100`; NaN counts as 0. Costs
/// that cannot be read as numbers count as 0.
pub fn compute_projection(
    income: f64,
    expenses: &[Expense],
    investment_percentage: f64,
) -> FinancialProjection {
    let total_expenses = total_monthly_expenses(expenses);
    project_from_totals(income, total_expenses, investment_percentage)
}

/// Same as [`compute_projection`] when the monthly expense total is known
pub fn project_from_totals(
    income: f64,
    total_monthly_expenses: f64,
    investment_percentage: f64,
) -> FinancialProjection {
    let share = clamp_percentage(investment_percentage) / 100.0;

    let mut expense_totals = [0.0; PROJECTION_MONTHS];
    let mut savings_balance = [0.0; PROJECTION_MONTHS];
    let mut investment_balance = [0.0; PROJECTION_MONTHS];

    let mut cumulative_expenses = 0.0;
    let mut savings = 0.0;
    let mut investment = 0.0;

    for month in 0..PROJECTION_MONTHS {
        cumulative_expenses += total_monthly_expenses;
        expense_totals[month] = cumulative_expenses;

        let net_income = income - total_monthly_expenses;
        let investment_portion = share * net_income;
        let savings_portion = net_income - investment_portion;

        savings += savings_portion;
        investment = (investment + investment_portion) * (1.0 + MONTHLY_INTEREST_RATE);

        savings_balance[month] = round_to_cents(savings);
        investment_balance[month] = round_to_cents(investment);
    }

    FinancialProjection {
        expense_totals,
        savings_balance,
        investment_balance,
    }
}

/// Clamp an investment percentage into `0..=100` (NaN becomes 0)
pub fn clamp_percentage(percentage: f64) -> f64 {
    if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 100.0)
    }
}

/// Round to two decimals, nearest value with exact ties away from zero
///
/// The result is the double closest to the two-decimal text representation,
/// so `round_to_cents(1.005)` is `1.0` (the double below 1.005) while
/// `round_to_cents(0.125)` is `0.13`.
pub fn round_to_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let magnitude = value.abs();
    let scaled = magnitude * 100.0;
    // fused multiply-add gives the exact residual of the scaling step
    let exact_tie = scaled.fract() == 0.5 && magnitude.mul_add(100.0, -scaled) == 0.0;

    let rounded = if exact_tie {
        (scaled + 0.5) / 100.0
    } else {
        format!("{:.2}", magnitude)
            .parse::<f64>()
            .unwrap_or(magnitude)
    };

    rounded.copysign(value)
}
