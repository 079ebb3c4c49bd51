//! Projection service
//!
//! Runs the twelve-month calculator over whatever a `FinanceSource`
//! resolves, and derives the summary, chart and breakdown views from it.

use serde::Serialize;

use super::source::{FinanceSnapshot, FinanceSource};
use crate::error::BudgetResult;
use crate::projection::{
    clamp_percentage, compute_projection, BudgetSummary, ExpenseBreakdown, FinancialProjection,
    ProjectionChart,
};

/// A projection together with the inputs it was computed from
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionReport {
    pub snapshot: FinanceSnapshot,
    pub investment_percentage: f64,
    pub projection: FinancialProjection,
}

impl ProjectionReport {
    /// Summary figures for this report
    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary::new(
            self.snapshot.income,
            &self.snapshot.expenses,
            self.investment_percentage,
            &self.projection,
        )
    }
}

/// Service computing projections from a finance source
pub struct ProjectionService<'a, S: FinanceSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: FinanceSource + ?Sized> ProjectionService<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Current income and expenses
    pub fn snapshot(&self) -> BudgetResult<FinanceSnapshot> {
        self.source.load()
    }

    /// Project the next twelve months with the given investment percentage
    pub fn project(&self, investment_percentage: f64) -> BudgetResult<ProjectionReport> {
        let snapshot = self.snapshot()?;
        let investment_percentage = clamp_percentage(investment_percentage);
        let projection =
            compute_projection(snapshot.income, &snapshot.expenses, investment_percentage);

        tracing::debug!(
            source = self.source.name(),
            income = snapshot.income,
            expenses = snapshot.expenses.len(),
            investment_percentage,
            "computed projection"
        );

        Ok(ProjectionReport {
            snapshot,
            investment_percentage,
            projection,
        })
    }

    /// Summary figures for the given investment percentage
    pub fn summary(&self, investment_percentage: f64) -> BudgetResult<BudgetSummary> {
        Ok(self.project(investment_percentage)?.summary())
    }

    /// Chart series with month labels starting at `start_month` (1 = January)
    pub fn chart(
        &self,
        investment_percentage: f64,
        start_month: u32,
    ) -> BudgetResult<ProjectionChart> {
        let report = self.project(investment_percentage)?;
        Ok(ProjectionChart::new(&report.projection, start_month))
    }

    /// Share of each expense in the monthly total
    pub fn breakdown(&self) -> BudgetResult<ExpenseBreakdown> {
        Ok(ExpenseBreakdown::from_expenses(&self.snapshot()?.expenses))
    }
}
