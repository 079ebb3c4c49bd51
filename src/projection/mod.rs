//! Financial projections
//!
//! The calculator is a pure function of income, expenses and the investment
//! split. The chart and summary types shape its output for display.

pub mod calculator;
pub mod chart;
pub mod summary;

pub use calculator::{
    clamp_percentage, compute_projection, project_from_totals, round_to_cents,
    FinancialProjection, ProjectionRow, Series, MONTHLY_INTEREST_RATE, PROJECTION_MONTHS,
};
pub use chart::{month_labels, ChartSeries, ExpenseBreakdown, ProjectionChart};
pub use summary::BudgetSummary;
