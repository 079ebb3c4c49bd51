//! Chart data built from a projection
//!
//! A line chart of the three projected series over month labels, and a
//! pie-style breakdown of where the monthly expenses go.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use super::calculator::{FinancialProjection, Series, PROJECTION_MONTHS};
use crate::models::{total_monthly_expenses, Expense};

/// Month abbreviations in calendar order
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const SAVINGS_SERIES: &str = "Remaining Balance";
pub const EXPENSES_SERIES: &str = "Total Expenses";
pub const INVESTMENT_SERIES: &str = "Investment Growth (8% Annual)";

/// Label shown when there are no expenses to break down
pub const NO_EXPENSES_LABEL: &str = "No Expenses";

/// Month labels for twelve consecutive months starting at `start_month` (1-12)
///
/// Months outside 1-12 wrap around, so 13 starts at January again.
pub fn month_labels(start_month: u32) -> Vec<String> {
    let offset = (start_month.max(1) - 1) as usize % 12;
    (0..PROJECTION_MONTHS)
        .map(|i| MONTH_ABBREVIATIONS[(offset + i) % 12].to_string())
        .collect()
}

/// A named data series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub data: Series,
}

/// Line chart of a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionChart {
    /// Month label for each data point
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl ProjectionChart {
    /// Build chart data whose first point is labelled `start_month` (1-12)
    pub fn new(projection: &FinancialProjection, start_month: u32) -> Self {
        let series = vec![
            ChartSeries {
                name: SAVINGS_SERIES.to_string(),
                data: projection.savings_balance,
            },
            ChartSeries {
                name: EXPENSES_SERIES.to_string(),
                data: projection.expense_totals,
            },
            ChartSeries {
                name: INVESTMENT_SERIES.to_string(),
                data: projection.investment_balance,
            },
        ];

        Self {
            categories: month_labels(start_month),
            series,
        }
    }

    /// Chart labelled January through December
    pub fn calendar(projection: &FinancialProjection) -> Self {
        Self::new(projection, 1)
    }

    /// Chart whose first month is the current local month
    pub fn starting_current_month(projection: &FinancialProjection) -> Self {
        Self::new(projection, Local::now().month())
    }

    /// Look up a series by name
    pub fn series_named(&self, name: &str) -> Option<&ChartSeries> {
        self.series.iter().find(|s| s.name == name)
    }

    /// Largest value across all series (0 when everything is negative)
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.data.iter().copied())
            .fold(0.0, f64::max)
    }
}

/// One expense's slice of the monthly total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownSlice {
    pub label: String,
    pub amount: f64,
    /// Percentage of the monthly total (0 when the total is not positive)
    pub share: f64,
}

/// Distribution of the monthly expenses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    pub slices: Vec<BreakdownSlice>,
    pub total: f64,
}

impl ExpenseBreakdown {
    /// One slice per expense, in list order
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let total = total_monthly_expenses(expenses);
        let slices = expenses
            .iter()
            .map(|expense| {
                let amount = expense.amount();
                let share = if total > 0.0 { amount / total * 100.0 } else { 0.0 };
                BreakdownSlice {
                    label: expense.display_name().to_string(),
                    amount,
                    share,
                }
            })
            .collect();

        Self { slices, total }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Slice labels, or a single placeholder when there are no expenses
    pub fn labels(&self) -> Vec<String> {
        if self.slices.is_empty() {
            return vec![NO_EXPENSES_LABEL.to_string()];
        }
        self.slices.iter().map(|s| s.label.clone()).collect()
    }

    /// Slice values in label order
    pub fn values(&self) -> Vec<f64> {
        self.slices.iter().map(|s| s.amount).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::compute_projection;

    #[test]
    fn test_calendar_labels() {
        assert_eq!(month_labels(1)[0], "Jan");
        assert_eq!(month_labels(1)[11], "Dec");
    }

    #[test]
    fn test_rotated_labels() {
        let labels = month_labels(10);
        assert_eq!(labels.len(), 12);
        assert_eq!(&labels[..4], &["Oct", "Nov", "Dec", "Jan"]);
        assert_eq!(labels[11], "Sep");
    }

    #[test]
    fn test_out_of_range_start_month_wraps() {
        assert_eq!(month_labels(0), month_labels(1));
        assert_eq!(month_labels(13), month_labels(1));
        assert_eq!(month_labels(14)[0], "Feb");
    }

    #[test]
    fn test_chart_series_order_and_data() {
        let projection = compute_projection(3000.0, &[Expense::new("Rent", "1000")], 0.0);
        let chart = ProjectionChart::calendar(&projection);

        let names: Vec<_> = chart.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec![SAVINGS_SERIES, EXPENSES_SERIES, INVESTMENT_SERIES]);

        let expenses = chart.series_named(EXPENSES_SERIES).unwrap();
        assert_eq!(expenses.data, projection.expense_totals);
        assert_eq!(chart.max_value(), 24000.0);
    }

    #[test]
    fn test_current_month_chart_has_twelve_labels() {
        let projection = compute_projection(100.0, &[], 0.0);
        let chart = ProjectionChart::starting_current_month(&projection);
        assert_eq!(chart.categories.len(), 12);
        assert_eq!(
            chart.categories[0],
            MONTH_ABBREVIATIONS[Local::now().month0() as usize]
        );
    }

    #[test]
    fn test_breakdown() {
        let expenses = vec![
            Expense::new("Rent", "750"),
            Expense::new("", "250"),
            Expense::new("Typo", "n/a"),
        ];
        let breakdown = ExpenseBreakdown::from_expenses(&expenses);

        assert_eq!(breakdown.total, 1000.0);
        assert_eq!(breakdown.labels(), vec!["Rent", "Unknown", "Typo"]);
        assert_eq!(breakdown.values(), vec![750.0, 250.0, 0.0]);
        assert_eq!(breakdown.slices[0].share, 75.0);
        assert_eq!(breakdown.slices[2].share, 0.0);
    }

    #[test]
    fn test_empty_breakdown_placeholder() {
        let breakdown = ExpenseBreakdown::from_expenses(&[]);
        assert!(breakdown.is_empty());
        assert_eq!(breakdown.labels(), vec![NO_EXPENSES_LABEL]);
        assert!(breakdown.values().is_empty());
    }
}
