//! Projection display formatting
//!
//! Renders the twelve-month projection as a table, a text chart, and a
//! summary block.

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};

use super::format::{format_amount, format_bar, format_percentage, separator};
use crate::projection::{BudgetSummary, FinancialProjection, ProjectionChart};

/// Width of the bars in the text chart
const CHART_BAR_WIDTH: usize = 30;

/// Format the projection as a month-by-month table
pub fn format_projection_table(
    projection: &FinancialProjection,
    month_labels: &[String],
    symbol: &str,
) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Month", "Total Expenses", "Savings", "Investment"]);

    for row in projection.rows() {
        let label = row.label(month_labels);
        builder.push_record([
            label,
            format_amount(row.expense_total, symbol),
            format_amount(row.savings, symbol),
            format_amount(row.investment, symbol),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()));
    table.to_string()
}

/// Format the chart series as horizontal bars, one block per series
pub fn format_chart(chart: &ProjectionChart, symbol: &str) -> String {
    let max_value = chart.max_value();
    let label_width = chart
        .categories
        .iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(3);

    let mut output = String::new();
    for series in &chart.series {
        output.push_str(&format!("{}\n", series.name));
        output.push_str(&format!("{}\n", separator(series.name.chars().count())));

        for (label, value) in chart.categories.iter().zip(series.data.iter()) {
            output.push_str(&format!(
                "{:<label_width$}  {}  {}\n",
                label,
                format_bar(*value, max_value, CHART_BAR_WIDTH),
                format_amount(*value, symbol),
                label_width = label_width,
            ));
        }
        output.push('\n');
    }

    output.trim_end().to_string()
}

/// Format the summary block
pub fn format_summary(summary: &BudgetSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("Monthly Budget\n");
    output.push_str(&format!("{}\n", separator(40)));
    output.push_str(&format!(
        "  Income:               {:>16}\n",
        format_amount(summary.income, symbol)
    ));
    output.push_str(&format!(
        "  Expenses:             {:>16}\n",
        format_amount(summary.total_monthly_expenses, symbol)
    ));
    output.push_str(&format!(
        "  Remaining:            {:>16}\n",
        format_amount(summary.remaining_balance, symbol)
    ));
    output.push_str(&format!(
        "  Invested ({:>4}):      {:>16}\n",
        format_percentage(summary.investment_percentage),
        format_amount(summary.monthly_investment, symbol)
    ));
    output.push_str(&format!(
        "  Saved:                {:>16}\n",
        format_amount(summary.monthly_savings, symbol)
    ));

    output.push_str("\nAfter 12 Months\n");
    output.push_str(&format!("{}\n", separator(40)));
    output.push_str(&format!(
        "  Total expenses:       {:>16}\n",
        format_amount(summary.expenses_at_year_end, symbol)
    ));
    output.push_str(&format!(
        "  Savings:              {:>16}\n",
        format_amount(summary.savings_at_year_end, symbol)
    ));
    output.push_str(&format!(
        "  Investment:           {:>16}\n",
        format_amount(summary.investment_at_year_end, symbol)
    ));
    output.push_str(&format!(
        "    contributed:        {:>16}\n",
        format_amount(summary.investment_contributed, symbol)
    ));
    output.push_str(&format!(
        "    growth:             {:>16}\n",
        format_amount(summary.investment_growth, symbol)
    ));
    output.push_str(&format!(
        "  Net worth:            {:>16}\n",
        format_amount(summary.net_worth_at_year_end(), symbol)
    ));

    if summary.is_overspending() {
        output.push_str("\nWarning: monthly expenses exceed income.\n");
    }

    output
}
