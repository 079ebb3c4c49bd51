//! Expense display formatting

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};

use super::format::{format_amount, format_bar, format_percentage, truncate};
use crate::models::{total_monthly_expenses, Expense};
use crate::projection::ExpenseBreakdown;

const DESCRIPTION_WIDTH: usize = 40;
const BREAKDOWN_BAR_WIDTH: usize = 20;

/// Format the expense list as a numbered table with a total row
pub fn format_expense_list(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["#", "ID", "Name", "Cost", "Description"]);

    for (i, expense) in expenses.iter().enumerate() {
        let cost = if expense.cost.is_numeric() {
            format_amount(expense.amount(), symbol)
        } else {
            format!("{} (\"{}\")", format_amount(0.0, symbol), expense.cost)
        };
        builder.push_record([
            (i + 1).to_string(),
            expense.id.short(),
            expense.display_name().to_string(),
            cost,
            truncate(expense.description.as_deref().unwrap_or(""), DESCRIPTION_WIDTH),
        ]);
    }

    builder.push_record([
        String::new(),
        String::new(),
        "TOTAL".to_string(),
        format_amount(total_monthly_expenses(expenses), symbol),
        String::new(),
    ]);

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(3)).with(Alignment::right()));
    table.to_string()
}

/// Format a single expense's details
pub fn format_expense_details(expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense: {}\n", expense.display_name()));
    output.push_str(&format!("  ID:          {}\n", expense.id));
    output.push_str(&format!(
        "  Cost:        {}\n",
        format_amount(expense.amount(), symbol)
    ));
    if let Some(description) = &expense.description {
        output.push_str(&format!("  Description: {}\n", description));
    }
    output
}

/// Format the expense breakdown with proportional bars
pub fn format_breakdown(breakdown: &ExpenseBreakdown, symbol: &str) -> String {
    if breakdown.is_empty() {
        return breakdown.labels().join("\n");
    }

    let label_width = breakdown
        .slices
        .iter()
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    for slice in &breakdown.slices {
        output.push_str(&format!(
            "{:<label_width$}  {}  {:>12}  {:>5}\n",
            slice.label,
            format_bar(slice.share, 100.0, BREAKDOWN_BAR_WIDTH),
            format_amount(slice.amount, symbol),
            format_percentage(slice.share),
            label_width = label_width,
        ));
    }
    output.push_str(&format!(
        "{:<label_width$}  {}  {:>12}\n",
        "Total",
        " ".repeat(BREAKDOWN_BAR_WIDTH),
        format_amount(breakdown.total, symbol),
        label_width = label_width,
    ));

    output
}
