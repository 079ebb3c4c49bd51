//! CSV Export functionality
//!
//! Exports the projected months to a spreadsheet-compatible CSV file.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::projection::FinancialProjection;

/// Column headers of the projection CSV
pub const CSV_HEADER: [&str; 4] = [
    "Month",
    "Total Expenses",
    "Savings Balance",
    "Investment Balance",
];

/// Export the projected months to CSV, one row per month
///
/// Rows are labelled with `months`; missing labels fall back to the month
/// number.
pub fn export_projection_csv<W: Write>(
    projection: &FinancialProjection,
    months: &[String],
    writer: W,
) -> BudgetResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    for row in projection.rows() {
        let label = row.label(months);
        csv_writer.write_record([
            label,
            format!("{:.2}", row.expense_total),
            format!("{:.2}", row.savings),
            format!("{:.2}", row.investment),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use crate::projection::{compute_projection, month_labels};

    #[test]
    fn test_csv_export() {
        let projection = compute_projection(3000.0, &[Expense::new("Rent", "1000")], 0.0);
        let mut buffer = Vec::new();
        export_projection_csv(&projection, &month_labels(1), &mut buffer).unwrap();

        let csv_string = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv_string.lines().collect();

        assert_eq!(lines.len(), 13);
        assert_eq!(
            lines[0],
            "Month,Total Expenses,Savings Balance,Investment Balance"
        );
        assert_eq!(lines[1], "Jan,1000.00,2000.00,0.00");
        assert_eq!(lines[12], "Dec,12000.00,24000.00,0.00");
    }

    #[test]
    fn test_csv_without_labels_uses_month_numbers() {
        let projection = compute_projection(100.0, &[], 0.0);
        let mut buffer = Vec::new();
        export_projection_csv(&projection, &[], &mut buffer).unwrap();

        let csv_string = String::from_utf8(buffer).unwrap();
        assert!(csv_string.lines().nth(1).unwrap().starts_with("1,"));
        assert!(csv_string.lines().nth(12).unwrap().starts_with("12,"));
    }

    #[test]
    fn test_csv_rotated_start_month() {
        let projection = compute_projection(3000.0, &[Expense::new("Rent", "1000")], 0.0);
        let mut buffer = Vec::new();
        export_projection_csv(&projection, &month_labels(10), &mut buffer).unwrap();

        let csv_string = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = csv_string.lines().collect();

        assert_eq!(lines.len(), 13);
        assert_eq!(lines[1], "Oct,1000.00,2000.00,0.00");
        assert_eq!(lines[4], "Jan,4000.00,8000.00,0.00");
        assert_eq!(lines[12], "Sep,12000.00,24000.00,0.00");
    }
}
